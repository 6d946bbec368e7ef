use super::card::Card;
use super::hand::Hand;

/// A player's two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b);
        Self(Hand::from(vec![a, b]))
    }
}

/// the only fallible way in: exactly two distinct cards
impl TryFrom<Hand> for Hole {
    type Error = anyhow::Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            2 => Ok(Self(hand)),
            n => Err(anyhow::anyhow!("hole must be exactly 2 cards, got {}", n)),
        }
    }
}
impl TryFrom<&[Card]> for Hole {
    type Error = anyhow::Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            [a, b] if a == b => Err(anyhow::anyhow!("duplicate hole card {}", a)),
            [a, b] => Ok(Self::from((*a, *b))),
            _ => Err(anyhow::anyhow!(
                "hole must be exactly 2 cards, got {}",
                cards.len()
            )),
        }
    }
}
impl TryFrom<&str> for Hole {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s).map_err(|e| anyhow::anyhow!(e))?;
        Self::try_from(cards.as_slice())
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
