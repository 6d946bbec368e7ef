use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// The community cards: none preflop, up to five by the river.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Board(Hand);

impl Board {
    pub const MAX: usize = 5;

    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// cards still to come before showdown
    pub fn missing(&self) -> usize {
        Self::MAX - self.size()
    }
    pub fn is_complete(&self) -> bool {
        self.missing() == 0
    }
    /// the street implied by how many cards are showing
    pub fn street(&self) -> Street {
        match self.size() {
            0..=2 => Street::Pref,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::Rive,
        }
    }
    /// fill the board with run-out cards
    pub fn complete(&self, runout: Hand) -> Self {
        let board = Hand::add(self.0, runout);
        assert!(board.size() == Self::MAX);
        Self(board)
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl TryFrom<Hand> for Board {
    type Error = anyhow::Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            n if n <= Self::MAX => Ok(Self(hand)),
            n => Err(anyhow::anyhow!("board cannot exceed 5 cards, got {}", n)),
        }
    }
}
impl TryFrom<&[Card]> for Board {
    type Error = anyhow::Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        if cards.len() > Self::MAX {
            return Err(anyhow::anyhow!(
                "board cannot exceed 5 cards, got {}",
                cards.len()
            ));
        }
        let hand = Hand::from(cards.to_vec());
        match hand.size() == cards.len() {
            true => Ok(Self(hand)),
            false => Err(anyhow::anyhow!("duplicate board cards in {:?}", cards)),
        }
    }
}
impl TryFrom<&str> for Board {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s).map_err(|e| anyhow::anyhow!(e))?;
        Self::try_from(cards.as_slice())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
