use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// Deck extends much of Hand functionality, with the ability to remove cards
/// from itself. Random selection via ::draw() always takes the caller's RNG so
/// that a seeded solve replays the exact same deal sequence.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::full())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// remove every card of a hand from the deck
    pub fn exclude(&mut self, hand: Hand) {
        self.0 = Hand::from(u64::from(self.0) & !u64::from(hand));
    }
    /// remove a uniformly random card from the deck
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        assert!(self.0.size() > 0);
        let n = rng.random_range(0..self.0.size());
        let mut deck = u64::from(self.0);
        for _ in 0..n {
            deck &= deck - 1;
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }
    /// remove n uniformly random cards from the deck
    pub fn deal<R: Rng>(&mut self, n: usize, rng: &mut R) -> Hand {
        (0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}
