use super::session::Session;
use crate::Chips;
use crate::Probability;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Street;

/// A validated decision point: the hero's cards, the known board, and
/// the money behind the one allowed bet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    street: Option<Street>,
    hole: Hole,
    board: Board,
    pot: Chips,
    stack: Chips,
    fraction: Probability,
}

impl Spot {
    pub fn new(
        hole: Hole,
        board: Board,
        pot: Chips,
        stack: Chips,
        fraction: Probability,
    ) -> anyhow::Result<Self> {
        let overlap = u64::from(Hand::from(hole)) & u64::from(Hand::from(board));
        if overlap != 0 {
            return Err(anyhow::anyhow!(
                "card {} appears in both hole and board",
                Hand::from(overlap)
            ));
        }
        Ok(Self {
            street: None,
            hole,
            board,
            pot,
            stack,
            fraction,
        })
    }
    /// parse whitespace separated tokens, e.g. ("As Ah", "2c 7d 9h")
    pub fn parse(
        hole: &str,
        board: &str,
        pot: Chips,
        stack: Chips,
        fraction: Probability,
    ) -> anyhow::Result<Self> {
        Self::new(
            Hole::try_from(hole)?,
            Board::try_from(board)?,
            pot,
            stack,
            fraction,
        )
    }
    /// parse one token per card, as they arrive in a request body
    pub fn tokens<S: AsRef<str>>(
        hole: &[S],
        board: &[S],
        pot: Chips,
        stack: Chips,
        fraction: Probability,
    ) -> anyhow::Result<Self> {
        let cards = |tokens: &[S]| {
            tokens
                .iter()
                .map(|t| Card::try_from(t.as_ref()).map_err(|e| anyhow::anyhow!(e)))
                .collect::<anyhow::Result<Vec<Card>>>()
        };
        Self::new(
            Hole::try_from(cards(hole)?.as_slice())?,
            Board::try_from(cards(board)?.as_slice())?,
            pot,
            stack,
            fraction,
        )
    }
    pub fn with_street(self, street: Street) -> Self {
        Self {
            street: Some(street),
            ..self
        }
    }

    pub fn street(&self) -> Option<Street> {
        self.street
    }
    pub fn hole(&self) -> Hole {
        self.hole
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn session(&self) -> Session {
        Session::new(self.pot, self.stack, self.fraction)
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}] on [{}] pot {:.2} stack {:.2}",
            self.hole, self.board, self.pot, self.stack
        )
    }
}
