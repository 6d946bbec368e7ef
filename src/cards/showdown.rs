use super::hand::Hand;
use super::strength::Strength;
use crate::Utility;
use std::cmp::Ordering;

/// Result of a heads-up showdown from the hero's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// +1, -1 or 0, the multiplier applied to the amount at stake
    pub fn sign(&self) -> Utility {
        match self {
            Outcome::Win => 1.,
            Outcome::Lose => -1.,
            Outcome::Tie => 0.,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(order: Ordering) -> Self {
        match order {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Lose,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Two best hands facing off over the same board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    hero: Strength,
    villain: Strength,
}

impl Showdown {
    /// Ties only on exact strength equality, i.e. a true split.
    pub fn compare(hero: Strength, villain: Strength) -> Outcome {
        Outcome::from(hero.cmp(&villain))
    }
    pub fn hero(&self) -> Strength {
        self.hero
    }
    pub fn villain(&self) -> Strength {
        self.villain
    }
    pub fn outcome(&self) -> Outcome {
        Self::compare(self.hero, self.villain)
    }
}

/// (hero seven, villain seven)
impl From<(Hand, Hand)> for Showdown {
    fn from((hero, villain): (Hand, Hand)) -> Self {
        Self {
            hero: Strength::best(hero),
            villain: Strength::best(villain),
        }
    }
}
