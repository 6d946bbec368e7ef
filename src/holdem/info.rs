use super::action::Action;
use super::history::History;
use super::turn::Turn;
use crate::cards::Rank;
use crate::cards::Strength;
use crate::mccfr::TreeInfo;

/// What the acting player knows: their seat, how strong their hand is
/// on the sampled board, and the betting so far.
///
/// Strength is bucketed to (category, primary rank), so every deal that
/// lands in the same bucket with the same history shares one node.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Info {
    turn: Turn,
    category: u8,
    primary: Rank,
    history: History,
}

impl Info {
    pub fn category(&self) -> u8 {
        self.category
    }
    pub fn primary(&self) -> Rank {
        self.primary
    }
    pub fn history(&self) -> History {
        self.history
    }
    pub fn is_root(&self) -> bool {
        self.history == History::root()
    }
}

impl From<(Turn, Strength, History)> for Info {
    fn from((turn, strength, history): (Turn, Strength, History)) -> Self {
        Self {
            turn,
            category: strength.category(),
            primary: strength.primary(),
            history,
        }
    }
}

impl TreeInfo for Info {
    type E = Action;
    type T = Turn;
    fn turn(&self) -> Self::T {
        self.turn
    }
    fn choices(&self) -> Vec<Self::E> {
        self.history.choices()
    }
}

/// P0|1|A|cb
impl std::fmt::Display for Info {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.turn, self.category, self.primary, self.history
        )
    }
}
