use super::history::History;
use crate::Position;
use crate::mccfr::TreeTurn;

/// Hero acts first at seat 0, villain answers at seat 1.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Turn {
    Hero,
    Villain,
    Terminal,
}

impl TreeTurn for Turn {
    fn terminal() -> Self {
        Turn::Terminal
    }
    fn position(&self) -> Position {
        match self {
            Turn::Hero => 0,
            Turn::Villain => 1,
            Turn::Terminal => unreachable!("terminal has no acting seat"),
        }
    }
}

/// whose move follows a history: terminal first, then by parity
impl From<History> for Turn {
    fn from(history: History) -> Self {
        match (history.is_terminal(), history.length() % 2) {
            (true, _) => Turn::Terminal,
            (false, 0) => Turn::Hero,
            (false, _) => Turn::Villain,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Turn::Hero => write!(f, "P0"),
            Turn::Villain => write!(f, "P1"),
            Turn::Terminal => write!(f, "--"),
        }
    }
}
