use crate::mccfr::TreeEdge;

/// The four moves of the single-bet tree.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    Check,
    Bet,
    Fold,
    Call,
}

impl Action {
    pub const fn all() -> [Action; 4] {
        [Action::Check, Action::Bet, Action::Fold, Action::Call]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Action::Check => "check",
            Action::Bet => "bet",
            Action::Fold => "fold",
            Action::Call => "call",
        }
    }
    /// first letter of the name. check and call share 'c', so letters
    /// identify information sets but never drive the game.
    pub const fn letter(&self) -> char {
        match self {
            Action::Check | Action::Call => 'c',
            Action::Bet => 'b',
            Action::Fold => 'f',
        }
    }
}

/// u8 isomorphism, 0 is reserved for the empty nibble
impl From<Action> for u8 {
    fn from(action: Action) -> Self {
        match action {
            Action::Check => 1,
            Action::Bet => 2,
            Action::Fold => 3,
            Action::Call => 4,
        }
    }
}
impl From<u8> for Action {
    fn from(n: u8) -> Self {
        match n {
            1 => Action::Check,
            2 => Action::Bet,
            3 => Action::Fold,
            4 => Action::Call,
            _ => unreachable!("invalid action nibble: {}", n),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Action::all()
            .into_iter()
            .find(|a| a.name() == s.trim().to_lowercase())
            .ok_or_else(|| anyhow::anyhow!("invalid action: {}", s))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TreeEdge for Action {}
