use super::action::Action;

/// The actions taken so far, packed into nibbles of a u16.
///
/// Each action occupies 4 bits (values 1..=4, 0 is empty), first action
/// in the lowest nibble. The bet tree is at most three actions deep so
/// this never overflows. Dispatch always goes through the real actions;
/// the letter form exists only for information-set keys and display.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct History(u16);

impl History {
    const MAX: usize = 4;

    pub fn root() -> Self {
        Self(0)
    }
    pub fn length(&self) -> usize {
        (16 + 3 - self.0.leading_zeros() as usize) / 4
    }
    pub fn push(&self, action: Action) -> Self {
        assert!(self.length() < Self::MAX);
        Self(self.0 | (u8::from(action) as u16) << (4 * self.length()))
    }
    pub fn actions(&self) -> Vec<Action> {
        self.into_iter().collect()
    }
    /// legal actions: check or bet until someone bets, then fold or call
    pub fn choices(&self) -> Vec<Action> {
        match self.actions().as_slice() {
            [] | [Action::Check] => vec![Action::Check, Action::Bet],
            [Action::Bet] | [Action::Check, Action::Bet] => vec![Action::Fold, Action::Call],
            _ => vec![],
        }
    }
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.actions().as_slice(),
            [Action::Bet, Action::Call]
                | [Action::Check, Action::Bet, Action::Call]
                | [Action::Bet, Action::Fold]
                | [Action::Check, Action::Bet, Action::Fold]
                | [Action::Check, Action::Check]
        )
    }
    /// one letter per action, e.g. "cb"
    pub fn letters(&self) -> String {
        self.into_iter().map(|a| a.letter()).collect()
    }
}

/// pop actions off the front
impl Iterator for History {
    type Item = Action;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 & 0xF {
            0 => None,
            n => {
                self.0 >>= 4;
                Some(Action::from(n as u8))
            }
        }
    }
}

impl FromIterator<Action> for History {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        iter.into_iter().fold(Self::root(), |h, a| h.push(a))
    }
}

/// Vec<Action> isomorphism
impl From<Vec<Action>> for History {
    fn from(actions: Vec<Action>) -> Self {
        actions.into_iter().collect()
    }
}
impl From<History> for Vec<Action> {
    fn from(history: History) -> Self {
        history.actions()
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letters())
    }
}
