use crate::Position;

/// whose turn it is. two seats take turns until the game is over.
pub trait TreeTurn: Clone + Copy + PartialEq + Eq + std::hash::Hash + std::fmt::Debug {
    /// the turn of a finished game
    fn terminal() -> Self;
    /// seat index of the acting player. only defined off terminal.
    fn position(&self) -> Position;
}
