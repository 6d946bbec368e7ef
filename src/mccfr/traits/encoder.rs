use super::*;

/// abstraction lives here. the encoder decides how coarsely game
/// states collapse onto shared information sets.
pub trait Encoder {
    type T: TreeTurn;
    type E: TreeEdge;
    type G: TreeGame<E = Self::E, T = Self::T>;
    type I: TreeInfo<E = Self::E, T = Self::T>;
    fn info(&self, game: &Self::G) -> Self::I;
}
