use super::*;
use crate::Utility;

/// the tree-local game state is fully abstracted. it must be implemented
/// by the consumer of this MCCFR API.
///
/// the implementation must be able to determine:
///  whose turn is it (have a Turn function)
///  which edges are legal from here
///  how much the game pays the first seat (only defined at leaves)
///
/// hidden information (dealt cards) is already fixed inside the state,
/// so walking the tree never branches on chance.
pub trait TreeGame: Clone + Copy {
    type E: TreeEdge;
    type T: TreeTurn;
    fn turn(&self) -> Self::T;
    fn choices(&self) -> Vec<Self::E>;
    fn apply(&self, edge: Self::E) -> Self;
    /// utility to seat 0, whichever seat acted last
    fn payoff(&self) -> Utility;
}
