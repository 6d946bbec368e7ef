use super::*;

/// the information bucket is fully abstracted. it must be implemented
/// by the consumer of this MCCFR API.
///
/// the implementation must be able to determine:
///  what possible Edges may emerge from this Node (Decision)
///
/// distinct game states that share an Info share one regret accumulator.
pub trait TreeInfo:
    Clone + Copy + PartialEq + Eq + PartialOrd + Ord + std::hash::Hash + std::fmt::Debug + std::fmt::Display
{
    type E: TreeEdge;
    type T: TreeTurn;
    fn turn(&self) -> Self::T;
    fn choices(&self) -> Vec<Self::E>;
}
