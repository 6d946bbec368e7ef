/// the edge is fully abstracted. it is basically a marker trait
pub trait TreeEdge:
    Copy
    + Clone
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + std::hash::Hash
    + std::fmt::Debug
    + std::fmt::Display
{
}
