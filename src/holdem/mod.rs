//! Heads-up Hold'em reduced to one decision point with one bet size.
//!
//! The hero acts first with check or bet. Facing a bet, the other player
//! folds or calls. There are no raises. Everything the players cannot see
//! (opponent cards, the rest of the board) is sampled per iteration by the
//! [`Sampler`], and each [`Deal`] is walked as a deterministic [`Game`].

pub mod abstraction;
pub mod action;
pub mod deal;
pub mod game;
pub mod history;
pub mod info;
pub mod sampler;
pub mod session;
pub mod solver;
pub mod spot;
pub mod turn;

pub use abstraction::*;
pub use action::*;
pub use deal::*;
pub use game::*;
pub use history::*;
pub use info::*;
pub use sampler::*;
pub use session::*;
pub use solver::*;
pub use spot::*;
pub use turn::*;
