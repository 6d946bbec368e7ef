//! Abstractions a game implements to be solved by counterfactual regret minimization.
//!
//! - `TreeTurn`: whose move it is, or that the game is over
//! - `TreeEdge`: an action connecting two game states
//! - `TreeGame`: the local game state with its rules and payoffs
//! - `TreeInfo`: the information set an acting player sees
//! - `Encoder`: maps a game state to its information set

mod edge;
mod encoder;
mod game;
mod info;
mod turn;

pub use edge::*;
pub use encoder::*;
pub use game::*;
pub use info::*;
pub use turn::*;
