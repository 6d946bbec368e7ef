//! Game-agnostic Monte-Carlo CFR machinery.
//!
//! A game plugs in through the traits in [`traits`]; [`traverse`] walks
//! one sampled game tree and updates the [`Profile`] it is handed.
//! Nothing here holds global state, so concurrent solves each own
//! their own Profile.

pub mod counterfactual;
pub mod memory;
pub mod node;
pub mod profile;
pub mod traits;

pub use counterfactual::*;
pub use memory::*;
pub use node::*;
pub use profile::*;
pub use traits::*;
