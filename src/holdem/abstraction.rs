use super::action::Action;
use super::game::Game;
use super::info::Info;
use super::turn::Turn;
use crate::mccfr::Encoder;
use crate::mccfr::TreeGame;
use crate::mccfr::TreeTurn;

/// Buckets the acting player's hand by its (category, primary rank)
/// on the sampled board. Opponent cards never enter the key.
#[derive(Debug, Default, Clone, Copy)]
pub struct Abstraction;

impl Encoder for Abstraction {
    type T = Turn;
    type E = Action;
    type G = Game;
    type I = Info;
    fn info(&self, game: &Self::G) -> Self::I {
        let turn = game.turn();
        Info::from((turn, game.strength(turn.position()), game.history()))
    }
}
