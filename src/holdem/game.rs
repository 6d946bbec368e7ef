use super::action::Action;
use super::deal::Deal;
use super::history::History;
use super::session::Session;
use super::turn::Turn;
use crate::Chips;
use crate::Position;
use crate::Utility;
use crate::cards::Outcome;
use crate::cards::Strength;
use crate::mccfr::TreeGame;

/// A node of the bet tree for one sampled deal.
///
/// Both best hands are evaluated once per deal, so walking the tree
/// only ever appends to the history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Game {
    strengths: [Strength; 2],
    history: History,
    pot: Chips,
    bet: Chips,
}

impl Game {
    pub fn history(&self) -> History {
        self.history
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn bet(&self) -> Chips {
        self.bet
    }
    /// best hand of the player at this seat
    pub fn strength(&self, position: Position) -> Strength {
        self.strengths[position]
    }
    pub fn outcome(&self) -> Outcome {
        crate::cards::Showdown::compare(self.strengths[0], self.strengths[1])
    }
}

impl From<(Deal, Session)> for Game {
    fn from((deal, session): (Deal, Session)) -> Self {
        let showdown = deal.showdown();
        Self {
            strengths: [showdown.hero(), showdown.villain()],
            history: History::root(),
            pot: session.pot(),
            bet: session.bet(),
        }
    }
}

impl TreeGame for Game {
    type E = Action;
    type T = Turn;

    fn turn(&self) -> Self::T {
        Turn::from(self.history)
    }
    fn choices(&self) -> Vec<Self::E> {
        self.history.choices()
    }
    fn apply(&self, edge: Self::E) -> Self {
        assert!(self.choices().contains(&edge), "{} illegal after '{}'", edge, self.history);
        Self {
            history: self.history.push(edge),
            ..*self
        }
    }
    fn payoff(&self) -> Utility {
        use Action::*;
        match self.history.actions().as_slice() {
            [Bet, Call] | [Check, Bet, Call] => self.outcome().sign() * (self.pot + self.bet),
            [Bet, Fold] => self.pot,
            [Check, Bet, Fold] => -self.pot,
            [Check, Check] => self.outcome().sign() * self.pot,
            _ => unreachable!("payoff at non-terminal history '{}'", self.history),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Board;
    use crate::cards::Hole;
    use crate::mccfr::TreeTurn;
    use Action::*;

    fn game(hero: &str, villain: &str, board: &str) -> Game {
        let deal = Deal::from((
            Hole::try_from(hero).unwrap(),
            Hole::try_from(villain).unwrap(),
            Board::try_from(board).unwrap(),
        ));
        Game::from((deal, Session::new(10., 100., 1.0)))
    }

    fn play(game: Game, actions: &[Action]) -> Game {
        actions.iter().fold(game, |g, a| g.apply(*a))
    }

    const BOARD: &str = "2c 7d 9h Jc Kc";

    #[rustfmt::skip]
    #[test]
    fn winner_payoffs() {
        let g = game("As Ah", "Qs Qh", BOARD);
        assert_eq!(play(g, &[Bet, Call]).payoff(),         20.);
        assert_eq!(play(g, &[Check, Bet, Call]).payoff(),  20.);
        assert_eq!(play(g, &[Bet, Fold]).payoff(),         10.);
        assert_eq!(play(g, &[Check, Bet, Fold]).payoff(), -10.);
        assert_eq!(play(g, &[Check, Check]).payoff(),      10.);
    }

    #[rustfmt::skip]
    #[test]
    fn loser_payoffs() {
        let g = game("Qs Qh", "As Ah", BOARD);
        assert_eq!(play(g, &[Bet, Call]).payoff(),        -20.);
        assert_eq!(play(g, &[Check, Bet, Call]).payoff(), -20.);
        assert_eq!(play(g, &[Check, Check]).payoff(),     -10.);
    }

    #[test]
    fn fold_equity_ignores_strength() {
        let g = game("3s 4h", "As Ah", BOARD);
        assert_eq!(g.outcome(), Outcome::Lose);
        assert_eq!(play(g, &[Bet, Fold]).payoff(), g.pot());
        assert_eq!(play(g, &[Check, Bet, Fold]).payoff(), -g.pot());
    }

    #[test]
    fn split_pot_pays_nothing() {
        let g = game("2s 3h", "2d 3d", "Tc Jd Qh Kc Ac");
        assert_eq!(play(g, &[Bet, Call]).payoff(), 0.);
        assert_eq!(play(g, &[Check, Check]).payoff(), 0.);
    }

    #[test]
    fn turns_follow_history() {
        let g = game("As Ah", "Qs Qh", BOARD);
        assert_eq!(g.turn(), Turn::Hero);
        assert_eq!(g.apply(Check).turn(), Turn::Villain);
        assert_eq!(play(g, &[Check, Bet]).turn(), Turn::Hero);
        assert_eq!(play(g, &[Check, Bet, Call]).turn(), Turn::terminal());
    }

    #[test]
    #[should_panic]
    fn illegal_action_panics() {
        game("As Ah", "Qs Qh", BOARD).apply(Call);
    }

    #[test]
    fn terminal_magnitudes_are_pot_or_pot_plus_bet() {
        let deals = [
            game("As Ah", "Qs Qh", BOARD),
            game("Qs Qh", "As Ah", BOARD),
            game("2s 3h", "2d 3d", "Tc Jd Qh Kc Ac"),
        ];
        for g in deals {
            for actions in [
                vec![Bet, Call],
                vec![Bet, Fold],
                vec![Check, Check],
                vec![Check, Bet, Call],
                vec![Check, Bet, Fold],
            ] {
                let u = play(g, &actions).payoff().abs();
                assert!(u == 0. || u == g.pot() || u == g.pot() + g.bet());
            }
        }
    }
}
