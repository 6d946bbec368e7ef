use super::profile::Profile;
use super::traits::*;
use crate::Probability;
use crate::Utility;

/// reach probabilities of seat 0 and seat 1
pub type Reach = [Probability; 2];

/// One counterfactual regret update over the subtree rooted at `game`.
///
/// Returns the expected utility to seat 0 under the current strategies.
/// Every decision node visited gets its strategy weight accumulated with
/// the acting seat's reach and its regrets accumulated with the other
/// seat's reach. Utilities stay in seat 0's frame at both seats, and
/// regrets are the child-minus-node difference in that frame.
pub fn traverse<S>(encoder: &S, profile: &mut Profile<S::I>, game: &S::G, reach: Reach) -> Utility
where
    S: Encoder,
{
    if game.turn() == S::T::terminal() {
        return game.payoff();
    }
    let ref info = encoder.info(game);
    let seat = game.turn().position();
    let strategy = profile.strategy(info, reach[seat]);
    let children = strategy
        .iter()
        .map(|(edge, p)| {
            let mut reach = reach;
            reach[seat] *= p;
            traverse(encoder, profile, &game.apply(*edge), reach)
        })
        .collect::<Vec<Utility>>();
    let expected = strategy
        .iter()
        .zip(children.iter())
        .map(|((_, p), u)| p * u)
        .sum::<Utility>();
    let counterfactual = reach[1 - seat];
    for ((edge, _), utility) in strategy.iter().zip(children.iter()) {
        profile.accumulate(info, edge, (utility - expected) * counterfactual);
    }
    expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    /// seat 0 picks a side, seat 1 guesses it. seat 0 wins 1 on a miss.
    #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
    enum Side {
        L,
        R,
    }
    impl std::fmt::Display for Side {
        fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "{:?}", self)
        }
    }
    impl TreeEdge for Side {}

    #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
    enum Seat {
        Hider,
        Seeker,
        Done,
    }
    impl TreeTurn for Seat {
        fn terminal() -> Self {
            Seat::Done
        }
        fn position(&self) -> Position {
            match self {
                Seat::Hider => 0,
                Seat::Seeker => 1,
                Seat::Done => unreachable!(),
            }
        }
    }
    impl std::fmt::Display for Seat {
        fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "{:?}", self)
        }
    }
    impl TreeInfo for Seat {
        type E = Side;
        type T = Seat;
        fn turn(&self) -> Self::T {
            *self
        }
        fn choices(&self) -> Vec<Self::E> {
            vec![Side::L, Side::R]
        }
    }

    /// a missed left hide pays 2, a missed right hide pays 1
    #[derive(Debug, Clone, Copy)]
    struct Hide(Option<Side>, Option<Side>);
    impl TreeGame for Hide {
        type E = Side;
        type T = Seat;
        fn turn(&self) -> Self::T {
            match self {
                Hide(None, _) => Seat::Hider,
                Hide(Some(_), None) => Seat::Seeker,
                Hide(Some(_), Some(_)) => Seat::Done,
            }
        }
        fn choices(&self) -> Vec<Self::E> {
            vec![Side::L, Side::R]
        }
        fn apply(&self, edge: Self::E) -> Self {
            match self {
                Hide(None, _) => Hide(Some(edge), None),
                Hide(hider, _) => Hide(*hider, Some(edge)),
            }
        }
        fn payoff(&self) -> Utility {
            match self {
                Hide(Some(Side::L), Some(Side::R)) => 2.,
                Hide(Some(Side::R), Some(Side::L)) => 1.,
                _ => 0.,
            }
        }
    }

    /// hider and seeker share no information besides their seat
    struct Blind;
    impl Encoder for Blind {
        type T = Seat;
        type E = Side;
        type G = Hide;
        type I = Seat;
        fn info(&self, game: &Self::G) -> Self::I {
            game.turn()
        }
    }

    #[test]
    fn terminal_returns_payoff() {
        let mut profile = Profile::default();
        let game = Hide(Some(Side::L), Some(Side::R));
        assert_eq!(traverse(&Blind, &mut profile, &game, [1., 1.]), 2.);
        assert!(profile.is_empty());
    }

    #[test]
    fn first_pass_root_value() {
        let mut profile = Profile::default();
        let value = traverse(&Blind, &mut profile, &Hide(None, None), [1., 1.]);
        assert!((value - 0.5).abs() < 1e-6);
        assert_eq!(profile.len(), 2);
    }

    /// the seeker node is shared across both hider branches, so the
    /// right branch already plays the seeker's updated strategy
    #[test]
    fn first_pass_regrets() {
        let mut profile = Profile::default();
        traverse(&Blind, &mut profile, &Hide(None, None), [1., 1.]);
        let hider = profile.get(&Seat::Hider).unwrap();
        let l = hider.memory(&Side::L).unwrap().regret();
        let r = hider.memory(&Side::R).unwrap().regret();
        assert!((l - 0.5).abs() < 1e-6);
        assert!((r + 0.5).abs() < 1e-6);
        assert!((hider.weight() - 1.).abs() < 1e-6);
    }

    #[test]
    fn strategies_stay_distributions() {
        let mut profile = Profile::default();
        for _ in 0..200 {
            traverse(&Blind, &mut profile, &Hide(None, None), [1., 1.]);
            profile.increment();
        }
        for (_, node) in profile.iter() {
            let average = node.average();
            assert_eq!(average.len(), 2);
            assert!(average.iter().all(|(_, p)| *p >= 0.));
            let total = average.iter().map(|(_, p)| p).sum::<Probability>();
            assert!((total - 1.).abs() < 1e-4);
        }
        assert_eq!(profile.epochs(), 200);
    }
}
