use super::abstraction::Abstraction;
use super::action::Action;
use super::game::Game;
use super::info::Info;
use super::sampler::Sampler;
use super::session::Session;
use super::spot::Spot;
use crate::CFR_ITERATIONS;
use crate::CFR_OPPONENT_SAMPLES;
use crate::Chips;
use crate::Probability;
use crate::mccfr::Memory;
use crate::mccfr::Policy;
use crate::mccfr::Profile;
use crate::mccfr::traverse;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-call knobs. Iterations always run to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub iterations: usize,
    pub samples: usize,
    /// fixes the sampling stream; None draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            iterations: CFR_ITERATIONS,
            samples: CFR_OPPONENT_SAMPLES,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// defaults overridden by CFR_ITERATIONS and CFR_OPPONENT_SAMPLES
    pub fn from_env() -> Self {
        let read = |key: &str, default: usize| match std::env::var(key) {
            Err(_) => default,
            Ok(value) => value.trim().parse::<usize>().unwrap_or_else(|_| {
                log::warn!("ignoring {}={:?}, using {}", key, value, default);
                default
            }),
        };
        Self {
            iterations: read("CFR_ITERATIONS", CFR_ITERATIONS),
            samples: read("CFR_OPPONENT_SAMPLES", CFR_OPPONENT_SAMPLES),
            seed: None,
        }
    }
}

/// The answer to one solve: hero's root strategy and the bet that was
/// actually solved for. An empty strategy means no strategy is available.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub strategy: BTreeMap<String, Probability>,
    pub bet: Chips,
    pub fraction: Probability,
}

impl Solution {
    pub fn is_empty(&self) -> bool {
        self.strategy.is_empty()
    }
    pub fn get(&self, action: Action) -> Option<Probability> {
        self.strategy.get(action.name()).copied()
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "bet {:.2} ({:.3} pot)", self.bet, self.fraction)?;
        for (action, p) in &self.strategy {
            writeln!(f, "{:<6} {:>6.3}", action, p)?;
        }
        Ok(())
    }
}

/// One Monte-Carlo CFR solve of one spot.
///
/// Owns everything it mutates: the node store, the opponent pool and
/// the random stream. Nothing is shared between solves.
pub struct Solver {
    spot: Spot,
    session: Session,
    config: SolverConfig,
    sampler: Sampler,
    profile: Profile<Info>,
    rng: SmallRng,
}

impl Solver {
    /// Validates before any sampling happens, so a failure leaves no state.
    pub fn new(spot: Spot, config: SolverConfig) -> anyhow::Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let session = spot.session();
        let sampler = Sampler::new(spot.hole(), spot.board(), config.samples, &mut rng)?;
        if let Some(street) = spot.street() {
            if street.n_observed() != spot.board().size() {
                log::warn!(
                    "stage {} does not match {} board cards",
                    street,
                    spot.board().size()
                );
            }
        }
        log::debug!("spot     {}", spot);
        log::debug!("session  {}", session);
        log::debug!("pool     {} opponent holdings", sampler.pool().len());
        Ok(Self {
            spot,
            session,
            config,
            sampler,
            profile: Profile::default(),
            rng,
        })
    }

    /// validate, train, read out
    pub fn solve(spot: Spot, config: SolverConfig) -> anyhow::Result<Solution> {
        let mut solver = Self::new(spot, config)?;
        solver.train();
        Ok(solver.solution())
    }

    pub fn train(&mut self) {
        let start = std::time::Instant::now();
        for _ in 0..self.config.iterations {
            let deal = self.sampler.sample(&mut self.rng);
            let game = Game::from((deal, self.session));
            traverse(&Abstraction, &mut self.profile, &game, [1., 1.]);
            self.profile.increment();
        }
        log::info!(
            "solved {} in {} iterations, {} infosets, {:.2?}",
            self.spot,
            self.profile.epochs(),
            self.profile.len(),
            start.elapsed()
        );
    }

    pub fn profile(&self) -> &Profile<Info> {
        &self.profile
    }
    pub fn session(&self) -> Session {
        self.session
    }

    /// Hero's averaged strategy at the root.
    ///
    /// The root bucket depends on the sampled board, so every root
    /// information set the hero reached is pooled by summing strategy
    /// weights. On a complete board there is exactly one such set.
    pub fn root(&self) -> Policy<Action> {
        let infos = self
            .profile
            .iter()
            .map(|(info, _)| info)
            .filter(|info| info.is_root())
            .collect::<Vec<_>>();
        if let [info] = infos.as_slice() {
            return self.profile.averaged(info).unwrap_or_default();
        }
        let roots = infos
            .iter()
            .filter_map(|info| self.profile.get(info))
            .collect::<Vec<_>>();
        let Some(first) = roots.first() else {
            return Vec::new();
        };
        let weights = first
            .choices()
            .into_iter()
            .map(|edge| {
                let weight = roots
                    .iter()
                    .filter_map(|node| node.memory(&edge))
                    .map(Memory::weight)
                    .sum::<Probability>();
                (edge, weight)
            })
            .collect::<Policy<Action>>();
        let total = weights.iter().map(|(_, w)| w).sum::<Probability>();
        let n = weights.len() as Probability;
        weights
            .into_iter()
            .map(|(edge, w)| match total > 0. {
                true => (edge, w / total),
                false => (edge, 1. / n),
            })
            .collect()
    }

    pub fn solution(&self) -> Solution {
        Solution {
            strategy: self
                .root()
                .into_iter()
                .map(|(action, p)| (action.name().to_string(), p))
                .collect(),
            bet: self.session.bet(),
            fraction: self.session.fraction(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Street;
    use crate::mccfr::TreeInfo;

    const RIVER: &str = "2c 7d 9h Jc Kc";

    fn seeded(iterations: usize, seed: u64) -> SolverConfig {
        SolverConfig {
            iterations,
            samples: CFR_OPPONENT_SAMPLES,
            seed: Some(seed),
        }
    }

    fn trained(hole: &str, board: &str, config: SolverConfig) -> Solver {
        let spot = Spot::parse(hole, board, 10., 100., 1.).unwrap();
        let mut solver = Solver::new(spot, config).unwrap();
        solver.train();
        solver
    }

    #[test]
    fn aces_bet_on_dry_river() {
        let spot = Spot::parse("As Ah", RIVER, 10., 100., 1.).unwrap();
        let solution = Solver::solve(spot, seeded(2000, 42)).unwrap();
        let bet = solution.get(Action::Bet).unwrap();
        let check = solution.get(Action::Check).unwrap();
        assert!(bet > 0.5, "bet {} check {}", bet, check);
        assert!(bet > check);
    }

    #[test]
    fn root_strategy_is_check_or_bet() {
        let solver = trained("As Ah", RIVER, seeded(100, 1));
        let solution = solver.solution();
        let actions = solution.strategy.keys().cloned().collect::<Vec<_>>();
        assert_eq!(actions, vec!["bet".to_string(), "check".to_string()]);
        let total = solution.strategy.values().sum::<Probability>();
        assert!((total - 1.).abs() < 1e-4);
    }

    #[test]
    fn every_node_averages_to_a_distribution() {
        for board in [RIVER, "2c 7d 9h", ""] {
            let solver = trained("Ks Qs", board, seeded(300, 7));
            assert!(!solver.profile().is_empty());
            for (info, node) in solver.profile().iter() {
                let average = node.average();
                let actions = average.iter().map(|(a, _)| *a).collect::<Vec<_>>();
                assert_eq!(actions, info.choices());
                assert!(average.iter().all(|(_, p)| *p >= 0.));
                let total = average.iter().map(|(_, p)| p).sum::<Probability>();
                assert!((total - 1.).abs() < 1e-4, "{} sums to {}", info, total);
            }
        }
    }

    #[test]
    fn river_has_one_root() {
        let solver = trained("As Ah", RIVER, seeded(200, 3));
        let roots = solver
            .profile()
            .iter()
            .filter(|(info, _)| info.is_root())
            .collect::<Vec<_>>();
        assert_eq!(roots.len(), 1);
        let (_, node) = roots[0];
        assert_eq!(solver.root(), node.average());
    }

    #[test]
    fn flop_pools_root_weights() {
        let solver = trained("Ks Qs", "2c 7d 9h", seeded(400, 11));
        let roots = solver
            .profile()
            .iter()
            .filter(|(info, _)| info.is_root())
            .map(|(_, node)| node)
            .collect::<Vec<_>>();
        assert!(roots.len() > 1, "{} roots", roots.len());
        let pooled = |action: Action| {
            roots
                .iter()
                .filter_map(|node| node.memory(&action))
                .map(Memory::weight)
                .sum::<Probability>()
        };
        let total = pooled(Action::Check) + pooled(Action::Bet);
        assert!(total > 0.);
        let root = solver.root();
        let actions = root.iter().map(|(a, _)| *a).collect::<Vec<_>>();
        assert_eq!(actions, vec![Action::Check, Action::Bet]);
        for (action, p) in root.iter() {
            assert!((p - pooled(*action) / total).abs() < 1e-6, "{} {}", action, p);
        }
        let sum = root.iter().map(|(_, p)| p).sum::<Probability>();
        assert!((sum - 1.).abs() < 1e-5);
    }

    #[test]
    fn same_seed_same_tables() {
        let a = trained("Th 9h", "8h 2c Kd", seeded(300, 9));
        let b = trained("Th 9h", "8h 2c Kd", seeded(300, 9));
        assert_eq!(a.profile(), b.profile());
        assert_eq!(a.solution(), b.solution());
    }

    #[test]
    fn different_seed_different_tables() {
        let a = trained("Th 9h", "8h 2c Kd", seeded(300, 9));
        let b = trained("Th 9h", "8h 2c Kd", seeded(300, 10));
        assert_ne!(a.profile(), b.profile());
    }

    #[test]
    fn zero_iterations_is_empty() {
        let spot = Spot::parse("As Ah", RIVER, 10., 100., 1.).unwrap();
        let solution = Solver::solve(spot, seeded(0, 0)).unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn bet_capped_by_stack() {
        let spot = Spot::parse("As Ah", RIVER, 6., 3.3, 1.).unwrap();
        let solution = Solver::solve(spot, seeded(10, 0)).unwrap();
        assert_eq!(solution.bet, 3.3);
        assert_eq!(solution.fraction, 3.3 / 6.);
    }

    #[test]
    fn degenerate_pot_still_solves() {
        let spot = Spot::parse("As Ah", RIVER, 0., 1., 1.).unwrap();
        let solution = Solver::solve(spot, seeded(50, 0)).unwrap();
        assert!(!solution.is_empty());
        assert!(solution.bet.is_finite());
    }

    #[test]
    fn zero_budget_fails_before_sampling() {
        let spot = Spot::parse("As Ah", RIVER, 10., 100., 1.).unwrap();
        let config = SolverConfig {
            samples: 0,
            ..seeded(10, 0)
        };
        assert!(Solver::new(spot, config).is_err());
    }

    #[test]
    fn stage_is_informational() {
        let spot = Spot::parse("As Ah", RIVER, 10., 100., 1.).unwrap();
        let staged = spot.with_street(Street::Flop);
        let a = Solver::solve(spot, seeded(100, 5)).unwrap();
        let b = Solver::solve(staged, seeded(100, 5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unparseable_env_keeps_defaults() {
        unsafe {
            std::env::set_var("CFR_ITERATIONS", "lots");
            std::env::set_var("CFR_OPPONENT_SAMPLES", " 250 ");
        }
        let config = SolverConfig::from_env();
        unsafe {
            std::env::remove_var("CFR_ITERATIONS");
            std::env::remove_var("CFR_OPPONENT_SAMPLES");
        }
        assert_eq!(config.iterations, CFR_ITERATIONS);
        assert_eq!(config.samples, 250);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.iterations, 3000);
        assert_eq!(config.samples, 4000);
        assert_eq!(config.seed, None);
    }
}
