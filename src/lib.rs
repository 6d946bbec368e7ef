//! Monte-Carlo counterfactual regret minimization for a single heads-up
//! Hold'em decision point.
//!
//! ## Modules
//!
//! - [`cards`]: cards, bitmask hands, five/seven-card evaluation, showdowns
//! - [`mccfr`]: game-agnostic tree traits, regret accumulators, traversal
//! - [`holdem`]: the single-bet-size game, sampling, and the solver loop
//! - [`api`]: JSON request/response shell served over HTTP
pub mod cards;
pub mod holdem;
pub mod mccfr;

#[cfg(feature = "server")]
pub mod api;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Pot sizes, stacks, and bet amounts.
pub type Chips = f32;
/// Seat index of the acting player (0 = hero, first to act).
pub type Position = usize;
/// Expected values, regrets, and payoffs.
pub type Utility = f32;
/// Strategy weights, sampling distributions, and reach probabilities.
pub type Probability = f32;

// ============================================================================
// SOLVER CONFIGURATION
// Fixed per call. There is no early stopping: every solve runs all iterations.
// ============================================================================
/// Sampled traversals per solve.
pub const CFR_ITERATIONS: usize = 3000;
/// Maximum number of distinct opponent holdings drawn into the sampling pool.
pub const CFR_OPPONENT_SAMPLES: usize = 4000;
/// Floor applied to the pot so that stack-to-pot ratios stay finite.
pub const POT_MIN: Chips = 0.1;
/// Pot fraction used when a request carries no bet sizes at all.
pub const BET_FRACTION_DEFAULT: Probability = 1.0;
/// Bet sizes assumed when a request omits them. Only the first is solved.
pub const BET_SIZING_DEFAULT: [Probability; 3] = [0.33, 0.5, 1.0];

// ============================================================================
// SERVER CONFIGURATION
// ============================================================================
/// Listen address when `BIND_ADDR` is unset.
pub const BIND_ADDR_DEFAULT: &str = "127.0.0.1:8000";
/// actix worker threads. Each request still owns its own solver.
pub const SERVER_WORKERS: usize = 4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
