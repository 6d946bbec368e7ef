//! One-shot Solve Binary
//!
//! Solves a single decision point and prints the root strategy as JSON.
//!
//! Example: solve --hole "As Ah" --board "2c 7d 9h Jc Kc" --pot 10 --stack 100

use clap::Parser;
use spotcfr::cards::Street;
use spotcfr::holdem::*;
use spotcfr::*;

#[derive(Parser)]
#[command(author, version, about = "Solve one heads-up decision point with MCCFR", long_about = None)]
struct Args {
    /// hero's two hole cards, e.g. "As Ah"
    #[arg(long, required = true)]
    hole: String,
    /// zero to five board cards
    #[arg(long, default_value = "")]
    board: String,
    #[arg(long)]
    pot: Chips,
    /// effective stack behind, caps the bet
    #[arg(long)]
    stack: Chips,
    /// bet size as a fraction of the pot
    #[arg(long, default_value_t = BET_FRACTION_DEFAULT)]
    bet: Probability,
    #[arg(long, default_value_t = CFR_ITERATIONS)]
    iterations: usize,
    #[arg(long, default_value_t = CFR_OPPONENT_SAMPLES)]
    samples: usize,
    /// fix the sampling stream for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// preflop, flop, turn or river (informational)
    #[arg(long)]
    stage: Option<String>,
    /// log the full information set table
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let spot = Spot::parse(&args.hole, &args.board, args.pot, args.stack, args.bet)?;
    let spot = match args.stage.as_deref() {
        Some(stage) => spot.with_street(Street::try_from(stage)?),
        None => spot,
    };
    let config = SolverConfig {
        iterations: args.iterations,
        samples: args.samples,
        seed: args.seed,
    };
    let mut solver = Solver::new(spot, config)?;
    solver.train();
    if args.verbose {
        log::info!("\n{}", solver.profile());
    }
    println!("{}", serde_json::to_string_pretty(&solver.solution())?);
    Ok(())
}
