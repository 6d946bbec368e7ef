//! Solver Server Binary
//!
//! Serves `POST /solve` and `GET /health` on BIND_ADDR.
//! CFR_ITERATIONS and CFR_OPPONENT_SAMPLES override the solver defaults.

use spotcfr::holdem::SolverConfig;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    spotcfr::log();
    spotcfr::api::run(SolverConfig::from_env()).await
}
