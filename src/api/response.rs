use crate::Chips;
use crate::Probability;
use crate::holdem::Solution;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Body of a successful `POST /solve`. An empty strategy means the
/// solver produced nothing usable for this spot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    pub strategy: BTreeMap<String, Probability>,
    pub bet: Chips,
    pub fraction: Probability,
    pub note: String,
}

impl From<Solution> for SolveResponse {
    fn from(solution: Solution) -> Self {
        let note = match solution.is_empty() {
            true => "no strategy available for this spot",
            false => "strategy from simplified CFR solver (single bet size, no raises)",
        };
        Self {
            strategy: solution.strategy,
            bet: solution.bet,
            fraction: solution.fraction,
            note: note.to_string(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
