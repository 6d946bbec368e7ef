use crate::BET_FRACTION_DEFAULT;
use crate::BET_SIZING_DEFAULT;
use crate::Chips;
use crate::Probability;
use crate::cards::Street;
use crate::holdem::Spot;
use serde::Deserialize;
use serde::Serialize;

fn bet_sizing_default() -> Vec<Probability> {
    BET_SIZING_DEFAULT.to_vec()
}

/// Body of `POST /solve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    pub stage: String,
    pub hole: Vec<String>,
    #[serde(default)]
    pub board: Vec<String>,
    pub pot: Chips,
    pub effective_stack: Chips,
    #[serde(default = "bet_sizing_default")]
    pub bet_sizing: Vec<Probability>,
}

impl SolveRequest {
    /// only the first size is solved; no sizes means a pot-sized bet
    pub fn fraction(&self) -> Probability {
        self.bet_sizing
            .first()
            .copied()
            .unwrap_or(BET_FRACTION_DEFAULT)
    }
}

/// every shape check happens here, before a solver exists
impl TryFrom<&SolveRequest> for Spot {
    type Error = anyhow::Error;
    fn try_from(req: &SolveRequest) -> Result<Self, Self::Error> {
        let street = Street::try_from(req.stage.as_str())?;
        if !(req.pot.is_finite() && req.pot > 0.) {
            return Err(anyhow::anyhow!("pot must be positive, got {}", req.pot));
        }
        if !(req.effective_stack.is_finite() && req.effective_stack > 0.) {
            return Err(anyhow::anyhow!(
                "effective_stack must be positive, got {}",
                req.effective_stack
            ));
        }
        if let Some(size) = req.bet_sizing.iter().find(|s| !(s.is_finite() && **s > 0.)) {
            return Err(anyhow::anyhow!("bet sizes must be positive, got {}", size));
        }
        Spot::tokens(
            req.hole.as_slice(),
            req.board.as_slice(),
            req.pot,
            req.effective_stack,
            req.fraction(),
        )
        .map(|spot| spot.with_street(street))
    }
}
