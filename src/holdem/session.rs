use crate::Chips;
use crate::POT_MIN;
use crate::Probability;

/// The economics of one solve: the floored pot and the one bet size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pot: Chips,
    fraction: Probability,
    bet: Chips,
}

impl Session {
    /// The pot is floored so stack-to-pot stays finite. The bet is capped
    /// at the effective stack and the fraction reported is the capped one.
    pub fn new(pot: Chips, stack: Chips, fraction: Probability) -> Self {
        let pot = pot.max(POT_MIN);
        let bet = (pot * fraction).min(stack).max(0.);
        Self {
            pot,
            fraction: bet / pot,
            bet,
        }
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    /// the pot fraction actually solved for
    pub fn fraction(&self) -> Probability {
        self.fraction
    }
    pub fn bet(&self) -> Chips {
        self.bet
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "pot {:.2} bet {:.2} ({:.3} pot)",
            self.pot, self.bet, self.fraction
        )
    }
}
