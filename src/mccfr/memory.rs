use crate::Probability;
use crate::Utility;

/// Cumulative regret and strategy weight for one edge of one information set.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct Memory {
    regret: Utility,
    weight: Probability,
}

impl Memory {
    pub fn regret(&self) -> Utility {
        self.regret
    }
    pub fn weight(&self) -> Probability {
        self.weight
    }
    pub fn add_regret(&mut self, value: Utility) {
        self.regret += value;
    }
    pub fn add_weight(&mut self, value: Probability) {
        assert!(value >= 0.);
        self.weight += value;
    }
}
