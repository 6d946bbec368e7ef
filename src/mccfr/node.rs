use super::memory::Memory;
use super::traits::TreeEdge;
use crate::Probability;
use crate::Utility;

/// a distribution over the edges leaving one information set
pub type Policy<E> = Vec<(E, Probability)>;

/// Regret accumulator for one information set.
///
/// The legal edges are fixed when the node is created and keep their
/// order, so every policy this node emits lines up with its choices.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<E: TreeEdge> {
    memory: Vec<(E, Memory)>,
}

impl<E: TreeEdge> Node<E> {
    pub fn choices(&self) -> Vec<E> {
        self.memory.iter().map(|(e, _)| *e).collect()
    }
    pub fn memory(&self, edge: &E) -> Option<&Memory> {
        self.memory.iter().find(|(e, _)| e == edge).map(|(_, m)| m)
    }
    pub fn iter(&self) -> impl Iterator<Item = &(E, Memory)> {
        self.memory.iter()
    }
    /// total strategy weight accumulated across all edges
    pub fn weight(&self) -> Probability {
        self.memory.iter().map(|(_, m)| m.weight()).sum()
    }

    /// regret matching: positive regret shares, uniform when no edge has any
    pub fn matching(&self) -> Policy<E> {
        let positive = self
            .memory
            .iter()
            .map(|(_, m)| m.regret().max(0.))
            .sum::<Utility>();
        if positive > 0. {
            self.memory
                .iter()
                .map(|(e, m)| (*e, m.regret().max(0.) / positive))
                .collect()
        } else {
            self.uniform()
        }
    }
    /// the current strategy, accumulating it into the average
    /// weighted by the acting player's reach
    pub fn strategy(&mut self, reach: Probability) -> Policy<E> {
        let policy = self.matching();
        for ((_, memory), (_, p)) in self.memory.iter_mut().zip(policy.iter()) {
            memory.add_weight(reach * p);
        }
        policy
    }
    /// the time-averaged strategy, uniform if never reached with positive weight
    pub fn average(&self) -> Policy<E> {
        let total = self.weight();
        if total > 0. {
            self.memory
                .iter()
                .map(|(e, m)| (*e, m.weight() / total))
                .collect()
        } else {
            self.uniform()
        }
    }
    pub fn accumulate(&mut self, edge: &E, regret: Utility) {
        if let Some((_, memory)) = self.memory.iter_mut().find(|(e, _)| e == edge) {
            memory.add_regret(regret);
        }
    }

    fn uniform(&self) -> Policy<E> {
        let n = self.memory.len() as Probability;
        self.memory.iter().map(|(e, _)| (*e, 1. / n)).collect()
    }
}

impl<E: TreeEdge> From<Vec<E>> for Node<E> {
    fn from(choices: Vec<E>) -> Self {
        Self {
            memory: choices
                .into_iter()
                .map(|e| (e, Memory::default()))
                .collect(),
        }
    }
}
