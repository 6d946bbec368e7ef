use super::node::Node;
use super::node::Policy;
use super::traits::TreeEdge;
use super::traits::TreeInfo;
use crate::Probability;
use crate::Utility;
use std::collections::BTreeMap;

/// The node store of one solve: every information set visited so far
/// and its regret accumulator.
///
/// Nodes are created lazily on first visit and never removed. A Profile
/// belongs to exactly one solve and is dropped with it. Ordered storage
/// keeps iteration (and so the rendered table) deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile<I: TreeInfo> {
    epochs: usize,
    encounters: BTreeMap<I, Node<I::E>>,
}

impl<I: TreeInfo> Default for Profile<I> {
    fn default() -> Self {
        Self {
            epochs: 0,
            encounters: BTreeMap::new(),
        }
    }
}

impl<I: TreeInfo> Profile<I> {
    pub fn increment(&mut self) {
        self.epochs += 1;
    }
    pub fn epochs(&self) -> usize {
        self.epochs
    }
    pub fn len(&self) -> usize {
        self.encounters.len()
    }
    pub fn is_empty(&self) -> bool {
        self.encounters.is_empty()
    }
    pub fn get(&self, info: &I) -> Option<&Node<I::E>> {
        self.encounters.get(info)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&I, &Node<I::E>)> {
        self.encounters.iter()
    }

    /// current strategy at this information set, creating it on first visit
    pub fn strategy(&mut self, info: &I, reach: Probability) -> Policy<I::E> {
        self.encounters
            .entry(*info)
            .or_insert_with(|| Node::from(info.choices()))
            .strategy(reach)
    }
    pub fn accumulate(&mut self, info: &I, edge: &I::E, regret: Utility) {
        if let Some(node) = self.encounters.get_mut(info) {
            node.accumulate(edge, regret);
        }
    }
    /// averaged strategy, or None if this information set was never visited
    pub fn averaged(&self, info: &I) -> Option<Policy<I::E>> {
        self.encounters.get(info).map(Node::average)
    }
}

fn density<E: TreeEdge>(policy: &Policy<E>, edge: &E) -> Probability {
    policy
        .iter()
        .find(|(e, _)| e == edge)
        .map(|(_, p)| *p)
        .unwrap_or_default()
}

#[rustfmt::skip]
impl<I: TreeInfo> std::fmt::Display for Profile<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Epochs: {}", self.epochs)?;
        writeln!(f, "┌──────────────────┬───────┬──────────┬──────────┬──────────┬──────────┐")?;
        writeln!(f, "│ Info             │ Edge  │   Regret │   Weight │   Policy │   Advice │")?;
        writeln!(f, "├──────────────────┼───────┼──────────┼──────────┼──────────┼──────────┤")?;
        for (info, node) in &self.encounters {
            let policy = node.matching();
            let advice = node.average();
            for (edge, memory) in node.iter() {
                writeln!(
                    f,
                    "│ {:<16} │ {:<5} │ {:>+8.2} │ {:>8.2} │ {:>8.2} │ {:>8.2} │",
                    info.to_string(),
                    edge.to_string(),
                    memory.regret(),
                    memory.weight(),
                    density(&policy, edge),
                    density(&advice, edge),
                )?;
            }
        }
        writeln!(f, "└──────────────────┴───────┴──────────┴──────────┴──────────┴──────────┘")?;
        Ok(())
    }
}
