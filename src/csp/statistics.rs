//! Counters collected while propagating and searching

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Candidates removed by the length filter
    pub node_pruned: usize,
    /// Candidates removed by arc revision
    pub arc_pruned: usize,
    /// Calls to `revise`
    pub arcs_revised: usize,
    /// Values tried during search
    pub nodes: usize,
    /// Tentative assignments that passed the consistency check
    pub extensions: usize,
    /// Slots whose candidates ran out
    pub backtracks: usize,
    pub propagation_time: Duration,
    pub search_time: Duration,
}

impl SearchStatistics {
    /// Fold the search counters of an independent branch into this one
    pub fn merge_search(&mut self, other: &SearchStatistics) {
        self.nodes += other.nodes;
        self.extensions += other.extensions;
        self.backtracks += other.backtracks;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Pruned by length: {}", self.node_pruned)?;
        writeln!(f, "  Pruned by crossings: {}", self.arc_pruned)?;
        writeln!(f, "  Arcs revised: {}", self.arcs_revised)?;
        writeln!(f, "  Values tried: {}", self.nodes)?;
        writeln!(f, "  Consistent extensions: {}", self.extensions)?;
        writeln!(f, "  Backtracks: {}", self.backtracks)?;
        writeln!(f, "  Propagation time: {:.3}s", self.propagation_time.as_secs_f64())?;
        writeln!(f, "  Search time: {:.3}s", self.search_time.as_secs_f64())?;
        Ok(())
    }
}
