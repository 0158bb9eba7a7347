//! Crossword constraint solver: propagation followed by backtracking search

use super::{Assignment, DomainStore, SearchStatistics};
use crate::config::{LcvScoring, SolverConfig, ValueOrdering, VariableOrdering};
use crate::crossword::{Crossword, Vocabulary};
use log::info;
use std::time::Instant;

/// Knobs for the search heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    pub variable_ordering: VariableOrdering,
    pub value_ordering: ValueOrdering,
    pub lcv_scoring: LcvScoring,
    pub parallel: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self::from(&SolverConfig::default())
    }
}

impl From<&SolverConfig> for SolverOptions {
    fn from(config: &SolverConfig) -> Self {
        Self {
            variable_ordering: config.variable_ordering,
            value_ordering: config.value_ordering,
            lcv_scoring: config.lcv_scoring,
            parallel: config.parallel,
        }
    }
}

/// Owns the domain store for one solve over a borrowed crossword.
///
/// The propagation, heuristic and search operations live in sibling modules as
/// further `impl` blocks on this type.
pub struct CrosswordSolver<'a> {
    pub(super) crossword: &'a Crossword,
    pub(super) domains: DomainStore,
    pub(super) options: SolverOptions,
    pub(super) statistics: SearchStatistics,
}

impl<'a> CrosswordSolver<'a> {
    pub fn new(crossword: &'a Crossword, vocabulary: &Vocabulary) -> Self {
        Self::with_options(crossword, vocabulary, SolverOptions::default())
    }

    pub fn with_options(
        crossword: &'a Crossword,
        vocabulary: &Vocabulary,
        options: SolverOptions,
    ) -> Self {
        Self {
            crossword,
            domains: DomainStore::new(crossword, vocabulary),
            options,
            statistics: SearchStatistics::default(),
        }
    }

    pub fn crossword(&self) -> &'a Crossword {
        self.crossword
    }

    /// Current candidate sets. After `solve` or `propagate` these are the
    /// post-propagation domains.
    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Enforce node and arc consistency. Returns false if some domain was wiped out.
    pub fn propagate(&mut self) -> bool {
        let start_time = Instant::now();

        self.enforce_node_consistency();
        // A slot with no word of its length is never revised, so check it here too
        let arc_consistent = self.ac3(None)
            && (0..self.domains.variable_count()).all(|id| !self.domains.is_empty(id));

        self.statistics.propagation_time = start_time.elapsed();
        info!(
            "Propagation left {} candidates across {} slots in {:.3}s",
            self.domains.total_size(),
            self.domains.variable_count(),
            self.statistics.propagation_time.as_secs_f64()
        );

        arc_consistent
    }

    /// Enforce node and arc consistency, then search for a complete fill.
    /// `None` means the puzzle has no fill with this vocabulary.
    pub fn solve(&mut self) -> Option<Assignment> {
        if !self.propagate() {
            info!("A slot has no candidates left after propagation");
            return None;
        }

        let start_time = Instant::now();
        let result = if self.options.parallel {
            self.backtrack_parallel()
        } else {
            self.backtrack(Assignment::new())
        };
        self.statistics.search_time = start_time.elapsed();

        info!(
            "Search {} after {} values and {} backtracks",
            if result.is_some() { "succeeded" } else { "failed" },
            self.statistics.nodes,
            self.statistics.backtracks
        );

        result
    }
}
