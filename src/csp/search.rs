//! Chronological backtracking search over an explicit stack of frames

use super::{Assignment, CrosswordSolver, SearchStatistics};
use crate::crossword::{VarId, Word};
use log::debug;
use rayon::prelude::*;
use std::sync::Mutex;

/// One level of the search: the slot being filled and the candidates not yet tried
struct Frame {
    variable: VarId,
    candidates: std::vec::IntoIter<Word>,
}

impl CrosswordSolver<'_> {
    /// Extend `assignment` to a complete, consistent fill if one exists.
    ///
    /// Values are only taken from the current domains; propagation is not re-run
    /// between choices.
    pub fn backtrack(&mut self, assignment: Assignment) -> Option<Assignment> {
        let mut counters = SearchStatistics::default();
        let result = self.search(assignment, &mut counters);
        self.statistics.merge_search(&counters);
        result
    }

    /// Same result as `backtrack` from an empty assignment, with one rayon task per
    /// candidate of the first selected slot. Branches share the domains read-only and
    /// each owns its assignment.
    pub(super) fn backtrack_parallel(&mut self) -> Option<Assignment> {
        let root = Assignment::new();
        let Some(first) = self.select_unassigned_variable(&root) else {
            return Some(root);
        };
        let candidates = self.order_domain_values(first, &root);
        debug!(
            "Splitting search over {} candidates for {}",
            candidates.len(),
            self.crossword.variable(first)
        );

        let totals = Mutex::new(SearchStatistics::default());
        let solver = &*self;
        let result = candidates.into_par_iter().find_map_first(|word| {
            let mut counters = SearchStatistics {
                nodes: 1,
                ..SearchStatistics::default()
            };
            let mut branch = Assignment::new();
            branch.insert(first, word);

            let found = if solver.consistent(&branch) {
                counters.extensions += 1;
                solver.search(branch, &mut counters)
            } else {
                None
            };

            if let Ok(mut totals) = totals.lock() {
                totals.merge_search(&counters);
            }
            found
        });

        let counters = totals
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.statistics.merge_search(&counters);
        if result.is_none() {
            self.statistics.backtracks += 1;
        }
        result
    }

    fn search(
        &self,
        mut assignment: Assignment,
        counters: &mut SearchStatistics,
    ) -> Option<Assignment> {
        let mut stack: Vec<Frame> = Vec::new();

        'building: loop {
            if assignment.is_complete(self.crossword) {
                return Some(assignment);
            }

            let variable = self.select_unassigned_variable(&assignment)?;
            let candidates = self.order_domain_values(variable, &assignment);
            stack.push(Frame {
                variable,
                candidates: candidates.into_iter(),
            });

            while let Some(frame) = stack.last_mut() {
                let variable = frame.variable;
                match frame.candidates.next() {
                    Some(word) => {
                        counters.nodes += 1;
                        assignment.insert(variable, word);
                        if self.consistent(&assignment) {
                            counters.extensions += 1;
                            continue 'building;
                        }
                        assignment.remove(variable);
                    }
                    None => {
                        // Dead end: undo the parent's choice so it moves on to its next value
                        stack.pop();
                        counters.backtracks += 1;
                        if let Some(parent) = stack.last() {
                            assignment.remove(parent.variable);
                        }
                    }
                }
            }

            debug!("Search space exhausted");
            return None;
        }
    }
}
