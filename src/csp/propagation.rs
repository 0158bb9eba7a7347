//! Node consistency and AC-3 arc consistency over the domain store

use super::CrosswordSolver;
use crate::crossword::{VarId, Word};
use itertools::iproduct;
use log::debug;
use std::collections::{HashSet, VecDeque};

impl CrosswordSolver<'_> {
    /// Remove every candidate whose length differs from its slot's length
    pub fn enforce_node_consistency(&mut self) {
        for (id, variable) in self.crossword.variables().iter().enumerate() {
            let doomed: Vec<Word> = self
                .domains
                .get(id)
                .iter()
                .filter(|word| word.len() != variable.length)
                .cloned()
                .collect();
            self.statistics.node_pruned += self.domains.remove_all(id, &doomed);
        }
    }

    /// Make `x` arc consistent with `y`: drop every candidate of `x` whose letter at
    /// the crossing appears in no candidate of `y`. Returns whether `x` changed.
    pub fn revise(&mut self, x: VarId, y: VarId) -> bool {
        self.statistics.arcs_revised += 1;

        let Some((index_x, index_y)) = self.crossword.overlap(x, y) else {
            return false;
        };

        let supported: HashSet<u8> = self
            .domains
            .get(y)
            .iter()
            .filter_map(|word| word.as_bytes().get(index_y).copied())
            .collect();

        // Collected first, removed after: the live set is never mutated mid-scan
        let doomed: Vec<Word> = self
            .domains
            .get(x)
            .iter()
            .filter(|word| {
                word.as_bytes()
                    .get(index_x)
                    .map_or(true, |letter| !supported.contains(letter))
            })
            .cloned()
            .collect();

        if doomed.is_empty() {
            return false;
        }

        let removed = self.domains.remove_all(x, &doomed);
        self.statistics.arc_pruned += removed;
        debug!(
            "revise({}, {}) removed {} candidates, {} left",
            x,
            y,
            removed,
            self.domains.len(x)
        );
        true
    }

    /// AC-3 over `arcs`, or over every ordered pair of distinct variables when `None`.
    ///
    /// Returns false as soon as a domain becomes empty.
    pub fn ac3(&mut self, arcs: Option<Vec<(VarId, VarId)>>) -> bool {
        let count = self.crossword.variable_count();
        let mut queue: VecDeque<(VarId, VarId)> = match arcs {
            Some(arcs) => arcs.into(),
            None => iproduct!(0..count, 0..count)
                .filter(|(x, y)| x != y)
                .collect(),
        };

        while let Some((x, y)) = queue.pop_front() {
            if !self.revise(x, y) {
                continue;
            }

            if self.domains.is_empty(x) {
                debug!("Domain of {} wiped out", self.crossword.variable(x));
                return false;
            }

            let crossword = self.crossword;
            queue.extend(
                crossword
                    .neighbors(x)
                    .iter()
                    .filter(|&&z| z != y)
                    .map(|&z| (z, x)),
            );
        }

        true
    }
}
