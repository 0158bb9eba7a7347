//! Variable and value ordering heuristics for the search

use super::{Assignment, CrosswordSolver};
use crate::config::{LcvScoring, ValueOrdering, VariableOrdering};
use crate::crossword::{VarId, Word};
use itertools::Itertools;
use std::cmp::Reverse;

impl CrosswordSolver<'_> {
    /// Pick the next slot to fill. Under `MrvDegree` this is the unassigned slot with
    /// the fewest candidates, then the most crossings, then the lowest id.
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<VarId> {
        let mut unassigned =
            (0..self.crossword.variable_count()).filter(|&id| !assignment.contains(id));

        match self.options.variable_ordering {
            VariableOrdering::Static => unassigned.next(),
            VariableOrdering::MrvDegree => unassigned.min_by_key(|&id| {
                (
                    self.domains.len(id),
                    Reverse(self.crossword.neighbors(id).len()),
                )
            }),
        }
    }

    /// Candidates of `var` in the order the search should try them: least
    /// constraining first, ties kept in lexicographic order.
    pub fn order_domain_values(&self, var: VarId, assignment: &Assignment) -> Vec<Word> {
        let candidates = self.domains.get(var).iter().cloned();

        match self.options.value_ordering {
            ValueOrdering::Lexicographic => candidates.collect(),
            ValueOrdering::LeastConstraining => candidates
                .map(|word| (self.conflict_score(var, &word, assignment), word))
                .sorted_by_key(|(score, _)| *score)
                .map(|(_, word)| word)
                .collect(),
        }
    }

    /// How much choosing `word` for `var` would cut into the domains of its
    /// unassigned crossings
    fn conflict_score(&self, var: VarId, word: &str, assignment: &Assignment) -> usize {
        self.crossword
            .neighbors(var)
            .iter()
            .filter(|&&other| !assignment.contains(other))
            .filter_map(|&other| {
                self.crossword
                    .overlap(var, other)
                    .map(|indices| (other, indices))
            })
            .map(|(other, (index, other_index))| {
                let letter = word.as_bytes().get(index);
                let mut conflicts = self
                    .domains
                    .get(other)
                    .iter()
                    .filter(|candidate| candidate.as_bytes().get(other_index) != letter);

                match self.options.lcv_scoring {
                    LcvScoring::Exact => conflicts.count(),
                    LcvScoring::FirstConflict => usize::from(conflicts.next().is_some()),
                }
            })
            .sum()
    }
}
