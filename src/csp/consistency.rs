//! Consistency oracle for partial and complete assignments

use super::{Assignment, CrosswordSolver};
use crate::crossword::Crossword;
use itertools::Itertools;

impl CrosswordSolver<'_> {
    /// Whether `assignment` fits the crossword: no word reused, every word the length
    /// of its slot, and assigned crossing slots agreeing on the shared letter.
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        is_consistent(self.crossword, assignment)
    }
}

/// Checks run in order and stop at the first violation.
pub fn is_consistent(crossword: &Crossword, assignment: &Assignment) -> bool {
    if !assignment.iter().map(|(_, word)| word).all_unique() {
        return false;
    }

    if !assignment
        .iter()
        .all(|(id, word)| word.len() == crossword.variable(id).length)
    {
        return false;
    }

    assignment.iter().all(|(id, word)| {
        crossword.neighbors(id).iter().all(|&other| {
            match (assignment.get(other), crossword.overlap(id, other)) {
                (Some(other_word), Some((index, other_index))) => {
                    word.as_bytes().get(index) == other_word.as_bytes().get(other_index)
                }
                _ => true,
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossword::Vocabulary;

    fn corner() -> Crossword {
        Crossword::parse("___\n_##\n_##\n").unwrap()
    }

    fn assignment(words: &[(usize, &str)]) -> Assignment {
        words.iter().map(|&(id, word)| (id, word.into())).collect()
    }

    #[test]
    fn test_empty_and_partial_assignments() {
        let crossword = corner();
        assert!(is_consistent(&crossword, &Assignment::new()));
        assert!(is_consistent(&crossword, &assignment(&[(1, "ARM")])));
    }

    #[test]
    fn test_matching_crossing() {
        let crossword = corner();
        assert!(is_consistent(&crossword, &assignment(&[(0, "CAT"), (1, "CAR")])));
    }

    #[test]
    fn test_reused_word() {
        let crossword = corner();
        assert!(!is_consistent(&crossword, &assignment(&[(0, "CAT"), (1, "CAT")])));
    }

    #[test]
    fn test_length_mismatch() {
        let crossword = corner();
        assert!(!is_consistent(&crossword, &assignment(&[(0, "CATS")])));
    }

    #[test]
    fn test_crossing_conflict() {
        let crossword = corner();
        assert!(!is_consistent(&crossword, &assignment(&[(0, "CAT"), (1, "ARM")])));
    }

    #[test]
    fn test_solver_delegates_to_oracle() {
        let crossword = corner();
        let vocabulary = Vocabulary::from_words(["CAT", "CAR"]);
        let solver = CrosswordSolver::new(&crossword, &vocabulary);

        assert!(solver.consistent(&assignment(&[(0, "CAT"), (1, "CAR")])));
        assert!(!solver.consistent(&assignment(&[(0, "CAT"), (1, "ARM")])));
    }
}
