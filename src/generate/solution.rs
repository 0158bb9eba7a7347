//! Filled crossword representation

use crate::crossword::{Crossword, PuzzleError, Variable};
use crate::csp::{Assignment, SearchStatistics};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::time::Duration;

/// The word placed in one slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolutionEntry {
    pub variable: Variable,
    pub word: String,
}

/// A complete fill together with how it was found
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// One entry per slot, in slot order
    pub entries: Vec<SolutionEntry>,
    /// The filled grid, `#` for blocked cells
    pub rows: Vec<String>,
    /// Time spent in propagation and search
    #[serde(skip)]
    pub solve_time: Duration,
    pub statistics: SearchStatistics,
    pub metadata: SolutionMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionMetadata {
    /// Stable identifier derived from the placed words
    pub id: String,
    pub width: usize,
    pub height: usize,
    pub slot_count: usize,
    pub letter_count: usize,
}

impl Solution {
    pub fn new(
        crossword: &Crossword,
        assignment: &Assignment,
        solve_time: Duration,
        statistics: SearchStatistics,
    ) -> Self {
        let entries: Vec<SolutionEntry> = assignment
            .iter()
            .map(|(id, word)| SolutionEntry {
                variable: *crossword.variable(id),
                word: word.to_string(),
            })
            .collect();

        let letters = crossword.letter_grid(assignment);
        let rows = (0..crossword.height)
            .map(|i| {
                (0..crossword.width)
                    .map(|j| match letters[i][j] {
                        _ if !crossword.is_fillable(i, j) => '#',
                        Some(letter) => letter,
                        None => ' ',
                    })
                    .collect()
            })
            .collect();

        let metadata = SolutionMetadata {
            id: Self::generate_id(&entries),
            width: crossword.width,
            height: crossword.height,
            slot_count: entries.len(),
            letter_count: letters.iter().flatten().filter(|cell| cell.is_some()).count(),
        };

        Self {
            entries,
            rows,
            solve_time,
            statistics,
            metadata,
        }
    }

    fn generate_id(entries: &[SolutionEntry]) -> String {
        let mut hasher = DefaultHasher::new();
        entries.hash(&mut hasher);
        format!("fill_{:x}", hasher.finish())
    }

    /// Word placed in `variable`, if any
    pub fn word_for(&self, variable: &Variable) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.variable == *variable)
            .map(|entry| entry.word.as_str())
    }

    /// Map the entries back onto the variable ids of `crossword`
    pub fn to_assignment(&self, crossword: &Crossword) -> Result<Assignment, PuzzleError> {
        let mut assignment = Assignment::new();
        for entry in &self.entries {
            let id = crossword
                .id_of(&entry.variable)
                .ok_or(PuzzleError::UnknownVariable(entry.variable))?;
            if assignment.insert(id, entry.word.as_str().into()).is_some() {
                return Err(PuzzleError::DuplicateEntry {
                    variable: entry.variable,
                });
            }
        }
        Ok(assignment)
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossword::io::{EXAMPLE_STRUCTURE, EXAMPLE_WORDS};
    use crate::crossword::{Direction, Vocabulary};
    use crate::csp::CrosswordSolver;
    use tempfile::tempdir;

    fn solved_example() -> (Crossword, Solution) {
        let crossword = Crossword::parse(EXAMPLE_STRUCTURE).unwrap();
        let vocabulary = Vocabulary::parse(EXAMPLE_WORDS).unwrap();
        let mut solver = CrosswordSolver::new(&crossword, &vocabulary);
        let assignment = solver.solve().unwrap();
        let solution = Solution::new(
            &crossword,
            &assignment,
            Duration::from_millis(5),
            solver.statistics().clone(),
        );
        (crossword, solution)
    }

    #[test]
    fn test_rows_render_the_fill() {
        let (_, solution) = solved_example();
        assert_eq!(
            solution.rows,
            vec!["#SIX#", "#E##F", "#V##I", "#E##V", "#NINE"]
        );
        assert_eq!(solution.metadata.letter_count, 13);
        assert_eq!(solution.metadata.slot_count, 4);
        assert!(solution.metadata.id.starts_with("fill_"));
    }

    #[test]
    fn test_word_lookup() {
        let (_, solution) = solved_example();
        let down = Variable::new(0, 1, Direction::Down, 5);
        assert_eq!(solution.word_for(&down), Some("SEVEN"));
        assert_eq!(solution.word_for(&Variable::new(0, 0, Direction::Down, 5)), None);
    }

    #[test]
    fn test_json_file_round_trip() {
        let (crossword, solution) = solved_example();
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("fill.json");

        solution.save_to_file(&path).unwrap();
        let loaded = Solution::load_from_file(&path).unwrap();

        assert_eq!(loaded.entries, solution.entries);
        assert_eq!(loaded.metadata, solution.metadata);
        assert_eq!(
            loaded.to_assignment(&crossword).unwrap(),
            solution.to_assignment(&crossword).unwrap()
        );
    }

    #[test]
    fn test_foreign_entries_are_rejected() {
        let (crossword, mut solution) = solved_example();
        let stray = Variable::new(2, 2, Direction::Across, 3);
        solution.entries.push(SolutionEntry {
            variable: stray,
            word: "TEN".to_string(),
        });
        assert_eq!(
            solution.to_assignment(&crossword),
            Err(PuzzleError::UnknownVariable(stray))
        );

        let (crossword, mut solution) = solved_example();
        let repeated = solution.entries[0].clone();
        solution.entries.push(repeated.clone());
        assert_eq!(
            solution.to_assignment(&crossword),
            Err(PuzzleError::DuplicateEntry {
                variable: repeated.variable
            })
        );
    }
}
