//! Independent checking of a finished fill

use super::Solution;
use crate::crossword::{Crossword, Variable, Vocabulary};
use crate::csp::Assignment;
use anyhow::Result;
use std::collections::HashMap;
use std::time::Instant;

/// Validates fills against a crossword and its vocabulary
pub struct SolutionValidator<'a> {
    crossword: &'a Crossword,
    vocabulary: &'a Vocabulary,
}

/// Result of solution validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
    pub error_message: Option<String>,
    pub validation_time_ms: u64,
}

/// A single broken rule in a fill
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Unassigned {
        variable: Variable,
    },
    NotInVocabulary {
        variable: Variable,
        word: String,
    },
    LengthMismatch {
        variable: Variable,
        word: String,
    },
    DuplicateWord {
        word: String,
        first: Variable,
        second: Variable,
    },
    OverlapConflict {
        first: Variable,
        second: Variable,
        cell: (usize, usize),
    },
}

impl<'a> SolutionValidator<'a> {
    pub fn new(crossword: &'a Crossword, vocabulary: &'a Vocabulary) -> Self {
        Self {
            crossword,
            vocabulary,
        }
    }

    /// Check every rule and collect all violations rather than stopping at the first
    pub fn validate(&self, assignment: &Assignment) -> ValidationResult {
        let start_time = Instant::now();
        let mut violations = Vec::new();

        let mut seen: HashMap<&str, Variable> = HashMap::new();
        for (id, variable) in self.crossword.variables().iter().enumerate() {
            let Some(word) = assignment.get(id) else {
                violations.push(Violation::Unassigned {
                    variable: *variable,
                });
                continue;
            };

            if !self.vocabulary.contains(word) {
                violations.push(Violation::NotInVocabulary {
                    variable: *variable,
                    word: word.to_string(),
                });
            }
            if word.len() != variable.length {
                violations.push(Violation::LengthMismatch {
                    variable: *variable,
                    word: word.to_string(),
                });
            }
            if let Some(first) = seen.insert(word, *variable) {
                violations.push(Violation::DuplicateWord {
                    word: word.to_string(),
                    first,
                    second: *variable,
                });
            }
        }

        for ((x, y), (index, other_index)) in self.crossword.overlaps().iter() {
            let (Some(word), Some(other)) = (assignment.get(x), assignment.get(y)) else {
                continue;
            };
            if word.as_bytes().get(index) != other.as_bytes().get(other_index) {
                let first = *self.crossword.variable(x);
                violations.push(Violation::OverlapConflict {
                    first,
                    second: *self.crossword.variable(y),
                    cell: first.cell(index),
                });
            }
        }

        // Overlaps are hashed, keep the report deterministic
        violations.sort_by_key(Violation::sort_key);

        let is_valid = violations.is_empty();
        let error_message = if is_valid {
            None
        } else {
            Some(Self::generate_error_message(&violations))
        };

        ValidationResult {
            is_valid,
            violations,
            error_message,
            validation_time_ms: start_time.elapsed().as_millis() as u64,
        }
    }

    /// Validate a solution loaded from disk against this crossword
    pub fn validate_solution(&self, solution: &Solution) -> Result<ValidationResult> {
        let assignment = solution.to_assignment(self.crossword)?;
        Ok(self.validate(&assignment))
    }

    fn generate_error_message(violations: &[Violation]) -> String {
        let mut message = format!("{} violation(s):", violations.len());
        for violation in violations.iter().take(5) {
            message.push_str(&format!("\n  {}", violation));
        }
        if violations.len() > 5 {
            message.push_str(&format!("\n  ... and {} more", violations.len() - 5));
        }
        message
    }
}

impl Violation {
    fn sort_key(&self) -> (Variable, u8) {
        match self {
            Violation::Unassigned { variable } => (*variable, 0),
            Violation::NotInVocabulary { variable, .. } => (*variable, 1),
            Violation::LengthMismatch { variable, .. } => (*variable, 2),
            Violation::DuplicateWord { second, .. } => (*second, 3),
            Violation::OverlapConflict { first, .. } => (*first, 4),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::Unassigned { variable } => write!(f, "{} has no word", variable),
            Violation::NotInVocabulary { variable, word } => {
                write!(f, "{} holds {}, which is not in the vocabulary", variable, word)
            }
            Violation::LengthMismatch { variable, word } => {
                write!(f, "{} holds {} ({} letters)", variable, word, word.len())
            }
            Violation::DuplicateWord {
                word,
                first,
                second,
            } => write!(f, "{} is used by both {} and {}", word, first, second),
            Violation::OverlapConflict {
                first,
                second,
                cell,
            } => write!(
                f,
                "{} and {} disagree at cell {:?}",
                first, second, cell
            ),
        }
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Validation Result:")?;
        writeln!(f, "  Valid: {}", if self.is_valid { "YES" } else { "NO" })?;
        writeln!(f, "  Violations: {}", self.violations.len())?;
        writeln!(f, "  Time: {}ms", self.validation_time_ms)?;
        for violation in &self.violations {
            writeln!(f, "    - {}", violation)?;
        }
        Ok(())
    }
}
