//! Filling a crossword end to end and checking the result

pub mod problem;
pub mod solution;
pub mod validator;

pub use problem::{CrosswordProblem, PropagationReport, SlotReport};
pub use solution::{Solution, SolutionEntry, SolutionMetadata};
pub use validator::{SolutionValidator, ValidationResult, Violation};
