//! Errors raised while building a puzzle from its text inputs

use super::Variable;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("structure contains no rows")]
    EmptyStructure,

    #[error("structure has zero width")]
    ZeroWidth,

    #[error("vocabulary contains no usable words")]
    EmptyVocabulary,

    #[error("variable {0} is not part of this crossword")]
    UnknownVariable(Variable),

    #[error("variable {variable} appears more than once in the solution")]
    DuplicateEntry { variable: Variable },
}
