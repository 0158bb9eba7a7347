//! Crossword geometry and vocabulary

pub mod error;
pub mod grid;
pub mod io;
pub mod variable;
pub mod vocabulary;

pub use error::PuzzleError;
pub use grid::{Crossword, Overlaps, VarId};
pub use io::{
    create_example_puzzles, load_crossword_from_file, load_vocabulary_from_file,
    save_crossword_to_file,
};
pub use variable::{Direction, Variable};
pub use vocabulary::{Vocabulary, Word};
