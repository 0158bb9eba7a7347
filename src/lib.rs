//! Crossword Generator
//!
//! Fills a crossword structure with words from a vocabulary by treating every slot as
//! a variable of a constraint satisfaction problem: node and arc consistency prune the
//! candidate words, then a backtracking search with ordering heuristics completes
//! the fill.

pub mod config;
pub mod crossword;
pub mod csp;
pub mod generate;
pub mod utils;

pub use config::Settings;
pub use crossword::{Crossword, Variable, Vocabulary};
pub use csp::{Assignment, CrosswordSolver};
pub use generate::{CrosswordProblem, Solution};

use anyhow::Result;

/// Main entry point for filling a crossword described by `settings`
pub fn solve_crossword(settings: Settings) -> Result<Option<Solution>> {
    let problem = CrosswordProblem::new(settings)?;
    problem.solve()
}
