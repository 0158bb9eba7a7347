//! Crossword generation problem: a structure, a word list and solver settings

use super::{Solution, SolutionValidator};
use crate::config::Settings;
use crate::crossword::{load_crossword_from_file, load_vocabulary_from_file, Crossword, Variable, Vocabulary};
use crate::csp::{CrosswordSolver, SearchStatistics, SolverOptions};
use anyhow::{Context, Result};
use log::{info, warn};
use std::time::Instant;

/// Represents one crossword to fill
pub struct CrosswordProblem {
    settings: Settings,
    crossword: Crossword,
    vocabulary: Vocabulary,
}

/// Domain sizes after propagation, without searching
#[derive(Debug, Clone)]
pub struct PropagationReport {
    pub slots: Vec<SlotReport>,
    pub vocabulary_size: usize,
    pub fillable_cells: usize,
    pub crossings: usize,
    pub arc_consistent: bool,
    pub statistics: SearchStatistics,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotReport {
    pub variable: Variable,
    pub degree: usize,
    pub candidates: usize,
}

impl CrosswordProblem {
    /// Create a new problem, loading both input files named in the settings
    pub fn new(settings: Settings) -> Result<Self> {
        let crossword = load_crossword_from_file(&settings.input.structure_file)
            .context("Failed to load structure file")?;
        let vocabulary = load_vocabulary_from_file(&settings.input.words_file)
            .context("Failed to load words file")?;

        Ok(Self::with_puzzle(settings, crossword, vocabulary))
    }

    /// Create a problem from an already parsed puzzle (useful for testing)
    pub fn with_puzzle(settings: Settings, crossword: Crossword, vocabulary: Vocabulary) -> Self {
        Self {
            settings,
            crossword,
            vocabulary,
        }
    }

    /// Fill the crossword. `Ok(None)` means no fill exists with this vocabulary.
    pub fn solve(&self) -> Result<Option<Solution>> {
        let start_time = Instant::now();

        info!(
            "Filling {}x{} crossword: {} slots, {} crossings, {} words",
            self.crossword.width,
            self.crossword.height,
            self.crossword.variable_count(),
            self.crossword.overlaps().len(),
            self.vocabulary.len()
        );

        let options = SolverOptions::from(&self.settings.solver);
        let mut solver = CrosswordSolver::with_options(&self.crossword, &self.vocabulary, options);
        let Some(assignment) = solver.solve() else {
            warn!("No solution found");
            return Ok(None);
        };
        let solve_time = start_time.elapsed();

        let validation = SolutionValidator::new(&self.crossword, &self.vocabulary).validate(&assignment);
        if !validation.is_valid {
            anyhow::bail!(
                "Solver produced an invalid fill: {}",
                validation
                    .error_message
                    .unwrap_or_else(|| "Unknown error".to_string())
            );
        }

        info!("Found a fill in {:.3}s", solve_time.as_secs_f64());
        Ok(Some(Solution::new(
            &self.crossword,
            &assignment,
            solve_time,
            solver.statistics().clone(),
        )))
    }

    /// Run propagation only and report what is left of every domain
    pub fn analyze(&self) -> PropagationReport {
        let options = SolverOptions::from(&self.settings.solver);
        let mut solver = CrosswordSolver::with_options(&self.crossword, &self.vocabulary, options);
        let arc_consistent = solver.propagate();

        let slots = self
            .crossword
            .variables()
            .iter()
            .enumerate()
            .map(|(id, variable)| SlotReport {
                variable: *variable,
                degree: self.crossword.neighbors(id).len(),
                candidates: solver.domains().len(id),
            })
            .collect();

        PropagationReport {
            slots,
            vocabulary_size: self.vocabulary.len(),
            fillable_cells: self.crossword.fillable_count(),
            crossings: self.crossword.overlaps().len(),
            arc_consistent,
            statistics: solver.statistics().clone(),
        }
    }

    pub fn crossword(&self) -> &Crossword {
        &self.crossword
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Get the problem settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl PropagationReport {
    /// Product of the remaining domain sizes, saturating
    pub fn search_space(&self) -> u128 {
        self.slots
            .iter()
            .fold(1u128, |acc, slot| acc.saturating_mul(slot.candidates as u128))
    }
}

impl std::fmt::Display for PropagationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Propagation Report:")?;
        writeln!(f, "  Slots: {}", self.slots.len())?;
        writeln!(f, "  Fillable cells: {}", self.fillable_cells)?;
        writeln!(f, "  Crossings: {}", self.crossings)?;
        writeln!(f, "  Vocabulary: {} words", self.vocabulary_size)?;
        writeln!(f, "  Arc consistent: {}", if self.arc_consistent { "YES" } else { "NO" })?;
        writeln!(f, "  Remaining search space: {}", self.search_space())?;
        for slot in &self.slots {
            writeln!(
                f,
                "    {} - {} candidates, {} crossings",
                slot.variable, slot.candidates, slot.degree
            )?;
        }
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossword::io::{EXAMPLE_STRUCTURE, EXAMPLE_WORDS, UNSOLVABLE_STRUCTURE, UNSOLVABLE_WORDS};
    use crate::crossword::create_example_puzzles;
    use crate::config::VariableOrdering;
    use tempfile::tempdir;

    fn example_problem(settings: Settings) -> CrosswordProblem {
        CrosswordProblem::with_puzzle(
            settings,
            Crossword::parse(EXAMPLE_STRUCTURE).unwrap(),
            Vocabulary::parse(EXAMPLE_WORDS).unwrap(),
        )
    }

    #[test]
    fn test_problem_from_files() {
        let temp_dir = tempdir().unwrap();
        create_example_puzzles(temp_dir.path()).unwrap();

        let mut settings = Settings::default();
        settings.input.structure_file = temp_dir.path().join("structure0.txt");
        settings.input.words_file = temp_dir.path().join("words0.txt");

        let problem = CrosswordProblem::new(settings).unwrap();
        assert_eq!(problem.crossword().variable_count(), 4);
        assert_eq!(problem.vocabulary().len(), 10);
    }

    #[test]
    fn test_missing_input_file() {
        let mut settings = Settings::default();
        settings.input.structure_file = "does/not/exist.txt".into();
        assert!(CrosswordProblem::new(settings).is_err());
    }

    #[test]
    fn test_solve_example() {
        let solution = example_problem(Settings::default()).solve().unwrap().unwrap();
        assert_eq!(solution.rows[0], "#SIX#");
        assert_eq!(solution.rows[4], "#NINE");
        assert_eq!(solution.statistics.extensions, 4);
    }

    #[test]
    fn test_solve_with_static_ordering_in_parallel() {
        let mut settings = Settings::default();
        settings.solver.variable_ordering = VariableOrdering::Static;
        settings.solver.parallel = true;

        let solution = example_problem(settings).solve().unwrap().unwrap();
        assert_eq!(solution.rows[4], "#NINE");
    }

    #[test]
    fn test_unsolvable_problem() {
        let problem = CrosswordProblem::with_puzzle(
            Settings::default(),
            Crossword::parse(UNSOLVABLE_STRUCTURE).unwrap(),
            Vocabulary::parse(UNSOLVABLE_WORDS).unwrap(),
        );
        assert!(problem.solve().unwrap().is_none());
    }

    #[test]
    fn test_analyze_example() {
        let report = example_problem(Settings::default()).analyze();
        assert!(report.arc_consistent);
        assert_eq!(report.vocabulary_size, 10);
        assert_eq!(report.crossings, 3);
        assert_eq!(report.fillable_cells, 13);

        let candidates: Vec<usize> = report.slots.iter().map(|s| s.candidates).collect();
        assert_eq!(candidates, vec![1, 1, 2, 1]);
        assert_eq!(report.search_space(), 2);
        assert_eq!(report.slots[1].degree, 2);
        assert!(report.to_string().contains("Arc consistent: YES"));
    }

    #[test]
    fn test_analyze_unsolvable() {
        let problem = CrosswordProblem::with_puzzle(
            Settings::default(),
            Crossword::parse(UNSOLVABLE_STRUCTURE).unwrap(),
            Vocabulary::parse(UNSOLVABLE_WORDS).unwrap(),
        );
        let report = problem.analyze();
        assert!(!report.arc_consistent);
        assert_eq!(report.search_space(), 0);
    }
}
