//! Configuration settings for the crossword generator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub input: InputConfig,
    pub solver: SolverConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub structure_file: PathBuf,
    pub words_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    pub variable_ordering: VariableOrdering,
    pub value_ordering: ValueOrdering,
    pub lcv_scoring: LcvScoring,
    /// Split the first branching point across the rayon pool
    pub parallel: bool,
}

/// How the search picks the next slot to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableOrdering {
    /// Fewest remaining candidates first, ties go to the slot with most crossings
    MrvDegree,
    /// Slots in structure order
    Static,
}

/// How the search orders candidate words for a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueOrdering {
    LeastConstraining,
    Lexicographic,
}

/// How a candidate word is scored by the least-constraining-value ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LcvScoring {
    /// Number of crossing candidates the word would rule out
    Exact,
    /// Number of unassigned crossings with at least one ruled-out candidate
    FirstConflict,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Svg,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: InputConfig {
                structure_file: PathBuf::from("puzzles/structure0.txt"),
                words_file: PathBuf::from("puzzles/words0.txt"),
            },
            solver: SolverConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Text,
                output_file: None,
            },
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            variable_ordering: VariableOrdering::MrvDegree,
            value_ordering: ValueOrdering::LeastConstraining,
            lcv_scoring: LcvScoring::Exact,
            parallel: false,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Check that the referenced input files exist
    pub fn validate(&self) -> Result<()> {
        if !self.input.structure_file.exists() {
            anyhow::bail!(
                "Structure file does not exist: {}",
                self.input.structure_file.display()
            );
        }

        if !self.input.words_file.exists() {
            anyhow::bail!("Words file does not exist: {}", self.input.words_file.display());
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref structure_file) = cli_overrides.structure_file {
            self.input.structure_file = structure_file.clone();
        }
        if let Some(ref words_file) = cli_overrides.words_file {
            self.input.words_file = words_file.clone();
        }
        if let Some(ref output_file) = cli_overrides.output_file {
            self.output.output_file = Some(output_file.clone());
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if cli_overrides.parallel {
            self.solver.parallel = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub structure_file: Option<PathBuf>,
    pub words_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub parallel: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_yaml_round_trip_keeps_solver_choices() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/custom.yaml");

        let mut settings = Settings::default();
        settings.solver.variable_ordering = VariableOrdering::Static;
        settings.solver.lcv_scoring = LcvScoring::FirstConflict;
        settings.output.format = OutputFormat::Svg;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.solver.variable_ordering, VariableOrdering::Static);
        assert_eq!(loaded.solver.value_ordering, ValueOrdering::LeastConstraining);
        assert_eq!(loaded.solver.lcv_scoring, LcvScoring::FirstConflict);
        assert_eq!(loaded.output.format, OutputFormat::Svg);
        assert!(loaded.output.output_file.is_none());
    }

    #[test]
    fn test_snake_case_enums_in_yaml() {
        let yaml = serde_yaml::to_string(&Settings::default()).unwrap();
        assert!(yaml.contains("mrv_degree"));
        assert!(yaml.contains("least_constraining"));
    }

    #[test]
    fn test_validate_reports_missing_files() {
        let mut settings = Settings::default();
        settings.input.structure_file = PathBuf::from("definitely/missing/structure.txt");
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("Structure file does not exist"));
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            words_file: Some(PathBuf::from("words2.txt")),
            format: Some(OutputFormat::Json),
            parallel: true,
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.input.words_file, PathBuf::from("words2.txt"));
        assert_eq!(settings.input.structure_file, PathBuf::from("puzzles/structure0.txt"));
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(settings.solver.parallel);
    }
}
