//! Configuration management for the crossword generator

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, LcvScoring, OutputConfig, OutputFormat, Settings, SolverConfig,
    ValueOrdering, VariableOrdering,
};
