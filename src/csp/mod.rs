//! Constraint satisfaction core: domains, propagation, heuristics and search

pub mod assignment;
pub mod consistency;
pub mod domains;
pub mod heuristics;
pub mod propagation;
pub mod search;
pub mod solver;
pub mod statistics;

pub use assignment::Assignment;
pub use consistency::is_consistent;
pub use domains::DomainStore;
pub use solver::{CrosswordSolver, SolverOptions};
pub use statistics::SearchStatistics;
