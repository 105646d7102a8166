//! Error types for name parsing.
//!
//! The engine itself has no recoverable errors: board operations assume
//! pre-validated input and treat violations as programming errors. The only
//! fallible surface is parsing heuristic and strategy names from the
//! command line.

use std::fmt;

/// Error type for heuristic name parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHeuristicError {
    /// The unrecognized name
    pub name: String,
}

impl fmt::Display for ParseHeuristicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown heuristic '{}', expected standard, bad, equalize, or combined",
            self.name
        )
    }
}

impl std::error::Error for ParseHeuristicError {}

/// Error type for strategy name parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    /// The unrecognized name
    pub name: String,
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown strategy '{}', expected standard, custom, avgmax, negamax, or random",
            self.name
        )
    }
}

impl std::error::Error for ParseStrategyError {}
