//! CLI error types.

use thiserror::Error;

use crate::seed::SeedError;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the operator at startup.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Seed(#[from] SeedError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
