//! Error types for the CLI

use core_types::TrioError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Lex, parse or runtime error from the script
    #[error("{0}")]
    Script(#[from] TrioError),

    /// File I/O error
    #[error("could not read file '{path}': {source}")]
    Io {
        /// File that failed to load
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// REPL error
    #[error("REPL error: {0}")]
    Repl(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
