//! Base error types for sf-deploy-hooks
//!
//! Propagation is phase-dependent and decided at the dispatcher boundary:
//! pre-deploy errors abort the triggering command, post-deploy errors are
//! downgraded to warnings. The taxonomy itself is phase-agnostic.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Base error type shared across the sfhooks crates
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Hook configuration file exists but cannot be parsed
    #[error("Failed to parse {file}: {message}")]
    ConfigParse {
        /// File name of the offending configuration document
        file: String,
        /// Underlying parse error message
        message: String,
    },

    /// Configured or fallback hook script does not exist on disk
    #[error("Hook script not found: {}", path.display())]
    ScriptNotFound {
        /// Resolved path that was checked
        path: PathBuf,
    },

    /// Hook script exited non-zero or was terminated abnormally
    #[error("Hook script '{}' failed: {status}", script.display())]
    ScriptExecution {
        /// Resolved path of the failing script
        script: PathBuf,
        /// Exit status reported by the child process
        status: ExitStatus,
    },

    /// Deploy-result file could not be written (always non-fatal to callers)
    #[error("Failed to write deploy result file: {0}")]
    ResultCapture(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
