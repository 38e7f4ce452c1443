//! Deploy-result capture
//!
//! After a deploy command completes, its result payload is written to a
//! JSON file under a dedicated subdirectory of the system temp area so
//! post-deploy hooks can inspect it. The file is written once per
//! invocation and never cleaned up here; temp-directory lifetime is the
//! operating system's concern.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sfhooks_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory of the system temp area holding deploy-result files
pub const RESULT_DIR_NAME: &str = "sf-deploy-hooks";

/// Snapshot of a completed deploy command, as exposed to post-deploy hooks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployResultRecord {
    /// Triggering command id
    pub command: String,

    /// Raw invocation arguments of the triggering command
    pub argv: Vec<String>,

    /// RFC-3339 timestamp taken when the record was built
    pub timestamp: String,

    /// Opaque result payload reported by the command
    pub result: serde_json::Value,
}

impl DeployResultRecord {
    /// Build a record for the given command, stamped with the current time
    pub fn new(
        command: impl Into<String>,
        argv: Vec<String>,
        result: serde_json::Value,
    ) -> Self {
        Self {
            command: command.into(),
            argv,
            timestamp: Utc::now().to_rfc3339(),
            result,
        }
    }
}

/// Write a deploy-result record under the process-wide temp area
///
/// The file lands at `<tempdir>/sf-deploy-hooks/deploy-result-<epoch-ms>.json`.
/// The epoch-millisecond suffix is unique enough for a single invocation.
pub fn write_deploy_result(record: &DeployResultRecord) -> Result<PathBuf> {
    write_deploy_result_to(&std::env::temp_dir().join(RESULT_DIR_NAME), record)
}

/// Write a deploy-result record under an explicit directory
pub fn write_deploy_result_to(dir: &Path, record: &DeployResultRecord) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| Error::ResultCapture(e.to_string()))?;

    let path = dir.join(format!("deploy-result-{}.json", Utc::now().timestamp_millis()));
    let json =
        serde_json::to_string_pretty(record).map_err(|e| Error::ResultCapture(e.to_string()))?;
    fs::write(&path, json).map_err(|e| Error::ResultCapture(e.to_string()))?;

    Ok(path)
}
