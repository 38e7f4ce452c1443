//! Hook script execution
//!
//! Runs hook scripts synchronously through bash, one at a time, with the
//! parent's stdio inherited so script output and prompts stay visible.
//! Scripts never run concurrently: ordering is part of the contract, and
//! hooks may depend on earlier hooks having finished.

use indexmap::IndexMap;
use sfhooks_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable carrying the triggering command id
pub const COMMAND_ENV_VAR: &str = "SF_COMMAND";

/// Environment variable carrying the deploy-result file path (post-deploy
/// only, and only when a result was captured)
pub const RESULT_FILE_ENV_VAR: &str = "SF_DEPLOY_RESULT_FILE";

/// Resolve a script path against the working directory if relative
fn resolve_script(script: &str, working_dir: &Path) -> PathBuf {
    let path = Path::new(script);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_dir.join(path)
    }
}

/// Build the child environment: a snapshot of the parent's environment plus
/// the hook variables. The parent's own environment is never mutated.
fn hook_env(command_id: &str, result_file: Option<&Path>) -> IndexMap<String, String> {
    let mut env: IndexMap<String, String> = std::env::vars().collect();
    env.insert(COMMAND_ENV_VAR.to_string(), command_id.to_string());
    if let Some(path) = result_file {
        env.insert(RESULT_FILE_ENV_VAR.to_string(), path.display().to_string());
    }
    env
}

/// Run a single hook script synchronously
///
/// The path is resolved against `working_dir` if relative and checked for
/// existence before anything is spawned. Non-zero exit or abnormal
/// termination is [`Error::ScriptExecution`].
pub fn run_script(
    script: &str,
    command_id: &str,
    working_dir: &Path,
    result_file: Option<&Path>,
) -> Result<()> {
    let resolved = resolve_script(script, working_dir);

    if !resolved.exists() {
        return Err(Error::ScriptNotFound { path: resolved });
    }

    tracing::debug!("Running hook: {script}");

    let env = hook_env(command_id, result_file);
    let output = duct::cmd("bash", [&resolved])
        .dir(working_dir)
        .full_env(&env)
        .unchecked()
        .run()?;

    if output.status.success() {
        Ok(())
    } else {
        Err(Error::ScriptExecution {
            script: resolved,
            status: output.status,
        })
    }
}

/// Run an ordered list of hook scripts, stopping at the first failure
///
/// Scripts run strictly sequentially in list order. The first failure
/// (not-found or non-zero exit) propagates immediately; scripts after the
/// failing one are never started. Returns the number of scripts that
/// completed.
pub fn run_scripts(
    scripts: &[String],
    command_id: &str,
    working_dir: &Path,
    result_file: Option<&Path>,
) -> Result<usize> {
    let mut executed = 0;
    for script in scripts {
        run_script(script, command_id, working_dir, result_file)?;
        executed += 1;
    }
    Ok(executed)
}
