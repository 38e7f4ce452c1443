//! Hook configuration resolution
//!
//! Locates and parses the hook configuration document in the working
//! directory and resolves the ordered script list for each deploy phase.
//! The document is re-read on every resolution so edits take effect without
//! restarting the host CLI.
//!
//! Schema (both arrays optional):
//!
//! ```json
//! { "hooks": { "preDeploy": ["a.sh"], "postDeploy": ["b.sh"] } }
//! ```

use serde::{Deserialize, Serialize};
use sfhooks_core::{Error, Result};
use std::fs;
use std::path::Path;

/// Configuration file names to search for, in order of preference
pub const CONFIG_FILES: [&str; 2] = [".sfhooks.json", "sf-hooks.json"];

/// Conventional pre-deploy script honored when no `preDeploy` list is
/// configured. There is no post-deploy equivalent.
pub const LEGACY_PRE_DEPLOY_SCRIPT: &str = "./hooks/pre-deploy.sh";

/// Top-level hook configuration document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HooksConfig {
    /// Per-phase hook lists
    #[serde(default)]
    pub hooks: HookLists,
}

/// Ordered script lists for each deploy phase
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HookLists {
    /// Scripts to run before a deploy command
    #[serde(default, rename = "preDeploy")]
    pub pre_deploy: Vec<String>,

    /// Scripts to run after a deploy command
    #[serde(default, rename = "postDeploy")]
    pub post_deploy: Vec<String>,
}

/// Load the hook configuration document from the working directory
///
/// Searches [`CONFIG_FILES`] in order; the first existing file wins and
/// later candidates are never consulted. Returns `Ok(None)` when no
/// candidate exists. A file that exists but cannot be parsed is an error,
/// never silently ignored.
pub fn load_config(working_dir: &Path) -> Result<Option<HooksConfig>> {
    for file in CONFIG_FILES {
        let path = working_dir.join(file);
        if !path.exists() {
            continue;
        }

        tracing::debug!("Loading hook configuration: {}", path.display());
        let content = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
            file: file.to_string(),
            message: e.to_string(),
        })?;
        return Ok(Some(config));
    }

    Ok(None)
}

/// Resolve the ordered pre-deploy hook list for the working directory
///
/// The configured `preDeploy` list wins when it is present and non-empty.
/// Otherwise the legacy `./hooks/pre-deploy.sh` convention applies when
/// that file exists. An empty list is valid and means no hooks.
pub fn pre_deploy_hooks(working_dir: &Path) -> Result<Vec<String>> {
    if let Some(config) = load_config(working_dir)?
        && !config.hooks.pre_deploy.is_empty()
    {
        return Ok(config.hooks.pre_deploy);
    }

    // Fallback: legacy convention script
    if working_dir.join(LEGACY_PRE_DEPLOY_SCRIPT).exists() {
        return Ok(vec![LEGACY_PRE_DEPLOY_SCRIPT.to_string()]);
    }

    Ok(Vec::new())
}

/// Resolve the ordered post-deploy hook list for the working directory
///
/// Returns the configured `postDeploy` list, or an empty list when the
/// document or the field is absent. No legacy fallback.
pub fn post_deploy_hooks(working_dir: &Path) -> Result<Vec<String>> {
    Ok(load_config(working_dir)?
        .map(|config| config.hooks.post_deploy)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, file: &str, content: &str) {
        fs::write(dir.join(file), content).unwrap();
    }

    fn write_legacy_script(dir: &Path) {
        fs::create_dir_all(dir.join("hooks")).unwrap();
        fs::write(dir.join("hooks/pre-deploy.sh"), "#!/bin/bash\n").unwrap();
    }

    #[test]
    fn test_load_config_absent() {
        let temp = TempDir::new().unwrap();
        assert!(load_config(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_primary_name() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            ".sfhooks.json",
            r#"{"hooks": {"preDeploy": ["a.sh", "b.sh"]}}"#,
        );

        let config = load_config(temp.path()).unwrap().unwrap();
        assert_eq!(config.hooks.pre_deploy, vec!["a.sh", "b.sh"]);
        assert!(config.hooks.post_deploy.is_empty());
    }

    #[test]
    fn test_load_config_secondary_name() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "sf-hooks.json",
            r#"{"hooks": {"postDeploy": ["notify.sh"]}}"#,
        );

        let config = load_config(temp.path()).unwrap().unwrap();
        assert_eq!(config.hooks.post_deploy, vec!["notify.sh"]);
    }

    #[test]
    fn test_load_config_primary_wins_over_secondary() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            ".sfhooks.json",
            r#"{"hooks": {"preDeploy": ["primary.sh"]}}"#,
        );
        // The secondary file is malformed; it must never be consulted
        write_config(temp.path(), "sf-hooks.json", "not json at all");

        let config = load_config(temp.path()).unwrap().unwrap();
        assert_eq!(config.hooks.pre_deploy, vec!["primary.sh"]);
    }

    #[test]
    fn test_load_config_malformed_is_error() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), ".sfhooks.json", "{ this is not json");

        let err = load_config(temp.path()).unwrap_err();
        match err {
            Error::ConfigParse { file, .. } => assert_eq!(file, ".sfhooks.json"),
            other => panic!("expected ConfigParse, got: {other}"),
        }
    }

    #[test]
    fn test_load_config_missing_hooks_field() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), ".sfhooks.json", "{}");

        let config = load_config(temp.path()).unwrap().unwrap();
        assert!(config.hooks.pre_deploy.is_empty());
        assert!(config.hooks.post_deploy.is_empty());
    }

    #[test]
    fn test_pre_deploy_configured_list() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            ".sfhooks.json",
            r#"{"hooks": {"preDeploy": ["a.sh", "b.sh"]}}"#,
        );
        // Legacy script present but the configured list takes precedence
        write_legacy_script(temp.path());

        let hooks = pre_deploy_hooks(temp.path()).unwrap();
        assert_eq!(hooks, vec!["a.sh", "b.sh"]);
    }

    #[test]
    fn test_pre_deploy_legacy_fallback() {
        let temp = TempDir::new().unwrap();
        write_legacy_script(temp.path());

        let hooks = pre_deploy_hooks(temp.path()).unwrap();
        assert_eq!(hooks, vec![LEGACY_PRE_DEPLOY_SCRIPT]);
    }

    #[test]
    fn test_pre_deploy_empty_configured_list_falls_back() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), ".sfhooks.json", r#"{"hooks": {"preDeploy": []}}"#);
        write_legacy_script(temp.path());

        let hooks = pre_deploy_hooks(temp.path()).unwrap();
        assert_eq!(hooks, vec![LEGACY_PRE_DEPLOY_SCRIPT]);
    }

    #[test]
    fn test_pre_deploy_nothing_configured() {
        let temp = TempDir::new().unwrap();
        assert!(pre_deploy_hooks(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_post_deploy_no_legacy_fallback() {
        let temp = TempDir::new().unwrap();
        write_legacy_script(temp.path());

        assert!(post_deploy_hooks(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_post_deploy_configured_list() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            ".sfhooks.json",
            r#"{"hooks": {"postDeploy": ["notify.sh", "cleanup.sh"]}}"#,
        );

        let hooks = post_deploy_hooks(temp.path()).unwrap();
        assert_eq!(hooks, vec!["notify.sh", "cleanup.sh"]);
    }

    #[test]
    fn test_config_reread_on_every_resolution() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), ".sfhooks.json", r#"{"hooks": {"postDeploy": ["old.sh"]}}"#);
        assert_eq!(post_deploy_hooks(temp.path()).unwrap(), vec!["old.sh"]);

        write_config(temp.path(), ".sfhooks.json", r#"{"hooks": {"postDeploy": ["new.sh"]}}"#);
        assert_eq!(post_deploy_hooks(temp.path()).unwrap(), vec!["new.sh"]);
    }
}
