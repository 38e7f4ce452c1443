//! Configuration management for sf-deploy-hooks
//!
//! This crate handles:
//! - Hook configuration document lookup and parsing
//! - Per-phase hook-list resolution (with the legacy pre-deploy fallback)
//! - Logging initialization

pub mod hooks;
pub mod logging;

// Re-export error types from core
pub use sfhooks_core::{Error, Result};

// Re-export main types
pub use hooks::{HookLists, HooksConfig, load_config, post_deploy_hooks, pre_deploy_hooks};
