//! Hook execution engine for sf-deploy-hooks
//!
//! This crate provides:
//! - Synchronous hook-script execution with a controlled environment
//! - Deploy-result capture to a discoverable temp-file location
//! - The pre-run/post-run lifecycle dispatcher that ties command
//!   eligibility, configuration resolution, and execution together

pub mod dispatcher;
pub mod executor;
pub mod result_file;

// Re-export error types from core
pub use sfhooks_core::{Error, Result};

// Re-export main types
pub use dispatcher::{
    DispatchOutcome, HookDispatcher, HookLogger, LifecycleEvent, NoOpLogger, TracingLogger,
};
pub use result_file::DeployResultRecord;
