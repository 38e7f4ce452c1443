//! Lifecycle dispatch for deploy commands
//!
//! Two dispatch entry points mirror the host CLI's lifecycle contract:
//! [`HookDispatcher::prerun`] runs before a deploy command and fails closed
//! (a hook failure aborts the deploy), [`HookDispatcher::postrun`] runs
//! after it and fails open (a hook failure is only a warning, since the
//! deploy already completed).

use crate::executor;
use crate::result_file::{DeployResultRecord, write_deploy_result};
use sfhooks_core::Result;
use std::path::{Path, PathBuf};

/// Command-family prefix that makes any command deploy-related
pub const DEPLOY_COMMAND_PREFIX: &str = "project:deploy";

/// Deploy subcommands that trigger pre-deploy hooks
const PRE_RUN_COMMANDS: [&str; 4] = [
    "project:deploy:start",
    "project:deploy:validate",
    "project:deploy:quick",
    "project:deploy:resume",
];

/// Deploy subcommands that trigger post-deploy hooks. Wider than the
/// pre-run list: cancel and report still warrant post-processing.
const POST_RUN_COMMANDS: [&str; 6] = [
    "project:deploy:start",
    "project:deploy:validate",
    "project:deploy:quick",
    "project:deploy:resume",
    "project:deploy:cancel",
    "project:deploy:report",
];

/// Eligibility is the union of exact allow-list membership and the
/// command-family prefix rule. The explicit entries are kept alongside the
/// prefix rule even where they overlap.
fn is_deploy_command(command_id: &str, allow_list: &[&str]) -> bool {
    allow_list.contains(&command_id) || command_id.starts_with(DEPLOY_COMMAND_PREFIX)
}

/// Logger capability injected by the host framework
///
/// Every method defaults to a silent no-op; a host that wires up only some
/// channels gets exactly those.
pub trait HookLogger {
    /// Informational message shown to the user
    fn info(&self, _message: &str) {}

    /// Diagnostic message, normally hidden
    fn debug(&self, _message: &str) {}

    /// Non-fatal problem the user should see
    fn warn(&self, _message: &str) {}

    /// Fatal problem; the dispatcher still signals failure through its
    /// return value, this channel only reports it
    fn error(&self, _message: &str) {}
}

impl<L: HookLogger + ?Sized> HookLogger for &L {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn debug(&self, message: &str) {
        (**self).debug(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

/// Logger that discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl HookLogger for NoOpLogger {}

/// Logger that forwards every channel to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl HookLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Lifecycle event emitted by the host framework
#[derive(Debug, Clone, Default)]
pub struct LifecycleEvent {
    /// Identifier of the command being run, when known
    pub command_id: Option<String>,

    /// Raw invocation arguments of the command
    pub argv: Vec<String>,

    /// Result payload of the completed command (post-run only)
    pub result: Option<serde_json::Value>,
}

impl LifecycleEvent {
    /// Event for the given command id with no arguments or result
    pub fn new(command_id: impl Into<String>) -> Self {
        Self {
            command_id: Some(command_id.into()),
            ..Self::default()
        }
    }

    /// Attach the raw invocation arguments
    #[must_use]
    pub fn with_argv(mut self, argv: Vec<String>) -> Self {
        self.argv = argv;
        self
    }

    /// Attach the command's result payload
    #[must_use]
    pub fn with_result(mut self, result: serde_json::Value) -> Self {
        self.result = Some(result);
        self
    }
}

/// What a dispatch did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Command not deploy-related, no command id, or no hooks configured
    Skipped,

    /// All hooks ran; carries the number of scripts executed
    Completed(usize),

    /// Hooks failed but the failure was downgraded (post-run only)
    Failed,
}

/// Dispatches lifecycle events to the configured hook scripts
///
/// Hook paths are resolved fresh from the working directory on every
/// dispatch; nothing is cached across invocations.
pub struct HookDispatcher<'a, L = TracingLogger>
where
    L: HookLogger,
{
    working_dir: &'a Path,
    logger: L,
}

impl<'a> HookDispatcher<'a, TracingLogger> {
    /// Create a dispatcher for the given working directory, logging through
    /// `tracing`
    pub fn new(working_dir: &'a Path) -> Self {
        Self {
            working_dir,
            logger: TracingLogger,
        }
    }
}

impl<'a, L> HookDispatcher<'a, L>
where
    L: HookLogger,
{
    /// Replace the logger capability
    pub fn with_logger<M: HookLogger>(self, logger: M) -> HookDispatcher<'a, M> {
        HookDispatcher {
            working_dir: self.working_dir,
            logger,
        }
    }

    /// Handle a pre-run lifecycle event
    ///
    /// Ineligible commands are a no-op. Any failure — configuration parse,
    /// missing script, non-zero exit — is error-logged and propagated so
    /// the host aborts the deploy command.
    pub fn prerun(&self, event: &LifecycleEvent) -> Result<DispatchOutcome> {
        let Some(command_id) = event.command_id.as_deref() else {
            return Ok(DispatchOutcome::Skipped);
        };

        if !is_deploy_command(command_id, &PRE_RUN_COMMANDS) {
            return Ok(DispatchOutcome::Skipped);
        }

        match self.run_pre_deploy(command_id) {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                self.logger.error(&format!("Pre-deploy hook failed: {e}"));
                // Re-signal so the host aborts the deploy command
                Err(e)
            }
        }
    }

    fn run_pre_deploy(&self, command_id: &str) -> Result<DispatchOutcome> {
        let hooks = sfhooks_config::pre_deploy_hooks(self.working_dir)?;

        if hooks.is_empty() {
            self.logger.debug("No pre-deploy hooks configured, skipping...");
            return Ok(DispatchOutcome::Skipped);
        }

        self.logger
            .info(&format!("Running {} pre-deploy hook(s)...", hooks.len()));

        let executed = executor::run_scripts(&hooks, command_id, self.working_dir, None)?;

        self.logger.info("Pre-deploy hooks completed successfully");
        Ok(DispatchOutcome::Completed(executed))
    }

    /// Handle a post-run lifecycle event
    ///
    /// Never fails: the deploy already completed, so every hook problem is
    /// warn-logged and reported as [`DispatchOutcome::Failed`] instead of
    /// surfacing to the host.
    pub fn postrun(&self, event: &LifecycleEvent) -> DispatchOutcome {
        let Some(command_id) = event.command_id.as_deref() else {
            return DispatchOutcome::Skipped;
        };

        if !is_deploy_command(command_id, &POST_RUN_COMMANDS) {
            return DispatchOutcome::Skipped;
        }

        match self.run_post_deploy(command_id, event) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.logger.warn(&format!("Post-deploy hook failed: {e}"));
                DispatchOutcome::Failed
            }
        }
    }

    fn run_post_deploy(&self, command_id: &str, event: &LifecycleEvent) -> Result<DispatchOutcome> {
        let hooks = sfhooks_config::post_deploy_hooks(self.working_dir)?;

        if hooks.is_empty() {
            self.logger.debug("No post-deploy hooks configured, skipping...");
            return Ok(DispatchOutcome::Skipped);
        }

        // Capture the deploy result for hook analysis; best-effort only
        let result_file = event
            .result
            .as_ref()
            .and_then(|payload| self.capture_result(command_id, event, payload));

        self.logger
            .info(&format!("Running {} post-deploy hook(s)...", hooks.len()));

        let executed =
            executor::run_scripts(&hooks, command_id, self.working_dir, result_file.as_deref())?;

        self.logger.info("Post-deploy hooks completed successfully");
        Ok(DispatchOutcome::Completed(executed))
    }

    fn capture_result(
        &self,
        command_id: &str,
        event: &LifecycleEvent,
        payload: &serde_json::Value,
    ) -> Option<PathBuf> {
        let record = DeployResultRecord::new(command_id, event.argv.clone(), payload.clone());

        match write_deploy_result(&record) {
            Ok(path) => {
                self.logger
                    .debug(&format!("Deploy result written to: {}", path.display()));
                Some(path)
            }
            Err(e) => {
                // Hooks still run, just without the result file
                self.logger.warn(&e.to_string());
                None
            }
        }
    }
}
