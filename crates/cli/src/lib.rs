//! sf-hooks CLI library
//!
//! Host-integration adapter: a thin command-line surface that turns
//! lifecycle notifications from the deploy CLI into dispatcher calls. A
//! pre-run hook failure becomes a non-zero exit (the abort signal); a
//! post-run hook failure never does.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sfhooks_engine::{HookDispatcher, LifecycleEvent};
use std::path::PathBuf;

/// sf-hooks - deploy lifecycle hooks for the sf CLI
#[derive(Parser)]
#[command(name = "sf-hooks")]
#[command(about = "Run configured hook scripts around sf deploy commands")]
#[command(version)]
#[command(long_about = "Run configured hook scripts around sf deploy commands.

Hook scripts are listed in .sfhooks.json (or sf-hooks.json) in the working
directory:

  { \"hooks\": { \"preDeploy\": [\"a.sh\"], \"postDeploy\": [\"b.sh\"] } }

Scripts receive SF_COMMAND, and post-deploy scripts additionally receive
SF_DEPLOY_RESULT_FILE when a deploy result was captured.")]
pub struct Cli {
    /// Working directory holding the hook configuration and scripts
    #[arg(long, env = "SF_HOOKS_CWD", value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "SF_HOOKS_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the sf-hooks CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Run pre-deploy hooks before a deploy command executes
    ///
    /// Exits non-zero when a hook fails so the host aborts the deploy.
    Prerun {
        /// Identifier of the triggering command, e.g. project:deploy:start
        #[arg(value_name = "COMMAND_ID")]
        command_id: String,

        /// Raw arguments of the triggering command
        #[arg(value_name = "ARGV", trailing_var_arg = true, allow_hyphen_values = true)]
        argv: Vec<String>,
    },

    /// Run post-deploy hooks after a deploy command completed
    ///
    /// Hook failures are downgraded to warnings; the exit code stays zero.
    Postrun {
        /// Identifier of the triggering command, e.g. project:deploy:start
        #[arg(value_name = "COMMAND_ID")]
        command_id: String,

        /// JSON file holding the deploy-result payload
        #[arg(long, value_name = "FILE")]
        result: Option<PathBuf>,

        /// Raw arguments of the triggering command
        #[arg(value_name = "ARGV", trailing_var_arg = true, allow_hyphen_values = true)]
        argv: Vec<String>,
    },
}

/// Run the parsed CLI command
pub fn run(cli: Cli) -> Result<()> {
    sfhooks_config::logging::init(cli.verbose, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    let working_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine working directory")?,
    };

    let dispatcher = HookDispatcher::new(&working_dir);

    match cli.command {
        Commands::Prerun { command_id, argv } => {
            let event = LifecycleEvent::new(command_id).with_argv(argv);
            dispatcher.prerun(&event).context("Pre-deploy hooks failed")?;
        }
        Commands::Postrun {
            command_id,
            result,
            argv,
        } => {
            let mut event = LifecycleEvent::new(command_id).with_argv(argv);
            if let Some(path) = result {
                let content = std::fs::read_to_string(&path).with_context(|| {
                    format!("Failed to read result payload {}", path.display())
                })?;
                let payload = serde_json::from_str(&content).with_context(|| {
                    format!("Invalid JSON in result payload {}", path.display())
                })?;
                event = event.with_result(payload);
            }

            // Infallible by contract: the deploy already completed
            dispatcher.postrun(&event);
        }
    }

    Ok(())
}
