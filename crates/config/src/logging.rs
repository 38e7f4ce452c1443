//! Logging configuration for the sf-hooks CLI
//!
//! Provides compact terminal output and optional file logging using tracing.

use sfhooks_core::Result;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable debug level logging
/// * `log_file` - Optional path to write logs to a file
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    // Determine log level based on verbose flag
    let level = if verbose { "debug" } else { "info" };

    // Create environment filter
    // Allows overriding with RUST_LOG env var
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            EnvFilter::try_new(format!(
                "sfhooks_config={level},sfhooks_engine={level},sfhooks={level}"
            ))
        })
        .expect("failed to create default env filter");

    // Optional file layer: always at debug level, with full context.
    // Generic over the subscriber so it can attach to either stdout stack
    // below (their types differ because of `without_time()`).
    fn file_layer<S>(log_file: Option<&Path>) -> std::io::Result<Option<impl Layer<S>>>
    where
        S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    {
        match log_file {
            Some(log_path) => {
                let file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(log_path)?;

                Ok(Some(
                    fmt::layer()
                        .with_writer(Arc::new(file))
                        .with_ansi(false)
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true)
                        .pretty()
                        .with_filter(
                            EnvFilter::try_new("debug").expect("'debug' is a valid filter"),
                        ),
                ))
            }
            None => Ok(None),
        }
    }

    // The stdout layer drops timestamps in normal mode, which changes its
    // type, so each branch composes the registry itself.
    if verbose {
        let stdout_layer = fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .with_ansi(true)
            .with_filter(env_filter);

        tracing_subscriber::registry()
            .with(stdout_layer)
            .with(file_layer(log_file)?)
            .init();
    } else {
        let stdout_layer = fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .without_time()
            .compact()
            .with_ansi(true)
            .with_filter(env_filter);

        tracing_subscriber::registry()
            .with(stdout_layer)
            .with(file_layer(log_file)?)
            .init();
    }

    Ok(())
}
