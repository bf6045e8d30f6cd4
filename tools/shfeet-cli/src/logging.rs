//! Tracing subscriber setup.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable format.
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "human" | "pretty" | "text" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("Unknown log format: {}", other)),
        }
    }
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays clean.
///
/// `--verbose` forces debug; otherwise `RUST_LOG` wins over the configured
/// level.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(&config.level, verbose, env.as_deref());
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| anyhow!("Invalid log filter '{}': {}", directive, e))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match LogFormat::parse(&config.format)? {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.compact().try_init(),
    };
    installed.map_err(|e| anyhow!("Failed to install logger: {}", e))
}

fn filter_directive<'a>(level: &'a str, verbose: bool, env: Option<&'a str>) -> &'a str {
    if verbose {
        return "debug";
    }
    match env {
        Some(env) if !env.trim().is_empty() => env,
        _ => level,
    }
}
