//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES, PUBLIC_KEY_ENV};
use crate::context::Context;
use crate::logging::LogFormat;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;
    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("data_dir", &config.store.data_dir);

    ctx.output.info("");
    ctx.output.info("[api]");
    ctx.output.kv("base_url", &config.api.base_url);
    ctx.output.kv("timeout_secs", &config.api.timeout_secs.to_string());

    ctx.output.info("");
    ctx.output.info("[payment]");
    ctx.output.kv("public_key", &mask(&config.payment.public_key));
    ctx.output.kv("currency", &config.payment.currency);

    ctx.output.info("");
    ctx.output.info("[delivery]");
    ctx.output.kv("free_threshold", &config.delivery.free_threshold.to_string());
    ctx.output.kv("few_items_fee", &config.delivery.few_items_fee.to_string());
    ctx.output.kv("many_items_fee", &config.delivery.many_items_fee.to_string());
    ctx.output.kv("few_items_limit", &config.delivery.few_items_limit.to_string());

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &config.logging.level);
    ctx.output.kv("format", &config.logging.format);

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));
    ctx.output.info(&format!(
        "Set payment.public_key or {} before checking out.",
        PUBLIC_KEY_ENV
    ));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check(&ctx.config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Collect problems with a config as (errors, warnings).
fn check(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if let Err(e) = config.delivery_policy() {
        errors.push(format!("{:#}", e));
    }
    if config.delivery.few_items_limit == 0 {
        warnings.push("delivery.few_items_limit of 0 means every order pays the larger fee".into());
    }

    let base_url = &config.api.base_url;
    if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
        errors.push(format!("api.base_url '{}' must be an http(s) URL", base_url));
    }
    if config.api.timeout_secs == 0 {
        errors.push("api.timeout_secs must be greater than 0".into());
    }

    let key = &config.payment.public_key;
    if key.is_empty() {
        warnings.push(format!(
            "payment.public_key is not set (or set {}); checkout will fail",
            PUBLIC_KEY_ENV
        ));
    } else if key.starts_with("sk_") {
        errors.push("payment.public_key looks like a secret key; use the public key".into());
    } else if !key.starts_with("pk_") {
        warnings.push("payment.public_key usually starts with pk_".into());
    }

    if let Err(e) = LogFormat::parse(&config.logging.format) {
        errors.push(format!("logging.format: {}", e));
    }

    (errors, warnings)
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["store", "data_dir"] => Ok(format!("\"{}\"", config.store.data_dir)),
        ["api", "base_url"] => Ok(format!("\"{}\"", config.api.base_url)),
        ["api", "timeout_secs"] => Ok(config.api.timeout_secs.to_string()),
        ["payment", "public_key"] => Ok(format!("\"{}\"", config.payment.public_key)),
        ["payment", "currency"] => Ok(format!("\"{}\"", config.payment.currency)),
        ["delivery", "free_threshold"] => Ok(config.delivery.free_threshold.to_string()),
        ["delivery", "few_items_fee"] => Ok(config.delivery.few_items_fee.to_string()),
        ["delivery", "many_items_fee"] => Ok(config.delivery.many_items_fee.to_string()),
        ["delivery", "few_items_limit"] => Ok(config.delivery.few_items_limit.to_string()),
        ["logging", "level"] => Ok(format!("\"{}\"", config.logging.level)),
        ["logging", "format"] => Ok(format!("\"{}\"", config.logging.format)),
        _ => bail!("Unknown config key: {}", key),
    }
}

/// Show only the start of a key.
fn mask(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }
    let shown: String = key.chars().take(8).collect();
    format!("{}…", shown)
}
