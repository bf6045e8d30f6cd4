//! SHFeet CLI - the storefront from a terminal.
//!
//! Commands:
//! - `shfeet products` - Browse the catalog
//! - `shfeet cart` - Manage the cart
//! - `shfeet promo` - Preview a promo code
//! - `shfeet checkout` - Pay for the cart
//! - `shfeet contact` - Message the store
//! - `shfeet config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CheckoutArgs, ConfigArgs, ContactArgs, ProductsArgs, PromoArgs};

/// SHFeet CLI - Browse, fill a cart and check out
#[derive(Parser)]
#[command(name = "shfeet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Products(ProductsArgs),

    /// Manage the cart
    Cart(CartArgs),

    /// Preview a promo code
    Promo(PromoArgs),

    /// Pay for the cart
    Checkout(CheckoutArgs),

    /// Send a message to the store
    Contact(ContactArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&ctx.config.logging, cli.verbose) {
        ctx.output.warn(&format!("{:#}", e));
    }
    match &ctx.config_path {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!("no config file found, using defaults"),
    }

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Promo(args) => commands::promo::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Contact(args) => commands::contact::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
