//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod contact;
pub mod products;
pub mod promo;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List products with filters, sorting and paging.
    List {
        /// Audience: men, women or children.
        #[arg(long)]
        category: Option<String>,

        /// Product type, e.g. sandals or half-shoes. Repeatable.
        #[arg(short = 't', long = "type")]
        types: Vec<String>,

        /// Text to look for in names and descriptions.
        #[arg(short, long)]
        search: Option<String>,

        /// Minimum price in Naira.
        #[arg(long)]
        min_price: Option<i64>,

        /// Maximum price in Naira.
        #[arg(long)]
        max_price: Option<i64>,

        /// Hide out-of-stock products.
        #[arg(long)]
        in_stock: bool,

        /// featured, price-asc, price-desc, name-asc, name-desc, rating or best-selling.
        #[arg(long, default_value = "featured")]
        sort: String,

        #[arg(short, long, default_value = "1")]
        page: i64,

        #[arg(long, default_value = "12")]
        per_page: i64,
    },
    /// Show one product.
    Show {
        /// Product id.
        id: String,
    },
    /// Products in the same category.
    Related {
        /// Product id.
        id: String,
    },
    /// Most-bought products.
    BestSellers {
        #[arg(short, long, default_value_t = shfeet_commerce::catalog::BEST_SELLER_LIMIT)]
        limit: usize,
    },
    /// Featured products.
    Featured {
        #[arg(short, long, default_value_t = shfeet_commerce::catalog::FEATURED_LIMIT)]
        limit: usize,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

/// Identifies a cart line.
#[derive(Args)]
pub struct LineArgs {
    /// Product id.
    pub id: String,

    #[arg(short, long)]
    pub size: String,

    #[arg(long)]
    pub color: String,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart and its totals.
    Show {
        /// Promo code to price the cart with.
        #[arg(long)]
        promo: Option<String>,
    },
    /// Add a product in a size and colour.
    Add {
        #[command(flatten)]
        line: LineArgs,

        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Set the quantity of a line.
    Update {
        #[command(flatten)]
        line: LineArgs,

        #[arg(short, long)]
        quantity: u32,
    },
    /// Remove a line.
    Remove {
        #[command(flatten)]
        line: LineArgs,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the promo command.
#[derive(Args)]
pub struct PromoArgs {
    #[command(subcommand)]
    pub command: PromoCommand,
}

#[derive(Subcommand)]
pub enum PromoCommand {
    /// Preview the cart with a promo code applied.
    Apply {
        code: String,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Promo code to apply.
    #[arg(long)]
    pub promo: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    /// Street address; required for Abuja.
    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// State value, e.g. lagos or akwa-ibom.
    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Skip prompts; missing fields stay blank.
    #[arg(long)]
    pub no_input: bool,

    /// Approve the charge without asking.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub subject: Option<String>,

    #[arg(short, long)]
    pub message: Option<String>,

    /// Skip prompts; missing fields stay blank.
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
