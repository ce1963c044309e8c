//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod login;
pub mod orders;
pub mod product;
pub mod search;

use clap::{Args, Subcommand};

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Account email (prompted when omitted).
    #[arg(short, long)]
    pub email: Option<String>,

    /// Account password (prompted when omitted).
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search term.
    pub term: Option<String>,

    /// Page to show (1-indexed).
    #[arg(short, long, default_value_t = 1)]
    pub page: i64,

    /// Items per page (default from config).
    #[arg(short, long)]
    pub size: Option<i64>,

    /// Minimum price in minor units.
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Maximum price in minor units.
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Filter by category id.
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by brand id.
    #[arg(long)]
    pub brand: Option<String>,

    /// Sort key: newest, price, name, best-selling.
    #[arg(long, default_value = "newest")]
    pub sort: String,

    /// Sort ascending instead of descending.
    #[arg(long)]
    pub asc: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id, or slug with --slug.
    pub id: String,

    /// Look the product up by slug instead of id.
    #[arg(long)]
    pub slug: bool,

    /// Also fetch reviews.
    #[arg(long)]
    pub reviews: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart (default).
    Show,

    /// Add a product to the cart.
    Add {
        /// Product id.
        product: String,

        /// Quantity to add.
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
    },

    /// Change the quantity of a cart item.
    Update {
        /// Cart item id.
        item: String,

        /// New quantity.
        quantity: i64,
    },

    /// Remove a cart item.
    Remove {
        /// Cart item id.
        item: String,
    },

    /// Empty the cart.
    Clear,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Shipping address id from the account.
    #[arg(long)]
    pub address_id: String,

    /// Payment method: cod or gateway.
    #[arg(long, default_value = "cod")]
    pub payment: String,

    /// Discount code to apply.
    #[arg(long)]
    pub discount: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: Option<OrdersCommand>,
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List order history (default).
    List {
        /// Page to show (1-indexed).
        #[arg(short, long, default_value_t = 1)]
        page: i64,
    },

    /// Show a single order.
    Show {
        /// Order id.
        id: String,
    },

    /// Request a status change (back-office).
    Status {
        /// Order id.
        id: String,

        /// Target status: pending, processing, shipped, delivered, cancelled.
        status: String,
    },

    /// Cancel an order.
    Cancel {
        /// Order id.
        id: String,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (default).
    Show,

    /// Write a default storefront.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}
