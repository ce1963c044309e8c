//! Storefront CLI - command line client for the storefront backend.
//!
//! Commands:
//! - `storefront login` / `storefront logout` - Manage the session
//! - `storefront search` - Search the product catalog
//! - `storefront product` - Show a single product
//! - `storefront cart` - Show and mutate the cart
//! - `storefront checkout` - Place an order from the cart
//! - `storefront orders` - Order history and status changes
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CartArgs, CheckoutArgs, ConfigArgs, LoginArgs, OrdersArgs, ProductArgs, SearchArgs,
};

/// Storefront CLI - browse, buy, and manage orders from the terminal
#[derive(Parser)]
#[command(name = "storefront")]
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
    /// Sign in and store the session token
    Login(LoginArgs),

    /// Sign out and forget the session token
    Logout,

    /// Search the product catalog
    Search(SearchArgs),

    /// Show a single product with its reviews
    Product(ProductArgs),

    /// Show and mutate the cart
    Cart(CartArgs),

    /// Place an order from the current cart
    Checkout(CheckoutArgs),

    /// Order history and status changes
    Orders(OrdersArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Login(args) => commands::login::run(args, &ctx).await,
        Commands::Logout => commands::login::logout(&ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
