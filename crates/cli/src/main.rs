//! Lumora CLI - Command-line storefront surface.
//!
//! Plays the role of the web client's presentation surfaces: browse the
//! catalog, mutate the persistent cart, and run a simulated checkout. The
//! cart survives between invocations via a JSON document in the data
//! directory.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! lumora catalog list
//! lumora catalog show 1
//!
//! # Build a cart (persisted across invocations)
//! lumora cart add 1 --qty 2 --skin-type all --scent unscented
//! lumora cart show
//! lumora cart update <line-id> 3
//! lumora cart remove <line-id>
//! lumora cart clear
//!
//! # Simulated checkout (no real payment)
//! lumora checkout --name "Sari" --email sari@example.com
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI's job is to print; stdout here is the interface, not debug leakage.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "lumora")]
#[command(author, version, about = "Lumora storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order from the current cart (simulated payment)
    Checkout {
        /// Full name for the order
        #[arg(short, long)]
        name: String,

        /// Email address for the order confirmation
        #[arg(short, long)]
        email: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List all products
    List,
    /// Show one product in detail
    Show {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id
        product_id: String,

        /// Quantity to add
        #[arg(long, default_value_t = 1)]
        qty: u32,

        /// Skin type variant (defaults to the "all" sentinel)
        #[arg(long, default_value = "all")]
        skin_type: String,

        /// Scent variant (defaults to the product's own scent)
        #[arg(long)]
        scent: Option<String>,
    },
    /// Show the cart contents and totals
    Show,
    /// Set a line item's quantity (0 removes the line)
    Update {
        /// Line item id (shown by `cart show`)
        line_id: String,

        /// New quantity
        quantity: i64,
    },
    /// Remove a line item
    Remove {
        /// Line item id (shown by `cart show`)
        line_id: String,
    },
    /// Empty the cart
    Clear,
}

fn main() {
    // Initialize tracing; defaults to warnings unless RUST_LOG is set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
            CatalogAction::Show { id } => commands::catalog::show(&id)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Add {
                product_id,
                qty,
                skin_type,
                scent,
            } => commands::cart::add(&config, &product_id, qty, &skin_type, scent.as_deref())?,
            CartAction::Show => commands::cart::show(&config)?,
            CartAction::Update { line_id, quantity } => {
                commands::cart::update(&config, &line_id, quantity)?;
            }
            CartAction::Remove { line_id } => commands::cart::remove(&config, &line_id)?,
            CartAction::Clear => commands::cart::clear(&config)?,
        },
        Commands::Checkout { name, email } => commands::checkout::place_order(&config, &name, &email)?,
    }
    Ok(())
}
