//! Autohaus CLI - catalog, user, and cart management tools.
//!
//! # Usage
//!
//! ```bash
//! # Persist the built-in default catalog
//! ah-cli seed
//!
//! # Catalog management
//! ah-cli catalog list
//! ah-cli catalog add --brand Audi --model RS6 --price 98000
//! ah-cli catalog delete 2
//!
//! # User management
//! ah-cli user create -u alice -p wonderland --balance 100000
//! ah-cli user list
//!
//! # Shopping session
//! ah-cli cart add 0
//! ah-cli cart show
//! ah-cli checkout -u alice -p wonderland
//! ```
//!
//! All commands operate on the data directory configured via
//! `AUTOHAUS_DATA_DIR` (default: `data`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::cart::CartAction;
use commands::catalog::CatalogAction;
use commands::users::UserAction;

#[derive(Parser)]
#[command(name = "ah-cli")]
#[command(author, version, about = "Autohaus management tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Persist the built-in default catalog
    Seed {
        /// Overwrite a catalog slot that has already been written
        #[arg(long)]
        force: bool,
    },
    /// Manage the car catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the user directory
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage the session cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Purchase the current cart as the given user
    Checkout {
        /// Login name
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { force } => commands::seed::run(force)?,
        Commands::Catalog { action } => commands::catalog::run(action)?,
        Commands::User { action } => commands::users::run(action)?,
        Commands::Cart { action } => commands::cart::run(action)?,
        Commands::Checkout { username, password } => commands::checkout::run(&username, &password)?,
    }
    Ok(())
}
