//! Catalog management commands.
//!
//! # Usage
//!
//! ```bash
//! ah-cli catalog list
//! ah-cli catalog add --brand Audi --model RS6 --price 98000 \
//!     --description "Fast estate" --photo rs6.png
//! ah-cli catalog update 1 --brand Audi --model RS7 --price 105000
//! ah-cli catalog delete 2
//! ```

use clap::Subcommand;

use autohaus_core::{Car, Money};
use autohaus_showroom::{App, Config};

/// Catalog subcommands.
#[derive(Subcommand)]
pub enum CatalogAction {
    /// List catalog entries with their indices
    List,
    /// Append a car to the catalog
    Add {
        /// Manufacturer name
        #[arg(long)]
        brand: String,

        /// Model name
        #[arg(long)]
        model: String,

        /// Sticker price (decimal)
        #[arg(long)]
        price: String,

        /// Short description
        #[arg(long, default_value = "")]
        description: String,

        /// Photo filename
        #[arg(long, default_value = "")]
        photo: String,
    },
    /// Replace the catalog entry at an index
    Update {
        /// Catalog index to replace
        index: usize,

        /// Manufacturer name
        #[arg(long)]
        brand: String,

        /// Model name
        #[arg(long)]
        model: String,

        /// Sticker price (decimal)
        #[arg(long)]
        price: String,

        /// Short description
        #[arg(long, default_value = "")]
        description: String,

        /// Photo filename
        #[arg(long, default_value = "")]
        photo: String,
    },
    /// Delete the catalog entry at an index
    Delete {
        /// Catalog index to delete
        index: usize,
    },
}

/// Run a catalog subcommand against the configured data directory.
///
/// # Errors
///
/// Returns an error for non-numeric or negative prices, and for storage
/// faults while loading or persisting the catalog slot.
pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open(Config::from_env())?;

    match action {
        CatalogAction::List => {
            tracing::info!("{} car(s) in the catalog", app.catalog().len());
            for (index, car) in app.catalog().list().iter().enumerate() {
                tracing::info!("  [{index}] {car} - {} ({})", car.price, car.description);
            }
        }
        CatalogAction::Add {
            brand,
            model,
            price,
            description,
            photo,
        } => {
            let price = Money::parse(&price)?;
            app.catalog_mut()
                .add(Car::new(brand, model, price, description, photo))?;
            tracing::info!("Car added at index {}", app.catalog().len() - 1);
        }
        CatalogAction::Update {
            index,
            brand,
            model,
            price,
            description,
            photo,
        } => {
            if app.catalog().get(index).is_none() {
                tracing::warn!(index, "No catalog entry at this index, nothing updated");
                return Ok(());
            }
            let price = Money::parse(&price)?;
            app.catalog_mut()
                .update(index, Car::new(brand, model, price, description, photo))?;
            tracing::info!(index, "Car updated");
        }
        CatalogAction::Delete { index } => {
            if app.catalog().get(index).is_none() {
                tracing::warn!(index, "No catalog entry at this index, nothing deleted");
                return Ok(());
            }
            app.catalog_mut().delete(index)?;
            tracing::info!(index, "Car deleted");
        }
    }

    Ok(())
}
