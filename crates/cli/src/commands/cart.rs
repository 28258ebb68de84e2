//! Session cart commands.
//!
//! The cart slot survives between invocations, so a shopping session can be
//! built up across several commands and then purchased with `checkout`.

use clap::Subcommand;

use autohaus_showroom::{App, Config};

/// Cart subcommands.
#[derive(Subcommand)]
pub enum CartAction {
    /// Show cart contents and the running total
    Show,
    /// Add the catalog entry at an index to the cart
    Add {
        /// Catalog index to add
        index: usize,
    },
    /// Remove the cart item at an index
    Remove {
        /// Cart index to remove
        index: usize,
    },
    /// Empty the cart
    Clear,
}

/// Run a cart subcommand against the configured data directory.
///
/// # Errors
///
/// Returns an error for an out-of-range cart index and for storage faults
/// while loading or persisting the cart slot.
pub fn run(action: CartAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open(Config::from_env())?;

    match action {
        CartAction::Show => {
            tracing::info!("{} item(s) in the cart", app.cart().len());
            for (index, car) in app.cart().items().iter().enumerate() {
                tracing::info!("  [{index}] {car} - {}", car.price);
            }
            tracing::info!("Total: {}", app.cart().total_cost());
        }
        CartAction::Add { index } => {
            let Some(car) = app.catalog().get(index).cloned() else {
                tracing::warn!(index, "No catalog entry at this index, nothing added");
                return Ok(());
            };
            app.cart_mut().add(car.clone())?;
            tracing::info!("{car} added to the cart");
        }
        CartAction::Remove { index } => {
            let car = app.cart_mut().remove_at(index)?;
            tracing::info!("{car} removed from the cart");
        }
        CartAction::Clear => {
            app.cart_mut().clear()?;
            tracing::info!("Cart cleared");
        }
    }

    Ok(())
}
