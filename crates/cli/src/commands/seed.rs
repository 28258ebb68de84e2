//! Persist the built-in default catalog.
//!
//! The showroom seeds its defaults in memory on first run without writing
//! them; this command writes them to the catalog slot explicitly so other
//! tooling sees a populated file.

use autohaus_core::Car;
use autohaus_showroom::catalog;
use autohaus_showroom::{Config, SlotStore};

/// Seed the catalog slot with the built-in default cars.
///
/// Refuses to overwrite an already-written slot unless `force` is set.
///
/// # Errors
///
/// Returns an error if the catalog slot cannot be read or written.
pub fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    let store = SlotStore::new(config.data_dir.clone());

    if let Some(existing) = store.load::<Vec<Car>>(catalog::SLOT)? {
        if !force {
            tracing::warn!(
                count = existing.len(),
                "Catalog slot already written; use --force to overwrite"
            );
            return Ok(());
        }
        tracing::info!(count = existing.len(), "Overwriting existing catalog");
    }

    let cars = catalog::default_cars();
    store.save(catalog::SLOT, &cars)?;

    tracing::info!("Seeding complete!");
    tracing::info!("  Cars written: {}", cars.len());
    tracing::info!("  Data directory: {}", config.data_dir.display());
    Ok(())
}
