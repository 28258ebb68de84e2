//! Car catalog - ordered collection of cars with index-based CRUD.

use autohaus_core::{Car, Money};

use crate::error::Result;
use crate::slot::SlotStore;

/// Slot the catalog persists to.
pub const SLOT: &str = "catalog";

/// The built-in catalog seeded on first run.
#[must_use]
pub fn default_cars() -> Vec<Car> {
    vec![
        Car::new(
            "Mercedes-Benz",
            "S500",
            Money::from(60_000),
            "Luxury Sedan",
            "mers_s500.png",
        ),
        Car::new(
            "Mercedes-Benz",
            "G 63 AMG",
            Money::from(63_000),
            "Brutal",
            "mers_gwagon.png",
        ),
        Car::new(
            "Volkswagen",
            "ID.6",
            Money::from(3_500),
            "Compact Car",
            "vw.png",
        ),
        Car::new(
            "Porsche",
            "Panamera 4S",
            Money::from(22_000),
            "Luxury Sports Car",
            "pors.png",
        ),
    ]
}

/// The car catalog.
///
/// Fully loaded into memory; every successful mutation overwrites the
/// catalog slot before returning. Entries are identified by position:
/// deleting index N shifts every later entry down by one.
pub struct CarCatalog {
    store: SlotStore,
    cars: Vec<Car>,
}

impl CarCatalog {
    /// Load the catalog from its slot, seeding the built-in defaults when
    /// the slot has never been written.
    ///
    /// The seeded defaults are not persisted until the first mutation.
    ///
    /// # Errors
    ///
    /// Returns a fault if the slot exists but cannot be read or decoded.
    pub fn open(store: SlotStore) -> Result<Self> {
        let cars = match store.load::<Vec<Car>>(SLOT)? {
            Some(cars) => {
                tracing::debug!(count = cars.len(), "catalog loaded");
                cars
            }
            None => {
                let cars = default_cars();
                tracing::info!(count = cars.len(), "catalog slot absent, using built-in defaults");
                cars
            }
        };
        Ok(Self { store, cars })
    }

    /// All cars, in catalog order.
    #[must_use]
    pub fn list(&self) -> &[Car] {
        &self.cars
    }

    /// The car at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Car> {
        self.cars.get(index)
    }

    /// Number of cars in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Append a car and persist. No uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns a fault if the slot cannot be written; the in-memory list
    /// keeps the appended car either way.
    pub fn add(&mut self, car: Car) -> Result<()> {
        self.cars.push(car);
        self.persist()
    }

    /// Replace the car at `index` and persist.
    ///
    /// Out-of-range indices are a silent no-op, not an error, and nothing
    /// is persisted for them.
    ///
    /// # Errors
    ///
    /// Returns a fault if the slot cannot be written.
    pub fn update(&mut self, index: usize, car: Car) -> Result<()> {
        let Some(entry) = self.cars.get_mut(index) else {
            return Ok(());
        };
        *entry = car;
        self.persist()
    }

    /// Remove the car at `index` and persist, under the same silent
    /// out-of-range rule as [`CarCatalog::update`].
    ///
    /// # Errors
    ///
    /// Returns a fault if the slot cannot be written.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        if index >= self.cars.len() {
            return Ok(());
        }
        self.cars.remove(index);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.store.save(SLOT, &self.cars)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn open_catalog(dir: &tempfile::TempDir) -> CarCatalog {
        CarCatalog::open(SlotStore::new(dir.path())).unwrap()
    }

    fn sample_car() -> Car {
        Car::new("Audi", "RS6", Money::from(98_000), "Estate", "rs6.png")
    }

    #[test]
    fn test_first_run_seeds_defaults_without_persisting() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = open_catalog(&dir);

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(0).unwrap().model, "S500");
        // Defaults live in memory only until the first mutation.
        assert!(!dir.path().join("catalog.json").exists());
    }

    #[test]
    fn test_add_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = open_catalog(&dir);
        catalog.add(sample_car()).unwrap();

        let reloaded = open_catalog(&dir);
        assert_eq!(reloaded.len(), 5);
        assert_eq!(reloaded.get(4).unwrap().model, "RS6");
    }

    #[test]
    fn test_update_in_range_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = open_catalog(&dir);
        catalog.update(1, sample_car()).unwrap();

        let reloaded = open_catalog(&dir);
        assert_eq!(reloaded.get(1).unwrap().model, "RS6");
        assert_eq!(reloaded.len(), 4);
    }

    #[test]
    fn test_update_out_of_range_is_silent_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = open_catalog(&dir);
        catalog.update(99, sample_car()).unwrap();

        assert_eq!(catalog.len(), 4);
        // No mutation happened, so nothing was persisted either.
        assert!(!dir.path().join("catalog.json").exists());
    }

    #[test]
    fn test_delete_shifts_later_entries() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = open_catalog(&dir);
        catalog.delete(0).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0).unwrap().model, "G 63 AMG");
    }

    #[test]
    fn test_delete_out_of_range_is_silent_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = open_catalog(&dir);
        catalog.delete(4).unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_roundtrip_after_mutations() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = open_catalog(&dir);
        catalog.add(sample_car()).unwrap();
        catalog.delete(2).unwrap();
        let before: Vec<Car> = catalog.list().to_vec();

        let reloaded = open_catalog(&dir);
        assert_eq!(reloaded.list(), &before[..]);
    }
}
