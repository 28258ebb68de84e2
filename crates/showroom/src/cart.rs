//! Session shopping cart.

use autohaus_core::{Car, Money};

use crate::error::{Error, Result};
use crate::slot::SlotStore;

/// Slot the cart persists to.
pub const SLOT: &str = "cart";

/// The session shopping cart.
///
/// An ordered sequence of car values, independent of which user is signed
/// in. Adding the same car twice yields two entries - there is no quantity
/// field. Every mutation persists the cart slot before returning, so a
/// forgotten explicit save cannot lose items.
pub struct Cart {
    store: SlotStore,
    items: Vec<Car>,
}

impl Cart {
    /// Load the cart from its slot, or start empty when the slot has never
    /// been written. There are no default items, unlike the catalog.
    ///
    /// # Errors
    ///
    /// Returns a fault if the slot exists but cannot be read or decoded.
    pub fn open(store: SlotStore) -> Result<Self> {
        let items = store.load::<Vec<Car>>(SLOT)?.unwrap_or_default();
        tracing::debug!(count = items.len(), "cart loaded");
        Ok(Self { store, items })
    }

    /// Current items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Car] {
        &self.items
    }

    /// Number of items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the prices of all current items; zero for an empty cart.
    #[must_use]
    pub fn total_cost(&self) -> Money {
        self.items.iter().map(|car| car.price).sum()
    }

    /// Append a copy of the car and persist.
    ///
    /// # Errors
    ///
    /// Returns a fault if the slot cannot be written.
    pub fn add(&mut self, car: Car) -> Result<()> {
        self.items.push(car);
        self.save()
    }

    /// Remove the first occurrence equal to `car`, if any, and persist.
    ///
    /// Returns whether anything was removed; an absent car is a no-op, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns a fault if the slot cannot be written.
    pub fn remove(&mut self, car: &Car) -> Result<bool> {
        let Some(index) = self.items.iter().position(|item| item == car) else {
            return Ok(false);
        };
        self.items.remove(index);
        self.save()?;
        Ok(true)
    }

    /// Remove and return the item at `index`, and persist.
    ///
    /// Unlike the catalog's silent out-of-range rule, an out-of-range index
    /// here is a caller bug and faults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`, or a fault if the
    /// slot cannot be written.
    pub fn remove_at(&mut self, index: usize) -> Result<Car> {
        if index >= self.items.len() {
            return Err(Error::OutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        let car = self.items.remove(index);
        self.save()?;
        Ok(car)
    }

    /// Empty the cart and persist.
    ///
    /// # Errors
    ///
    /// Returns a fault if the slot cannot be written.
    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        self.save()
    }

    /// Persist the current items, overwriting the cart slot wholesale.
    ///
    /// Mutations already persist internally; this remains available for
    /// callers that want an explicit flush.
    ///
    /// # Errors
    ///
    /// Returns a fault if the slot cannot be written.
    pub fn save(&self) -> Result<()> {
        self.store.save(SLOT, &self.items)
    }
}
