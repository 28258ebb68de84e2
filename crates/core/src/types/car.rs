//! Car record.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::money::Money;

/// A car offered in the showroom catalog.
///
/// Identity within a catalog is positional (the entry's index); none of the
/// fields are required to be unique. Equality over all fields is what cart
/// removal-by-value matches on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Manufacturer name (e.g., "Mercedes-Benz").
    pub brand: String,
    /// Model name (e.g., "S500").
    pub model: String,
    /// Sticker price.
    pub price: Money,
    /// Short free-form description.
    pub description: String,
    /// Photo filename - an opaque reference, never validated for existence.
    pub photo: String,
}

impl Car {
    /// Create a new car record.
    #[must_use]
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        price: Money,
        description: impl Into<String>,
        photo: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            price,
            description: description.into(),
            photo: photo.into(),
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.brand, self.model)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let car = Car::new(
            "Mercedes-Benz",
            "S500",
            Money::from(60_000),
            "Luxury Sedan",
            "mers_s500.png",
        );
        assert_eq!(format!("{car}"), "Mercedes-Benz S500");
    }

    #[test]
    fn test_equality_is_by_value() {
        let price = Money::from(3500);
        let a = Car::new("Volkswagen", "ID.6", price, "Compact Car", "vw.png");
        let b = Car::new("Volkswagen", "ID.6", price, "Compact Car", "vw.png");
        assert_eq!(a, b);

        let c = Car::new("Volkswagen", "ID.6", Money::from(3600), "Compact Car", "vw.png");
        assert_ne!(a, c);
    }
}
