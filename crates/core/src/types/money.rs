//! Money amounts backed by decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Money`] amount.
#[derive(thiserror::Error, Debug, Clone)]
pub enum MoneyError {
    /// The input string is not a decimal number.
    #[error("not a decimal amount: {0:?}")]
    Invalid(String),
    /// The amount is negative.
    #[error("amount cannot be negative")]
    Negative,
}

/// A non-negative money amount.
///
/// Used for both car prices and user balances. Backed by
/// [`rust_decimal::Decimal`], so arithmetic is exact - no binary floating
/// point drift on prices.
///
/// ## Constraints
///
/// - Never negative; [`Money::parse`] and [`Money::new`] reject negative
///   inputs, and subtraction is only available as [`Money::checked_sub`].
///
/// ## Examples
///
/// ```
/// use autohaus_core::Money;
///
/// let price = Money::parse("59999.99").unwrap();
/// assert!(Money::parse("-1").is_err());
/// assert!(Money::parse("three").is_err());
/// assert!(price.checked_sub(Money::from(60_000)).is_none());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a `Money` amount from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Negative`] if the value is below zero.
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative);
        }
        Ok(Self(amount))
    }

    /// Parse a `Money` amount from a string.
    ///
    /// Leading and trailing whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Invalid`] if the input is not a decimal number
    /// and [`MoneyError::Negative`] if it is below zero.
    pub fn parse(s: &str) -> Result<Self, MoneyError> {
        let amount = s
            .trim()
            .parse::<Decimal>()
            .map_err(|_| MoneyError::Invalid(s.to_owned()))?;
        Self::new(amount)
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Subtract `other`, or `None` if the result would be negative.
    #[must_use]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        if other.0 > self.0 {
            return None;
        }
        Some(Self(self.0 - other.0))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Self(Decimal::from(amount))
    }
}
