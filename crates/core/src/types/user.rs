//! User record.

use serde::{Deserialize, Serialize};

use crate::types::money::Money;
use crate::types::username::Username;

/// A shop user.
///
/// Separate from the administrator credential, which never enters the user
/// directory. The password is stored and compared in plaintext - inherited
/// from the legacy data format this core remains compatible with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name - the unique key in the directory.
    pub username: Username,
    /// Plaintext password, compared exactly.
    pub password: String,
    /// Account balance available for purchases.
    pub balance: Money,
}

impl User {
    /// Create a new user with a zero balance.
    #[must_use]
    pub fn new(username: Username, password: impl Into<String>) -> Self {
        Self {
            username,
            password: password.into(),
            balance: Money::ZERO,
        }
    }

    /// Create a new user with an initial balance (administrator path).
    #[must_use]
    pub fn with_balance(username: Username, password: impl Into<String>, balance: Money) -> Self {
        Self {
            username,
            password: password.into(),
            balance,
        }
    }
}
