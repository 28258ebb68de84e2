//! The purchase transaction.

use thiserror::Error;

use autohaus_core::{Money, User};

use crate::cart::Cart;
use crate::directory::UserDirectory;
use crate::error::Error as StorageError;

/// Errors that can occur at checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart total exceeds the user's balance. Cart and balance are
    /// left untouched.
    #[error("insufficient funds: total {total} exceeds balance {balance}")]
    InsufficientFunds {
        /// Cost of the cart at the time of the attempt.
        total: Money,
        /// The user's balance at the time of the attempt.
        balance: Money,
    },

    /// Checkout was requested with no signed-in user.
    #[error("no user is signed in")]
    NotSignedIn,

    /// A slot could not be persisted.
    #[error(transparent)]
    Store(#[from] StorageError),
}

/// Outcome of a successful purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    /// Amount debited.
    pub total: Money,
    /// Balance remaining after the debit.
    pub balance: Money,
}

/// Debit the user for the cart total and empty the cart.
///
/// On success the updated user record is persisted in the directory
/// (upsert by username) before the cart is cleared and persisted. The two
/// persists are not atomic: a crash between them leaves a debited balance
/// with a full cart. Single-process use accepts that window.
///
/// # Errors
///
/// Returns [`CheckoutError::InsufficientFunds`] when the total exceeds the
/// balance - cart and balance are unchanged - or a storage fault from
/// either persist.
pub fn purchase(
    user: &mut User,
    cart: &mut Cart,
    directory: &mut UserDirectory,
) -> Result<Receipt, CheckoutError> {
    let total = cart.total_cost();
    let Some(remaining) = user.balance.checked_sub(total) else {
        return Err(CheckoutError::InsufficientFunds {
            total,
            balance: user.balance,
        });
    };

    user.balance = remaining;
    directory.update(user.username.clone(), user.clone())?;
    cart.clear()?;

    tracing::info!(user = %user.username, %total, balance = %remaining, "purchase complete");
    Ok(Receipt {
        total,
        balance: remaining,
    })
}
