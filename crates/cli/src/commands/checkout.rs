//! Purchase the current cart.

use autohaus_showroom::{App, CheckoutError, Config};

/// Authenticate and purchase the current cart.
///
/// # Errors
///
/// Returns an error for invalid credentials, insufficient funds (the
/// message carries the total and the balance), and storage faults.
pub fn run(username: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open(Config::from_env())?;

    if app.login(username, password).is_none() {
        return Err("invalid username or password".into());
    }

    match app.checkout() {
        Ok(receipt) => {
            tracing::info!("Purchase complete!");
            tracing::info!("  Amount debited: {}", receipt.total);
            tracing::info!("  Remaining balance: {}", receipt.balance);
            Ok(())
        }
        Err(e @ CheckoutError::InsufficientFunds { .. }) => {
            // An expected outcome; surface the totals without a backtrace.
            Err(e.to_string().into())
        }
        Err(e) => Err(e.into()),
    }
}
