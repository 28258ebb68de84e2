//! User directory management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create a user (administrator path; balance defaults to 0)
//! ah-cli user create -u alice -p wonderland --balance 100000
//!
//! # List users
//! ah-cli user list
//!
//! # Delete a user
//! ah-cli user delete alice
//! ```

use clap::Subcommand;
use thiserror::Error;

use autohaus_core::{MoneyError, User, UsernameError};
use autohaus_showroom::{App, Config, RegisterError};

/// Errors that can occur during user management.
#[derive(Debug, Error)]
pub enum UserAdminError {
    /// The supplied username does not validate.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// The supplied balance is not a non-negative decimal.
    #[error("invalid balance: {0}")]
    InvalidBalance(#[from] MoneyError),

    /// Account creation was refused.
    #[error(transparent)]
    Register(#[from] RegisterError),

    /// A slot could not be read or persisted.
    #[error(transparent)]
    Store(#[from] autohaus_showroom::Error),
}

/// User directory subcommands.
#[derive(Subcommand)]
pub enum UserAction {
    /// Create a new user
    Create {
        /// Login name
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Initial balance (decimal)
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// List users and balances
    List,
    /// Delete a user
    Delete {
        /// Login name to delete
        username: String,
    },
}

/// Run a user subcommand against the configured data directory.
///
/// # Errors
///
/// Returns [`UserAdminError`] for invalid input, duplicate usernames, and
/// storage faults.
pub fn run(action: UserAction) -> Result<(), UserAdminError> {
    let mut app = App::open(Config::from_env())?;

    match action {
        UserAction::Create {
            username,
            password,
            balance,
        } => {
            let username = username.parse()?;
            let balance = balance.parse()?;
            let user = User::with_balance(username, password, balance);

            tracing::info!(user = %user.username, %balance, "Creating user");
            app.directory_mut().register(user)?;
            tracing::info!("User created");
        }
        UserAction::List => {
            tracing::info!("{} user(s) in the directory", app.directory().len());
            for user in app.directory().iter() {
                tracing::info!("  {} balance={}", user.username, user.balance);
            }
        }
        UserAction::Delete { username } => {
            if app.directory().get(&username).is_none() {
                tracing::warn!(%username, "No such user, nothing deleted");
                return Ok(());
            }
            app.directory_mut().delete(&username)?;
            tracing::info!(%username, "User deleted");
        }
    }

    Ok(())
}
