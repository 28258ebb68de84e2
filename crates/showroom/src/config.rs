//! Configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional - the defaults give a working single-user setup:
//!
//! - `AUTOHAUS_DATA_DIR` - directory holding the storage slots (default: `data`)
//! - `AUTOHAUS_ADMIN_USER` - administrator login name (default: `admin`)
//! - `AUTOHAUS_ADMIN_PASSWORD` - administrator password (default: built-in)

use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_ADMIN_USER: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// The administrator credential.
///
/// A standalone trust domain: it never enters the user directory and has no
/// user record, balance, or cart. Verification is an exact match of both
/// fields.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: SecretString,
}

impl AdminCredentials {
    /// Create a credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    fn from_env() -> Self {
        Self::new(
            get_env_or_default("AUTOHAUS_ADMIN_USER", DEFAULT_ADMIN_USER),
            get_env_or_default("AUTOHAUS_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
        )
    }

    /// Whether the supplied pair matches exactly (case-sensitive).
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.expose_secret() == password
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_USER, DEFAULT_ADMIN_PASSWORD)
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the three storage slots.
    pub data_dir: PathBuf,
    /// Administrator credential.
    pub admin: AdminCredentials,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Every variable has a default, so loading cannot fail.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            data_dir: PathBuf::from(get_env_or_default("AUTOHAUS_DATA_DIR", DEFAULT_DATA_DIR)),
            admin: AdminCredentials::from_env(),
        }
    }

    /// Configuration rooted at an explicit data directory, with the default
    /// admin credential. The programmatic path - no environment reads.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            admin: AdminCredentials::default(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
