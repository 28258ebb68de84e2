//! Integration tests for Autohaus.
//!
//! Each test drives the full stack - application context, components, and
//! slot files - against a throwaway data directory.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p autohaus-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopping_flow` - account creation, cart, and checkout flows
//! - `persistence` - slot round-trips, legacy upgrades, corruption faults

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use autohaus_core::{Money, User, Username};
use autohaus_showroom::{App, Config};

/// A throwaway data directory plus the configuration pointing at it.
///
/// The directory is removed when the context is dropped, so every test
/// starts from the first-run condition.
pub struct TestContext {
    dir: tempfile::TempDir,
}

impl TestContext {
    /// Create a fresh context with an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created - test setup only.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// The data directory backing this context.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Open an application context over the data directory.
    ///
    /// Call repeatedly to simulate process restarts against the same slots.
    ///
    /// # Panics
    ///
    /// Panics if a slot fails to load - test setup only.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn app(&self) -> App {
        App::open(Config::with_data_dir(self.dir.path())).unwrap()
    }

    /// A user record for test fixtures.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn user(username: &str, password: &str, balance: u64) -> User {
        User::with_balance(
            Username::parse(username).unwrap(),
            password,
            Money::from(balance),
        )
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
