//! Application context.
//!
//! One [`App`] is constructed at process start and owns everything the
//! presentation layer touches: the three persisted components plus the
//! current-user reference. There is no global state and no import-time side
//! effect; dropping the `App` is the shutdown sequence (all state is
//! already durable).

use autohaus_core::{User, Username};

use crate::cart::Cart;
use crate::catalog::CarCatalog;
use crate::checkout::{self, CheckoutError, Receipt};
use crate::config::Config;
use crate::directory::{RegisterError, UserDirectory};
use crate::error::Result;
use crate::slot::SlotStore;

/// The application context.
pub struct App {
    config: Config,
    catalog: CarCatalog,
    directory: UserDirectory,
    cart: Cart,
    current_user: Option<User>,
}

impl App {
    /// Open the showroom against the configured data directory.
    ///
    /// Loads all three slots up front; absent slots yield the built-in
    /// default catalog, an empty directory, and an empty cart.
    ///
    /// # Errors
    ///
    /// Returns a fault if any slot exists but cannot be read or decoded.
    pub fn open(config: Config) -> Result<Self> {
        let store = SlotStore::new(config.data_dir.clone());
        let catalog = CarCatalog::open(store.clone())?;
        let directory = UserDirectory::open(store.clone())?;
        let cart = Cart::open(store)?;

        tracing::info!(
            data_dir = %config.data_dir.display(),
            cars = catalog.len(),
            users = directory.len(),
            cart_items = cart.len(),
            "showroom opened"
        );

        Ok(Self {
            config,
            catalog,
            directory,
            cart,
            current_user: None,
        })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The car catalog.
    #[must_use]
    pub fn catalog(&self) -> &CarCatalog {
        &self.catalog
    }

    /// The car catalog, mutable (administrator surface).
    pub fn catalog_mut(&mut self) -> &mut CarCatalog {
        &mut self.catalog
    }

    /// The user directory.
    #[must_use]
    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// The user directory, mutable (administrator surface).
    pub fn directory_mut(&mut self) -> &mut UserDirectory {
        &mut self.directory
    }

    /// The session cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The session cart, mutable.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Authenticate and sign in. On a credential mismatch nothing changes
    /// and `None` is returned - an expected outcome, not a fault.
    pub fn login(&mut self, username: &str, password: &str) -> Option<&User> {
        let user = self.directory.authenticate(username, password)?.clone();
        tracing::info!(user = %user.username, "user signed in");
        self.current_user = Some(user);
        self.current_user.as_ref()
    }

    /// Check the supplied pair against the administrator credential.
    ///
    /// Admin identity is a capability check only; it never becomes the
    /// current user.
    #[must_use]
    pub fn login_admin(&self, username: &str, password: &str) -> bool {
        self.config.admin.verify(username, password)
    }

    /// Clear the current-user reference.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::info!(user = %user.username, "user signed out");
        }
    }

    /// Create a new account with a zero balance.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::UsernameTaken`] on a duplicate, or a
    /// storage fault from persisting the directory.
    pub fn create_account(
        &mut self,
        username: Username,
        password: impl Into<String>,
    ) -> std::result::Result<(), RegisterError> {
        self.directory.register(User::new(username, password))
    }

    /// Purchase the current cart for the signed-in user.
    ///
    /// The signed-in copy of the user is debited along with the directory
    /// record, so a subsequent [`App::current_user`] shows the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NotSignedIn`] with no current user,
    /// [`CheckoutError::InsufficientFunds`] when the total exceeds the
    /// balance, or a storage fault from the persists.
    pub fn checkout(&mut self) -> std::result::Result<Receipt, CheckoutError> {
        let user = self.current_user.as_mut().ok_or(CheckoutError::NotSignedIn)?;
        checkout::purchase(user, &mut self.cart, &mut self.directory)
    }
}
