//! Autohaus Showroom - the shop core.
//!
//! Everything the presentation layer needs to browse cars, manage a cart,
//! authenticate users, and let an administrator maintain the catalog and
//! the user directory.
//!
//! # Storage
//!
//! State lives in three independent slots under one data directory, each a
//! single JSON document overwritten wholesale on every mutation:
//!
//! - `catalog` - ordered sequence of [`autohaus_core::Car`] records
//! - `directory` - map of username to [`autohaus_core::User`] record
//! - `cart` - ordered sequence of [`autohaus_core::Car`] records
//!
//! A missing slot file is the normal first-run condition, not an error. No
//! transactional guarantee spans slots; the process is the only writer.
//!
//! # Modules
//!
//! - [`slot`] - slot persistence ([`SlotStore`])
//! - [`catalog`] - car catalog CRUD ([`CarCatalog`])
//! - [`directory`] - user directory and authentication ([`UserDirectory`])
//! - [`cart`] - session shopping cart ([`Cart`])
//! - [`checkout`] - the purchase transaction ([`checkout::purchase`])
//! - [`config`] - environment configuration and the admin credential
//! - [`app`] - the application context constructed at process start

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod directory;
pub mod error;
pub mod slot;

pub use app::App;
pub use cart::Cart;
pub use catalog::CarCatalog;
pub use checkout::{CheckoutError, Receipt};
pub use config::{AdminCredentials, Config};
pub use directory::{RegisterError, UserDirectory};
pub use error::{Error, Result};
pub use slot::SlotStore;
