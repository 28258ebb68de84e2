//! Autohaus Core - Shared types library.
//!
//! This crate provides common types used across all Autohaus components:
//! - `showroom` - Catalog, user directory, cart, and checkout core
//! - `cli` - Command-line management tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Domain records and newtype wrappers for validated money
//!   amounts and usernames

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
