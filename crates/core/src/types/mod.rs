//! Core types for Autohaus.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod car;
pub mod money;
pub mod user;
pub mod username;

pub use car::Car;
pub use money::{Money, MoneyError};
pub use user::User;
pub use username::{Username, UsernameError};
