//! CLI subcommand implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod seed;
pub mod users;
