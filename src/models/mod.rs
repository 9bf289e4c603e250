//! Core data models for actual-widget
//!
//! This module contains the data structures decoded from the Actual HTTP
//! API: accounts, transactions, categories and their groups, plus the money
//! type used for every amount.

pub mod account;
pub mod category;
pub mod money;
pub mod transaction;

pub use account::Account;
pub use category::{Category, CategoryGroup};
pub use money::{BalanceTone, Money};
pub use transaction::Transaction;
