//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: the Account entity and its summary rendering
//! - `transaction`: identifiers, history records and money formatting
//! - `error`: Error types for the console bank

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountSummary, ANNUAL_INTEREST_RATE};
pub use error::BankError;
pub use transaction::{AccountId, Money, Pin, TransactionKind, TransactionRecord};
