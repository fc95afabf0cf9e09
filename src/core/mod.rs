//! Core business logic module
//!
//! This module contains the account directory:
//! - `ledger` - Account storage, identifier allocation, transfers and admin operations

pub mod ledger;

pub use ledger::{Ledger, FIRST_ACCOUNT_ID};
