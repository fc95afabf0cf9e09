//! Console Bank Library
//! # Overview
//!
//! This library implements an interactive, single-user banking console held
//! entirely in memory: account creation, customer self-service and an admin
//! panel, driven by a numbered menu over any line-oriented reader and writer.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, TransactionRecord, BankError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Account directory, identifier allocation and transfers
//! - [`io`] - Prompting console with typed input parsing
//! - [`session`] - Menu loop, customer session and admin panel
//!
//! # Customer Operations
//!
//! - **Deposit**: Credit funds to the account
//! - **Withdraw**: Debit funds (requires sufficient balance)
//! - **Transfer**: Move funds to another active account
//! - **Balance / History**: Read-only views of the account
//! - **Interest**: A 4% annual projection, never posted
//! - **Change PIN**: Replace the login PIN
//!
//! # Account Invariants
//!
//! Each account maintains:
//! - `balance`: never negative, always equal to the newest history record's balance
//! - `history`: append-only, seeded with an "Account Opened" record
//! - `active`: cleared by the admin block operation; blocked accounts cannot log in
//!   or receive transfers

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use crate::core::{Ledger, FIRST_ACCOUNT_ID};
pub use session::{Session, SessionConfig};
pub use types::{Account, AccountId, BankError, Pin, TransactionKind, TransactionRecord};
