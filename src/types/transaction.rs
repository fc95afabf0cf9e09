//! Transaction-related types for the console bank
//!
//! This module defines the identifiers, the history entry kinds and the
//! immutable history record appended to an account on every ledger event.

use chrono::{DateTime, Local};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Account identifier
///
/// Issued sequentially by the ledger, starting at 5001
pub type AccountId = u32;

/// Numeric customer credential
///
/// Compared by plain equality; no hashing
pub type Pin = u32;

/// Kinds of ledger events recorded in an account history
///
/// Transfers are recorded twice per party: once as the generic
/// `Withdraw`/`Deposit` entry and once with the labelled variant below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Seed entry written when the account is created
    Opened,

    /// Credit to the account
    Deposit,

    /// Debit from the account
    Withdraw,

    /// Outgoing transfer to the given account
    TransferTo(AccountId),

    /// Incoming transfer from the given account
    ReceivedFrom(AccountId),
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Opened => write!(f, "Account Opened"),
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdraw => write!(f, "Withdraw"),
            TransactionKind::TransferTo(id) => write!(f, "Transfer to {}", id),
            TransactionKind::ReceivedFrom(id) => write!(f, "Received from {}", id),
        }
    }
}

/// One immutable entry in an account history
///
/// Records are created by [`crate::types::Account`] only and are never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// What happened
    pub kind: TransactionKind,

    /// Amount moved by the event (non-negative)
    pub amount: Decimal,

    /// Account balance immediately after the event
    pub balance_after: Decimal,

    /// Local time the record was created
    pub timestamp: DateTime<Local>,
}

impl TransactionRecord {
    /// Create a record stamped with the current local time
    pub fn new(kind: TransactionKind, amount: Decimal, balance_after: Decimal) -> Self {
        TransactionRecord {
            kind,
            amount,
            balance_after,
            timestamp: Local::now(),
        }
    }

    /// Render the record with the given currency symbol
    pub fn display_with<'a>(&'a self, symbol: &'a str) -> RecordDisplay<'a> {
        RecordDisplay {
            record: self,
            symbol,
        }
    }
}

/// Display adapter for a [`TransactionRecord`] with a currency symbol
pub struct RecordDisplay<'a> {
    record: &'a TransactionRecord,
    symbol: &'a str,
}

impl fmt::Display for RecordDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | Balance: {}",
            self.record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.record.kind,
            Money::new(self.record.amount, self.symbol),
            Money::new(self.record.balance_after, self.symbol),
        )
    }
}

/// Monetary amount rendered with a currency symbol prefix and two decimals
#[derive(Debug, Clone, Copy)]
pub struct Money<'a> {
    pub amount: Decimal,
    pub symbol: &'a str,
}

impl<'a> Money<'a> {
    pub fn new(amount: Decimal, symbol: &'a str) -> Self {
        Money { amount, symbol }
    }
}

impl fmt::Display for Money<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{}{:.2}", self.symbol, rounded)
    }
}
