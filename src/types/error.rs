//! Error types for the console bank
//!
//! This module defines every error an operator action can produce. The
//! `Display` text of each variant is what the menu prints back, so messages
//! are written for the person at the console.
//!
//! # Error Categories
//!
//! - **Input Errors**: malformed numbers, menu choices out of range, invalid amounts
//! - **Access Errors**: failed customer login, wrong admin secret
//! - **Ledger Errors**: insufficient balance, invalid transfer receiver, unknown account
//! - **Fatal Errors**: I/O failure or end of input, which end the program

use super::transaction::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the console bank
///
/// Everything except [`BankError::IoError`] and [`BankError::EndOfInput`] is
/// recoverable: the session prints the message and returns to the
/// enclosing menu.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Menu number outside the valid set
    #[error("Invalid choice {choice}!")]
    InvalidMenuChoice {
        /// The number the operator typed
        choice: u32,
    },

    /// Input could not be parsed as the expected kind of value
    #[error("Invalid input '{input}': expected {expected}")]
    MalformedInput {
        /// The raw text the operator typed
        input: String,
        /// Human-readable description of what was expected
        expected: String,
    },

    /// Unknown account, blocked account or wrong PIN
    ///
    /// The three causes are deliberately indistinguishable.
    #[error("Invalid login or account blocked!")]
    InvalidLogin,

    /// Withdrawal or transfer larger than the current balance
    #[error("Insufficient balance! Account {account} holds {balance}, requested {requested}")]
    InsufficientBalance {
        /// Account being debited
        account: AccountId,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// Transfer target missing or blocked
    #[error("Invalid receiver {account}!")]
    InvalidReceiver {
        /// The requested destination account
        account: AccountId,
    },

    /// No account with this id exists
    #[error("Account {account} not found!")]
    NotFound {
        /// The requested account
        account: AccountId,
    },

    /// Wrong admin secret
    #[error("Access Denied!")]
    AdminAccessDenied,

    /// Negative monetary amount
    #[error("Invalid amount {amount}: amounts cannot be negative")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Balance arithmetic would overflow
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account involved
        account: AccountId,
    },

    /// I/O error on the console streams
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The input stream was closed
    #[error("End of input")]
    EndOfInput,
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

impl BankError {
    /// Whether this error must end the program instead of returning to a menu
    pub fn is_fatal(&self) -> bool {
        matches!(self, BankError::IoError { .. } | BankError::EndOfInput)
    }

    /// Short name of the variant, for log events
    ///
    /// Carries none of the operator's input, so a mistyped PIN never reaches
    /// the logs.
    pub fn kind(&self) -> &'static str {
        match self {
            BankError::InvalidMenuChoice { .. } => "invalid_menu_choice",
            BankError::MalformedInput { .. } => "malformed_input",
            BankError::InvalidLogin => "invalid_login",
            BankError::InsufficientBalance { .. } => "insufficient_balance",
            BankError::InvalidReceiver { .. } => "invalid_receiver",
            BankError::NotFound { .. } => "not_found",
            BankError::AdminAccessDenied => "admin_access_denied",
            BankError::InvalidAmount { .. } => "invalid_amount",
            BankError::ArithmeticOverflow { .. } => "arithmetic_overflow",
            BankError::IoError { .. } => "io_error",
            BankError::EndOfInput => "end_of_input",
        }
    }

    /// Create an InvalidMenuChoice error
    pub fn invalid_menu_choice(choice: u32) -> Self {
        BankError::InvalidMenuChoice { choice }
    }

    /// Create a MalformedInput error
    pub fn malformed_input(input: &str, expected: &str) -> Self {
        BankError::MalformedInput {
            input: input.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(account: AccountId, balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientBalance {
            account,
            balance,
            requested,
        }
    }

    /// Create an InvalidReceiver error
    pub fn invalid_receiver(account: AccountId) -> Self {
        BankError::InvalidReceiver { account }
    }

    /// Create a NotFound error
    pub fn not_found(account: AccountId) -> Self {
        BankError::NotFound { account }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountId) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }
}
