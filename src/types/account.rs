//! Account-related types for the console bank
//!
//! This module defines the Account entity: the owner details, the PIN, the
//! current balance and the append-only transaction history.

use super::error::BankError;
use super::transaction::{AccountId, Money, Pin, TransactionKind, TransactionRecord};
use rust_decimal::Decimal;
use std::fmt;

/// Nominal annual interest rate used for the interest estimate (4%)
pub const ANNUAL_INTEREST_RATE: Decimal = Decimal::from_parts(4, 0, 0, false, 2);

/// Customer account
///
/// The balance and history are private so that the two can only change
/// together: after every operation `balance` equals the `balance_after` of
/// the newest history record, and it is never negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Identifier assigned by the ledger
    pub id: AccountId,

    /// Name given at account creation
    pub owner_name: String,

    pin: Pin,

    balance: Decimal,

    /// Whether the account may log in and receive transfers
    ///
    /// Cleared by the admin "block" operation.
    active: bool,

    history: Vec<TransactionRecord>,
}

impl Account {
    /// Create a new active account seeded with an "Account Opened" record
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if `initial_balance` is negative.
    pub fn new(
        id: AccountId,
        owner_name: impl Into<String>,
        pin: Pin,
        initial_balance: Decimal,
    ) -> Result<Self, BankError> {
        check_amount(initial_balance)?;

        Ok(Account {
            id,
            owner_name: owner_name.into(),
            pin,
            balance: initial_balance,
            active: true,
            history: vec![TransactionRecord::new(
                TransactionKind::Opened,
                initial_balance,
                initial_balance,
            )],
        })
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Whether the account is active (not blocked)
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Block or unblock the account
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Exact comparison against the stored PIN
    pub fn verify_pin(&self, candidate: Pin) -> bool {
        self.pin == candidate
    }

    /// Replace the stored PIN
    ///
    /// The old PIN is not re-checked and the new one is not validated.
    pub fn change_pin(&mut self, new_pin: Pin) {
        self.pin = new_pin;
    }

    /// Credit the account and append a "Deposit" record
    ///
    /// # Returns
    ///
    /// The new balance
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is negative
    /// - `ArithmeticOverflow` if the balance would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        check_amount(amount)?;

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", self.id))?;

        self.balance = new_balance;
        self.history.push(TransactionRecord::new(
            TransactionKind::Deposit,
            amount,
            new_balance,
        ));

        Ok(new_balance)
    }

    /// Debit the account and append a "Withdraw" record
    ///
    /// Nothing changes when the request is rejected.
    ///
    /// # Returns
    ///
    /// The new balance
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is negative
    /// - `InsufficientBalance` if `amount` exceeds the balance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        check_amount(amount)?;

        if amount > self.balance {
            return Err(BankError::insufficient_balance(
                self.id,
                self.balance,
                amount,
            ));
        }

        let new_balance = self.balance - amount;

        self.balance = new_balance;
        self.history.push(TransactionRecord::new(
            TransactionKind::Withdraw,
            amount,
            new_balance,
        ));

        Ok(new_balance)
    }

    /// Append a labelled record tagged with the current balance
    ///
    /// Used for transfer bookkeeping; the balance itself is not touched.
    pub fn add_transaction(&mut self, kind: TransactionKind, amount: Decimal) {
        self.history.push(TransactionRecord::new(kind, amount, self.balance));
    }

    /// One year of interest on the current balance at `ANNUAL_INTEREST_RATE`
    ///
    /// A projection only: nothing is posted and no record is appended.
    pub fn annual_interest(&self) -> Decimal {
        self.balance * ANNUAL_INTEREST_RATE
    }

    /// Full history in chronological order
    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    /// Render the account summary with the given currency symbol
    pub fn summary<'a>(&'a self, symbol: &'a str) -> AccountSummary<'a> {
        AccountSummary {
            account: self,
            symbol,
        }
    }
}

fn check_amount(amount: Decimal) -> Result<(), BankError> {
    if amount < Decimal::ZERO {
        return Err(BankError::invalid_amount(amount));
    }
    Ok(())
}

/// Multi-line summary shown by the admin panel
pub struct AccountSummary<'a> {
    account: &'a Account,
    symbol: &'a str,
}

impl fmt::Display for AccountSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account No : {}", self.account.id)?;
        writeln!(f, "Name       : {}", self.account.owner_name)?;
        writeln!(
            f,
            "Balance    : {}",
            Money::new(self.account.balance, self.symbol)
        )?;
        write!(
            f,
            "Status     : {}",
            if self.account.active {
                "ACTIVE"
            } else {
                "BLOCKED"
            }
        )
    }
}
