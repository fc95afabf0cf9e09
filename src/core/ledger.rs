//! Account directory module
//!
//! This module provides the `Ledger` struct which owns every live account
//! and allocates account identifiers.
//!
//! The Ledger is responsible for:
//! - Creating accounts with sequential, never reused identifiers
//! - Looking accounts up for login, transfers and the admin panel
//! - Moving money between two accounts
//! - Blocking, unblocking and deleting accounts
//! - Providing sorted account listings for display

use crate::types::{Account, AccountId, BankError, Pin, TransactionKind};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, info};

/// Identifier given to the first account created
pub const FIRST_ACCOUNT_ID: AccountId = 5001;

/// In-memory directory of accounts
///
/// The Ledger maintains a map of account identifiers to accounts plus the
/// counter for the next identifier. The counter only moves forward, so an
/// identifier freed by deletion is never issued again.
#[derive(Debug)]
pub struct Ledger {
    /// Map of account identifiers to accounts
    accounts: HashMap<AccountId, Account>,

    /// Identifier for the next created account
    next_id: AccountId,
}

impl Ledger {
    /// Create an empty Ledger whose first account will be `FIRST_ACCOUNT_ID`
    pub fn new() -> Self {
        Ledger {
            accounts: HashMap::new(),
            next_id: FIRST_ACCOUNT_ID,
        }
    }

    /// Open a new account
    ///
    /// The initial balance becomes both the opening balance and the amount of
    /// the "Account Opened" history record. Names and PINs need not be unique.
    ///
    /// # Returns
    ///
    /// The identifier assigned to the account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `initial_balance` is negative
    /// - `ArithmeticOverflow` if the identifier space is exhausted
    pub fn create_account(
        &mut self,
        owner_name: &str,
        pin: Pin,
        initial_balance: Decimal,
    ) -> Result<AccountId, BankError> {
        let id = self.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| BankError::arithmetic_overflow("account id allocation", id))?;

        let account = Account::new(id, owner_name, pin, initial_balance)?;
        self.accounts.insert(id, account);
        self.next_id = next_id;

        info!(account = id, "account created");
        Ok(id)
    }

    /// Get an account if it exists
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// Get a mutable account if it exists
    pub fn get_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    /// Get an account or a `NotFound` error
    pub fn lookup(&self, id: AccountId) -> Result<&Account, BankError> {
        self.get(id).ok_or_else(|| BankError::not_found(id))
    }

    /// Get a mutable account or a `NotFound` error
    pub fn lookup_mut(&mut self, id: AccountId) -> Result<&mut Account, BankError> {
        self.get_mut(id).ok_or_else(|| BankError::not_found(id))
    }

    /// Check customer credentials
    ///
    /// # Errors
    ///
    /// Returns `InvalidLogin` when the account is missing, blocked, or the PIN
    /// does not match. The caller cannot tell which.
    pub fn authenticate(&self, id: AccountId, pin: Pin) -> Result<&Account, BankError> {
        match self.get(id) {
            Some(account) if account.is_active() && account.verify_pin(pin) => Ok(account),
            _ => Err(BankError::InvalidLogin),
        }
    }

    /// Move `amount` from one account to another
    ///
    /// The sender is debited through the regular withdraw path, the receiver
    /// credited through the regular deposit path, and then each side gets a
    /// labelled record on top. Every successful transfer therefore adds two
    /// history records to each party.
    ///
    /// Sending to the own account is allowed; the balance is unchanged and
    /// four records are appended.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the sender does not exist
    /// - `InvalidReceiver` if the receiver is missing or blocked
    /// - `InvalidAmount` if `amount` is negative
    /// - `InsufficientBalance` if the sender cannot cover `amount`
    /// - `ArithmeticOverflow` if the receiver balance would overflow
    ///
    /// No account changes when an error is returned.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<(), BankError> {
        self.lookup(from)?;

        let receiver = self
            .get(to)
            .filter(|account| account.is_active())
            .ok_or_else(|| BankError::invalid_receiver(to))?;

        // Reject an overflowing credit before anything is debited
        if from != to {
            receiver
                .balance()
                .checked_add(amount)
                .ok_or_else(|| BankError::arithmetic_overflow("transfer", to))?;
        }

        self.lookup_mut(from)?.withdraw(amount)?;
        self.lookup_mut(to)?.deposit(amount)?;
        self.lookup_mut(from)?.add_transaction(TransactionKind::TransferTo(to), amount);
        self.lookup_mut(to)?.add_transaction(TransactionKind::ReceivedFrom(from), amount);

        debug!(from, to, %amount, "transfer completed");
        Ok(())
    }

    /// Block (`false`) or unblock (`true`) an account
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the account does not exist.
    pub fn set_active(&mut self, id: AccountId, active: bool) -> Result<(), BankError> {
        self.lookup_mut(id)?.set_active(active);
        info!(account = id, active, "account status changed");
        Ok(())
    }

    /// Remove an account and its history
    ///
    /// # Returns
    ///
    /// The removed account
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the account does not exist.
    pub fn delete(&mut self, id: AccountId) -> Result<Account, BankError> {
        let account = self
            .accounts
            .remove(&id)
            .ok_or_else(|| BankError::not_found(id))?;

        info!(account = id, "account deleted");
        Ok(account)
    }

    /// Get all accounts sorted by identifier
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.id);
        accounts
    }

    /// Number of live accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether no accounts exist
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dec(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    fn ledger_with_two_accounts() -> (Ledger, AccountId, AccountId) {
        let mut ledger = Ledger::new();
        let x = ledger.create_account("Asha", 1234, dec(1000)).unwrap();
        let y = ledger.create_account("Ravi", 4321, dec(0)).unwrap();
        (ledger, x, y)
    }

    fn assert_invariants(ledger: &Ledger) {
        for account in ledger.accounts() {
            let last = account.history().last().unwrap();
            assert_eq!(account.balance(), last.balance_after);
            assert!(account.balance() >= Decimal::ZERO);
        }
    }

    #[test]
    fn test_new_creates_empty_ledger() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.accounts().is_empty());
    }

    #[test]
    fn test_create_account_assigns_sequential_ids() {
        let mut ledger = Ledger::new();

        let first = ledger.create_account("Asha", 1234, dec(1000)).unwrap();
        let second = ledger.create_account("Asha", 1234, dec(5)).unwrap();
        let third = ledger.create_account("Ravi", 1111, dec(0)).unwrap();

        assert_eq!(first, FIRST_ACCOUNT_ID);
        assert_eq!(second, 5002);
        assert_eq!(third, 5003);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_create_account_seeds_balance() {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("Asha", 1234, dec(1000)).unwrap();

        let account = ledger.lookup(id).unwrap();
        assert_eq!(account.owner_name, "Asha");
        assert_eq!(account.balance(), dec(1000));
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.history()[0].kind, TransactionKind::Opened);
    }

    #[test]
    fn test_rejected_creation_does_not_consume_id() {
        let mut ledger = Ledger::new();

        let result = ledger.create_account("Asha", 1234, dec(-10));
        assert!(matches!(result, Err(BankError::InvalidAmount { .. })));

        let id = ledger.create_account("Asha", 1234, dec(10)).unwrap();
        assert_eq!(id, FIRST_ACCOUNT_ID);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let (mut ledger, x, y) = ledger_with_two_accounts();

        ledger.delete(y).unwrap();
        ledger.delete(x).unwrap();
        let next = ledger.create_account("Meera", 2222, dec(1)).unwrap();

        assert_eq!(next, 5003);
        assert!(ledger.get(x).is_none());
        assert!(ledger.get(y).is_none());
    }

    #[test]
    fn test_lookup_missing_account() {
        let ledger = Ledger::new();
        assert_eq!(
            ledger.lookup(5001).unwrap_err(),
            BankError::NotFound { account: 5001 }
        );
    }

    #[test]
    fn test_authenticate_success() {
        let (ledger, x, _) = ledger_with_two_accounts();
        let account = ledger.authenticate(x, 1234).unwrap();
        assert_eq!(account.id, x);
    }

    #[rstest]
    #[case::unknown_account(9999, 1234, false)]
    #[case::wrong_pin(5001, 1111, false)]
    #[case::blocked_account(5001, 1234, true)]
    fn test_authenticate_failures_are_indistinguishable(
        #[case] id: AccountId,
        #[case] pin: Pin,
        #[case] block_first: bool,
    ) {
        let (mut ledger, x, _) = ledger_with_two_accounts();
        if block_first {
            ledger.set_active(x, false).unwrap();
        }

        assert_eq!(
            ledger.authenticate(id, pin).unwrap_err(),
            BankError::InvalidLogin
        );
    }

    #[test]
    fn test_unblock_restores_login() {
        let (mut ledger, x, _) = ledger_with_two_accounts();

        ledger.set_active(x, false).unwrap();
        ledger.set_active(x, true).unwrap();

        assert!(ledger.authenticate(x, 1234).is_ok());
    }

    #[rstest]
    #[case::block(false)]
    #[case::unblock(true)]
    fn test_set_active_on_missing_account(#[case] active: bool) {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.set_active(5001, active).unwrap_err(),
            BankError::NotFound { account: 5001 }
        );
    }

    #[test]
    fn test_delete_missing_account() {
        let (mut ledger, _, _) = ledger_with_two_accounts();
        assert_eq!(
            ledger.delete(7777).unwrap_err(),
            BankError::NotFound { account: 7777 }
        );
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_delete_returns_removed_account() {
        let (mut ledger, x, _) = ledger_with_two_accounts();

        let removed = ledger.delete(x).unwrap();

        assert_eq!(removed.id, x);
        assert_eq!(ledger.len(), 1);
        assert!(ledger.authenticate(x, 1234).is_err());
    }

    #[test]
    fn test_accounts_sorted_by_id() {
        let mut ledger = Ledger::new();
        for name in ["a", "b", "c", "d", "e"] {
            ledger.create_account(name, 1, dec(0)).unwrap();
        }

        let ids: Vec<AccountId> = ledger.accounts().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![5001, 5002, 5003, 5004, 5005]);
    }

    #[test]
    fn test_transfer_moves_funds_and_records_both_sides() {
        let (mut ledger, x, y) = ledger_with_two_accounts();

        ledger.transfer(x, y, dec(300)).unwrap();

        let sender = ledger.lookup(x).unwrap();
        let receiver = ledger.lookup(y).unwrap();
        assert_eq!(sender.balance(), dec(700));
        assert_eq!(receiver.balance(), dec(300));

        let sender_kinds: Vec<TransactionKind> =
            sender.history().iter().map(|r| r.kind).collect();
        assert_eq!(
            sender_kinds,
            vec![
                TransactionKind::Opened,
                TransactionKind::Withdraw,
                TransactionKind::TransferTo(y)
            ]
        );

        let receiver_kinds: Vec<TransactionKind> =
            receiver.history().iter().map(|r| r.kind).collect();
        assert_eq!(
            receiver_kinds,
            vec![
                TransactionKind::Opened,
                TransactionKind::Deposit,
                TransactionKind::ReceivedFrom(x)
            ]
        );

        assert_invariants(&ledger);
    }

    #[test]
    fn test_transfer_with_insufficient_balance_changes_nothing() {
        let (mut ledger, x, y) = ledger_with_two_accounts();

        let result = ledger.transfer(x, y, dec(1001));

        assert!(matches!(result, Err(BankError::InsufficientBalance { .. })));
        assert_eq!(ledger.lookup(x).unwrap().balance(), dec(1000));
        assert_eq!(ledger.lookup(y).unwrap().balance(), dec(0));
        assert_eq!(ledger.lookup(x).unwrap().history().len(), 1);
        assert_eq!(ledger.lookup(y).unwrap().history().len(), 1);
    }

    #[test]
    fn test_transfer_to_missing_receiver() {
        let (mut ledger, x, _) = ledger_with_two_accounts();

        assert_eq!(
            ledger.transfer(x, 9999, dec(10)).unwrap_err(),
            BankError::InvalidReceiver { account: 9999 }
        );
        assert_eq!(ledger.lookup(x).unwrap().balance(), dec(1000));
    }

    #[test]
    fn test_transfer_to_blocked_receiver() {
        let (mut ledger, x, y) = ledger_with_two_accounts();
        ledger.set_active(y, false).unwrap();

        assert_eq!(
            ledger.transfer(x, y, dec(10)).unwrap_err(),
            BankError::InvalidReceiver { account: y }
        );
        assert_eq!(ledger.lookup(x).unwrap().history().len(), 1);
    }

    #[test]
    fn test_transfer_negative_amount_rejected() {
        let (mut ledger, x, y) = ledger_with_two_accounts();

        let result = ledger.transfer(x, y, dec(-5));

        assert!(matches!(result, Err(BankError::InvalidAmount { .. })));
        assert_eq!(ledger.lookup(y).unwrap().balance(), dec(0));
    }

    #[test]
    fn test_transfer_to_self_nets_to_zero() {
        let (mut ledger, x, _) = ledger_with_two_accounts();

        ledger.transfer(x, x, dec(100)).unwrap();

        let account = ledger.lookup(x).unwrap();
        assert_eq!(account.balance(), dec(1000));
        assert_eq!(account.history().len(), 5);
        assert_invariants(&ledger);
    }

    #[test]
    fn test_transfer_overflow_leaves_sender_untouched() {
        let mut ledger = Ledger::new();
        let x = ledger.create_account("Asha", 1, dec(10)).unwrap();
        let y = ledger.create_account("Ravi", 2, Decimal::MAX).unwrap();

        let result = ledger.transfer(x, y, dec(10));

        assert!(matches!(result, Err(BankError::ArithmeticOverflow { .. })));
        assert_eq!(ledger.lookup(x).unwrap().balance(), dec(10));
        assert_eq!(ledger.lookup(x).unwrap().history().len(), 1);
    }
}
