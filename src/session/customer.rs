//! Customer login and the customer menu

use super::{CustomerChoice, Flow, Session};
use crate::types::{AccountId, BankError, Money};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Ask for credentials and, if they check out, run the customer menu
    ///
    /// Every failure is reported as the same `InvalidLogin`.
    pub(super) fn customer_login(&mut self) -> Result<(), BankError> {
        let id = self.console.prompt_account_id("Account No: ")?;
        let pin = self.console.prompt_pin("PIN: ")?;

        if let Err(e) = self.ledger.authenticate(id, pin) {
            warn!(account = id, "customer login failed");
            return Err(e);
        }

        info!(account = id, "customer logged in");
        self.menu_loop(|session| session.customer_menu_step(id))?;
        info!(account = id, "customer logged out");
        Ok(())
    }

    fn customer_menu_step(&mut self, id: AccountId) -> Result<Flow, BankError> {
        self.show_menu(CustomerChoice::TITLE, CustomerChoice::ITEMS)?;
        let choice = CustomerChoice::try_from(self.console.prompt_choice()?)?;
        debug!(account = id, ?choice, "customer menu");

        match choice {
            CustomerChoice::Deposit => self.deposit(id)?,
            CustomerChoice::Withdraw => self.withdraw(id)?,
            CustomerChoice::BalanceEnquiry => self.balance_enquiry(id)?,
            CustomerChoice::Transfer => self.transfer(id)?,
            CustomerChoice::History => self.history(id)?,
            CustomerChoice::InterestEstimate => self.interest_estimate(id)?,
            CustomerChoice::ChangePin => self.change_pin(id)?,
            CustomerChoice::Logout => return Ok(Flow::Leave),
        }

        Ok(Flow::Continue)
    }

    fn deposit(&mut self, id: AccountId) -> Result<(), BankError> {
        let amount = self.console.prompt_amount("Amount: ")?;
        self.ledger.lookup_mut(id)?.deposit(amount)?;
        self.console.say("Deposit successful!")
    }

    fn withdraw(&mut self, id: AccountId) -> Result<(), BankError> {
        let amount = self.console.prompt_amount("Amount: ")?;
        self.ledger.lookup_mut(id)?.withdraw(amount)?;
        self.console.say("Withdrawal successful!")
    }

    fn balance_enquiry(&mut self, id: AccountId) -> Result<(), BankError> {
        let balance = self.ledger.lookup(id)?.balance();
        self.console.say(format_args!(
            "Balance: {}",
            Money::new(balance, &self.config.currency_symbol)
        ))
    }

    fn transfer(&mut self, id: AccountId) -> Result<(), BankError> {
        let to = self.console.prompt_account_id("To Account No: ")?;
        let amount = self.console.prompt_amount("Amount: ")?;

        self.ledger.transfer(id, to, amount)?;
        self.console.say("Transfer Successful!")
    }

    fn history(&mut self, id: AccountId) -> Result<(), BankError> {
        let account = self.ledger.lookup(id)?;
        for record in account.history() {
            self.console.say(record.display_with(&self.config.currency_symbol))?;
        }
        Ok(())
    }

    /// Display one year of interest; the balance is not touched
    fn interest_estimate(&mut self, id: AccountId) -> Result<(), BankError> {
        let interest = self.ledger.lookup(id)?.annual_interest();
        self.console.say(format_args!(
            "Annual Interest: {}",
            Money::new(interest, &self.config.currency_symbol)
        ))
    }

    fn change_pin(&mut self, id: AccountId) -> Result<(), BankError> {
        let new_pin = self.console.prompt_pin("New PIN: ")?;
        self.ledger.lookup_mut(id)?.change_pin(new_pin);
        info!(account = id, "pin changed");
        self.console.say("PIN changed!")
    }
}
