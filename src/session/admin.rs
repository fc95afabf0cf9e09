//! Admin login and the admin panel

use super::{AdminChoice, Flow, Session};
use crate::types::BankError;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Check the shared admin secret and, if it matches, run the admin panel
    pub(super) fn admin_login(&mut self) -> Result<(), BankError> {
        let password = self.console.prompt("Admin Password: ")?;

        if password != self.config.admin_password {
            warn!("admin access denied");
            return Err(BankError::AdminAccessDenied);
        }

        info!("admin logged in");
        self.menu_loop(Self::admin_menu_step)?;
        info!("admin logged out");
        Ok(())
    }

    fn admin_menu_step(&mut self) -> Result<Flow, BankError> {
        self.show_menu(AdminChoice::TITLE, AdminChoice::ITEMS)?;
        let choice = AdminChoice::try_from(self.console.prompt_choice()?)?;
        debug!(?choice, "admin menu");

        match choice {
            AdminChoice::ListAll => self.list_accounts()?,
            AdminChoice::Search => self.search_account()?,
            AdminChoice::Block => self.set_account_active(false)?,
            AdminChoice::Unblock => self.set_account_active(true)?,
            AdminChoice::Delete => self.delete_account()?,
            AdminChoice::Exit => return Ok(Flow::Leave),
        }

        Ok(Flow::Continue)
    }

    fn list_accounts(&mut self) -> Result<(), BankError> {
        if self.ledger.is_empty() {
            return self.console.say("No accounts.");
        }

        for account in self.ledger.accounts() {
            self.console.say(account.summary(&self.config.currency_symbol))?;
            self.console.blank()?;
        }
        Ok(())
    }

    fn search_account(&mut self) -> Result<(), BankError> {
        let id = self.console.prompt_account_id("Account No: ")?;
        let account = self.ledger.lookup(id)?;
        self.console.say(account.summary(&self.config.currency_symbol))
    }

    fn set_account_active(&mut self, active: bool) -> Result<(), BankError> {
        let id = self.console.prompt_account_id("Account No: ")?;
        self.ledger.set_active(id, active)?;

        let status = if active { "unblocked" } else { "blocked" };
        self.console.say(format_args!("Account {} {}!", id, status))
    }

    fn delete_account(&mut self) -> Result<(), BankError> {
        let id = self.console.prompt_account_id("Account No: ")?;
        self.ledger.delete(id)?;
        self.console.say("Deleted!")
    }
}
