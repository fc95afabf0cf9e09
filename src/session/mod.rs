//! Interactive session module
//!
//! This module drives the menu loop. A `Session` owns the console, the ledger
//! and the configuration; there is no process-wide state.
//!
//! ```text
//! Session::run
//!     ├── Create Account
//!     ├── Customer Login ──> customer menu (deposit, withdraw, transfer, ...)
//!     ├── Admin Login ─────> admin panel (list, search, block, unblock, delete)
//!     └── Exit
//! ```
//!
//! Every operation returns `Result<_, BankError>`. Recoverable errors are
//! printed and the enclosing menu is shown again; fatal errors end `run`.

mod admin;
mod customer;
pub mod menu;

pub use menu::{AdminChoice, CustomerChoice, Flow, MainChoice};

use crate::core::Ledger;
use crate::io::Console;
use crate::types::BankError;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Admin secret used when none is configured
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Currency symbol used when none is configured
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Configuration for an interactive session
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Shared secret gating the admin panel
    pub admin_password: String,
    /// Prefix used when displaying monetary amounts
    pub currency_symbol: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl SessionConfig {
    /// Create a SessionConfig with custom values
    ///
    /// An empty admin password falls back to the default so the panel can
    /// never be opened by an empty answer.
    pub fn new(admin_password: impl Into<String>, currency_symbol: impl Into<String>) -> Self {
        let default = Self::default();

        let admin_password = admin_password.into();
        let admin_password = if admin_password.trim().is_empty() {
            warn!("empty admin password configured, using the default");
            default.admin_password
        } else {
            admin_password
        };

        Self {
            admin_password,
            currency_symbol: currency_symbol.into(),
        }
    }
}

/// Interactive banking session
pub struct Session<R, W> {
    console: Console<R, W>,
    ledger: Ledger,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty ledger
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self::with_ledger(input, output, config, Ledger::new())
    }

    /// Create a session over an existing ledger
    pub fn with_ledger(input: R, output: W, config: SessionConfig, ledger: Ledger) -> Self {
        Session {
            console: Console::new(input, output),
            ledger,
            config,
        }
    }

    /// The ledger as it stands
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Consume the session and keep the ledger
    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Run the top-level menu until Exit or end of input
    ///
    /// # Errors
    ///
    /// Returns only fatal errors (I/O failures). End of input is a normal
    /// way to finish and yields `Ok(())`.
    pub fn run(&mut self) -> Result<(), BankError> {
        info!("session started");
        let result = self.menu_loop(Self::main_menu_step);

        match result {
            Ok(()) | Err(BankError::EndOfInput) => {
                info!(accounts = self.ledger.len(), "session finished");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Repeat `step` until it returns `Flow::Leave`, reporting recoverable errors
    fn menu_loop<F>(&mut self, mut step: F) -> Result<(), BankError>
    where
        F: FnMut(&mut Self) -> Result<Flow, BankError>,
    {
        loop {
            let outcome = step(self);
            if self.recover(outcome)? == Flow::Leave {
                return Ok(());
            }
        }
    }

    /// Print a recoverable error and continue; pass fatal errors through
    fn recover(&mut self, outcome: Result<Flow, BankError>) -> Result<Flow, BankError> {
        match outcome {
            Ok(flow) => Ok(flow),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                info!(kind = e.kind(), "operation rejected");
                self.console.say(&e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn show_menu(&mut self, title: &str, items: &[&str]) -> Result<(), BankError> {
        self.console.blank()?;
        self.console.say(title)?;
        for (number, item) in items.iter().enumerate() {
            self.console.say(format_args!("{}. {}", number + 1, item))?;
        }
        Ok(())
    }

    fn main_menu_step(&mut self) -> Result<Flow, BankError> {
        self.show_menu(MainChoice::TITLE, MainChoice::ITEMS)?;
        let choice = MainChoice::try_from(self.console.prompt_choice()?)?;
        debug!(?choice, "main menu");

        match choice {
            MainChoice::CreateAccount => self.create_account()?,
            MainChoice::CustomerLogin => self.customer_login()?,
            MainChoice::AdminLogin => self.admin_login()?,
            MainChoice::Exit => return Ok(Flow::Leave),
        }

        Ok(Flow::Continue)
    }

    fn create_account(&mut self) -> Result<(), BankError> {
        let name = self.console.prompt("Name: ")?;
        let pin = self.console.prompt_pin("Set 4-digit PIN: ")?;
        let initial = self.console.prompt_amount("Initial Deposit: ")?;

        let id = self.ledger.create_account(&name, pin, initial)?;

        self.console.say("Account created!")?;
        self.console.say(format_args!("Your Account Number: {}", id))
    }
}
