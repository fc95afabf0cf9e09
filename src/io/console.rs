//! Prompting console with typed input parsing
//!
//! Provides a line-oriented prompt/answer interface over any buffered reader
//! and writer. Every answer passes through a parse-and-validate step, so a
//! malformed number becomes a `MalformedInput` error instead of a crash.
//!
//! # Design
//!
//! The Console is generic over `BufRead` and `Write`. The binary uses locked
//! stdin/stdout; tests drive it with an in-memory script and capture output
//! in a `Vec<u8>`:
//!
//! ```
//! use console_bank::io::Console;
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! let mut console = Console::new(Cursor::new("5001\n"), &mut output);
//! let id = console.prompt_account_id("Account No: ").unwrap();
//! assert_eq!(id, 5001);
//! ```
//!
//! # Error Handling
//!
//! - Unparsable answers yield `MalformedInput`; the caller returns to its menu
//! - A closed input stream yields `EndOfInput`
//! - Read or write failures yield `IoError`

use crate::types::{AccountId, BankError, Pin};
use rust_decimal::Decimal;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

/// Prompting console
///
/// Keeps a count of lines consumed so errors can be traced back to the
/// offending line of a scripted session.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    line_num: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given reader and writer
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            line_num: 0,
        }
    }

    /// Number of input lines consumed so far
    pub fn line_num(&self) -> usize {
        self.line_num
    }

    /// Write `label` without a newline, then read one trimmed line
    ///
    /// # Errors
    ///
    /// - `EndOfInput` if the reader is exhausted
    /// - `MalformedInput` if the line is not valid UTF-8; the line is consumed
    /// - `IoError` if reading or writing fails
    pub fn prompt(&mut self, label: &str) -> Result<String, BankError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(BankError::EndOfInput);
        }
        self.line_num += 1;

        let line = String::from_utf8(bytes).map_err(|e| {
            debug!(line = self.line_num, "input is not valid UTF-8");
            let lossy = String::from_utf8_lossy(e.as_bytes());
            BankError::malformed_input(lossy.trim(), "UTF-8 text")
        })?;

        Ok(line.trim().to_string())
    }

    /// Prompt and parse the answer as `T`
    ///
    /// `expected` describes the value in the error message, e.g. "a number".
    pub fn prompt_parsed<T: FromStr>(
        &mut self,
        label: &str,
        expected: &str,
    ) -> Result<T, BankError> {
        let answer = self.prompt(label)?;
        answer.parse::<T>().map_err(|_| {
            debug!(line = self.line_num, expected, "malformed input");
            BankError::malformed_input(&answer, expected)
        })
    }

    /// Prompt for a menu number
    pub fn prompt_choice(&mut self) -> Result<u32, BankError> {
        self.prompt_parsed("Choice: ", "a menu number")
    }

    /// Prompt for an account number
    pub fn prompt_account_id(&mut self, label: &str) -> Result<AccountId, BankError> {
        self.prompt_parsed(label, "an account number")
    }

    /// Prompt for a numeric PIN
    pub fn prompt_pin(&mut self, label: &str) -> Result<Pin, BankError> {
        self.prompt_parsed(label, "a numeric PIN")
    }

    /// Prompt for a decimal amount
    ///
    /// Sign is not checked here; the ledger rejects negative amounts.
    pub fn prompt_amount(&mut self, label: &str) -> Result<Decimal, BankError> {
        self.prompt_parsed(label, "an amount")
    }

    /// Write one line of output
    pub fn say(&mut self, message: impl Display) -> Result<(), BankError> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }

    /// Write an empty line
    pub fn blank(&mut self) -> Result<(), BankError> {
        self.say("")
    }
}
