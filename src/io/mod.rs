//! I/O module
//!
//! Handles operator input and output.
//!
//! # Components
//!
//! - `console` - Prompting console with typed parsing of operator answers

pub mod console;

pub use console::Console;
