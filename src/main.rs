//! Console Bank CLI
//!
//! Interactive banking console over stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --currency '$' --admin-password s3cret
//! RUST_LOG=console_bank=debug cargo run
//! ```
//!
//! Menus and prompts go to stdout; diagnostics go to stderr through
//! `tracing`, filtered by `RUST_LOG` or `--log-level`.
//!
//! # Exit Codes
//!
//! - 0: Exit chosen from the menu, or input closed
//! - 1: Fatal I/O error

use console_bank::cli;
use console_bank::session::Session;
use std::io;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Diagnostics on stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_filter().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), args.to_session_config());

    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
