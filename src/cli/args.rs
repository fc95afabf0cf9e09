use crate::session::{SessionConfig, DEFAULT_ADMIN_PASSWORD, DEFAULT_CURRENCY_SYMBOL};
use clap::Parser;

/// Interactive console bank
#[derive(Parser, Debug)]
#[command(name = "console-bank")]
#[command(about = "Interactive in-memory banking console", long_about = None)]
pub struct CliArgs {
    /// Shared secret for the admin panel
    #[arg(
        long = "admin-password",
        value_name = "SECRET",
        default_value = DEFAULT_ADMIN_PASSWORD,
        help = "Password required to open the admin panel"
    )]
    pub admin_password: String,

    /// Currency symbol printed before amounts
    #[arg(
        long = "currency",
        value_name = "SYMBOL",
        default_value = DEFAULT_CURRENCY_SYMBOL,
        help = "Symbol printed in front of every amount"
    )]
    pub currency: String,

    /// Log level used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level for stderr diagnostics: error, warn, info, debug or trace"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Create a SessionConfig from CLI arguments
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig::new(self.admin_password.clone(), self.currency.clone())
    }

    /// Default tracing filter directive for this crate
    pub fn log_filter(&self) -> String {
        format!("console_bank={}", self.log_level)
    }
}
