//! QuickLoan AA - Account Aggregator consent flow prototype
//!
//! A terminal rendition of a lending app's data-consent journey: loan
//! configuration, identity login, bank discovery, consent review, bank
//! authorization, processing and the trust center. Every service call is a
//! fixed-duration simulated delay.

use std::fmt;

pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum QuickLoanError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Log sink could not be set up
    LoggingError(String),
}

impl fmt::Display for QuickLoanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuickLoanError::IoError(err) => write!(f, "I/O error: {}", err),
            QuickLoanError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            QuickLoanError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            QuickLoanError::LoggingError(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for QuickLoanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuickLoanError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QuickLoanError {
    fn from(err: std::io::Error) -> Self {
        QuickLoanError::IoError(err)
    }
}

impl From<toml::de::Error> for QuickLoanError {
    fn from(err: toml::de::Error) -> Self {
        QuickLoanError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for QuickLoanError {
    fn from(err: toml::ser::Error) -> Self {
        QuickLoanError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for QuickLoan operations
pub type Result<T> = std::result::Result<T, QuickLoanError>;

/// Fixed simulated service latencies.
///
/// None of these are configurable; every one is fire-once or a fixed
/// interval that runs until its screen stops it.
pub mod delays {
    use std::time::Duration;

    /// Identity login: sending the OTP to the mobile number
    pub const SEND_OTP: Duration = Duration::from_millis(1000);
    /// Identity login: verifying the 4-digit OTP
    pub const VERIFY_LOGIN_OTP: Duration = Duration::from_millis(1500);
    /// Bank selection: discovering linked accounts
    pub const FETCH_ACCOUNTS: Duration = Duration::from_millis(2000);
    /// Bank OTP: verifying the 6-digit authorization code
    pub const VERIFY_BANK_OTP: Duration = Duration::from_millis(2000);
    /// Bank OTP: countdown decrement period
    pub const RESEND_TICK: Duration = Duration::from_secs(1);
    /// Bank OTP: countdown start value in seconds
    pub const RESEND_COUNTDOWN_SECS: u32 = 30;
    /// Success screen: auto-redirect to processing
    pub const SUCCESS_REDIRECT: Duration = Duration::from_millis(3000);
    /// Processing screen: per-step animation period
    pub const PROCESSING_STEP: Duration = Duration::from_millis(1500);
    /// Processing screen: slack after the last step before navigating
    pub const PROCESSING_TAIL: Duration = Duration::from_millis(500);
    /// Result screen: delay between accepting and the system notification
    pub const NOTIFY_AFTER_ACCEPT: Duration = Duration::from_millis(1000);
    /// Trust center: revocation acknowledgement toast
    pub const REVOKE_TOAST: Duration = Duration::from_millis(3000);
    /// Notification overlay auto-hide
    pub const NOTIFICATION_AUTO_HIDE: Duration = Duration::from_millis(5000);
}

// Common types and constants
pub const APP_NAME: &str = "quickloan";
pub const CONFIG_FILE: &str = "quickloan.toml";
pub const LOG_FILE: &str = "quickloan.log";
pub const LENDER_NAME: &str = "QuickLoan";
