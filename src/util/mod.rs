//! Utility functions module
//!
//! Contains helpers for currency, tenure and countdown formatting and
//! duration parsing.

pub mod units;

// Re-export commonly used functions
pub use units::{
    format_countdown, format_rate, format_rupees, format_tenure, group_indian, mask_account,
    parse_duration,
};
