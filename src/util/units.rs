//! Units formatting and conversion utilities
//!
//! Provides human-readable formatting of rupee amounts, loan tenures,
//! interest rates, countdowns and masked account numbers.

use std::time::Duration;

/// Group digits the Indian way: the last three, then pairs.
///
/// # Examples
/// ```
/// use quickloan_aa::util::units::group_indian;
///
/// assert_eq!(group_indian(999), "999");
/// assert_eq!(group_indian(200000), "2,00,000");
/// assert_eq!(group_indian(12345678), "1,23,45,678");
/// ```
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format a rupee amount with the currency sign
///
/// # Examples
/// ```
/// use quickloan_aa::util::units::format_rupees;
///
/// assert_eq!(format_rupees(500000), "₹5,00,000");
/// assert_eq!(format_rupees(999), "₹999");
/// ```
pub fn format_rupees(amount: u64) -> String {
    format!("₹{}", group_indian(amount))
}

/// Format a loan tenure in months
pub fn format_tenure(months: u32) -> String {
    if months == 1 {
        "1 Month".to_string()
    } else {
        format!("{} Months", months)
    }
}

/// Format an annual interest rate
///
/// # Examples
/// ```
/// use quickloan_aa::util::units::format_rate;
///
/// assert_eq!(format_rate(11.5), "11.5% p.a.");
/// assert_eq!(format_rate(12.0), "12% p.a.");
/// ```
pub fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{:.0}% p.a.", rate)
    } else {
        format!("{}% p.a.", rate)
    }
}

/// Format a countdown in whole seconds, e.g. "30s"
pub fn format_countdown(seconds: u32) -> String {
    humantime::format_duration(Duration::from_secs(u64::from(seconds))).to_string()
}

/// Mask an account number down to its last four digits
///
/// # Examples
/// ```
/// use quickloan_aa::util::units::mask_account;
///
/// assert_eq!(mask_account("4582"), "•••• 4582");
/// ```
pub fn mask_account(last_four: &str) -> String {
    format!("•••• {}", last_four)
}

/// Parse a duration string such as "100ms" or "1s"
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use quickloan_aa::util::units::parse_duration;
///
/// assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
/// assert_eq!(parse_duration("1s").unwrap(), Duration::from_secs(1));
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    humantime::parse_duration(input.trim())
        .map_err(|e| format!("Invalid duration '{}': {}", input, e))
}
