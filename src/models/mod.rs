//! Data models module
//!
//! Contains the loan parameters, the bank account catalog and the consent
//! records shown throughout the flow.

pub mod bank;
pub mod consent;
pub mod loan;

// Re-export commonly used types
pub use bank::{BankAccount, BANK_CATALOG};
pub use consent::{ConsentDetails, ConsentRecord, CONSENT_INFO};
pub use loan::{LoanLimits, LoanState};
