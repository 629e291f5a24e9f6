//! Bank accounts discoverable through the Account Aggregator

use crate::util::units::mask_account;

/// One account found for the customer's mobile number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    pub id: &'static str,
    pub bank_name: &'static str,
    pub account_type: &'static str,
    /// Last four digits of the account number
    pub mask: &'static str,
    /// Whether the account is linked to the AA network and can share data
    pub is_linked: bool,
}

impl BankAccount {
    /// "Savings •••• 4582"
    pub fn summary(&self) -> String {
        format!("{} {}", self.account_type, mask_account(self.mask))
    }
}

/// Fixed catalog returned by account discovery
pub const BANK_CATALOG: [BankAccount; 4] = [
    BankAccount {
        id: "hdfc",
        bank_name: "HDFC Bank",
        account_type: "Savings",
        mask: "4582",
        is_linked: true,
    },
    BankAccount {
        id: "icici",
        bank_name: "ICICI Bank",
        account_type: "Salary",
        mask: "1123",
        is_linked: true,
    },
    BankAccount {
        id: "sbi",
        bank_name: "State Bank of India",
        account_type: "Savings",
        mask: "9021",
        is_linked: true,
    },
    BankAccount {
        id: "axis",
        bank_name: "Axis Bank",
        account_type: "Current",
        mask: "7764",
        is_linked: false,
    },
];

/// Look an account up by id
pub fn find_account(id: &str) -> Option<&'static BankAccount> {
    BANK_CATALOG.iter().find(|account| account.id == id)
}

/// Number of catalog entries that can be selected
pub fn linked_count() -> usize {
    BANK_CATALOG.iter().filter(|account| account.is_linked).count()
}
