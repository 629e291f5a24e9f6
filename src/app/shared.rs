//! Cross-screen shared state
//!
//! Two independent cells: the loan being configured and the bank account
//! chosen for data sharing. Each has a single writer, the home screen and the
//! bank selection screen respectively; the session lends `&mut` access to
//! nobody else.

use crate::models::{BankAccount, LoanState};

#[derive(Debug, Clone, Default)]
pub struct SharedState {
    loan: LoanState,
    selected_bank: Option<BankAccount>,
}

impl SharedState {
    pub fn new(loan: LoanState) -> Self {
        Self {
            loan,
            selected_bank: None,
        }
    }

    pub fn loan(&self) -> &LoanState {
        &self.loan
    }

    pub fn set_loan_state(&mut self, loan: LoanState) {
        self.loan = loan;
    }

    pub fn selected_bank(&self) -> Option<&BankAccount> {
        self.selected_bank.as_ref()
    }

    pub fn set_selected_bank(&mut self, bank: BankAccount) {
        tracing::info!("Selected bank account {}", bank.id);
        self.selected_bank = Some(bank);
    }
}
