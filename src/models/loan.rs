//! Loan parameters shared across the flow

use serde::{Deserialize, Serialize};

/// Loan the customer is configuring: amount, tenure and the fixed offer terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanState {
    /// Requested principal in rupees
    pub amount: u64,
    /// Repayment tenure in months
    pub tenure: u32,
    /// Ceiling for the requested amount
    pub max_amount: u64,
    /// Annual interest rate in percent (informational)
    pub interest_rate: f64,
}

impl Default for LoanState {
    fn default() -> Self {
        Self {
            amount: 200_000,
            tenure: 12,
            max_amount: 500_000,
            interest_rate: 11.5,
        }
    }
}

impl LoanState {
    /// Equated monthly instalment on a reducing balance, rounded to the rupee
    pub fn monthly_emi(&self) -> u64 {
        if self.tenure == 0 {
            return self.amount;
        }

        let principal = self.amount as f64;
        let months = self.tenure as i32;
        let rate_per_month = self.interest_rate / 12.0 / 100.0;

        if rate_per_month <= 0.0 {
            return (principal / months as f64).round() as u64;
        }

        let growth = (1.0 + rate_per_month).powi(months);
        (principal * rate_per_month * growth / (growth - 1.0)).round() as u64
    }

    /// Total repaid over the whole tenure
    pub fn total_payable(&self) -> u64 {
        self.monthly_emi() * u64::from(self.tenure)
    }
}

/// Bounds and step sizes enforced by the loan configuration sliders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanLimits {
    pub min_amount: u64,
    pub amount_step: u64,
    pub min_tenure: u32,
    pub max_tenure: u32,
    pub tenure_step: u32,
}

impl Default for LoanLimits {
    fn default() -> Self {
        Self {
            min_amount: 10_000,
            amount_step: 5_000,
            min_tenure: 3,
            max_tenure: 36,
            tenure_step: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_loan() {
        let loan = LoanState::default();
        assert_eq!(loan.amount, 200_000);
        assert_eq!(loan.tenure, 12);
        assert_eq!(loan.max_amount, 500_000);
        assert_eq!(loan.interest_rate, 11.5);
    }

    #[test]
    fn test_monthly_emi() {
        let loan = LoanState::default();
        let emi = loan.monthly_emi();
        assert!((17_700..=17_750).contains(&emi), "unexpected emi {}", emi);
        assert!(loan.total_payable() > loan.amount);
    }

    #[test]
    fn test_emi_without_interest() {
        let loan = LoanState {
            amount: 120_000,
            tenure: 12,
            interest_rate: 0.0,
            ..LoanState::default()
        };
        assert_eq!(loan.monthly_emi(), 10_000);
    }

    #[test]
    fn test_longer_tenure_lowers_emi() {
        let short = LoanState::default();
        let long = LoanState {
            tenure: 36,
            ..LoanState::default()
        };
        assert!(long.monthly_emi() < short.monthly_emi());
    }
}
