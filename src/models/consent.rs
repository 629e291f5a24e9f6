//! Consent terms, the session's consent grant and the data-access summaries
//! shown in the trust center.

use chrono::{DateTime, Duration, Local};

/// What the lender asks permission for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentDetails {
    pub purpose: &'static str,
    pub duration: &'static str,
    pub data_points: &'static [&'static str],
    pub partner: &'static str,
}

pub const CONSENT_INFO: ConsentDetails = ConsentDetails {
    purpose: "To verify your income and approve your loan",
    duration: "30 days",
    data_points: &["Bank statements (last 12 months)", "Account Balance"],
    partner: "Secure AA Network",
};

/// Items listed under "What we WILL see" in the privacy details modal
pub const VISIBLE_DATA: [&str; 2] = ["Bank statements (last 12 months)", "Account balance"];

/// Items listed under "What we CANNOT see"
pub const HIDDEN_DATA: [&str; 3] = ["Netbanking password", "UPI PIN", "Ability to move money"];

/// Days a consent grant stays valid
pub const CONSENT_VALIDITY_DAYS: i64 = 30;

/// The session's single consent grant.
///
/// Starts active and can only move to revoked.
#[derive(Debug, Clone)]
pub struct ConsentRecord {
    active: bool,
    granted_at: DateTime<Local>,
    revoked_at: Option<DateTime<Local>>,
}

impl ConsentRecord {
    /// A grant issued now
    pub fn new() -> Self {
        Self::granted_at(Local::now())
    }

    /// A grant issued at a specific time
    pub fn granted_at(granted_at: DateTime<Local>) -> Self {
        Self {
            active: true,
            granted_at,
            revoked_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn granted(&self) -> DateTime<Local> {
        self.granted_at
    }

    pub fn expires_at(&self) -> DateTime<Local> {
        self.granted_at + Duration::days(CONSENT_VALIDITY_DAYS)
    }

    pub fn revoked_at(&self) -> Option<DateTime<Local>> {
        self.revoked_at
    }

    /// Revoke the grant. Returns true only on the transition from active.
    pub fn revoke(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.revoked_at = Some(Local::now());
        true
    }
}

impl Default for ConsentRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// One line of the trust center's access history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessEvent {
    pub description: &'static str,
    pub days_ago: u32,
}

impl AccessEvent {
    /// "QuickLoan • Today" / "QuickLoan • 2 days ago"
    pub fn when(&self) -> String {
        match self.days_ago {
            0 => "Today".to_string(),
            1 => "1 day ago".to_string(),
            n => format!("{} days ago", n),
        }
    }
}

pub const ACCESS_HISTORY: [AccessEvent; 3] = [
    AccessEvent {
        description: "Data Fetch - Statement Analysis",
        days_ago: 0,
    },
    AccessEvent {
        description: "Data Fetch - Statement Analysis",
        days_ago: 1,
    },
    AccessEvent {
        description: "Data Fetch - Statement Analysis",
        days_ago: 2,
    },
];

/// Monthly income and expense figures shared with the lender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyFlow {
    pub month: &'static str,
    pub income: u64,
    pub expense: u64,
}

pub const INCOME_SUMMARY: [MonthlyFlow; 6] = [
    MonthlyFlow {
        month: "Jan",
        income: 45_000,
        expense: 32_000,
    },
    MonthlyFlow {
        month: "Feb",
        income: 45_000,
        expense: 34_000,
    },
    MonthlyFlow {
        month: "Mar",
        income: 48_000,
        expense: 28_000,
    },
    MonthlyFlow {
        month: "Apr",
        income: 45_000,
        expense: 35_000,
    },
    MonthlyFlow {
        month: "May",
        income: 52_000,
        expense: 30_000,
    },
    MonthlyFlow {
        month: "Jun",
        income: 45_000,
        expense: 29_000,
    },
];
