//! Account model
//!
//! Accounts as listed by the Actual API. Closed and off-budget accounts are
//! skipped when looking for uncategorized transactions.

use serde::{Deserialize, Serialize};

/// A financial account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Server-side identifier
    pub id: String,

    /// Account name (e.g., "Chase Checking")
    pub name: String,

    /// Whether the account has been closed
    #[serde(default)]
    pub closed: bool,

    /// Off-budget accounts (like investments) don't affect the budget
    #[serde(default)]
    pub offbudget: bool,
}

impl Account {
    /// Create a new open, on-budget account
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            closed: false,
            offbudget: false,
        }
    }

    /// True for open, on-budget accounts
    pub fn is_active_on_budget(&self) -> bool {
        !self.closed && !self.offbudget
    }
}
