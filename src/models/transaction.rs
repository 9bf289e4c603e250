//! Transaction model
//!
//! Transactions as returned by the per-account transactions endpoint.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Server-side identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Amount (positive for inflow, negative for outflow)
    pub amount: Money,

    /// Transaction date (YYYY-MM-DD)
    pub date: String,

    /// Assigned category ID
    #[serde(default)]
    pub category: Option<String>,

    /// Linked transaction on the other side of a transfer
    #[serde(default)]
    pub transfer_id: Option<String>,

    /// Marks the opening-balance entry of an account
    #[serde(default)]
    pub starting_balance_flag: bool,
}

impl Transaction {
    /// Create a plain transaction with no category or transfer
    pub fn new(amount: Money, date: impl Into<String>) -> Self {
        Self {
            id: None,
            amount,
            date: date.into(),
            category: None,
            transfer_id: None,
            starting_balance_flag: false,
        }
    }

    /// Whether this transaction still needs a category
    ///
    /// Transfers and starting balances never need one. Empty references are
    /// treated the same as missing ones.
    pub fn is_uncategorized(&self) -> bool {
        is_blank(&self.category) && is_blank(&self.transfer_id) && !self.starting_balance_flag
    }
}

fn is_blank(reference: &Option<String>) -> bool {
    reference.as_deref().map_or(true, str::is_empty)
}
