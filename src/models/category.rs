//! Category and CategoryGroup models
//!
//! Mirrors the `categorygroups` payload of the Actual HTTP API. Only the
//! fields the widget shows are decoded; everything else is ignored.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A group of related categories (e.g., "Bills", "Needs", "Wants")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Group name, matched exactly against the configured target
    pub name: String,

    /// Categories in server order
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl CategoryGroup {
    /// Create a new category group
    pub fn new(name: impl Into<String>, categories: Vec<Category>) -> Self {
        Self {
            name: name.into(),
            categories,
        }
    }

    /// Find the group whose name equals `name` exactly
    pub fn find<'a>(groups: &'a [CategoryGroup], name: &str) -> Option<&'a CategoryGroup> {
        groups.iter().find(|g| g.name == name)
    }
}

/// A budget category within a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category name
    pub name: String,

    /// Available balance for the month
    #[serde(default)]
    pub balance: Money,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }
}
