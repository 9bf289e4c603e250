//! Actual HTTP API endpoints
//!
//! Builds the endpoint URLs for one budget and decodes the `{ "data": ... }`
//! wrapper around every response.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::http::HttpClient;
use crate::config::Settings;
use crate::error::{WidgetError, WidgetResult};
use crate::models::{Account, CategoryGroup, Transaction};

/// Client for one budget on an actual-http-api server
pub struct ActualApi<'a> {
    http: &'a dyn HttpClient,
    settings: &'a Settings,
}

impl<'a> ActualApi<'a> {
    /// Create a new API client
    pub fn new(http: &'a dyn HttpClient, settings: &'a Settings) -> Self {
        Self { http, settings }
    }

    fn budget_url(&self) -> String {
        format!(
            "{}/v1/budgets/{}",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.sync_id
        )
    }

    /// URL of the category groups for a `YYYY-MM` month
    pub fn category_groups_url(&self, month: &str) -> String {
        format!("{}/months/{}/categorygroups", self.budget_url(), month)
    }

    /// URL of the account list
    pub fn accounts_url(&self) -> String {
        format!("{}/accounts", self.budget_url())
    }

    /// URL of an account's transactions on or after `since`
    pub fn transactions_url(&self, account_id: &str, since: NaiveDate) -> String {
        format!(
            "{}/accounts/{}/transactions?since_date={}",
            self.budget_url(),
            account_id,
            since.format("%Y-%m-%d")
        )
    }

    fn get(&self, url: &str) -> WidgetResult<serde_json::Value> {
        let headers = [
            ("x-api-key", self.settings.api_key.as_str()),
            ("accept", "application/json"),
        ];
        tracing::debug!(url, "GET");
        self.http.get_json(url, &headers)
    }

    /// Fetch a month's category groups
    ///
    /// Returns the raw payload (for caching) alongside the decoded groups.
    pub fn category_groups(
        &self,
        month: &str,
    ) -> WidgetResult<(serde_json::Value, Vec<CategoryGroup>)> {
        let url = self.category_groups_url(month);
        let payload = self.get(&url)?;
        let groups = decode_data(&url, &payload)?;
        Ok((payload, groups))
    }

    /// Fetch all accounts, in server order
    pub fn accounts(&self) -> WidgetResult<Vec<Account>> {
        let url = self.accounts_url();
        let payload = self.get(&url)?;
        decode_data(&url, &payload)
    }

    /// Fetch an account's transactions since a date
    pub fn transactions(&self, account_id: &str, since: NaiveDate) -> WidgetResult<Vec<Transaction>> {
        let url = self.transactions_url(account_id, since);
        let payload = self.get(&url)?;
        decode_data(&url, &payload)
    }
}

/// Decode the `data` array of an API response
pub fn decode_data<T: DeserializeOwned>(
    source: &str,
    payload: &serde_json::Value,
) -> WidgetResult<Vec<T>> {
    let data = payload.get("data").ok_or_else(|| WidgetError::Decode {
        url: source.to_string(),
        message: "missing `data` field".into(),
    })?;

    Vec::<T>::deserialize(data).map_err(|e| WidgetError::Decode {
        url: source.to_string(),
        message: e.to_string(),
    })
}
