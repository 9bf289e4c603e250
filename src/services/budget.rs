//! Budget data fetcher
//!
//! Fetches the month's category groups and keeps the cache in step with
//! them. When the server can't be reached the last good snapshot is served
//! instead, marked as stale.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::{decode_data, ActualApi, HttpClient};
use crate::clock::Clock;
use crate::config::Settings;
use crate::error::{WidgetError, WidgetResult};
use crate::models::CategoryGroup;
use crate::storage::{CacheSnapshot, CacheStore, CACHE_KEY};

/// Where the budget data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataStatus {
    /// Fetched from the server during this run
    Live,
    /// Served from the cache because the fetch failed
    Stale,
}

/// Category groups plus their provenance
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetData {
    pub groups: Vec<CategoryGroup>,
    pub status: DataStatus,
    /// Time of the fetch that produced `groups`
    pub retrieved_at: DateTime<Utc>,
}

impl BudgetData {
    pub fn is_stale(&self) -> bool {
        self.status == DataStatus::Stale
    }
}

/// `YYYY-MM` of the given instant (UTC)
pub fn month_key(now: DateTime<Utc>) -> String {
    now.format("%Y-%m").to_string()
}

/// Service for fetching budget data with cache fallback
pub struct BudgetFetcher<'a> {
    api: ActualApi<'a>,
    cache: &'a dyn CacheStore,
    clock: &'a dyn Clock,
}

impl<'a> BudgetFetcher<'a> {
    /// Create a new budget fetcher
    pub fn new(
        http: &'a dyn HttpClient,
        settings: &'a Settings,
        cache: &'a dyn CacheStore,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            api: ActualApi::new(http, settings),
            cache,
            clock,
        }
    }

    /// Fetch the category groups of `month` (`YYYY-MM`)
    ///
    /// # Errors
    ///
    /// Returns `WidgetError::NoDataAvailable` when the fetch fails and the
    /// cache holds nothing usable. No other error escapes.
    pub fn fetch(&self, month: &str) -> WidgetResult<BudgetData> {
        let now = self.clock.now();

        match self.api.category_groups(month) {
            Ok((payload, groups)) => {
                let snapshot = CacheSnapshot::new(now, payload);
                if let Err(e) = self.cache.save(&snapshot) {
                    tracing::warn!(key = CACHE_KEY, error = %e, "Failed to update cache");
                }

                tracing::debug!(month, groups = groups.len(), "Fetched category groups");
                Ok(BudgetData {
                    groups,
                    status: DataStatus::Live,
                    retrieved_at: now,
                })
            }
            Err(e) => {
                tracing::error!(month, error = %e, "API fetch failed");
                self.from_cache(now)
            }
        }
    }

    fn from_cache(&self, now: DateTime<Utc>) -> WidgetResult<BudgetData> {
        let snapshot = self.cache.load().ok_or(WidgetError::NoDataAvailable)?;

        let groups = decode_data(CACHE_KEY, &snapshot.data).map_err(|e| {
            tracing::warn!(error = %e, "Cached snapshot has no usable category groups");
            WidgetError::NoDataAvailable
        })?;

        let retrieved_at = snapshot.timestamp.unwrap_or(now);
        tracing::info!(%retrieved_at, "Using cached budget data");

        Ok(BudgetData {
            groups,
            status: DataStatus::Stale,
            retrieved_at,
        })
    }
}
