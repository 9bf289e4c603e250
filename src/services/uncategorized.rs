//! Uncategorized transaction aggregator
//!
//! Walks every open, on-budget account and collects the transactions in the
//! lookback window that still need a category. A failing account is noted
//! and skipped; it never stops the others. There is no cache here: missing
//! data simply isn't counted.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::api::{ActualApi, HttpClient};
use crate::clock::Clock;
use crate::config::Settings;
use crate::models::{Account, Money, Transaction};

/// Per-account diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountStat {
    pub name: String,
    /// Transactions returned for the window
    pub total: usize,
    pub uncategorized: usize,
    /// The account's transactions could not be fetched
    pub error: bool,
}

impl AccountStat {
    fn failed(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            total: 0,
            uncategorized: 0,
            error: true,
        }
    }
}

/// Uncategorized transactions across all accounts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregationResult {
    pub transactions: Vec<Transaction>,
    pub count: usize,
    pub total: Money,
    pub stats: Vec<AccountStat>,
    /// The account list itself could not be fetched
    pub list_failed: bool,
}

impl AggregationResult {
    /// True if any part of the aggregation failed
    pub fn degraded(&self) -> bool {
        self.list_failed || self.stats.iter().any(|s| s.error)
    }

    fn list_failure() -> Self {
        Self {
            list_failed: true,
            ..Self::default()
        }
    }

    fn push(&mut self, account: &Account, fetched: Vec<Transaction>) {
        let total = fetched.len();
        let uncategorized: Vec<Transaction> =
            fetched.into_iter().filter(Transaction::is_uncategorized).collect();

        self.stats.push(AccountStat {
            name: account.name.clone(),
            total,
            uncategorized: uncategorized.len(),
            error: false,
        });
        self.count += uncategorized.len();
        self.total += uncategorized.iter().map(|t| t.amount).sum::<Money>();
        self.transactions.extend(uncategorized);
    }
}

/// First day of the lookback window (UTC date)
///
/// Windows reaching past the earliest representable date start there.
pub fn since_date(now: DateTime<Utc>, lookback_days: u32) -> NaiveDate {
    now.checked_sub_signed(Duration::days(i64::from(lookback_days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
        .date_naive()
}

/// Service that aggregates uncategorized transactions
pub struct UncategorizedAggregator<'a> {
    api: ActualApi<'a>,
    settings: &'a Settings,
    clock: &'a dyn Clock,
}

impl<'a> UncategorizedAggregator<'a> {
    /// Create a new aggregator
    pub fn new(http: &'a dyn HttpClient, settings: &'a Settings, clock: &'a dyn Clock) -> Self {
        Self {
            api: ActualApi::new(http, settings),
            settings,
            clock,
        }
    }

    /// Aggregate uncategorized transactions from the last `lookback_days`
    ///
    /// Accounts are visited one at a time in server order.
    pub fn aggregate(&self, lookback_days: u32) -> AggregationResult {
        let accounts = match self.api.accounts() {
            Ok(accounts) => accounts,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch account list");
                return AggregationResult::list_failure();
            }
        };

        let active: Vec<&Account> = accounts.iter().filter(|a| a.is_active_on_budget()).collect();
        tracing::debug!(count = active.len(), "Found accounts");

        let since = since_date(self.clock.now(), lookback_days);
        let mut result = AggregationResult::default();

        for account in active {
            match self.api.transactions(&account.id, since) {
                Ok(fetched) => {
                    let before = result.transactions.len();
                    result.push(account, fetched);
                    self.log_account(account, &result, before);
                }
                Err(e) => {
                    tracing::warn!(
                        account = %account.name,
                        id = %account.id,
                        error = %e,
                        "Failed to fetch transactions"
                    );
                    result.stats.push(AccountStat::failed(account));
                }
            }
        }

        tracing::debug!(
            count = result.count,
            degraded = result.degraded(),
            "Uncategorized transactions aggregated"
        );
        result
    }

    fn log_account(&self, account: &Account, result: &AggregationResult, first_new: usize) {
        if let Some(stat) = result.stats.last() {
            tracing::debug!(
                "{}: {} uncategorized / {} total",
                account.name,
                stat.uncategorized,
                stat.total
            );
        }
        for txn in &result.transactions[first_new..] {
            tracing::debug!(
                "  - {} on {}",
                self.settings.format_amount(txn.amount),
                txn.date
            );
        }
    }
}
