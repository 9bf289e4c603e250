//! Widget assembly
//!
//! Runs one refresh cycle (budget data, then uncategorized transactions)
//! and turns the results into a `WidgetModel`: plain data that a renderer
//! or an external widget host can draw without further decisions.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::budget::{month_key, BudgetData, BudgetFetcher, DataStatus};
use super::refresh::next_refresh;
use super::uncategorized::{AccountStat, AggregationResult, UncategorizedAggregator};
use crate::api::HttpClient;
use crate::clock::Clock;
use crate::config::Settings;
use crate::models::{BalanceTone, CategoryGroup, Money};
use crate::storage::CacheStore;

/// One category row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLine {
    pub name: String,
    pub balance: Money,
    pub formatted: String,
    pub tone: BalanceTone,
}

/// The configured category group, or the fact that it wasn't found
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupView {
    Found {
        name: String,
        lines: Vec<CategoryLine>,
    },
    Missing {
        target: String,
    },
}

/// Summary box for uncategorized transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UncategorizedSummary {
    pub count: usize,
    pub total: Money,
    pub formatted_total: String,
    /// e.g. "past 30 days"
    pub window: String,
}

impl UncategorizedSummary {
    /// e.g. "3 uncategorized: -$45.10 • past 30 days"
    pub fn headline(&self) -> String {
        format!(
            "{} uncategorized: {} • {}",
            self.count, self.formatted_total, self.window
        )
    }
}

/// Footer state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StatusLine {
    /// Everything was fetched during this run
    Live { retrieved_at: DateTime<Utc> },
    /// Something failed; budget data dates from `last_success`
    Failed {
        failed_at: DateTime<Utc>,
        last_success: DateTime<Utc>,
    },
}

/// Everything the widget shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetModel {
    /// e.g. "October 2026"
    pub month_label: String,
    pub group: GroupView,
    pub uncategorized: Option<UncategorizedSummary>,
    pub status: StatusLine,
    pub next_refresh: DateTime<Utc>,
    pub budget_status: DataStatus,
    pub degraded: bool,
    pub account_stats: Vec<AccountStat>,
}

impl WidgetModel {
    /// Title line, present only when the group was found
    pub fn title(&self) -> Option<String> {
        match &self.group {
            GroupView::Found { name, .. } => Some(format!("{} • {}", self.month_label, name)),
            GroupView::Missing { .. } => None,
        }
    }
}

/// Result of a refresh cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum WidgetOutcome {
    Ready(WidgetModel),
    /// Nothing to show at all; the message replaces the whole widget
    NoData { message: String },
}

/// Service that runs a full refresh cycle
pub struct WidgetService<'a> {
    http: &'a dyn HttpClient,
    settings: &'a Settings,
    cache: &'a dyn CacheStore,
    clock: &'a dyn Clock,
}

impl<'a> WidgetService<'a> {
    /// Create a new widget service
    pub fn new(
        http: &'a dyn HttpClient,
        settings: &'a Settings,
        cache: &'a dyn CacheStore,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            http,
            settings,
            cache,
            clock,
        }
    }

    /// Fetch everything and build the widget
    ///
    /// Only a budget fetch failure with an empty cache yields
    /// `WidgetOutcome::NoData`; in that case no account is queried.
    pub fn refresh(&self) -> WidgetOutcome {
        let now = self.clock.now();
        let month = month_key(now);

        let budget = match BudgetFetcher::new(self.http, self.settings, self.cache, self.clock)
            .fetch(&month)
        {
            Ok(budget) => budget,
            Err(e) => {
                tracing::error!(error = %e, "No budget data to display");
                return WidgetOutcome::NoData {
                    message: e.to_string(),
                };
            }
        };

        let aggregation = UncategorizedAggregator::new(self.http, self.settings, self.clock)
            .aggregate(self.settings.lookback_days);

        let source = if budget.is_stale() { "cache" } else { "API" };
        tracing::info!(
            budget = source,
            uncategorized = aggregation.count,
            "Refresh complete"
        );

        WidgetOutcome::Ready(assemble(self.settings, now, budget, aggregation))
    }
}

/// Build the widget model from fetched data
pub fn assemble(
    settings: &Settings,
    now: DateTime<Utc>,
    budget: BudgetData,
    aggregation: AggregationResult,
) -> WidgetModel {
    let failed = budget.is_stale() || aggregation.degraded();

    let group = match CategoryGroup::find(&budget.groups, &settings.target_group) {
        Some(group) => GroupView::Found {
            name: group.name.clone(),
            lines: group
                .categories
                .iter()
                .map(|c| CategoryLine {
                    name: c.name.clone(),
                    balance: c.balance,
                    formatted: settings.format_amount(c.balance),
                    tone: c.balance.tone(),
                })
                .collect(),
        },
        None => {
            tracing::warn!(target_group = %settings.target_group, "Category group not found");
            GroupView::Missing {
                target: settings.target_group.clone(),
            }
        }
    };

    let uncategorized = (aggregation.count >= 1).then(|| UncategorizedSummary {
        count: aggregation.count,
        total: aggregation.total,
        formatted_total: settings.format_amount(aggregation.total),
        window: format!("past {} days", settings.lookback_days),
    });

    let status = if failed {
        StatusLine::Failed {
            failed_at: now,
            last_success: budget.retrieved_at,
        }
    } else {
        StatusLine::Live {
            retrieved_at: budget.retrieved_at,
        }
    };

    WidgetModel {
        month_label: now.format("%B %Y").to_string(),
        group,
        uncategorized,
        status,
        next_refresh: next_refresh(now, failed),
        budget_status: budget.status,
        degraded: failed,
        account_stats: aggregation.stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeHttpClient;
    use crate::clock::FixedClock;
    use crate::storage::{CacheSnapshot, MemoryCacheStore};
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    const BASE: &str = "http://actual.test/v1/budgets/sync-1";

    fn settings() -> Settings {
        Settings {
            sync_id: "sync-1".into(),
            api_key: "key".into(),
            base_url: "http://actual.test".into(),
            target_group: "Bills".into(),
            ..Settings::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()
    }

    fn groups_url() -> String {
        format!("{}/months/2026-10/categorygroups", BASE)
    }

    fn accounts_url() -> String {
        format!("{}/accounts", BASE)
    }

    fn txn_url(id: &str) -> String {
        format!("{}/accounts/{}/transactions?since_date=2026-09-18", BASE, id)
    }

    fn groups_payload() -> serde_json::Value {
        json!({"data": [
            {"name": "Income", "categories": [{"name": "Salary", "balance": 500000}]},
            {"name": "Bills", "categories": [
                {"name": "Rent", "balance": 1500},
                {"name": "Power", "balance": 0},
                {"name": "Phone", "balance": -1234}
            ]}
        ]})
    }

    fn healthy_server() -> FakeHttpClient {
        let http = FakeHttpClient::new();
        http.respond(&groups_url(), groups_payload());
        http.respond(
            &accounts_url(),
            json!({"data": [{"id": "a", "name": "Checking"}, {"id": "b", "name": "Card"}]}),
        );
        http.respond(
            &txn_url("a"),
            json!({"data": [{"amount": -4510, "date": "2026-10-10"}]}),
        );
        http.respond(
            &txn_url("b"),
            json!({"data": [{"amount": -990, "date": "2026-10-11"}, {"amount": -5, "date": "2026-10-11", "category": "x"}]}),
        );
        http
    }

    fn ready(outcome: WidgetOutcome) -> WidgetModel {
        match outcome {
            WidgetOutcome::Ready(model) => model,
            WidgetOutcome::NoData { message } => panic!("expected a widget, got: {}", message),
        }
    }

    #[test]
    fn test_healthy_refresh() {
        let settings = settings();
        let http = healthy_server();
        let cache = MemoryCacheStore::new();
        let clock = FixedClock(now());

        let model = ready(WidgetService::new(&http, &settings, &cache, &clock).refresh());

        assert_eq!(model.title().as_deref(), Some("October 2026 • Bills"));
        match &model.group {
            GroupView::Found { lines, .. } => {
                let rendered: Vec<(&str, &str, BalanceTone)> = lines
                    .iter()
                    .map(|l| (l.name.as_str(), l.formatted.as_str(), l.tone))
                    .collect();
                assert_eq!(
                    rendered,
                    vec![
                        ("Rent", "$15.00", BalanceTone::Positive),
                        ("Power", "$0.00", BalanceTone::Zero),
                        ("Phone", "-$12.34", BalanceTone::Negative),
                    ]
                );
            }
            other => panic!("unexpected group view: {:?}", other),
        }

        let summary = model.uncategorized.as_ref().unwrap();
        assert_eq!(summary.headline(), "2 uncategorized: -$55.00 • past 30 days");
        assert_eq!(model.status, StatusLine::Live { retrieved_at: now() });
        assert_eq!(model.next_refresh, now() + Duration::minutes(360));
        assert!(!model.degraded);
        assert!(cache.load().is_some());
    }

    #[test]
    fn test_no_data_skips_aggregation() {
        let settings = settings();
        let http = healthy_server();
        http.fail(&groups_url(), 500);
        let cache = MemoryCacheStore::new();
        let clock = FixedClock(now());

        let outcome = WidgetService::new(&http, &settings, &cache, &clock).refresh();

        assert_eq!(
            outcome,
            WidgetOutcome::NoData {
                message: "No data & no cache available.".into()
            }
        );
        assert_eq!(http.requested(), vec![groups_url()]);
    }

    #[test]
    fn test_stale_budget_reports_both_times() {
        let settings = settings();
        let http = healthy_server();
        http.fail(&groups_url(), 502);
        let cached_at = Utc.with_ymd_and_hms(2026, 10, 17, 21, 30, 0).unwrap();
        let cache = MemoryCacheStore::with_snapshot(CacheSnapshot::new(cached_at, groups_payload()));
        let clock = FixedClock(now());

        let model = ready(WidgetService::new(&http, &settings, &cache, &clock).refresh());

        assert_eq!(model.budget_status, DataStatus::Stale);
        assert_eq!(
            model.status,
            StatusLine::Failed {
                failed_at: now(),
                last_success: cached_at,
            }
        );
        assert_eq!(model.next_refresh, now() + Duration::minutes(30));
        assert!(matches!(model.group, GroupView::Found { .. }));
        // Aggregation still runs on stale budget data
        assert!(model.uncategorized.is_some());
    }

    #[test]
    fn test_partial_aggregation_marks_failure() {
        let settings = settings();
        let http = healthy_server();
        http.fail(&txn_url("b"), 500);
        let cache = MemoryCacheStore::new();
        let clock = FixedClock(now());

        let model = ready(WidgetService::new(&http, &settings, &cache, &clock).refresh());

        assert_eq!(model.budget_status, DataStatus::Live);
        assert!(model.degraded);
        assert_eq!(
            model.status,
            StatusLine::Failed {
                failed_at: now(),
                last_success: now(),
            }
        );
        assert_eq!(model.uncategorized.unwrap().count, 1);
        assert!(model.account_stats[1].error);
        assert_eq!(model.next_refresh, now() + Duration::minutes(30));
    }

    #[test]
    fn test_missing_group() {
        let mut settings = settings();
        settings.target_group = "Groceries".into();
        let budget = BudgetData {
            groups: vec![],
            status: DataStatus::Live,
            retrieved_at: now(),
        };

        let model = assemble(&settings, now(), budget, AggregationResult::default());

        assert_eq!(
            model.group,
            GroupView::Missing {
                target: "Groceries".into()
            }
        );
        assert!(model.title().is_none());
        assert!(model.uncategorized.is_none());
        assert!(!model.degraded);
    }

    #[test]
    fn test_model_serializes_for_hosts() {
        let settings = settings();
        let budget = BudgetData {
            groups: vec![],
            status: DataStatus::Live,
            retrieved_at: now(),
        };
        let model = assemble(&settings, now(), budget, AggregationResult::default());

        let value = serde_json::to_value(WidgetOutcome::Ready(model)).unwrap();
        assert_eq!(value["outcome"], "ready");
        assert_eq!(value["group"]["kind"], "missing");
        assert_eq!(value["status"]["state"], "live");
        assert_eq!(value["budget_status"], "live");
    }
}
