//! Service layer for actual-widget
//!
//! The service layer holds the widget's behavior on top of the API client
//! and the cache: fetching with fallback, aggregation, refresh scheduling
//! and assembling the final model.

pub mod budget;
pub mod refresh;
pub mod uncategorized;
pub mod widget;

pub use budget::{BudgetData, BudgetFetcher, DataStatus};
pub use refresh::next_refresh;
pub use uncategorized::{AccountStat, AggregationResult, UncategorizedAggregator};
pub use widget::{WidgetModel, WidgetOutcome, WidgetService};
