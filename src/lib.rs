//! actual-widget - Budget balance widget for Actual Budget
//!
//! This library fetches a month's category balances and recent
//! uncategorized transactions from an actual-http-api server and turns them
//! into a small widget. When the server can't be reached, the last
//! successful fetch is served from a local cache.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Data models decoded from the API (groups, accounts, transactions)
//! - `api`: HTTP transport and the actual-http-api endpoints
//! - `storage`: Atomic JSON files and the snapshot cache
//! - `clock`: Injectable time source
//! - `services`: Fetching, aggregation, refresh scheduling, widget assembly
//! - `display`: Terminal rendering
//! - `cli`: Command handlers
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use actual_widget::api::ReqwestHttpClient;
//! use actual_widget::clock::SystemClock;
//! use actual_widget::config::{Settings, WidgetPaths};
//! use actual_widget::services::WidgetService;
//! use actual_widget::storage::FileCacheStore;
//!
//! let paths = WidgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let http = ReqwestHttpClient::new(std::time::Duration::from_secs(20))?;
//! let cache = FileCacheStore::new(paths.cache_file());
//! let outcome = WidgetService::new(&http, &settings, &cache, &SystemClock).refresh();
//! ```

pub mod api;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{WidgetError, WidgetResult};
