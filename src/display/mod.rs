//! Display formatting for terminal output
//!
//! Turns widget models, account diagnostics and the cached snapshot into
//! text for the terminal.

pub mod cache;
pub mod stats;
pub mod widget;

pub use cache::format_snapshot;
pub use stats::format_account_stats;
pub use widget::{format_time, format_widget};
