//! Widget text rendering
//!
//! Draws a `WidgetOutcome` as a few lines of terminal text. Balances are
//! colored by tone when color is enabled.

use chrono::{DateTime, Local, Utc};
use crossterm::style::Stylize;

use crate::models::BalanceTone;
use crate::services::widget::{GroupView, StatusLine, WidgetModel, WidgetOutcome};

/// Short local time used in the footer (e.g. "14:05")
pub fn format_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

fn paint_balance(text: String, tone: BalanceTone, color: bool) -> String {
    if !color {
        return text;
    }
    match tone {
        BalanceTone::Positive => text.green().to_string(),
        BalanceTone::Zero => text.grey().to_string(),
        BalanceTone::Negative => text.red().to_string(),
    }
}

fn muted(text: String, color: bool) -> String {
    if color {
        text.dark_grey().to_string()
    } else {
        text
    }
}

/// Render a refresh outcome as terminal text
pub fn format_widget(outcome: &WidgetOutcome, color: bool) -> String {
    match outcome {
        WidgetOutcome::NoData { message } => format!("{}\n", message),
        WidgetOutcome::Ready(model) => format_model(model, color),
    }
}

fn format_model(model: &WidgetModel, color: bool) -> String {
    let mut output = String::new();

    match &model.group {
        GroupView::Missing { target } => {
            output.push_str(&format!("Group '{}' not found\n", target));
        }
        GroupView::Found { lines, .. } => {
            if let Some(title) = model.title() {
                output.push_str(&muted(title, color));
                output.push_str("\n\n");
            }

            let name_width = lines.iter().map(|l| l.name.chars().count()).max().unwrap_or(0);
            let balance_width = lines
                .iter()
                .map(|l| l.formatted.chars().count())
                .max()
                .unwrap_or(0);

            for line in lines {
                let balance = format!("{:>width$}", line.formatted, width = balance_width);
                output.push_str(&format!(
                    "{:<name_width$}  {}\n",
                    line.name,
                    paint_balance(balance, line.tone, color),
                    name_width = name_width,
                ));
            }
        }
    }

    if let Some(summary) = &model.uncategorized {
        output.push('\n');
        let headline = summary.headline();
        if color {
            output.push_str(&headline.yellow().to_string());
        } else {
            output.push_str(&headline);
        }
        output.push('\n');
    }

    output.push('\n');
    match &model.status {
        StatusLine::Live { retrieved_at } => {
            output.push_str(&muted(
                format!("Last retrieved: {}", format_time(*retrieved_at)),
                color,
            ));
            output.push('\n');
        }
        StatusLine::Failed {
            failed_at,
            last_success,
        } => {
            output.push_str(&muted(format!("Failed: {}", format_time(*failed_at)), color));
            output.push('\n');
            output.push_str(&muted(
                format!("Last retrieved: {}", format_time(*last_success)),
                color,
            ));
            output.push('\n');
        }
    }
    output.push_str(&muted(
        format!("Next refresh: {}", format_time(model.next_refresh)),
        color,
    ));
    output.push('\n');

    output
}
