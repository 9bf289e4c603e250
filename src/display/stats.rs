//! Per-account diagnostics table

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::services::uncategorized::AccountStat;

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Account")]
    name: String,
    #[tabled(rename = "Transactions")]
    total: usize,
    #[tabled(rename = "Uncategorized")]
    uncategorized: usize,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// Format the accounts visited during aggregation as a table
pub fn format_account_stats(stats: &[AccountStat]) -> String {
    if stats.is_empty() {
        return "No accounts checked.\n".to_string();
    }

    let rows: Vec<StatRow> = stats
        .iter()
        .map(|s| StatRow {
            name: s.name.clone(),
            total: s.total,
            uncategorized: s.uncategorized,
            status: if s.error { "failed" } else { "ok" },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(format_account_stats(&[]), "No accounts checked.\n");
    }

    #[test]
    fn test_rows() {
        let stats = vec![
            AccountStat {
                name: "Checking".into(),
                total: 12,
                uncategorized: 2,
                error: false,
            },
            AccountStat {
                name: "Card".into(),
                total: 0,
                uncategorized: 0,
                error: true,
            },
        ];

        let text = format_account_stats(&stats);
        assert!(text.contains("Uncategorized"));
        assert!(text.contains("Checking"));
        assert!(text.contains("failed"));
        assert_eq!(text.lines().filter(|l| l.contains("ok")).count(), 1);
    }
}
