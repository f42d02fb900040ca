use crate::domain::model::{RatingSummary, RunReport};

const HEADERS: [&str; 4] = ["headline", "link", "domain_popularity", "popularity_rating"];

/// Renders the table, the rating summary and the stats block as plain text.
pub fn render_report(report: &RunReport) -> String {
    let mut out = String::new();

    if report.table.is_empty() {
        out.push_str("No headlines matched the search.\n");
    } else {
        let rows: Vec<[String; 4]> = report
            .table
            .iter()
            .map(|row| {
                [
                    row.headline().to_string(),
                    row.url().to_string(),
                    row.ranked.domain_rank.to_string(),
                    row.rating.map_or_else(|| "N/A".to_string(), |r| r.to_string()),
                ]
            })
            .collect();

        let index_width = (rows.len() - 1).to_string().len();
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        out.push_str(&format!("{:index_width$}", ""));
        for (header, width) in HEADERS.iter().zip(widths) {
            out.push_str(&format!("  {:<width$}", header));
        }
        out.push('\n');

        for (index, row) in rows.iter().enumerate() {
            out.push_str(&format!("{:<index_width$}", index));
            for (cell, width) in row.iter().zip(widths) {
                out.push_str(&format!("  {:<width$}", cell));
            }
            out.push('\n');
        }
    }

    match report.summary {
        RatingSummary::Mean(mean) => {
            out.push_str(&format!("\nAverage Popularity Score: {:.2}\n", mean));
        }
        RatingSummary::NoValidRatings => {
            out.push_str("\nNo valid popularity ratings to average.\n");
        }
    }

    match &report.stats {
        Ok(stats) => {
            out.push_str("\nCompany Stats:\n");
            for (label, value) in stats.fields() {
                out.push_str(&format!("{}: {}\n", label, value));
            }
        }
        Err(message) => {
            out.push_str(&format!("\nCould not fetch company stats: {}\n", message));
        }
    }

    out
}
