//! Extraction of daily precipitation amounts from a decoded report page.

use crate::constants::{HEADER_ROWS, REPORT_TABLE_ID};
use crate::types::daily_precipitation::DailyPrecipitation;
use crate::types::layout::ReportLayout;
use log::{debug, trace};
use scraper::{ElementRef, Html, Selector};

/// Reads the daily table of one month's report.
///
/// Never fails: a page without the data table yields an empty mapping, and rows
/// whose day or amount cannot be read are skipped individually.
pub fn parse_month(html: &str, layout: ReportLayout) -> DailyPrecipitation {
    let mut month = DailyPrecipitation::new();

    let table_css = format!("table#{}", REPORT_TABLE_ID);
    let (Ok(table_selector), Ok(row_selector), Ok(cell_selector)) = (
        Selector::parse(&table_css),
        Selector::parse("tr"),
        Selector::parse("td"),
    ) else {
        return month;
    };

    let document = Html::parse_document(html);
    let Some(table) = document.select(&table_selector).next() else {
        debug!("Report page has no #{} table", REPORT_TABLE_ID);
        return month;
    };

    let column = layout.precipitation_column();
    for row in table.select(&row_selector).skip(HEADER_ROWS) {
        let cells: Vec<String> = row.select(&cell_selector).map(cell_text).collect();
        if cells.len() <= column {
            continue;
        }
        // Summary rows (上旬, 月, ...) have no numeric day.
        let Some(day) = parse_day(&cells[0]) else {
            continue;
        };
        match normalize_amount(&cells[column]) {
            Some(amount) => month.insert(day, amount),
            None => trace!("Skipping day {}: unreadable amount {:?}", day, cells[column]),
        }
    }

    month
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// A day cell must be a plain run of ASCII digits.
fn parse_day(text: &str) -> Option<u32> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Converts a precipitation cell to millimeters.
///
/// `--` (no measurable precipitation) reads as zero, trailing `)` and `]`
/// quality markers are dropped and an empty cell reads as zero. Anything else
/// that is not a finite, non-negative number is rejected.
pub(crate) fn normalize_amount(text: &str) -> Option<f64> {
    let replaced = text.trim().replacen("--", "0", 1);
    let stripped = replaced.trim_end_matches(&[')', ']'][..]).trim();
    if stripped.is_empty() {
        return Some(0.0);
    }
    stripped
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
}
