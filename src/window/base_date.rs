use crate::constants::JST_OFFSET_SECONDS;
use chrono::{FixedOffset, NaiveDate, Utc};
use log::debug;

/// Parses a `YYYY-MM-DD` base date, falling back to the day before `today`.
///
/// A missing or malformed date is not an error: the query silently uses
/// yesterday, the most recent day with a complete daily report.
pub fn resolve_base_date(input: Option<&str>, today: NaiveDate) -> NaiveDate {
    let yesterday = today.pred_opt().unwrap_or(today);
    match input.map(str::trim) {
        Some(text) => match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                debug!("Invalid base date {:?} ({}), using {}", text, e, yesterday);
                yesterday
            }
        },
        None => yesterday,
    }
}

/// The current calendar date in Japan Standard Time, the timezone of the reports.
pub fn today_in_japan() -> NaiveDate {
    let now = Utc::now();
    FixedOffset::east_opt(JST_OFFSET_SECONDS)
        .map(|jst| now.with_timezone(&jst).date_naive())
        .unwrap_or_else(|| now.date_naive())
}
