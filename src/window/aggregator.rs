//! Builds the 30-day trailing precipitation window for one station.

use crate::constants::WINDOW_DAYS;
use crate::report::monthly_cache::MonthlyCache;
use crate::report::source::ReportSource;
use crate::types::station::Station;
use crate::types::window::{AggregateResult, DailyAmount, WindowSeries};
use chrono::{Datelike, Days, NaiveDate};
use futures_util::future::join_all;
use log::info;

/// Resolves the daily amounts of the `WINDOW_DAYS` days ending at `base_date`.
///
/// Every day's month is requested from a fresh [`MonthlyCache`] before any is
/// awaited, so the (at most two) distinct months are fetched concurrently and
/// exactly once each. Days missing from a report, and all days of a month that
/// could not be fetched, count as `0.0`.
///
/// # Panics
///
/// Panics if the window would start before [`NaiveDate::MIN`].
pub async fn aggregate(
    source: &dyn ReportSource,
    station: &Station,
    base_date: NaiveDate,
) -> AggregateResult {
    let mut cache = MonthlyCache::new(source, station);

    let newest_first: Vec<NaiveDate> = (0..WINDOW_DAYS as u64)
        .map(|offset| base_date - Days::new(offset))
        .collect();
    let pending: Vec<_> = newest_first
        .iter()
        .map(|day| cache.month(day.year(), day.month()))
        .collect();
    let months = join_all(pending).await;

    let mut days: Vec<DailyAmount> = newest_first
        .iter()
        .zip(months)
        .map(|(date, month)| DailyAmount {
            date: *date,
            amount: month.amount_or_zero(date.day()),
        })
        .collect();
    days.reverse();

    let result = AggregateResult::from_series(base_date, WindowSeries::new(days));
    info!(
        "Aggregated {} days for station {} ending {} from {} month report(s): 3-day {:.1} mm, 30-day {:.1} mm",
        result.series.len(),
        station.id,
        base_date,
        cache.fetch_count(),
        result.total_3_days,
        result.total_30_days
    );
    result
}
