use crate::report::parser::parse_month;
use crate::report::source::ReportSource;
use crate::types::daily_precipitation::DailyPrecipitation;
use crate::types::month_key::MonthKey;
use crate::types::station::Station;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use log::{debug, trace, warn};
use std::collections::{hash_map::Entry, HashMap};
use std::sync::Arc;

/// A month's records, possibly still being fetched. Clones resolve to the same value.
pub type PendingMonth<'a> = Shared<BoxFuture<'a, Arc<DailyPrecipitation>>>;

/// Per-request memo of parsed month reports for a single station.
///
/// The first lookup of a month stores a shared pending future in the map before
/// anything is awaited, so concurrent lookups of the same month all wait on one
/// upstream request. Entries live as long as the cache; there is no eviction.
pub struct MonthlyCache<'a> {
    source: &'a dyn ReportSource,
    station: &'a Station,
    entries: HashMap<MonthKey, PendingMonth<'a>>,
}

impl<'a> MonthlyCache<'a> {
    pub fn new(source: &'a dyn ReportSource, station: &'a Station) -> Self {
        Self {
            source,
            station,
            entries: HashMap::new(),
        }
    }

    /// Returns the (possibly pending) records of a month, starting the fetch on first use.
    pub fn month(&mut self, year: i32, month: u32) -> PendingMonth<'a> {
        let key = MonthKey::new(year, month, self.station);
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                trace!("Cache hit for {}", entry.key());
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                debug!("Cache miss for {}", entry.key());
                let pending = load_month(self.source, self.station, entry.key().clone())
                    .boxed()
                    .shared();
                entry.insert(pending.clone());
                pending
            }
        }
    }

    pub async fn get_month(&mut self, year: i32, month: u32) -> Arc<DailyPrecipitation> {
        self.month(year, month).await
    }

    /// Number of distinct months requested so far, which is also the number of fetches.
    pub fn fetch_count(&self) -> usize {
        self.entries.len()
    }
}

async fn load_month(
    source: &dyn ReportSource,
    station: &Station,
    key: MonthKey,
) -> Arc<DailyPrecipitation> {
    let page = source
        .fetch_report_page(
            &key.region_code,
            &key.station_id,
            key.year,
            key.month,
            station.layout,
        )
        .await;
    match page {
        Ok(html) => {
            let records = parse_month(&html, station.layout);
            debug!("Parsed {} daily records for {}", records.len(), key);
            Arc::new(records)
        }
        Err(e) => {
            warn!("No data for {}, treating month as empty: {}", key, e);
            Arc::new(DailyPrecipitation::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fake::FakeReportSource;
    use crate::ReportLayout;
    use futures_util::future::join_all;

    fn hakodate() -> Station {
        Station::new("47430", "23", "函館", ReportLayout::Primary)
    }

    #[tokio::test]
    async fn test_repeat_lookup_does_not_refetch() {
        let source = FakeReportSource::uniform("2.5");
        let station = hakodate();
        let mut cache = MonthlyCache::new(&source, &station);

        let first = cache.get_month(2024, 2).await;
        let second = cache.get_month(2024, 2).await;

        assert_eq!(source.calls(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.get(10), Some(2.5));
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_lookups_coalesce() {
        let source = FakeReportSource::uniform("1.0");
        let station = hakodate();
        let mut cache = MonthlyCache::new(&source, &station);

        // Ninety interleaved lookups over two months, all issued before any resolves.
        let pending: Vec<_> = (0..90)
            .map(|i| if i % 2 == 0 { (2024, 2) } else { (2024, 3) })
            .map(|(year, month)| cache.month(year, month))
            .collect();
        let months = join_all(pending).await;

        assert_eq!(months.len(), 90);
        assert_eq!(source.calls(), 2);
        assert_eq!(cache.fetch_count(), 2);
        let mut requested = source.requested();
        requested.sort();
        assert_eq!(requested, vec![(2024, 2), (2024, 3)]);
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty_month() {
        let source = FakeReportSource::uniform("1.0").failing_for(2024, 1);
        let station = hakodate();
        let mut cache = MonthlyCache::new(&source, &station);

        let failed = cache.get_month(2024, 1).await;
        let again = cache.get_month(2024, 1).await;

        assert!(failed.is_empty());
        assert!(again.is_empty());
        assert_eq!(source.calls(), 1, "failures are cached too");
    }
}
