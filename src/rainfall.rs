//! This module provides the main entry point of the crate: a client that answers
//! precipitation queries for the stations in its registry by fetching and
//! aggregating JMA daily reports.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_STATION_ID};
use crate::error::PrecipitationError;
use crate::report::source::{JmaReportSource, ReportSource};
use crate::stations::registry::{builtin_stations, StationRegistry};
use crate::types::api::PrecipitationReport;
use crate::types::station::Station;
use crate::types::window::AggregateResult;
use crate::window::aggregator;
use crate::window::base_date::{resolve_base_date, today_in_japan};
use bon::bon;
use chrono::NaiveDate;
use log::warn;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(20);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// The client for rolling precipitation queries.
///
/// Each query owns its own month cache, so nothing fetched for one query is
/// reused by another and a single client can serve concurrent queries.
///
/// # Examples
///
/// ```no_run
/// # use jma_rainfall::{JmaRainfall, PrecipitationError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), PrecipitationError> {
/// let client = JmaRainfall::builder().build()?;
/// let report = client
///     .precipitation()
///     .date("2024-03-05")
///     .station("0147")
///     .call()
///     .await?;
/// println!("{}: {:.1} mm over 30 days", report.location, report.total_30_days);
/// # Ok(())
/// # }
/// ```
pub struct JmaRainfall {
    source: Arc<dyn ReportSource>,
    registry: StationRegistry,
    default_station: String,
    request_timeout: Duration,
    today: Option<NaiveDate>,
}

#[bon]
impl JmaRainfall {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `.stations(Vec<Station>)`: Optional. Replaces the built-in station list.
    /// * `.default_station(String)`: Optional. Station used when a query names none. Defaults to `"47430"`.
    /// * `.base_url(String)`: Optional. Host of the report pages. Defaults to `https://www.data.jma.go.jp`.
    /// * `.http_timeout(Duration)`: Optional. Timeout of each report request. Defaults to 20 s.
    /// * `.request_timeout(Duration)`: Optional. Timeout of a whole query. Defaults to 60 s.
    /// * `.user_agent(String)`: Optional. Defaults to `jma_rainfall/<version>`.
    /// * `.report_source(Arc<dyn ReportSource>)`: Optional. Replaces the HTTP fetcher; `base_url`,
    ///   `http_timeout` and `user_agent` are then ignored.
    /// * `.today(NaiveDate)`: Optional. Fixes the date used for the "yesterday" fallback.
    ///   Defaults to the current date in Japan.
    ///
    /// # Errors
    ///
    /// Returns [`PrecipitationError::InvalidConfiguration`] for duplicate station ids or a
    /// default station missing from the list, and [`PrecipitationError::HttpClient`] if the
    /// HTTP client cannot be built.
    #[builder]
    pub fn new(
        stations: Option<Vec<Station>>,
        #[builder(into)] default_station: Option<String>,
        #[builder(into)] base_url: Option<String>,
        http_timeout: Option<Duration>,
        request_timeout: Option<Duration>,
        #[builder(into)] user_agent: Option<String>,
        report_source: Option<Arc<dyn ReportSource>>,
        today: Option<NaiveDate>,
    ) -> Result<Self, PrecipitationError> {
        let registry = StationRegistry::new(stations.unwrap_or_else(builtin_stations))?;
        if registry.is_empty() {
            return Err(PrecipitationError::InvalidConfiguration(
                "station list is empty".to_string(),
            ));
        }
        let default_station = default_station.unwrap_or_else(|| DEFAULT_STATION_ID.to_string());
        if registry.find(&default_station).is_none() {
            return Err(PrecipitationError::InvalidConfiguration(format!(
                "default station '{}' is not in the station list",
                default_station
            )));
        }

        let source: Arc<dyn ReportSource> = match report_source {
            Some(source) => source,
            None => {
                let client = reqwest::Client::builder()
                    .timeout(http_timeout.unwrap_or(DEFAULT_HTTP_TIMEOUT))
                    .user_agent(user_agent.unwrap_or_else(|| {
                        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                    }))
                    .build()
                    .map_err(PrecipitationError::HttpClient)?;
                Arc::new(JmaReportSource::new(
                    client,
                    base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
                ))
            }
        };

        Ok(Self {
            source,
            registry,
            default_station,
            request_timeout: request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            today,
        })
    }

    /// Answers a precipitation query.
    ///
    /// # Arguments
    ///
    /// * `.date(&str)`: Optional. Base date as `YYYY-MM-DD`. A missing or malformed date
    ///   falls back to yesterday instead of failing.
    /// * `.station(&str)`: Optional. Station id; defaults to the client's default station.
    ///
    /// # Errors
    ///
    /// Returns [`PrecipitationError::UnknownStation`] if the station is not registered and
    /// [`PrecipitationError::Timeout`] if the query exceeds the request timeout. Upstream
    /// failures are not errors: the affected days read as `0.0`.
    #[builder]
    pub async fn precipitation(
        &self,
        date: Option<&str>,
        station: Option<&str>,
    ) -> Result<PrecipitationReport, PrecipitationError> {
        let station = self
            .registry
            .lookup(station.unwrap_or(&self.default_station))?;
        let base_date = resolve_base_date(date, self.today());
        let result = self.aggregate_station(station, base_date).await?;
        Ok(PrecipitationReport::new(
            station,
            &result,
            self.registry.locations(),
        ))
    }

    /// Aggregates the 30-day window ending at `base_date` for a registered station.
    pub async fn aggregate(
        &self,
        station_id: &str,
        base_date: NaiveDate,
    ) -> Result<AggregateResult, PrecipitationError> {
        let station = self.registry.lookup(station_id)?;
        self.aggregate_station(station, base_date).await
    }

    pub fn stations(&self) -> &StationRegistry {
        &self.registry
    }

    pub fn default_station(&self) -> &str {
        &self.default_station
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(today_in_japan)
    }

    async fn aggregate_station(
        &self,
        station: &Station,
        base_date: NaiveDate,
    ) -> Result<AggregateResult, PrecipitationError> {
        tokio::time::timeout(
            self.request_timeout,
            aggregator::aggregate(self.source.as_ref(), station, base_date),
        )
        .await
        .map_err(|_| {
            warn!(
                "Query for station {} ending {} timed out after {:?}",
                station.id, base_date, self.request_timeout
            );
            PrecipitationError::Timeout(self.request_timeout)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::error::ReportError;
    use crate::report::fake::FakeReportSource;
    use crate::types::api::ErrorBody;
    use crate::{HighlightState, ReportLayout};
    use async_trait::async_trait;

    fn client_with(source: Arc<FakeReportSource>) -> Result<JmaRainfall, PrecipitationError> {
        JmaRainfall::builder()
            .report_source(source)
            .today(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap())
            .build()
    }

    #[tokio::test]
    async fn test_precipitation_report_end_to_end() -> Result<(), PrecipitationError> {
        let source = Arc::new(FakeReportSource::uniform("1.0"));
        let client = client_with(source.clone())?;

        let report = client
            .precipitation()
            .date("2024-03-05")
            .station("47430")
            .call()
            .await?;

        assert_eq!(report.location, "函館");
        assert_eq!(report.base_date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(report.labels.len(), 30);
        assert_eq!(report.data.len(), 30);
        assert_eq!(report.labels[0], "02/05");
        assert_eq!(report.labels[29], "03/05");
        assert_eq!(report.total_3_days, 3.0);
        assert_eq!(report.total_30_days, 30.0);
        assert_eq!(report.highlight(), HighlightState::BelowBoth);
        assert_eq!(report.locations.len(), 4);
        assert_eq!(source.calls(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_report_json_shape() -> Result<(), Box<dyn std::error::Error>> {
        let client = client_with(Arc::new(FakeReportSource::uniform("0.5")))?;
        let report = client.precipitation().date("2024-03-05").call().await?;
        let json = serde_json::to_value(&report)?;

        assert_eq!(json["location"], "函館");
        assert_eq!(json["base_date"], "2024-03-05");
        assert_eq!(json["total_3_days"], 1.5);
        assert_eq!(json["total_30_days"], 15.0);
        assert_eq!(json["labels"][0], "02/05");
        assert_eq!(json["data"][29], 0.5);
        assert_eq!(json["locations"]["0147"]["regionCode"], "23");
        assert_eq!(json["locations"]["0147"]["layout"], "a1");
        assert_eq!(json["locations"]["47430"]["name"], "函館");
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_date_uses_yesterday() -> Result<(), PrecipitationError> {
        let client = client_with(Arc::new(FakeReportSource::uniform("0.0")))?;
        let report = client
            .precipitation()
            .date("not-a-date")
            .station("0147")
            .call()
            .await?;
        assert_eq!(report.base_date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(report.location, "川汲");
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_station_is_rejected_before_fetching() -> Result<(), PrecipitationError> {
        let source = Arc::new(FakeReportSource::uniform("1.0"));
        let client = client_with(source.clone())?;

        let err = client
            .precipitation()
            .station("99999")
            .call()
            .await
            .unwrap_err();

        assert!(matches!(err, PrecipitationError::UnknownStation(_)));
        assert!(err.status().is_client_error());
        assert_eq!(
            ErrorBody::from(&err),
            ErrorBody {
                error: "Invalid location block_no: 99999".to_string()
            }
        );
        assert_eq!(source.calls(), 0);
        Ok(())
    }

    #[test]
    fn test_default_station_must_be_registered() {
        let result = JmaRainfall::builder()
            .stations(vec![Station::new("1462", "23", "高松", ReportLayout::Auxiliary)])
            .build();
        assert!(matches!(
            result,
            Err(PrecipitationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_empty_station_list_is_rejected() {
        let result = JmaRainfall::builder().stations(Vec::new()).build();
        assert!(matches!(
            result,
            Err(PrecipitationError::InvalidConfiguration(ref msg)) if msg.contains("empty")
        ));
    }

    #[tokio::test]
    async fn test_custom_station_list() -> Result<(), PrecipitationError> {
        let source = Arc::new(FakeReportSource::uniform("4.0"));
        let client = JmaRainfall::builder()
            .stations(vec![Station::new("47412", "14", "札幌", ReportLayout::Primary)])
            .default_station("47412")
            .report_source(source)
            .build()?;

        let result = client
            .aggregate("47412", NaiveDate::from_ymd_opt(2024, 8, 31).unwrap())
            .await?;
        assert_eq!(result.total_30_days, 120.0);
        assert_eq!(result.highlight(), HighlightState::None);
        assert!(client.aggregate("47430", result.base_date).await.is_err());
        assert_eq!(client.default_station(), "47412");
        assert_eq!(client.stations().len(), 1);
        assert_eq!(
            client.stations().iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["札幌"]
        );
        Ok(())
    }

    struct StalledSource;

    #[async_trait]
    impl ReportSource for StalledSource {
        async fn fetch_report_page(
            &self,
            _region_code: &str,
            _station_id: &str,
            _year: i32,
            _month: u32,
            _layout: ReportLayout,
        ) -> Result<String, ReportError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(String::new())
        }
    }

    #[tokio::test]
    async fn test_query_timeout_discards_partial_results() -> Result<(), PrecipitationError> {
        let client = JmaRainfall::builder()
            .report_source(Arc::new(StalledSource))
            .request_timeout(Duration::from_millis(50))
            .build()?;

        let err = client.precipitation().call().await.unwrap_err();
        assert!(matches!(err, PrecipitationError::Timeout(_)));
        assert_eq!(err.status(), reqwest::StatusCode::GATEWAY_TIMEOUT);
        Ok(())
    }
}
