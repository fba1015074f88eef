//! Retrieval of raw report pages from the JMA `stats/etrn` service.

use crate::report::error::ReportError;
use crate::types::layout::ReportLayout;
use async_trait::async_trait;
use encoding_rs::SHIFT_JIS;
use log::{debug, warn};
use reqwest::Client;

/// Anything able to produce the decoded HTML of one month's daily report.
///
/// Implementations perform at most one upstream request per call and must not
/// cache or retry; memoization belongs to [`crate::MonthlyCache`].
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch_report_page(
        &self,
        region_code: &str,
        station_id: &str,
        year: i32,
        month: u32,
        layout: ReportLayout,
    ) -> Result<String, ReportError>;
}

/// [`ReportSource`] backed by HTTP requests to the JMA website.
pub struct JmaReportSource {
    base_url: String,
    client: Client,
}

impl JmaReportSource {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Builds the URL of a daily report page. The month is not zero-padded.
    pub fn report_url(
        &self,
        region_code: &str,
        station_id: &str,
        year: i32,
        month: u32,
        layout: ReportLayout,
    ) -> String {
        format!(
            "{}/stats/etrn/view/daily_{}.php?prec_no={}&block_no={}&year={:04}&month={}&day=&view=",
            self.base_url,
            layout.path_segment(),
            region_code,
            station_id,
            year,
            month
        )
    }
}

#[async_trait]
impl ReportSource for JmaReportSource {
    async fn fetch_report_page(
        &self,
        region_code: &str,
        station_id: &str,
        year: i32,
        month: u32,
        layout: ReportLayout,
    ) -> Result<String, ReportError> {
        let url = self.report_url(region_code, station_id, year, month, layout);
        debug!("Requesting report page {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ReportError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ReportError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    ReportError::NetworkRequest(url, e)
                });
            }
        };

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ReportError::Body(url.clone(), e))?;
        if bytes.is_empty() {
            return Err(ReportError::EmptyBody(url));
        }
        debug!("Received {} bytes from {}", bytes.len(), url);
        Ok(decode_report(&bytes))
    }
}

/// Decodes a report body from Shift_JIS. Malformed sequences become U+FFFD.
pub fn decode_report(bytes: &[u8]) -> String {
    let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(bytes);
    if had_errors {
        warn!("Report body contained byte sequences invalid in Shift_JIS");
    }
    text.into_owned()
}
