//! Fixed values of the upstream report format and of the drought flags.

/// Number of days in the rolling window, base date included.
pub const WINDOW_DAYS: usize = 30;

/// Number of most recent days summed into the short total.
pub const SHORT_WINDOW_DAYS: usize = 3;

/// Inclusive upper bound of the 3-day total that counts as dry.
pub const THRESHOLD_3_DAYS_MM: f64 = 3.0;

/// Inclusive upper bound of the 30-day total that counts as dry.
pub const THRESHOLD_30_DAYS_MM: f64 = 30.0;

/// Host serving the `stats/etrn` daily report pages.
pub const DEFAULT_BASE_URL: &str = "https://www.data.jma.go.jp";

/// Element id of the daily data table in a report page.
pub const REPORT_TABLE_ID: &str = "tablefix1";

/// Header and unit rows at the top of the data table.
pub const HEADER_ROWS: usize = 4;

/// Block number used when a query names no station (Hakodate).
pub const DEFAULT_STATION_ID: &str = "47430";

/// Timezone of the upstream service, in seconds east of UTC.
pub const JST_OFFSET_SECONDS: i32 = 9 * 3600;
