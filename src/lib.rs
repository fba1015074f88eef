mod constants;
mod error;
mod rainfall;
mod report;
mod stations;
mod types;
mod window;

pub use error::PrecipitationError;
pub use rainfall::*;

pub use constants::{
    DEFAULT_BASE_URL, DEFAULT_STATION_ID, THRESHOLD_30_DAYS_MM, THRESHOLD_3_DAYS_MM, WINDOW_DAYS,
};

pub use stations::registry::{builtin_stations, StationRegistry};

pub use types::api::{ErrorBody, PrecipitationReport};
pub use types::daily_precipitation::DailyPrecipitation;
pub use types::highlight::{classify, HighlightState};
pub use types::layout::{LayoutConfig, ReportLayout};
pub use types::month_key::MonthKey;
pub use types::station::{LocationInfo, Station};
pub use types::window::{AggregateResult, DailyAmount, WindowSeries};

pub use report::error::ReportError;
pub use report::monthly_cache::{MonthlyCache, PendingMonth};
pub use report::parser::parse_month;
pub use report::source::{decode_report, JmaReportSource, ReportSource};

pub use window::aggregator::aggregate;
pub use window::base_date::{resolve_base_date, today_in_japan};
