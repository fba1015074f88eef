use crate::types::station::Station;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Identity of one month's report page for one station.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
    pub region_code: String,
    pub station_id: String,
}

impl MonthKey {
    pub fn new(year: i32, month: u32, station: &Station) -> Self {
        Self {
            year,
            month,
            region_code: station.region_code.clone(),
            station_id: station.id.clone(),
        }
    }
}

/// Matches the cache key format `{year}-{month}-{region}-{station}`, without padding.
impl Display for MonthKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.year, self.month, self.region_code, self.station_id
        )
    }
}
