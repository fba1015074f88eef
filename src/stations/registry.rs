//! The set of stations a client is allowed to query.

use crate::error::PrecipitationError;
use crate::types::layout::ReportLayout;
use crate::types::station::{LocationInfo, Station};
use std::collections::{BTreeMap, HashSet};

/// Stations served by default: Hakodate observatory and three AMeDAS points
/// around it, all in the Oshima region (`prec_no` 23).
pub fn builtin_stations() -> Vec<Station> {
    vec![
        Station::new("47430", "23", "函館", ReportLayout::Primary),
        Station::new("0147", "23", "川汲", ReportLayout::Auxiliary),
        Station::new("1462", "23", "高松", ReportLayout::Auxiliary),
        Station::new("1543", "23", "戸井泊", ReportLayout::Auxiliary),
    ]
}

/// Read-only lookup of [`Station`]s by id.
#[derive(Debug, Clone)]
pub struct StationRegistry {
    stations: Vec<Station>,
}

impl StationRegistry {
    /// Builds a registry, rejecting duplicate station ids.
    pub fn new(stations: Vec<Station>) -> Result<Self, PrecipitationError> {
        let mut seen = HashSet::new();
        for station in &stations {
            if !seen.insert(station.id.as_str()) {
                return Err(PrecipitationError::InvalidConfiguration(format!(
                    "duplicate station id '{}'",
                    station.id
                )));
            }
        }
        Ok(Self { stations })
    }

    pub fn find(&self, station_id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == station_id)
    }

    pub fn lookup(&self, station_id: &str) -> Result<&Station, PrecipitationError> {
        self.find(station_id)
            .ok_or_else(|| PrecipitationError::UnknownStation(station_id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Every station keyed by id, for the `locations` field of a report.
    pub fn locations(&self) -> BTreeMap<String, LocationInfo> {
        self.stations
            .iter()
            .map(|s| (s.id.clone(), s.location_info()))
            .collect()
    }
}

impl Default for StationRegistry {
    fn default() -> Self {
        Self {
            stations: builtin_stations(),
        }
    }
}
