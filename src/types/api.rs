//! The JSON shapes handed to the presentation layer.

use crate::error::PrecipitationError;
use crate::types::highlight::HighlightState;
use crate::types::station::{LocationInfo, Station};
use crate::types::window::AggregateResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of a precipitation query.
///
/// `labels` and `data` are parallel and chronological; `labels[i]` is the
/// `MM/DD` of `base_date - (29 - i)` days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationReport {
    pub location: String,
    pub base_date: NaiveDate,
    pub total_3_days: f64,
    pub total_30_days: f64,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub locations: BTreeMap<String, LocationInfo>,
}

impl PrecipitationReport {
    pub fn new(
        station: &Station,
        result: &AggregateResult,
        locations: BTreeMap<String, LocationInfo>,
    ) -> Self {
        Self {
            location: station.name.clone(),
            base_date: result.base_date,
            total_3_days: result.total_3_days,
            total_30_days: result.total_30_days,
            labels: result.series.labels(),
            data: result.series.amounts(),
            locations,
        }
    }

    pub fn highlight(&self) -> HighlightState {
        crate::types::highlight::classify(self.total_3_days, self.total_30_days)
    }
}

/// Body returned alongside a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&PrecipitationError> for ErrorBody {
    fn from(err: &PrecipitationError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
