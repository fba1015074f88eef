//! Defines the data structures representing JMA observation stations and the
//! summary form of them that is returned to presentation consumers.

use crate::types::layout::ReportLayout;
use serde::{Deserialize, Serialize};

/// A single JMA observation point.
///
/// A station is identified upstream by the pair of its region code (`prec_no`)
/// and its own identifier (`block_no`). The layout decides which report page is
/// requested and where the precipitation column sits in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// The JMA block number (e.g., "47430" for Hakodate).
    pub id: String,
    /// The JMA prefecture/region number (`prec_no`) the station belongs to.
    pub region_code: String,
    /// Display name, as shown by the upstream service.
    pub name: String,
    /// Which report table layout the station publishes.
    pub layout: ReportLayout,
}

impl Station {
    pub fn new(
        id: impl Into<String>,
        region_code: impl Into<String>,
        name: impl Into<String>,
        layout: ReportLayout,
    ) -> Self {
        Self {
            id: id.into(),
            region_code: region_code.into(),
            name: name.into(),
            layout,
        }
    }

    /// The station without its id, in the shape used by the `locations` map of a report.
    pub fn location_info(&self) -> LocationInfo {
        LocationInfo {
            name: self.name.clone(),
            region_code: self.region_code.clone(),
            layout: self.layout,
        }
    }
}

/// Station metadata keyed by id in [`crate::PrecipitationReport::locations`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    pub name: String,
    pub region_code: String,
    pub layout: ReportLayout,
}
