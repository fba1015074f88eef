//! Classification of rolling precipitation totals against the fixed drought thresholds.

use crate::constants::{THRESHOLD_30_DAYS_MM, THRESHOLD_3_DAYS_MM};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the rolling totals are at or below their threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightState {
    /// Both totals exceed their thresholds.
    None,
    /// Only the 3-day total is at or below 3 mm.
    Below3Day,
    /// Only the 30-day total is at or below 30 mm.
    Below30Day,
    /// Both totals are at or below their thresholds.
    BelowBoth,
}

impl HighlightState {
    /// The presentation class used to highlight the summary box.
    /// Empty for [`HighlightState::None`].
    pub fn css_class(&self) -> &'static str {
        match self {
            HighlightState::None => "",
            HighlightState::Below3Day => "highlight-3",
            HighlightState::Below30Day => "highlight-30",
            HighlightState::BelowBoth => "highlight-both",
        }
    }
}

impl fmt::Display for HighlightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HighlightState::None => "none",
            HighlightState::Below3Day => "below_3_day",
            HighlightState::Below30Day => "below_30_day",
            HighlightState::BelowBoth => "below_both",
        };
        write!(f, "{}", name)
    }
}

/// Maps a pair of rolling totals to a [`HighlightState`]. Both thresholds are inclusive.
///
/// # Examples
///
/// ```
/// use jma_rainfall::{classify, HighlightState};
///
/// assert_eq!(classify(3.0, 30.0), HighlightState::BelowBoth);
/// assert_eq!(classify(10.0, 40.0), HighlightState::None);
/// ```
pub fn classify(total_3_days: f64, total_30_days: f64) -> HighlightState {
    let dry_3 = total_3_days <= THRESHOLD_3_DAYS_MM;
    let dry_30 = total_30_days <= THRESHOLD_30_DAYS_MM;
    match (dry_3, dry_30) {
        (true, true) => HighlightState::BelowBoth,
        (true, false) => HighlightState::Below3Day,
        (false, true) => HighlightState::Below30Day,
        (false, false) => HighlightState::None,
    }
}
