use std::collections::BTreeMap;

/// Precipitation amounts (mm) of a single month, keyed by day of month.
///
/// The mapping is partial: days whose report row could not be read are absent,
/// not zero. Absence is resolved to `0.0` only when a window is aggregated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyPrecipitation {
    days: BTreeMap<u32, f64>,
}

impl DailyPrecipitation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the amount for `day`, replacing any earlier value for the same day.
    pub fn insert(&mut self, day: u32, amount_mm: f64) {
        self.days.insert(day, amount_mm);
    }

    pub fn get(&self, day: u32) -> Option<f64> {
        self.days.get(&day).copied()
    }

    /// The amount for `day`, or `0.0` when the day has no record.
    pub fn amount_or_zero(&self, day: u32) -> f64 {
        self.get(day).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<(u32, f64)> for DailyPrecipitation {
    fn from_iter<T: IntoIterator<Item = (u32, f64)>>(iter: T) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}
