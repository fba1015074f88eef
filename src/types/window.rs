//! Result types of the 30-day window aggregation.

use crate::constants::SHORT_WINDOW_DAYS;
use crate::types::highlight::{classify, HighlightState};
use chrono::NaiveDate;
use serde::Serialize;

/// The precipitation resolved for one calendar day of the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyAmount {
    pub date: NaiveDate,
    /// Millimeters. `0.0` both for a dry day and for a day without data.
    pub amount: f64,
}

impl DailyAmount {
    /// `MM/DD`, zero-padded. The year is dropped, so labels repeat across year
    /// boundaries; pair them with [`DailyAmount::date`] when that matters.
    pub fn label(&self) -> String {
        self.date.format("%m/%d").to_string()
    }
}

/// Daily amounts in chronological order, ending at the base date inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WindowSeries(Vec<DailyAmount>);

impl WindowSeries {
    pub fn new(days: Vec<DailyAmount>) -> Self {
        Self(days)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyAmount> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[DailyAmount] {
        &self.0
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(DailyAmount::label).collect()
    }

    pub fn amounts(&self) -> Vec<f64> {
        self.0.iter().map(|d| d.amount).collect()
    }

    /// Sum of the `days` most recent entries (all entries if fewer).
    pub fn trailing_sum(&self, days: usize) -> f64 {
        let start = self.0.len().saturating_sub(days);
        self.0[start..].iter().map(|d| d.amount).sum()
    }

    pub fn total(&self) -> f64 {
        self.0.iter().map(|d| d.amount).sum()
    }
}

impl<'a> IntoIterator for &'a WindowSeries {
    type Item = &'a DailyAmount;
    type IntoIter = std::slice::Iter<'a, DailyAmount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The outcome of aggregating one station's window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub base_date: NaiveDate,
    /// Sum of the last 3 entries of `series` (base date included).
    pub total_3_days: f64,
    /// Sum of every entry of `series`.
    pub total_30_days: f64,
    pub series: WindowSeries,
}

impl AggregateResult {
    /// Derives both totals from a chronological series.
    pub fn from_series(base_date: NaiveDate, series: WindowSeries) -> Self {
        Self {
            base_date,
            total_3_days: series.trailing_sum(SHORT_WINDOW_DAYS),
            total_30_days: series.total(),
            series,
        }
    }

    pub fn highlight(&self) -> HighlightState {
        classify(self.total_3_days, self.total_30_days)
    }
}
