//! In-memory [`ReportSource`] used by unit tests.

use crate::report::error::ReportError;
use crate::report::source::ReportSource;
use crate::types::layout::ReportLayout;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Serves a generated report for every month, with the same amount on every day,
/// and counts how often each month is requested.
pub(crate) struct FakeReportSource {
    amount: String,
    failing_months: HashSet<(i32, u32)>,
    calls: AtomicUsize,
    requested: Mutex<Vec<(i32, u32)>>,
}

impl FakeReportSource {
    pub(crate) fn uniform(amount: &str) -> Self {
        Self {
            amount: amount.to_string(),
            failing_months: HashSet::new(),
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing_for(mut self, year: i32, month: u32) -> Self {
        self.failing_months.insert((year, month));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requested(&self) -> Vec<(i32, u32)> {
        self.requested.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// A report page in the given layout with days 1 to 31.
    pub(crate) fn page(layout: ReportLayout, amount: &str) -> String {
        let mut rows = String::new();
        for _ in 0..4 {
            rows.push_str("<tr><th>h</th><th>h</th><th>h</th><th>h</th></tr>");
        }
        for day in 1..=31 {
            let cells = match layout {
                ReportLayout::Primary => format!("<td>1010.0</td><td>1012.0</td><td>{}</td>", amount),
                ReportLayout::Auxiliary => format!("<td>{}</td><td>0.0</td><td>0.0</td>", amount),
            };
            rows.push_str(&format!("<tr><td><a href=\"#\">{}</a></td>{}</tr>", day, cells));
        }
        format!("<html><body><table id=\"tablefix1\">{}</table></body></html>", rows)
    }
}

#[async_trait]
impl ReportSource for FakeReportSource {
    async fn fetch_report_page(
        &self,
        _region_code: &str,
        station_id: &str,
        year: i32,
        month: u32,
        layout: ReportLayout,
    ) -> Result<String, ReportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requested) = self.requested.lock() {
            requested.push((year, month));
        }
        // Give other pending lookups a chance to run while this one is in flight.
        tokio::task::yield_now().await;
        if self.failing_months.contains(&(year, month)) {
            return Err(ReportError::EmptyBody(format!("{}/{}-{}", station_id, year, month)));
        }
        Ok(Self::page(layout, &self.amount))
    }
}
