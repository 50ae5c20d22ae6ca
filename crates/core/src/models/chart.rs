use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single chart-ready data point: parsed date and numeric NAV.
///
/// The core produces these sorted ascending by date — the frontend just
/// draws the line. An unparseable NAV string comes through as `NaN`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavChartPoint {
    pub date: NaiveDate,
    pub nav: f64,
}

/// Day-over-day movement of the latest NAV against the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavPerformance {
    /// Absolute change, latest minus previous.
    pub change: f64,

    /// Change as a percentage of the previous NAV.
    pub change_percent: f64,

    /// True when the change is zero or positive.
    pub is_positive: bool,
}
