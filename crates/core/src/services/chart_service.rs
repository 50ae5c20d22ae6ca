use chrono::NaiveDate;

use crate::models::chart::{NavChartPoint, NavPerformance};
use crate::models::fund::NavEntry;

/// The NAV history wire format uses day-first dates.
const NAV_DATE_FORMAT: &str = "%d-%m-%Y";

/// Pure transforms from raw NAV history entries to chart-ready data.
///
/// The core computes, the frontend renders: these functions never touch
/// the network and hold no state.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Build the chart series: parse dates and NAVs, sort ascending by
    /// date regardless of input order.
    ///
    /// An entry whose NAV fails to parse stays in the series with
    /// `nav = NaN` (the renderer skips the point); an entry whose date
    /// fails to parse is dropped, since it cannot be placed on the axis.
    #[must_use]
    pub fn nav_series(&self, entries: &[NavEntry]) -> Vec<NavChartPoint> {
        let mut points: Vec<NavChartPoint> = entries
            .iter()
            .filter_map(|entry| {
                let date = parse_nav_date(&entry.date)?;
                let nav = entry.nav.trim().parse::<f64>().unwrap_or(f64::NAN);
                Some(NavChartPoint { date, nav })
            })
            .collect();

        points.sort_by_key(|p| p.date);
        points
    }

    /// The most recent NAV entry: head of the series after a descending
    /// sort by date. `None` when the series is empty.
    #[must_use]
    pub fn current_nav<'a>(&self, entries: &'a [NavEntry]) -> Option<&'a NavEntry> {
        entries
            .iter()
            .filter(|e| parse_nav_date(&e.date).is_some())
            .max_by_key(|e| parse_nav_date(&e.date))
    }

    /// Day-over-day movement between the two most recent entries.
    /// `None` when fewer than two entries parse to usable numbers.
    #[must_use]
    pub fn performance(&self, entries: &[NavEntry]) -> Option<NavPerformance> {
        let mut dated: Vec<(NaiveDate, f64)> = entries
            .iter()
            .filter_map(|e| {
                let date = parse_nav_date(&e.date)?;
                let nav = e.nav.trim().parse::<f64>().ok()?;
                Some((date, nav))
            })
            .collect();

        if dated.len() < 2 {
            return None;
        }
        dated.sort_by_key(|(date, _)| std::cmp::Reverse(*date));

        let latest = dated[0].1;
        let previous = dated[1].1;
        if previous == 0.0 {
            return None;
        }

        let change = latest - previous;
        Some(NavPerformance {
            change,
            change_percent: (change / previous) * 100.0,
            is_positive: change >= 0.0,
        })
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

// Day-first per the wire format, with an ISO fallback since some payloads
// carry YYYY-MM-DD.
fn parse_nav_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, NAV_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}
