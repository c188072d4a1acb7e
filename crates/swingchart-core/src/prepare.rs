// File: crates/swingchart-core/src/prepare.rs
// Summary: Date normalization and ordering of raw quotes before charting.

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{ChartError, ChartResult};
use crate::series::TimeSeriesPoint;

/// Accepted date layouts, tried in order.
pub const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

pub fn parse_date(value: &str) -> ChartResult<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .ok_or_else(|| ChartError::InvalidDate(value.to_string()))
}

/// Rewrite every date as `YYYY-MM-DD`, drop undated or unparseable rows and
/// sort ascending. Rows sharing a date keep their input order.
pub fn normalize_quotes(quotes: Vec<TimeSeriesPoint>) -> Vec<TimeSeriesPoint> {
    let mut dated: Vec<(NaiveDate, TimeSeriesPoint)> = Vec::with_capacity(quotes.len());
    for mut quote in quotes {
        if quote.date.trim().is_empty() {
            warn!("dropping quote without a date");
            continue;
        }
        match parse_date(&quote.date) {
            Ok(day) => {
                quote.date = day.format("%Y-%m-%d").to_string();
                dated.push((day, quote));
            }
            Err(err) => warn!(%err, "dropping quote"),
        }
    }
    dated.sort_by_key(|(day, _)| *day);
    dated.into_iter().map(|(_, q)| q).collect()
}
