// File: crates/swingchart-core/src/series.rs
// Summary: Per-period market record, interval tag and indicator keys.
// Notes:
// - Field names on the wire follow the upstream quote payload (`Date`, `Close`,
//   `volume_ma25`, ...). Every numeric field is optional and `null` decodes
//   to `None`; gaps are never encoded as zero or NaN.
// - Numeric fields also accept numeric strings. Unparseable values become
//   `None` for that field only; the rest of the row is kept.

use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ChartResult;

/// Aggregation granularity of a period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Interval::Daily => "daily",
            Interval::Weekly => "weekly",
            Interval::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Interval::Daily),
            "weekly" => Ok(Interval::Weekly),
            "monthly" => Ok(Interval::Monthly),
            other => Err(format!("unknown interval {other:?} (expected daily, weekly or monthly)")),
        }
    }
}

/// One traded period.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Code", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "Open", default, deserialize_with = "lenient_f64")]
    pub open: Option<f64>,
    #[serde(rename = "High", default, deserialize_with = "lenient_f64")]
    pub high: Option<f64>,
    #[serde(rename = "Low", default, deserialize_with = "lenient_f64")]
    pub low: Option<f64>,
    #[serde(rename = "Close", default, deserialize_with = "lenient_f64")]
    pub close: Option<f64>,
    #[serde(rename = "Volume", default, deserialize_with = "lenient_f64")]
    pub volume: Option<f64>,
    #[serde(rename = "TurnoverValue", default, deserialize_with = "lenient_f64")]
    pub turnover_value: Option<f64>,
    #[serde(default)]
    pub interval: Interval,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ma5: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ma25: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ma75: Option<f64>,
    #[serde(rename = "volume_ma25", default, deserialize_with = "lenient_f64")]
    pub volume_ma25: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Number, numeric string or null. Anything else, and non-finite values, decode to `None`.
fn lenient_f64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    let value = match Option::<NumberLike>::deserialize(de)? {
        Some(NumberLike::Number(v)) => Some(v),
        Some(NumberLike::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(NumberLike::Other(_)) | None => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

impl TimeSeriesPoint {
    /// Point with only a date and a close; convenient for building fixtures.
    pub fn with_close(date: impl Into<String>, close: f64) -> Self {
        Self { date: date.into(), close: Some(close), ..Self::default() }
    }

    pub fn indicator(&self, key: Indicator) -> Option<f64> {
        match key {
            Indicator::Ma5 => self.ma5,
            Indicator::Ma25 => self.ma25,
            Indicator::Ma75 => self.ma75,
        }
    }
}

/// The three fixed moving-average overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Ma5,
    Ma25,
    Ma75,
}

impl Indicator {
    pub const ALL: [Indicator; 3] = [Indicator::Ma5, Indicator::Ma25, Indicator::Ma75];

    pub const fn label(&self) -> &'static str {
        match self {
            Indicator::Ma5 => "MA5",
            Indicator::Ma25 => "MA25",
            Indicator::Ma75 => "MA75",
        }
    }
}

/// Decode the ordered JSON array produced by the quote endpoint.
pub fn parse_series(json: &str) -> ChartResult<Vec<TimeSeriesPoint>> {
    Ok(serde_json::from_str(json)?)
}

/// Decode from any reader (file, socket buffer).
pub fn read_series<R: std::io::Read>(reader: R) -> ChartResult<Vec<TimeSeriesPoint>> {
    Ok(serde_json::from_reader(reader)?)
}
