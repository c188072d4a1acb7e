// File: crates/swingchart-core/src/tooltip.rs
// Summary: Hover tooltip payload and its text formatting.

use serde::Serialize;

use crate::filter::ChartPoint;
use crate::series::{Indicator, Interval};
use crate::types::DisplayOptions;

/// Shown in place of a missing value. Never a numeric default.
pub const NO_VALUE: &str = "-";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Price,
    Volume,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TooltipField {
    pub label: &'static str,
    pub value: Option<f64>,
    pub kind: FieldKind,
}

impl TooltipField {
    fn price(label: &'static str, value: Option<f64>) -> Self {
        Self { label, value, kind: FieldKind::Price }
    }

    fn volume(label: &'static str, value: Option<f64>) -> Self {
        Self { label, value, kind: FieldKind::Volume }
    }

    pub fn display_value(&self) -> String {
        match (self.value, self.kind) {
            (None, _) => NO_VALUE.to_string(),
            (Some(v), FieldKind::Price) => format_grouped(v, 2),
            (Some(v), FieldKind::Volume) => format_grouped(v, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
    pub index: usize,
    pub date: String,
    pub interval: Interval,
    pub fields: Vec<TooltipField>,
}

impl Tooltip {
    /// Fields: OHLC, volume, each enabled moving average, then volume MA25
    /// when the volume panel is shown.
    pub fn for_point(index: usize, p: &ChartPoint<'_>, options: &DisplayOptions) -> Self {
        let point = p.point;
        let mut fields = vec![
            TooltipField::price("Open", point.open),
            TooltipField::price("High", point.high),
            TooltipField::price("Low", point.low),
            TooltipField::price("Close", point.close),
            TooltipField::volume("Volume", point.volume),
        ];
        for key in options.enabled_indicators() {
            fields.push(TooltipField::price(key.label(), point.indicator(key)));
        }
        if options.show_volume {
            fields.push(TooltipField::volume("Volume MA25", point.volume_ma25));
        }
        Self { index, date: point.date.clone(), interval: point.interval, fields }
    }

    pub fn field(&self, label: &str) -> Option<&TooltipField> {
        self.fields.iter().find(|f| f.label == label)
    }

    pub fn indicator(&self, key: Indicator) -> Option<&TooltipField> {
        self.field(key.label())
    }

    /// Header line followed by `label: value` rows.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.fields.len() + 1);
        out.push(format!("{} ({})", self.date, self.interval));
        out.extend(self.fields.iter().map(|f| format!("{}: {}", f.label, f.display_value())));
        out
    }
}

/// Fixed decimals with `,` thousands separators.
pub fn format_grouped(v: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(raw.len() + digits.len() / 3 + 1);
    if v < 0.0 && raw.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*d as char);
    }
    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }
    grouped
}
