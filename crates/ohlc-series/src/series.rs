// File: crates/ohlc-series/src/series.rs
// Summary: OHLC series model: bound member names, stroke sub-objects, spacing and aggregate.
// Notes:
// - The model is plain storage. Every field is independently settable and no
//   cross-field validation happens here; the builder is the intended writer.

use serde::Serialize;

use crate::aggregate::SeriesAggregate;
use crate::stroke::StrokeStyle;
use crate::types::{DashType, SERIES_TYPE};

/// Stroke of a series line or point border.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartStroke {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_type: Option<DashType>,
}

impl ChartStroke {
    /// Overwrite the parts present in `style`, keep the rest.
    pub fn apply(&mut self, style: StrokeStyle) {
        if let Some(width) = style.width { self.width = Some(width); }
        if let Some(color) = style.color { self.color = Some(color); }
        if let Some(dash_type) = style.dash_type { self.dash_type = Some(dash_type); }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.width.is_none() && self.dash_type.is_none()
    }
}

/// Line drawn between the open/close ticks and the high/low range.
pub type ChartLine = ChartStroke;
/// Border around each OHLC point.
pub type ChartBorder = ChartStroke;

/// Appearance of a point while it is hovered.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartHighlight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "ChartStroke::is_empty")]
    pub line: ChartLine,
    #[serde(skip_serializing_if = "ChartStroke::is_empty")]
    pub border: ChartBorder,
}

impl ChartHighlight {
    pub fn is_empty(&self) -> bool {
        self.visible.is_none() && self.opacity.is_none() && self.line.is_empty() && self.border.is_empty()
    }
}

/// Record type an OHLC series can be bound to.
///
/// Implementors name the members that supply each value; the names are passed
/// through to the client untouched.
pub trait OhlcRecord {
    const OPEN: &'static str;
    const HIGH: &'static str;
    const LOW: &'static str;
    const CLOSE: &'static str;
    const COLOR: Option<&'static str> = None;
    const NOTE_TEXT: Option<&'static str> = None;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OhlcSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "openField", skip_serializing_if = "Option::is_none")]
    pub open_member: Option<String>,
    #[serde(rename = "highField", skip_serializing_if = "Option::is_none")]
    pub high_member: Option<String>,
    #[serde(rename = "lowField", skip_serializing_if = "Option::is_none")]
    pub low_member: Option<String>,
    #[serde(rename = "closeField", skip_serializing_if = "Option::is_none")]
    pub close_member: Option<String>,
    #[serde(rename = "colorField", skip_serializing_if = "Option::is_none")]
    pub color_member: Option<String>,
    #[serde(rename = "noteTextField", skip_serializing_if = "Option::is_none")]
    pub note_text_member: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_in_legend: Option<bool>,
    #[serde(skip_serializing_if = "ChartStroke::is_empty")]
    pub line: ChartLine,
    #[serde(skip_serializing_if = "ChartStroke::is_empty")]
    pub border: ChartBorder,
    #[serde(skip_serializing_if = "ChartHighlight::is_empty")]
    pub highlight: ChartHighlight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<SeriesAggregate>,
}

impl OhlcSeries {
    pub fn new() -> Self { Self::default() }

    /// Create a series whose member names come from `R`.
    pub fn for_record<R: OhlcRecord>() -> Self {
        Self {
            open_member: Some(R::OPEN.to_string()),
            high_member: Some(R::HIGH.to_string()),
            low_member: Some(R::LOW.to_string()),
            close_member: Some(R::CLOSE.to_string()),
            color_member: R::COLOR.map(str::to_string),
            note_text_member: R::NOTE_TEXT.map(str::to_string),
            ..Self::default()
        }
    }

    /// Client options object read by the renderer; unset options are omitted.
    pub fn options(&self) -> serde_json::Result<serde_json::Value> {
        let mut options = serde_json::to_value(self)?;
        if let serde_json::Value::Object(map) = &mut options {
            map.insert("type".to_string(), SERIES_TYPE.into());
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Quote;

    impl OhlcRecord for Quote {
        const OPEN: &'static str = "Open";
        const HIGH: &'static str = "High";
        const LOW: &'static str = "Low";
        const CLOSE: &'static str = "Close";
        const NOTE_TEXT: Option<&'static str> = Some("NoteText");
    }

    #[test]
    fn for_record_copies_member_names() {
        let s = OhlcSeries::for_record::<Quote>();
        assert_eq!(s.open_member.as_deref(), Some("Open"));
        assert_eq!(s.high_member.as_deref(), Some("High"));
        assert_eq!(s.low_member.as_deref(), Some("Low"));
        assert_eq!(s.close_member.as_deref(), Some("Close"));
        assert_eq!(s.color_member, None);
        assert_eq!(s.note_text_member.as_deref(), Some("NoteText"));
    }

    #[test]
    fn apply_keeps_parts_missing_from_style() {
        let mut line = ChartLine { color: Some("blue".into()), width: Some(3.0), dash_type: Some(DashType::Dash) };
        line.apply(StrokeStyle::new().with_width(1.0));
        assert_eq!(line.width, Some(1.0));
        assert_eq!(line.color.as_deref(), Some("blue"));
        assert_eq!(line.dash_type, Some(DashType::Dash));
    }

    #[test]
    fn line_and_border_apply_styles_alike() {
        let mut series = OhlcSeries::new();
        let style = StrokeStyle::new().with_width(2.0).with_dash_type(DashType::Dot);
        series.line.apply(style.clone());
        series.border.apply(style);
        assert_eq!(series.line, series.border);
        assert!(series.line.color.is_none());
    }

    #[test]
    fn new_series_has_empty_sub_objects() {
        let s = OhlcSeries::new();
        assert!(s.line.is_empty());
        assert!(s.border.is_empty());
        assert!(s.highlight.is_empty());
        assert!(s.aggregate.is_none());
    }
}
