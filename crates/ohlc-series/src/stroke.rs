// File: crates/ohlc-series/src/stroke.rs
// Summary: Partial stroke style (width/color/dash) applied to lines and borders.

use serde::Deserialize;

use crate::types::DashType;

/// A partial stroke description. Only the parts that are `Some` are written
/// when the style is applied; everything else keeps its previous value.
///
/// Tuples convert into a style positionally, so `1.0`, `(1.0, "red")` and
/// `(1.0, "red", DashType::Dot)` are all accepted where a style is expected.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrokeStyle {
    pub width: Option<f64>,
    pub color: Option<String>,
    pub dash_type: Option<DashType>,
}

impl StrokeStyle {
    pub fn new() -> Self { Self::default() }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_dash_type(mut self, dash_type: DashType) -> Self {
        self.dash_type = Some(dash_type);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.color.is_none() && self.dash_type.is_none()
    }
}

impl From<f64> for StrokeStyle {
    fn from(width: f64) -> Self {
        Self::new().with_width(width)
    }
}

impl From<(f64, &str)> for StrokeStyle {
    fn from((width, color): (f64, &str)) -> Self {
        Self::new().with_width(width).with_color(color)
    }
}

impl From<(f64, String)> for StrokeStyle {
    fn from((width, color): (f64, String)) -> Self {
        Self::new().with_width(width).with_color(color)
    }
}

impl From<(f64, &str, DashType)> for StrokeStyle {
    fn from((width, color, dash_type): (f64, &str, DashType)) -> Self {
        Self::new().with_width(width).with_color(color).with_dash_type(dash_type)
    }
}

impl From<(f64, String, DashType)> for StrokeStyle {
    fn from((width, color, dash_type): (f64, String, DashType)) -> Self {
        Self::new().with_width(width).with_color(color).with_dash_type(dash_type)
    }
}
