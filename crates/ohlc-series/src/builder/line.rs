// File: crates/ohlc-series/src/builder/line.rs
// Summary: Sub-builder borrowing a series line for the duration of a configurator callback.

use crate::series::ChartLine;
use crate::stroke::StrokeStyle;
use crate::types::DashType;

pub struct ChartLineBuilder<'a> {
    line: &'a mut ChartLine,
}

impl<'a> ChartLineBuilder<'a> {
    pub fn new(line: &'a mut ChartLine) -> Self {
        Self { line }
    }

    pub fn width(&mut self, width: f64) -> &mut Self {
        self.line.width = Some(width);
        self
    }

    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.line.color = Some(color.into());
        self
    }

    pub fn dash_type(&mut self, dash_type: DashType) -> &mut Self {
        self.line.dash_type = Some(dash_type);
        self
    }

    /// Apply a partial style; parts it leaves out stay as they are.
    pub fn style(&mut self, style: impl Into<StrokeStyle>) -> &mut Self {
        self.line.apply(style.into());
        self
    }
}
