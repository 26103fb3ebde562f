// File: crates/ohlc-series/src/builder/highlight.rs
// Summary: Sub-builder for the hover highlight of an OHLC series.

use tracing::trace;

use super::line::ChartLineBuilder;
use crate::series::ChartHighlight;
use crate::stroke::StrokeStyle;

pub struct ChartHighlightBuilder<'a> {
    highlight: &'a mut ChartHighlight,
}

impl<'a> ChartHighlightBuilder<'a> {
    pub fn new(highlight: &'a mut ChartHighlight) -> Self {
        Self { highlight }
    }

    pub fn visible(&mut self, visible: bool) -> &mut Self {
        self.highlight.visible = Some(visible);
        self
    }

    pub fn opacity(&mut self, opacity: f64) -> &mut Self {
        self.highlight.opacity = Some(opacity);
        self
    }

    pub fn line(&mut self, style: impl Into<StrokeStyle>) -> &mut Self {
        self.highlight.line.apply(style.into());
        self
    }

    pub fn line_with<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ChartLineBuilder<'_>),
    {
        trace!("configuring highlight line");
        configure(&mut ChartLineBuilder::new(&mut self.highlight.line));
        self
    }

    pub fn border(&mut self, style: impl Into<StrokeStyle>) -> &mut Self {
        self.highlight.border.apply(style.into());
        self
    }
}
