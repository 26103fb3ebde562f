// File: crates/ohlc-series/src/builder/mod.rs
// Summary: Fluent builder that configures an OhlcSeries in place.
// Notes:
// - Every method mutates the borrowed series and returns the same builder, so
//   calls chain. Nothing here can fail; the last write to a field wins.

mod highlight;
mod line;

pub use highlight::ChartHighlightBuilder;
pub use line::ChartLineBuilder;

use tracing::{debug, trace};

use crate::aggregate::SeriesAggregate;
use crate::config::SeriesDefaults;
use crate::series::OhlcSeries;
use crate::stroke::StrokeStyle;

pub struct OhlcSeriesBuilder<'a> {
    series: &'a mut OhlcSeries,
}

impl<'a> OhlcSeriesBuilder<'a> {
    pub fn new(series: &'a mut OhlcSeries) -> Self {
        Self { series }
    }

    /// The series as configured so far.
    pub fn series(&self) -> &OhlcSeries { &*self.series }

    /// Set the aggregate strategy. Accepts an `AggregateFunction` (applied to
    /// `open` only), full `OhlcAggregates`, a client handler name, or an
    /// `AggregateTemplate`. Any previously set representation is replaced.
    pub fn aggregate(&mut self, aggregate: impl Into<SeriesAggregate>) -> &mut Self {
        let next = aggregate.into();
        if let Some(previous) = &self.series.aggregate {
            if std::mem::discriminant(previous) != std::mem::discriminant(&next) {
                debug!(previous = previous.kind(), next = next.kind(), "replacing series aggregate");
            }
        }
        self.series.aggregate = Some(next);
        self
    }

    pub fn gap(&mut self, gap: f64) -> &mut Self {
        self.series.gap = Some(gap);
        self
    }

    pub fn spacing(&mut self, spacing: f64) -> &mut Self {
        self.series.spacing = Some(spacing);
        self
    }

    /// Style the point border: `width`, `(width, color)` or
    /// `(width, color, dash_type)`. Omitted parts keep their value.
    pub fn border(&mut self, style: impl Into<StrokeStyle>) -> &mut Self {
        self.series.border.apply(style.into());
        self
    }

    /// Style the series line; same partial-update rules as [`Self::border`].
    pub fn line(&mut self, style: impl Into<StrokeStyle>) -> &mut Self {
        self.series.line.apply(style.into());
        self
    }

    /// Configure the line through a sub-builder. The callback runs immediately.
    pub fn line_with<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ChartLineBuilder<'_>),
    {
        trace!("configuring series line");
        configure(&mut ChartLineBuilder::new(&mut self.series.line));
        self
    }

    /// Configure the hover highlight through a sub-builder. The callback runs immediately.
    pub fn highlight<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ChartHighlightBuilder<'_>),
    {
        trace!("configuring series highlight");
        configure(&mut ChartHighlightBuilder::new(&mut self.series.highlight));
        self
    }

    pub fn open_field(&mut self, member: impl Into<String>) -> &mut Self {
        self.series.open_member = Some(member.into());
        self
    }

    pub fn high_field(&mut self, member: impl Into<String>) -> &mut Self {
        self.series.high_member = Some(member.into());
        self
    }

    pub fn low_field(&mut self, member: impl Into<String>) -> &mut Self {
        self.series.low_member = Some(member.into());
        self
    }

    pub fn close_field(&mut self, member: impl Into<String>) -> &mut Self {
        self.series.close_member = Some(member.into());
        self
    }

    pub fn color_field(&mut self, member: impl Into<String>) -> &mut Self {
        self.series.color_member = Some(member.into());
        self
    }

    pub fn note_text_field(&mut self, member: impl Into<String>) -> &mut Self {
        self.series.note_text_member = Some(member.into());
        self
    }

    /// Bind all four OHLC members at once, in open/high/low/close order.
    pub fn fields(
        &mut self,
        open: impl Into<String>,
        high: impl Into<String>,
        low: impl Into<String>,
        close: impl Into<String>,
    ) -> &mut Self {
        self.open_field(open).high_field(high).low_field(low).close_field(close)
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.series.name = Some(name.into());
        self
    }

    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.series.color = Some(color.into());
        self
    }

    pub fn opacity(&mut self, opacity: f64) -> &mut Self {
        self.series.opacity = Some(opacity);
        self
    }

    /// Name of the value axis the series is plotted on.
    pub fn axis(&mut self, axis: impl Into<String>) -> &mut Self {
        self.series.axis = Some(axis.into());
        self
    }

    pub fn visible(&mut self, visible: bool) -> &mut Self {
        self.series.visible = Some(visible);
        self
    }

    pub fn visible_in_legend(&mut self, visible: bool) -> &mut Self {
        self.series.visible_in_legend = Some(visible);
        self
    }

    /// Apply every value present in `defaults`. Values already on the series
    /// are overwritten only where the defaults set them.
    pub fn defaults(&mut self, defaults: &SeriesDefaults) -> &mut Self {
        if let Some(gap) = defaults.gap { self.gap(gap); }
        if let Some(spacing) = defaults.spacing { self.spacing(spacing); }
        if let Some(color) = &defaults.color { self.color(color.as_str()); }
        if let Some(opacity) = defaults.opacity { self.opacity(opacity); }
        self.line(defaults.line.clone()).border(defaults.border.clone());

        let highlight = &defaults.highlight;
        self.highlight(|h| {
            if let Some(visible) = highlight.visible { h.visible(visible); }
            if let Some(opacity) = highlight.opacity { h.opacity(opacity); }
            h.line(highlight.line.clone()).border(highlight.border.clone());
        })
    }
}
