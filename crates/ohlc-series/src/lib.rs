// File: crates/ohlc-series/src/lib.rs
// Summary: Core library entry point; exports the OHLC series model, its fluent builder and defaults.

pub mod aggregate;
pub mod builder;
pub mod config;
pub mod series;
pub mod stroke;
pub mod types;

pub use aggregate::{AggregateTemplate, OhlcAggregates, SeriesAggregate};
pub use builder::{ChartHighlightBuilder, ChartLineBuilder, OhlcSeriesBuilder};
pub use config::{ConfigError, HighlightDefaults, SeriesDefaults};
pub use series::{ChartBorder, ChartHighlight, ChartLine, ChartStroke, OhlcRecord, OhlcSeries};
pub use stroke::StrokeStyle;
pub use types::{AggregateFunction, DashType, SERIES_TYPE};
