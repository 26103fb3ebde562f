// File: crates/demo/src/main.rs
// Summary: Demo applies optional TOML defaults, configures an OHLC series and prints its client options as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use ohlc_series::{
    AggregateFunction, DashType, OhlcAggregates, OhlcRecord, OhlcSeries, OhlcSeriesBuilder, SeriesDefaults,
};
use tracing::info;

/// Shape of the rows the chart is bound to on the client.
struct Quote;

impl OhlcRecord for Quote {
    const OPEN: &'static str = "open";
    const HIGH: &'static str = "high";
    const LOW: &'static str = "low";
    const CLOSE: &'static str = "close";
    const NOTE_TEXT: Option<&'static str> = Some("note");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Defaults file is optional; without one the series starts empty.
    let defaults = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            let defaults = SeriesDefaults::load(&path)
                .with_context(|| format!("failed to load series defaults '{}'", path.display()))?;
            info!(path = %path.display(), "using series defaults");
            defaults
        }
        None => SeriesDefaults::default(),
    };

    let mut series = OhlcSeries::for_record::<Quote>();
    OhlcSeriesBuilder::new(&mut series)
        .defaults(&defaults)
        .name("CRV/USDT 6h")
        .color_field("color")
        .gap(1.2)
        .line_with(|l| {
            l.width(1.0).dash_type(DashType::Solid);
        })
        .highlight(|h| {
            h.visible(true).line((2.0, "#ffcc00"));
        })
        .aggregate(
            OhlcAggregates::new(AggregateFunction::First)
                .close(AggregateFunction::Last)
                .color(AggregateFunction::First),
        );

    let options = series.options().context("failed to build series options")?;
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
