// File: crates/ohlc-series/tests/defaults.rs
// Purpose: Loading series defaults from TOML files and applying them through the builder.

use std::io::Write;

use ohlc_series::{ConfigError, DashType, OhlcSeries, OhlcSeriesBuilder, SeriesDefaults};

const DEFAULTS_TOML: &str = r##"
gap = 1.5
spacing = 0.3
color = "#3366cc"
opacity = 0.9

[line]
width = 1.0
color = "#333333"
dash_type = "solid"

[border]
width = 1.0

[highlight]
visible = true
opacity = 0.8

[highlight.line]
width = 2.0
"##;

fn write_defaults(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write defaults");
    file
}

#[test]
fn load_reads_all_sections() {
    let file = write_defaults(DEFAULTS_TOML);
    let defaults = SeriesDefaults::load(file.path()).expect("load defaults");
    assert_eq!(defaults.gap, Some(1.5));
    assert_eq!(defaults.spacing, Some(0.3));
    assert_eq!(defaults.color.as_deref(), Some("#3366cc"));
    assert_eq!(defaults.line.dash_type, Some(DashType::Solid));
    assert_eq!(defaults.border.width, Some(1.0));
    assert_eq!(defaults.highlight.visible, Some(true));
    assert_eq!(defaults.highlight.line.width, Some(2.0));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = SeriesDefaults::load(dir.path().join("nonexistent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read(_)));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let file = write_defaults("gap = [not toml");
    let err = SeriesDefaults::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_or_default_falls_back() {
    let dir = tempfile::tempdir().expect("temp dir");
    let defaults = SeriesDefaults::load_or_default(dir.path().join("nonexistent.toml"));
    assert_eq!(defaults, SeriesDefaults::default());
}

#[test]
fn defaults_populate_series() {
    let defaults = SeriesDefaults::from_toml_str(DEFAULTS_TOML).expect("parse defaults");
    let mut series = OhlcSeries::new();
    OhlcSeriesBuilder::new(&mut series).defaults(&defaults);

    assert_eq!(series.gap, Some(1.5));
    assert_eq!(series.spacing, Some(0.3));
    assert_eq!(series.color.as_deref(), Some("#3366cc"));
    assert_eq!(series.opacity, Some(0.9));
    assert_eq!(series.line.width, Some(1.0));
    assert_eq!(series.line.color.as_deref(), Some("#333333"));
    assert_eq!(series.line.dash_type, Some(DashType::Solid));
    assert_eq!(series.border.width, Some(1.0));
    assert_eq!(series.border.color, None);
    assert_eq!(series.highlight.visible, Some(true));
    assert_eq!(series.highlight.opacity, Some(0.8));
    assert_eq!(series.highlight.line.width, Some(2.0));
}

#[test]
fn call_site_configuration_overrides_defaults() {
    let defaults = SeriesDefaults::from_toml_str(DEFAULTS_TOML).expect("parse defaults");
    let mut series = OhlcSeries::new();
    OhlcSeriesBuilder::new(&mut series)
        .defaults(&defaults)
        .gap(0.5)
        .line((3.0, "red", DashType::Dot));
    assert_eq!(series.gap, Some(0.5));
    assert_eq!(series.spacing, Some(0.3));
    assert_eq!(series.line.width, Some(3.0));
    assert_eq!(series.line.color.as_deref(), Some("red"));
    assert_eq!(series.line.dash_type, Some(DashType::Dot));
}

#[test]
fn empty_defaults_keep_existing_values() {
    let mut series = OhlcSeries::new();
    OhlcSeriesBuilder::new(&mut series)
        .gap(2.0)
        .line((1.0, "red"))
        .defaults(&SeriesDefaults::default());
    assert_eq!(series.gap, Some(2.0));
    assert_eq!(series.line.width, Some(1.0));
    assert_eq!(series.line.color.as_deref(), Some("red"));
    assert!(series.highlight.is_empty());
}
