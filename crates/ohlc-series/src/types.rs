// File: crates/ohlc-series/src/types.rs
// Summary: Shared enums (dash styles, aggregate functions) and the series type tag.

use serde::{Deserialize, Serialize};

/// Series type tag emitted in the client options.
pub const SERIES_TYPE: &str = "ohlc";

/// Dash pattern used when stroking a line or border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DashType {
    Solid,
    Dot,
    Dash,
    LongDash,
    DashDot,
    LongDashDot,
    LongDashDotDot,
}

impl DashType {
    /// Client-side name of the dash pattern.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DashType::Solid => "solid",
            DashType::Dot => "dot",
            DashType::Dash => "dash",
            DashType::LongDash => "longDash",
            DashType::DashDot => "dashDot",
            DashType::LongDashDot => "longDashDot",
            DashType::LongDashDotDot => "longDashDotDot",
        }
    }
}

/// Function used to collapse several data points into one category value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AggregateFunction {
    Max,
    Min,
    Sum,
    SumOrNull,
    Count,
    #[serde(rename = "avg", alias = "average")]
    Average,
    First,
    Last,
}

impl AggregateFunction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AggregateFunction::Max => "max",
            AggregateFunction::Min => "min",
            AggregateFunction::Sum => "sum",
            AggregateFunction::SumOrNull => "sumOrNull",
            AggregateFunction::Count => "count",
            AggregateFunction::Average => "avg",
            AggregateFunction::First => "first",
            AggregateFunction::Last => "last",
        }
    }
}
