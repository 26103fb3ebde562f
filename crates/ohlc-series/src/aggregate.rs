// File: crates/ohlc-series/src/aggregate.rs
// Summary: Series aggregate strategy: per-field functions, a named client handler, or an inline template.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::types::AggregateFunction;

/// Aggregate functions for each bound OHLC member. Unset members are left
/// to the client's own defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OhlcAggregates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<AggregateFunction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<AggregateFunction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<AggregateFunction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<AggregateFunction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<AggregateFunction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_text: Option<AggregateFunction>,
}

impl OhlcAggregates {
    /// Only `open` set.
    pub fn new(open: AggregateFunction) -> Self {
        Self { open: Some(open), ..Self::default() }
    }

    pub fn open(mut self, f: AggregateFunction) -> Self { self.open = Some(f); self }
    pub fn high(mut self, f: AggregateFunction) -> Self { self.high = Some(f); self }
    pub fn low(mut self, f: AggregateFunction) -> Self { self.low = Some(f); self }
    pub fn close(mut self, f: AggregateFunction) -> Self { self.close = Some(f); self }
    pub fn color(mut self, f: AggregateFunction) -> Self { self.color = Some(f); self }
    pub fn note_text(mut self, f: AggregateFunction) -> Self { self.note_text = Some(f); self }
}

type TemplateFn = dyn Fn() -> String + Send + Sync;

/// Inline aggregate function. Produces the client-side function body when the
/// options are emitted. Clones share the same closure.
#[derive(Clone)]
pub struct AggregateTemplate(Arc<TemplateFn>);

impl AggregateTemplate {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn render(&self) -> String { (self.0)() }

    /// True when both handles point at the same closure.
    pub fn ptr_eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.0, &other.0) }
}

impl PartialEq for AggregateTemplate {
    fn eq(&self, other: &Self) -> bool { self.ptr_eq(other) }
}

impl fmt::Debug for AggregateTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AggregateTemplate(..)")
    }
}

/// How a category's points are reduced to one value. Exactly one
/// representation is active; assigning a new one replaces the old.
#[derive(Clone, Debug, PartialEq)]
pub enum SeriesAggregate {
    Fields(OhlcAggregates),
    Handler(String),
    Template(AggregateTemplate),
}

impl SeriesAggregate {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            SeriesAggregate::Fields(_) => "fields",
            SeriesAggregate::Handler(_) => "handler",
            SeriesAggregate::Template(_) => "template",
        }
    }

    pub fn fields(&self) -> Option<&OhlcAggregates> {
        match self { SeriesAggregate::Fields(f) => Some(f), _ => None }
    }

    pub fn handler_name(&self) -> Option<&str> {
        match self { SeriesAggregate::Handler(name) => Some(name), _ => None }
    }

    pub fn template(&self) -> Option<&AggregateTemplate> {
        match self { SeriesAggregate::Template(t) => Some(t), _ => None }
    }
}

impl From<AggregateFunction> for SeriesAggregate {
    fn from(open: AggregateFunction) -> Self { SeriesAggregate::Fields(OhlcAggregates::new(open)) }
}

impl From<OhlcAggregates> for SeriesAggregate {
    fn from(fields: OhlcAggregates) -> Self { SeriesAggregate::Fields(fields) }
}

impl From<&str> for SeriesAggregate {
    fn from(handler: &str) -> Self { SeriesAggregate::Handler(handler.to_string()) }
}

impl From<String> for SeriesAggregate {
    fn from(handler: String) -> Self { SeriesAggregate::Handler(handler) }
}

impl From<AggregateTemplate> for SeriesAggregate {
    fn from(template: AggregateTemplate) -> Self { SeriesAggregate::Template(template) }
}

impl Serialize for SeriesAggregate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SeriesAggregate::Fields(fields) => fields.serialize(serializer),
            SeriesAggregate::Handler(name) => serializer.serialize_str(name),
            SeriesAggregate::Template(template) => serializer.serialize_str(&template.render()),
        }
    }
}
