//! Graph definitions: ordered compositions of metrics drawn as area,
//! line, or stacked charts.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How a single metric is drawn inside a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleKind {
    #[default]
    Area,
    Line,
    Stack,
}

/// Rendering style for one metric in a graph.
///
/// The string form matches the definition files: `area`, `line`, `stack`,
/// with a leading `-` (e.g. `-area`) for metrics mirrored below the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphStyle {
    pub kind: StyleKind,
    /// Drawn downward from the axis (upload under download, etc.)
    pub mirrored: bool,
}

impl GraphStyle {
    pub const fn area() -> Self {
        Self {
            kind: StyleKind::Area,
            mirrored: false,
        }
    }

    pub const fn line() -> Self {
        Self {
            kind: StyleKind::Line,
            mirrored: false,
        }
    }

    pub const fn stack() -> Self {
        Self {
            kind: StyleKind::Stack,
            mirrored: false,
        }
    }

    pub const fn mirrored(mut self) -> Self {
        self.mirrored = true;
        self
    }
}

/// Error returned when a style string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid graph style {0:?}, expected [-]area, [-]line or [-]stack")]
pub struct StyleParseError(pub String);

impl FromStr for GraphStyle {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mirrored, kind_str) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let kind = match kind_str {
            "area" => StyleKind::Area,
            "line" => StyleKind::Line,
            "stack" => StyleKind::Stack,
            _ => return Err(StyleParseError(s.to_string())),
        };
        Ok(Self { kind, mirrored })
    }
}

impl fmt::Display for GraphStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mirrored {
            f.write_str("-")?;
        }
        f.write_str(match self.kind {
            StyleKind::Area => "area",
            StyleKind::Line => "line",
            StyleKind::Stack => "stack",
        })
    }
}

impl Serialize for GraphStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GraphStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// One metric entry in a graph: the metric key plus its rendering style.
///
/// Serialized as a `["metric", "style"]` pair, the shape definition files
/// use.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphMetric {
    pub metric: String,
    pub style: GraphStyle,
}

impl GraphMetric {
    pub fn new(metric: &str, style: GraphStyle) -> Self {
        Self {
            metric: metric.to_string(),
            style,
        }
    }
}

impl Serialize for GraphMetric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.metric, &self.style).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GraphMetric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (metric, style) = <(String, GraphStyle)>::deserialize(deserializer)?;
        Ok(Self { metric, style })
    }
}

/// An ordered composition of metrics rendered as one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDefinition {
    /// Human-readable name, e.g. "Bandwidth"
    pub title: String,
    /// Metrics in paint order; each key must resolve in the metric registry
    pub metrics: Vec<GraphMetric>,
}
