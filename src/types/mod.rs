//! Pure data types for metric, graph, and perfometer definitions.
//!
//! Everything in this module is serde-serializable and free of registry or
//! I/O concerns, so the same types back both built-in plugins and JSON
//! definition files.

pub mod color;
pub mod graph;
pub mod metric;
pub mod perfometer;
pub mod unit;

// Re-export commonly used types at the module root for convenience
pub use color::{Color, ColorParseError};
pub use graph::{GraphDefinition, GraphMetric, GraphStyle, StyleKind, StyleParseError};
pub use metric::MetricDefinition;
pub use perfometer::PerfometerDefinition;
pub use unit::{UnitDefinition, UnitRender};
