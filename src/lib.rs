//! bandgauge: typed metric, graph, and perfometer definitions for
//! monitoring dashboards.
//!
//! This library provides:
//! - Pure data types for units, metrics, graphs, and perfometer gauges
//! - A process-wide registry populated once at startup and validated for
//!   dangling cross-references
//! - SI-prefix value rendering for display and graph axis labels
//! - Built-in plugins (bandwidth) and declarative JSON definition files

pub mod config;
pub mod core;
pub mod plugins;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use config::DefinitionFile;
pub use core::{MetricsPlugin, MetricsRegistry, RegistryError};
pub use types::{
    Color, GraphDefinition, GraphMetric, GraphStyle, MetricDefinition, PerfometerDefinition,
    UnitDefinition, UnitRender,
};
