//! Typed errors for registration and cross-registry validation.

use thiserror::Error;

/// Errors raised while registering definitions or validating references
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("unit {key:?} is already registered with a different definition")]
    UnitConflict { key: String },

    #[error("metric {key:?} is already registered with a different definition")]
    MetricConflict { key: String },

    #[error("graph {key:?} is already registered with a different definition")]
    GraphConflict { key: String },

    #[error("metric {metric:?} references unknown unit {unit:?}")]
    UnknownUnit { metric: String, unit: String },

    #[error("graph {graph:?} references unknown metric {metric:?}")]
    UnknownMetric { graph: String, metric: String },

    #[error("graph {graph:?} has no metrics")]
    EmptyGraph { graph: String },

    #[error("perfometer #{index} references unknown metric {metric:?}")]
    UnknownSegment { index: usize, metric: String },

    #[error("perfometer #{index} has no segments")]
    EmptySegments { index: usize },

    #[error("perfometer #{index} nests a stacked gauge inside a stacked gauge")]
    NestedStack { index: usize },
}
