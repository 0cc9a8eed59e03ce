//! Declarative definition files.
//!
//! A definition file is the JSON counterpart of a built-in plugin: the same
//! four record kinds, loadable at startup without any Rust code. Example:
//!
//! ```json
//! {
//!     "metrics": {
//!         "latency": { "title": "Latency", "unit": "s", "color": "#e0a000" }
//!     },
//!     "graphs": {
//!         "latency": { "title": "Latency", "metrics": [["latency", "line"]] }
//!     }
//! }
//! ```

use crate::core::{MetricsRegistry, RegistryError};
use crate::types::{GraphDefinition, MetricDefinition, PerfometerDefinition, UnitDefinition};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Definitions declared in a JSON file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefinitionFile {
    #[serde(default)]
    pub units: BTreeMap<String, UnitDefinition>,
    #[serde(default)]
    pub metrics: BTreeMap<String, MetricDefinition>,
    #[serde(default)]
    pub graphs: BTreeMap<String, GraphDefinition>,
    #[serde(default)]
    pub perfometers: Vec<PerfometerDefinition>,
}

impl DefinitionFile {
    /// Load a definition file from disk
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read definition file {}", path.display()))?;
        let file = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse definition file {}", path.display()))?;
        Ok(file)
    }

    /// Register everything this file declares.
    ///
    /// Units first, then metrics, graphs, and perfometers, so a file can
    /// reference its own units/metrics regardless of JSON key order.
    pub fn apply(&self, registry: &mut MetricsRegistry) -> Result<(), RegistryError> {
        for (key, unit) in &self.units {
            registry.register_unit(key, unit.clone())?;
        }
        for (key, metric) in &self.metrics {
            registry.register_metric(key, metric.clone())?;
        }
        for (key, graph) in &self.graphs {
            registry.register_graph(key, graph.clone())?;
        }
        for perfometer in &self.perfometers {
            registry.push_perfometer(perfometer.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "units": {
            "Mbits/s": {
                "title": "MBits per second",
                "symbol": "Mbits/s",
                "render": {
                    "strategy": "physical_precision",
                    "digits": 2,
                    "base_symbol": "Mbit/s"
                }
            }
        },
        "metrics": {
            "download": { "title": "Download", "unit": "Mbits/s", "color": "#00e060" },
            "upload": { "title": "Upload", "unit": "Mbits/s", "color": "#0080e0" }
        },
        "graphs": {
            "bandwidth": {
                "title": "Bandwidth",
                "metrics": [["download", "area"], ["upload", "-area"]]
            }
        },
        "perfometers": [
            {
                "type": "stacked",
                "perfometers": [
                    { "type": "linear", "segments": ["download"], "total": 20.0 },
                    { "type": "linear", "segments": ["upload"], "total": 5.0 }
                ]
            }
        ]
    }"##;

    #[test]
    fn test_parse_and_apply() {
        let file: DefinitionFile = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(file.metrics.len(), 2);

        let mut registry = MetricsRegistry::new();
        file.apply(&mut registry).unwrap();
        assert!(registry.validate().is_ok());

        let graph = registry.graph("bandwidth").unwrap();
        assert_eq!(graph.metrics[1].style.to_string(), "-area");
        assert_eq!(registry.perfometers().len(), 1);
    }

    #[test]
    fn test_apply_twice_is_idempotent() {
        let file: DefinitionFile = serde_json::from_str(SAMPLE).unwrap();
        let mut registry = MetricsRegistry::new();
        file.apply(&mut registry).unwrap();
        file.apply(&mut registry).unwrap();

        assert_eq!(registry.list_metrics().len(), 2);
        assert_eq!(registry.perfometers().len(), 1);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let file: DefinitionFile = serde_json::from_str("{}").unwrap();
        assert!(file.units.is_empty());
        assert!(file.perfometers.is_empty());
    }
}
