//! Registry for unit, metric, graph, and perfometer definitions.

use super::error::RegistryError;
use crate::types::{GraphDefinition, MetricDefinition, PerfometerDefinition, UnitDefinition};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// The four lookup structures a dashboard resolves definitions from.
///
/// Units, metrics, and graphs are keyed maps; perfometers are an ordered
/// list because their position is their identity (list order is paint
/// order). Populated once at startup, read-only afterwards.
#[derive(Debug, Default, Serialize)]
pub struct MetricsRegistry {
    units: HashMap<String, UnitDefinition>,
    metrics: HashMap<String, MetricDefinition>,
    graphs: HashMap<String, GraphDefinition>,
    perfometers: Vec<PerfometerDefinition>,
}

impl MetricsRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unit of measurement.
    ///
    /// Re-registering an identical definition is a no-op; a differing
    /// definition under the same key is rejected.
    pub fn register_unit(&mut self, key: &str, def: UnitDefinition) -> Result<(), RegistryError> {
        match self.units.get(key) {
            Some(existing) if *existing == def => {
                log::debug!("Unit {} already registered, skipping", key);
                Ok(())
            }
            Some(_) => Err(RegistryError::UnitConflict {
                key: key.to_string(),
            }),
            None => {
                self.units.insert(key.to_string(), def);
                Ok(())
            }
        }
    }

    /// Register a metric
    pub fn register_metric(
        &mut self,
        key: &str,
        def: MetricDefinition,
    ) -> Result<(), RegistryError> {
        match self.metrics.get(key) {
            Some(existing) if *existing == def => {
                log::debug!("Metric {} already registered, skipping", key);
                Ok(())
            }
            Some(_) => Err(RegistryError::MetricConflict {
                key: key.to_string(),
            }),
            None => {
                self.metrics.insert(key.to_string(), def);
                Ok(())
            }
        }
    }

    /// Register a graph
    pub fn register_graph(
        &mut self,
        key: &str,
        def: GraphDefinition,
    ) -> Result<(), RegistryError> {
        match self.graphs.get(key) {
            Some(existing) if *existing == def => {
                log::debug!("Graph {} already registered, skipping", key);
                Ok(())
            }
            Some(_) => Err(RegistryError::GraphConflict {
                key: key.to_string(),
            }),
            None => {
                self.graphs.insert(key.to_string(), def);
                Ok(())
            }
        }
    }

    /// Append a perfometer.
    ///
    /// An exact duplicate of an already-appended gauge is skipped so
    /// registration stays idempotent; order of first appearance is kept.
    pub fn push_perfometer(&mut self, def: PerfometerDefinition) {
        if self.perfometers.contains(&def) {
            log::debug!("Perfometer already registered, skipping");
            return;
        }
        self.perfometers.push(def);
    }

    /// Look up a unit by key
    pub fn unit(&self, key: &str) -> Option<&UnitDefinition> {
        self.units.get(key)
    }

    /// Look up a metric by key
    pub fn metric(&self, key: &str) -> Option<&MetricDefinition> {
        self.metrics.get(key)
    }

    /// Look up a graph by key
    pub fn graph(&self, key: &str) -> Option<&GraphDefinition> {
        self.graphs.get(key)
    }

    /// Perfometers in paint order
    pub fn perfometers(&self) -> &[PerfometerDefinition] {
        &self.perfometers
    }

    /// List all registered unit keys, sorted
    pub fn list_units(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.units.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// List all registered metric keys, sorted
    pub fn list_metrics(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.metrics.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// List all registered graph keys, sorted
    pub fn list_graphs(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.graphs.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Check every cross-registry reference.
    ///
    /// Collects all dangling references instead of stopping at the first,
    /// so a broken definition file is reported in one pass.
    pub fn validate(&self) -> Result<(), Vec<RegistryError>> {
        let mut errors = Vec::new();

        for (key, metric) in &self.metrics {
            if !self.units.contains_key(&metric.unit) {
                errors.push(RegistryError::UnknownUnit {
                    metric: key.clone(),
                    unit: metric.unit.clone(),
                });
            }
        }

        for (key, graph) in &self.graphs {
            if graph.metrics.is_empty() {
                errors.push(RegistryError::EmptyGraph { graph: key.clone() });
            }
            for entry in &graph.metrics {
                if !self.metrics.contains_key(&entry.metric) {
                    errors.push(RegistryError::UnknownMetric {
                        graph: key.clone(),
                        metric: entry.metric.clone(),
                    });
                }
            }
        }

        for (index, perfometer) in self.perfometers.iter().enumerate() {
            self.validate_perfometer(index, perfometer, true, &mut errors);
        }

        // HashMap iteration order is arbitrary; sort for stable reporting
        errors.sort_by_key(|e| e.to_string());
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_perfometer(
        &self,
        index: usize,
        perfometer: &PerfometerDefinition,
        allow_stack: bool,
        errors: &mut Vec<RegistryError>,
    ) {
        match perfometer {
            PerfometerDefinition::Linear { segments, .. } => {
                if segments.is_empty() {
                    errors.push(RegistryError::EmptySegments { index });
                }
                for segment in segments {
                    if !self.metrics.contains_key(segment) {
                        errors.push(RegistryError::UnknownSegment {
                            index,
                            metric: segment.clone(),
                        });
                    }
                }
            }
            PerfometerDefinition::Stacked { perfometers } => {
                if !allow_stack {
                    errors.push(RegistryError::NestedStack { index });
                    return;
                }
                for child in perfometers {
                    self.validate_perfometer(index, child, false, errors);
                }
            }
        }
    }
}

/// Global registry instance, created lazily on first access
static GLOBAL_REGISTRY: Lazy<RwLock<MetricsRegistry>> =
    Lazy::new(|| RwLock::new(MetricsRegistry::new()));

/// Run a closure against the global registry
pub fn with_registry<R>(f: impl FnOnce(&MetricsRegistry) -> R) -> R {
    let guard = GLOBAL_REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Run a closure against the global registry with write access.
///
/// Intended for startup registration; after startup the registry is
/// treated as read-only.
pub fn with_registry_mut<R>(f: impl FnOnce(&mut MetricsRegistry) -> R) -> R {
    let mut guard = GLOBAL_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}
