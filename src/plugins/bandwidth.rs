//! Built-in bandwidth definitions: download/upload in Mbits/s, their
//! graphs, and the stacked speed gauge.

use crate::core::{MetricsPlugin, MetricsRegistry, RegistryError};
use crate::types::{
    Color, GraphDefinition, GraphMetric, GraphStyle, MetricDefinition, PerfometerDefinition,
    UnitDefinition, UnitRender,
};

/// Download line/area color
const DOWNLOAD_COLOR: Color = Color {
    r: 0x00 as f64 / 255.0,
    g: 0xe0 as f64 / 255.0,
    b: 0x60 as f64 / 255.0,
    a: 1.0,
};

/// Upload line/area color
const UPLOAD_COLOR: Color = Color {
    r: 0x00 as f64 / 255.0,
    g: 0x80 as f64 / 255.0,
    b: 0xe0 as f64 / 255.0,
    a: 1.0,
};

/// Download gauge is full at 20 Mbit/s, upload at 5 Mbit/s
const DOWNLOAD_GAUGE_TOTAL: f64 = 20.0;
const UPLOAD_GAUGE_TOTAL: f64 = 5.0;

/// Bandwidth metrics plugin
#[derive(Debug, Default)]
pub struct BandwidthPlugin;

impl MetricsPlugin for BandwidthPlugin {
    fn id(&self) -> &str {
        "bandwidth"
    }

    fn register(&self, registry: &mut MetricsRegistry) -> Result<(), RegistryError> {
        registry.register_unit(
            "Mbits/s",
            UnitDefinition {
                title: "MBits per second".to_string(),
                symbol: "Mbits/s".to_string(),
                render: UnitRender::PhysicalPrecision {
                    digits: 2,
                    base_symbol: "Mbit/s".to_string(),
                },
            },
        )?;

        registry.register_metric(
            "download",
            MetricDefinition {
                title: "Download".to_string(),
                unit: "Mbits/s".to_string(),
                color: DOWNLOAD_COLOR,
            },
        )?;
        registry.register_metric(
            "upload",
            MetricDefinition {
                title: "Upload".to_string(),
                unit: "Mbits/s".to_string(),
                color: UPLOAD_COLOR,
            },
        )?;

        registry.register_graph(
            "bandwidth_translated_all",
            GraphDefinition {
                title: "Bandwidth".to_string(),
                metrics: vec![
                    GraphMetric::new("download", GraphStyle::area()),
                    GraphMetric::new("upload", GraphStyle::area().mirrored()),
                ],
            },
        )?;
        registry.register_graph(
            "bandwidth_translated_down",
            GraphDefinition {
                title: "Bandwidth Download".to_string(),
                metrics: vec![GraphMetric::new("download", GraphStyle::area())],
            },
        )?;
        registry.register_graph(
            "bandwidth_translated_up",
            GraphDefinition {
                title: "Bandwidth Upload".to_string(),
                metrics: vec![GraphMetric::new("upload", GraphStyle::area())],
            },
        )?;

        registry.push_perfometer(PerfometerDefinition::Stacked {
            perfometers: vec![
                PerfometerDefinition::Linear {
                    segments: vec!["download".to_string()],
                    total: DOWNLOAD_GAUGE_TOTAL,
                },
                PerfometerDefinition::Linear {
                    segments: vec!["upload".to_string()],
                    total: UPLOAD_GAUGE_TOTAL,
                },
            ],
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StyleKind;

    fn registered() -> MetricsRegistry {
        let mut registry = MetricsRegistry::new();
        BandwidthPlugin.register(&mut registry).unwrap();
        registry
    }

    #[test]
    fn test_unit_renders_mbit_at_two_digits() {
        let registry = registered();
        let unit = registry.unit("Mbits/s").unwrap();
        assert_eq!(unit.title, "MBits per second");
        assert_eq!(unit.symbol, "Mbits/s");

        let rendered = unit.render(1_000_000.0);
        assert!(rendered.contains("Mbit/s"));
        assert_eq!(rendered, "1.0 MMbit/s");

        for label in unit.graph_unit(&[0.0, 5.0, 20.0]) {
            assert!(label.contains("Mbit/s"));
        }
    }

    #[test]
    fn test_metrics_reference_unit_and_colors() {
        let registry = registered();

        let download = registry.metric("download").unwrap();
        assert_eq!(download.unit, "Mbits/s");
        assert_eq!(download.color.to_hex(), "#00e060");

        let upload = registry.metric("upload").unwrap();
        assert_eq!(upload.unit, "Mbits/s");
        assert_eq!(upload.color.to_hex(), "#0080e0");
    }

    #[test]
    fn test_graph_compositions() {
        let registry = registered();

        let all = registry.graph("bandwidth_translated_all").unwrap();
        assert_eq!(all.title, "Bandwidth");
        assert_eq!(all.metrics.len(), 2);
        assert_eq!(all.metrics[0].metric, "download");
        assert_eq!(all.metrics[0].style, GraphStyle::area());
        assert_eq!(all.metrics[1].metric, "upload");
        assert_eq!(all.metrics[1].style, GraphStyle::area().mirrored());

        let down = registry.graph("bandwidth_translated_down").unwrap();
        assert_eq!(down.metrics.len(), 1);
        assert_eq!(down.metrics[0].metric, "download");
        assert_eq!(down.metrics[0].style.kind, StyleKind::Area);
        assert!(!down.metrics[0].style.mirrored);

        let up = registry.graph("bandwidth_translated_up").unwrap();
        assert_eq!(up.metrics.len(), 1);
        assert_eq!(up.metrics[0].metric, "upload");
        assert_eq!(up.metrics[0].style, GraphStyle::area());
    }

    #[test]
    fn test_stacked_gauge_order_and_totals() {
        let registry = registered();
        assert_eq!(registry.perfometers().len(), 1);

        match &registry.perfometers()[0] {
            PerfometerDefinition::Stacked { perfometers } => {
                assert_eq!(perfometers.len(), 2);
                assert_eq!(
                    perfometers[0],
                    PerfometerDefinition::Linear {
                        segments: vec!["download".to_string()],
                        total: 20.0,
                    }
                );
                assert_eq!(
                    perfometers[1],
                    PerfometerDefinition::Linear {
                        segments: vec!["upload".to_string()],
                        total: 5.0,
                    }
                );
            }
            other => panic!("expected stacked gauge, got {:?}", other),
        }
    }

    #[test]
    fn test_registration_is_idempotent_and_valid() {
        let mut registry = registered();
        BandwidthPlugin.register(&mut registry).unwrap();

        assert_eq!(registry.list_metrics(), vec!["download", "upload"]);
        assert_eq!(registry.list_graphs().len(), 3);
        assert_eq!(registry.perfometers().len(), 1);
        assert!(registry.validate().is_ok());
    }
}
