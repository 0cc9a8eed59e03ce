//! Metric definitions.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// A named metric bound to a unit of measurement and a display color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    /// Human-readable name, e.g. "Download"
    pub title: String,
    /// Key of the unit this metric is measured in; must resolve in the
    /// unit registry
    pub unit: String,
    /// Line/area color used wherever the metric is drawn
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_serialization() {
        let metric = MetricDefinition {
            title: "Download".to_string(),
            unit: "Mbits/s".to_string(),
            color: Color::from_rgba8(0x00, 0xe0, 0x60, 0xff),
        };

        let json = serde_json::to_string(&metric).unwrap();
        assert!(json.contains("\"unit\":\"Mbits/s\""));
        assert!(json.contains("\"color\":\"#00e060\""));

        let back: MetricDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metric);
    }
}
