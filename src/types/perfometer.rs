//! Perfometer definitions: compact horizontal gauges showing metric values
//! as a filled bar relative to a total.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A perfometer gauge definition.
///
/// `Linear` fills a bar from its segment values against a fixed total;
/// `Stacked` composes child gauges in paint order (the list order is the
/// stacking order). Definition files tag entries with `"type": "linear"`
/// or `"type": "stacked"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PerfometerDefinition {
    Linear {
        /// Metric keys summed into the filled portion, in paint order
        segments: Vec<String>,
        /// Value at which the bar is fully filled
        total: f64,
    },
    Stacked {
        /// Child gauges, first painted first
        perfometers: Vec<PerfometerDefinition>,
    },
}

impl PerfometerDefinition {
    /// All metric keys this gauge references, children included
    pub fn segment_metrics(&self) -> Vec<&str> {
        match self {
            Self::Linear { segments, .. } => segments.iter().map(String::as_str).collect(),
            Self::Stacked { perfometers } => perfometers
                .iter()
                .flat_map(|p| p.segment_metrics())
                .collect(),
        }
    }

    /// Filled fraction of a linear gauge given live metric values.
    ///
    /// Returns `None` for stacked gauges (compute per child) and when any
    /// segment has no value. The result is clamped to [0.0, 1.0].
    pub fn fill_ratio(&self, values: &HashMap<String, f64>) -> Option<f64> {
        match self {
            Self::Linear { segments, total } => {
                if *total <= 0.0 {
                    return None;
                }
                let mut sum = 0.0;
                for segment in segments {
                    sum += values.get(segment)?;
                }
                Some((sum / total).clamp(0.0, 1.0))
            }
            Self::Stacked { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bandwidth_gauge() -> PerfometerDefinition {
        PerfometerDefinition::Stacked {
            perfometers: vec![
                PerfometerDefinition::Linear {
                    segments: vec!["download".to_string()],
                    total: 20.0,
                },
                PerfometerDefinition::Linear {
                    segments: vec!["upload".to_string()],
                    total: 5.0,
                },
            ],
        }
    }

    #[test]
    fn test_tagged_serialization() {
        let json = serde_json::to_string(&bandwidth_gauge()).unwrap();
        assert!(json.contains("\"type\":\"stacked\""));
        assert!(json.contains("\"type\":\"linear\""));
        assert!(json.contains("\"total\":20.0"));

        let back: PerfometerDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bandwidth_gauge());
    }

    #[test]
    fn test_segment_metrics_recurse_in_order() {
        assert_eq!(
            bandwidth_gauge().segment_metrics(),
            vec!["download", "upload"]
        );
    }

    #[test]
    fn test_fill_ratio() {
        let gauge = PerfometerDefinition::Linear {
            segments: vec!["download".to_string()],
            total: 20.0,
        };

        let mut values = HashMap::new();
        values.insert("download".to_string(), 5.0);
        assert_eq!(gauge.fill_ratio(&values), Some(0.25));

        values.insert("download".to_string(), 50.0);
        assert_eq!(gauge.fill_ratio(&values), Some(1.0));

        assert_eq!(gauge.fill_ratio(&HashMap::new()), None);
        assert_eq!(bandwidth_gauge().fill_ratio(&values), None);
    }

    #[test]
    fn test_fill_ratio_zero_total() {
        let gauge = PerfometerDefinition::Linear {
            segments: vec!["download".to_string()],
            total: 0.0,
        };
        let mut values = HashMap::new();
        values.insert("download".to_string(), 1.0);
        assert_eq!(gauge.fill_ratio(&values), None);
    }
}
