//! Unit of measurement definitions.

use crate::render::{physical_precision, physical_precision_list};
use serde::{Deserialize, Serialize};

/// How a unit turns raw values into display strings.
///
/// The original plugin format embedded rendering closures in the unit entry;
/// here the strategy is data so definitions stay serializable and the host
/// engine supplies the actual formatting code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum UnitRender {
    /// SI prefix scaling at a fixed number of significant digits.
    ///
    /// `base_symbol` is the symbol the prefix attaches to, which may differ
    /// from the unit's display symbol (e.g. symbol "Mbits/s", base "Mbit/s").
    PhysicalPrecision { digits: usize, base_symbol: String },
    /// Plain fixed-point rendering with the unit's own symbol appended.
    Fixed { decimals: usize },
}

impl Default for UnitRender {
    fn default() -> Self {
        Self::Fixed { decimals: 2 }
    }
}

/// A named measurement scale with its display and rendering rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Human-readable name, e.g. "MBits per second"
    pub title: String,
    /// Display symbol, e.g. "Mbits/s"
    pub symbol: String,
    /// Formatting strategy for single values and graph axis labels
    #[serde(default)]
    pub render: UnitRender,
}

impl UnitDefinition {
    /// Render one value as a human-readable string
    pub fn render(&self, value: f64) -> String {
        match &self.render {
            UnitRender::PhysicalPrecision {
                digits,
                base_symbol,
            } => physical_precision(value, *digits, base_symbol),
            UnitRender::Fixed { decimals } => {
                format!("{:.*} {}", decimals, value, self.symbol)
            }
        }
    }

    /// Render graph axis values at one common scale
    pub fn graph_unit(&self, values: &[f64]) -> Vec<String> {
        match &self.render {
            UnitRender::PhysicalPrecision {
                digits,
                base_symbol,
            } => physical_precision_list(values, *digits, base_symbol),
            UnitRender::Fixed { decimals } => values
                .iter()
                .map(|v| format!("{:.*} {}", decimals, v, self.symbol))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mbits() -> UnitDefinition {
        UnitDefinition {
            title: "MBits per second".to_string(),
            symbol: "Mbits/s".to_string(),
            render: UnitRender::PhysicalPrecision {
                digits: 2,
                base_symbol: "Mbit/s".to_string(),
            },
        }
    }

    #[test]
    fn test_render_physical_precision() {
        let unit = mbits();
        let rendered = unit.render(1_000_000.0);
        assert!(rendered.contains("Mbit/s"));
        assert_eq!(rendered, "1.0 MMbit/s");
        assert_eq!(unit.render(20.0), "20 Mbit/s");
    }

    #[test]
    fn test_graph_unit_labels_carry_symbol() {
        let unit = mbits();
        let labels = unit.graph_unit(&[0.0, 5.0, 10.0, 20.0]);
        assert_eq!(labels.len(), 4);
        for label in &labels {
            assert!(label.contains("Mbit/s"));
        }
        assert_eq!(labels[3], "20 Mbit/s");
    }

    #[test]
    fn test_fixed_render() {
        let unit = UnitDefinition {
            title: "Percent".to_string(),
            symbol: "%".to_string(),
            render: UnitRender::Fixed { decimals: 1 },
        };
        assert_eq!(unit.render(42.25), "42.2 %");
    }

    #[test]
    fn test_serde_tagged_strategy() {
        let json = serde_json::to_string(&mbits()).unwrap();
        assert!(json.contains("\"strategy\":\"physical_precision\""));

        let back: UnitDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mbits());
    }
}
