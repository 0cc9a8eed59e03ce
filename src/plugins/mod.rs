//! Built-in definition plugins.

mod bandwidth;

pub use bandwidth::BandwidthPlugin;

use crate::core::{BoxedPlugin, MetricsRegistry, RegistryError};

/// Register every built-in plugin with the given registry
pub fn register_builtins(registry: &mut MetricsRegistry) -> Result<(), RegistryError> {
    let plugins: Vec<BoxedPlugin> = vec![Box::new(BandwidthPlugin)];
    for plugin in plugins {
        plugin.register(registry)?;
        log::info!("Registered built-in plugin: {}", plugin.id());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{with_registry, with_registry_mut};

    #[test]
    fn test_global_registry_built_ins_are_idempotent() {
        with_registry_mut(register_builtins).unwrap();
        with_registry_mut(register_builtins).unwrap();

        with_registry(|registry| {
            assert_eq!(registry.list_metrics(), vec!["download", "upload"]);
            assert_eq!(registry.list_graphs().len(), 3);
            assert_eq!(registry.perfometers().len(), 1);
            assert!(registry.validate().is_ok());
        });
    }
}
