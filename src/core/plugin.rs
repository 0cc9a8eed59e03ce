//! Plugin seam for definition providers.
//!
//! Built-in plugins implement this trait directly; it is also the surface a
//! future dynamically-loaded plugin would be adapted to.

use super::error::RegistryError;
use super::registry::MetricsRegistry;

/// A provider of unit/metric/graph/perfometer definitions
pub trait MetricsPlugin {
    /// Stable identifier, used in logs
    fn id(&self) -> &str;

    /// Insert this plugin's definitions into the registry.
    ///
    /// Must be idempotent: registering the same plugin twice may not change
    /// registry content (the registry's duplicate handling guarantees this
    /// as long as the plugin emits the same definitions each time).
    fn register(&self, registry: &mut MetricsRegistry) -> Result<(), RegistryError>;
}

/// Owned, thread-safe plugin handle
pub type BoxedPlugin = Box<dyn MetricsPlugin + Send + Sync>;
