//! Core registry, plugin trait, and error types.

mod error;
mod plugin;
mod registry;

pub use error::RegistryError;
pub use plugin::{BoxedPlugin, MetricsPlugin};
pub use registry::{with_registry, with_registry_mut, MetricsRegistry};
