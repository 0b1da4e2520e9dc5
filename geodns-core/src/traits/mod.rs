//! Abstraction traits the services depend on

mod provider_registry;

pub use provider_registry::{InMemoryProviderRegistry, ProviderRegistry};
