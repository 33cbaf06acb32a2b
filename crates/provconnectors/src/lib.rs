//! Built-in outbound provisioning connectors
//!
//! Each connector ships with the factory the host registers it under.

pub mod office365;

pub use office365::{
    Office365Config, Office365Connector, Office365ConnectorFactory, Office365Property,
    CONNECTOR_TYPE as OFFICE365_CONNECTOR_TYPE,
};
use provruntime::ConnectorRegistry;

use std::sync::Arc;

/// Register all built-in connectors with a registry
pub fn register_all(registry: &mut ConnectorRegistry) {
    registry.register(Arc::new(office365::Office365ConnectorFactory));
}
