//! Core abstractions for outbound provisioning
//!
//! Property descriptors, the value sets administrators supply for them,
//! and the trait every outbound connector implements. Nothing here knows
//! about a particular downstream system.

mod connector;
mod error;
mod property;

pub use connector::{ConnectorId, ConnectorInfo, OutboundConnector};
pub use error::{ConnectorError, ProvisioningError, RegistryError};
pub use property::{Property, ProvisioningProperties, REDACTED};

/// Result type for provisioning operations
pub type Result<T> = std::result::Result<T, ProvisioningError>;
