//! Office365 (Azure AD) outbound provisioning connector

mod connector;
mod factory;
mod keys;

pub use connector::{Office365Config, Office365Connector, DEFAULT_MEMBERSHIP_VALUE};
pub use factory::Office365ConnectorFactory;
pub use keys::Office365Property;

/// Registry key of the Office365 connector
pub const CONNECTOR_TYPE: &str = "Office365";
