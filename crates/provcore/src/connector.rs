use crate::{ConnectorError, ProvisioningProperties};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ConnectorId = Uuid;

/// Core trait that all outbound provisioning connectors implement
pub trait OutboundConnector: Send + Sync {
    /// Type identifier matching the factory that built it (e.g., "Office365")
    fn connector_type(&self) -> &str;

    /// Unique id of this connector instance
    fn instance_id(&self) -> ConnectorId;

    /// Read and validate the configured property values.
    ///
    /// Called once by the factory before the connector is handed to the host.
    fn init(&mut self, properties: &ProvisioningProperties) -> Result<(), ConnectorError>;

    fn is_initialized(&self) -> bool;

    /// Snapshot of the instance for listings and logs
    fn info(&self) -> ConnectorInfo;
}

/// Summary of a connector instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorInfo {
    pub connector_type: String,
    pub instance_id: ConnectorId,
    pub initialized: bool,
    pub created_at: DateTime<Utc>,
}
