use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisioningError {
    #[error("Connector error: {0}")]
    Connector(#[from] ConnectorError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Raised by a connector while it is being initialized from its properties
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectorError {
    #[error("Missing required property: {0}")]
    MissingProperty(String),

    #[error("Invalid value for property '{name}': {reason}")]
    InvalidProperty {
        name: String,
        reason: String,
    },

    #[error("Connector initialization failed: {0}")]
    InitializationFailed(String),
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unknown connector type: {0}")]
    UnknownConnectorType(String),
}
