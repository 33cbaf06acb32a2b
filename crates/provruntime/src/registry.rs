use provcore::{
    ConnectorError, OutboundConnector, Property, ProvisioningError, ProvisioningProperties,
    RegistryError,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Factory trait for creating connector instances
pub trait ConnectorFactory: Send + Sync {
    /// Connector type identifier, used as the registry key
    fn connector_type(&self) -> &str;

    /// Configuration schema of the connectors this factory builds.
    ///
    /// Built fresh on every call.
    fn configuration_properties(&self) -> Vec<Property>;

    /// Create a new connector and initialize it with the given values
    fn build(
        &self,
        properties: &ProvisioningProperties,
    ) -> Result<Box<dyn OutboundConnector>, ConnectorError>;
}

/// Registry of available connector types
pub struct ConnectorRegistry {
    factories: HashMap<String, Arc<dyn ConnectorFactory>>,
}

impl ConnectorRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a connector factory. A factory already registered under the
    /// same type is replaced.
    pub fn register(&mut self, factory: Arc<dyn ConnectorFactory>) {
        let connector_type = factory.connector_type().to_string();
        tracing::info!("Registering connector type: {}", connector_type);
        if self.factories.insert(connector_type.clone(), factory).is_some() {
            tracing::warn!("Replaced existing factory for connector type: {}", connector_type);
        }
    }

    /// Get all registered connector types, sorted
    pub fn list_connector_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.factories.keys().cloned().collect();
        types.sort();
        types
    }

    /// Get the schema for a connector type in display order
    pub fn configuration_properties(&self, connector_type: &str) -> Option<Vec<Property>> {
        self.factories.get(connector_type).map(|f| {
            let mut properties = f.configuration_properties();
            properties.sort_by_key(|p| p.display_order);
            properties
        })
    }

    /// Check that every required property of the type has a non-blank value
    pub fn validate(
        &self,
        connector_type: &str,
        properties: &ProvisioningProperties,
    ) -> Result<(), ProvisioningError> {
        let schema = self
            .configuration_properties(connector_type)
            .ok_or_else(|| RegistryError::UnknownConnectorType(connector_type.to_string()))?;

        if let Some(missing) = schema
            .iter()
            .find(|p| p.required && properties.get_non_blank(&p.name).is_none())
        {
            return Err(ConnectorError::MissingProperty(missing.name.clone()).into());
        }

        Ok(())
    }

    /// Validate the values, then build and initialize a connector
    pub fn create_connector(
        &self,
        connector_type: &str,
        properties: &ProvisioningProperties,
    ) -> Result<Box<dyn OutboundConnector>, ProvisioningError> {
        let factory = self
            .factories
            .get(connector_type)
            .ok_or_else(|| RegistryError::UnknownConnectorType(connector_type.to_string()))?;

        self.validate(connector_type, properties)?;

        let connector = factory.build(properties)?;
        tracing::info!(
            "Activated {} connector {}",
            connector_type,
            connector.instance_id()
        );
        Ok(connector)
    }
}

impl Default for ConnectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
