// crates/provruntime/tests/registry_test.rs

use chrono::Utc;
use provcore::{
    ConnectorError, ConnectorId, ConnectorInfo, OutboundConnector, Property, ProvisioningError,
    ProvisioningProperties, RegistryError,
};
use provruntime::{ConnectorFactory, ConnectorRegistry};
use std::sync::Arc;
use uuid::Uuid;

/// Connector whose init fails when "reject" is set, to prove the error
/// reaches the caller untouched
struct EchoConnector {
    id: ConnectorId,
    initialized: bool,
}

impl OutboundConnector for EchoConnector {
    fn connector_type(&self) -> &str {
        "Echo"
    }

    fn instance_id(&self) -> ConnectorId {
        self.id
    }

    fn init(&mut self, properties: &ProvisioningProperties) -> Result<(), ConnectorError> {
        properties.require("endpoint")?;
        if properties.get("reject").is_some() {
            return Err(ConnectorError::InitializationFailed("rejected".to_string()));
        }
        self.initialized = true;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn info(&self) -> ConnectorInfo {
        ConnectorInfo {
            connector_type: "Echo".to_string(),
            instance_id: self.id,
            initialized: self.initialized,
            created_at: Utc::now(),
        }
    }
}

struct EchoFactory {
    label: &'static str,
}

impl ConnectorFactory for EchoFactory {
    fn connector_type(&self) -> &str {
        "Echo"
    }

    fn configuration_properties(&self) -> Vec<Property> {
        vec![
            Property::new("token", self.label).order(2).confidential(true),
            Property::new("endpoint", "Endpoint").order(1).required(true),
        ]
    }

    fn build(
        &self,
        properties: &ProvisioningProperties,
    ) -> Result<Box<dyn OutboundConnector>, ConnectorError> {
        let mut connector = EchoConnector {
            id: Uuid::new_v4(),
            initialized: false,
        };
        connector.init(properties)?;
        Ok(Box::new(connector))
    }
}

struct OtherFactory;

impl ConnectorFactory for OtherFactory {
    fn connector_type(&self) -> &str {
        "Another"
    }

    fn configuration_properties(&self) -> Vec<Property> {
        Vec::new()
    }

    fn build(
        &self,
        _properties: &ProvisioningProperties,
    ) -> Result<Box<dyn OutboundConnector>, ConnectorError> {
        Err(ConnectorError::InitializationFailed("not buildable".to_string()))
    }
}

fn registry() -> ConnectorRegistry {
    let mut registry = ConnectorRegistry::new();
    registry.register(Arc::new(EchoFactory { label: "Token" }));
    registry.register(Arc::new(OtherFactory));
    registry
}

#[test]
fn test_list_connector_types_sorted() {
    assert_eq!(registry().list_connector_types(), vec!["Another", "Echo"]);
}

#[test]
fn test_schema_returned_in_display_order() {
    let schema = registry().configuration_properties("Echo").unwrap();
    let names: Vec<&str> = schema.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["endpoint", "token"]);

    assert!(registry().configuration_properties("Missing").is_none());
}

#[test]
fn test_register_replaces_same_type() {
    let mut registry = registry();
    registry.register(Arc::new(EchoFactory { label: "API Token" }));

    assert_eq!(registry.list_connector_types().len(), 2);
    let schema = registry.configuration_properties("Echo").unwrap();
    assert_eq!(schema[1].display_name, "API Token");
}

#[test]
fn test_create_connector_success() {
    let props = ProvisioningProperties::new().with("endpoint", "https://example.org");

    let connector = registry().create_connector("Echo", &props).unwrap();

    assert_eq!(connector.connector_type(), "Echo");
    assert!(connector.is_initialized());
    assert!(connector.info().initialized);
}

#[test]
fn test_create_connector_unknown_type() {
    let result = registry().create_connector("Nope", &ProvisioningProperties::new());

    match result {
        Err(ProvisioningError::Registry(RegistryError::UnknownConnectorType(t))) => {
            assert_eq!(t, "Nope")
        }
        other => panic!("Expected UnknownConnectorType, got {:?}", other.err()),
    }
}

#[test]
fn test_validate_reports_missing_required() {
    let props = ProvisioningProperties::new().with("endpoint", "   ");

    match registry().validate("Echo", &props) {
        Err(ProvisioningError::Connector(ConnectorError::MissingProperty(name))) => {
            assert_eq!(name, "endpoint")
        }
        other => panic!("Expected MissingProperty, got {:?}", other),
    }
}

#[test]
fn test_initialization_error_propagates() {
    let props = ProvisioningProperties::new()
        .with("endpoint", "https://example.org")
        .with("reject", "yes");

    match registry().create_connector("Echo", &props) {
        Err(ProvisioningError::Connector(ConnectorError::InitializationFailed(msg))) => {
            assert_eq!(msg, "rejected")
        }
        other => panic!("Expected InitializationFailed, got {:?}", other.err()),
    }

    let result = registry().create_connector("Another", &ProvisioningProperties::new());
    assert!(matches!(
        result,
        Err(ProvisioningError::Connector(ConnectorError::InitializationFailed(_)))
    ));
}
