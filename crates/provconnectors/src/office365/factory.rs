use super::{Office365Connector, Office365Property, CONNECTOR_TYPE};
use provcore::{ConnectorError, OutboundConnector, Property, ProvisioningProperties};
use provruntime::ConnectorFactory;

/// Creates Office365 connectors and declares their configuration schema
pub struct Office365ConnectorFactory;

impl ConnectorFactory for Office365ConnectorFactory {
    fn connector_type(&self) -> &str {
        CONNECTOR_TYPE
    }

    fn configuration_properties(&self) -> Vec<Property> {
        use Office365Property::*;

        vec![
            Property::new(ClientId.as_str(), "Client ID")
                .order(1)
                .required(true),
            Property::new(ClientSecret.as_str(), "Client Secret")
                .order(2)
                .required(true)
                .confidential(true),
            Property::new(Tenant.as_str(), "Office365 Tenant Name")
                .order(3)
                .required(true)
                .description("Example : username.onmicrosoft.com"),
            Property::new(Domain.as_str(), "Office365 Domain Name")
                .order(4)
                .required(true),
            Property::new(ImmutableId.as_str(), "Immutable ID")
                .order(5)
                .required(true)
                .description(
                    "A claim which will give a unique identifier to the user account in Azure AD. \
                     [Example : http://wso2.org/claims/userid]",
                ),
            Property::new(UserPrincipalName.as_str(), "User Principal Name")
                .order(6)
                .required(true),
            Property::new(EnableDomain.as_str(), "Append Domain Name to UPN")
                .order(7)
                .description(
                    "If enabled domain name will be appended to User Principal Name. \
                     [Example: upnValue@domainName]",
                ),
            Property::new(DisplayName.as_str(), "Display Name")
                .order(8)
                .required(true)
                .description("The name to display in the address book for the user"),
            Property::new(MailNickname.as_str(), "Email Nickname")
                .order(9)
                .required(true)
                .description("The mail alias for the user"),
            Property::new(MembershipAttribute.as_str(), "Dynamic Membership Rule Attribute")
                .order(10)
                .description(
                    "This attribute is considered in the dynamic membership allocation rule in Azure AD",
                ),
            Property::new(MembershipValue.as_str(), "Dynamic Membership Rule Value")
                .order(11)
                .description(
                    "If this is not set, 'http://wso2.org/claims/role' will be taken as default.",
                ),
        ]
    }

    fn build(
        &self,
        properties: &ProvisioningProperties,
    ) -> Result<Box<dyn OutboundConnector>, ConnectorError> {
        let mut connector = Office365Connector::new();
        connector.init(properties)?;
        tracing::debug!("Office365 provisioning connector created successfully.");
        Ok(Box::new(connector))
    }
}
