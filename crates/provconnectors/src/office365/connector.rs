use super::{Office365Property, CONNECTOR_TYPE};
use chrono::{DateTime, Utc};
use provcore::{
    ConnectorError, ConnectorId, ConnectorInfo, OutboundConnector, ProvisioningProperties,
    REDACTED,
};
use std::fmt;
use uuid::Uuid;

/// Claim used for the dynamic membership rule value when none is configured
pub const DEFAULT_MEMBERSHIP_VALUE: &str = "http://wso2.org/claims/role";

/// Office365 settings read from the provisioning properties
#[derive(Clone, PartialEq, Eq)]
pub struct Office365Config {
    pub client_id: String,
    pub client_secret: String,
    pub tenant: String,
    pub domain: String,
    /// Claim carrying the unique identifier of the account in Azure AD
    pub immutable_id_claim: String,
    pub upn_claim: String,
    /// Append `@domain` to user principal names
    pub append_domain: bool,
    pub display_name_claim: String,
    pub mail_nickname_claim: String,
    pub membership_attribute: Option<String>,
    pub membership_value: String,
}

impl Office365Config {
    pub fn from_properties(properties: &ProvisioningProperties) -> Result<Self, ConnectorError> {
        let required = |key: Office365Property| {
            properties.require(key.as_str()).map(str::to_string)
        };

        for name in properties.names() {
            if Office365Property::from_name(name).is_none() {
                tracing::debug!("Ignoring unknown Office365 property: {}", name);
            }
        }

        Ok(Self {
            client_id: required(Office365Property::ClientId)?,
            client_secret: required(Office365Property::ClientSecret)?,
            tenant: required(Office365Property::Tenant)?,
            domain: required(Office365Property::Domain)?,
            immutable_id_claim: required(Office365Property::ImmutableId)?,
            upn_claim: required(Office365Property::UserPrincipalName)?,
            append_domain: properties
                .get_bool(Office365Property::EnableDomain.as_str())?
                .unwrap_or(false),
            display_name_claim: required(Office365Property::DisplayName)?,
            mail_nickname_claim: required(Office365Property::MailNickname)?,
            membership_attribute: properties
                .get_non_blank(Office365Property::MembershipAttribute.as_str())
                .map(str::to_string),
            membership_value: properties
                .get_non_blank(Office365Property::MembershipValue.as_str())
                .unwrap_or(DEFAULT_MEMBERSHIP_VALUE)
                .to_string(),
        })
    }

    /// User principal name for `value`, as `value@domain` when appending is
    /// enabled and the value has no domain part yet
    pub fn resolve_upn(&self, value: &str) -> String {
        if self.append_domain && !value.contains('@') {
            format!("{}@{}", value, self.domain)
        } else {
            value.to_string()
        }
    }
}

impl fmt::Debug for Office365Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Office365Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &REDACTED)
            .field("tenant", &self.tenant)
            .field("domain", &self.domain)
            .field("immutable_id_claim", &self.immutable_id_claim)
            .field("upn_claim", &self.upn_claim)
            .field("append_domain", &self.append_domain)
            .field("display_name_claim", &self.display_name_claim)
            .field("mail_nickname_claim", &self.mail_nickname_claim)
            .field("membership_attribute", &self.membership_attribute)
            .field("membership_value", &self.membership_value)
            .finish()
    }
}

/// Outbound connector pushing users and groups to an Office365 tenant
#[derive(Debug)]
pub struct Office365Connector {
    id: ConnectorId,
    created_at: DateTime<Utc>,
    config: Option<Office365Config>,
}

impl Office365Connector {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            config: None,
        }
    }

    /// Settings read by `init`, if it has run successfully
    pub fn config(&self) -> Option<&Office365Config> {
        self.config.as_ref()
    }
}

impl Default for Office365Connector {
    fn default() -> Self {
        Self::new()
    }
}

impl OutboundConnector for Office365Connector {
    fn connector_type(&self) -> &str {
        CONNECTOR_TYPE
    }

    fn instance_id(&self) -> ConnectorId {
        self.id
    }

    fn init(&mut self, properties: &ProvisioningProperties) -> Result<(), ConnectorError> {
        let config = Office365Config::from_properties(properties)?;
        tracing::debug!(
            "Office365 connector {} configured for tenant {}",
            self.id,
            config.tenant
        );
        self.config = Some(config);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.config.is_some()
    }

    fn info(&self) -> ConnectorInfo {
        ConnectorInfo {
            connector_type: CONNECTOR_TYPE.to_string(),
            instance_id: self.id,
            initialized: self.is_initialized(),
            created_at: self.created_at,
        }
    }
}
