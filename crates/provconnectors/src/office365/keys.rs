use std::fmt;

/// Configuration keys understood by the Office365 connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Office365Property {
    ClientId,
    ClientSecret,
    Tenant,
    Domain,
    ImmutableId,
    UserPrincipalName,
    EnableDomain,
    DisplayName,
    MailNickname,
    MembershipAttribute,
    MembershipValue,
}

impl Office365Property {
    /// Every key, in display order
    pub const ALL: [Office365Property; 11] = [
        Office365Property::ClientId,
        Office365Property::ClientSecret,
        Office365Property::Tenant,
        Office365Property::Domain,
        Office365Property::ImmutableId,
        Office365Property::UserPrincipalName,
        Office365Property::EnableDomain,
        Office365Property::DisplayName,
        Office365Property::MailNickname,
        Office365Property::MembershipAttribute,
        Office365Property::MembershipValue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Office365Property::ClientId => "office365_client_id",
            Office365Property::ClientSecret => "office365_client_secret",
            Office365Property::Tenant => "office365_tenant",
            Office365Property::Domain => "office365_domain",
            Office365Property::ImmutableId => "office365_immutable_id",
            Office365Property::UserPrincipalName => "office365_upn",
            Office365Property::EnableDomain => "office365_enable_domain",
            Office365Property::DisplayName => "office365_display_name",
            Office365Property::MailNickname => "office365_mail_nickname",
            Office365Property::MembershipAttribute => "office365_membership_attribute",
            Office365Property::MembershipValue => "office365_membership_value",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for Office365Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
