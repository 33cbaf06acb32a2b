use crate::ConnectorError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Placeholder shown instead of a confidential value
pub const REDACTED: &str = "******";

/// Describes one configurable setting of a connector.
///
/// A connector's schema is an ordered list of these. Hosts render them to
/// administrators and later hand the collected values back to the connector
/// factory as a [`ProvisioningProperties`] set keyed by [`Property::name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Stable key the connector reads the value under
    pub name: String,

    /// Label shown to administrators
    pub display_name: String,

    /// Position of the property when rendered
    pub display_order: u32,

    /// Host must refuse to activate the connector without a value
    #[serde(default)]
    pub required: bool,

    /// Value must be masked wherever it is shown or logged
    #[serde(default)]
    pub confidential: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            display_order: 0,
            required: false,
            confidential: false,
            description: None,
            default_value: None,
        }
    }

    pub fn order(mut self, display_order: u32) -> Self {
        self.display_order = display_order;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn confidential(mut self, confidential: bool) -> Self {
        self.confidential = confidential;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Value as it may be displayed: confidential values are masked
    pub fn display_value<'a>(&self, value: &'a str) -> &'a str {
        if self.confidential {
            REDACTED
        } else {
            value
        }
    }
}

/// Property values supplied at connector build time, keyed by property name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProvisioningProperties {
    values: HashMap<String, String>,
}

impl ProvisioningProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a flat JSON object of `"name": "value"` pairs
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let properties = serde_json::from_str(&content)?;
        Ok(properties)
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Non-blank value for `name`, trimmed
    pub fn get_non_blank(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Get a required value or return error. Blank values count as missing.
    pub fn require(&self, name: &str) -> Result<&str, ConnectorError> {
        self.get_non_blank(name)
            .ok_or_else(|| ConnectorError::MissingProperty(name.to_string()))
    }

    /// Parse an optional boolean flag. Accepts `true` or `false` in any case.
    pub fn get_bool(&self, name: &str) -> Result<Option<bool>, ConnectorError> {
        let Some(raw) = self.get_non_blank(name) else {
            return Ok(None);
        };

        if raw.eq_ignore_ascii_case("true") {
            Ok(Some(true))
        } else if raw.eq_ignore_ascii_case("false") {
            Ok(Some(false))
        } else {
            Err(ConnectorError::InvalidProperty {
                name: name.to_string(),
                reason: format!("expected 'true' or 'false', got '{}'", raw),
            })
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy of the values that is safe to log: every property the schema
    /// marks confidential is masked
    pub fn redacted(&self, schema: &[Property]) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(name, value)| {
                let shown = match schema.iter().find(|p| &p.name == name) {
                    Some(property) => property.display_value(value),
                    None => value.as_str(),
                };
                (name.clone(), shown.to_string())
            })
            .collect()
    }
}

impl From<HashMap<String, String>> for ProvisioningProperties {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for ProvisioningProperties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
