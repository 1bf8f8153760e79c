//! Identity Provider - Federated identity provider and its authenticators

use serde::{Deserialize, Serialize};

/// A `key = value` authenticator property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub key: String,
    pub value: String,
}

/// A federated authenticator (OIDC, SAML, Google, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FederatedAuthenticator {
    pub authenticator_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FederatedAuthenticators {
    #[serde(default)]
    pub default_authenticator_id: Option<String>,
    #[serde(default)]
    pub authenticators: Vec<FederatedAuthenticator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProvider {
    /// Server-assigned ID, absent before creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_enabled: bool,
    /// Logo URL
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub federated_authenticators: FederatedAuthenticators,
}

impl IdentityProvider {
    /// The authenticator matching `defaultAuthenticatorId`
    pub fn default_authenticator(&self) -> Option<&FederatedAuthenticator> {
        let default_id = self
            .federated_authenticators
            .default_authenticator_id
            .as_deref()?;
        self.federated_authenticators
            .authenticators
            .iter()
            .find(|a| a.authenticator_id == default_id)
    }

    /// Replace the authenticator list with `authenticator`, made the enabled
    /// default. The configured default ID is left untouched.
    pub fn apply_authenticator(&mut self, authenticator: FederatedAuthenticator) {
        self.federated_authenticators.authenticators = vec![FederatedAuthenticator {
            is_default: true,
            is_enabled: true,
            ..authenticator
        }];
    }
}
