//! HTTP Backend
//!
//! [`BackendApi`] over the identity server's REST API using a blocking
//! reqwest client.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::connection::ConsoleConfig;
use crate::domain::email_template::{EmailTemplate, EmailTemplateType, NewEmailTemplateType};
use crate::domain::identity_provider::IdentityProvider;
use crate::error::{Error, Result};
use crate::services::api::{BackendApi, EMAIL_TEMPLATE_TYPES_PATH, IDENTITY_PROVIDERS_PATH};

/// Error body returned by the server on failed requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    description: Option<String>,
}

/// A single JSON patch operation as accepted by the identity provider API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PatchOperation {
    operation: &'static str,
    path: &'static str,
    value: Value,
}

impl PatchOperation {
    fn replace(path: &'static str, value: impl Into<Value>) -> Self {
        Self {
            operation: "REPLACE",
            path,
            value: value.into(),
        }
    }
}

/// Build the `REPLACE` operations for the general details of a provider
pub(crate) fn general_details_patch(idp: &IdentityProvider) -> Vec<PatchOperation> {
    vec![
        PatchOperation::replace("/name", idp.name.clone()),
        PatchOperation::replace("/description", idp.description.clone().unwrap_or_default()),
        PatchOperation::replace("/isEnabled", idp.is_enabled),
        PatchOperation::replace("/image", idp.image.clone().unwrap_or_default()),
    ]
}

pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &ConsoleConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.server_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let description = response
            .json::<ErrorBody>()
            .ok()
            .and_then(|body| body.description);
        tracing::warn!(status = status.as_u16(), ?description, "Backend request failed");
        Err(Error::Backend {
            status: status.as_u16(),
            description,
        })
    }
}

impl BackendApi for HttpBackend {
    fn email_template_types(&self) -> Result<Vec<EmailTemplateType>> {
        let url = self.url(EMAIL_TEMPLATE_TYPES_PATH);
        tracing::debug!(%url, "Fetching email template types");
        let response = self.send(self.client.get(url))?;
        Ok(response.json()?)
    }

    fn create_email_template_type(
        &self,
        request: &NewEmailTemplateType,
    ) -> Result<EmailTemplateType> {
        let url = self.url(EMAIL_TEMPLATE_TYPES_PATH);
        tracing::debug!(%url, display_name = %request.display_name, "Creating email template type");
        let response = self.send(self.client.post(url).json(request))?;
        Ok(response.json()?)
    }

    fn delete_email_template_type(&self, type_id: &str) -> Result<()> {
        let url = self.url(&format!("{EMAIL_TEMPLATE_TYPES_PATH}/{type_id}"));
        tracing::debug!(%url, "Deleting email template type");
        let response = self.send(self.client.delete(url))?;
        if response.status() != StatusCode::NO_CONTENT {
            tracing::warn!(status = response.status().as_u16(), "Unexpected delete status");
        }
        Ok(())
    }

    fn email_template(&self, type_id: &str, template_id: &str) -> Result<EmailTemplate> {
        let url = self.url(&format!(
            "{EMAIL_TEMPLATE_TYPES_PATH}/{type_id}/templates/{template_id}"
        ));
        tracing::debug!(%url, "Fetching email template");
        let response = self.send(self.client.get(url))?;
        Ok(response.json()?)
    }

    fn identity_provider(&self, idp_id: &str) -> Result<IdentityProvider> {
        let url = self.url(&format!("{IDENTITY_PROVIDERS_PATH}/{idp_id}"));
        tracing::debug!(%url, "Fetching identity provider");
        let response = self.send(self.client.get(url))?;
        Ok(response.json()?)
    }

    fn create_identity_provider(&self, idp: &IdentityProvider) -> Result<IdentityProvider> {
        let url = self.url(IDENTITY_PROVIDERS_PATH);
        tracing::debug!(%url, name = %idp.name, "Creating identity provider");
        let response = self.send(self.client.post(url).json(idp))?;
        Ok(response.json()?)
    }

    fn update_identity_provider(&self, idp: &IdentityProvider) -> Result<()> {
        let Some(id) = idp.id.as_deref() else {
            return Err(Error::Invalid {
                message: format!("Identity provider '{}' has no ID", idp.name),
            });
        };
        let url = self.url(&format!("{IDENTITY_PROVIDERS_PATH}/{id}"));
        tracing::debug!(%url, "Updating identity provider");
        self.send(self.client.patch(url).json(&general_details_patch(idp)))?;
        Ok(())
    }

    fn delete_identity_provider(&self, idp_id: &str) -> Result<()> {
        let url = self.url(&format!("{IDENTITY_PROVIDERS_PATH}/{idp_id}"));
        tracing::debug!(%url, "Deleting identity provider");
        self.send(self.client.delete(url))?;
        Ok(())
    }
}
