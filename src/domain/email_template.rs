//! Email Template - Template types and their locale templates

use serde::{Deserialize, Serialize};

/// Reference to a locale template inside a template type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRef {
    /// Locale code, e.g. `en_US`
    pub id: String,
    /// Resource location of the template
    #[serde(default, rename = "self", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// An email template type, e.g. "AccountConfirmation"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplateType {
    /// Template type ID (base64 of the display name on most servers)
    pub id: String,
    /// Display name
    pub display_name: String,
    /// Locale templates registered under this type
    #[serde(default)]
    pub templates: Vec<TemplateRef>,
}

impl EmailTemplateType {
    /// Number of locale templates in this type
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}

/// Body of a template type creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmailTemplateType {
    pub display_name: String,
    #[serde(default)]
    pub templates: Vec<EmailTemplate>,
}

/// A single locale template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplate {
    /// Locale code
    pub id: String,
    /// MIME type of the body
    #[serde(default = "default_content_type")]
    pub content_type: String,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub footer: Option<String>,
}

fn default_content_type() -> String {
    "text/html".to_string()
}
