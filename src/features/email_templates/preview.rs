//! Read-only preview of a single locale template

use crate::domain::email_template::EmailTemplate;
use crate::error::Result;
use crate::services::BackendApi;

#[derive(Debug, Clone)]
pub struct TemplatePreview {
    type_id: String,
    template: EmailTemplate,
}

impl TemplatePreview {
    pub fn load(backend: &dyn BackendApi, type_id: &str, template_id: &str) -> Result<Self> {
        let template = backend.email_template(type_id, template_id)?;
        tracing::debug!(type_id, template_id, "Template loaded for preview");
        Ok(Self {
            type_id: type_id.to_string(),
            template,
        })
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    /// Locale code of the template
    pub fn locale(&self) -> &str {
        &self.template.id
    }

    pub fn subject(&self) -> &str {
        &self.template.subject
    }

    pub fn body(&self) -> &str {
        &self.template.body
    }

    pub fn footer(&self) -> Option<&str> {
        self.template.footer.as_deref()
    }
}
