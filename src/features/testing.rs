//! In-memory backend for controller tests

use std::sync::Mutex;

use crate::domain::email_template::{EmailTemplate, EmailTemplateType, NewEmailTemplateType};
use crate::domain::identity_provider::IdentityProvider;
use crate::error::{Error, Result};
use crate::services::BackendApi;

#[derive(Default)]
pub(crate) struct MockBackend {
    pub template_types: Mutex<Vec<EmailTemplateType>>,
    pub templates: Mutex<Vec<(String, EmailTemplate)>>,
    pub identity_providers: Mutex<Vec<IdentityProvider>>,
    /// Number of template type list fetches
    pub list_calls: Mutex<usize>,
    /// When set, mutating calls fail with this backend description
    pub fail_with: Mutex<Option<Option<String>>>,
}

impl MockBackend {
    pub fn with_template_types(names: &[&str]) -> Self {
        let backend = Self::default();
        *backend.template_types.lock().expect("lock") = names
            .iter()
            .map(|name| EmailTemplateType {
                id: format!("id-{name}"),
                display_name: name.to_string(),
                templates: Vec::new(),
            })
            .collect();
        backend
    }

    pub fn fail_next(&self, description: Option<&str>) {
        *self.fail_with.lock().expect("lock") = Some(description.map(str::to_string));
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().expect("lock")
    }

    fn check_failure(&self) -> Result<()> {
        match self.fail_with.lock().expect("lock").take() {
            Some(description) => Err(Error::Backend {
                status: 500,
                description,
            }),
            None => Ok(()),
        }
    }
}

impl BackendApi for MockBackend {
    fn email_template_types(&self) -> Result<Vec<EmailTemplateType>> {
        *self.list_calls.lock().expect("lock") += 1;
        Ok(self.template_types.lock().expect("lock").clone())
    }

    fn create_email_template_type(
        &self,
        request: &NewEmailTemplateType,
    ) -> Result<EmailTemplateType> {
        self.check_failure()?;
        let created = EmailTemplateType {
            id: format!("id-{}", request.display_name),
            display_name: request.display_name.clone(),
            templates: Vec::new(),
        };
        self.template_types
            .lock()
            .expect("lock")
            .push(created.clone());
        Ok(created)
    }

    fn delete_email_template_type(&self, type_id: &str) -> Result<()> {
        self.check_failure()?;
        self.template_types
            .lock()
            .expect("lock")
            .retain(|t| t.id != type_id);
        Ok(())
    }

    fn email_template(&self, type_id: &str, template_id: &str) -> Result<EmailTemplate> {
        self.templates
            .lock()
            .expect("lock")
            .iter()
            .find(|(t, template)| t == type_id && template.id == template_id)
            .map(|(_, template)| template.clone())
            .ok_or(Error::Backend {
                status: 404,
                description: Some("Template not found".to_string()),
            })
    }

    fn identity_provider(&self, idp_id: &str) -> Result<IdentityProvider> {
        self.identity_providers
            .lock()
            .expect("lock")
            .iter()
            .find(|idp| idp.id.as_deref() == Some(idp_id))
            .cloned()
            .ok_or(Error::Backend {
                status: 404,
                description: None,
            })
    }

    fn create_identity_provider(&self, idp: &IdentityProvider) -> Result<IdentityProvider> {
        self.check_failure()?;
        let mut created = idp.clone();
        created.id = Some(format!("idp-{}", idp.name));
        self.identity_providers
            .lock()
            .expect("lock")
            .push(created.clone());
        Ok(created)
    }

    fn update_identity_provider(&self, idp: &IdentityProvider) -> Result<()> {
        self.check_failure()?;
        let mut providers = self.identity_providers.lock().expect("lock");
        if let Some(existing) = providers.iter_mut().find(|p| p.id == idp.id) {
            *existing = idp.clone();
        }
        Ok(())
    }

    fn delete_identity_provider(&self, idp_id: &str) -> Result<()> {
        self.check_failure()?;
        self.identity_providers
            .lock()
            .expect("lock")
            .retain(|p| p.id.as_deref() != Some(idp_id));
        Ok(())
    }
}
