//! Backend API
//!
//! The resource operations the console needs from an identity server.
//! Every call is synchronous and returns fully resolved data.

use crate::domain::email_template::{EmailTemplate, EmailTemplateType, NewEmailTemplateType};
use crate::domain::identity_provider::IdentityProvider;
use crate::error::Result;

pub const EMAIL_TEMPLATE_TYPES_PATH: &str = "/api/server/v1/email/template-types";
pub const IDENTITY_PROVIDERS_PATH: &str = "/api/server/v1/identity-providers";

pub trait BackendApi: Send + Sync {
    /// List every email template type
    fn email_template_types(&self) -> Result<Vec<EmailTemplateType>>;

    fn create_email_template_type(&self, request: &NewEmailTemplateType)
    -> Result<EmailTemplateType>;

    fn delete_email_template_type(&self, type_id: &str) -> Result<()>;

    /// Fetch one locale template of a template type
    fn email_template(&self, type_id: &str, template_id: &str) -> Result<EmailTemplate>;

    fn identity_provider(&self, idp_id: &str) -> Result<IdentityProvider>;

    fn create_identity_provider(&self, idp: &IdentityProvider) -> Result<IdentityProvider>;

    /// Push the general details (name, description, enabled flag, image)
    fn update_identity_provider(&self, idp: &IdentityProvider) -> Result<()>;

    fn delete_identity_provider(&self, idp_id: &str) -> Result<()>;
}
