//! Identity Provider Settings Controller
//!
//! Create, update and delete with user-facing alerts. Providers listed in
//! the configured do-not-delete set are refused before any backend call.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::alert::Alert;
use crate::domain::identity_provider::IdentityProvider;
use crate::error::{Error, Result};
use crate::eventing::AlertSink;
use crate::features::describe;
use crate::features::identity_providers::IdentityProviderWizard;
use crate::services::BackendApi;

pub struct IdentityProviderSettingsController {
    backend: Arc<dyn BackendApi>,
    alerts: Arc<dyn AlertSink>,
    protected_names: HashSet<String>,
}

impl IdentityProviderSettingsController {
    pub fn new(
        backend: Arc<dyn BackendApi>,
        alerts: Arc<dyn AlertSink>,
        protected_names: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            backend,
            alerts,
            protected_names: protected_names.into_iter().collect(),
        }
    }

    /// Whether the danger zone (delete) is offered for this provider
    pub fn can_delete(&self, name: &str) -> bool {
        !self.protected_names.contains(name)
    }

    pub fn load(&self, idp_id: &str) -> Result<IdentityProvider> {
        self.backend.identity_provider(idp_id)
    }

    pub fn delete(&self, idp: &IdentityProvider) -> Result<()> {
        if !self.can_delete(&idp.name) {
            return Err(Error::Invalid {
                message: format!("Identity provider '{}' cannot be deleted", idp.name),
            });
        }
        let id = require_id(idp)?;

        match self.backend.delete_identity_provider(id) {
            Ok(()) => {
                tracing::info!(idp_id = id, name = %idp.name, "Identity provider deleted");
                self.alerts.add_alert(Alert::success(
                    "Delete successful",
                    "Successfully deleted the identity provider",
                ));
                Ok(())
            }
            Err(e) => {
                tracing::error!(idp_id = id, error = %e, "Failed to delete identity provider");
                self.alerts.add_alert(Alert::error(
                    "Identity Provider Delete Error",
                    describe(&e, "An error occurred while deleting the identity provider"),
                ));
                Err(e)
            }
        }
    }

    /// Push edited general details
    pub fn update(&self, idp: &IdentityProvider) -> Result<()> {
        let id = require_id(idp)?;

        match self.backend.update_identity_provider(idp) {
            Ok(()) => {
                tracing::info!(idp_id = id, "Identity provider updated");
                self.alerts.add_alert(Alert::success(
                    "Update successful",
                    "Successfully updated the identity provider",
                ));
                Ok(())
            }
            Err(e) => {
                tracing::error!(idp_id = id, error = %e, "Failed to update identity provider");
                self.alerts.add_alert(Alert::error(
                    "Update Error",
                    describe(&e, "An error occurred while updating the identity provider"),
                ));
                Err(e)
            }
        }
    }

    pub fn create(&self, wizard: &IdentityProviderWizard) -> Result<IdentityProvider> {
        let idp = wizard.finish()?;

        match self.backend.create_identity_provider(&idp) {
            Ok(created) => {
                tracing::info!(idp_id = ?created.id, name = %created.name, "Identity provider created");
                self.alerts.add_alert(Alert::success(
                    "Create successful",
                    "Successfully created the identity provider",
                ));
                Ok(created)
            }
            Err(e) => {
                tracing::error!(name = %idp.name, error = %e, "Failed to create identity provider");
                self.alerts.add_alert(Alert::error(
                    "Identity Provider Create Error",
                    describe(&e, "An error occurred while creating the identity provider"),
                ));
                Err(e)
            }
        }
    }
}

fn require_id(idp: &IdentityProvider) -> Result<&str> {
    idp.id.as_deref().ok_or_else(|| Error::Invalid {
        message: format!("Identity provider '{}' has no ID", idp.name),
    })
}
