//! Identity provider creation wizard
//!
//! General details → authenticator settings → summary. Each step holds its
//! own form values; [`IdentityProviderWizard::finish`] folds them into the
//! provider built from the chosen template.

use crate::domain::identity_provider::{FederatedAuthenticator, IdentityProvider};
use crate::error::{Error, Result};
use crate::states::Wizard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdpWizardStep {
    GeneralDetails {
        name: String,
        description: Option<String>,
        image: Option<String>,
    },
    AuthenticatorSettings(FederatedAuthenticator),
    Summary,
}

#[derive(Debug, Clone)]
pub struct IdentityProviderWizard {
    initial: IdentityProvider,
    wizard: Wizard<IdpWizardStep>,
}

impl IdentityProviderWizard {
    /// Start a wizard pre-filled from a provider template
    pub fn new(template: IdentityProvider) -> Self {
        let authenticator = template.default_authenticator().cloned().unwrap_or_default();
        let wizard = Wizard::from_steps(
            IdpWizardStep::GeneralDetails {
                name: template.name.clone(),
                description: template.description.clone(),
                image: template.image.clone(),
            },
            [
                IdpWizardStep::AuthenticatorSettings(authenticator),
                IdpWizardStep::Summary,
            ],
        );
        Self {
            initial: template,
            wizard,
        }
    }

    pub fn wizard(&self) -> &Wizard<IdpWizardStep> {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard<IdpWizardStep> {
        &mut self.wizard
    }

    /// Initial value for the authenticator form
    pub fn initial_authenticator(&self) -> Option<&FederatedAuthenticator> {
        self.initial.default_authenticator()
    }

    pub fn submit_general_details(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        image: Option<String>,
    ) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::Invalid {
                message: "Identity provider name is required".to_string(),
            });
        }
        self.wizard.go_to(0)?;
        *self.wizard.current_mut() = IdpWizardStep::GeneralDetails {
            name: name.trim().to_string(),
            description,
            image,
        };
        self.wizard.next();
        Ok(())
    }

    pub fn submit_authenticator(&mut self, authenticator: FederatedAuthenticator) -> Result<()> {
        self.wizard.go_to(1)?;
        *self.wizard.current_mut() = IdpWizardStep::AuthenticatorSettings(authenticator);
        self.wizard.next();
        Ok(())
    }

    /// Assemble the provider. Only valid from the summary step.
    pub fn finish(&self) -> Result<IdentityProvider> {
        if !self.wizard.is_last() {
            return Err(Error::Invalid {
                message: "Wizard is not on its final step".to_string(),
            });
        }

        let mut idp = self.initial.clone();
        for step in self.wizard.steps() {
            match step {
                IdpWizardStep::GeneralDetails {
                    name,
                    description,
                    image,
                } => {
                    idp.name = name.clone();
                    idp.description = description.clone();
                    idp.image = image.clone();
                }
                IdpWizardStep::AuthenticatorSettings(authenticator) => {
                    idp.apply_authenticator(authenticator.clone());
                }
                IdpWizardStep::Summary => {}
            }
        }

        if idp.name.trim().is_empty() {
            return Err(Error::Invalid {
                message: "Identity provider name is required".to_string(),
            });
        }
        Ok(idp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity_provider::{FederatedAuthenticators, Property};

    fn facebook_template() -> IdentityProvider {
        IdentityProvider {
            name: String::new(),
            is_enabled: true,
            federated_authenticators: FederatedAuthenticators {
                default_authenticator_id: Some("RmFjZWJvb2s".to_string()),
                authenticators: vec![FederatedAuthenticator {
                    authenticator_id: "RmFjZWJvb2s".to_string(),
                    name: "FacebookAuthenticator".to_string(),
                    ..Default::default()
                }],
            },
            ..Default::default()
        }
    }

    #[test]
    fn authenticator_step_starts_from_default_authenticator() {
        let wizard = IdentityProviderWizard::new(facebook_template());
        match &wizard.wizard().steps()[1] {
            IdpWizardStep::AuthenticatorSettings(a) => assert_eq!(a.name, "FacebookAuthenticator"),
            other => panic!("unexpected step {other:?}"),
        }
        assert!(wizard.initial_authenticator().is_some());
    }

    #[test]
    fn full_flow_builds_provider() {
        let mut wizard = IdentityProviderWizard::new(facebook_template());
        wizard
            .submit_general_details("Facebook", Some("Social login".to_string()), None)
            .expect("valid details");
        wizard
            .submit_authenticator(FederatedAuthenticator {
                authenticator_id: "RmFjZWJvb2s".to_string(),
                name: "FacebookAuthenticator".to_string(),
                properties: vec![Property {
                    key: "ClientId".to_string(),
                    value: "fb-client".to_string(),
                }],
                ..Default::default()
            })
            .expect("authenticator");

        let idp = wizard.finish().expect("complete");
        assert_eq!(idp.name, "Facebook");
        assert_eq!(idp.description.as_deref(), Some("Social login"));

        let authenticators = &idp.federated_authenticators.authenticators;
        assert_eq!(authenticators.len(), 1);
        assert!(authenticators[0].is_default && authenticators[0].is_enabled);
        assert_eq!(authenticators[0].properties[0].value, "fb-client");
        assert_eq!(
            idp.federated_authenticators.default_authenticator_id.as_deref(),
            Some("RmFjZWJvb2s")
        );
    }

    #[test]
    fn finish_before_summary_fails() {
        let mut wizard = IdentityProviderWizard::new(facebook_template());
        wizard
            .submit_general_details("Facebook", None, None)
            .expect("valid details");
        assert!(wizard.finish().is_err());
    }

    #[test]
    fn blank_name_never_finishes() {
        let mut wizard = IdentityProviderWizard::new(facebook_template());
        assert!(wizard.submit_general_details(" ", None, None).is_err());

        wizard.wizard_mut().go_to(2).expect("summary");
        assert!(matches!(wizard.finish(), Err(Error::Invalid { .. })));
    }
}
