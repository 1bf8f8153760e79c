//! Email template type creation wizard

use crate::domain::email_template::NewEmailTemplateType;
use crate::error::{Error, Result};
use crate::states::Wizard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateTypeWizardStep {
    BasicDetails { display_name: String },
    Summary,
}

#[derive(Debug, Clone)]
pub struct TemplateTypeWizard {
    wizard: Wizard<TemplateTypeWizardStep>,
}

impl TemplateTypeWizard {
    pub fn new() -> Self {
        Self {
            wizard: Wizard::from_steps(
                TemplateTypeWizardStep::BasicDetails {
                    display_name: String::new(),
                },
                [TemplateTypeWizardStep::Summary],
            ),
        }
    }

    pub fn wizard(&self) -> &Wizard<TemplateTypeWizardStep> {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard<TemplateTypeWizardStep> {
        &mut self.wizard
    }

    pub fn display_name(&self) -> &str {
        self.wizard
            .steps()
            .iter()
            .find_map(|step| match step {
                TemplateTypeWizardStep::BasicDetails { display_name } => {
                    Some(display_name.as_str())
                }
                TemplateTypeWizardStep::Summary => None,
            })
            .unwrap_or_default()
    }

    /// Submit the basic details form and move on to the summary
    pub fn submit_basic_details(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::Invalid {
                message: "Template type name is required".to_string(),
            });
        }
        self.wizard.go_to(0)?;
        if let TemplateTypeWizardStep::BasicDetails { display_name } = self.wizard.current_mut() {
            *display_name = name.trim().to_string();
        }
        self.wizard.next();
        Ok(())
    }

    /// Build the creation request. Only valid from the summary step.
    pub fn finish(&self) -> Result<NewEmailTemplateType> {
        if !self.wizard.is_last() {
            return Err(Error::Invalid {
                message: "Wizard is not on its final step".to_string(),
            });
        }
        let display_name = self.display_name();
        if display_name.is_empty() {
            return Err(Error::Invalid {
                message: "Template type name is required".to_string(),
            });
        }
        Ok(NewEmailTemplateType {
            display_name: display_name.to_string(),
            templates: Vec::new(),
        })
    }
}

impl Default for TemplateTypeWizard {
    fn default() -> Self {
        Self::new()
    }
}
