//! Wizard State Machine
//!
//! initial -> questionnaire -> services, strictly forward, plus an
//! unconditional reset back to initial. Navigating to the ticket dashboard
//! is not a wizard state.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult};
use super::intake::IntakeSubmission;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Initial,
    Questionnaire,
    Services,
}

impl WizardStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Initial => "initial",
            WizardStep::Questionnaire => "questionnaire",
            WizardStep::Services => "services",
        }
    }
}

/// Everything the client has told us about the project so far
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProjectData {
    pub description: String,
    /// Opaque questionnaire answers
    pub form_data: Option<serde_json::Value>,
    pub service_groups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wizard {
    step: WizardStep,
    project: ProjectData,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn project(&self) -> &ProjectData {
        &self.project
    }

    /// initial -> questionnaire; the description must not be blank
    pub fn submit_description(&mut self, description: &str) -> DomainResult<WizardStep> {
        self.expect_step(WizardStep::Initial)?;
        let description = description.trim();
        if description.is_empty() {
            return Err(DomainError::InvalidInput(
                "Please describe your project first".to_string(),
            ));
        }

        self.project.description = description.to_string();
        self.step = WizardStep::Questionnaire;
        Ok(self.step)
    }

    /// questionnaire -> services; the intake must be complete
    pub fn complete_intake(&mut self, submission: IntakeSubmission) -> DomainResult<WizardStep> {
        self.expect_step(WizardStep::Questionnaire)?;
        let submission = submission.validated()?;

        self.project.form_data = Some(submission.form_data);
        self.project.service_groups = submission.service_groups;
        self.step = WizardStep::Services;
        Ok(self.step)
    }

    /// Back to initial with empty project data, from any step
    pub fn reset(&mut self) {
        self.step = WizardStep::Initial;
        self.project = ProjectData::default();
    }

    pub fn has_group(&self, group_name: &str) -> bool {
        self.project.service_groups.iter().any(|g| g == group_name)
    }

    fn expect_step(&self, expected: WizardStep) -> DomainResult<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(DomainError::InvalidInput(format!(
                "Wizard is at '{}', expected '{}'",
                self.step.as_str(),
                expected.as_str()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intake(groups: &[&str]) -> IntakeSubmission {
        IntakeSubmission {
            form_data: serde_json::json!({ "project_type": "new_home" }),
            service_groups: groups.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn test_forward_transitions() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.step(), WizardStep::Initial);

        assert_eq!(
            wizard.submit_description("  3 bedroom house with garden ").unwrap(),
            WizardStep::Questionnaire
        );
        assert_eq!(wizard.project().description, "3 bedroom house with garden");

        assert_eq!(
            wizard.complete_intake(intake(&["Real Estate", "Construction"])).unwrap(),
            WizardStep::Services
        );
        assert_eq!(wizard.project().service_groups, ["Real Estate", "Construction"]);
        assert!(wizard.has_group("Construction"));
    }

    #[test]
    fn test_blank_description_blocks_transition() {
        let mut wizard = Wizard::new();
        assert!(matches!(wizard.submit_description("   \n"), Err(DomainError::InvalidInput(_))));
        assert_eq!(wizard.step(), WizardStep::Initial);
    }

    #[test]
    fn test_no_skipping_or_going_back() {
        let mut wizard = Wizard::new();
        assert!(wizard.complete_intake(intake(&["Construction"])).is_err());

        wizard.submit_description("Pool").unwrap();
        assert!(wizard.submit_description("Again").is_err());
        assert_eq!(wizard.step(), WizardStep::Questionnaire);
    }

    #[test]
    fn test_incomplete_intake_keeps_questionnaire() {
        let mut wizard = Wizard::new();
        wizard.submit_description("Office").unwrap();
        assert!(wizard.complete_intake(intake(&[])).is_err());
        assert_eq!(wizard.step(), WizardStep::Questionnaire);
        assert!(wizard.project().form_data.is_none());
    }

    #[test]
    fn test_reset_from_any_step() {
        let mut wizard = Wizard::new();
        wizard.reset();
        assert_eq!(wizard, Wizard::new());

        wizard.submit_description("Guest house").unwrap();
        wizard.complete_intake(intake(&["Construction"])).unwrap();
        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::Initial);
        assert_eq!(wizard.project(), &ProjectData::default());
    }
}
