//! Questionnaire / Intake
//!
//! Structured project answers collected after the free-text description.
//! The answers derive the ordered list of service categories the wizard
//! shows vendors for.

use serde::{Deserialize, Serialize};

use super::delivery::DeliveryTime;
use super::entity::{DomainError, DomainResult};

/// Kind of project being built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    #[default]
    NewHome,
    GuestHouse,
    Renovation,
    Commercial,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::NewHome,
        ProjectType::GuestHouse,
        ProjectType::Renovation,
        ProjectType::Commercial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::NewHome => "New home",
            ProjectType::GuestHouse => "Guest house / extension",
            ProjectType::Renovation => "Renovation",
            ProjectType::Commercial => "Commercial building",
        }
    }
}

/// Optional extras that each pull in a specialist category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectFeature {
    Pool,
    Garden,
    SmartWiring,
    Hvac,
    Furnishing,
    Lighting,
}

impl ProjectFeature {
    pub const ALL: [ProjectFeature; 6] = [
        ProjectFeature::Pool,
        ProjectFeature::Garden,
        ProjectFeature::SmartWiring,
        ProjectFeature::Hvac,
        ProjectFeature::Furnishing,
        ProjectFeature::Lighting,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFeature::Pool => "Pool",
            ProjectFeature::Garden => "Garden / landscaping",
            ProjectFeature::SmartWiring => "Smart wiring",
            ProjectFeature::Hvac => "Heating & cooling",
            ProjectFeature::Furnishing => "Furniture",
            ProjectFeature::Lighting => "Lighting & fixtures",
        }
    }

    /// Service category this feature requires
    pub fn category(&self) -> &'static str {
        match self {
            ProjectFeature::Pool => "Pool Construction",
            ProjectFeature::Garden => "Landscaping",
            ProjectFeature::SmartWiring => "Electrical",
            ProjectFeature::Hvac => "Mechanical",
            ProjectFeature::Furnishing => "Furniture",
            ProjectFeature::Lighting => "Lighting and Fixtures",
        }
    }
}

/// Answers to the follow-up questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IntakeAnswers {
    pub project_type: ProjectType,
    /// The client already owns a plot (skips Real Estate)
    pub owns_land: bool,
    /// Needs permits / contracts reviewed
    pub needs_legal: bool,
    pub features: Vec<ProjectFeature>,
    pub delivery_time: DeliveryTime,
    /// Free-text budget, e.g. "$400k"
    pub budget: Option<String>,
}

impl IntakeAnswers {
    /// Ordered service categories required by these answers
    pub fn service_groups(&self) -> Vec<String> {
        let mut groups: Vec<&str> = Vec::new();

        if !self.owns_land && self.project_type != ProjectType::Renovation {
            groups.push("Real Estate");
        }
        if self.project_type != ProjectType::Renovation {
            groups.push("Architecture Firm");
        }
        groups.push("Construction");
        if self.needs_legal || self.project_type == ProjectType::Commercial {
            groups.push("Lawyer");
        }
        for feature in ProjectFeature::ALL {
            if self.features.contains(&feature) {
                groups.push(feature.category());
            }
        }

        groups.into_iter().map(String::from).collect()
    }

    /// Package the answers as an opaque form payload plus derived categories
    pub fn into_submission(self) -> IntakeSubmission {
        let service_groups = self.service_groups();
        let mut form_data = serde_json::to_value(&self).unwrap_or_else(|_| serde_json::json!({}));
        if let Some(obj) = form_data.as_object_mut() {
            obj.insert("service_groups".to_string(), serde_json::json!(service_groups));
        }
        IntakeSubmission { form_data, service_groups }
    }
}

/// Completed intake handed to the wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeSubmission {
    /// Opaque structured answers, carried into every ticket
    pub form_data: serde_json::Value,
    pub service_groups: Vec<String>,
}

impl IntakeSubmission {
    /// Check completeness and normalise the category list (trimmed, de-duplicated,
    /// first occurrence wins).
    pub fn validated(self) -> DomainResult<IntakeSubmission> {
        if !self.form_data.is_object() {
            return Err(DomainError::InvalidInput(
                "Questionnaire answers are malformed".to_string(),
            ));
        }

        let mut groups: Vec<String> = Vec::with_capacity(self.service_groups.len());
        for label in self.service_groups {
            let label = label.trim();
            if !label.is_empty() && !groups.iter().any(|g| g == label) {
                groups.push(label.to_string());
            }
        }
        if groups.is_empty() {
            return Err(DomainError::InvalidInput(
                "At least one service category is required".to_string(),
            ));
        }

        Ok(IntakeSubmission {
            form_data: self.form_data,
            service_groups: groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_home_with_garden() {
        let answers = IntakeAnswers {
            features: vec![ProjectFeature::Garden, ProjectFeature::Pool],
            ..Default::default()
        };
        assert_eq!(
            answers.service_groups(),
            ["Real Estate", "Architecture Firm", "Construction", "Pool Construction", "Landscaping"]
        );
    }

    #[test]
    fn test_renovation_skips_land_and_design() {
        let answers = IntakeAnswers {
            project_type: ProjectType::Renovation,
            features: vec![ProjectFeature::Lighting],
            ..Default::default()
        };
        assert_eq!(answers.service_groups(), ["Construction", "Lighting and Fixtures"]);
    }

    #[test]
    fn test_commercial_always_needs_lawyer() {
        let answers = IntakeAnswers {
            project_type: ProjectType::Commercial,
            owns_land: true,
            ..Default::default()
        };
        assert_eq!(answers.service_groups(), ["Architecture Firm", "Construction", "Lawyer"]);
    }

    #[test]
    fn test_submission_embeds_groups_in_form_data() {
        let submission = IntakeAnswers::default().into_submission();
        assert_eq!(submission.form_data["service_groups"][0], "Real Estate");
        assert_eq!(submission.form_data["delivery_time"], "under_one_month");
    }

    #[test]
    fn test_validation_normalises_groups() {
        let submission = IntakeSubmission {
            form_data: serde_json::json!({}),
            service_groups: vec![" Construction ".into(), "".into(), "Construction".into(), "Lawyer".into()],
        };
        let ok = submission.validated().unwrap();
        assert_eq!(ok.service_groups, ["Construction", "Lawyer"]);
    }

    #[test]
    fn test_validation_rejects_incomplete_intake() {
        let empty = IntakeSubmission {
            form_data: serde_json::json!({}),
            service_groups: vec!["  ".into()],
        };
        assert!(matches!(empty.validated(), Err(DomainError::InvalidInput(_))));

        let malformed = IntakeSubmission {
            form_data: serde_json::json!("not an object"),
            service_groups: vec!["Construction".into()],
        };
        assert!(matches!(malformed.validated(), Err(DomainError::InvalidInput(_))));
    }
}
