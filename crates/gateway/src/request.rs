//! Wire mapping from a validated draft to the creation request.

use serde::Serialize;
use validator::Validate;

use crewhub_core::draft::{Difficulty, ProjectDraft, TeamSize};

/// Lifecycle status stamped on every newly posted project.
pub const STATUS_ACTIVE: &str = "ACTIVE";

/// Body of `POST /projects`, in the casing the service expects.
///
/// Field names are camelCase on the wire; `difficulty` is uppercased to
/// the service's enum casing while `budget` and `contactMethod` stay
/// lowercase. Optional free-text and list fields are omitted when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub tech_stack: Vec<String>,
    pub team_size: TeamSize,
    #[validate(length(min = 1))]
    pub duration: String,
    pub difficulty: String,
    pub budget: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<String>>,
    pub is_remote: bool,
    pub is_open_source: bool,
    pub contact_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    pub status: String,
}

/// Wire value for the difficulty enum (the service stores uppercase).
fn difficulty_wire(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "BEGINNER",
        Difficulty::Intermediate => "INTERMEDIATE",
        Difficulty::Advanced => "ADVANCED",
    }
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn optional_list(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

impl CreateProjectRequest {
    /// Normalize a draft into the creation request.
    ///
    /// The draft is assumed to have passed all step validators; this
    /// mapping only renames, re-cases, and drops empty optionals.
    pub fn from_draft(draft: &ProjectDraft) -> Self {
        Self {
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            category: draft.category.clone(),
            tech_stack: draft.tech_stack.clone(),
            team_size: draft.team_size,
            duration: draft.duration.clone(),
            difficulty: difficulty_wire(draft.difficulty).to_string(),
            budget: draft.budget.as_str().to_string(),
            timeline: optional_text(&draft.timeline),
            requirements: optional_list(&draft.requirements),
            goals: optional_list(&draft.goals),
            is_remote: draft.is_remote,
            is_open_source: draft.is_open_source,
            contact_method: draft.contact_method.as_str().to_string(),
            additional_info: optional_text(&draft.additional_info),
            status: STATUS_ACTIVE.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crewhub_core::draft::{Budget, ContactMethod};
    use validator::Validate;

    fn filled_draft() -> ProjectDraft {
        ProjectDraft {
            title: "Build X".into(),
            description: "A tool".into(),
            category: "Frontend".into(),
            tech_stack: vec!["React".into()],
            duration: "1 month".into(),
            team_size: TeamSize { min: 1, max: 1 },
            ..ProjectDraft::default()
        }
    }

    // -- mapping --

    #[test]
    fn difficulty_is_uppercased_on_the_wire() {
        let request = CreateProjectRequest::from_draft(&filled_draft());
        assert_eq!(request.difficulty, "INTERMEDIATE");
    }

    #[test]
    fn budget_and_contact_method_stay_lowercase() {
        let mut draft = filled_draft();
        draft.budget = Budget::Equity;
        draft.contact_method = ContactMethod::Discord;
        let request = CreateProjectRequest::from_draft(&draft);
        assert_eq!(request.budget, "equity");
        assert_eq!(request.contact_method, "discord");
    }

    #[test]
    fn empty_optionals_are_dropped() {
        let request = CreateProjectRequest::from_draft(&filled_draft());
        assert!(request.timeline.is_none());
        assert!(request.requirements.is_none());
        assert!(request.goals.is_none());
        assert!(request.additional_info.is_none());
    }

    #[test]
    fn populated_optionals_are_carried() {
        let mut draft = filled_draft();
        draft.timeline = "Q3 kickoff".into();
        draft.requirements = vec!["Git experience".into()];
        let request = CreateProjectRequest::from_draft(&draft);
        assert_eq!(request.timeline.as_deref(), Some("Q3 kickoff"));
        assert_eq!(
            request.requirements.as_deref(),
            Some(&["Git experience".to_string()][..])
        );
    }

    #[test]
    fn title_and_description_are_trimmed() {
        let mut draft = filled_draft();
        draft.title = "  Build X  ".into();
        let request = CreateProjectRequest::from_draft(&draft);
        assert_eq!(request.title, "Build X");
    }

    // -- wire shape --

    #[test]
    fn serializes_camel_case_field_names() {
        let request = CreateProjectRequest::from_draft(&filled_draft());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["techStack"][0], "React");
        assert_eq!(json["teamSize"]["min"], 1);
        assert_eq!(json["isRemote"], true);
        assert_eq!(json["contactMethod"], "platform");
        assert_eq!(json["status"], "ACTIVE");
        // Dropped optionals must be absent, not null.
        assert!(json.get("timeline").is_none());
    }

    // -- local validation backstop --

    #[test]
    fn request_from_valid_draft_passes_validation() {
        let request = CreateProjectRequest::from_draft(&filled_draft());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn request_with_empty_required_field_fails_validation() {
        let mut request = CreateProjectRequest::from_draft(&filled_draft());
        request.title.clear();
        assert!(request.validate().is_err());
    }
}
