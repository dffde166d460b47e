//! Per-step validation rules for the submission wizard.
//!
//! [`validate_step`] is a pure function over the draft: no side effects,
//! deterministic, and scoped to the fields the given step owns, so moving
//! backward never resurfaces a forward step's errors. The controller
//! consults it on forward transitions and on submit.

use std::collections::BTreeMap;

use crate::catalog::is_valid_duration;
use crate::draft::{
    ProjectDraft, FIELD_CATEGORY, FIELD_DESCRIPTION, FIELD_DURATION, FIELD_TEAM_SIZE_MAX,
    FIELD_TEAM_SIZE_MIN, FIELD_TECH_STACK, FIELD_TITLE,
};
use crate::steps::WizardStep;

/// Field-error map keyed by the draft field identifiers in
/// [`crate::draft`]. `BTreeMap` keeps iteration order stable for
/// rendering and assertions.
pub type FieldErrors = BTreeMap<String, String>;

/// Validate the fields owned by `step`.
///
/// Returns an empty map when the step's gate is satisfied. The terminal
/// step has no blocking rules.
pub fn validate_step(step: WizardStep, draft: &ProjectDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match step {
        WizardStep::Basics => {
            if draft.title.trim().is_empty() {
                errors.insert(FIELD_TITLE.into(), "Project title is required".into());
            }
            if draft.description.trim().is_empty() {
                errors.insert(
                    FIELD_DESCRIPTION.into(),
                    "Project description is required".into(),
                );
            }
            if draft.category.is_empty() {
                errors.insert(FIELD_CATEGORY.into(), "Please select a category".into());
            }
        }
        WizardStep::Technical => {
            if draft.tech_stack.is_empty() {
                errors.insert(
                    FIELD_TECH_STACK.into(),
                    "Please select at least one technology".into(),
                );
            }
            if draft.duration.is_empty() {
                errors.insert(FIELD_DURATION.into(), "Project duration is required".into());
            } else if !is_valid_duration(&draft.duration) {
                errors.insert(
                    FIELD_DURATION.into(),
                    "Please select a valid project duration".into(),
                );
            }
        }
        WizardStep::Team => {
            if draft.team_size.min < 1 {
                errors.insert(
                    FIELD_TEAM_SIZE_MIN.into(),
                    "Minimum team size must be at least 1".into(),
                );
            }
            if draft.team_size.max < draft.team_size.min {
                errors.insert(
                    FIELD_TEAM_SIZE_MAX.into(),
                    "Maximum team size cannot be less than the minimum".into(),
                );
            }
        }
        WizardStep::Goals => {}
    }

    errors
}

/// `true` when `step`'s forward gate is satisfied for `draft`.
pub fn can_advance(step: WizardStep, draft: &ProjectDraft) -> bool {
    validate_step(step, draft).is_empty()
}

/// Validate every step of the wizard at once.
///
/// Used as the submission precondition: a draft that reached the terminal
/// step through the gated `next()` path always passes.
pub fn validate_draft(draft: &ProjectDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for step in [
        WizardStep::Basics,
        WizardStep::Technical,
        WizardStep::Team,
        WizardStep::Goals,
    ] {
        errors.extend(validate_step(step, draft));
    }
    errors
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::TeamSize;

    /// Draft satisfying every step's gate.
    fn valid_draft() -> ProjectDraft {
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

    // -- step 1: basics --

    #[test]
    fn empty_draft_fails_basics_on_all_three_fields() {
        let errors = validate_step(WizardStep::Basics, &ProjectDraft::default());
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("description"));
        assert!(errors.contains_key("category"));
    }

    #[test]
    fn whitespace_only_title_and_description_are_rejected() {
        let draft = ProjectDraft {
            title: "   ".into(),
            description: "\t\n".into(),
            category: "Frontend".into(),
            ..ProjectDraft::default()
        };
        let errors = validate_step(WizardStep::Basics, &draft);
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("description"));
        assert!(!errors.contains_key("category"));
    }

    #[test]
    fn complete_basics_pass() {
        assert!(validate_step(WizardStep::Basics, &valid_draft()).is_empty());
    }

    // -- step 2: technical --

    #[test]
    fn technical_requires_at_least_one_technology() {
        let mut draft = valid_draft();
        draft.tech_stack.clear();
        let errors = validate_step(WizardStep::Technical, &draft);
        assert_eq!(
            errors.get("techStack").map(String::as_str),
            Some("Please select at least one technology")
        );
    }

    #[test]
    fn technical_requires_a_duration_selection() {
        let mut draft = valid_draft();
        draft.duration.clear();
        let errors = validate_step(WizardStep::Technical, &draft);
        assert!(errors.contains_key("duration"));
    }

    #[test]
    fn technical_rejects_durations_outside_the_vocabulary() {
        let mut draft = valid_draft();
        draft.duration = "2 years".into();
        let errors = validate_step(WizardStep::Technical, &draft);
        assert!(errors.contains_key("duration"));
    }

    // -- step 3: team --

    #[test]
    fn zero_minimum_team_size_is_rejected() {
        let mut draft = valid_draft();
        draft.team_size = TeamSize { min: 0, max: 3 };
        let errors = validate_step(WizardStep::Team, &draft);
        assert!(errors.contains_key("teamSizeMin"));
        assert!(!errors.contains_key("teamSizeMax"));
    }

    #[test]
    fn inverted_team_range_sets_team_size_max() {
        let mut draft = valid_draft();
        draft.team_size = TeamSize { min: 3, max: 2 };
        let errors = validate_step(WizardStep::Team, &draft);
        assert!(errors.contains_key("teamSizeMax"));
        assert!(!errors.contains_key("teamSizeMin"));
    }

    #[test]
    fn single_member_team_is_valid() {
        let mut draft = valid_draft();
        draft.team_size = TeamSize { min: 1, max: 1 };
        assert!(validate_step(WizardStep::Team, &draft).is_empty());
    }

    // -- step 4: goals --

    #[test]
    fn terminal_step_has_no_blocking_rules() {
        assert!(validate_step(WizardStep::Goals, &ProjectDraft::default()).is_empty());
    }

    // -- scoping --

    #[test]
    fn steps_report_only_their_own_fields() {
        // Draft failing every gate: step 3 must not mention step 1 fields.
        let draft = ProjectDraft {
            team_size: TeamSize { min: 0, max: 0 },
            ..ProjectDraft::default()
        };
        let errors = validate_step(WizardStep::Team, &draft);
        assert!(!errors.contains_key("title"));
        assert!(!errors.contains_key("techStack"));
        assert!(errors.contains_key("teamSizeMin"));
    }

    // -- whole draft --

    #[test]
    fn validate_draft_merges_all_steps() {
        let draft = ProjectDraft {
            team_size: TeamSize { min: 0, max: 0 },
            ..ProjectDraft::default()
        };
        let errors = validate_draft(&draft);
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("techStack"));
        assert!(errors.contains_key("teamSizeMin"));
    }

    #[test]
    fn validate_draft_passes_for_a_complete_draft() {
        assert!(validate_draft(&valid_draft()).is_empty());
    }

    #[test]
    fn can_advance_mirrors_validate_step() {
        assert!(can_advance(WizardStep::Basics, &valid_draft()));
        assert!(!can_advance(WizardStep::Basics, &ProjectDraft::default()));
    }
}
