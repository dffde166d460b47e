//! Pure presentation data derived from wizard state.
//!
//! The step indicator and the submission preview carry no logic of their
//! own: both are deterministic projections of the controller's state that
//! a view layer renders as-is.

use serde::Serialize;

use crate::draft::ProjectDraft;
use crate::steps::WizardStep;

/// Display cap for technologies in the preview card.
pub const PREVIEW_TECH_LIMIT: usize = 5;

// ---------------------------------------------------------------------------
// Step indicator
// ---------------------------------------------------------------------------

/// Visual state of one step marker in the indicator strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMarker {
    /// Behind the current position; rendered as a checkmark.
    Complete,
    /// The active step.
    Current,
    /// Ahead of the current position.
    Upcoming,
}

/// One entry in the indicator strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndicatorEntry {
    pub step: WizardStep,
    pub marker: StepMarker,
}

/// Marker states for all four steps given the current position.
pub fn step_markers(current: WizardStep) -> Vec<IndicatorEntry> {
    let position = current.to_number();
    [
        WizardStep::Basics,
        WizardStep::Technical,
        WizardStep::Team,
        WizardStep::Goals,
    ]
    .into_iter()
    .map(|step| {
        let n = step.to_number();
        let marker = if n < position {
            StepMarker::Complete
        } else if n == position {
            StepMarker::Current
        } else {
            StepMarker::Upcoming
        };
        IndicatorEntry { step, marker }
    })
    .collect()
}

// ---------------------------------------------------------------------------
// Submission preview
// ---------------------------------------------------------------------------

/// Read-only preview card shown alongside the terminal step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPreview {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Human-readable team range, e.g. `"2-5 members"`.
    pub team_range: String,
    pub duration: String,
    pub difficulty: &'static str,
    /// Technologies capped to [`PREVIEW_TECH_LIMIT`] entries.
    pub tech_stack: Vec<String>,
    /// Count of technologies beyond the display cap.
    pub tech_overflow: usize,
}

/// Project the draft into its preview card.
pub fn render_preview(draft: &ProjectDraft) -> ProjectPreview {
    let shown = draft.tech_stack.len().min(PREVIEW_TECH_LIMIT);
    ProjectPreview {
        title: draft.title.clone(),
        description: draft.description.clone(),
        category: draft.category.clone(),
        team_range: format!("{}-{} members", draft.team_size.min, draft.team_size.max),
        duration: draft.duration.clone(),
        difficulty: draft.difficulty.as_str(),
        tech_stack: draft.tech_stack[..shown].to_vec(),
        tech_overflow: draft.tech_stack.len() - shown,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
