//! The wizard state machine.
//!
//! One [`WizardController`] instance owns one draft for the lifetime of a
//! wizard session. All mutations flow through the named operations
//! [`update`](WizardController::update), [`next`](WizardController::next),
//! [`prev`](WizardController::prev), and
//! [`submit`](WizardController::submit); everything else is a read-only
//! view of the state.
//!
//! Submission is split into a synchronous guard phase
//! ([`begin_submit`](WizardController::begin_submit)) and a synchronous
//! application phase ([`resolve_submit`](WizardController::resolve_submit))
//! around the single awaited gateway call; [`submit`](WizardController::submit)
//! composes them. At most one creation request is in flight per controller,
//! and an abandoned in-flight attempt (a dropped future that never
//! resolves) leaves the state consistent.

use crewhub_core::catalog::{DEFAULT_CATEGORIES, POPULAR_TECH};
use crewhub_core::collection;
use crewhub_core::draft::{DraftUpdate, ProjectDraft, FIELD_SUBMIT};
use crewhub_core::presentation::{render_preview, step_markers, IndicatorEntry, ProjectPreview};
use crewhub_core::steps::WizardStep;
use crewhub_core::validate::{validate_step, FieldErrors};
use crewhub_gateway::{CreateProjectRequest, CreatedProject, GatewayError, ProjectSubmitter};

use crate::outcome::{SubmitBlocked, SubmitOutcome};

/// Banner text when a failure carries no message of its own.
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Failed to create project. Please try again.";

/// Owns the wizard's mutable state and gates every transition.
pub struct WizardController {
    step: WizardStep,
    draft: ProjectDraft,
    errors: FieldErrors,
    is_submitting: bool,
    categories: Vec<String>,
}

impl WizardController {
    /// Start a wizard session with the static default category list.
    pub fn new() -> Self {
        Self::with_categories(DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect())
    }

    /// Start a wizard session with categories read once from the provider.
    pub fn with_categories(categories: Vec<String>) -> Self {
        Self {
            step: WizardStep::Basics,
            draft: ProjectDraft::default(),
            errors: FieldErrors::new(),
            is_submitting: false,
            categories,
        }
    }

    // -----------------------------------------------------------------------
    // Read-only views
    // -----------------------------------------------------------------------

    /// The current wizard step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The draft being assembled.
    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    /// Current field errors (including the `submit` banner entry).
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// `true` while a creation request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// The selectable categories read at initialization.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Indicator strip markers for the current position.
    pub fn step_markers(&self) -> Vec<IndicatorEntry> {
        step_markers(self.step)
    }

    /// Preview card projection of the draft.
    pub fn preview(&self) -> ProjectPreview {
        render_preview(&self.draft)
    }

    /// Curated technology suggestions not yet selected, capped for display.
    pub fn tech_suggestions(&self) -> Vec<&'static str> {
        collection::suggestions(POPULAR_TECH, &self.draft.tech_stack)
    }

    // -----------------------------------------------------------------------
    // Field updates
    // -----------------------------------------------------------------------

    /// Write one field into the draft.
    ///
    /// Clears the error-map entries belonging to the edited field, then
    /// applies the update (composite fields shallow-merge).
    pub fn update(&mut self, update: DraftUpdate) {
        for key in update.error_keys() {
            self.errors.remove(*key);
        }
        self.draft.apply(update);
    }

    /// Add a technology through the collection editor.
    ///
    /// Values violating the collection's invariants are silently absorbed;
    /// returns `true` when the stack changed.
    pub fn add_technology(&mut self, value: &str) -> bool {
        let mut stack = self.draft.tech_stack.clone();
        if !collection::add(&mut stack, value) {
            return false;
        }
        self.update(DraftUpdate::TechStack(stack));
        true
    }

    /// Remove a technology; a missing value is silently absorbed.
    pub fn remove_technology(&mut self, value: &str) -> bool {
        let mut stack = self.draft.tech_stack.clone();
        if !collection::remove(&mut stack, value) {
            return false;
        }
        self.update(DraftUpdate::TechStack(stack));
        true
    }

    /// Add a requirement through the collection editor.
    pub fn add_requirement(&mut self, value: &str) -> bool {
        let mut list = self.draft.requirements.clone();
        if !collection::add(&mut list, value) {
            return false;
        }
        self.update(DraftUpdate::Requirements(list));
        true
    }

    /// Remove a requirement; a missing value is silently absorbed.
    pub fn remove_requirement(&mut self, value: &str) -> bool {
        let mut list = self.draft.requirements.clone();
        if !collection::remove(&mut list, value) {
            return false;
        }
        self.update(DraftUpdate::Requirements(list));
        true
    }

    /// Add a goal through the collection editor.
    pub fn add_goal(&mut self, value: &str) -> bool {
        let mut list = self.draft.goals.clone();
        if !collection::add(&mut list, value) {
            return false;
        }
        self.update(DraftUpdate::Goals(list));
        true
    }

    /// Remove a goal; a missing value is silently absorbed.
    pub fn remove_goal(&mut self, value: &str) -> bool {
        let mut list = self.draft.goals.clone();
        if !collection::remove(&mut list, value) {
            return false;
        }
        self.update(DraftUpdate::Goals(list));
        true
    }

    // -----------------------------------------------------------------------
    // Step transitions
    // -----------------------------------------------------------------------

    /// Validate the current step and advance on success.
    ///
    /// Returns `true` when the gate passed (the error map is cleared; the
    /// step advances unless already terminal). On failure the map holds
    /// exactly the current step's errors and the position is unchanged.
    pub fn next(&mut self) -> bool {
        let errors = validate_step(self.step, &self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }

        self.errors.clear();
        if let Some(next) = self.step.next() {
            tracing::debug!(
                from_step = self.step.to_number(),
                to_step = next.to_number(),
                "Wizard advanced"
            );
            self.step = next;
        }
        true
    }

    /// Go back one step.
    ///
    /// Never validates, never clears collected data, and stops at the
    /// first step.
    pub fn prev(&mut self) {
        if let Some(prev) = self.step.prev() {
            tracing::debug!(
                from_step = self.step.to_number(),
                to_step = prev.to_number(),
                "Wizard went back"
            );
            self.step = prev;
        }
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// Guard phase of submission.
    ///
    /// Accepts only on the terminal step with no request in flight; on
    /// acceptance sets the single-flight guard and returns the normalized
    /// creation request. Blocked calls leave the draft and position
    /// untouched.
    pub fn begin_submit(&mut self) -> Result<CreateProjectRequest, SubmitBlocked> {
        if !self.step.is_terminal() {
            return Err(SubmitBlocked::NotTerminalStep);
        }
        if self.is_submitting {
            return Err(SubmitBlocked::AlreadyInFlight);
        }

        let errors = validate_step(self.step, &self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return Err(SubmitBlocked::ValidationFailed);
        }

        self.is_submitting = true;
        tracing::info!(title = %self.draft.title, "Submitting project idea");
        Ok(CreateProjectRequest::from_draft(&self.draft))
    }

    /// Application phase of submission.
    ///
    /// Success discards the draft (reset to defaults) and reports
    /// completion. Remote field rejections merge into the error map under
    /// their own keys; transient failures set the single `submit` banner
    /// entry. Both failure modes retain the draft and release the
    /// single-flight guard so the user may retry.
    pub fn resolve_submit(
        &mut self,
        result: Result<CreatedProject, GatewayError>,
    ) -> SubmitOutcome {
        self.is_submitting = false;

        match result {
            Ok(created) => {
                tracing::info!(project_id = %created.id, "Project idea posted");
                self.draft = ProjectDraft::default();
                self.errors.clear();
                SubmitOutcome::Completed {
                    project_id: created.id,
                }
            }
            Err(GatewayError::Rejected { errors }) => {
                tracing::warn!(fields = errors.len(), "Submission rejected by the service");
                self.errors.extend(errors);
                SubmitOutcome::Failed
            }
            Err(err) => {
                tracing::warn!(error = %err, "Submission failed");
                let banner = match err {
                    GatewayError::Api { message, .. } => message,
                    _ => SUBMIT_FALLBACK_MESSAGE.to_string(),
                };
                self.errors.insert(FIELD_SUBMIT.to_string(), banner);
                SubmitOutcome::Failed
            }
        }
    }

    /// Submit the draft from the terminal step.
    ///
    /// Invokes the gateway's creation operation exactly once per accepted
    /// call; repeated calls while a request is in flight are no-ops.
    pub async fn submit<S: ProjectSubmitter>(&mut self, gateway: &S) -> SubmitOutcome {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(blocked) => return SubmitOutcome::Ignored(blocked),
        };

        let result = gateway.create_project(&request).await;
        self.resolve_submit(result)
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}
