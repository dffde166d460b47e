//! Result types for wizard submission.

/// Why a `submit()` call was not accepted.
///
/// These conditions are absorbed silently: the controller reports them as
/// a no-op outcome, never as an error, and never mutates the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// `submit()` was called off the terminal step.
    NotTerminalStep,
    /// A creation request is already in flight.
    AlreadyInFlight,
    /// The terminal-step validator reported errors.
    ValidationFailed,
}

/// Terminal result of a `submit()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The marketplace acknowledged the new project; the draft has been
    /// reset. Navigating away is the caller's concern.
    Completed {
        /// Identifier of the created project.
        project_id: String,
    },
    /// The attempt failed; errors were recorded on the controller, the
    /// draft is retained, and another `submit()` will be accepted.
    Failed,
    /// The call was absorbed as a no-op; nothing changed.
    Ignored(SubmitBlocked),
}
