//! The project-idea submission wizard controller.
//!
//! [`WizardController`] owns the wizard's entire mutable state (current
//! step, draft, error map, and the single-flight submission guard) and
//! exposes it only through named operations. Views are pure read-only
//! projections over that state (see `crewhub_core::presentation`).

pub mod categories;
pub mod controller;
pub mod outcome;

pub use categories::{categories_from, load_categories};
pub use controller::WizardController;
pub use outcome::{SubmitBlocked, SubmitOutcome};
