//! Wizard step definitions and transition rules.
//!
//! The submission wizard is a fixed sequence of four steps. Forward
//! transitions are gated by the validator in [`crate::validate`]; backward
//! transitions are unconditional. Only the terminal step may submit.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Wizard steps
// ---------------------------------------------------------------------------

/// The four steps in the project-idea submission wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Basics,
    Technical,
    Team,
    Goals,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 4;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 4;

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Basics),
            2 => Ok(Self::Technical),
            3 => Ok(Self::Team),
            4 => Ok(Self::Goals),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Basics => 1,
            Self::Technical => 2,
            Self::Team => 3,
            Self::Goals => 4,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::Basics => "Project Basics",
            Self::Technical => "Technical Details",
            Self::Team => "Team & Collaboration",
            Self::Goals => "Goals & Contact",
        }
    }

    /// The step after this one, or `None` on the terminal step.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Basics => Some(Self::Technical),
            Self::Technical => Some(Self::Team),
            Self::Team => Some(Self::Goals),
            Self::Goals => None,
        }
    }

    /// The step before this one, or `None` on the first step.
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Basics => None,
            Self::Technical => Some(Self::Basics),
            Self::Team => Some(Self::Technical),
            Self::Goals => Some(Self::Team),
        }
    }

    /// `true` for the terminal step, the only one that may submit.
    pub fn is_terminal(self) -> bool {
        self == Self::Goals
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
