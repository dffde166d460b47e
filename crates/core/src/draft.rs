//! The draft record assembled across the wizard's steps.
//!
//! [`ProjectDraft`] is a passive data holder: it exposes a single generic
//! update entry point ([`ProjectDraft::apply`]) and no validation or
//! transition logic of its own. One draft instance is owned by one wizard
//! controller for the lifetime of the wizard session.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Field keys
// ---------------------------------------------------------------------------

/// Error-map key for the project title.
pub const FIELD_TITLE: &str = "title";
/// Error-map key for the project description.
pub const FIELD_DESCRIPTION: &str = "description";
/// Error-map key for the category selection.
pub const FIELD_CATEGORY: &str = "category";
/// Error-map key for the technology stack collection.
pub const FIELD_TECH_STACK: &str = "techStack";
/// Error-map key for the duration selection.
pub const FIELD_DURATION: &str = "duration";
/// Error-map key for the minimum team size.
pub const FIELD_TEAM_SIZE_MIN: &str = "teamSizeMin";
/// Error-map key for the maximum team size.
pub const FIELD_TEAM_SIZE_MAX: &str = "teamSizeMax";
/// Error-map key for the difficulty selection.
pub const FIELD_DIFFICULTY: &str = "difficulty";
/// Error-map key for the budget selection.
pub const FIELD_BUDGET: &str = "budget";
/// Error-map key for the remote-work flag.
pub const FIELD_IS_REMOTE: &str = "isRemote";
/// Error-map key for the open-source flag.
pub const FIELD_IS_OPEN_SOURCE: &str = "isOpenSource";
/// Error-map key for the contact-method selection.
pub const FIELD_CONTACT_METHOD: &str = "contactMethod";
/// Error-map key for the requirements collection.
pub const FIELD_REQUIREMENTS: &str = "requirements";
/// Error-map key for the goals collection.
pub const FIELD_GOALS: &str = "goals";
/// Error-map key for the free-text timeline.
pub const FIELD_TIMELINE: &str = "timeline";
/// Error-map key for the free-text additional information.
pub const FIELD_ADDITIONAL_INFO: &str = "additionalInfo";
/// Error-map key for the non-field submission failure banner.
pub const FIELD_SUBMIT: &str = "submit";

// ---------------------------------------------------------------------------
// Enumerated selections
// ---------------------------------------------------------------------------

/// Difficulty level of the posted project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Parse a lowercase difficulty string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(CoreError::Validation(format!(
                "Invalid difficulty '{s}'. Must be one of: beginner, intermediate, advanced"
            ))),
        }
    }

    /// Lowercase identifier for the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Intermediate
    }
}

/// Budget / compensation model for the posted project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Unpaid,
    Equity,
    Paid,
    Negotiable,
}

impl Budget {
    /// Parse a lowercase budget string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "unpaid" => Ok(Self::Unpaid),
            "equity" => Ok(Self::Equity),
            "paid" => Ok(Self::Paid),
            "negotiable" => Ok(Self::Negotiable),
            _ => Err(CoreError::Validation(format!(
                "Invalid budget '{s}'. Must be one of: unpaid, equity, paid, negotiable"
            ))),
        }
    }

    /// Lowercase identifier for the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Equity => "equity",
            Self::Paid => "paid",
            Self::Negotiable => "negotiable",
        }
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::Unpaid
    }
}

/// How applicants should reach the project owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Platform,
    Email,
    Discord,
}

impl ContactMethod {
    /// Parse a lowercase contact-method string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "platform" => Ok(Self::Platform),
            "email" => Ok(Self::Email),
            "discord" => Ok(Self::Discord),
            _ => Err(CoreError::Validation(format!(
                "Invalid contact method '{s}'. Must be one of: platform, email, discord"
            ))),
        }
    }

    /// Lowercase identifier for the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Email => "email",
            Self::Discord => "discord",
        }
    }
}

impl Default for ContactMethod {
    fn default() -> Self {
        Self::Platform
    }
}

// ---------------------------------------------------------------------------
// Team size
// ---------------------------------------------------------------------------

/// Default minimum team size for a fresh draft.
pub const DEFAULT_TEAM_MIN: u32 = 2;

/// Default maximum team size for a fresh draft.
pub const DEFAULT_TEAM_MAX: u32 = 5;

/// Desired team-size range for the posted project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSize {
    pub min: u32,
    pub max: u32,
}

impl Default for TeamSize {
    fn default() -> Self {
        Self {
            min: DEFAULT_TEAM_MIN,
            max: DEFAULT_TEAM_MAX,
        }
    }
}

/// Partial update for [`TeamSize`]. Setting one bound does not require
/// resupplying the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamSizePatch {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl TeamSize {
    /// Shallow-merge a patch into this range.
    pub fn merged(self, patch: TeamSizePatch) -> Self {
        Self {
            min: patch.min.unwrap_or(self.min),
            max: patch.max.unwrap_or(self.max),
        }
    }
}

// ---------------------------------------------------------------------------
// Draft record
// ---------------------------------------------------------------------------

/// The in-progress project idea being assembled across wizard steps.
///
/// The tag-like collections (`tech_stack`, `requirements`, `goals`) are
/// ordered and duplicate-free; they must be mutated through
/// [`crate::collection`] so those invariants hold whenever the draft is
/// read by the validator or the submission gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tech_stack: Vec<String>,
    pub team_size: TeamSize,
    pub duration: String,
    pub difficulty: Difficulty,
    pub budget: Budget,
    pub is_remote: bool,
    pub is_open_source: bool,
    pub contact_method: ContactMethod,
    pub requirements: Vec<String>,
    pub goals: Vec<String>,
    pub timeline: String,
    pub additional_info: String,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            tech_stack: Vec::new(),
            team_size: TeamSize::default(),
            duration: String::new(),
            difficulty: Difficulty::default(),
            budget: Budget::default(),
            is_remote: true,
            is_open_source: false,
            contact_method: ContactMethod::default(),
            requirements: Vec::new(),
            goals: Vec::new(),
            timeline: String::new(),
            additional_info: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Field updates
// ---------------------------------------------------------------------------

/// A single field write routed through the controller's update path.
///
/// Each variant names one draft field; the controller clears the matching
/// error-map entries as a side effect of applying it.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftUpdate {
    Title(String),
    Description(String),
    Category(String),
    TechStack(Vec<String>),
    TeamSize(TeamSizePatch),
    Duration(String),
    Difficulty(Difficulty),
    Budget(Budget),
    IsRemote(bool),
    IsOpenSource(bool),
    ContactMethod(ContactMethod),
    Requirements(Vec<String>),
    Goals(Vec<String>),
    Timeline(String),
    AdditionalInfo(String),
}

impl DraftUpdate {
    /// Error-map keys cleared when this field is edited.
    ///
    /// The composite team-size field owns two validation keys, so editing
    /// either bound clears both.
    pub fn error_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Title(_) => &[FIELD_TITLE],
            Self::Description(_) => &[FIELD_DESCRIPTION],
            Self::Category(_) => &[FIELD_CATEGORY],
            Self::TechStack(_) => &[FIELD_TECH_STACK],
            Self::TeamSize(_) => &[FIELD_TEAM_SIZE_MIN, FIELD_TEAM_SIZE_MAX],
            Self::Duration(_) => &[FIELD_DURATION],
            Self::Difficulty(_) => &[FIELD_DIFFICULTY],
            Self::Budget(_) => &[FIELD_BUDGET],
            Self::IsRemote(_) => &[FIELD_IS_REMOTE],
            Self::IsOpenSource(_) => &[FIELD_IS_OPEN_SOURCE],
            Self::ContactMethod(_) => &[FIELD_CONTACT_METHOD],
            Self::Requirements(_) => &[FIELD_REQUIREMENTS],
            Self::Goals(_) => &[FIELD_GOALS],
            Self::Timeline(_) => &[FIELD_TIMELINE],
            Self::AdditionalInfo(_) => &[FIELD_ADDITIONAL_INFO],
        }
    }
}

impl ProjectDraft {
    /// Apply a single field update.
    ///
    /// Scalar fields are replaced; the composite `team_size` field is
    /// shallow-merged so a patch touching one bound preserves the other.
    pub fn apply(&mut self, update: DraftUpdate) {
        match update {
            DraftUpdate::Title(v) => self.title = v,
            DraftUpdate::Description(v) => self.description = v,
            DraftUpdate::Category(v) => self.category = v,
            DraftUpdate::TechStack(v) => self.tech_stack = v,
            DraftUpdate::TeamSize(patch) => self.team_size = self.team_size.merged(patch),
            DraftUpdate::Duration(v) => self.duration = v,
            DraftUpdate::Difficulty(v) => self.difficulty = v,
            DraftUpdate::Budget(v) => self.budget = v,
            DraftUpdate::IsRemote(v) => self.is_remote = v,
            DraftUpdate::IsOpenSource(v) => self.is_open_source = v,
            DraftUpdate::ContactMethod(v) => self.contact_method = v,
            DraftUpdate::Requirements(v) => self.requirements = v,
            DraftUpdate::Goals(v) => self.goals = v,
            DraftUpdate::Timeline(v) => self.timeline = v,
            DraftUpdate::AdditionalInfo(v) => self.additional_info = v,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- enums --

    #[test]
    fn difficulty_parse_roundtrip() {
        for d in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ] {
            assert_eq!(Difficulty::parse(d.as_str()).unwrap(), d);
        }
    }

    #[test]
    fn difficulty_parse_rejects_unknown() {
        assert!(Difficulty::parse("expert").is_err());
        assert!(Difficulty::parse("").is_err());
        assert!(Difficulty::parse("Intermediate").is_err());
    }

    #[test]
    fn budget_parse_roundtrip() {
        for b in [
            Budget::Unpaid,
            Budget::Equity,
            Budget::Paid,
            Budget::Negotiable,
        ] {
            assert_eq!(Budget::parse(b.as_str()).unwrap(), b);
        }
    }

    #[test]
    fn contact_method_parse_roundtrip() {
        for c in [
            ContactMethod::Platform,
            ContactMethod::Email,
            ContactMethod::Discord,
        ] {
            assert_eq!(ContactMethod::parse(c.as_str()).unwrap(), c);
        }
    }

    #[test]
    fn selection_enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_value(Difficulty::Advanced).unwrap(),
            "advanced"
        );
        assert_eq!(
            serde_json::to_value(Budget::Negotiable).unwrap(),
            "negotiable"
        );
        assert_eq!(serde_json::to_value(ContactMethod::Email).unwrap(), "email");
    }

    // -- defaults --

    #[test]
    fn fresh_draft_uses_documented_defaults() {
        let draft = ProjectDraft::default();
        assert!(draft.title.is_empty());
        assert!(draft.tech_stack.is_empty());
        assert_eq!(draft.team_size, TeamSize { min: 2, max: 5 });
        assert_eq!(draft.difficulty, Difficulty::Intermediate);
        assert_eq!(draft.budget, Budget::Unpaid);
        assert!(draft.is_remote);
        assert!(!draft.is_open_source);
        assert_eq!(draft.contact_method, ContactMethod::Platform);
    }

    // -- team size merge --

    #[test]
    fn team_size_patch_merges_one_bound() {
        let base = TeamSize { min: 2, max: 5 };
        let patched = base.merged(TeamSizePatch {
            min: None,
            max: Some(8),
        });
        assert_eq!(patched, TeamSize { min: 2, max: 8 });
    }

    #[test]
    fn team_size_patch_can_replace_both_bounds() {
        let base = TeamSize { min: 2, max: 5 };
        let patched = base.merged(TeamSizePatch {
            min: Some(1),
            max: Some(1),
        });
        assert_eq!(patched, TeamSize { min: 1, max: 1 });
    }

    #[test]
    fn empty_patch_is_identity() {
        let base = TeamSize { min: 3, max: 7 };
        assert_eq!(base.merged(TeamSizePatch::default()), base);
    }

    // -- apply --

    #[test]
    fn apply_replaces_scalar_fields() {
        let mut draft = ProjectDraft::default();
        draft.apply(DraftUpdate::Title("Build X".into()));
        draft.apply(DraftUpdate::Difficulty(Difficulty::Advanced));
        assert_eq!(draft.title, "Build X");
        assert_eq!(draft.difficulty, Difficulty::Advanced);
    }

    #[test]
    fn apply_team_size_merges_instead_of_replacing() {
        let mut draft = ProjectDraft::default();
        draft.apply(DraftUpdate::TeamSize(TeamSizePatch {
            min: None,
            max: Some(9),
        }));
        assert_eq!(draft.team_size, TeamSize { min: 2, max: 9 });
    }

    #[test]
    fn team_size_update_clears_both_validation_keys() {
        let update = DraftUpdate::TeamSize(TeamSizePatch::default());
        assert_eq!(
            update.error_keys(),
            &[FIELD_TEAM_SIZE_MIN, FIELD_TEAM_SIZE_MAX]
        );
    }

    #[test]
    fn scalar_updates_clear_exactly_one_key() {
        assert_eq!(DraftUpdate::Title(String::new()).error_keys(), &[FIELD_TITLE]);
        assert_eq!(
            DraftUpdate::TechStack(Vec::new()).error_keys(),
            &[FIELD_TECH_STACK]
        );
    }
}
