//! Profile skill-entry helpers.
//!
//! Unlike the wizard's tag editors, duplicate detection for profile skills
//! is case-insensitive: "React" and "react" are the same skill. The wizard
//! and the skill manager deliberately keep their own duplicate rules; see
//! the contrast tests here and in [`crate::collection`].

/// Returns `true` if `value` matches an existing skill, ignoring ASCII case.
pub fn is_duplicate(skills: &[String], value: &str) -> bool {
    skills
        .iter()
        .any(|skill| skill.eq_ignore_ascii_case(value))
}

/// Trim `value` and append it unless it is empty or already present
/// (ignoring ASCII case). Returns `true` when the skill was appended.
pub fn add_skill(skills: &mut Vec<String>, value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() || is_duplicate(skills, trimmed) {
        return false;
    }
    skills.push(trimmed.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn add_skill_appends_new_entries() {
        let mut skills = list(&["React"]);
        assert!(add_skill(&mut skills, "Spring Boot"));
        assert_eq!(skills, list(&["React", "Spring Boot"]));
    }

    #[test]
    fn add_skill_rejects_empty_values() {
        let mut skills = Vec::new();
        assert!(!add_skill(&mut skills, "  "));
        assert!(skills.is_empty());
    }

    /// The wizard's tag editor would accept "react" next to "React"
    /// (see `collection::tests`); the skill manager rejects it. The two
    /// features differ on purpose and must not be unified silently.
    #[test]
    fn duplicate_check_is_case_insensitive_unlike_wizard_tags() {
        let mut skills = list(&["React"]);
        assert!(!add_skill(&mut skills, "react"));
        assert!(!add_skill(&mut skills, "REACT"));
        assert_eq!(skills, list(&["React"]));
    }

    #[test]
    fn is_duplicate_ignores_case_both_ways() {
        let skills = list(&["docker"]);
        assert!(is_duplicate(&skills, "Docker"));
        assert!(is_duplicate(&skills, "DOCKER"));
        assert!(!is_duplicate(&skills, "Kubernetes"));
    }
}
