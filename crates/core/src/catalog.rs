//! Static reference vocabularies consumed read-only by the wizard.
//!
//! The category list is normally served by the category provider at wizard
//! initialization; [`DEFAULT_CATEGORIES`] is the fallback when the provider
//! is unavailable. Durations and the curated technology list are fixed
//! client-side vocabularies.

/// Fallback category list when the category provider is unavailable.
pub const DEFAULT_CATEGORIES: &[&str] = &["Frontend", "Backend", "Full Stack"];

/// Fixed vocabulary for the project-duration selection.
pub const VALID_DURATIONS: &[&str] = &[
    "1-2 weeks",
    "1 month",
    "2-3 months",
    "3-6 months",
    "6+ months",
    "ongoing",
];

/// Curated technology vocabulary behind the tech-stack suggestion list.
pub const POPULAR_TECH: &[&str] = &[
    "React",
    "Vue.js",
    "Angular",
    "Node.js",
    "Python",
    "Java",
    "TypeScript",
    "JavaScript",
    "PHP",
    "Ruby",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
    "Flutter",
    "React Native",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "Docker",
    "AWS",
    "Firebase",
    "GraphQL",
    "REST API",
];

/// Returns `true` if the given duration is one of the fixed vocabulary.
pub fn is_valid_duration(duration: &str) -> bool {
    VALID_DURATIONS.contains(&duration)
}
