//! Editors for the draft's ordered, duplicate-free string collections.
//!
//! Used for the technology stack, requirements, and goals fields. Values
//! that would violate a collection's invariants (empty after trimming, or
//! an exact duplicate) are silently rejected rather than reported as
//! errors. Duplicate detection here is exact-match and case-sensitive;
//! the profile skill editor in [`crate::skills`] intentionally differs.

/// Display cap for the technology suggestion list.
pub const SUGGESTION_DISPLAY_LIMIT: usize = 12;

/// Trim `value` and append it to `collection`.
///
/// Returns `false` (leaving the collection unchanged) when the trimmed
/// value is empty or an exact match is already present; `true` when the
/// value was appended. Prior order is always preserved.
pub fn add(collection: &mut Vec<String>, value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() || collection.iter().any(|v| v == trimmed) {
        return false;
    }
    collection.push(trimmed.to_string());
    true
}

/// Remove the first exact match of `value` from `collection`.
///
/// Returns `false` (leaving the collection unchanged) when no match
/// exists; `true` when an entry was removed.
pub fn remove(collection: &mut Vec<String>, value: &str) -> bool {
    match collection.iter().position(|v| v == value) {
        Some(idx) => {
            collection.remove(idx);
            true
        }
        None => false,
    }
}

/// Curated suggestions not yet present in `selected`, capped to the first
/// [`SUGGESTION_DISPLAY_LIMIT`] entries for display.
///
/// Selecting a suggestion is equivalent to calling [`add`] with its value;
/// free-text entries go through the same path.
pub fn suggestions<'a>(catalog: &[&'a str], selected: &[String]) -> Vec<&'a str> {
    catalog
        .iter()
        .copied()
        .filter(|entry| !selected.iter().any(|s| s == entry))
        .take(SUGGESTION_DISPLAY_LIMIT)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
