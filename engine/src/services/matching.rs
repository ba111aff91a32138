//! Pest and disease name matching
//!
//! The crop tables, symptom tables, and spray charts come from different
//! guide publications and disagree on naming ("Pea aphid" vs "Aphids",
//! "Flea beetles" vs "Flea Beetles"). Lookups between them all go through
//! this one rule so its behaviour can be tuned in a single place.

/// Normalize a pest name for comparison
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Bidirectional substring match on normalized names.
///
/// Empty names match nothing.
pub fn names_match(a: &str, b: &str) -> bool {
    let a = normalize_name(a);
    let b = normalize_name(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}
