// src/fold.rs
//! Case-insensitive matching for city, state and type names.
//!
//! Uses Unicode default case folding, which does not depend on the process
//! locale: `ß` matches `SS` and a final `ς` matches `Σ`.

/// Returns true if `a` and `b` are equal ignoring case.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    caseless::default_caseless_match_str(a, b)
}
