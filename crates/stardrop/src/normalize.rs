//! URL normalization for reconciliation.
//!
//! The normalized form is the sole join key between starred repositories and
//! existing raindrops, so a GitHub URL and the bookmark it produced must land
//! on the same key regardless of casing or trailing slashes. The normalized
//! string is never written back to either service.

/// Canonicalize a URL for identity comparison: lowercase everything, strip
/// any run of trailing `/`.
///
/// Total function; any input string produces a key.
#[must_use]
pub fn normalize(url: &str) -> String {
    url.to_lowercase().trim_end_matches('/').to_string()
}
