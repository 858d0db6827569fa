//! Lookup-key normalization for headers and cells.
//!
//! `"  Área "` and `"area"` share the key `"area"`. Only keys are folded;
//! display text is never rewritten.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// NFKD-decompose, drop combining marks, trim, lowercase.
///
/// Internal whitespace is kept as-is.
pub fn normalize_key(s: &str) -> String {
    let folded: String = s.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    folded.trim().to_lowercase()
}
