// ABOUTME: Text normalization for extracted job descriptions.
// ABOUTME: Collapses whitespace and deletes a fixed list of job-board boilerplate phrases.

use once_cell::sync::Lazy;
use regex::Regex;

/// Navigation and chrome phrases deleted from extracted text, applied in order.
///
/// Removal is a plain case-sensitive substring delete, so a phrase embedded in
/// a longer word is removed as well ("Shared" becomes "d").
pub const BOILERPLATE_PHRASES: &[&str] = &[
    "Cookie Policy",
    "Privacy Policy",
    "Terms of Use",
    "Sign in",
    "Register",
    "Apply Now",
    "Save Job",
    "Share",
    "Report",
    "Back to search",
];

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize extracted text.
///
/// Every whitespace run (newlines and tabs included) becomes a single space
/// and the result is trimmed before any phrase is deleted, so "Sign\nin" is
/// still caught. Gaps left behind by a deletion are collapsed again, which
/// keeps the function idempotent.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut cleaned = collapse_whitespace(text);

    let mut removed_any = false;
    for phrase in BOILERPLATE_PHRASES {
        if cleaned.contains(phrase) {
            cleaned = cleaned.replace(phrase, "");
            removed_any = true;
        }
    }

    if removed_any {
        cleaned = collapse_whitespace(&cleaned);
    }
    cleaned
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Length of a text in characters, the unit all content thresholds use.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
