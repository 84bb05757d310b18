// ABOUTME: Whole-document fallback used when no site selector yields enough text.
// ABOUTME: Strips non-content tags, then picks the longest paragraph or a bounded text prefix.

use anyhow::anyhow;
use ego_tree::NodeId;
use scraper::{Html, Selector};

use crate::extractors::select::element_text;
use crate::normalize::{char_len, clean_text};

/// Returned when the fallback path hits an internal fault.
pub const FALLBACK_SENTINEL: &str = "Could not extract job description content";

/// Paragraph candidates must be strictly longer than this to be returned alone.
pub const MIN_PARAGRAPH_CHARS: usize = 200;

/// Page text must be strictly longer than this to be returned as a prefix.
pub const MIN_TEXT_CHARS: usize = 100;

/// Length of the prefix returned when no paragraph is long enough.
pub const MAX_FALLBACK_CHARS: usize = 2000;

/// Elements whose text never appears in fallback output.
const NON_CONTENT_TAGS: &str = "script, style, nav, header, footer";

/// Guess the job description from the whole document.
///
/// The document is modified: non-content elements are detached from the tree.
/// This never fails; an internal fault is logged and the sentinel text is
/// returned instead. The result may be short or empty, so callers must check
/// it before use.
pub fn extract_fallback_content(doc: &mut Html) -> String {
    match try_extract(doc) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!(error = %err, "fallback extraction failed");
            FALLBACK_SENTINEL.to_string()
        }
    }
}

fn try_extract(doc: &mut Html) -> anyhow::Result<String> {
    let removed = strip_elements(doc, NON_CONTENT_TAGS)?;
    tracing::debug!(removed, "stripped non-content elements");

    let text = clean_text(&document_text(doc));
    Ok(choose_fallback_text(&text))
}

/// Detach every element matching `css` from the document. Returns how many were removed.
fn strip_elements(doc: &mut Html, css: &str) -> anyhow::Result<usize> {
    let selector =
        Selector::parse(css).map_err(|e| anyhow!("invalid selector {:?}: {}", css, e))?;
    let ids: Vec<NodeId> = doc.select(&selector).map(|el| el.id()).collect();

    for id in &ids {
        if let Some(mut node) = doc.tree.get_mut(*id) {
            node.detach();
        }
    }
    Ok(ids.len())
}

/// Every text node still attached to the document, in document order.
///
/// `noscript` stays in the tree, but its raw markup is not text.
fn document_text(doc: &Html) -> String {
    element_text(&doc.root_element())
}

/// Pick the fallback output from page text.
///
/// The text is split on blank lines and the longest part wins, the earliest on
/// ties. Normalized text has no newlines left, so in practice the whole text
/// is the only candidate.
fn choose_fallback_text(text: &str) -> String {
    let longest = text
        .split("\n\n")
        .fold("", |best, part| if char_len(part) > char_len(best) { part } else { best });

    if char_len(longest) > MIN_PARAGRAPH_CHARS {
        return longest.to_string();
    }

    if char_len(text) > MIN_TEXT_CHARS {
        return text.chars().take(MAX_FALLBACK_CHARS).collect();
    }

    text.to_string()
}
