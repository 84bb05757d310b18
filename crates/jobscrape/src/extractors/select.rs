// ABOUTME: Ordered selector probing for site-specific job description extraction.
// ABOUTME: Returns the first selector whose normalized text clears the minimum length.

//! Selector-based description extraction.
//!
//! Key behaviors:
//! - Selectors are tried in table order; only the first matching element of
//!   each selector is considered.
//! - The element's text is the concatenation of its descendant text nodes,
//!   normalized with [`clean_text`]. Text inside `script`, `style` and
//!   `noscript` is code or unparsed markup and is never collected.
//! - A match is accepted only when it is longer than [`MIN_SELECTOR_CHARS`]
//!   characters. Shorter matches (a heading, a location line) fall through to
//!   the next selector. A missing element is not an error.

use scraper::node::Node;
use scraper::{ElementRef, Html};

use crate::extractors::compiled::CompiledSelector;
use crate::normalize::{char_len, clean_text};

/// Selector matches must be strictly longer than this many characters.
pub const MIN_SELECTOR_CHARS: usize = 100;

/// An accepted selector match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorHit {
    /// 0-based position of the selector in its site table.
    pub position: usize,
    pub selector: &'static str,
    pub text: String,
}

/// Elements whose child text nodes hold code or raw markup rather than prose.
const RAW_TEXT_PARENTS: &[&str] = &["script", "style", "noscript"];

/// Text of an element: its descendant text nodes joined without separators,
/// skipping the contents of [`RAW_TEXT_PARENTS`].
pub fn element_text(element: &ElementRef) -> String {
    element
        .descendants()
        .filter(|node| !has_raw_text_parent(node))
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some(&**text),
            _ => None,
        })
        .collect()
}

fn has_raw_text_parent(node: &ego_tree::NodeRef<'_, Node>) -> bool {
    node.parent()
        .and_then(|parent| parent.value().as_element())
        .map(|el| RAW_TEXT_PARENTS.iter().any(|tag| *tag == el.name()))
        .unwrap_or(false)
}

/// Try each selector in order and return the first sufficient match.
pub fn first_sufficient_match(doc: &Html, selectors: &[CompiledSelector]) -> Option<SelectorHit> {
    for (position, compiled) in selectors.iter().enumerate() {
        let Some(element) = doc.select(&compiled.selector).next() else {
            tracing::debug!(selector = compiled.css, "selector matched nothing");
            continue;
        };

        let text = clean_text(&element_text(&element));
        let chars = char_len(&text);
        if chars > MIN_SELECTOR_CHARS {
            tracing::debug!(selector = compiled.css, chars, "selector accepted");
            return Some(SelectorHit {
                position,
                selector: compiled.css,
                text,
            });
        }
        tracing::debug!(
            selector = compiled.css,
            chars,
            min = MIN_SELECTOR_CHARS,
            "selector match too short"
        );
    }
    None
}
