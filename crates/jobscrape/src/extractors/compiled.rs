// ABOUTME: Pre-compiled CSS selectors for every supported job board.
// ABOUTME: Compiles each site's SelectorSet once into a read-only static table.

//! Selector compilation for the site tables.
//!
//! The selector strings in [`crate::sites`] are fixed, so they are compiled a
//! single time on first use and then only read. Concurrent extractions share
//! the table without locking.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use scraper::Selector;

use crate::sites::JobSource;

/// A selector string together with its compiled form.
#[derive(Debug, Clone)]
pub struct CompiledSelector {
    pub css: &'static str,
    pub selector: Selector,
}

static SITE_SELECTORS: Lazy<HashMap<JobSource, Vec<CompiledSelector>>> = Lazy::new(|| {
    JobSource::ALL
        .iter()
        .map(|source| (*source, compile_all(source.selectors())))
        .collect()
});

/// Compiles selectors in order. A selector that does not parse is dropped,
/// which the caller sees the same way as a selector that matches nothing.
fn compile_all(selectors: &'static [&'static str]) -> Vec<CompiledSelector> {
    selectors
        .iter()
        .filter_map(|&css| match Selector::parse(css) {
            Ok(selector) => Some(CompiledSelector { css, selector }),
            Err(err) => {
                tracing::warn!(selector = css, error = %err, "skipping invalid site selector");
                None
            }
        })
        .collect()
}

/// Compiled selectors for a source, in table order.
pub fn site_selectors(source: JobSource) -> &'static [CompiledSelector] {
    SITE_SELECTORS
        .get(&source)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
