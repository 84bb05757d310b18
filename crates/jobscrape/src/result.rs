// ABOUTME: ExtractionResult holding the extracted job description and its provenance.
// ABOUTME: Provenance records the job board and whether a site selector or the fallback produced the text.

use serde::{Deserialize, Serialize};

use crate::sites::JobSource;

/// Which strategy produced the extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// A site selector, by its 0-based position in the site table.
    Selector { position: usize, selector: String },
    /// The whole-document fallback heuristic.
    Fallback,
}

/// The result of extracting a job description from a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub url: String,
    pub source: JobSource,
    pub strategy: Strategy,
    pub content: String,
    pub char_count: usize,
}

impl ExtractionResult {
    /// Returns true if the fallback heuristic produced the content.
    pub fn is_fallback(&self) -> bool {
        self.strategy == Strategy::Fallback
    }

    /// Returns true if the content is empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Number of whitespace-separated words in the content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Consume the result, keeping only the text.
    pub fn into_content(self) -> String {
        self.content
    }
}
