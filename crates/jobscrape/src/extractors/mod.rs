// ABOUTME: Extraction strategies for job-posting pages.
// ABOUTME: Site selector chains first, then a whole-document fallback heuristic.

//! Content extraction module.
//!
//! Submodules:
//! - `compiled`: Per-site selector tables compiled once into static data.
//! - `select`: Ordered selector probing with the minimum-length acceptance rule.
//! - `fallback`: Last-resort whole-document heuristic that never fails.

pub mod compiled;
pub mod fallback;
pub mod select;
