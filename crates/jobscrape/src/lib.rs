// ABOUTME: Main library entry point for the job-posting content extractor.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, ExtractionResult, ExtractError, JobSource.

//! Jobscrape - extracts job descriptions from job-board postings.
//!
//! Given a LinkedIn, Indeed or Reed posting URL, the client fetches the page,
//! tries the board's description selectors in order, and falls back to a
//! whole-document heuristic when none of them yields enough text.
//!
//! # Example
//!
//! ```no_run
//! use cvadapt_jobscrape::{Client, ExtractError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ExtractError> {
//!     let client = Client::builder().build();
//!     let description = client
//!         .extract("https://www.linkedin.com/jobs/view/3791")
//!         .await?;
//!     println!("{}", description);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extractors;
pub mod normalize;
pub mod options;
pub mod resource;
pub mod result;
pub mod sites;

pub use crate::client::{extract_html, extract_job_description, Client};
pub use crate::error::{ErrorCode, ExtractError};
pub use crate::extractors::fallback::FALLBACK_SENTINEL;
pub use crate::normalize::clean_text;
pub use crate::options::{ClientBuilder, Options, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use crate::result::{ExtractionResult, Strategy};
pub use crate::sites::{domain_of, is_supported_url, JobSource};
