// ABOUTME: Site adapter registry mapping job-board domains to ordered selector tables.
// ABOUTME: Classifies a URL into a JobSource and exposes its SelectorSet as static data.

//! Supported job boards and their selector tables.
//!
//! Each board is a [`JobSource`] variant keyed to an ordered list of CSS
//! selectors, most specific first. The lists encode observed markup and are
//! plain data: when a board changes its markup, edit the table.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ExtractError;

/// A supported job-board family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSource {
    LinkedIn,
    Indeed,
    Reed,
}

const LINKEDIN_SELECTORS: &[&str] = &[
    ".description__text",
    ".jobs-description__content",
    ".jobs-box__html-content",
    "[data-job-description]",
];

// The metadata header item is a last resort before the fallback path.
const INDEED_SELECTORS: &[&str] = &[
    "#jobDescriptionText",
    ".jobsearch-jobDescriptionText",
    ".jobsearch-JobMetadataHeader-item",
];

const REED_SELECTORS: &[&str] = &[
    ".description",
    ".job-description",
    r#"[data-qa="job-description"]"#,
];

/// Domain fragments tested in order against the lower-cased network location.
///
/// Real job-board domains never contain more than one fragment, so the order
/// is not a priority.
const DOMAIN_FRAGMENTS: &[(&str, JobSource)] = &[
    ("linkedin.com", JobSource::LinkedIn),
    ("indeed.com", JobSource::Indeed),
    ("reed.co.uk", JobSource::Reed),
];

impl JobSource {
    /// All supported sources, in domain-match order.
    pub const ALL: [JobSource; 3] = [JobSource::LinkedIn, JobSource::Indeed, JobSource::Reed];

    /// Ordered selector table for this source.
    pub fn selectors(self) -> &'static [&'static str] {
        match self {
            JobSource::LinkedIn => LINKEDIN_SELECTORS,
            JobSource::Indeed => INDEED_SELECTORS,
            JobSource::Reed => REED_SELECTORS,
        }
    }

    /// The domain fragment that identifies this source.
    pub fn domain_fragment(self) -> &'static str {
        match self {
            JobSource::LinkedIn => "linkedin.com",
            JobSource::Indeed => "indeed.com",
            JobSource::Reed => "reed.co.uk",
        }
    }

    /// Human-readable board name.
    pub fn name(self) -> &'static str {
        match self {
            JobSource::LinkedIn => "LinkedIn",
            JobSource::Indeed => "Indeed",
            JobSource::Reed => "Reed",
        }
    }

    /// Classify an already lower-cased domain by substring match.
    pub fn from_domain(domain: &str) -> Option<JobSource> {
        DOMAIN_FRAGMENTS
            .iter()
            .find(|(fragment, _)| domain.contains(fragment))
            .map(|(_, source)| *source)
    }

    /// Classify a URL by its domain.
    pub fn from_url(url: &str) -> Option<JobSource> {
        JobSource::from_domain(&domain_of(url))
    }
}

impl fmt::Display for JobSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lower-cased network location of a URL: host, plus `:port` when one is given.
///
/// A URL that cannot be parsed, or has no host, yields an empty string.
pub fn domain_of(url: &str) -> String {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return String::new();
    };
    let Some(host) = parsed.host_str() else {
        return String::new();
    };
    match parsed.port() {
        Some(port) => format!("{}:{}", host, port).to_lowercase(),
        None => host.to_lowercase(),
    }
}

/// Returns true if the URL points at a supported job board.
pub fn is_supported_url(url: &str) -> bool {
    JobSource::from_url(url).is_some()
}

/// Resolve the job board for a URL, failing with `UnsupportedSite` otherwise.
pub fn resolve_source(url: &str, op: &str) -> Result<JobSource, ExtractError> {
    let domain = domain_of(url);
    JobSource::from_domain(&domain).ok_or_else(|| ExtractError::unsupported_site(url, op, domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_tables_keep_documented_order() {
        assert_eq!(
            JobSource::LinkedIn.selectors(),
            &[
                ".description__text",
                ".jobs-description__content",
                ".jobs-box__html-content",
                "[data-job-description]",
            ]
        );
        assert_eq!(JobSource::Indeed.selectors().len(), 3);
        assert_eq!(JobSource::Indeed.selectors()[0], "#jobDescriptionText");
        assert_eq!(
            JobSource::Indeed.selectors()[2],
            ".jobsearch-JobMetadataHeader-item"
        );
        assert_eq!(
            JobSource::Reed.selectors(),
            &[".description", ".job-description", "[data-qa=\"job-description\"]"]
        );
    }

    #[test]
    fn domain_is_lowercased_netloc() {
        assert_eq!(
            domain_of("https://WWW.LinkedIn.com/jobs/view/123"),
            "www.linkedin.com"
        );
        assert_eq!(domain_of("http://uk.indeed.com:8080/viewjob?jk=1"), "uk.indeed.com:8080");
        assert_eq!(domain_of("not a url"), "");
        assert_eq!(domain_of("linkedin.com/jobs/view/1"), "");
    }

    #[test]
    fn classifies_known_boards() {
        let cases = [
            ("https://www.linkedin.com/jobs/view/3791", JobSource::LinkedIn),
            ("https://uk.linkedin.com/jobs/view/3791", JobSource::LinkedIn),
            ("https://uk.indeed.com/viewjob?jk=abc", JobSource::Indeed),
            ("https://www.indeed.com/viewjob?jk=abc", JobSource::Indeed),
            ("https://www.reed.co.uk/jobs/rust-developer/5120", JobSource::Reed),
        ];
        for (url, expected) in cases {
            assert_eq!(JobSource::from_url(url), Some(expected), "url: {}", url);
        }
    }

    #[test]
    fn rejects_unknown_domains() {
        for url in [
            "https://example.com/jobs/1",
            "https://glassdoor.co.uk/job/1",
            "https://reed.com/jobs/1",
            "ftp://",
            "",
        ] {
            assert!(!is_supported_url(url), "url: {}", url);
        }
    }

    #[test]
    fn fragment_match_is_substring_based() {
        assert_eq!(
            JobSource::from_domain("notlinkedin.com.example.org"),
            Some(JobSource::LinkedIn)
        );
        // Fragments are matched against the domain only, never the path.
        assert_eq!(
            JobSource::from_url("https://example.com/linkedin.com"),
            None
        );
    }

    #[test]
    fn resolve_source_reports_domain() {
        let err = resolve_source("https://Jobs.Example.com/1", "Extract").unwrap_err();
        assert!(err.is_unsupported_site());
        assert_eq!(err.domain.as_deref(), Some("jobs.example.com"));

        let source = resolve_source("https://www.reed.co.uk/jobs/1", "Extract").unwrap();
        assert_eq!(source, JobSource::Reed);
    }

    #[test]
    fn all_sources_have_fragments_in_match_order() {
        let fragments: Vec<&str> = JobSource::ALL.iter().map(|s| s.domain_fragment()).collect();
        let table: Vec<&str> = DOMAIN_FRAGMENTS.iter().map(|(f, _)| *f).collect();
        assert_eq!(fragments, table);
    }
}
