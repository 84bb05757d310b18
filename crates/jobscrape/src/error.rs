// ABOUTME: Error types for job-posting extraction including ErrorCode enum and ExtractError struct.
// ABOUTME: Only unsupported sites and fetch failures surface; selector and fallback faults never do.

use std::fmt;

/// Error codes representing the categories of extraction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnsupportedSite,
    HttpStatus,
    Timeout,
    Transport,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::UnsupportedSite => "unsupported job site",
            ErrorCode::HttpStatus => "unexpected HTTP status",
            ErrorCode::Timeout => "timeout",
            ErrorCode::Transport => "transport error",
        };
        write!(f, "{}", s)
    }
}

/// The error returned by extraction calls.
#[derive(Debug, thiserror::Error)]
pub struct ExtractError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    /// HTTP status code, set for `HttpStatus` errors.
    pub status: Option<u16>,
    /// Lower-cased network location, set for `UnsupportedSite` errors.
    pub domain: Option<String>,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "jobscrape: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ExtractError {
    fn new(
        code: ErrorCode,
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            op: op.into(),
            status: None,
            domain: None,
            source,
        }
    }

    /// Create an UnsupportedSite error for the given domain.
    pub fn unsupported_site(
        url: impl Into<String>,
        op: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        let domain = domain.into();
        let mut err = Self::new(
            ErrorCode::UnsupportedSite,
            url,
            op,
            Some(anyhow::anyhow!("no extractor for domain {:?}", domain)),
        );
        err.domain = Some(domain);
        err
    }

    /// Create an HttpStatus error for a non-200 response.
    pub fn http_status(url: impl Into<String>, op: impl Into<String>, status: u16) -> Self {
        let mut err = Self::new(
            ErrorCode::HttpStatus,
            url,
            op,
            Some(anyhow::anyhow!("HTTP {}: failed to fetch page", status)),
        );
        err.status = Some(status);
        err
    }

    /// Create a Timeout error.
    pub fn timeout(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Timeout, url, op, source)
    }

    /// Create a Transport error.
    pub fn transport(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Transport, url, op, source)
    }

    /// Returns true if the URL's domain is not a known job board.
    pub fn is_unsupported_site(&self) -> bool {
        self.code == ErrorCode::UnsupportedSite
    }

    /// Returns true if the page could not be retrieved (status, timeout or transport).
    pub fn is_fetch(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::HttpStatus | ErrorCode::Timeout | ErrorCode::Transport
        )
    }

    /// Returns true if this is a Timeout error.
    pub fn is_timeout(&self) -> bool {
        self.code == ErrorCode::Timeout
    }

    /// The HTTP status of a rejected response, if any.
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}
