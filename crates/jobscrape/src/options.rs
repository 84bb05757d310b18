// ABOUTME: Configuration options for the job-posting extractor and the fluent ClientBuilder.
// ABOUTME: Defaults match a desktop browser identity with a 30 second total timeout.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;

/// User-Agent sent with every page request unless overridden.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Total request timeout unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration options for the extraction client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_client: None,
            headers: HashMap::new(),
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Use a custom HTTP client. Its own timeout and User-Agent settings apply.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a header to every page request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_impersonate_a_browser() {
        let opts = Options::default();
        assert_eq!(opts.timeout, Duration::from_secs(30));
        assert!(opts.user_agent.starts_with("Mozilla/5.0"));
        assert!(opts.user_agent.contains("Chrome/"));
        assert!(opts.headers.is_empty());
        assert!(opts.http_client.is_none());
    }

    #[test]
    fn builder_overrides_options() {
        let builder = ClientBuilder::new()
            .timeout(Duration::from_secs(5))
            .user_agent("jobscrape-test")
            .header("Accept-Language", "en-GB");
        assert_eq!(builder.opts.timeout, Duration::from_secs(5));
        assert_eq!(builder.opts.user_agent, "jobscrape-test");
        assert_eq!(
            builder.opts.headers.get("Accept-Language").map(String::as_str),
            Some("en-GB")
        );
    }
}
