// ABOUTME: The Client that resolves the job board, fetches the posting and extracts its description.
// ABOUTME: Runs site selectors in order, then the fallback heuristic, and normalizes the accepted text.

use scraper::Html;

use crate::error::ExtractError;
use crate::extractors::compiled::site_selectors;
use crate::extractors::fallback::extract_fallback_content;
use crate::extractors::select::first_sufficient_match;
use crate::normalize::{char_len, clean_text};
use crate::options::{ClientBuilder, Options};
use crate::resource::fetch;
use crate::result::{ExtractionResult, Strategy};
use crate::sites::{resolve_source, JobSource};

/// Extract the job description from HTML already fetched from a job board.
///
/// Site selectors are tried first; the whole-document fallback runs only when
/// none of them yields more than the minimum amount of text. This never fails.
pub fn extract_job_description(html: &str, url: &str, source: JobSource) -> ExtractionResult {
    let mut doc = Html::parse_document(html);

    let (strategy, content) = match first_sufficient_match(&doc, site_selectors(source)) {
        Some(hit) => {
            tracing::info!(
                url,
                source = %source,
                selector = hit.selector,
                position = hit.position,
                "site selector matched"
            );
            let strategy = Strategy::Selector {
                position: hit.position,
                selector: hit.selector.to_string(),
            };
            (strategy, hit.text)
        }
        None => {
            tracing::warn!(url, source = %source, "no site selector matched, using fallback");
            let text = clean_text(&extract_fallback_content(&mut doc));
            (Strategy::Fallback, text)
        }
    };

    let result = ExtractionResult {
        url: url.to_string(),
        source,
        char_count: char_len(&content),
        strategy,
        content,
    };
    tracing::info!(
        url,
        chars = result.char_count,
        words = result.word_count(),
        "extracted job description"
    );
    result
}

/// Extract from saved HTML, resolving the job board from `url`. No network access.
pub fn extract_html(html: &str, url: &str) -> Result<ExtractionResult, ExtractError> {
    let source = resolve_source(url, "ExtractHtml")?;
    Ok(extract_job_description(html, url, source))
}

/// Fetches job postings and extracts their descriptions.
///
/// Calls are independent: nothing is cached and no cookies are kept, so the
/// same URL requested twice is fetched twice.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Extract the job description text from a job-board URL.
    ///
    /// Fails with `UnsupportedSite` before any request is made when the domain
    /// is not a known job board, and with a fetch error when the page cannot
    /// be retrieved. Content problems never fail; see [`extract_job_description`].
    pub async fn extract(&self, url: &str) -> Result<String, ExtractError> {
        self.extract_detailed(url)
            .await
            .map(ExtractionResult::into_content)
    }

    /// Like [`Client::extract`], but also reports which strategy produced the text.
    pub async fn extract_detailed(&self, url: &str) -> Result<ExtractionResult, ExtractError> {
        let source = resolve_source(url, "Extract").map_err(|err| {
            tracing::error!(url, error = %err, "unsupported job site");
            err
        })?;
        tracing::info!(url, source = %source, "fetching job posting");

        let page = fetch(&self.http_client, url, &self.opts.headers)
            .await
            .map_err(|err| {
                tracing::error!(url, source = %source, error = %err, "failed to fetch job posting");
                err
            })?;
        tracing::debug!(
            url,
            status = page.status,
            final_url = %page.final_url,
            bytes = page.body.len(),
            "fetched job posting"
        );

        let html = page.text();
        Ok(extract_job_description(&html, url, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::fallback::FALLBACK_SENTINEL;
    use pretty_assertions::assert_eq;

    const LINKEDIN_URL: &str = "https://www.linkedin.com/jobs/view/3791";

    fn lorem(n: usize) -> String {
        let base = "Lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod tempor ";
        base.repeat(n / base.len() + 1).chars().take(n).collect::<String>()
    }

    #[test]
    fn linkedin_description_excludes_script() {
        let description = lorem(150).trim_end().to_string();
        let script = format!("var tracking = '{}';", "z".repeat(480));
        let html = format!(
            r#"<html><head><script>{}</script></head><body>
                <div class="description__text">
                    {}
                </div>
                <script>{}</script>
            </body></html>"#,
            script, description, script
        );

        let result = extract_job_description(&html, LINKEDIN_URL, JobSource::LinkedIn);
        assert_eq!(result.content, description);
        assert!(!result.content.contains("tracking"));
        assert_eq!(
            result.strategy,
            Strategy::Selector {
                position: 0,
                selector: ".description__text".to_string()
            }
        );
        assert_eq!(result.char_count, char_len(&description));
    }

    #[test]
    fn selector_text_is_whitespace_collapsed() {
        let html = format!(
            "<div id=\"jobDescriptionText\"><h2>About\n the role</h2>\n\n<p>{}</p>\t<p>{}</p></div>",
            lorem(60),
            lorem(60)
        );
        let result = extract_job_description(&html, "https://uk.indeed.com/viewjob", JobSource::Indeed);
        assert!(!result.content.contains('\n'));
        assert!(!result.content.contains('\t'));
        assert!(result.content.starts_with("About the role"));
    }

    #[test]
    fn falls_back_when_no_selector_is_sufficient() {
        let paragraph = lorem(250);
        let html = format!(
            r#"<html><body>
                <nav>{}</nav>
                <div class="description">Too short</div>
                <main>{}</main>
                <footer>{}</footer>
            </body></html>"#,
            lorem(900),
            paragraph,
            lorem(900)
        );
        let result = extract_job_description(&html, "https://www.reed.co.uk/jobs/1", JobSource::Reed);
        assert!(result.is_fallback());
        // The short .description text is still part of the page text.
        assert_eq!(result.content, clean_text(&format!("Too short {}", paragraph)));
    }

    #[test]
    fn fallback_result_is_normalized() {
        let html = "<html><body><p>   Closed   Share  </p></body></html>";
        let result = extract_job_description(html, LINKEDIN_URL, JobSource::LinkedIn);
        assert!(result.is_fallback());
        assert_eq!(result.content, "Closed");
        assert_ne!(result.content, FALLBACK_SENTINEL);
    }

    #[test]
    fn extract_html_rejects_unsupported_site() {
        let err = extract_html("<p>job</p>", "https://jobs.example.org/1").unwrap_err();
        assert!(err.is_unsupported_site());
        assert_eq!(err.domain.as_deref(), Some("jobs.example.org"));
    }

    #[test]
    fn extract_html_resolves_source() {
        let html = format!(r#"<div data-qa="job-description">{}</div>"#, lorem(120));
        let result = extract_html(&html, "https://www.reed.co.uk/jobs/rust/42").unwrap();
        assert_eq!(result.source, JobSource::Reed);
        assert_eq!(result.url, "https://www.reed.co.uk/jobs/rust/42");
        assert!(!result.is_fallback());
    }

    #[tokio::test]
    async fn unsupported_site_fails_without_fetching() {
        let client = Client::builder().build();
        let err = client
            .extract("https://careers.example.com/jobs/1")
            .await
            .expect_err("unsupported site");
        assert!(err.is_unsupported_site());
        assert!(!err.is_fetch());
    }

    #[test]
    fn client_is_shareable_across_tasks() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
