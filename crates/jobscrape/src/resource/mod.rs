// ABOUTME: Page fetching for job postings: one GET, status check, size limit and charset decoding.
// ABOUTME: Classifies failures as HTTP status, timeout or transport errors; never retries.

use std::collections::HashMap;

use bytes::Bytes;

use crate::error::ExtractError;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

const OP: &str = "Fetch";

/// A fetched page.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as text, using the charset from the content-type header or detection.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Decode body bytes to a String using charset from content-type header or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Map a reqwest failure onto the fetch error taxonomy.
fn classify(url: &str, err: reqwest::Error, what: &str) -> ExtractError {
    if err.is_timeout() {
        ExtractError::timeout(
            url,
            OP,
            Some(anyhow::anyhow!(
                "request timed out, the job site may be slow to respond: {}",
                err
            )),
        )
    } else {
        ExtractError::transport(url, OP, Some(anyhow::anyhow!("{}: {}", what, err)))
    }
}

/// Fetch a job page with a single GET.
///
/// Only HTTP 200 is a success. Timeouts come from the client's configured
/// total timeout.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    headers: &HashMap<String, String>,
) -> Result<FetchResult, ExtractError> {
    let mut request = client.get(url);
    for (key, value) in headers {
        request = request.header(key, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| classify(url, e, "request failed"))?;

    let status = response.status().as_u16();
    if status != 200 {
        return Err(ExtractError::http_status(url, OP, status));
    }

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(ExtractError::transport(
                url,
                OP,
                Some(anyhow::anyhow!("content too large: {} bytes", len)),
            ));
        }
    }

    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response
        .bytes()
        .await
        .map_err(|e| classify(url, e, "failed to read body"))?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(ExtractError::transport(
            url,
            OP,
            Some(anyhow::anyhow!("content too large: {} bytes", body.len())),
        ));
    }

    Ok(FetchResult {
        status,
        final_url,
        content_type,
        body,
    })
}
