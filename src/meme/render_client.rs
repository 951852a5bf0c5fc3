use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{MemeError, Result};

pub const MEMEGEN_BASE_URL: &str = "https://api.memegen.link";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// urllib quote(s, safe='') equivalence: escape everything outside
// [A-Za-z0-9_.~-].
const SEGMENT_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Client for the meme-rendering service: builds caption URLs and fetches
/// the rendered PNG bytes.
#[derive(Clone)]
pub struct RenderClient {
    client: reqwest::Client,
    base_url: String,
}

impl RenderClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| MemeError::ClientError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: MEMEGEN_BASE_URL.to_string(),
        })
    }

    /// Points the client at a different rendering endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builds the rendered-image URL for a template and caption pair.
    ///
    /// Empty caption segments encode to the service's `_` placeholder. The
    /// template identifier is embedded as-is; no local validation.
    pub fn build_url(&self, template: &str, top: &str, bottom: &str) -> String {
        format!(
            "{}/images/{}/{}/{}.png",
            self.base_url,
            template,
            encode_segment(top),
            encode_segment(bottom)
        )
    }

    /// Fetches rendered image bytes. Single GET, bounded timeout, no retry.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        log::info!("Fetching meme image: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MemeError::RequestError(format!("meme image request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MemeError::ResponseError(format!(
                "meme service returned {}: {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| MemeError::ResponseError(format!("failed to read image bytes: {}", e)))?;

        log::debug!("Fetched {} image bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}

fn encode_segment(segment: &str) -> String {
    if segment.is_empty() {
        "_".to_string()
    } else {
        utf8_percent_encode(segment, SEGMENT_ENCODE).to_string()
    }
}
