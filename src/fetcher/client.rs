use reqwest::{
    Client, ClientBuilder,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::fetcher::{charset::decode_body, errors::FetchError, types::PageResponse};

const MAX_BODY_SIZE: u64 = 8 * 1024 * 1024; // 8MB, large league pages run ~2MB

/// Blocking-free HTTP access to the wiki, one request at a time.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
        );

        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(10))
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &str) -> Result<PageResponse, FetchError> {
        let parsed_url = url::Url::parse(url)?;

        let response = self
            .client
            .get(parsed_url)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        if let Some(content_length) = response.content_length()
            && content_length > MAX_BODY_SIZE
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let url_final = response.url().clone();
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Http {
                status,
                retriable: status.is_server_error() || status.as_u16() == 429,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
            return Err(FetchError::UnsupportedContentType(content_type));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Io(e.to_string()))?;

        // Content-Length may be absent on chunked responses
        if body.len() as u64 > MAX_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(body.len() as u64));
        }

        let (body_utf8, charset) = decode_body(&content_type, &body)?;
        debug!(%status, ?charset, bytes = body.len(), "fetched page");

        Ok(PageResponse {
            url_final,
            status,
            body_utf8,
        })
    }
}
