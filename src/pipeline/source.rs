use async_trait::async_trait;
use std::collections::HashMap;
use url::Url;

use crate::extractor::Document;
use crate::fetcher::{FetchError, HttpSource};

/// Where the pipeline gets its pages from.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch_document(&self, url: &Url) -> Result<Document, FetchError>;
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch_document(&self, url: &Url) -> Result<Document, FetchError> {
        let page = self.fetch(url.as_str()).await?;
        Ok(Document::new(page.url_final, page.body_utf8))
    }
}

/// Pages served from memory, keyed by absolute URL. Unknown URLs answer 404.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pages: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }
}

#[async_trait]
impl DocumentSource for StaticSource {
    async fn fetch_document(&self, url: &Url) -> Result<Document, FetchError> {
        match self.pages.get(url.as_str()) {
            Some(html) => Ok(Document::new(url.clone(), html.clone())),
            None => Err(FetchError::Http {
                status: reqwest::StatusCode::NOT_FOUND,
                retriable: false,
            }),
        }
    }
}
