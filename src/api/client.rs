//! Remote catalog client
//!
//! Fetches one page of artworks per request from the catalog API:
//! `GET <base_url>/artworks?page=<n>` where `n` is 1-based.
//! Each call is a single attempt; callers decide what to do on failure.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::CatalogConfig;
use crate::state::data::Artwork;

/// Total used when the catalog doesn't report one
pub const DEFAULT_TOTAL_RECORDS: u64 = 100;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} returned {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Response body of the artworks endpoint
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub data: Vec<Artwork>,
    #[serde(default)]
    pub pagination: Option<PaginationInfo>,
}

#[derive(Debug, Deserialize)]
pub struct PaginationInfo {
    #[serde(default)]
    pub total: Option<u64>,
}

/// One page of artworks plus the catalog's total record count
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub artworks: Vec<Artwork>,
    pub total_records: u64,
}

impl Page {
    /// Build a page from a decoded envelope
    ///
    /// A missing or zero total falls back to `DEFAULT_TOTAL_RECORDS`.
    pub fn from_envelope(envelope: Envelope) -> Self {
        let total_records = envelope
            .pagination
            .and_then(|p| p.total)
            .filter(|&total| total > 0)
            .unwrap_or(DEFAULT_TOTAL_RECORDS);

        Self {
            artworks: envelope.data,
            total_records,
        }
    }

    /// Decode a raw JSON response body
    pub fn from_json(body: &[u8]) -> Result<Self, FetchError> {
        let envelope: Envelope = serde_json::from_slice(body)?;
        Ok(Self::from_envelope(envelope))
    }
}

/// HTTP client for the artworks catalog
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Build a client from configuration
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL for a zero-based page index (the API counts pages from 1)
    pub fn page_url(&self, page_index: u32) -> String {
        format!("{}/artworks?page={}", self.base_url, page_index as u64 + 1)
    }

    /// Fetch one page of artworks
    pub async fn fetch_page(&self, page_index: u32) -> Result<Page, FetchError> {
        let url = self.page_url(page_index);
        tracing::debug!(%url, "fetching page");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        let body = response.bytes().await?;
        let page = Page::from_json(&body)?;

        tracing::debug!(
            page_index,
            count = page.artworks.len(),
            total = page.total_records,
            "page fetched"
        );
        Ok(page)
    }
}
