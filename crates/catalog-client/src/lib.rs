//! OMDb catalog client for fetching movie records over HTTP.
//!
//! This crate provides the `CatalogSource` implementation backed by the
//! OMDb query-string API. It handles:
//! - Request construction against the single GET endpoint
//! - Decoding the provider's response envelopes
//! - Collapsing every failure mode into the empty outcome
//!
//! The provider exposes one endpoint; requests differ only in which
//! lookup parameter they carry (`t` exact title, `s` keyword, `i` IMDb
//! id) alongside the caller's `apikey`. "Not found" arrives inside a 200
//! response as `Response: "False"`, never as an HTTP error.

use async_trait::async_trait;
use movie_data::{normalize, CanonicalMovie, CatalogSource, RawMovieRecord};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Public OMDb endpoint. Tests point the client at a local stub instead.
const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Errors from a single catalog lookup.
///
/// These never escape the public trait methods; they exist so the
/// internal request path can use `?` and the boundary can log one
/// coherent reason before collapsing to the empty outcome.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("provider rejected the lookup: {message}")]
    Provider { message: String },
}

// =============================================================================
// Response envelopes
// =============================================================================

/// Envelope for single-record lookups (`t` and `i` queries). The record
/// fields sit flat alongside the envelope's own.
#[derive(Debug, Deserialize)]
struct LookupEnvelope {
    #[serde(rename = "Response", default)]
    response: String,
    #[serde(rename = "Error", default)]
    error: Option<String>,
    #[serde(flatten)]
    record: RawMovieRecord,
}

impl LookupEnvelope {
    fn into_record(self) -> Result<RawMovieRecord, CatalogError> {
        if self.response.eq_ignore_ascii_case("true") {
            Ok(self.record)
        } else {
            Err(CatalogError::Provider {
                message: self.error.unwrap_or_else(|| "lookup refused".to_string()),
            })
        }
    }
}

/// Envelope for keyword searches (`s` queries).
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Response", default)]
    response: String,
    #[serde(rename = "Error", default)]
    error: Option<String>,
    #[serde(rename = "Search", default)]
    results: Vec<RawMovieRecord>,
}

impl SearchEnvelope {
    fn into_results(self) -> Result<Vec<RawMovieRecord>, CatalogError> {
        if self.response.eq_ignore_ascii_case("true") {
            Ok(self.results)
        } else {
            Err(CatalogError::Provider {
                message: self.error.unwrap_or_else(|| "search refused".to_string()),
            })
        }
    }
}

// =============================================================================
// Client
// =============================================================================

/// Client for the OMDb catalog API.
pub struct OmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Create a client for the public OMDb endpoint.
    ///
    /// # Arguments
    /// * `api_key` - The caller's OMDb API key, sent with every request
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different endpoint (stub servers in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Address of the catalog endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.base_url
    }

    /// Issue one GET carrying a single lookup parameter and decode the
    /// body into the requested envelope.
    async fn fetch_envelope<T: serde::de::DeserializeOwned>(
        &self,
        param: &str,
        value: &str,
    ) -> Result<T, CatalogError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), (param, value)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Provider {
                message: format!("status {}: {}", status, message),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn try_by_title(&self, title: &str) -> Result<RawMovieRecord, CatalogError> {
        let envelope: LookupEnvelope = self.fetch_envelope("t", title).await?;
        envelope.into_record()
    }

    async fn try_by_id(&self, id: &str) -> Result<RawMovieRecord, CatalogError> {
        let envelope: LookupEnvelope = self.fetch_envelope("i", id).await?;
        envelope.into_record()
    }

    async fn try_search(&self, keyword: &str) -> Result<Vec<RawMovieRecord>, CatalogError> {
        let envelope: SearchEnvelope = self.fetch_envelope("s", keyword).await?;
        envelope.into_results()
    }
}

/// One diagnostic line per collapsed lookup. A provider refusal is the
/// ordinary "no such movie" case and logs quietly; anything else means
/// the request itself went wrong.
fn log_miss(operation: &str, term: &str, err: &CatalogError) {
    match err {
        CatalogError::Provider { .. } => {
            debug!("{} for {:?} came back empty: {}", operation, term, err)
        }
        _ => warn!("{} for {:?} failed: {}", operation, term, err),
    }
}

#[async_trait]
impl CatalogSource for OmdbClient {
    #[instrument(skip(self))]
    async fn movie_by_title(&self, title: &str) -> Option<CanonicalMovie> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        match self.try_by_title(title).await {
            Ok(raw) => Some(normalize(&raw)),
            Err(err) => {
                log_miss("title lookup", title, &err);
                None
            }
        }
    }

    #[instrument(skip(self))]
    async fn search_by_keyword(&self, keyword: &str) -> Vec<CanonicalMovie> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Vec::new();
        }

        match self.try_search(keyword).await {
            Ok(raw_records) => {
                debug!("keyword {:?} matched {} records", keyword, raw_records.len());
                raw_records.iter().map(normalize).collect()
            }
            Err(err) => {
                log_miss("keyword search", keyword, &err);
                Vec::new()
            }
        }
    }

    #[instrument(skip(self))]
    async fn movie_by_id(&self, id: &str) -> Option<CanonicalMovie> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }

        match self.try_by_id(id).await {
            Ok(raw) => Some(normalize(&raw)),
            Err(err) => {
                log_miss("id lookup", id, &err);
                None
            }
        }
    }
}
