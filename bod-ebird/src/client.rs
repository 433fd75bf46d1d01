//! Async client for the eBird v2 API.
//!
//! One fetch per render cycle, optionally short-circuited by a
//! process-wide cache keyed on the request URL. The cache has no expiry;
//! it lives as long as the client and is cleared with [`EbirdClient::invalidate`].
//! There is no retry policy: a failed fetch fails that cycle and the
//! caller degrades to an empty record set.

use crate::error::{EbirdError, Result};
use crate::observation::{decode_observations, RawObservation};
use log::{info, warn};
use reqwest::Client;
use std::collections::HashMap;

/// Base URL of the eBird v2 API.
pub const API_BASE_URL: &str = "https://api.ebird.org/v2";

/// Header carrying the API token on every request.
pub const API_TOKEN_HEADER: &str = "X-eBirdApiToken";

/// Query parameters for the notable-observations endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct NotableQuery {
    /// How many days back to look for observations
    pub back: u32,
    /// Detail level of the returned records: "simple" or "full"
    pub detail: String,
    /// Only include observations from birding hotspots
    pub hotspot: bool,
    /// Maximum number of records to return
    pub max_results: u32,
    /// Locale for species common names
    pub spp_locale: String,
}

impl Default for NotableQuery {
    fn default() -> Self {
        NotableQuery {
            back: 14,
            detail: "simple".to_string(),
            hotspot: false,
            max_results: 100,
            spp_locale: "en".to_string(),
        }
    }
}

impl NotableQuery {
    fn as_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("back", self.back.to_string()),
            ("detail", self.detail.clone()),
            ("hotspot", self.hotspot.to_string()),
            ("maxResults", self.max_results.to_string()),
            ("sppLocale", self.spp_locale.clone()),
        ]
    }
}

fn cache_key(url: &str, params: &[(&'static str, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{url}?{query}")
}

/// eBird API client holding the token and the fetch cache.
pub struct EbirdClient {
    client: Client,
    api_token: String,
    base_url: String,
    cache: HashMap<String, Vec<RawObservation>>,
}

impl EbirdClient {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self::with_base_url(api_token, API_BASE_URL)
    }

    /// A client pointed at an alternate base URL. Tests use this to stand
    /// in a local server for the eBird API.
    pub fn with_base_url(api_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        EbirdClient {
            client: Client::new(),
            api_token: api_token.into(),
            base_url: base_url.into(),
            cache: HashMap::new(),
        }
    }

    /// Drop everything in the fetch cache.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    /// Fetch recent observations for a region, e.g. "US".
    pub async fn recent_observations(&mut self, region: &str) -> Result<Vec<RawObservation>> {
        let url = format!("{}/data/obs/{}/recent", self.base_url, region);
        self.fetch_cached(url, Vec::new()).await
    }

    /// Fetch recent notable observations for a region.
    pub async fn notable_observations(
        &mut self,
        region: &str,
        query: &NotableQuery,
    ) -> Result<Vec<RawObservation>> {
        let url = format!("{}/data/obs/{}/recent/notable", self.base_url, region);
        self.fetch_cached(url, query.as_params()).await
    }

    async fn fetch_cached(
        &mut self,
        url: String,
        params: Vec<(&'static str, String)>,
    ) -> Result<Vec<RawObservation>> {
        let key = cache_key(&url, &params);
        if let Some(hit) = self.cache.get(&key) {
            info!("cache hit for {}", key);
            return Ok(hit.clone());
        }

        let mut request = self
            .client
            .get(&url)
            .header(API_TOKEN_HEADER, self.api_token.as_str());
        if !params.is_empty() {
            request = request.query(&params);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("eBird request to {} returned {}", url, status);
            return Err(EbirdError::FetchFailed(status.as_u16()));
        }

        let body = response.text().await?;
        let records = decode_observations(&body)?;
        info!("{} raw observations from {}", records.len(), key);
        self.cache.insert(key, records.clone());
        Ok(records)
    }
}
