use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::debug;

use super::traits::FundDataProvider;
use crate::errors::CoreError;
use crate::models::fund::{FundDetail, FundSummary};

const BASE_URL: &str = "https://api.mfapi.in";

/// MFAPI client for mutual fund search and historical NAV data.
///
/// - **Free**: no API key, read-only.
/// - **Coverage**: Indian mutual fund schemes, daily NAV history.
/// - **Endpoints**: `/mf/search?q={query}`, `/mf/{schemeCode}`
///
/// Errors are coarse on purpose: any non-2xx collapses into a single
/// "search failed" / "fund lookup failed" condition per the flat taxonomy.
pub struct MfApiClient {
    client: Client,
    base_url: String,
}

impl MfApiClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the client at a different host (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
        }
    }
}

impl Default for MfApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl FundDataProvider for MfApiClient {
    fn name(&self) -> &str {
        "MFAPI"
    }

    async fn search(&self, query: &str) -> Result<Vec<FundSummary>, CoreError> {
        let url = format!("{}/mf/search", self.base_url);
        debug!(query, "searching funds");

        let resp = self.client.get(&url).query(&[("q", query)]).send().await?;

        if !resp.status().is_success() {
            return Err(CoreError::Api {
                provider: "MFAPI".into(),
                message: format!("search failed (HTTP {})", resp.status().as_u16()),
            });
        }

        let results: Vec<FundSummary> = resp.json().await.map_err(|e| CoreError::Api {
            provider: "MFAPI".into(),
            message: format!("failed to parse search results: {e}"),
        })?;

        debug!(hits = results.len(), "search complete");
        Ok(results)
    }

    async fn detail(&self, scheme_code: &str) -> Result<FundDetail, CoreError> {
        let url = format!("{}/mf/{scheme_code}", self.base_url);
        debug!(scheme_code, "fetching fund detail");

        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(CoreError::Api {
                provider: "MFAPI".into(),
                message: format!(
                    "fund lookup failed for {scheme_code} (HTTP {})",
                    resp.status().as_u16()
                ),
            });
        }

        resp.json().await.map_err(|e| CoreError::Api {
            provider: "MFAPI".into(),
            message: format!("failed to parse fund detail for {scheme_code}: {e}"),
        })
    }
}
