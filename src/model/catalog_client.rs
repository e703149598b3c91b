//! Book catalog API client

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use super::error::FetchError;
use super::types::CatalogItem;
use super::volumes::parse_volumes;

/// Anything that can answer a catalog search.
///
/// One call is one outbound request; implementations never retry.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn search(&self, term: &str, limit: u32) -> Result<Vec<CatalogItem>, FetchError>;
}

/// HTTP client for the public volumes endpoint
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(format!("buildup/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn volumes_url(&self) -> String {
        format!("{}/volumes", self.base_url)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn search(&self, term: &str, limit: u32) -> Result<Vec<CatalogItem>, FetchError> {
        crate::log_api_request!("volumes", term, limit);

        let result: Result<Vec<CatalogItem>, FetchError> = async {
            let response = self
                .http
                .get(self.volumes_url())
                .query(&[("q", term.to_string()), ("maxResults", limit.to_string())])
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Http {
                    status: status.as_u16(),
                });
            }

            let body = response.text().await?;
            parse_volumes(&body)
        }
        .await;

        crate::log_api_result!("volumes", result, term, limit);
        result
    }
}
