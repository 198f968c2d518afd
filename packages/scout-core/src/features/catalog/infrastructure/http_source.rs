//! HTTP catalog source (`GET {base_url}{endpoint}`)

use std::time::Duration;

use async_trait::async_trait;

use crate::config::CatalogConfig;
use crate::errors::{ScoutError, ScoutResult};
use crate::features::catalog::domain::parse_features_response;
use crate::features::catalog::ports::CatalogSource;
use crate::shared::models::FeatureRecord;

/// Request URL for a base URL and endpoint path
pub fn catalog_url(base_url: &str, endpoint: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    if endpoint.starts_with('/') {
        format!("{}{}", base_url, endpoint)
    } else {
        format!("{}/{}", base_url, endpoint)
    }
}

/// Catalog source backed by the web-platform status API
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(config: &CatalogConfig) -> ScoutResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("baseline-scout/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: catalog_url(&config.base_url, &config.endpoint),
        })
    }

    /// Full request URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_features(&self) -> ScoutResult<Vec<FeatureRecord>> {
        tracing::debug!("GET {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScoutError::catalog(format!(
                "API Request Failed: {}",
                status.as_u16()
            )));
        }

        let body: serde_json::Value = response.json().await?;
        Ok(parse_features_response(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_endpoint() {
        let mut config = CatalogConfig::default();
        config.base_url = "https://api.webstatus.dev/v1/".to_string();
        config.endpoint = "/features".to_string();
        let source = HttpCatalogSource::new(&config).unwrap();
        assert_eq!(source.url(), "https://api.webstatus.dev/v1/features");

        config.endpoint = "features?q=baseline_status:limited".to_string();
        let source = HttpCatalogSource::new(&config).unwrap();
        assert_eq!(
            source.url(),
            "https://api.webstatus.dev/v1/features?q=baseline_status:limited"
        );
    }
}
