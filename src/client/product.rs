use std::time::Instant;

use reqwest::Client;

use crate::client::{FetchError, ProductSource};
use crate::config::EndpointConfig;

/// HTTP client for the product endpoint.
///
/// Built once at startup and shared by reference; it owns a connection pool,
/// so cloning the inner `reqwest::Client` is cheap but not needed.
pub struct ProductClient {
    client: Client,
    url: String,
}

impl ProductClient {
    pub fn new(endpoint: &EndpointConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(endpoint.connect_timeout())
            .timeout(endpoint.request_timeout())
            .build()?;

        Ok(Self {
            client,
            url: endpoint.url.clone(),
        })
    }

    async fn get_product(&self) -> Result<String, FetchError> {
        let started = Instant::now();

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            tracing::warn!(url = %self.url, error = %e, "Product request failed");
            FetchError::network(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(FetchError::network)?;

        tracing::debug!(
            url = %self.url,
            status = status.as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            bytes = body.len(),
            "Product request finished"
        );

        if status.is_success() {
            Ok(body)
        } else {
            Err(FetchError::Http {
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl ProductSource for ProductClient {
    fn fetch_product(
        &self,
    ) -> impl std::future::Future<Output = Result<String, FetchError>> + Send {
        self.get_product()
    }
}
