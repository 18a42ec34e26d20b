use anyhow::{Context, Result};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Endpoint;
use crate::models::ProbeResult;

/// Issues one bounded-timeout GET per endpoint. Strictly sequential: a
/// slow endpoint delays the rest of the pass up to the timeout bound.
pub struct Prober {
    client: reqwest::Client,
}

impl Prober {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// One full pass over the registry, in registry order. Per-endpoint
    /// failures are absorbed into `reachable = false`; this never fails.
    pub async fn probe_all(&self, endpoints: &[Endpoint]) -> Vec<ProbeResult> {
        let mut results = Vec::with_capacity(endpoints.len());
        for endpoint in endpoints {
            results.push(self.probe(endpoint).await);
        }
        results
    }

    async fn probe(&self, endpoint: &Endpoint) -> ProbeResult {
        let reachable = match self.client.get(&endpoint.url).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                info!("{}: Active (200)", endpoint.name);
                true
            }
            Ok(response) => {
                warn!("{}: Down ({})", endpoint.name, response.status());
                false
            }
            Err(error) => {
                warn!("{}: Down (error: {})", endpoint.name, error);
                false
            }
        };
        ProbeResult {
            endpoint_name: endpoint.name.clone(),
            reachable,
        }
    }
}
