// API client module: a small blocking HTTP client for the local Ollama
// server. One probe call and one generate call, no retries, no timeout
// on the client side (reqwest's blocking default of 30s is lifted).

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::itinerary::GenerateRequest;
use anyhow::Context;
use reqwest::blocking::Client;
use std::time::Duration;

/// Holds the reqwest blocking client and the server's base URL.
#[derive(Clone, Debug)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    /// Create a client for the server named in the configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(&config.host)
    }

    /// A trailing `/` on `base_url` is dropped.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(OllamaClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Liveness probe: GET /api/version. Any HTTP answer, whatever its
    /// status, means the server is up.
    pub fn check_connection(&self) -> Result<()> {
        let url = format!("{}/api/version", &self.base_url);
        tracing::debug!("probing {}", url);
        match self.client.get(&url).send() {
            Ok(res) => {
                tracing::debug!("probe answered with {}", res.status());
                Ok(())
            }
            Err(source) => {
                tracing::error!("probe failed: {}", source);
                Err(ApiError::Unreachable { url, source })
            }
        }
    }

    /// POST /api/generate and return the raw body of a successful response.
    /// A non-success status keeps the body so callers can report it.
    pub fn generate(&self, req: &GenerateRequest) -> Result<String> {
        let url = format!("{}/api/generate", &self.base_url);
        tracing::debug!(model = %req.model, prompt_len = req.prompt.len(), "sending generate request");
        let res = self.client.post(&url).json(req).send()?;
        let status = res.status();
        tracing::debug!("generate answered with {}", status);
        if !status.is_success() {
            let body = res.text().unwrap_or_else(|_| "".into());
            return Err(ApiError::Status { status, url, body });
        }
        Ok(res.text()?)
    }
}
