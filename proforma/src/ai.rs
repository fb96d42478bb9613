//! AI document analysis client.
//!
//! Posts a prompt and a file reference to the configured endpoint and
//! returns the response body. Retry and backoff are left to the caller.

use std::time::Duration;

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;

use crate::config::AppConfig;

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    prompt: &'a str,
    file: &'a str,
}

/// HTTP client for the AI analysis endpoint.
pub struct AiClient {
    endpoint: String,
    client: reqwest::Client,
}

impl AiClient {
    /// Build a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to create HTTP client")?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    /// Submit a file reference with a prompt and return the response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable response body.
    pub async fn analyze(&self, prompt: &str, file: &str) -> anyhow::Result<Value> {
        debug!("posting analysis request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest { prompt, file })
            .send()
            .await
            .with_context(|| format!("failed to post to {}", self.endpoint))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error {}: {}", response.status(), self.endpoint);
        }

        let body = response
            .json()
            .await
            .context("failed to read response body")?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = AnalyzeRequest {
            prompt: "extract fields",
            file: "https://files.example/scan.jpg",
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "prompt": "extract fields",
                "file": "https://files.example/scan.jpg"
            })
        );
    }

    #[test]
    fn test_client_from_config() {
        let client = AiClient::new(&AppConfig::default()).unwrap();
        assert_eq!(client.endpoint, AppConfig::default().endpoint);
    }
}
