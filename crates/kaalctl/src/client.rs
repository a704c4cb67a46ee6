//! HTTP client for communicating with kaald.

use crate::errors::ClientError;
use anyhow::{Context, Result};
use kaal_common::Reply;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default daemon address
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

/// Daemon health as reported by /v1/health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub sites: usize,
}

/// Client for communicating with kaald
pub struct KaalClient {
    base_url: String,
    http: reqwest::Client,
}

impl KaalClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one command and return the daemon's reply
    pub async fn command(&self, text: &str) -> Result<Reply, ClientError> {
        let url = format!("{}/api/command", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .map_err(|e| self.unavailable(e))?;

        let status = response.status();
        let reply: Reply = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        if status.is_client_error() {
            return Err(ClientError::Rejected(reply.reply));
        }
        if !status.is_success() {
            return Err(ClientError::InvalidResponse(format!("HTTP {}", status)));
        }

        Ok(reply)
    }

    /// Get daemon health
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = format!("{}/v1/health", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.unavailable(e))?;

        if !response.status().is_success() {
            return Err(ClientError::InvalidResponse(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    fn unavailable(&self, error: reqwest::Error) -> ClientError {
        ClientError::Unavailable {
            url: self.base_url.clone(),
            reason: error.to_string(),
        }
    }
}
