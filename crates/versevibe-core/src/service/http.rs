//! HTTP backend for the analysis service
//!
//! Endpoints:
//! - `POST /analyze` with `{ "content": ... }`, answering `{ "analysis": ... }`
//! - `GET /history`, answering `{ "history": [...] }`
//! - `GET /health`, answering `{ "status": ..., "message": ... }`
//!
//! Non-2xx answers may carry `{ "error": ... }`.

use super::AnalysisBackend;
use crate::config::ServiceConfig;
use crate::error::{AnalysisError, ConfigError, HistoryError};
use crate::types::{HealthStatus, HistoryEntry};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    content: &'a str,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    analysis: String,
}

#[derive(Deserialize)]
struct HistoryResponse {
    history: Vec<HistoryEntry>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// `reqwest` implementation of [`AnalysisBackend`]
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: ServiceConfig,
}

impl HttpBackend {
    pub fn new(config: ServiceConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Backend for the service named by the environment
    pub fn from_env() -> crate::Result<Self> {
        let config = ServiceConfig::from_env()?;
        Ok(Self::new(config)?)
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Status and optional `error` field of a failed response
async fn failure_parts(response: Response) -> (u16, Option<String>) {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.error);
    warn!("Service answered {}: {}", status, text);
    (status.as_u16(), message)
}

#[async_trait]
impl AnalysisBackend for HttpBackend {
    async fn analyze(&self, content: &str) -> Result<String, AnalysisError> {
        let url = self.config.endpoint("/analyze");
        debug!("POST {} ({} bytes)", url, content.len());

        let response = self
            .client
            .post(&url)
            .json(&AnalyzeRequest { content })
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = failure_parts(response).await;
            return Err(AnalysisError::Service { status, message });
        }

        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;
        Ok(body.analysis)
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let url = self.config.endpoint("/history");
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HistoryError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = failure_parts(response).await;
            return Err(HistoryError::Service { status, message });
        }

        let body: HistoryResponse = response
            .json()
            .await
            .map_err(|e| HistoryError::MalformedResponse(e.to_string()))?;
        Ok(body.history)
    }

    async fn health(&self) -> Result<HealthStatus, AnalysisError> {
        let url = self.config.endpoint("/health");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        if response.status() != StatusCode::OK {
            let (status, message) = failure_parts(response).await;
            return Err(AnalysisError::Service { status, message });
        }

        response
            .json()
            .await
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
    }
}
