//! Remote analysis service abstraction

use crate::error::{AnalysisError, HistoryError};
use crate::types::{HealthStatus, HistoryEntry};
use async_trait::async_trait;

/// The remote service the analysis and history clients talk to.
///
/// Implementations return raw payloads; parsing into results is done by the
/// clients so every backend shares one parsing policy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Submit a manuscript and return the raw `analysis` text blob
    async fn analyze(&self, content: &str) -> Result<String, AnalysisError>;

    /// Past manuscripts, in the order the service lists them
    async fn history(&self) -> Result<Vec<HistoryEntry>, HistoryError>;

    /// Liveness probe
    async fn health(&self) -> Result<HealthStatus, AnalysisError>;
}
