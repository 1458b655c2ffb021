use super::AnalysisBackend;
use crate::error::HistoryError;
use crate::types::HistoryEntry;
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of one history fetch: entries on success, otherwise an empty
/// list plus the failure to notify about.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryFetch {
    pub entries: Vec<HistoryEntry>,
    pub error: Option<HistoryError>,
}

impl HistoryFetch {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Lists past manuscripts. Safe to call repeatedly.
#[derive(Clone)]
pub struct HistoryClient {
    backend: Arc<dyn AnalysisBackend>,
}

impl HistoryClient {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self { backend }
    }

    pub async fn fetch(&self) -> HistoryFetch {
        match self.backend.history().await {
            Ok(entries) => {
                info!("Fetched {} history entries", entries.len());
                HistoryFetch {
                    entries,
                    error: None,
                }
            }
            Err(e) => {
                warn!("History fetch failed: {}", e);
                HistoryFetch {
                    entries: Vec::new(),
                    error: Some(e),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockAnalysisBackend;

    fn entry(id: i64) -> HistoryEntry {
        HistoryEntry {
            id,
            title: format!("Draft {}", id),
            content: "text".to_string(),
            feedback: None,
            created_at: "2024-03-04T09:15:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_keeps_order() {
        let mut mock = MockAnalysisBackend::new();
        mock.expect_history()
            .times(2)
            .returning(|| Ok(vec![entry(9), entry(2), entry(5)]));
        let client = HistoryClient::new(Arc::new(mock));

        let first = client.fetch().await;
        assert!(first.is_ok());
        let ids: Vec<i64> = first.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
        assert_eq!(client.fetch().await, first);
    }

    #[tokio::test]
    async fn test_failure_yields_empty_list() {
        let mut mock = MockAnalysisBackend::new();
        mock.expect_history()
            .returning(|| Err(HistoryError::Transport("timed out".to_string())));

        let fetch = HistoryClient::new(Arc::new(mock)).fetch().await;
        assert!(fetch.entries.is_empty());
        assert_eq!(fetch.error, Some(HistoryError::Transport("timed out".to_string())));
    }
}
