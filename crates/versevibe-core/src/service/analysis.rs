use super::AnalysisBackend;
use crate::error::AnalysisError;
use crate::feedback::parse_analysis;
use crate::types::AnalysisResult;
use std::sync::Arc;
use tracing::{debug, info};

/// Submits manuscripts for analysis.
///
/// Any 2xx answer yields a renderable result: payloads without a decodable
/// embedded object degrade to the fallback result instead of failing.
#[derive(Clone)]
pub struct AnalysisClient {
    backend: Arc<dyn AnalysisBackend>,
}

impl AnalysisClient {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self { backend }
    }

    pub async fn analyze(&self, manuscript: &str) -> Result<AnalysisResult, AnalysisError> {
        if manuscript.trim().is_empty() {
            return Err(AnalysisError::EmptyManuscript);
        }

        info!("Submitting manuscript for analysis ({} chars)", manuscript.chars().count());
        let raw = self.backend.analyze(manuscript).await?;
        let result = parse_analysis(&raw);
        debug!("Analysis parsed, sentiment: {:?}", result.sentiment_label());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockAnalysisBackend;
    use crate::types::Sentiment;

    fn client(mock: MockAnalysisBackend) -> AnalysisClient {
        AnalysisClient::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_structured_answer() {
        let mut mock = MockAnalysisBackend::new();
        mock.expect_analyze()
            .withf(|content| content.starts_with("The rain"))
            .times(1)
            .returning(|_| {
                Ok(r#"blah {"sentiment":"Joyful","suggestions":"Great pacing!"}"#.to_string())
            });

        let result = client(mock).analyze("The rain fell.").await.unwrap();
        assert_eq!(result.sentiment(), Some(Sentiment::Joyful));
        assert_eq!(result.suggestions.as_deref(), Some("Great pacing!"));
    }

    #[tokio::test]
    async fn test_plain_prose_degrades() {
        let mut mock = MockAnalysisBackend::new();
        mock.expect_analyze()
            .returning(|_| Ok("Just plain prose, no braces.".to_string()));

        let result = client(mock).analyze("text").await.unwrap();
        assert_eq!(result.sentiment_label(), Some("Thoughtful"));
        assert_eq!(result.suggestions.as_deref(), Some("Just plain prose, no braces."));
    }

    #[tokio::test]
    async fn test_blank_manuscript_never_reaches_backend() {
        let mut mock = MockAnalysisBackend::new();
        mock.expect_analyze().never();

        let err = client(mock).analyze(" \n\t ").await.unwrap_err();
        assert_eq!(err, AnalysisError::EmptyManuscript);
    }

    #[tokio::test]
    async fn test_backend_failure_passes_through() {
        let mut mock = MockAnalysisBackend::new();
        mock.expect_analyze()
            .returning(|_| Err(AnalysisError::Transport("refused".to_string())));

        let err = client(mock).analyze("text").await.unwrap_err();
        assert_eq!(err, AnalysisError::Transport("refused".to_string()));
    }
}
