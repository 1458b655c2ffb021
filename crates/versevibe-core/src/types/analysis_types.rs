//! Analysis result and sentiment types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label reported when the service answer carries no structured feedback
pub const DEFAULT_SENTIMENT_LABEL: &str = "Thoughtful";

/// Mood categories the analysis service chooses from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Melancholic,
    Joyful,
    Dark,
    Energetic,
    Peaceful,
    Thoughtful,
    Romantic,
    Mysterious,
}

impl Sentiment {
    /// Label exactly as the service spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Melancholic => "Melancholic",
            Self::Joyful => "Joyful",
            Self::Dark => "Dark",
            Self::Energetic => "Energetic",
            Self::Peaceful => "Peaceful",
            Self::Thoughtful => "Thoughtful",
            Self::Romantic => "Romantic",
            Self::Mysterious => "Mysterious",
        }
    }

    /// Every recognized sentiment
    pub fn all() -> &'static [Sentiment] {
        &[
            Self::Melancholic,
            Self::Joyful,
            Self::Dark,
            Self::Energetic,
            Self::Peaceful,
            Self::Thoughtful,
            Self::Romantic,
            Self::Mysterious,
        ]
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not one of the recognized sentiments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSentiment(pub String);

impl FromStr for Sentiment {
    type Err = UnknownSentiment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|sentiment| sentiment.as_str() == s)
            .ok_or_else(|| UnknownSentiment(s.to_string()))
    }
}

/// Structured feedback for one manuscript.
///
/// Values are only ever produced whole by the feedback parser and replaced
/// whole by the workflow controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub suggestions: Option<String>,
    #[serde(default)]
    pub pacing: Option<String>,
    #[serde(default)]
    pub word_choice: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
}

impl AnalysisResult {
    /// Result used when the payload has no decodable embedded object
    pub fn fallback(raw: &str) -> Self {
        Self {
            sentiment: Some(DEFAULT_SENTIMENT_LABEL.to_string()),
            suggestions: Some(raw.to_string()),
            pacing: Some("Natural flow.".to_string()),
            word_choice: Some(String::new()),
            tone: Some(String::new()),
        }
    }

    /// The sentiment label, if the service sent a non-empty one
    pub fn sentiment_label(&self) -> Option<&str> {
        self.sentiment
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }

    /// The recognized sentiment, if any
    pub fn sentiment(&self) -> Option<Sentiment> {
        self.sentiment_label().and_then(|label| label.parse().ok())
    }

    /// Word choice notes, hidden when blank
    pub fn word_choice_notes(&self) -> Option<&str> {
        non_blank(self.word_choice.as_deref())
    }

    /// Tone notes, hidden when blank
    pub fn tone_notes(&self) -> Option<&str> {
        non_blank(self.tone.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_round_trip_labels() {
        for sentiment in Sentiment::all() {
            assert_eq!(sentiment.as_str().parse::<Sentiment>(), Ok(*sentiment));
        }
        assert_eq!(Sentiment::all().len(), 8);
    }

    #[test]
    fn test_sentiment_match_is_exact() {
        assert!("joyful".parse::<Sentiment>().is_err());
        assert!(" Joyful".parse::<Sentiment>().is_err());
        assert_eq!(
            "Happy".parse::<Sentiment>(),
            Err(UnknownSentiment("Happy".to_string()))
        );
    }

    #[test]
    fn test_camel_case_fields() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"sentiment":"Dark","wordChoice":"Stark imagery.","tone":"Grim."}"#,
        )
        .unwrap();

        assert_eq!(result.sentiment(), Some(Sentiment::Dark));
        assert_eq!(result.word_choice_notes(), Some("Stark imagery."));
        assert_eq!(result.tone_notes(), Some("Grim."));
        assert_eq!(result.suggestions, None);
    }

    #[test]
    fn test_fallback_result() {
        let result = AnalysisResult::fallback("Just plain prose.");
        assert_eq!(result.sentiment_label(), Some("Thoughtful"));
        assert_eq!(result.suggestions.as_deref(), Some("Just plain prose."));
        assert_eq!(result.pacing.as_deref(), Some("Natural flow."));
        assert_eq!(result.word_choice_notes(), None);
        assert_eq!(result.tone_notes(), None);
    }

    #[test]
    fn test_unknown_label_is_kept_but_unrecognized() {
        let result = AnalysisResult {
            sentiment: Some("Wistful".to_string()),
            ..Default::default()
        };
        assert_eq!(result.sentiment_label(), Some("Wistful"));
        assert_eq!(result.sentiment(), None);
    }
}
