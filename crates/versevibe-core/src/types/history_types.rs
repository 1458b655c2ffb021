//! Manuscript history types

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A previously analyzed manuscript as listed by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Raw feedback payload, same convention as a fresh analysis
    #[serde(default, rename = "ai_feedback")]
    pub feedback: Option<String>,
    /// ISO-8601 timestamp exactly as sent
    #[serde(default)]
    pub created_at: String,
}

impl HistoryEntry {
    /// Parsed creation time. Naive timestamps are taken as UTC.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
    }

    /// Short local date label, e.g. `Mar 4, 09:15`
    pub fn created_label(&self) -> String {
        match self.created_at_utc() {
            Some(dt) => format_short(&dt.with_timezone(&Local)),
            None => self.created_at.clone(),
        }
    }

    /// Title to display, never blank
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

fn format_short<Tz: chrono::TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%b %-d, %H:%M").to_string()
}

/// Health probe answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(created_at: &str) -> HistoryEntry {
        HistoryEntry {
            id: 1,
            title: "Ode to rain".to_string(),
            content: "The rain falls".to_string(),
            feedback: None,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_deserialize_wire_entry() {
        let json = r#"{
            "id": 7,
            "title": "Night",
            "content": "Stars...",
            "ai_feedback": "{\"sentiment\":\"Mysterious\"}",
            "created_at": "2025-01-05T21:04:11.532100"
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.feedback.as_deref(), Some("{\"sentiment\":\"Mysterious\"}"));
    }

    #[test]
    fn test_naive_timestamp_is_utc() {
        let parsed = entry("2025-01-05T21:04:11.532100").created_at_utc().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-01-05T21:04:11.532100+00:00");

        let parsed = entry("2025-01-05T21:04:11").created_at_utc().unwrap();
        assert_eq!(parsed.format("%H:%M:%S").to_string(), "21:04:11");
    }

    #[test]
    fn test_rfc3339_timestamp() {
        let parsed = entry("2025-01-05T21:04:11+02:00").created_at_utc().unwrap();
        assert_eq!(parsed.format("%H:%M").to_string(), "19:04");
    }

    #[test]
    fn test_short_format() {
        let dt = "2025-03-04T09:15:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_short(&dt), "Mar 4, 09:15");
    }

    #[test]
    fn test_unparsable_timestamp_shown_verbatim() {
        assert_eq!(entry("yesterday").created_label(), "yesterday");
    }

    #[test]
    fn test_display_title() {
        let mut e = entry("");
        assert_eq!(e.display_title(), "Ode to rain");
        e.title = "  ".to_string();
        assert_eq!(e.display_title(), "Untitled");
    }
}
