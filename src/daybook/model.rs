use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One diary record. Field names follow the stored JSON layout
/// (camelCase keys, ISO-8601 timestamps, optionals omitted when absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

impl DiaryEntry {
    /// Creates a fresh entry: random id, `created_at` pinned to now.
    /// Both are immutable for the lifetime of the entry.
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: Utc::now(),
            updated_at: None,
            weather: None,
            mood: None,
        }
    }
}

/// Input to [`DiaryStore::save`](crate::diary::DiaryStore::save). An absent
/// `id` means "create"; a present one means "replace the fields of the entry
/// with that id, wholesale".
#[derive(Debug, Clone, Default)]
pub struct DiaryDraft {
    pub id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub weather: Option<String>,
    pub mood: Option<String>,
}

impl DiaryDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_weather(mut self, weather: impl Into<String>) -> Self {
        self.weather = Some(weather.into());
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_entry_has_unique_id_and_no_update_stamp() {
        let a = DiaryEntry::new("A".into(), "".into());
        let b = DiaryEntry::new("B".into(), "".into());
        assert_ne!(a.id, b.id);
        assert!(a.updated_at.is_none());
    }

    #[test]
    fn serializes_with_camel_case_keys_and_omitted_optionals() {
        let entry = DiaryEntry {
            id: Uuid::nil(),
            title: "T".into(),
            content: "C".into(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap(),
            updated_at: None,
            weather: None,
            mood: Some("😊 开心".into()),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"createdAt\":\"2024-03-01T08:30:00Z\""));
        assert!(json.contains("\"mood\""));
        assert!(!json.contains("updatedAt"));
        assert!(!json.contains("weather"));
    }

    #[test]
    fn deserializes_entries_missing_optional_fields() {
        let json = r#"{
            "id": "7f2ab1a0-0000-4000-8000-000000000001",
            "title": "T",
            "content": "C",
            "createdAt": "2024-03-01T08:30:00Z"
        }"#;

        let entry: DiaryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.title, "T");
        assert!(entry.updated_at.is_none());
        assert!(entry.weather.is_none());
        assert!(entry.mood.is_none());
    }
}
