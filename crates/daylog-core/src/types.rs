//! Schedule wire types shared by the records client and the UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleTag {
    /// A meal / diet log entry
    Diet,
    /// A workout log entry
    Exercise,
}

impl ScheduleTag {
    /// Wire name used in schedule payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleTag::Diet => "diet",
            ScheduleTag::Exercise => "exercise",
        }
    }

    /// Label the records API expects for images of this category
    pub fn upload_kind(&self) -> &'static str {
        match self {
            ScheduleTag::Diet => "meal",
            ScheduleTag::Exercise => "exercise",
        }
    }

    /// Display label for the tab selector
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleTag::Diet => "Diet",
            ScheduleTag::Exercise => "Exercise",
        }
    }

    pub fn all() -> &'static [ScheduleTag] {
        &[ScheduleTag::Diet, ScheduleTag::Exercise]
    }
}

impl Default for ScheduleTag {
    fn default() -> Self {
        ScheduleTag::Diet
    }
}

impl std::fmt::Display for ScheduleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload sent to the records API when saving a new entry.
///
/// `image` serializes as absent (not null) when no photo is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSchedule {
    pub content: String,
    pub tag: ScheduleTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A stored schedule entry as returned by the records API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// Server-assigned identifier
    pub id: String,
    pub content: String,
    pub tag: ScheduleTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_wire_names() {
        assert_eq!(ScheduleTag::Diet.as_str(), "diet");
        assert_eq!(ScheduleTag::Exercise.as_str(), "exercise");
        assert_eq!(
            serde_json::to_string(&ScheduleTag::Diet).unwrap(),
            "\"diet\""
        );
        let tag: ScheduleTag = serde_json::from_str("\"exercise\"").unwrap();
        assert_eq!(tag, ScheduleTag::Exercise);
    }

    #[test]
    fn test_upload_kind_labels() {
        // Diet images upload under the "meal" label
        assert_eq!(ScheduleTag::Diet.upload_kind(), "meal");
        assert_eq!(ScheduleTag::Exercise.upload_kind(), "exercise");
    }

    #[test]
    fn test_new_schedule_omits_missing_image() {
        let payload = NewSchedule {
            content: "ran 5k".to_string(),
            tag: ScheduleTag::Exercise,
            image: None,
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"content":"ran 5k","tag":"exercise"}"#
        );
    }

    #[test]
    fn test_new_schedule_includes_image_when_present() {
        let payload = NewSchedule {
            content: "salad".to_string(),
            tag: ScheduleTag::Diet,
            image: Some("https://cdn/x.jpg".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"content":"salad","tag":"diet","image":"https://cdn/x.jpg"}"#
        );
    }

    #[test]
    fn test_record_roundtrip_without_image() {
        let json = r#"{"id":"42","content":"ran 5k","tag":"exercise","created_at":"2026-08-07T12:00:00Z"}"#;
        let record: ScheduleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "42");
        assert_eq!(record.tag, ScheduleTag::Exercise);
        assert!(record.image.is_none());
        assert_eq!(serde_json::to_string(&record).unwrap(), json);
    }
}
