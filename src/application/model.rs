//! # Application Record Model
//!
//! The single record type served by this API, plus its status enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Review status of an application.
///
/// Serialized in snake_case on the wire (`in_review`, `approved`,
/// `rejected`). No other value is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InReview,
    Approved,
    Rejected,
}

impl Status {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InReview => "in_review",
            Status::Approved => "approved",
            Status::Rejected => "rejected",
        }
    }

    /// Parse a status from user input, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "in_review" => Some(Status::InReview),
            "approved" => Some(Status::Approved),
            "rejected" => Some(Status::Rejected),
            _ => None,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::InReview
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An application record.
///
/// `id` is a numeric-looking string assigned by the store, unique across
/// the store at all times and never reused within a process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: Status,
}

/// Fields accepted when creating an application.
///
/// The store assigns `id` and defaults `status` to `in_review`.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub name: String,
    pub description: String,
}

/// Partial update applied to an existing application.
///
/// Only provided fields overwrite; the boundary guarantees at least one
/// field is present.
#[derive(Debug, Clone, Default)]
pub struct ApplicationPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
}

impl ApplicationPatch {
    /// Merge this patch over an existing record, producing the updated
    /// record. The original is left untouched.
    pub fn apply_to(&self, existing: &Application) -> Application {
        Application {
            id: existing.id.clone(),
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| existing.description.clone()),
            status: self.status.unwrap_or(existing.status),
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&Status::InReview).unwrap();
        assert_eq!(json, "\"in_review\"");

        let parsed: Status = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(parsed, Status::Approved);
    }

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!(Status::parse("APPROVED"), Some(Status::Approved));
        assert_eq!(Status::parse("In_Review"), Some(Status::InReview));
        assert_eq!(Status::parse("pending"), None);
    }

    #[test]
    fn test_default_status() {
        assert_eq!(Status::default(), Status::InReview);
    }

    #[test]
    fn test_patch_merges_only_provided_fields() {
        let existing = Application {
            id: "7".to_string(),
            name: "Original".to_string(),
            description: "Original description".to_string(),
            status: Status::InReview,
        };

        let patch = ApplicationPatch {
            status: Some(Status::Approved),
            ..Default::default()
        };

        let updated = patch.apply_to(&existing);
        assert_eq!(updated.id, "7");
        assert_eq!(updated.name, "Original");
        assert_eq!(updated.status, Status::Approved);
        // Original untouched
        assert_eq!(existing.status, Status::InReview);
    }

    #[test]
    fn test_empty_patch() {
        assert!(ApplicationPatch::default().is_empty());
        let patch = ApplicationPatch {
            name: Some("X".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
