//! # Core Types
//!
//! This module defines the records stored in every memory tier.
//!
//! ## MemoryType
//!
//! What kind of record an entry is.
//!
//! ### Variants
//!
//! - `Conversation`: an ordinary conversational turn
//! - `Fact`: something learned about the user
//! - `Preference`: a stated preference (always promoted)
//! - `Decision`: a decision the user made (always promoted)
//! - `Pattern`: an observed behavioral pattern
//!
//! ## Importance
//!
//! Long-term ranking level, ordered `Low < Medium < High`.
//!
//! ## MemoryMetadata
//!
//! The open key-value bag attached to an entry.
//!
//! ### Fields
//!
//! | Field | Type | Description |
//! |-------|------|-------------|
//! | `importance` | `Option<Importance>` | Set on long-term entries |
//! | `access_count` | `u32` | How often the entry was used by the caller |
//! | `last_accessed` | `Option<DateTime<Utc>>` | When the entry was last used |
//! | `extra` | `BTreeMap<String, Value>` | Caller-defined keys |
//!
//! ## MemoryEntry
//!
//! The atomic, timestamped unit stored in the conversational and long-term tiers.
//! `id` and `content` are fixed at construction; a changed statement is a new entry.
//!
//! ### Example
//!
//! ```rust
//! use memory_core::{MemoryEntry, MemoryMetadata, MemoryType};
//! use chrono::Utc;
//!
//! let entry = MemoryEntry::new(
//!     "user123",
//!     "session-1",
//!     MemoryType::Preference,
//!     "I prefer weekly check-ins",
//!     Utc::now(),
//!     MemoryMetadata::default(),
//! );
//! assert_eq!(entry.content(), "I prefer weekly check-ins");
//! ```
//!
//! ## SemanticRecord
//!
//! Concept-keyed knowledge: related concepts and free-form insights.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// What kind of record a memory entry is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MemoryType {
    Conversation,
    Fact,
    Preference,
    Decision,
    Pattern,
}

impl MemoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryType::Conversation => "conversation",
            MemoryType::Fact => "fact",
            MemoryType::Preference => "preference",
            MemoryType::Decision => "decision",
            MemoryType::Pattern => "pattern",
        }
    }
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Long-term importance level. Variant order gives `Low < Medium < High`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Medium,
    High,
}

/// Metadata associated with a memory entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemoryMetadata {
    /// Importance level; always set on long-term entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,
    /// Number of times the caller used this entry
    #[serde(default)]
    pub access_count: u32,
    /// When the caller last used this entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed: Option<DateTime<Utc>>,
    /// Caller-defined keys
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl MemoryMetadata {
    pub fn with_importance(importance: Importance) -> Self {
        Self {
            importance: Some(importance),
            ..Default::default()
        }
    }
}

/// A single memory entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemoryEntry {
    id: Uuid,
    pub user_id: String,
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub entry_type: MemoryType,
    content: String,
    pub metadata: MemoryMetadata,
}

impl MemoryEntry {
    /// Creates a new `MemoryEntry` with a generated UUID.
    pub fn new(
        user_id: impl Into<String>,
        session_id: impl Into<String>,
        entry_type: MemoryType,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
        metadata: MemoryMetadata,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            session_id: session_id.into(),
            timestamp,
            entry_type,
            content: content.into(),
            metadata,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Importance from metadata; entries without one rank as `Low`.
    pub fn importance(&self) -> Importance {
        self.metadata.importance.unwrap_or(Importance::Low)
    }
}

/// Concept-keyed semantic memory record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SemanticRecord {
    pub relationships: Vec<String>,
    pub insights: Vec<String>,
    pub last_updated: DateTime<Utc>,
    pub access_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(entry_type: MemoryType, content: &str) -> MemoryEntry {
        MemoryEntry::new(
            "user123",
            "s1",
            entry_type,
            content,
            Utc::now(),
            MemoryMetadata::default(),
        )
    }

    #[test]
    fn test_importance_ordering() {
        assert!(Importance::High > Importance::Medium);
        assert!(Importance::Medium > Importance::Low);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = entry(MemoryType::Fact, "same");
        let b = entry(MemoryType::Fact, "same");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_default_importance_is_low() {
        assert_eq!(entry(MemoryType::Conversation, "hi").importance(), Importance::Low);
    }

    #[test]
    fn test_entry_serializes_type_and_extra_keys() {
        let mut metadata = MemoryMetadata::with_importance(Importance::High);
        metadata
            .extra
            .insert("source".to_string(), serde_json::json!("onboarding"));
        let entry = MemoryEntry::new(
            "user123",
            "s1",
            MemoryType::Decision,
            "Move standups to Monday",
            Utc::now(),
            metadata,
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "decision");
        assert_eq!(json["userId"], "user123");
        assert_eq!(json["metadata"]["importance"], "high");
        assert_eq!(json["metadata"]["source"], "onboarding");
        assert_eq!(json["metadata"]["accessCount"], 0);
    }
}
