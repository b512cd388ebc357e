//! Introspection results returned by the memory store.
//!
//! Built by `TieredMemoryStore::get_stats` and `get_conversation_patterns`;
//! plain data, serialized camelCase for tooling output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::types::MemoryType;

/// One of the most-used entries in a user's memory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccessSummary {
    pub id: Uuid,
    pub content: String,
    pub access_count: u32,
}

/// Aggregate counts over one user's memory tiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemoryStats {
    pub conversation_count: usize,
    pub long_term_count: usize,
    pub semantic_concept_count: usize,
    pub oldest_memory_timestamp: Option<DateTime<Utc>>,
    pub most_accessed_entries: Vec<AccessSummary>,
    pub type_distribution: BTreeMap<MemoryType, usize>,
}

/// Shape of a user's conversational activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationPatterns {
    pub total_interactions: usize,
    pub session_count: usize,
    pub average_message_length: f64,
    /// Hour of day (UTC, 0-23) with the most entries; earliest hour wins ties
    pub most_active_hour: Option<u32>,
    /// Entries inside the recency window
    pub recent_interactions: usize,
    pub last_interaction: Option<DateTime<Utc>>,
    pub type_distribution: BTreeMap<MemoryType, usize>,
}
