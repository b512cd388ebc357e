//! Transcript replay: feeds JSONL turns through a [`TieredMemoryStore`] and a
//! [`PersonalityEngine`] sharing one [`ManualClock`], then reports per user.
//!
//! The clock jumps to each line's `timestamp`; lines without one are stored at
//! the time of the previous line (or the replay start for the first line).

use anyhow::Result;
use chrono::{DateTime, Utc};
use memory::{
    ConversationPatterns, MemoryConfig, MemoryEntry, MemoryStats, MemoryType, TieredMemoryStore,
    UserPreferences,
};
use personality::{PersonalityEngine, PersonalityProfile, RelationshipMetrics};
use rapport_core::{Clock, ManualClock};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::sync::Arc;
use tracing::{info, warn};

/// One transcript line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptLine {
    pub user_id: String,
    pub session_id: String,
    pub content: String,
    #[serde(default, rename = "type")]
    pub entry_type: Option<MemoryType>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct ReplayOptions {
    pub query: Option<String>,
    pub limit: usize,
    pub consolidate: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReport {
    pub user_id: String,
    pub stats: MemoryStats,
    pub patterns: ConversationPatterns,
    pub preferences: UserPreferences,
    pub personality: PersonalityProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<MemoryEntry>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaySummary {
    pub turns_stored: usize,
    pub lines_skipped: usize,
    pub users: Vec<UserReport>,
}

/// Replays `reader` line by line and builds the per-user reports, users in
/// first-seen order.
pub fn replay<R: BufRead>(
    reader: R,
    base: PersonalityProfile,
    memory_config: MemoryConfig,
    options: &ReplayOptions,
) -> Result<ReplaySummary> {
    let clock = ManualClock::default();
    let store = TieredMemoryStore::with_clock(memory_config, Arc::new(clock.clone()))?;
    let engine = PersonalityEngine::with_clock(base, Arc::new(clock.clone()))?;

    let mut user_order: Vec<String> = Vec::new();
    let mut turns_stored = 0usize;
    let mut lines_skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let turn: TranscriptLine = match serde_json::from_str(&line) {
            Ok(turn) => turn,
            Err(e) => {
                warn!(line = index + 1, error = %e, "Skipping malformed transcript line");
                lines_skipped += 1;
                continue;
            }
        };

        if let Some(ts) = turn.timestamp {
            clock.set(ts);
        }
        store.store_conversation(
            &turn.user_id,
            &turn.session_id,
            &turn.content,
            turn.entry_type.unwrap_or(MemoryType::Conversation),
            None,
        );
        turns_stored += 1;
        if !user_order.contains(&turn.user_id) {
            user_order.push(turn.user_id);
        }
    }

    let users = user_order
        .iter()
        .map(|user_id| {
            if options.consolidate {
                store.consolidate(user_id);
            }
            report_user(&store, &engine, user_id, options)
        })
        .collect();

    info!(
        turns_stored,
        lines_skipped,
        users = user_order.len(),
        replay_end = %clock.now(),
        "Replay finished"
    );

    Ok(ReplaySummary {
        turns_stored,
        lines_skipped,
        users,
    })
}

fn report_user(
    store: &TieredMemoryStore,
    engine: &PersonalityEngine,
    user_id: &str,
    options: &ReplayOptions,
) -> UserReport {
    let preferences = store.get_user_preferences(user_id);
    let history = store.conversation_history(user_id);
    let personality = engine.adapt_personality(
        user_id,
        &preferences,
        &RelationshipMetrics::default(),
        &history,
    );
    let results = options
        .query
        .as_deref()
        .map(|query| store.retrieve(user_id, query, options.limit));

    UserReport {
        user_id: user_id.to_string(),
        stats: store.get_stats(user_id),
        patterns: store.get_conversation_patterns(user_id),
        preferences,
        personality,
        results,
    }
}
