//! Statistics and conversation-pattern analysis over a user's tiers.

use chrono::{DateTime, Duration, Timelike, Utc};
use memory_core::{AccessSummary, ConversationPatterns, MemoryEntry, MemoryStats, MemoryType};
use std::collections::{BTreeMap, HashSet};

fn type_distribution<'a>(
    entries: impl Iterator<Item = &'a MemoryEntry>,
) -> BTreeMap<MemoryType, usize> {
    let mut distribution = BTreeMap::new();
    for entry in entries {
        *distribution.entry(entry.entry_type).or_insert(0) += 1;
    }
    distribution
}

/// Builds [`MemoryStats`] from both tiers. `most_accessed_entries` lists entries
/// with a non-zero access count, most used first, at most `most_accessed_limit`.
pub fn memory_stats(
    conversations: &[MemoryEntry],
    long_term: &[MemoryEntry],
    semantic_concept_count: usize,
    most_accessed_limit: usize,
) -> MemoryStats {
    let all = || conversations.iter().chain(long_term.iter());

    let mut accessed: Vec<&MemoryEntry> = all().filter(|e| e.metadata.access_count > 0).collect();
    accessed.sort_by(|a, b| b.metadata.access_count.cmp(&a.metadata.access_count));

    MemoryStats {
        conversation_count: conversations.len(),
        long_term_count: long_term.len(),
        semantic_concept_count,
        oldest_memory_timestamp: all().map(|e| e.timestamp).min(),
        most_accessed_entries: accessed
            .into_iter()
            .take(most_accessed_limit)
            .map(|e| AccessSummary {
                id: e.id(),
                content: e.content().to_string(),
                access_count: e.metadata.access_count,
            })
            .collect(),
        type_distribution: type_distribution(all()),
    }
}

/// Summarizes the conversational tier: volume, sessions, message length,
/// busiest hour and recent activity.
pub fn conversation_patterns(
    conversations: &[MemoryEntry],
    now: DateTime<Utc>,
    recency_window: Duration,
) -> ConversationPatterns {
    if conversations.is_empty() {
        return ConversationPatterns::default();
    }

    let sessions: HashSet<&str> = conversations.iter().map(|e| e.session_id.as_str()).collect();
    let total_chars: usize = conversations.iter().map(|e| e.content().chars().count()).sum();

    let mut per_hour = [0usize; 24];
    for entry in conversations {
        per_hour[entry.timestamp.hour() as usize] += 1;
    }
    let most_active_hour = per_hour
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .max_by(|(ha, ca), (hb, cb)| ca.cmp(cb).then(hb.cmp(ha)))
        .map(|(hour, _)| hour as u32);

    ConversationPatterns {
        total_interactions: conversations.len(),
        session_count: sessions.len(),
        average_message_length: total_chars as f64 / conversations.len() as f64,
        most_active_hour,
        recent_interactions: conversations
            .iter()
            .filter(|e| now - e.timestamp < recency_window)
            .count(),
        last_interaction: conversations.iter().map(|e| e.timestamp).max(),
        type_distribution: type_distribution(conversations.iter()),
    }
}
