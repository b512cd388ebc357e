//! # Consolidation
//!
//! Deduplication and compaction passes over one user's tiers. Both passes are
//! idempotent: running them again on their own output removes nothing.
//!
//! - Conversational tier: later entries repeating an earlier (type, content)
//!   pair are dropped; the first occurrence stays.
//! - Long-term tier: within each (type, content) group only the newest entry
//!   survives. Ties on timestamp keep the entry that comes first in tier order.
//!   The survivor inherits the group's highest importance and access count.

use chrono::{DateTime, Utc};
use memory_core::{Importance, MemoryEntry, MemoryType};
use std::collections::{HashMap, HashSet};

type StatementKey = (MemoryType, String);

fn key_of(entry: &MemoryEntry) -> StatementKey {
    (entry.entry_type, entry.content().to_string())
}

/// Drops repeated (type, content) pairs, keeping first occurrences. Returns the
/// number of entries removed.
pub fn dedup_conversations(entries: &mut Vec<MemoryEntry>) -> usize {
    let before = entries.len();
    let mut seen: HashSet<StatementKey> = HashSet::new();
    entries.retain(|entry| seen.insert(key_of(entry)));
    before - entries.len()
}

struct GroupSummary {
    newest: DateTime<Utc>,
    importance: Importance,
    access_count: u32,
}

/// Removes long-term entries superseded by a newer entry with the same type and
/// content. Returns the number of entries removed.
///
/// The caller re-sorts the tier afterwards, since a survivor's importance may
/// have been raised.
pub fn compact_long_term(entries: &mut Vec<MemoryEntry>) -> usize {
    let before = entries.len();

    let mut groups: HashMap<StatementKey, GroupSummary> = HashMap::new();
    for entry in entries.iter() {
        groups
            .entry(key_of(entry))
            .and_modify(|g| {
                g.newest = g.newest.max(entry.timestamp);
                g.importance = g.importance.max(entry.importance());
                g.access_count = g.access_count.max(entry.metadata.access_count);
            })
            .or_insert(GroupSummary {
                newest: entry.timestamp,
                importance: entry.importance(),
                access_count: entry.metadata.access_count,
            });
    }

    let mut kept: HashSet<StatementKey> = HashSet::new();
    entries.retain_mut(|entry| {
        let key = key_of(entry);
        let Some(group) = groups.get(&key) else {
            return true;
        };
        if entry.timestamp != group.newest || kept.contains(&key) {
            return false;
        }
        entry.metadata.importance = Some(group.importance);
        entry.metadata.access_count = group.access_count;
        kept.insert(key);
        true
    });

    before - entries.len()
}
