//! # Tiered Memory Store
//!
//! Owns every user's memory tiers and the rules that move entries between them.
//!
//! ## Tiers
//!
//! | Tier | Order | Capacity | Eviction |
//! |------|-------|----------|----------|
//! | conversational | insertion | 100 | oldest first (FIFO) |
//! | long-term | importance desc, then timestamp desc | 500 | tail of the ordering |
//! | semantic | keyed by concept | unbounded | none |
//!
//! Capacities come from [`MemoryConfig`].
//!
//! ## Promotion
//!
//! [`TieredMemoryStore::store_conversation`] runs the [promotion policy](crate::promotion)
//! on every new entry; a promoted entry is also stored in the long-term tier
//! under the same lock, with `metadata.extra["promotedFrom"]` set to the
//! conversational entry's id.
//!
//! ## Thread Safety
//!
//! Users are independent. The user table sits behind a `RwLock` and each user's
//! tiers behind their own `Mutex`, so operations on one user serialize while
//! different users never contend beyond the table lookup. All operations are
//! synchronous.
//!
//! ## Durability
//!
//! None. All state lives in process memory and is lost on restart.
//!
//! ## Example
//!
//! ```rust
//! use memory::{MemoryType, TieredMemoryStore};
//!
//! let store = TieredMemoryStore::default();
//! store.store_conversation("u1", "s1", "I always want direct feedback", MemoryType::Conversation, None);
//!
//! let hits = store.retrieve("u1", "feedback", 10);
//! assert_eq!(hits.len(), 2); // conversational entry plus its promoted copy
//! ```

use chrono::Duration;
use memory_core::{
    ConversationPatterns, Importance, MemoryEntry, MemoryMetadata, MemoryStats, MemoryType,
    SemanticRecord, UserPreferences,
};
use parking_lot::{Mutex, RwLock};
use rapport_core::{Clock, Result, SystemClock};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::MemoryConfig;
use crate::consolidation::{compact_long_term, dedup_conversations};
use crate::introspection::{conversation_patterns, memory_stats};
use crate::preferences::fold_preferences;
use crate::promotion::promotion_importance;
use crate::ranking::{tokenize, RelevanceRanker};

/// Session id recorded on entries written directly to long-term memory.
pub const LONG_TERM_SESSION: &str = "long-term";

/// Key in `metadata.extra` linking a promoted copy to its conversational entry.
pub const PROMOTED_FROM_KEY: &str = "promotedFrom";

#[derive(Debug, Default)]
struct UserMemory {
    conversations: Vec<MemoryEntry>,
    long_term: Vec<MemoryEntry>,
    semantic: BTreeMap<String, SemanticRecord>,
}

impl UserMemory {
    fn sort_long_term(&mut self) {
        // Stable: among equal (importance, timestamp) the earlier position wins.
        self.long_term.sort_by(|a, b| {
            b.importance()
                .cmp(&a.importance())
                .then(b.timestamp.cmp(&a.timestamp))
        });
    }
}

/// Per-user tiered memory: conversational, long-term and semantic.
#[derive(Debug)]
pub struct TieredMemoryStore {
    config: MemoryConfig,
    clock: Arc<dyn Clock>,
    users: RwLock<HashMap<String, Arc<Mutex<UserMemory>>>>,
}

impl Default for TieredMemoryStore {
    fn default() -> Self {
        Self {
            config: MemoryConfig::default(),
            clock: Arc::new(SystemClock),
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl TieredMemoryStore {
    /// Creates a store using the system clock. Fails on an invalid config.
    pub fn new(config: MemoryConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a store reading time from `clock`.
    pub fn with_clock(config: MemoryConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clock,
            users: RwLock::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Returns the user's tiers, creating empty ones on first reference.
    fn user(&self, user_id: &str) -> Arc<Mutex<UserMemory>> {
        if let Some(existing) = self.users.read().get(user_id) {
            return Arc::clone(existing);
        }
        let mut users = self.users.write();
        Arc::clone(users.entry(user_id.to_string()).or_default())
    }

    /// Returns the user's tiers without creating them.
    fn existing_user(&self, user_id: &str) -> Option<Arc<Mutex<UserMemory>>> {
        self.users.read().get(user_id).cloned()
    }

    fn recency_window(&self) -> Duration {
        self.config.recency_window()
    }

    /// Appends a turn to the user's conversational tier, evicting the oldest
    /// entries beyond capacity, and promotes it to long-term memory when the
    /// promotion policy says so. Returns the new entry's id.
    #[instrument(skip(self, content, metadata))]
    pub fn store_conversation(
        &self,
        user_id: &str,
        session_id: &str,
        content: &str,
        entry_type: MemoryType,
        metadata: Option<MemoryMetadata>,
    ) -> Uuid {
        let metadata = metadata.unwrap_or_default();
        let entry = MemoryEntry::new(
            user_id,
            session_id,
            entry_type,
            content,
            self.clock.now(),
            metadata.clone(),
        );
        let id = entry.id();

        let user = self.user(user_id);
        let mut tiers = user.lock();

        tiers.conversations.push(entry);
        let overflow = tiers
            .conversations
            .len()
            .saturating_sub(self.config.conversation_capacity);
        if overflow > 0 {
            tiers.conversations.drain(..overflow);
            debug!(user_id = %user_id, evicted = overflow, "Evicted oldest conversational entries");
        }

        if let Some(importance) = promotion_importance(entry_type, content) {
            let mut promoted = metadata;
            promoted
                .extra
                .insert(PROMOTED_FROM_KEY.to_string(), serde_json::json!(id.to_string()));
            self.insert_long_term(
                &mut tiers,
                user_id,
                session_id,
                content,
                entry_type,
                importance,
                promoted,
            );
            debug!(
                user_id = %user_id,
                importance = ?importance,
                "Promoted entry to long-term memory"
            );
        }

        debug!(
            user_id = %user_id,
            conversation_count = tiers.conversations.len(),
            "Stored conversational entry"
        );
        id
    }

    /// Inserts an entry straight into the long-term tier. Returns its id.
    #[instrument(skip(self, content, metadata))]
    pub fn store_long_term(
        &self,
        user_id: &str,
        content: &str,
        entry_type: MemoryType,
        importance: Importance,
        metadata: Option<MemoryMetadata>,
    ) -> Uuid {
        let user = self.user(user_id);
        let mut tiers = user.lock();
        self.insert_long_term(
            &mut tiers,
            user_id,
            LONG_TERM_SESSION,
            content,
            entry_type,
            importance,
            metadata.unwrap_or_default(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn insert_long_term(
        &self,
        tiers: &mut UserMemory,
        user_id: &str,
        session_id: &str,
        content: &str,
        entry_type: MemoryType,
        importance: Importance,
        mut metadata: MemoryMetadata,
    ) -> Uuid {
        metadata.importance = Some(importance);
        let entry = MemoryEntry::new(
            user_id,
            session_id,
            entry_type,
            content,
            self.clock.now(),
            metadata,
        );
        let id = entry.id();

        // Newest first among equal keys once the stable sort runs.
        tiers.long_term.insert(0, entry);
        tiers.sort_long_term();

        let capacity = self.config.long_term_capacity;
        if tiers.long_term.len() > capacity {
            let evicted = tiers.long_term.len() - capacity;
            tiers.long_term.truncate(capacity);
            debug!(user_id = %user_id, evicted, "Evicted least important long-term entries");
        }
        id
    }

    /// Returns up to `max_results` entries from the conversational and long-term
    /// tiers, best [relevance score](crate::ranking) first. Equal scores keep
    /// tier order: conversational entries (oldest first), then long-term.
    ///
    /// Read-only: access counts are not touched, so repeated calls return the
    /// same order. Use [`record_access`](Self::record_access) for that.
    #[instrument(skip(self, query))]
    pub fn retrieve(&self, user_id: &str, query: &str, max_results: usize) -> Vec<MemoryEntry> {
        let Some(user) = self.existing_user(user_id) else {
            return Vec::new();
        };
        let tiers = user.lock();

        let ranker = RelevanceRanker::new(self.clock.now(), self.recency_window());
        let tokens = tokenize(query);

        let mut scored: Vec<(f64, &MemoryEntry)> = tiers
            .conversations
            .iter()
            .chain(tiers.long_term.iter())
            .map(|entry| (ranker.score(entry, &tokens), entry))
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        let results: Vec<MemoryEntry> = scored
            .into_iter()
            .take(max_results)
            .map(|(_, entry)| entry.clone())
            .collect();

        debug!(user_id = %user_id, returned = results.len(), "Retrieved memories");
        results
    }

    /// Bumps `access_count` and `last_accessed` on every entry (in either tier)
    /// whose id is in `entry_ids`. Returns how many entries were updated.
    pub fn record_access(&self, user_id: &str, entry_ids: &[Uuid]) -> usize {
        let Some(user) = self.existing_user(user_id) else {
            return 0;
        };
        let mut tiers = user.lock();
        let now = self.clock.now();

        let UserMemory {
            conversations,
            long_term,
            ..
        } = &mut *tiers;
        let mut updated = 0;
        for entry in conversations.iter_mut().chain(long_term.iter_mut()) {
            if entry_ids.contains(&entry.id()) {
                entry.metadata.access_count = entry.metadata.access_count.saturating_add(1);
                entry.metadata.last_accessed = Some(now);
                updated += 1;
            }
        }
        updated
    }

    /// Writes a concept record, merging with any existing one: new relationships
    /// and insights are appended when not already present, `last_updated` is
    /// refreshed and `access_count` incremented.
    #[instrument(skip(self, relationships, insights))]
    pub fn store_semantic(
        &self,
        user_id: &str,
        concept: &str,
        relationships: Vec<String>,
        insights: Vec<String>,
    ) {
        let user = self.user(user_id);
        let mut tiers = user.lock();
        let now = self.clock.now();

        let record = tiers
            .semantic
            .entry(concept.to_string())
            .or_insert_with(|| SemanticRecord {
                relationships: Vec::new(),
                insights: Vec::new(),
                last_updated: now,
                access_count: 0,
            });
        for relationship in relationships {
            if !record.relationships.contains(&relationship) {
                record.relationships.push(relationship);
            }
        }
        for insight in insights {
            if !record.insights.contains(&insight) {
                record.insights.push(insight);
            }
        }
        record.last_updated = now;
        record.access_count = record.access_count.saturating_add(1);

        debug!(user_id = %user_id, access_count = record.access_count, "Stored semantic concept");
    }

    /// Returns one concept record.
    pub fn get_semantic(&self, user_id: &str, concept: &str) -> Option<SemanticRecord> {
        let user = self.existing_user(user_id)?;
        let tiers = user.lock();
        tiers.semantic.get(concept).cloned()
    }

    /// Returns every concept record for the user.
    pub fn semantic_concepts(&self, user_id: &str) -> BTreeMap<String, SemanticRecord> {
        let Some(user) = self.existing_user(user_id) else {
            return BTreeMap::new();
        };
        let tiers = user.lock();
        tiers.semantic.clone()
    }

    /// Deduplicates the conversational tier and compacts the long-term tier.
    /// Idempotent.
    #[instrument(skip(self))]
    pub fn consolidate(&self, user_id: &str) {
        let Some(user) = self.existing_user(user_id) else {
            return;
        };
        let mut tiers = user.lock();

        let duplicates = dedup_conversations(&mut tiers.conversations);
        let superseded = compact_long_term(&mut tiers.long_term);
        tiers.sort_long_term();

        info!(
            user_id = %user_id,
            duplicates,
            superseded,
            conversation_count = tiers.conversations.len(),
            long_term_count = tiers.long_term.len(),
            "Consolidated memory"
        );
    }

    /// Aggregate counts over the user's tiers.
    pub fn get_stats(&self, user_id: &str) -> MemoryStats {
        let Some(user) = self.existing_user(user_id) else {
            return MemoryStats::default();
        };
        let tiers = user.lock();
        memory_stats(
            &tiers.conversations,
            &tiers.long_term,
            tiers.semantic.len(),
            self.config.most_accessed_limit,
        )
    }

    /// Alias of [`get_stats`](Self::get_stats), the name the agent calls.
    pub fn get_memory_stats(&self, user_id: &str) -> MemoryStats {
        self.get_stats(user_id)
    }

    /// Activity summary of the conversational tier.
    pub fn get_conversation_patterns(&self, user_id: &str) -> ConversationPatterns {
        let Some(user) = self.existing_user(user_id) else {
            return ConversationPatterns::default();
        };
        let tiers = user.lock();
        conversation_patterns(&tiers.conversations, self.clock.now(), self.recency_window())
    }

    /// Preferences folded from every `preference` entry in both tiers.
    pub fn get_user_preferences(&self, user_id: &str) -> UserPreferences {
        let Some(user) = self.existing_user(user_id) else {
            return UserPreferences::default();
        };
        let tiers = user.lock();
        fold_preferences(
            tiers
                .conversations
                .iter()
                .chain(tiers.long_term.iter())
                .filter(|e| e.entry_type == MemoryType::Preference),
        )
    }

    /// Snapshot of the conversational tier, oldest first.
    pub fn conversation_history(&self, user_id: &str) -> Vec<MemoryEntry> {
        let Some(user) = self.existing_user(user_id) else {
            return Vec::new();
        };
        let tiers = user.lock();
        tiers.conversations.clone()
    }

    /// Snapshot of the long-term tier in ranking order.
    pub fn long_term(&self, user_id: &str) -> Vec<MemoryEntry> {
        let Some(user) = self.existing_user(user_id) else {
            return Vec::new();
        };
        let tiers = user.lock();
        tiers.long_term.clone()
    }

    /// Drops all of a user's tiers. Returns whether the user existed.
    pub fn clear_user(&self, user_id: &str) -> bool {
        self.users.write().remove(user_id).is_some()
    }

    /// Number of users with tiers.
    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }
}
