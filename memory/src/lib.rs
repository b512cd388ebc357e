//! # Memory Crate
//!
//! Per-user tiered memory for a conversational agent: a bounded conversational
//! tier, an importance-ordered long-term tier, and concept-keyed semantic memory,
//! with heuristic relevance ranking and on-demand consolidation.
//!
//! ## Quick Start
//!
//! ```rust
//! use memory::{MemoryConfig, MemoryType, TieredMemoryStore};
//!
//! let store = TieredMemoryStore::new(MemoryConfig::default()).unwrap();
//!
//! store.store_conversation("user123", "session-1", "prefers weekly check-ins", MemoryType::Preference, None);
//! store.store_conversation("user123", "session-1", "talked about the weather", MemoryType::Conversation, None);
//!
//! let hits = store.retrieve("user123", "check-ins", 1);
//! assert_eq!(hits[0].content(), "prefers weekly check-ins");
//! ```
//!
//! ## Modules
//!
//! - [`store`] - [`TieredMemoryStore`], the only owner of users' tiers
//! - [`promotion`] - which conversational entries reach long-term memory
//! - [`ranking`] - the additive relevance score used by `retrieve`
//! - [`consolidation`] - deduplication and compaction passes
//! - [`preferences`] - preference extraction from `preference` entries
//! - [`introspection`] - statistics and conversation patterns
//! - [`config`] - tier capacities, loadable from the environment
//!
//! ## Logging
//!
//! Every mutating operation emits `tracing` debug events (evictions,
//! promotions, stored counts); consolidation logs at info level.
//!
//! ## External Interactions
//!
//! - **Clock**: reads time from a `rapport_core::Clock`
//! - **Personality engine**: consumes `get_user_preferences` and
//!   `conversation_history` as adaptation signals
//! - **Persistence**: none; state is process-local

pub mod config;
pub mod consolidation;
pub mod introspection;
pub mod preferences;
pub mod promotion;
pub mod ranking;
pub mod store;

pub use config::MemoryConfig;
pub use memory_core::{
    AccessSummary, ChallengeLevel, CommunicationStyle, ConversationPatterns, FeedbackStyle,
    Importance, MeetingPreference, MemoryEntry, MemoryMetadata, MemoryStats, MemoryType,
    SemanticRecord, UserPreferences,
};
pub use preferences::extract_preferences;
pub use ranking::RelevanceRanker;
pub use store::TieredMemoryStore;
