//! # memory-core
//!
//! Core types shared by the tiered memory store (`memory` crate) and the
//! personality engine (`personality` crate).
//!
//! - [`types`]: [`MemoryEntry`], [`MemoryType`], [`Importance`], [`MemoryMetadata`], [`SemanticRecord`]
//! - [`preferences`]: [`UserPreferences`] and the preference enums consumed by adaptation
//! - [`stats`]: [`MemoryStats`] and [`ConversationPatterns`] introspection results

pub mod preferences;
pub mod stats;
pub mod types;

pub use preferences::{
    ChallengeLevel, CommunicationStyle, FeedbackStyle, MeetingPreference, UserPreferences,
};
pub use stats::{AccessSummary, ConversationPatterns, MemoryStats};
pub use types::{Importance, MemoryEntry, MemoryMetadata, MemoryType, SemanticRecord};
