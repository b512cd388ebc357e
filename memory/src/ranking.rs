//! # Relevance Ranker
//!
//! Stateless additive scoring used by `TieredMemoryStore::retrieve`. This is a
//! keyword heuristic, not semantic similarity:
//!
//! | Signal | Points |
//! |--------|--------|
//! | each query token found as a substring of the lower-cased content | +2 |
//! | type `preference` | +3 |
//! | type `decision` | +2 |
//! | entry younger than the recency window (7 days by default) | +1 |
//! | access count | + min(count × 0.1, 1) |

use chrono::{DateTime, Duration, Utc};
use memory_core::{MemoryEntry, MemoryType};

pub const TOKEN_MATCH_POINTS: f64 = 2.0;
pub const PREFERENCE_POINTS: f64 = 3.0;
pub const DECISION_POINTS: f64 = 2.0;
pub const RECENCY_POINTS: f64 = 1.0;
pub const ACCESS_POINTS_PER_HIT: f64 = 0.1;
pub const ACCESS_POINTS_MAX: f64 = 1.0;

/// Splits a query into lower-cased whitespace tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Scores entries against query tokens at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct RelevanceRanker {
    now: DateTime<Utc>,
    recency_window: Duration,
}

impl RelevanceRanker {
    pub fn new(now: DateTime<Utc>, recency_window: Duration) -> Self {
        Self {
            now,
            recency_window,
        }
    }

    pub fn score(&self, entry: &MemoryEntry, query_tokens: &[String]) -> f64 {
        let content = entry.content().to_lowercase();

        let token_points = query_tokens
            .iter()
            .filter(|token| content.contains(token.as_str()))
            .count() as f64
            * TOKEN_MATCH_POINTS;

        let type_points = match entry.entry_type {
            MemoryType::Preference => PREFERENCE_POINTS,
            MemoryType::Decision => DECISION_POINTS,
            _ => 0.0,
        };

        let recency_points = if self.now - entry.timestamp < self.recency_window {
            RECENCY_POINTS
        } else {
            0.0
        };

        let access_points = (f64::from(entry.metadata.access_count) * ACCESS_POINTS_PER_HIT)
            .min(ACCESS_POINTS_MAX);

        token_points + type_points + recency_points + access_points
    }
}
