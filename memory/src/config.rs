//! Tier capacities and ranking window.
//!
//! Loaded from the environment by [`MemoryConfig::from_env`]:
//! `RAPPORT_CONVERSATION_CAPACITY`, `RAPPORT_LONG_TERM_CAPACITY`, `RAPPORT_RECENCY_DAYS`.

use chrono::Duration;
use rapport_core::{env_parse, RapportError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONVERSATION_CAPACITY: usize = 100;
pub const DEFAULT_LONG_TERM_CAPACITY: usize = 500;
pub const DEFAULT_RECENCY_WINDOW_DAYS: i64 = 7;
pub const DEFAULT_MOST_ACCESSED_LIMIT: usize = 5;

/// Configuration for [`TieredMemoryStore`](crate::TieredMemoryStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryConfig {
    /// Maximum conversational entries per user (FIFO eviction)
    pub conversation_capacity: usize,
    /// Maximum long-term entries per user (importance-aware eviction)
    pub long_term_capacity: usize,
    /// Entries younger than this get the ranking recency bonus
    pub recency_window_days: i64,
    /// Number of entries listed in `MemoryStats::most_accessed_entries`
    pub most_accessed_limit: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            conversation_capacity: DEFAULT_CONVERSATION_CAPACITY,
            long_term_capacity: DEFAULT_LONG_TERM_CAPACITY,
            recency_window_days: DEFAULT_RECENCY_WINDOW_DAYS,
            most_accessed_limit: DEFAULT_MOST_ACCESSED_LIMIT,
        }
    }
}

impl MemoryConfig {
    /// Loads from environment variables, falling back to defaults for unset keys.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            conversation_capacity: env_parse(
                "RAPPORT_CONVERSATION_CAPACITY",
                DEFAULT_CONVERSATION_CAPACITY,
            )?,
            long_term_capacity: env_parse(
                "RAPPORT_LONG_TERM_CAPACITY",
                DEFAULT_LONG_TERM_CAPACITY,
            )?,
            recency_window_days: env_parse("RAPPORT_RECENCY_DAYS", DEFAULT_RECENCY_WINDOW_DAYS)?,
            most_accessed_limit: DEFAULT_MOST_ACCESSED_LIMIT,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects capacities of zero and recency windows that are negative or
    /// too large to represent as a duration.
    pub fn validate(&self) -> Result<()> {
        if self.conversation_capacity == 0 {
            return Err(RapportError::Config(
                "conversation capacity must be greater than 0".to_string(),
            ));
        }
        if self.long_term_capacity == 0 {
            return Err(RapportError::Config(
                "long-term capacity must be greater than 0".to_string(),
            ));
        }
        if self.recency_window_days < 0 {
            return Err(RapportError::Config(
                "recency window must not be negative".to_string(),
            ));
        }
        if Duration::try_days(self.recency_window_days).is_none() {
            return Err(RapportError::Config(format!(
                "recency window of {} days is out of range",
                self.recency_window_days
            )));
        }
        Ok(())
    }

    /// The recency window as a duration. Saturates for windows `validate` rejects.
    pub fn recency_window(&self) -> Duration {
        Duration::try_days(self.recency_window_days).unwrap_or_else(Duration::max_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MemoryConfig::default();
        assert_eq!(config.conversation_capacity, 100);
        assert_eq!(config.long_term_capacity, 500);
        assert_eq!(config.recency_window_days, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let config = MemoryConfig {
            long_term_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(RapportError::Config(_))));
    }

    #[test]
    fn test_unrepresentable_recency_window_is_rejected() {
        let config = MemoryConfig {
            recency_window_days: 200_000_000_000_000,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(RapportError::Config(_))));
        assert_eq!(config.recency_window(), Duration::max_value());
    }
}
