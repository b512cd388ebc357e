//! Application configuration: memory tiers, base personality and log file,
//! loaded together from the environment.

use memory::MemoryConfig;
use personality::PersonalityConfig;
use rapport_core::Result;
use std::env;

pub const LOG_FILE_ENV: &str = "LOG_FILE";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RapportConfig {
    pub memory: MemoryConfig,
    pub personality: PersonalityConfig,
    /// Extra log destination; stderr is always written.
    pub log_file: Option<String>,
}

impl RapportConfig {
    /// Loads every section from the environment. Call `dotenvy::dotenv()` first
    /// so `.env` values are visible.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            memory: MemoryConfig::from_env()?,
            personality: PersonalityConfig::from_env()?,
            log_file: env::var(LOG_FILE_ENV).ok().filter(|v| !v.is_empty()),
        })
    }

    /// Replaces the log file when `flag` is set.
    pub fn with_log_file_override(mut self, flag: Option<String>) -> Self {
        if flag.is_some() {
            self.log_file = flag;
        }
        self
    }
}
