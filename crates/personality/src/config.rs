//! Personality engine configuration.
//!
//! The base profile is read from `RAPPORT_BASE_PROFILE` as JSON, e.g.
//! `{"communicationStyle":"supportive","decisionStyle":"collaborative","coachingApproach":"socratic","energyLevel":"moderate","adaptationLevel":70}`.

use rapport_core::Result;
use serde::{Deserialize, Serialize};
use std::env;

use crate::profile::PersonalityProfile;

pub const BASE_PROFILE_ENV: &str = "RAPPORT_BASE_PROFILE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityConfig {
    /// Required by `PersonalityEngine::from_config`
    pub base_profile: Option<PersonalityProfile>,
}

impl PersonalityConfig {
    pub fn with_base(base_profile: PersonalityProfile) -> Self {
        Self {
            base_profile: Some(base_profile),
        }
    }

    /// Loads from the environment. An unset variable leaves `base_profile` empty;
    /// a set but unparsable one is an error.
    pub fn from_env() -> Result<Self> {
        let base_profile = match env::var(BASE_PROFILE_ENV) {
            Ok(raw) => Some(serde_json::from_str(&raw)?),
            Err(_) => None,
        };
        Ok(Self { base_profile })
    }
}
