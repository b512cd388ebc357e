//! # Personality Profile
//!
//! The style tags that describe how the agent behaves, plus the relationship
//! signals used to adapt them.
//!
//! | Dimension | Values |
//! |-----------|--------|
//! | `communication_style` | direct, analytical, supportive, creative |
//! | `decision_style` | data-driven, intuitive, collaborative, decisive |
//! | `coaching_approach` | challenging, nurturing, socratic, directive |
//! | `energy_level` | low, moderate, high |
//! | `adaptation_level` | 0-100, how far a user's profile may drift from the base |

use rapport_core::{RapportError, Result};
use serde::{Deserialize, Serialize};

pub use memory_core::CommunicationStyle;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionStyle {
    DataDriven,
    Intuitive,
    Collaborative,
    Decisive,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CoachingApproach {
    Challenging,
    Nurturing,
    Socratic,
    Directive,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Moderate,
    High,
}

/// Upper bound of `adaptation_level`.
pub const MAX_ADAPTATION_LEVEL: u8 = 100;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfile {
    pub communication_style: CommunicationStyle,
    pub decision_style: DecisionStyle,
    pub coaching_approach: CoachingApproach,
    pub energy_level: EnergyLevel,
    pub adaptation_level: u8,
}

impl PersonalityProfile {
    /// Rejects an `adaptation_level` above 100.
    pub fn validate(&self) -> Result<()> {
        if self.adaptation_level > MAX_ADAPTATION_LEVEL {
            return Err(RapportError::InvalidProfile(format!(
                "adaptationLevel must be within 0-{MAX_ADAPTATION_LEVEL}, got {}",
                self.adaptation_level
            )));
        }
        Ok(())
    }

    /// `adaptation_level` as a fraction in [0, 1].
    pub fn max_adaptation(&self) -> f64 {
        f64::from(self.adaptation_level) / 100.0
    }
}

/// Relationship signals between the agent and one user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipMetrics {
    /// 0-100
    pub trust_level: u8,
    /// 0-100
    pub rapport_level: u8,
    pub interaction_count: u32,
}

impl Default for RelationshipMetrics {
    fn default() -> Self {
        Self {
            trust_level: 50,
            rapport_level: 50,
            interaction_count: 0,
        }
    }
}
