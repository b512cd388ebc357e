//! # Personality Crate
//!
//! Adapts an agent's base personality to each user and derives per-turn
//! parameters from it.
//!
//! ## Quick Start
//!
//! ```rust
//! use memory_core::{FeedbackStyle, UserPreferences};
//! use personality::{
//!     CoachingApproach, CommunicationStyle, DecisionStyle, EnergyLevel, PersonalityEngine,
//!     PersonalityProfile, RelationshipMetrics, SituationContext,
//! };
//!
//! let engine = PersonalityEngine::new(PersonalityProfile {
//!     communication_style: CommunicationStyle::Supportive,
//!     decision_style: DecisionStyle::Collaborative,
//!     coaching_approach: CoachingApproach::Socratic,
//!     energy_level: EnergyLevel::Moderate,
//!     adaptation_level: 80,
//! })
//! .unwrap();
//!
//! let prefs = UserPreferences {
//!     feedback_style: Some(FeedbackStyle::Direct),
//!     ..Default::default()
//! };
//! let metrics = RelationshipMetrics { trust_level: 75, ..Default::default() };
//! let profile = engine.adapt_personality("user123", &prefs, &metrics, &[]);
//! assert_eq!(profile.communication_style, CommunicationStyle::Direct);
//!
//! let style = engine.get_response_style(&profile, &SituationContext::default());
//! assert!(style.directness > 0.5);
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - [`PersonalityEngine`], owner of per-user adapted profiles
//! - [`adaptation`] - target rules and the binary blend
//! - [`traits`] - 0-100 trait derivation
//! - [`style`] - per-turn response style
//! - [`consistency`] - style consistency checks over recent replies
//! - [`profile`], [`context`], [`config`] - data types and configuration

pub mod adaptation;
pub mod config;
pub mod consistency;
pub mod context;
pub mod engine;
pub mod profile;
pub mod style;
pub mod traits;

pub use config::PersonalityConfig;
pub use consistency::ConsistencyReport;
pub use context::{EmotionalState, SituationContext, TaskType, Urgency};
pub use engine::PersonalityEngine;
pub use profile::{
    CoachingApproach, CommunicationStyle, DecisionStyle, EnergyLevel, PersonalityProfile,
    RelationshipMetrics,
};
pub use style::{Pacing, ResponseStyle, Tone};
pub use traits::PersonalityTraits;
