//! # Personality Adaptation Engine
//!
//! Holds the base profile and one adapted profile per user.
//!
//! ## Per-user lifecycle
//!
//! - **unadapted**: no record; the effective profile is the base profile.
//! - **adapted**: created by the first [`adapt_personality`](PersonalityEngine::adapt_personality)
//!   call and replaced by every later one. No history is kept.
//!
//! Records live for the engine's lifetime unless
//! [`reset_personality`](PersonalityEngine::reset_personality) drops them.

use memory_core::{MemoryEntry, UserPreferences};
use parking_lot::RwLock;
use rapport_core::{Clock, RapportError, Result, SystemClock};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::adaptation::{analyze_activity, blend, compute_targets};
use crate::config::PersonalityConfig;
use crate::consistency::{validate_consistency, ConsistencyReport};
use crate::context::SituationContext;
use crate::profile::{PersonalityProfile, RelationshipMetrics};
use crate::style::{derive_response_style, ResponseStyle};
use crate::traits::{derive_traits, PersonalityTraits};

#[derive(Debug)]
pub struct PersonalityEngine {
    base: PersonalityProfile,
    clock: Arc<dyn Clock>,
    adapted: RwLock<HashMap<String, PersonalityProfile>>,
}

impl PersonalityEngine {
    /// Creates an engine around `base`. Fails if the profile is invalid.
    pub fn new(base: PersonalityProfile) -> Result<Self> {
        Self::with_clock(base, Arc::new(SystemClock))
    }

    pub fn with_clock(base: PersonalityProfile, clock: Arc<dyn Clock>) -> Result<Self> {
        base.validate()?;
        Ok(Self {
            base,
            clock,
            adapted: RwLock::new(HashMap::new()),
        })
    }

    /// Creates an engine from config. A missing base profile is fatal.
    pub fn from_config(config: &PersonalityConfig) -> Result<Self> {
        let base = config.base_profile.ok_or_else(|| {
            RapportError::InvalidProfile("no base personality profile supplied".to_string())
        })?;
        Self::new(base)
    }

    pub fn base_profile(&self) -> &PersonalityProfile {
        &self.base
    }

    /// The user's adapted profile, or the base profile when the user is unadapted.
    /// Never creates a record.
    pub fn get_adapted_personality(&self, user_id: &str) -> PersonalityProfile {
        self.adapted
            .read()
            .get(user_id)
            .copied()
            .unwrap_or(self.base)
    }

    /// Recomputes and stores the user's adapted profile from fresh signals.
    ///
    /// `interaction_history` is typically the user's conversational tier; only
    /// entry timestamps are read.
    #[instrument(skip(self, preferences, metrics, interaction_history))]
    pub fn adapt_personality(
        &self,
        user_id: &str,
        preferences: &UserPreferences,
        metrics: &RelationshipMetrics,
        interaction_history: &[MemoryEntry],
    ) -> PersonalityProfile {
        let activity = analyze_activity(interaction_history, self.clock.now());
        let targets = compute_targets(preferences, metrics, activity);

        let mut adapted = self.adapted.write();
        let current = adapted.get(user_id).copied().unwrap_or(self.base);
        let next = blend(&current, &targets);

        debug!(
            user_id = %user_id,
            activity = ?activity,
            targets = ?targets,
            max_adaptation = current.max_adaptation(),
            "Computed adaptation targets"
        );
        if next != current {
            info!(user_id = %user_id, profile = ?next, "Adapted personality");
        }

        adapted.insert(user_id.to_string(), next);
        next
    }

    /// Returns the user to the unadapted state. Returns whether a record existed.
    pub fn reset_personality(&self, user_id: &str) -> bool {
        self.adapted.write().remove(user_id).is_some()
    }

    /// Number of users in the adapted state.
    pub fn adapted_users(&self) -> usize {
        self.adapted.read().len()
    }

    pub fn get_personality_traits(
        &self,
        profile: &PersonalityProfile,
        context: &SituationContext,
    ) -> PersonalityTraits {
        derive_traits(profile, context)
    }

    pub fn get_response_style(
        &self,
        profile: &PersonalityProfile,
        context: &SituationContext,
    ) -> ResponseStyle {
        derive_response_style(profile, context)
    }

    pub fn validate_personality_consistency<S: AsRef<str>>(
        &self,
        profile: &PersonalityProfile,
        recent_responses: &[S],
    ) -> ConsistencyReport {
        validate_consistency(profile, recent_responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CoachingApproach, CommunicationStyle, DecisionStyle, EnergyLevel};
    use chrono::{Duration, TimeZone, Utc};
    use memory_core::{FeedbackStyle, MeetingPreference, MemoryMetadata, MemoryType};
    use rapport_core::ManualClock;

    fn base(adaptation_level: u8) -> PersonalityProfile {
        PersonalityProfile {
            communication_style: CommunicationStyle::Supportive,
            decision_style: DecisionStyle::Collaborative,
            coaching_approach: CoachingApproach::Socratic,
            energy_level: EnergyLevel::Moderate,
            adaptation_level,
        }
    }

    fn direct_prefs() -> UserPreferences {
        UserPreferences {
            feedback_style: Some(FeedbackStyle::Direct),
            ..Default::default()
        }
    }

    fn trust(trust_level: u8) -> RelationshipMetrics {
        RelationshipMetrics {
            trust_level,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_profile() {
        assert!(matches!(
            PersonalityEngine::new(base(101)),
            Err(RapportError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_from_config_requires_base() {
        assert!(PersonalityEngine::from_config(&PersonalityConfig::default()).is_err());
        let config = PersonalityConfig::with_base(base(70));
        let engine = PersonalityEngine::from_config(&config).unwrap();
        assert_eq!(engine.base_profile(), &base(70));
    }

    #[test]
    fn test_unadapted_user_gets_base_without_record() {
        let engine = PersonalityEngine::new(base(80)).unwrap();
        assert_eq!(engine.get_adapted_personality("nobody"), base(80));
        assert_eq!(engine.adapted_users(), 0);
    }

    /// Test: adaptation above the blend threshold adopts targets.
    ///
    /// Setup: base adaptation level 80, direct feedback, trust 75.
    ///
    /// Expected: communication becomes direct; the stored record matches.
    #[test]
    fn test_adapt_above_threshold() {
        let engine = PersonalityEngine::new(base(80)).unwrap();
        let adapted = engine.adapt_personality("u1", &direct_prefs(), &trust(75), &[]);

        assert_eq!(adapted.communication_style, CommunicationStyle::Direct);
        assert_eq!(adapted.adaptation_level, 80);
        assert_eq!(engine.get_adapted_personality("u1"), adapted);
        assert_eq!(engine.adapted_users(), 1);
    }

    /// Test: adaptation at or below the threshold keeps the base.
    ///
    /// Setup: base adaptation level 30, same signals as above.
    ///
    /// Expected: profile unchanged, but a record now exists.
    #[test]
    fn test_adapt_below_threshold() {
        let engine = PersonalityEngine::new(base(30)).unwrap();
        let adapted = engine.adapt_personality("u1", &direct_prefs(), &trust(75), &[]);

        assert_eq!(adapted, base(30));
        assert_eq!(engine.adapted_users(), 1);
    }

    #[test]
    fn test_adaptation_builds_on_previous_record() {
        let engine = PersonalityEngine::new(base(80)).unwrap();
        engine.adapt_personality("u1", &direct_prefs(), &trust(75), &[]);

        let structured = UserPreferences {
            meeting_preference: Some(MeetingPreference::Structured),
            ..Default::default()
        };
        let adapted = engine.adapt_personality("u1", &structured, &trust(60), &[]);

        assert_eq!(adapted.communication_style, CommunicationStyle::Direct);
        assert_eq!(adapted.decision_style, DecisionStyle::DataDriven);
    }

    #[test]
    fn test_users_are_isolated() {
        let engine = PersonalityEngine::new(base(80)).unwrap();
        engine.adapt_personality("u1", &direct_prefs(), &trust(75), &[]);

        assert_eq!(engine.get_adapted_personality("u2"), base(80));
    }

    #[test]
    fn test_activity_uses_engine_clock() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap();
        let clock = ManualClock::at(now);
        let engine = PersonalityEngine::with_clock(base(80), Arc::new(clock.clone())).unwrap();

        let history: Vec<MemoryEntry> = (0..25)
            .map(|i| {
                MemoryEntry::new(
                    "u1",
                    "s1",
                    MemoryType::Conversation,
                    format!("message {i}"),
                    now - Duration::hours(i),
                    MemoryMetadata::default(),
                )
            })
            .collect();

        let no_prefs = UserPreferences::default();
        let adapted = engine.adapt_personality("u1", &no_prefs, &trust(60), &history);
        assert_eq!(adapted.energy_level, EnergyLevel::High);

        engine.reset_personality("u1");
        clock.advance(Duration::days(30));
        let adapted = engine.adapt_personality("u1", &no_prefs, &trust(60), &history);
        assert_eq!(adapted.energy_level, EnergyLevel::Moderate);
    }

    #[test]
    fn test_reset_returns_user_to_base() {
        let engine = PersonalityEngine::new(base(80)).unwrap();
        engine.adapt_personality("u1", &direct_prefs(), &trust(75), &[]);

        assert!(engine.reset_personality("u1"));
        assert!(!engine.reset_personality("u1"));
        assert_eq!(engine.get_adapted_personality("u1"), base(80));
    }
}
