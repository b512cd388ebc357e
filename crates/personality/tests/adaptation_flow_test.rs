//! End-to-end adaptation tests: preferences and history come from a
//! [`memory::TieredMemoryStore`], adaptation runs through [`PersonalityEngine`].

use chrono::{Duration, TimeZone, Utc};
use memory::{MemoryConfig, MemoryType, TieredMemoryStore};
use personality::{
    CoachingApproach, CommunicationStyle, DecisionStyle, EmotionalState, EnergyLevel, Pacing,
    PersonalityEngine, PersonalityProfile, RelationshipMetrics, SituationContext, TaskType,
};
use rapport_core::ManualClock;
use std::sync::Arc;

fn base(adaptation_level: u8) -> PersonalityProfile {
    PersonalityProfile {
        communication_style: CommunicationStyle::Supportive,
        decision_style: DecisionStyle::Collaborative,
        coaching_approach: CoachingApproach::Socratic,
        energy_level: EnergyLevel::Moderate,
        adaptation_level,
    }
}

fn setup(adaptation_level: u8) -> (TieredMemoryStore, PersonalityEngine, ManualClock) {
    let clock = ManualClock::at(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap());
    let store = TieredMemoryStore::with_clock(MemoryConfig::default(), Arc::new(clock.clone()))
        .expect("default config is valid");
    let engine = PersonalityEngine::with_clock(base(adaptation_level), Arc::new(clock.clone()))
        .expect("base profile is valid");
    (store, engine, clock)
}

fn metrics(trust_level: u8) -> RelationshipMetrics {
    RelationshipMetrics {
        trust_level,
        rapport_level: 60,
        interaction_count: 10,
    }
}

/// **Test: Stated preferences drive adaptation when the level allows it.**
///
/// **Setup:** Base adaptation level 80; user states direct feedback and structured meetings.
/// **Action:** Adapt with trust 75 and 25 recent turns.
/// **Expected:** Direct communication, data-driven decisions, high energy.
#[test]
fn test_preferences_from_memory_adapt_profile() {
    let (store, engine, clock) = setup(80);

    store.store_conversation(
        "u1",
        "s1",
        "I prefer direct feedback and structured meetings",
        MemoryType::Preference,
        None,
    );
    for i in 0..24 {
        clock.advance(Duration::minutes(5));
        store.store_conversation(
            "u1",
            "s1",
            &format!("update {i}"),
            MemoryType::Conversation,
            None,
        );
    }

    let prefs = store.get_user_preferences("u1");
    let history = store.conversation_history("u1");
    let adapted = engine.adapt_personality("u1", &prefs, &metrics(75), &history);

    assert_eq!(adapted.communication_style, CommunicationStyle::Direct);
    assert_eq!(adapted.decision_style, DecisionStyle::DataDriven);
    assert_eq!(adapted.energy_level, EnergyLevel::High);
    assert_eq!(adapted.coaching_approach, CoachingApproach::Socratic);
    assert_eq!(adapted.adaptation_level, 80);
}

/// **Test: Low adaptation level ignores every signal.**
///
/// **Setup:** Base adaptation level 30, same memory as above.
/// **Action:** Adapt.
/// **Expected:** The profile equals the base; the user still counts as adapted.
#[test]
fn test_low_adaptation_level_keeps_base() {
    let (store, engine, _clock) = setup(30);

    store.store_conversation(
        "u1",
        "s1",
        "I prefer direct feedback and structured meetings",
        MemoryType::Preference,
        None,
    );

    let prefs = store.get_user_preferences("u1");
    let history = store.conversation_history("u1");
    let adapted = engine.adapt_personality("u1", &prefs, &metrics(90), &history);

    assert_eq!(adapted, base(30));
    assert_eq!(engine.adapted_users(), 1);
}

/// **Test: Low trust pulls coaching toward nurturing.**
///
/// **Setup:** Base adaptation level 70, no stated preferences.
/// **Action:** Adapt with trust 40.
/// **Expected:** Coaching becomes nurturing; traits show high supportiveness.
#[test]
fn test_low_trust_nurtures() {
    let (_store, engine, _clock) = setup(70);

    let adapted = engine.adapt_personality("u1", &Default::default(), &metrics(40), &[]);
    assert_eq!(adapted.coaching_approach, CoachingApproach::Nurturing);

    let traits = engine.get_personality_traits(&adapted, &SituationContext::default());
    assert!(traits.supportiveness >= 80);
    assert!(traits.supportiveness <= 100);
}

/// **Test: Stress changes response style without touching the stored profile.**
///
/// **Setup:** Adapted direct profile.
/// **Action:** Derive styles for neutral and stressed contexts.
/// **Expected:** Stress lowers directness, raises supportiveness and slows pacing.
#[test]
fn test_context_changes_style_not_profile() {
    let (_store, engine, _clock) = setup(80);
    let prefs = memory::extract_preferences("Please be blunt with me");
    let adapted = engine.adapt_personality("u1", &prefs, &metrics(75), &[]);
    assert_eq!(adapted.communication_style, CommunicationStyle::Direct);

    let neutral = engine.get_response_style(&adapted, &SituationContext::default());
    let stressed = engine.get_response_style(
        &adapted,
        &SituationContext {
            emotional_state: Some(EmotionalState::Stressed),
            task_type: Some(TaskType::Planning),
            ..Default::default()
        },
    );

    assert!(stressed.directness < neutral.directness);
    assert!(stressed.supportiveness > neutral.supportiveness);
    assert_eq!(stressed.pacing, Pacing::Slow);
    assert_eq!(engine.get_adapted_personality("u1"), adapted);
}

/// **Test: Consistency check over replies matching the adapted style.**
///
/// **Setup:** Supportive base profile, unadapted user.
/// **Action:** Validate supportive replies, then mostly analytical replies.
/// **Expected:** First set is fully consistent; second falls below 0.7 with recommendations.
#[test]
fn test_consistency_against_effective_profile() {
    let (_store, engine, _clock) = setup(80);
    let profile = engine.get_adapted_personality("u1");

    let good = engine.validate_personality_consistency(
        &profile,
        &["I understand, that sounds hard.", "I'm proud of the progress you made."],
    );
    assert_eq!(good.consistency_score, 1.0);
    assert!(good.deviations.is_empty());

    let off = engine.validate_personality_consistency(
        &profile,
        &[
            "The data shows a 12% drop because of churn.",
            "Therefore the analysis points to pricing.",
            "I understand how you feel.",
        ],
    );
    assert!(off.consistency_score < 0.7);
    assert_eq!(off.deviations.len(), 2);
    assert!(!off.recommendations.is_empty());
}
