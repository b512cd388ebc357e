//! # Adaptation Rules
//!
//! Computes a target value per profile dimension from user signals, then blends
//! targets into the current profile.
//!
//! ## Targets
//!
//! | Dimension | Rule |
//! |-----------|------|
//! | communication | `direct` if feedback is direct and trust > 70; `supportive` if feedback is gentle |
//! | coaching | `challenging` if challenge is high and trust > 80; `nurturing` if trust < 50 |
//! | decision | `data-driven` for structured meetings; `collaborative` for casual ones |
//! | energy | `high` or `moderate` from recent interaction volume |
//!
//! A dimension without a target keeps its current value.
//!
//! ## Blending
//!
//! Binary: when `adaptation_level / 100 > 0.5` every target is adopted outright,
//! otherwise the current profile is kept unchanged. There is no interpolation
//! between the two. `adaptation_level` itself never changes.

use chrono::{DateTime, Duration, Utc};
use memory_core::{
    ChallengeLevel, CommunicationStyle, FeedbackStyle, MeetingPreference, MemoryEntry,
    UserPreferences,
};

use crate::profile::{
    CoachingApproach, DecisionStyle, EnergyLevel, PersonalityProfile, RelationshipMetrics,
};

pub const BLEND_THRESHOLD: f64 = 0.5;
pub const DIRECT_TRUST_MIN: u8 = 70;
pub const CHALLENGE_TRUST_MIN: u8 = 80;
pub const NURTURE_TRUST_MAX: u8 = 50;
pub const ACTIVITY_WINDOW_DAYS: i64 = 7;
pub const HIGH_ACTIVITY_MIN: usize = 20;
pub const MODERATE_ACTIVITY_MIN: usize = 5;

/// Interaction volume bucket derived from recent history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

/// Per-dimension targets; `None` means no signal for that dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdaptationTargets {
    pub communication_style: Option<CommunicationStyle>,
    pub coaching_approach: Option<CoachingApproach>,
    pub decision_style: Option<DecisionStyle>,
    pub energy_level: Option<EnergyLevel>,
}

/// Buckets interactions from the last seven days.
pub fn analyze_activity(history: &[MemoryEntry], now: DateTime<Utc>) -> ActivityLevel {
    let window = Duration::days(ACTIVITY_WINDOW_DAYS);
    let recent = history
        .iter()
        .filter(|e| now - e.timestamp < window)
        .count();

    if recent >= HIGH_ACTIVITY_MIN {
        ActivityLevel::High
    } else if recent >= MODERATE_ACTIVITY_MIN {
        ActivityLevel::Moderate
    } else {
        ActivityLevel::Low
    }
}

pub fn compute_targets(
    preferences: &UserPreferences,
    metrics: &RelationshipMetrics,
    activity: ActivityLevel,
) -> AdaptationTargets {
    let communication_style = match preferences.feedback_style {
        Some(FeedbackStyle::Direct) if metrics.trust_level > DIRECT_TRUST_MIN => {
            Some(CommunicationStyle::Direct)
        }
        Some(FeedbackStyle::Gentle) => Some(CommunicationStyle::Supportive),
        _ => None,
    };

    let coaching_approach = if preferences.challenge_level == Some(ChallengeLevel::High)
        && metrics.trust_level > CHALLENGE_TRUST_MIN
    {
        Some(CoachingApproach::Challenging)
    } else if metrics.trust_level < NURTURE_TRUST_MAX {
        Some(CoachingApproach::Nurturing)
    } else {
        None
    };

    let decision_style = match preferences.meeting_preference {
        Some(MeetingPreference::Structured) => Some(DecisionStyle::DataDriven),
        Some(MeetingPreference::Casual) => Some(DecisionStyle::Collaborative),
        _ => None,
    };

    let energy_level = match activity {
        ActivityLevel::High => Some(EnergyLevel::High),
        ActivityLevel::Moderate => Some(EnergyLevel::Moderate),
        ActivityLevel::Low => None,
    };

    AdaptationTargets {
        communication_style,
        coaching_approach,
        decision_style,
        energy_level,
    }
}

fn blend_dimension<T: Copy>(current: T, target: Option<T>, adopt: bool) -> T {
    match target {
        Some(target) if adopt => target,
        _ => current,
    }
}

/// Applies `targets` to `current` under the binary blend threshold.
pub fn blend(current: &PersonalityProfile, targets: &AdaptationTargets) -> PersonalityProfile {
    let adopt = current.max_adaptation() > BLEND_THRESHOLD;

    PersonalityProfile {
        communication_style: blend_dimension(
            current.communication_style,
            targets.communication_style,
            adopt,
        ),
        decision_style: blend_dimension(current.decision_style, targets.decision_style, adopt),
        coaching_approach: blend_dimension(
            current.coaching_approach,
            targets.coaching_approach,
            adopt,
        ),
        energy_level: blend_dimension(current.energy_level, targets.energy_level, adopt),
        adaptation_level: current.adaptation_level,
    }
}
