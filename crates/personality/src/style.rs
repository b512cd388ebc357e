//! # Response Style
//!
//! Per-turn parameters that shape one generated reply. Each field has its own
//! small rule combining profile tags with context flags; the four real-valued
//! fields are clamped to [0, 1] after context adjustment.

use serde::{Deserialize, Serialize};

use crate::context::{EmotionalState, SituationContext, TaskType};
use crate::profile::{
    CoachingApproach, CommunicationStyle, DecisionStyle, EnergyLevel, PersonalityProfile,
};

/// Relationship strength assumed when the context does not carry one.
pub const DEFAULT_RELATIONSHIP_STRENGTH: u8 = 50;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Calm,
    Focused,
    Playful,
    Warm,
    Encouraging,
    Professional,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Pacing {
    Slow,
    Moderate,
    Fast,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStyle {
    pub tone: Tone,
    pub directness: f64,
    pub supportiveness: f64,
    pub analytical_depth: f64,
    pub personal_touch: f64,
    pub pacing: Pacing,
}

fn unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

fn tone(profile: &PersonalityProfile, context: &SituationContext) -> Tone {
    if context.is_stressed() {
        Tone::Calm
    } else if context.is_urgent() {
        Tone::Focused
    } else if context.is_task(TaskType::Brainstorm)
        || profile.communication_style == CommunicationStyle::Creative
    {
        Tone::Playful
    } else if profile.communication_style == CommunicationStyle::Supportive
        || profile.coaching_approach == CoachingApproach::Nurturing
    {
        Tone::Warm
    } else if profile.coaching_approach == CoachingApproach::Challenging {
        Tone::Encouraging
    } else {
        Tone::Professional
    }
}

fn directness(profile: &PersonalityProfile, context: &SituationContext) -> f64 {
    let mut value = match profile.communication_style {
        CommunicationStyle::Direct => 0.8,
        CommunicationStyle::Analytical => 0.6,
        CommunicationStyle::Creative => 0.5,
        CommunicationStyle::Supportive => 0.4,
    };
    if profile.coaching_approach == CoachingApproach::Challenging {
        value += 0.1;
    }
    if context.is_urgent() {
        value += 0.1;
    }
    if context.is_stressed() {
        value -= 0.2;
    }
    unit(value)
}

fn supportiveness(profile: &PersonalityProfile, context: &SituationContext) -> f64 {
    let mut value = match profile.communication_style {
        CommunicationStyle::Supportive => 0.8,
        CommunicationStyle::Creative => 0.6,
        CommunicationStyle::Analytical | CommunicationStyle::Direct => 0.4,
    };
    if profile.coaching_approach == CoachingApproach::Nurturing {
        value += 0.1;
    }
    if matches!(
        context.emotional_state,
        Some(EmotionalState::Stressed | EmotionalState::Frustrated)
    ) {
        value += 0.2;
    }
    unit(value)
}

fn analytical_depth(profile: &PersonalityProfile, context: &SituationContext) -> f64 {
    let mut value = match profile.communication_style {
        CommunicationStyle::Analytical => 0.8,
        CommunicationStyle::Direct => 0.5,
        CommunicationStyle::Creative | CommunicationStyle::Supportive => 0.4,
    };
    if profile.decision_style == DecisionStyle::DataDriven {
        value += 0.1;
    }
    if context.is_task(TaskType::Analysis) {
        value += 0.2;
    }
    if context.is_urgent() {
        value -= 0.1;
    }
    if context.is_stressed() {
        value -= 0.2;
    }
    unit(value)
}

fn personal_touch(profile: &PersonalityProfile, context: &SituationContext) -> f64 {
    let strength = context
        .relationship_strength
        .unwrap_or(DEFAULT_RELATIONSHIP_STRENGTH)
        .min(100);
    let mut value = 0.3 + 0.5 * f64::from(strength) / 100.0;
    if profile.communication_style == CommunicationStyle::Supportive {
        value += 0.1;
    }
    if context.is_stressed() {
        value += 0.1;
    }
    unit(value)
}

fn pacing(profile: &PersonalityProfile, context: &SituationContext) -> Pacing {
    if context.is_urgent() {
        Pacing::Fast
    } else if context.is_stressed() {
        Pacing::Slow
    } else {
        match profile.energy_level {
            EnergyLevel::High => Pacing::Fast,
            EnergyLevel::Low => Pacing::Slow,
            EnergyLevel::Moderate => Pacing::Moderate,
        }
    }
}

/// Derives the response style for `profile` in `context`.
pub fn derive_response_style(
    profile: &PersonalityProfile,
    context: &SituationContext,
) -> ResponseStyle {
    ResponseStyle {
        tone: tone(profile, context),
        directness: directness(profile, context),
        supportiveness: supportiveness(profile, context),
        analytical_depth: analytical_depth(profile, context),
        personal_touch: personal_touch(profile, context),
        pacing: pacing(profile, context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Urgency;

    const EPS: f64 = 1e-9;

    fn profile(
        communication_style: CommunicationStyle,
        coaching_approach: CoachingApproach,
    ) -> PersonalityProfile {
        PersonalityProfile {
            communication_style,
            decision_style: DecisionStyle::Collaborative,
            coaching_approach,
            energy_level: EnergyLevel::Moderate,
            adaptation_level: 50,
        }
    }

    #[test]
    fn test_neutral_direct_profile() {
        let style = derive_response_style(
            &profile(CommunicationStyle::Direct, CoachingApproach::Directive),
            &SituationContext::default(),
        );
        assert_eq!(style.tone, Tone::Professional);
        assert!((style.directness - 0.8).abs() < EPS);
        assert!((style.supportiveness - 0.4).abs() < EPS);
        assert!((style.personal_touch - 0.55).abs() < EPS);
        assert_eq!(style.pacing, Pacing::Moderate);
    }

    #[test]
    fn test_stress_softens_and_slows() {
        let style = derive_response_style(
            &profile(CommunicationStyle::Direct, CoachingApproach::Challenging),
            &SituationContext {
                emotional_state: Some(EmotionalState::Stressed),
                ..Default::default()
            },
        );
        assert_eq!(style.tone, Tone::Calm);
        assert!((style.directness - 0.7).abs() < EPS);
        assert!((style.supportiveness - 0.6).abs() < EPS);
        assert_eq!(style.pacing, Pacing::Slow);
    }

    #[test]
    fn test_urgency_speeds_up() {
        let style = derive_response_style(
            &profile(CommunicationStyle::Supportive, CoachingApproach::Nurturing),
            &SituationContext {
                urgency: Some(Urgency::High),
                ..Default::default()
            },
        );
        assert_eq!(style.tone, Tone::Focused);
        assert_eq!(style.pacing, Pacing::Fast);
    }

    #[test]
    fn test_values_clamped_to_unit_interval() {
        let mut p = profile(CommunicationStyle::Analytical, CoachingApproach::Challenging);
        p.decision_style = DecisionStyle::DataDriven;
        let style = derive_response_style(
            &p,
            &SituationContext {
                task_type: Some(TaskType::Analysis),
                relationship_strength: Some(255),
                ..Default::default()
            },
        );
        assert_eq!(style.analytical_depth, 1.0);
        assert!(style.personal_touch <= 1.0);
        for v in [
            style.directness,
            style.supportiveness,
            style.analytical_depth,
            style.personal_touch,
        ] {
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_tone_priorities() {
        let creative = profile(CommunicationStyle::Creative, CoachingApproach::Socratic);
        assert_eq!(
            derive_response_style(&creative, &SituationContext::default()).tone,
            Tone::Playful
        );
        let challenger = profile(CommunicationStyle::Analytical, CoachingApproach::Challenging);
        assert_eq!(
            derive_response_style(&challenger, &SituationContext::default()).tone,
            Tone::Encouraging
        );
    }
}
