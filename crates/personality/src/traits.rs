//! # Personality Traits
//!
//! Numeric traits (0-100) derived from a profile's style tags, then nudged by
//! the situational context and clamped.
//!
//! Base values come from the communication style; coaching approach, decision
//! style and energy level add fixed deltas. Context adjustments:
//!
//! | Context | Adjustment |
//! |---------|------------|
//! | stressed, or high urgency | supportiveness +20, patience +15 |
//! | analysis task with high urgency | directness +15, analytical depth +10 |
//! | brainstorm task | creativity +25 |

use serde::{Deserialize, Serialize};

use crate::context::{SituationContext, TaskType};
use crate::profile::{
    CoachingApproach, CommunicationStyle, DecisionStyle, EnergyLevel, PersonalityProfile,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityTraits {
    pub supportiveness: u8,
    pub directness: u8,
    pub analytical_depth: u8,
    pub creativity: u8,
    pub patience: u8,
}

/// Working values before clamping.
#[derive(Debug, Clone, Copy, Default)]
struct TraitScores {
    supportiveness: i32,
    directness: i32,
    analytical_depth: i32,
    creativity: i32,
    patience: i32,
}

impl TraitScores {
    const fn new(
        supportiveness: i32,
        directness: i32,
        analytical_depth: i32,
        creativity: i32,
        patience: i32,
    ) -> Self {
        Self {
            supportiveness,
            directness,
            analytical_depth,
            creativity,
            patience,
        }
    }

    fn add(&mut self, delta: TraitScores) {
        self.supportiveness += delta.supportiveness;
        self.directness += delta.directness;
        self.analytical_depth += delta.analytical_depth;
        self.creativity += delta.creativity;
        self.patience += delta.patience;
    }

    fn clamped(self) -> PersonalityTraits {
        let clamp = |v: i32| v.clamp(0, 100) as u8;
        PersonalityTraits {
            supportiveness: clamp(self.supportiveness),
            directness: clamp(self.directness),
            analytical_depth: clamp(self.analytical_depth),
            creativity: clamp(self.creativity),
            patience: clamp(self.patience),
        }
    }
}

fn communication_base(style: CommunicationStyle) -> TraitScores {
    match style {
        CommunicationStyle::Direct => TraitScores::new(50, 85, 60, 45, 50),
        CommunicationStyle::Analytical => TraitScores::new(45, 65, 90, 40, 60),
        CommunicationStyle::Supportive => TraitScores::new(90, 40, 50, 55, 85),
        CommunicationStyle::Creative => TraitScores::new(60, 50, 45, 90, 65),
    }
}

fn coaching_delta(approach: CoachingApproach) -> TraitScores {
    match approach {
        CoachingApproach::Challenging => TraitScores::new(-10, 10, 0, 0, -10),
        CoachingApproach::Nurturing => TraitScores::new(10, -5, 0, 0, 10),
        CoachingApproach::Socratic => TraitScores::new(0, 0, 10, 0, 5),
        CoachingApproach::Directive => TraitScores::new(0, 10, 0, -5, 0),
    }
}

fn decision_delta(style: DecisionStyle) -> TraitScores {
    match style {
        DecisionStyle::DataDriven => TraitScores::new(0, 0, 10, 0, 0),
        DecisionStyle::Intuitive => TraitScores::new(0, 0, 0, 10, 0),
        DecisionStyle::Collaborative => TraitScores::new(5, 0, 0, 0, 5),
        DecisionStyle::Decisive => TraitScores::new(0, 5, 0, 0, 0),
    }
}

fn energy_delta(level: EnergyLevel) -> TraitScores {
    match level {
        EnergyLevel::Low => TraitScores::new(0, 0, 0, 0, 5),
        EnergyLevel::Moderate => TraitScores::default(),
        EnergyLevel::High => TraitScores::new(0, 0, 0, 5, -5),
    }
}

fn context_delta(context: &SituationContext) -> TraitScores {
    let mut delta = TraitScores::default();
    if context.is_stressed() || context.is_urgent() {
        delta.supportiveness += 20;
        delta.patience += 15;
    }
    if context.is_task(TaskType::Analysis) && context.is_urgent() {
        delta.directness += 15;
        delta.analytical_depth += 10;
    }
    if context.is_task(TaskType::Brainstorm) {
        delta.creativity += 25;
    }
    delta
}

/// Derives traits for `profile` in `context`; every value is within [0, 100].
pub fn derive_traits(
    profile: &PersonalityProfile,
    context: &SituationContext,
) -> PersonalityTraits {
    let mut scores = communication_base(profile.communication_style);
    scores.add(coaching_delta(profile.coaching_approach));
    scores.add(decision_delta(profile.decision_style));
    scores.add(energy_delta(profile.energy_level));
    scores.add(context_delta(context));
    scores.clamped()
}
