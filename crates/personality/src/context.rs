//! Per-turn situational context passed to trait and response-style derivation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalState {
    Neutral,
    Positive,
    Stressed,
    Frustrated,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Normal,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Analysis,
    Brainstorm,
    Planning,
    Reflection,
    Casual,
}

/// Lightweight context for one turn. Every field is optional; an absent field
/// applies no adjustment.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SituationContext {
    #[serde(default)]
    pub emotional_state: Option<EmotionalState>,
    #[serde(default)]
    pub urgency: Option<Urgency>,
    #[serde(default)]
    pub task_type: Option<TaskType>,
    /// 0-100
    #[serde(default)]
    pub relationship_strength: Option<u8>,
}

impl SituationContext {
    pub fn is_stressed(&self) -> bool {
        self.emotional_state == Some(EmotionalState::Stressed)
    }

    pub fn is_urgent(&self) -> bool {
        self.urgency == Some(Urgency::High)
    }

    pub fn is_task(&self, task: TaskType) -> bool {
        self.task_type == Some(task)
    }
}
