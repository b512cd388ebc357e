//! # Promotion Policy
//!
//! Decides whether a freshly stored conversational entry is copied into the
//! long-term tier, and at which [`Importance`].
//!
//! An entry is promoted when its type is `preference` or `decision`, or when its
//! lower-cased content contains one of [`PROMOTION_KEYWORDS`]. Importance is then:
//!
//! | Condition | Importance |
//! |-----------|------------|
//! | type is preference/decision, or content has a [`CRITICAL_KEYWORDS`] match | `High` |
//! | content has a [`MEDIUM_KEYWORDS`] match | `Medium` |
//! | otherwise | `Low` |
//!
//! Keyword matching is substring-based, so "goals" matches "goal".

use memory_core::{Importance, MemoryType};

/// Content keywords that signal durable intent.
pub const PROMOTION_KEYWORDS: &[&str] = &[
    "strategy",
    "goal",
    "preference",
    "important",
    "remember",
    "always",
    "never",
    "hate",
    "love",
    "critical",
];

/// Keywords that make a promoted entry `High` importance.
pub const CRITICAL_KEYWORDS: &[&str] = &["critical", "important", "never", "always"];

/// Keywords that make a promoted entry `Medium` importance.
pub const MEDIUM_KEYWORDS: &[&str] = &["strategy", "goal", "plan", "remember"];

fn is_durable_type(entry_type: MemoryType) -> bool {
    matches!(entry_type, MemoryType::Preference | MemoryType::Decision)
}

fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lowered.contains(k))
}

/// Returns the importance to promote with, or `None` when the entry stays
/// conversational only.
pub fn promotion_importance(entry_type: MemoryType, content: &str) -> Option<Importance> {
    let lowered = content.to_lowercase();
    if !is_durable_type(entry_type) && !contains_any(&lowered, PROMOTION_KEYWORDS) {
        return None;
    }
    Some(classify_importance(entry_type, &lowered))
}

fn classify_importance(entry_type: MemoryType, lowered: &str) -> Importance {
    if is_durable_type(entry_type) || contains_any(lowered, CRITICAL_KEYWORDS) {
        Importance::High
    } else if contains_any(lowered, MEDIUM_KEYWORDS) {
        Importance::Medium
    } else {
        Importance::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_and_decision_always_high() {
        assert_eq!(
            promotion_importance(MemoryType::Preference, "weekly check-ins"),
            Some(Importance::High)
        );
        assert_eq!(
            promotion_importance(MemoryType::Decision, "go with vendor B"),
            Some(Importance::High)
        );
    }

    #[test]
    fn test_always_keyword_is_high() {
        assert_eq!(
            promotion_importance(MemoryType::Conversation, "I always want direct feedback"),
            Some(Importance::High)
        );
    }

    #[test]
    fn test_goal_keyword_is_medium() {
        assert_eq!(
            promotion_importance(MemoryType::Conversation, "My GOAL is to ship in May"),
            Some(Importance::Medium)
        );
    }

    #[test]
    fn test_love_keyword_is_low() {
        assert_eq!(
            promotion_importance(MemoryType::Fact, "I love hiking"),
            Some(Importance::Low)
        );
    }

    #[test]
    fn test_plan_alone_does_not_promote() {
        // "plan" raises importance but is not itself a promotion trigger.
        assert_eq!(
            promotion_importance(MemoryType::Conversation, "let's plan lunch"),
            None
        );
    }

    #[test]
    fn test_plain_turn_not_promoted() {
        assert_eq!(
            promotion_importance(MemoryType::Conversation, "talked about the weather"),
            None
        );
    }
}
