//! # Preference Extraction
//!
//! Turns the content of `preference` memories into [`UserPreferences`].
//!
//! Content is first read as a JSON object (`{"feedbackStyle": "direct", ...}`).
//! Anything that is not a JSON object, or whose fields do not fit the known
//! enums, falls back to keyword matching on the raw text. When neither path
//! yields a field the text is kept verbatim in `notes`; extraction never fails.

use memory_core::{
    ChallengeLevel, CommunicationStyle, FeedbackStyle, MeetingPreference, MemoryEntry,
    UserPreferences,
};
use tracing::debug;

const DIRECT_FEEDBACK: &[&str] = &["direct", "blunt", "straight"];
const GENTLE_FEEDBACK: &[&str] = &["gentle", "soft", "kind"];
const HIGH_CHALLENGE: &[&str] = &["challenge", "challenging", "push me", "stretch"];
const LOW_CHALLENGE: &[&str] = &["easy", "relaxed"];
const STRUCTURED_MEETINGS: &[&str] = &["structured", "agenda", "formal"];
const CASUAL_MEETINGS: &[&str] = &["casual", "informal"];
const ANALYTICAL_COMMUNICATION: &[&str] = &["analytical", "data", "numbers"];
const CREATIVE_COMMUNICATION: &[&str] = &["creative", "brainstorm"];
const SUPPORTIVE_COMMUNICATION: &[&str] = &["supportive", "encouraging"];
const DIRECT_COMMUNICATION: &[&str] = &["to the point", "concise"];

/// Extracts preferences from one piece of preference content.
pub fn extract_preferences(content: &str) -> UserPreferences {
    if let Some(parsed) = parse_structured(content) {
        if !parsed.has_no_fields() {
            return parsed;
        }
    }

    let extracted = extract_by_keywords(content);
    if extracted.has_no_fields() {
        UserPreferences {
            notes: vec![content.to_string()],
            ..Default::default()
        }
    } else {
        extracted
    }
}

/// Folds the preference entries of one user, oldest first, so newer statements
/// override older ones. Entries repeating an already folded content are skipped.
pub fn fold_preferences<'a, I>(entries: I) -> UserPreferences
where
    I: IntoIterator<Item = &'a MemoryEntry>,
{
    let mut ordered: Vec<&MemoryEntry> = entries.into_iter().collect();
    ordered.sort_by_key(|e| e.timestamp);

    let mut seen = std::collections::HashSet::new();
    let mut preferences = UserPreferences::default();
    for entry in ordered {
        if seen.insert(entry.content()) {
            preferences.merge(extract_preferences(entry.content()));
        }
    }
    preferences
}

fn parse_structured(content: &str) -> Option<UserPreferences> {
    let value: serde_json::Value = serde_json::from_str(content.trim()).ok()?;
    if !value.is_object() {
        return None;
    }
    match serde_json::from_value::<UserPreferences>(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!(error = %e, "Preference JSON did not match known fields, using keywords");
            None
        }
    }
}

fn matches_any(lowered: &str, words: &[&str], keywords: &[&str]) -> bool {
    keywords.iter().any(|k| {
        if k.contains(' ') {
            lowered.contains(k)
        } else {
            words.iter().any(|w| w == k)
        }
    })
}

fn extract_by_keywords(content: &str) -> UserPreferences {
    let lowered = content.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let has = |keywords: &[&str]| matches_any(&lowered, &words, keywords);

    let feedback_style = if has(DIRECT_FEEDBACK) {
        Some(FeedbackStyle::Direct)
    } else if has(GENTLE_FEEDBACK) {
        Some(FeedbackStyle::Gentle)
    } else {
        None
    };

    let challenge_level = if has(HIGH_CHALLENGE) {
        Some(ChallengeLevel::High)
    } else if has(LOW_CHALLENGE) {
        Some(ChallengeLevel::Low)
    } else {
        None
    };

    let meeting_preference = if has(STRUCTURED_MEETINGS) {
        Some(MeetingPreference::Structured)
    } else if has(CASUAL_MEETINGS) {
        Some(MeetingPreference::Casual)
    } else {
        None
    };

    let communication_style = if has(ANALYTICAL_COMMUNICATION) {
        Some(CommunicationStyle::Analytical)
    } else if has(CREATIVE_COMMUNICATION) {
        Some(CommunicationStyle::Creative)
    } else if has(SUPPORTIVE_COMMUNICATION) {
        Some(CommunicationStyle::Supportive)
    } else if has(DIRECT_COMMUNICATION) {
        Some(CommunicationStyle::Direct)
    } else {
        None
    };

    UserPreferences {
        feedback_style,
        challenge_level,
        meeting_preference,
        communication_style,
        notes: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use memory_core::{MemoryMetadata, MemoryType};

    #[test]
    fn test_structured_json_is_used() {
        let prefs = extract_preferences(r#"{"feedbackStyle":"gentle","challengeLevel":"high"}"#);
        assert_eq!(prefs.feedback_style, Some(FeedbackStyle::Gentle));
        assert_eq!(prefs.challenge_level, Some(ChallengeLevel::High));
        assert!(prefs.notes.is_empty());
    }

    #[test]
    fn test_malformed_json_falls_back_to_keywords() {
        let prefs = extract_preferences(r#"{"feedbackStyle": direct, "#);
        assert_eq!(prefs.feedback_style, Some(FeedbackStyle::Direct));
    }

    #[test]
    fn test_unknown_enum_value_falls_back_to_keywords() {
        let prefs = extract_preferences(r#"{"meetingPreference":"super structured"}"#);
        assert_eq!(prefs.meeting_preference, Some(MeetingPreference::Structured));
    }

    #[test]
    fn test_keywords_match_whole_words() {
        // "indirect" must not read as "direct"
        let prefs = extract_preferences("I find indirect hints confusing");
        assert!(prefs.feedback_style.is_none());
    }

    #[test]
    fn test_phrase_keywords() {
        let prefs = extract_preferences("Please push me harder, keep it to the point");
        assert_eq!(prefs.challenge_level, Some(ChallengeLevel::High));
        assert_eq!(prefs.communication_style, Some(CommunicationStyle::Direct));
    }

    #[test]
    fn test_unrecognized_text_kept_verbatim() {
        let prefs = extract_preferences("Tea over coffee, always");
        assert!(prefs.has_no_fields());
        assert_eq!(prefs.notes, vec!["Tea over coffee, always".to_string()]);
    }

    #[test]
    fn test_fold_newer_statement_wins() {
        let now = Utc::now();
        let older = MemoryEntry::new(
            "u1",
            "s1",
            MemoryType::Preference,
            "gentle feedback please",
            now - Duration::days(3),
            MemoryMetadata::default(),
        );
        let newer = MemoryEntry::new(
            "u1",
            "s2",
            MemoryType::Preference,
            "actually, be blunt with me",
            now,
            MemoryMetadata::default(),
        );

        let prefs = fold_preferences([&newer, &older]);
        assert_eq!(prefs.feedback_style, Some(FeedbackStyle::Direct));
    }
}
