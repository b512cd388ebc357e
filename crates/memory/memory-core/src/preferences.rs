//! # User Preferences
//!
//! Structured preferences inferred from a user's `preference` memories. The
//! memory store builds a [`UserPreferences`]; the personality engine consumes it
//! when adapting a profile.
//!
//! All fields are optional: an absent field means "no signal", and adaptation
//! leaves the matching personality dimension unchanged.

use serde::{Deserialize, Serialize};

/// How the user wants to receive feedback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStyle {
    Direct,
    Gentle,
    Balanced,
}

/// How hard the user wants to be pushed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeLevel {
    Low,
    Medium,
    High,
}

/// Preferred shape of meetings and check-ins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MeetingPreference {
    Structured,
    Casual,
    Flexible,
}

/// Communication style tag, shared by preferences and personality profiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStyle {
    Direct,
    Analytical,
    Supportive,
    Creative,
}

impl CommunicationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationStyle::Direct => "direct",
            CommunicationStyle::Analytical => "analytical",
            CommunicationStyle::Supportive => "supportive",
            CommunicationStyle::Creative => "creative",
        }
    }
}

/// Preferences inferred for one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_style: Option<FeedbackStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_level: Option<ChallengeLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_preference: Option<MeetingPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_style: Option<CommunicationStyle>,
    /// Preference statements that matched no known field, kept verbatim
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl UserPreferences {
    /// Overwrites fields set in `newer`, keeping the rest; notes accumulate.
    pub fn merge(&mut self, newer: UserPreferences) {
        if newer.feedback_style.is_some() {
            self.feedback_style = newer.feedback_style;
        }
        if newer.challenge_level.is_some() {
            self.challenge_level = newer.challenge_level;
        }
        if newer.meeting_preference.is_some() {
            self.meeting_preference = newer.meeting_preference;
        }
        if newer.communication_style.is_some() {
            self.communication_style = newer.communication_style;
        }
        self.notes.extend(newer.notes);
    }

    /// True when no structured field is set.
    pub fn has_no_fields(&self) -> bool {
        self.feedback_style.is_none()
            && self.challenge_level.is_none()
            && self.meeting_preference.is_none()
            && self.communication_style.is_none()
    }
}
