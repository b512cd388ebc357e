//! # Consistency Validation
//!
//! Checks that recent agent replies read like the profile's communication style.
//!
//! Each reply is classified by counting marker phrases per style; the style with
//! the most hits wins, and a reply with no hits or a tie is neutral. Neutral
//! replies count as consistent. The score is the share of consistent replies
//! (1.0 when there are none). Replies over [`DIRECT_MAX_WORDS`] words also
//! deviate from a direct profile.
//!
//! Recommendations are emitted when the score is below
//! [`CONSISTENCY_THRESHOLD`] or any deviation was found.

use serde::{Deserialize, Serialize};

use crate::profile::{CommunicationStyle, PersonalityProfile};

pub const CONSISTENCY_THRESHOLD: f64 = 0.7;
pub const DIRECT_MAX_WORDS: usize = 120;

const DIRECT_MARKERS: &[&str] = &[
    "should",
    "must",
    "need to",
    "next step",
    "bottom line",
    "do this",
];
const ANALYTICAL_MARKERS: &[&str] = &[
    "data",
    "because",
    "analysis",
    "evidence",
    "metric",
    "therefore",
    "%",
];
const SUPPORTIVE_MARKERS: &[&str] = &[
    "understand",
    "feel",
    "proud",
    "great job",
    "here for you",
    "it's okay",
    "support",
];
const CREATIVE_MARKERS: &[&str] = &["imagine", "what if", "idea", "brainstorm", "picture"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyReport {
    pub consistency_score: f64,
    pub deviations: Vec<String>,
    pub recommendations: Vec<String>,
}

fn recommendation_for(style: CommunicationStyle) -> &'static str {
    match style {
        CommunicationStyle::Direct => "Lead with the recommendation and cut hedging",
        CommunicationStyle::Analytical => "Ground suggestions in data or explicit reasoning",
        CommunicationStyle::Supportive => "Acknowledge the user's feelings before giving advice",
        CommunicationStyle::Creative => "Offer options and reframes instead of a single answer",
    }
}

/// Classifies one reply; `None` when no style dominates.
pub fn classify_response(response: &str) -> Option<CommunicationStyle> {
    let lowered = response.to_lowercase();
    let hits = |markers: &[&str]| markers.iter().filter(|m| lowered.contains(*m)).count();

    let counts = [
        (CommunicationStyle::Direct, hits(DIRECT_MARKERS)),
        (CommunicationStyle::Analytical, hits(ANALYTICAL_MARKERS)),
        (CommunicationStyle::Supportive, hits(SUPPORTIVE_MARKERS)),
        (CommunicationStyle::Creative, hits(CREATIVE_MARKERS)),
    ];
    let best = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    if best == 0 {
        return None;
    }
    let mut leaders = counts.iter().filter(|(_, c)| *c == best);
    match (leaders.next(), leaders.next()) {
        (Some((style, _)), None) => Some(*style),
        _ => None,
    }
}

/// Compares recent replies against the profile's communication style.
pub fn validate_consistency<S: AsRef<str>>(
    profile: &PersonalityProfile,
    recent_responses: &[S],
) -> ConsistencyReport {
    let expected = profile.communication_style;
    let mut deviations = Vec::new();
    let mut consistent = 0usize;

    for (i, response) in recent_responses.iter().enumerate() {
        let response = response.as_ref();
        let mut ok = true;

        if let Some(style) = classify_response(response) {
            if style != expected {
                ok = false;
                deviations.push(format!(
                    "response {} reads as {} while the profile expects {}",
                    i + 1,
                    style.as_str(),
                    expected.as_str()
                ));
            }
        }
        if expected == CommunicationStyle::Direct {
            let words = response.split_whitespace().count();
            if words > DIRECT_MAX_WORDS {
                ok = false;
                deviations.push(format!(
                    "response {} runs {} words, long for a direct style",
                    i + 1,
                    words
                ));
            }
        }
        if ok {
            consistent += 1;
        }
    }

    let consistency_score = if recent_responses.is_empty() {
        1.0
    } else {
        consistent as f64 / recent_responses.len() as f64
    };

    let mut recommendations = Vec::new();
    if consistency_score < CONSISTENCY_THRESHOLD || !deviations.is_empty() {
        recommendations.push(recommendation_for(expected).to_string());
    }
    if consistency_score < CONSISTENCY_THRESHOLD {
        recommendations.push(format!(
            "Consistency {:.2} is below {:.2}; re-anchor replies on the {} style",
            consistency_score,
            CONSISTENCY_THRESHOLD,
            expected.as_str()
        ));
    }

    ConsistencyReport {
        consistency_score,
        deviations,
        recommendations,
    }
}
