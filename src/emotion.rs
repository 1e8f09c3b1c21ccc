use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of labels a detector can assign.
///
/// `Neutral` is a fallback only: it never carries keywords or emojis and is
/// reported when no emotion scores, or when the winning score stays below the
/// decision threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Surprise,
    Fear,
    Neutral,
}

impl Emotion {
    /// The emotions that accumulate scores, in canonical order.
    ///
    /// Ties in the decision rule resolve to the first emotion in this order,
    /// so iteration over it must stay deterministic.
    pub const SCORED: [Emotion; 5] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprise,
        Emotion::Fear,
    ];

    /// Every label, scored emotions first, `Neutral` last.
    pub const ALL: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprise,
        Emotion::Fear,
        Emotion::Neutral,
    ];

    /// Returns the lowercase label used on the wire and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Surprise => "surprise",
            Emotion::Fear => "fear",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-emotion score accumulators for a single classification call.
///
/// Empty on the empty-input short-circuit; otherwise holds one entry per
/// scored emotion (never `Neutral`).
pub type ScoreVector = HashMap<Emotion, f32>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        assert_eq!(Emotion::SCORED[0], Emotion::Happy);
        assert_eq!(Emotion::SCORED[4], Emotion::Fear);
        assert!(!Emotion::SCORED.contains(&Emotion::Neutral));
    }

    #[test]
    fn test_labels_are_lowercase() {
        for emotion in Emotion::ALL {
            assert_eq!(emotion.as_str(), emotion.as_str().to_lowercase());
        }
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Emotion::Surprise).unwrap();
        assert_eq!(json, "\"surprise\"");
    }
}
