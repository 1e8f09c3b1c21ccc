use std::sync::Arc;

use crate::emotion::{Emotion, ScoreVector};
use crate::lexicon::Lexicon;

use super::utils::{strip_urls, trim_punctuation};
use super::{ClassificationResult, DetectorInfo};

/// Weight applied to each emoji occurrence.
pub const EMOJI_WEIGHT: f32 = 2.0;
/// Multiplier applied when the preceding token is an intensifier.
pub const INTENSIFIER_BOOST: f32 = 1.5;
/// Multiplier applied when the preceding token is a negation.
pub const NEGATION_FACTOR: f32 = -0.5;
/// Winning scores below this are reported as neutral.
pub const NEUTRAL_THRESHOLD: f32 = 0.5;

/// A thread-safe lexical emotion detector.
///
/// # Thread Safety
///
/// This type is automatically `Send + Sync` because its only field is an
/// `Arc<Lexicon>` and the lexicon is never mutated after construction.
/// Classification is purely functional, so concurrent calls need no
/// coordination.
///
/// Single-thread usage:
/// ```rust
/// use limbic::{Detector, Emotion};
///
/// let detector = Detector::new();
/// let result = detector.classify("really happy about this");
/// assert_eq!(result.emotion, Emotion::Happy);
/// ```
///
/// Multi-thread usage:
/// ```rust
/// use limbic::Detector;
/// use std::sync::Arc;
/// use std::thread;
///
/// let detector = Arc::new(Detector::new());
///
/// let detector_clone = Arc::clone(&detector);
/// thread::spawn(move || {
///     detector_clone.classify("test text");
/// });
/// ```
#[derive(Debug, Clone)]
pub struct Detector {
    lexicon: Arc<Lexicon>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Detector>();
    }
};

impl Detector {
    /// Creates a detector backed by the shared built-in lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::shared(),
        }
    }

    /// Creates a new DetectorBuilder for fluent construction
    pub fn builder() -> super::builder::DetectorBuilder {
        super::builder::DetectorBuilder::new()
    }

    pub(crate) fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Returns information about the detector's current state
    pub fn info(&self) -> DetectorInfo {
        DetectorInfo {
            labels: Emotion::ALL.to_vec(),
            keyword_counts: Emotion::SCORED
                .iter()
                .map(|&e| (e, self.lexicon.keyword_count(e)))
                .collect(),
            emoji_counts: Emotion::SCORED
                .iter()
                .map(|&e| (e, self.lexicon.emoji_count(e)))
                .collect(),
            intensifier_count: self.lexicon.intensifier_count(),
            negation_count: self.lexicon.negation_count(),
            threshold: NEUTRAL_THRESHOLD,
        }
    }

    /// Assigns an emotion label to `text` and returns it with the full score
    /// vector.
    ///
    /// Every input produces a result; there is no failure mode. Empty and
    /// whitespace-only inputs short-circuit to `Neutral` with an empty score
    /// vector. Otherwise the vector holds one accumulator per scored emotion,
    /// and the label is the strictly largest accumulator (ties resolve to the
    /// first emotion in canonical order), or `Neutral` when every accumulator
    /// is zero or the winner stays below [`NEUTRAL_THRESHOLD`].
    ///
    /// # Example
    /// ```rust
    /// use limbic::{Detector, Emotion};
    ///
    /// let detector = Detector::new();
    ///
    /// let result = detector.classify("really happy");
    /// assert_eq!(result.emotion, Emotion::Happy);
    /// assert_eq!(result.scores[&Emotion::Happy], 1.5);
    ///
    /// let result = detector.classify("   ");
    /// assert_eq!(result.emotion, Emotion::Neutral);
    /// assert!(result.scores.is_empty());
    /// ```
    pub fn classify(&self, text: &str) -> ClassificationResult {
        if text.trim().is_empty() {
            return ClassificationResult {
                emotion: Emotion::Neutral,
                scores: ScoreVector::new(),
            };
        }

        let scores = self.score(text);

        if scores.values().all(|&s| s == 0.0) {
            return ClassificationResult {
                emotion: Emotion::Neutral,
                scores,
            };
        }

        let mut winner = Emotion::SCORED[0];
        let mut best = f32::NEG_INFINITY;
        for emotion in Emotion::SCORED {
            let score = scores[&emotion];
            if score > best {
                winner = emotion;
                best = score;
            }
        }

        let emotion = if best < NEUTRAL_THRESHOLD {
            Emotion::Neutral
        } else {
            winner
        };
        ClassificationResult { emotion, scores }
    }

    /// Runs the emoji and token passes and returns the raw accumulators.
    fn score(&self, text: &str) -> ScoreVector {
        let mut scores: ScoreVector =
            Emotion::SCORED.iter().map(|&e| (e, 0.0f32)).collect();

        // Emoji pass runs on the original text; glyphs are matched as exact
        // substrings and are never negated or intensified.
        for emotion in Emotion::SCORED {
            let occurrences = self.lexicon.emoji_occurrences(emotion, text);
            if occurrences > 0 {
                *scores.get_mut(&emotion).unwrap() +=
                    occurrences as f32 * EMOJI_WEIGHT;
            }
        }

        // Token pass runs on the lowercased, URL-stripped text.
        let normalized = strip_urls(&text.to_lowercase());
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        for (i, raw) in tokens.iter().enumerate() {
            let word = trim_punctuation(raw);

            // Context checks look one token back at the RAW previous token,
            // so "not," does not negate and the two conditions can only both
            // hold if the lexicon let a word into both sets.
            let previous = if i > 0 { Some(tokens[i - 1]) } else { None };
            let is_negated = previous.is_some_and(|p| self.lexicon.is_negation(p));
            let intensity = if previous.is_some_and(|p| self.lexicon.is_intensifier(p)) {
                INTENSIFIER_BOOST
            } else {
                1.0
            };

            for emotion in Emotion::SCORED {
                if self.lexicon.has_keyword(emotion, word) {
                    let mut delta = intensity;
                    if is_negated {
                        delta *= NEGATION_FACTOR;
                    }
                    *scores.get_mut(&emotion).unwrap() += delta;
                }
            }
        }

        scores
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_url_tokens_never_score() {
        let detector = Detector::new();
        let result = detector.classify("http://happy.example/sad");
        assert_eq!(result.emotion, Emotion::Neutral);
        assert!(result.scores.values().all(|&s| s == 0.0));
    }

    #[test]
    fn test_url_stripping_keeps_surrounding_words() {
        let detector = Detector::new();
        let result = detector.classify("gloomy www.example.com weather");
        assert_eq!(result.emotion, Emotion::Sad);
        assert_eq!(result.scores[&Emotion::Sad], 1.0);
    }

    #[test]
    fn test_raw_token_context_check() {
        let detector = Detector::new();
        // "not," is not the token "not", so no negation applies
        let result = detector.classify("not, happy");
        assert_eq!(result.scores[&Emotion::Happy], 1.0);
        assert_eq!(result.emotion, Emotion::Happy);
    }

    #[test]
    fn test_contraction_marker_negates() {
        let detector = Detector::new();
        let result = detector.classify("n't happy");
        assert_eq!(result.scores[&Emotion::Happy], -0.5);
        assert_eq!(result.emotion, Emotion::Neutral);
    }

    #[test]
    fn test_intensity_only_looks_one_token_back() {
        let detector = Detector::new();
        // "very" precedes "much", not "happy", so no boost applies
        let result = detector.classify("very much happy");
        assert_eq!(result.scores[&Emotion::Happy], 1.0);
    }

    #[test]
    fn test_emoji_pass_runs_on_original_text() {
        let detector = Detector::new();
        // emoji are scanned before URL stripping, even inside a URL-like run
        let result = detector.classify("http://x.example/😊");
        assert_eq!(result.scores[&Emotion::Happy], EMOJI_WEIGHT);
        assert_eq!(result.emotion, Emotion::Happy);
    }

    #[test]
    fn test_thread_safety() {
        let detector = std::sync::Arc::new(Detector::new());
        let mut handles = vec![];

        for _ in 0..3 {
            let detector = std::sync::Arc::clone(&detector);
            let handle = thread::spawn(move || {
                let result = detector.classify("test text");
                assert_eq!(result.emotion, Emotion::Neutral);
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
