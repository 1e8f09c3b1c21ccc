//! Batch classification and distribution statistics.
//!
//! Each text is classified independently on its full content; only the echoed
//! display copy in a [`BatchEntry`] is ever truncated.

use std::collections::HashMap;

use serde::Serialize;

use crate::detector::Detector;
use crate::emotion::{Emotion, ScoreVector};

/// Maximum number of characters echoed back for one batch entry.
const PREVIEW_CHARS: usize = 100;

/// One classified text in a batch: a display copy of the input (truncated to
/// 100 characters with `...` appended when cut) plus its result.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub text: String,
    pub emotion: Emotion,
    pub scores: ScoreVector,
}

/// Count and share of one label across a batch.
#[derive(Debug, Clone, Serialize)]
pub struct LabelStats {
    pub count: usize,
    /// Share of the batch total, rounded to 2 decimals.
    pub percentage: f64,
}

/// Label distribution over a batch of texts.
#[derive(Debug, Clone, Serialize)]
pub struct BatchStatistics {
    pub total: usize,
    /// Stats for every label that occurred at least once.
    pub emotions: HashMap<Emotion, LabelStats>,
    /// The most frequent label; ties resolve to the label encountered first.
    pub dominant: Emotion,
}

impl Detector {
    /// Classifies each text independently and returns one entry per input.
    ///
    /// Truncation of the echoed text is display-only; classification always
    /// runs on the full original text.
    pub fn analyze_batch<T: AsRef<str>>(&self, texts: &[T]) -> Vec<BatchEntry> {
        texts
            .iter()
            .map(|text| {
                let text = text.as_ref();
                let result = self.classify(text);
                BatchEntry {
                    text: preview(text),
                    emotion: result.emotion,
                    scores: result.scores,
                }
            })
            .collect()
    }

    /// Classifies each text and aggregates the label distribution.
    ///
    /// An empty input yields a zero-total result with `Neutral` as the
    /// dominant label and no per-label entries.
    pub fn aggregate<T: AsRef<str>>(&self, texts: &[T]) -> BatchStatistics {
        let total = texts.len();
        if total == 0 {
            return BatchStatistics {
                total: 0,
                emotions: HashMap::new(),
                dominant: Emotion::Neutral,
            };
        }

        let mut counts: HashMap<Emotion, usize> = HashMap::new();
        // first-encounter order, for deterministic dominant-label ties
        let mut order: Vec<Emotion> = Vec::new();
        for text in texts {
            let label = self.classify(text.as_ref()).emotion;
            if !counts.contains_key(&label) {
                order.push(label);
            }
            *counts.entry(label).or_insert(0) += 1;
        }

        let mut dominant = order[0];
        let mut best = 0usize;
        for &label in &order {
            let count = counts[&label];
            if count > best {
                dominant = label;
                best = count;
            }
        }

        let emotions = counts
            .iter()
            .map(|(&label, &count)| {
                let percentage = round2(count as f64 / total as f64 * 100.0);
                (label, LabelStats { count, percentage })
            })
            .collect();

        BatchStatistics {
            total,
            emotions,
            dominant,
        }
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let mut cut: String = text.chars().take(PREVIEW_CHARS).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_char_boundary_safety() {
        let text = "😱".repeat(120);
        let cut = preview(&text);
        assert_eq!(cut.chars().count(), PREVIEW_CHARS + 3);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_preview_short_text_untouched() {
        assert_eq!(preview("short"), "short");
        let exactly_100 = "a".repeat(100);
        assert_eq!(preview(&exactly_100), exactly_100);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(100.0 / 3.0), 33.33);
        assert_eq!(round2(200.0 / 3.0), 66.67);
        assert_eq!(round2(50.0), 50.0);
    }
}
