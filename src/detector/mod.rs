use std::collections::HashMap;

use serde::Serialize;

use crate::emotion::{Emotion, ScoreVector};

mod builder;
mod detector;
mod error;
mod utils;

pub use builder::DetectorBuilder;
pub use detector::{
    Detector, EMOJI_WEIGHT, INTENSIFIER_BOOST, NEGATION_FACTOR, NEUTRAL_THRESHOLD,
};
pub use error::DetectorError;

/// The outcome of one classification call: the assigned label plus the full
/// per-emotion score vector, returned for transparency and debugging.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    pub emotion: Emotion,
    pub scores: ScoreVector,
}

/// Information about the current state and configuration of a detector
#[derive(Debug, Clone)]
pub struct DetectorInfo {
    /// Labels the detector can assign, scored emotions first
    pub labels: Vec<Emotion>,
    /// Number of keywords per scored emotion
    pub keyword_counts: HashMap<Emotion, usize>,
    /// Number of emoji glyphs per scored emotion
    pub emoji_counts: HashMap<Emotion, usize>,
    /// Number of intensifier words in the lexicon
    pub intensifier_count: usize,
    /// Number of negation words in the lexicon
    pub negation_count: usize,
    /// Winning scores below this threshold are reported as neutral
    pub threshold: f32,
}
