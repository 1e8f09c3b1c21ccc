use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::info;

use super::detector::Detector;
use super::error::DetectorError;
use crate::emotion::Emotion;
use crate::lexicon::Lexicon;

/// A builder for constructing a Detector with a fluent interface.
///
/// Starts empty; seed it with [`with_builtin_lexicon`](Self::with_builtin_lexicon)
/// to extend the stock vocabulary rather than replace it.
#[derive(Default, Debug)]
pub struct DetectorBuilder {
    keywords: HashMap<Emotion, HashSet<String>>,
    emojis: HashMap<Emotion, Vec<String>>,
    intensifiers: HashSet<String>,
    negations: HashSet<String>,
}

impl DetectorBuilder {
    /// Creates a new empty DetectorBuilder instance
    ///
    /// # Example
    /// ```
    /// use limbic::DetectorBuilder;
    ///
    /// let builder = DetectorBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the builder with the built-in lexicon tables
    ///
    /// # Example
    /// ```
    /// use limbic::{DetectorBuilder, Emotion};
    ///
    /// let detector = DetectorBuilder::new()
    ///     .with_builtin_lexicon()
    ///     .add_keywords(Emotion::Happy, vec!["stoked"])
    ///     .unwrap()
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(detector.classify("stoked").emotion, Emotion::Happy);
    /// ```
    pub fn with_builtin_lexicon(mut self) -> Self {
        let builtin = Lexicon::builtin();
        self.keywords = builtin.keywords;
        self.emojis = builtin.emojis;
        self.intensifiers = builtin.intensifiers;
        self.negations = builtin.negations;
        self
    }

    /// Validates lexicon words according to the following rules:
    /// - The emotion must not be `Neutral` (it carries no vocabulary)
    /// - The word list must not be empty
    /// - No word can be empty or whitespace-only
    fn validate_words(
        emotion: Emotion,
        words: &[impl AsRef<str>],
    ) -> Result<(), DetectorError> {
        if emotion == Emotion::Neutral {
            return Err(DetectorError::ValidationError(
                "The neutral label carries no vocabulary".into(),
            ));
        }
        if words.is_empty() {
            return Err(DetectorError::ValidationError(format!(
                "No words provided for emotion '{}'",
                emotion
            )));
        }
        if let Some(pos) = words.iter().position(|w| w.as_ref().trim().is_empty()) {
            return Err(DetectorError::ValidationError(format!(
                "Word {} for emotion '{}' cannot be empty",
                pos + 1,
                emotion
            )));
        }
        Ok(())
    }

    /// Adds keywords to an emotion's keyword set. Keywords are stored
    /// lowercase; matching is case-insensitive.
    ///
    /// # Returns
    /// * `Result<Self, DetectorError>` - The builder instance if successful,
    ///   or an error if the emotion is `Neutral` or any word is empty
    pub fn add_keywords(
        mut self,
        emotion: Emotion,
        words: Vec<impl Into<String>>,
    ) -> Result<Self, DetectorError> {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        Self::validate_words(emotion, &words)?;

        self.keywords
            .entry(emotion)
            .or_default()
            .extend(words.into_iter().map(|w| w.to_lowercase()));
        Ok(self)
    }

    /// Adds emoji glyphs to an emotion's emoji set. Glyphs are matched as
    /// exact substrings of the input text.
    pub fn add_emojis(
        mut self,
        emotion: Emotion,
        glyphs: Vec<impl Into<String>>,
    ) -> Result<Self, DetectorError> {
        let glyphs: Vec<String> = glyphs.into_iter().map(Into::into).collect();
        Self::validate_words(emotion, &glyphs)?;

        self.emojis.entry(emotion).or_default().extend(glyphs);
        Ok(self)
    }

    /// Adds intensifier words. Rejects words already registered as negations:
    /// context checks look at a single preceding token, so the two sets must
    /// stay disjoint for the conditions to stay mutually exclusive.
    pub fn add_intensifiers(
        mut self,
        words: Vec<impl Into<String>>,
    ) -> Result<Self, DetectorError> {
        for word in words {
            let word = word.into().to_lowercase();
            if word.trim().is_empty() {
                return Err(DetectorError::ValidationError(
                    "Intensifier cannot be empty".into(),
                ));
            }
            if self.negations.contains(&word) {
                return Err(DetectorError::ValidationError(format!(
                    "'{}' is already a negation word",
                    word
                )));
            }
            self.intensifiers.insert(word);
        }
        Ok(self)
    }

    /// Adds negation words. Rejects words already registered as intensifiers.
    pub fn add_negations(
        mut self,
        words: Vec<impl Into<String>>,
    ) -> Result<Self, DetectorError> {
        for word in words {
            let word = word.into().to_lowercase();
            if word.trim().is_empty() {
                return Err(DetectorError::ValidationError(
                    "Negation cannot be empty".into(),
                ));
            }
            if self.intensifiers.contains(&word) {
                return Err(DetectorError::ValidationError(format!(
                    "'{}' is already an intensifier word",
                    word
                )));
            }
            self.negations.insert(word);
        }
        Ok(self)
    }

    /// Builds and returns the final Detector instance
    ///
    /// # Returns
    /// * `Result<Detector, DetectorError>` - The constructed Detector if
    ///   successful, or an error if no keywords or emojis were added
    pub fn build(self) -> Result<Detector, DetectorError> {
        let has_vocabulary = self.keywords.values().any(|set| !set.is_empty())
            || self.emojis.values().any(|glyphs| !glyphs.is_empty());
        if !has_vocabulary {
            return Err(DetectorError::BuildError(
                "At least one keyword or emoji must be added".to_string(),
            ));
        }

        let lexicon = Lexicon::from_parts(
            self.keywords,
            self.emojis,
            self.intensifiers,
            self.negations,
        );
        info!(
            "detector built: {} emotions with vocabulary",
            lexicon.keywords.values().filter(|set| !set.is_empty()).count()
        );
        Ok(Detector::with_lexicon(Arc::new(lexicon)))
    }
}
