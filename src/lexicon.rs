//! Static emotion vocabulary: keyword, emoji, intensifier and negation sets.
//!
//! The built-in tables are literal configuration, constructed once per
//! process and shared read-only. Nothing mutates a [`Lexicon`] after
//! construction, so it is safe to share across threads without locking.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use lazy_static::lazy_static;
use log::debug;

use crate::emotion::Emotion;

const HAPPY_KEYWORDS: &[&str] = &[
    "happy", "joy", "excited", "great", "awesome", "wonderful", "fantastic",
    "love", "excellent", "amazing", "perfect", "good", "best", "beautiful",
    "glad", "delighted", "pleased", "cheerful", "blessed", "grateful",
    "brilliant", "fabulous", "yay", "woohoo", "celebrate",
];

const SAD_KEYWORDS: &[&str] = &[
    "sad", "unhappy", "depressed", "miserable", "disappointed", "hurt",
    "lonely", "down", "cry", "tears", "upset", "heartbroken", "awful",
    "terrible", "bad", "worst", "horrible", "unfortunate", "regret",
    "sorry", "miss", "grief", "sorrow", "despair", "gloomy",
];

const ANGRY_KEYWORDS: &[&str] = &[
    "angry", "mad", "furious", "rage", "hate", "annoyed", "irritated",
    "frustrated", "outraged", "pissed", "disgusted", "stupid", "idiot",
    "damn", "hell", "fuck", "shit", "annoying", "pathetic", "ridiculous",
    "unacceptable", "sick", "fed up", "infuriated", "livid",
];

const SURPRISE_KEYWORDS: &[&str] = &[
    "wow", "omg", "shocked", "surprised", "unexpected", "amazing",
    "unbelievable", "incredible", "astonished", "stunned", "whoa",
    "sudden", "shock", "startled", "speechless",
    "mind-blowing", "wtf", "remarkable", "extraordinary",
];

const FEAR_KEYWORDS: &[&str] = &[
    "scared", "afraid", "fear", "worried", "anxious", "nervous",
    "terrified", "panic", "frightened", "concern", "threat", "danger",
    "risk", "scary", "horror", "dread", "alarmed", "paranoid",
    "uneasy", "tense", "stress", "nightmare", "phobia",
];

/// Words that scale the following keyword's contribution by 1.5.
const INTENSIFIERS: &[&str] = &[
    "very", "really", "extremely", "so", "incredibly", "absolutely",
    "totally", "completely", "utterly", "super", "quite",
];

/// Words that invert and dampen the following keyword's contribution.
/// `n't` covers contractions when the host tokenization splits them off;
/// it is matched as a whole token, never as a substring.
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "nothing",
    "nowhere", "none", "n't", "hardly", "barely",
];

const HAPPY_EMOJIS: &[&str] = &[
    "😊", "😀", "😃", "😄", "😁", "🙂", "😍", "🥰", "😘", "❤️", "💕", "🎉", "👍", "✨",
];
const SAD_EMOJIS: &[&str] = &["😢", "😭", "😞", "😔", "😟", "🙁", "☹️", "💔", "😥", "😪"];
const ANGRY_EMOJIS: &[&str] = &["😠", "😡", "🤬", "😤", "💢", "👿", "😾"];
const SURPRISE_EMOJIS: &[&str] = &["😲", "😮", "😯", "😳", "🤯", "‼️", "⁉️"];
const FEAR_EMOJIS: &[&str] = &["😨", "😰", "😱", "🙀", "😧", "😦"];

lazy_static! {
    static ref BUILTIN: Arc<Lexicon> = Arc::new(Lexicon::builtin());
}

/// Immutable emotion vocabulary used for matching.
///
/// Keyword membership is case-insensitive (all stored entries are lowercase
/// and callers look up lowercased tokens); emoji glyphs are matched as exact
/// substrings of the original text.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub(crate) keywords: HashMap<Emotion, HashSet<String>>,
    pub(crate) emojis: HashMap<Emotion, Vec<String>>,
    pub(crate) intensifiers: HashSet<String>,
    pub(crate) negations: HashSet<String>,
}

impl Lexicon {
    /// Builds the built-in English lexicon from the static tables.
    pub fn builtin() -> Self {
        let keyword_tables: [(Emotion, &[&str]); 5] = [
            (Emotion::Happy, HAPPY_KEYWORDS),
            (Emotion::Sad, SAD_KEYWORDS),
            (Emotion::Angry, ANGRY_KEYWORDS),
            (Emotion::Surprise, SURPRISE_KEYWORDS),
            (Emotion::Fear, FEAR_KEYWORDS),
        ];
        let emoji_tables: [(Emotion, &[&str]); 5] = [
            (Emotion::Happy, HAPPY_EMOJIS),
            (Emotion::Sad, SAD_EMOJIS),
            (Emotion::Angry, ANGRY_EMOJIS),
            (Emotion::Surprise, SURPRISE_EMOJIS),
            (Emotion::Fear, FEAR_EMOJIS),
        ];

        let keywords = keyword_tables
            .into_iter()
            .map(|(emotion, words)| {
                (emotion, words.iter().map(|w| w.to_string()).collect())
            })
            .collect();
        let emojis = emoji_tables
            .into_iter()
            .map(|(emotion, glyphs)| {
                (emotion, glyphs.iter().map(|g| g.to_string()).collect())
            })
            .collect();

        let lexicon = Self {
            keywords,
            emojis,
            intensifiers: INTENSIFIERS.iter().map(|w| w.to_string()).collect(),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        };
        debug!(
            "built-in lexicon loaded: {} keywords, {} emojis",
            lexicon.total_keywords(),
            lexicon.total_emojis()
        );
        lexicon
    }

    /// Returns the process-wide shared instance of the built-in lexicon.
    pub fn shared() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    pub(crate) fn from_parts(
        keywords: HashMap<Emotion, HashSet<String>>,
        emojis: HashMap<Emotion, Vec<String>>,
        intensifiers: HashSet<String>,
        negations: HashSet<String>,
    ) -> Self {
        Self {
            keywords,
            emojis,
            intensifiers,
            negations,
        }
    }

    /// Tests whether `word` belongs to `emotion`'s keyword set.
    pub fn has_keyword(&self, emotion: Emotion, word: &str) -> bool {
        self.keywords
            .get(&emotion)
            .is_some_and(|set| set.contains(word))
    }

    /// Counts occurrences of `emotion`'s emoji glyphs in `text`.
    ///
    /// Every occurrence counts; a glyph appearing three times contributes 3.
    pub fn emoji_occurrences(&self, emotion: Emotion, text: &str) -> usize {
        self.emojis
            .get(&emotion)
            .map(|glyphs| {
                glyphs
                    .iter()
                    .map(|glyph| text.matches(glyph.as_str()).count())
                    .sum()
            })
            .unwrap_or(0)
    }

    pub fn is_intensifier(&self, token: &str) -> bool {
        self.intensifiers.contains(token)
    }

    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token)
    }

    pub fn keyword_count(&self, emotion: Emotion) -> usize {
        self.keywords.get(&emotion).map_or(0, HashSet::len)
    }

    pub fn emoji_count(&self, emotion: Emotion) -> usize {
        self.emojis.get(&emotion).map_or(0, Vec::len)
    }

    pub fn intensifier_count(&self) -> usize {
        self.intensifiers.len()
    }

    pub fn negation_count(&self) -> usize {
        self.negations.len()
    }

    fn total_keywords(&self) -> usize {
        self.keywords.values().map(HashSet::len).sum()
    }

    fn total_emojis(&self) -> usize {
        self.emojis.values().map(Vec::len).sum()
    }
}
