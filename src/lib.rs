//! A thread-safe lexical emotion detector for short text.
//!
//! Classification is deterministic: token-level keyword matching with
//! negation and intensifier context, emoji signal, per-emotion score
//! accumulation and a thresholded decision rule. No model, no I/O, no state
//! between calls.
//!
//! # Basic Usage
//!
//! ```rust
//! use limbic::{Detector, Emotion};
//!
//! let detector = Detector::new();
//!
//! let result = detector.classify("I'm really happy with this! 🎉");
//! assert_eq!(result.emotion, Emotion::Happy);
//! println!("Detected emotion: {}", result.emotion);
//! for (emotion, score) in &result.scores {
//!     println!("{}: {:.2}", emotion, score);
//! }
//! ```
//!
//! # Extending the lexicon
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use limbic::{Detector, Emotion};
//!
//! let detector = Detector::builder()
//!     .with_builtin_lexicon()
//!     .add_keywords(Emotion::Happy, vec!["stoked", "chuffed"])?
//!     .build()?;
//!
//! assert_eq!(detector.classify("absolutely stoked").emotion, Emotion::Happy);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The detector is thread-safe and can be shared across threads using `Arc`:
//!
//! ```rust
//! use limbic::Detector;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let detector = Arc::new(Detector::new());
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let detector = Arc::clone(&detector);
//!     handles.push(thread::spawn(move || {
//!         detector.classify("test text");
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! ```

pub mod batch;
pub mod detector;
pub mod emotion;
pub mod lexicon;
#[cfg(feature = "server")]
pub mod server;

pub use batch::{BatchEntry, BatchStatistics, LabelStats};
pub use detector::{
    ClassificationResult, Detector, DetectorBuilder, DetectorError, DetectorInfo,
    EMOJI_WEIGHT, INTENSIFIER_BOOST, NEGATION_FACTOR, NEUTRAL_THRESHOLD,
};
pub use emotion::{Emotion, ScoreVector};
pub use lexicon::Lexicon;

pub fn init_logger() {
    env_logger::init();
}
