//! # hero_quiz_gen
//!
//! A single-player hero-guessing round engine over a fixed catalog of 126
//! heroes.  Each round draws an unseen hero, presents it under a
//! difficulty-controlled disguise and input mode, evaluates the player's
//! guess, and tracks score, streak, and lifetime statistics.
//!
//! ## How it works
//!
//! 1. Build a [`RoundEngine`] over any [`StatsStore`] backend (in-memory,
//!    JSON file, or a permanently unavailable one — the engine degrades
//!    gracefully either way).
//! 2. Call [`RoundEngine::start_round`] — the engine draws a hero no one has
//!    seen this cycle, derives the obfuscation and input mode from the
//!    difficulty, and in multiple-choice mode builds a shuffled option set
//!    containing the answer exactly once.
//! 3. Render the returned [`RoundView`] however you like, then `submit` a
//!    [`Guess`] or `reveal`, and `advance` to the next round.
//!
//! ## Key behaviors
//!
//! - **No repeats**: a hero never comes up twice before the whole catalog
//!   has been shown once; then the cycle resets.
//! - **Deterministic**: `RoundEngine::with_seed` reproduces an entire
//!   session, draw for draw — useful for tests and replays.
//! - **Lenient text matching**: hard mode accepts separator variants and
//!   partial names ("mage" matches Anti-Mage).
//! - **Idempotent round closure**: the first `submit` or `reveal` closes the
//!   round; anything after that is a no-op until `advance`.
//!
//! ## Quick start
//!
//! ```rust
//! use hero_quiz_gen::{Difficulty, Guess, MemoryStore, RoundEngine};
//!
//! let mut engine = RoundEngine::with_seed(MemoryStore::new(), 42).unwrap();
//!
//! let view = engine.start_round(false);
//! println!("Round {}: guess among {:?}", view.round, view.choices);
//!
//! // Pick the right answer (we are cheating, the view knows it):
//! let feedback = engine.submit(&Guess::Choice(view.hero_id.to_string())).unwrap();
//! assert!(feedback.correct);
//! println!("Score {} streak {}", feedback.score, feedback.streak);
//!
//! // Hard mode switches to free text; the drawn hero stays the same.
//! engine.advance().unwrap();
//! let view = engine.change_difficulty(Difficulty::Hard);
//! assert!(view.choices.is_empty());
//! ```

pub mod quiz_engine;
pub mod ui_adapter;

// Convenience re-exports so callers can use `hero_quiz_gen::RoundEngine`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    AnswerFeedback, Difficulty, FetchOutcome, Guess, ImageRequest, InputMode, JsonFileStore,
    LifetimeStats, MemoryStore, ObfuscationMode, QuizError, QuizResult, RevealFeedback,
    RoundEngine, RoundPhase, RoundState, RoundView, StatsStore, UnavailableStore,
};
