//! Core quiz engine — round state machine, sampling, matching, and scoring.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `config`    | Scoring constants, choice count, asset URLs, storage keys |
//! | `catalog`   | Compiled-in hero registry with attribute/role lookup |
//! | `models`    | Difficulty, derived modes, round state, result descriptors |
//! | `error`     | `QuizError` / `QuizResult` |
//! | `sampler`   | No-repeat uniform draw with automatic cycle reset |
//! | `choices`   | Multiple-choice set building with Fisher-Yates shuffle |
//! | `evaluator` | Exact and normalized/partial answer matching |
//! | `storage`   | `StatsStore` trait + memory/file/unavailable backends |
//! | `scoring`   | Score/streak/lifetime counter updates |
//! | `media`     | Portrait fetch requests, outcomes, stale-result guard |
//! | `engine`    | `RoundEngine` state machine tying it all together |

pub mod catalog;
pub mod choices;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod media;
pub mod models;
pub mod sampler;
pub mod scoring;
pub mod storage;

// Re-export the public API surface so callers can use
// `quiz_engine::RoundEngine` without reaching into sub-modules.
pub use engine::RoundEngine;
pub use error::{QuizError, QuizResult};
pub use media::{FetchOutcome, ImageRequest};
pub use models::{
    AnswerFeedback, Difficulty, Guess, InputMode, ObfuscationMode, RevealFeedback, RoundPhase,
    RoundState, RoundView,
};
pub use storage::{JsonFileStore, LifetimeStats, MemoryStore, StatsStore, UnavailableStore};
