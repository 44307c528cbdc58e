//! Score, streak, and lifetime-counter updates.
//!
//! These are the only places that mutate the scoring fields of
//! [`RoundState`], and the only bridge to the [`StatsStore`] collaborator.
//! Score never decreases; the streak increments by exactly one on a correct
//! answer and resets to zero on an incorrect answer or a reveal.

use crate::quiz_engine::config::POINTS_PER_CORRECT;
use crate::quiz_engine::models::RoundState;
use crate::quiz_engine::storage::{StatsDelta, StatsStore};

/// Scoring snapshot handed back after a recorded event.
#[derive(Debug, Clone, Copy)]
pub struct ScoreEvent {
    pub score: u32,
    pub streak: u32,
    pub new_high_score: bool,
}

/// Record a correct answer: award points, grow the streak, count the
/// attempt, and push the delta plus any new high score to the store.
pub fn record_correct<S: StatsStore>(state: &mut RoundState, store: &mut S) -> ScoreEvent {
    state.score += POINTS_PER_CORRECT;
    state.streak += 1;
    state.total_correct += 1;
    state.total_attempts += 1;

    store.update_stats(StatsDelta {
        correct_delta: 1,
        round_delta: 1,
        streak: Some(state.streak),
    });
    store.record_high_score(state.score);
    // Reported whenever the session score now stands as the stored high,
    // ties with a previous session's high included.
    let new_high_score = store.high_score() == state.score;

    ScoreEvent { score: state.score, streak: state.streak, new_high_score }
}

/// Record a wrong answer: streak gone, attempt counted, score untouched.
pub fn record_incorrect<S: StatsStore>(state: &mut RoundState, store: &mut S) -> ScoreEvent {
    state.streak = 0;
    state.total_attempts += 1;

    store.update_stats(StatsDelta { correct_delta: 0, round_delta: 1, streak: None });

    ScoreEvent { score: state.score, streak: 0, new_high_score: false }
}

/// Record a reveal: the streak resets but nothing is counted or persisted.
pub fn record_reveal(state: &mut RoundState) -> ScoreEvent {
    state.streak = 0;
    ScoreEvent { score: state.score, streak: 0, new_high_score: false }
}
