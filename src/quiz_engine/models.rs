//! Shared types: difficulty and its derived presentation modes, the round
//! state owned by the engine, guesses, and the result descriptors handed
//! back to the presentation layer.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizError;

// ---------------------------------------------------------------------------
// Difficulty and derived modes
// ---------------------------------------------------------------------------

/// Player-selected difficulty level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// How the hero portrait is disguised at this difficulty.
    ///
    /// Derived, never stored: easy fully hides the portrait, everything
    /// above shows a silhouette.
    pub fn obfuscation(self) -> ObfuscationMode {
        match self {
            Difficulty::Easy => ObfuscationMode::Hidden,
            Difficulty::Medium | Difficulty::Hard => ObfuscationMode::Silhouette,
        }
    }

    /// How the player answers at this difficulty.  Only hard mode asks for
    /// free text; the rest use multiple choice.
    pub fn input_mode(self) -> InputMode {
        match self {
            Difficulty::Hard => InputMode::FreeText,
            _ => InputMode::MultipleChoice,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard   => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    /// Parse boundary for difficulty names coming from the outside world.
    /// Unknown names are rejected without touching any state.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy"   => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard"   => Ok(Difficulty::Hard),
            other    => Err(QuizError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// Visual disguise applied to the hero portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObfuscationMode {
    Hidden,
    Silhouette,
}

/// How the player submits an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputMode {
    MultipleChoice,
    FreeText,
}

// ---------------------------------------------------------------------------
// Round state
// ---------------------------------------------------------------------------

/// Where the engine is inside the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round presented yet (fresh engine or after a full reset).
    Idle,
    /// A hero is on screen waiting for a guess or a reveal.
    Presented,
    /// The round is closed; only `advance` moves on.
    Answered,
}

/// Mutable session state.  Owned exclusively by the engine; every mutation
/// goes through an engine transition, nothing else touches it.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub current_hero: Option<&'static str>,
    pub round: u32,
    pub score: u32,
    pub streak: u32,
    pub answered: bool,
    pub used_heroes: HashSet<&'static str>,
    pub difficulty: Difficulty,
    pub total_correct: u32,
    pub total_attempts: u32,
    pub phase: RoundPhase,
}

impl RoundState {
    /// Fresh session state at the given difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        RoundState {
            current_hero: None,
            round: 1,
            score: 0,
            streak: 0,
            answered: false,
            used_heroes: HashSet::new(),
            difficulty,
            total_correct: 0,
            total_attempts: 0,
            phase: RoundPhase::Idle,
        }
    }

    /// Session accuracy as a rounded percentage; 0 when nothing was attempted.
    pub fn accuracy(&self) -> u32 {
        if self.total_attempts == 0 {
            return 0;
        }
        (100.0 * self.total_correct as f64 / self.total_attempts as f64).round() as u32
    }
}

// ---------------------------------------------------------------------------
// Guesses and result descriptors
// ---------------------------------------------------------------------------

/// A submitted answer, matching the round's input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    /// A picked option in multiple-choice mode (hero id).
    Choice(String),
    /// Raw typed text in free-text mode.
    Text(String),
}

/// Everything the presentation layer needs to draw one round.  Pure data;
/// rendering is the caller's job.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub hero_id: &'static str,
    pub image_url: String,
    pub obfuscation: ObfuscationMode,
    pub input_mode: InputMode,
    /// Shuffled answer options; empty in free-text mode.
    pub choices: Vec<&'static str>,
    pub round: u32,
    pub score: u32,
    pub streak: u32,
}

/// Outcome of a submitted guess.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_id: &'static str,
    pub correct_name: String,
    pub score: u32,
    pub streak: u32,
    /// True when the session score now stands as the stored high score
    /// (ties with a previous session's high included).
    pub new_high_score: bool,
}

/// Outcome of giving up on a round.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealFeedback {
    pub hero_id: &'static str,
    pub hero_name: String,
    pub score: u32,
    pub streak: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_known_names_only() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "brutal".parse::<Difficulty>(),
            Err(QuizError::InvalidDifficulty(s)) if s == "brutal"
        ));
    }

    #[test]
    fn modes_derive_from_difficulty() {
        assert_eq!(Difficulty::Easy.obfuscation(), ObfuscationMode::Hidden);
        assert_eq!(Difficulty::Medium.obfuscation(), ObfuscationMode::Silhouette);
        assert_eq!(Difficulty::Hard.obfuscation(), ObfuscationMode::Silhouette);

        assert_eq!(Difficulty::Easy.input_mode(), InputMode::MultipleChoice);
        assert_eq!(Difficulty::Medium.input_mode(), InputMode::MultipleChoice);
        assert_eq!(Difficulty::Hard.input_mode(), InputMode::FreeText);
    }

    #[test]
    fn accuracy_rounds_and_handles_zero() {
        let mut state = RoundState::new(Difficulty::Easy);
        assert_eq!(state.accuracy(), 0);
        state.total_correct = 3;
        state.total_attempts = 4;
        assert_eq!(state.accuracy(), 75);
        state.total_correct = 2;
        state.total_attempts = 3;
        assert_eq!(state.accuracy(), 67);
    }
}
