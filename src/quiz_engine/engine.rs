//! The round engine — a state machine driving one round at a time.
//!
//! Lifecycle: `Idle -> Presented -> Answered -> (advance) -> Presented`.
//! Every transition is a method on [`RoundEngine`] that mutates the owned
//! [`RoundState`] and returns a plain result descriptor; presentation is a
//! pure projection of those descriptors, with no game logic of its own.
//! Transitions invoked in the wrong phase return `None` and change nothing,
//! which makes closing a round idempotent: the first `submit` or `reveal`
//! wins and later ones are no-ops until `advance`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::quiz_engine::{
    catalog,
    choices::generate_choices,
    config::MAX_CHOICES,
    error::{QuizError, QuizResult},
    evaluator::{check_choice, check_text},
    media::{image_url, FetchOutcome, ImageRequest},
    models::{
        AnswerFeedback, Difficulty, Guess, InputMode, RevealFeedback, RoundPhase, RoundState,
        RoundView,
    },
    sampler,
    scoring,
    storage::StatsStore,
};

/// One quiz session: owned state, a persistence collaborator, and an RNG.
///
/// Multiple engines are fully independent; nothing is shared between
/// instances.
pub struct RoundEngine<S: StatsStore> {
    state: RoundState,
    store: S,
    rng: StdRng,
    catalog_ids: Vec<&'static str>,
}

impl<S: StatsStore> RoundEngine<S> {
    /// Build an engine over the compiled-in catalog with an entropy-seeded
    /// RNG.  Fails with [`QuizError::EmptyCatalog`] if there is nothing to
    /// present.
    pub fn new(store: S) -> QuizResult<Self> {
        Self::build(store, StdRng::from_entropy())
    }

    /// Deterministic engine for tests and reproducible sessions.
    pub fn with_seed(store: S, seed: u64) -> QuizResult<Self> {
        Self::build(store, StdRng::seed_from_u64(seed))
    }

    fn build(store: S, rng: StdRng) -> QuizResult<Self> {
        let catalog_ids: Vec<&'static str> = catalog::ids().collect();
        if catalog_ids.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }
        Ok(RoundEngine {
            state: RoundState::new(Difficulty::default()),
            store,
            rng,
            catalog_ids,
        })
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Present a round.  Draws a fresh hero unless `keep_current_hero` is
    /// set and one is already drawn (the difficulty-change path).
    ///
    /// Only a fresh draw opens a new round; re-presenting a kept hero never
    /// clears `answered`, so a round closed by `submit` or `reveal` stays
    /// closed until `advance`.
    pub fn start_round(&mut self, keep_current_hero: bool) -> RoundView {
        if !keep_current_hero || self.state.current_hero.is_none() {
            self.state.current_hero = Some(self.draw_next());
            self.state.answered = false;
            self.state.phase = RoundPhase::Presented;
        }
        self.round_view()
    }

    /// Evaluate a guess and close the round.  `None` unless a round is
    /// currently presented.
    pub fn submit(&mut self, guess: &Guess) -> Option<AnswerFeedback> {
        if self.state.phase != RoundPhase::Presented {
            return None;
        }
        let hero = self.state.current_hero?;
        let name = catalog::display_name(hero);

        let correct = match guess {
            Guess::Choice(selected) => check_choice(selected, hero),
            Guess::Text(raw) => check_text(raw, hero, &name),
        };

        let event = if correct {
            scoring::record_correct(&mut self.state, &mut self.store)
        } else {
            scoring::record_incorrect(&mut self.state, &mut self.store)
        };

        self.state.answered = true;
        self.state.phase = RoundPhase::Answered;

        Some(AnswerFeedback {
            correct,
            correct_id: hero,
            correct_name: name,
            score: event.score,
            streak: event.streak,
            new_high_score: event.new_high_score,
        })
    }

    /// Give up on the presented round: streak resets, nothing is counted or
    /// persisted.  `None` unless a round is currently presented.
    pub fn reveal(&mut self) -> Option<RevealFeedback> {
        if self.state.phase != RoundPhase::Presented {
            return None;
        }
        let hero = self.state.current_hero?;
        let event = scoring::record_reveal(&mut self.state);

        self.state.answered = true;
        self.state.phase = RoundPhase::Answered;

        Some(RevealFeedback {
            hero_id: hero,
            hero_name: catalog::display_name(hero),
            score: event.score,
            streak: event.streak,
        })
    }

    /// Move to the next round.  Valid only after the current round was
    /// closed by `submit` or `reveal`.
    pub fn advance(&mut self) -> Option<RoundView> {
        if self.state.phase != RoundPhase::Answered {
            return None;
        }
        self.state.round += 1;
        Some(self.start_round(false))
    }

    /// Switch difficulty and re-present the round.
    ///
    /// The already-drawn hero is deliberately kept, so changing difficulty
    /// mid-round never changes the target.  Dropping from hard to easy thus
    /// re-presents the same hero with multiple-choice options; whether that
    /// is a practice feature or a bypass is an open product question, and
    /// the behavior is kept exactly as shipped.  A round that was already
    /// closed stays closed: the switch re-renders it but `answered` and the
    /// phase are untouched, so it cannot be answered twice.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) -> RoundView {
        self.state.difficulty = difficulty;
        self.start_round(true)
    }

    /// String boundary for difficulty changes.  Unknown names are rejected
    /// with [`QuizError::InvalidDifficulty`] and no state changes.
    pub fn change_difficulty_str(&mut self, name: &str) -> QuizResult<RoundView> {
        let difficulty: Difficulty = name.parse()?;
        Ok(self.change_difficulty(difficulty))
    }

    /// Start a new game: everything resets except the chosen difficulty,
    /// and the store counts one more game played.
    pub fn new_game(&mut self) {
        let difficulty = self.state.difficulty;
        self.state = RoundState::new(difficulty);
        self.store.record_game_played();
    }

    // -----------------------------------------------------------------------
    // Media boundary
    // -----------------------------------------------------------------------

    /// Fetch request for the currently presented hero, if any.
    pub fn image_request(&self) -> Option<ImageRequest> {
        self.state.current_hero.map(ImageRequest::for_hero)
    }

    /// Accept a portrait fetch completion.  Results tagged with a hero other
    /// than the current one are stale (the round already advanced) and are
    /// discarded.  Returns the asset reference to display, or `None` when
    /// the outcome was dropped.
    pub fn image_outcome(&self, outcome: &FetchOutcome) -> Option<String> {
        match self.state.current_hero {
            Some(hero) if hero == outcome.hero_id() => Some(outcome.asset()),
            _ => {
                debug!(stale = outcome.hero_id(), "discarding stale image fetch result");
                None
            }
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Read-only view of the owned state.
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Session accuracy percentage.
    pub fn accuracy(&self) -> u32 {
        self.state.accuracy()
    }

    /// Hint line for the currently drawn hero.
    pub fn hint(&self) -> Option<String> {
        self.state.current_hero.map(catalog::full_hint)
    }

    /// The persistence collaborator, for lifetime stats displays.
    pub fn store(&self) -> &S {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn draw_next(&mut self) -> &'static str {
        // The catalog was verified non-empty at construction, so the only
        // sampler error is unreachable here.
        sampler::draw(&mut self.rng, &mut self.state.used_heroes, &self.catalog_ids)
            .unwrap_or(self.catalog_ids[0])
    }

    fn round_view(&mut self) -> RoundView {
        // current_hero is always set once a round has started; fall back to
        // the first catalog id to keep this total.
        let hero = self.state.current_hero.unwrap_or(self.catalog_ids[0]);
        let input_mode = self.state.difficulty.input_mode();
        let choices = match input_mode {
            InputMode::MultipleChoice => {
                generate_choices(&mut self.rng, hero, &self.catalog_ids, MAX_CHOICES)
            }
            InputMode::FreeText => Vec::new(),
        };

        RoundView {
            hero_id: hero,
            image_url: image_url(hero),
            obfuscation: self.state.difficulty.obfuscation(),
            input_mode,
            choices,
            round: self.state.round,
            score: self.state.score,
            streak: self.state.streak,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::ObfuscationMode;
    use crate::quiz_engine::storage::MemoryStore;

    fn engine(seed: u64) -> RoundEngine<MemoryStore> {
        RoundEngine::with_seed(MemoryStore::new(), seed).unwrap()
    }

    #[test]
    fn fresh_engine_starts_idle_at_easy() {
        let eng = engine(1);
        assert_eq!(eng.state().phase, RoundPhase::Idle);
        assert_eq!(eng.state().difficulty, Difficulty::Easy);
        assert_eq!(eng.state().round, 1);
        assert_eq!(eng.state().score, 0);
        assert!(eng.state().current_hero.is_none());
        assert!(eng.image_request().is_none());
    }

    #[test]
    fn start_round_presents_choices_on_easy() {
        let mut eng = engine(2);
        let view = eng.start_round(false);
        assert_eq!(view.input_mode, InputMode::MultipleChoice);
        assert_eq!(view.obfuscation, ObfuscationMode::Hidden);
        assert_eq!(view.choices.len(), MAX_CHOICES);
        assert!(view.choices.contains(&view.hero_id));
        assert!(view.image_url.ends_with(".png"));
        assert_eq!(eng.state().phase, RoundPhase::Presented);
    }

    #[test]
    fn hard_mode_uses_free_text_without_choices() {
        let mut eng = engine(3);
        eng.start_round(false);
        let view = eng.change_difficulty(Difficulty::Hard);
        assert_eq!(view.input_mode, InputMode::FreeText);
        assert_eq!(view.obfuscation, ObfuscationMode::Silhouette);
        assert!(view.choices.is_empty());
    }

    #[test]
    fn submit_closes_round_exactly_once() {
        let mut eng = engine(4);
        let view = eng.start_round(false);
        let correct_id = view.hero_id.to_string();

        let feedback = eng.submit(&Guess::Choice(correct_id.clone())).unwrap();
        assert!(feedback.correct);
        assert_eq!(eng.state().phase, RoundPhase::Answered);
        assert!(eng.state().answered);

        // Second submit of any kind is a no-op.
        assert!(eng.submit(&Guess::Choice(correct_id)).is_none());
        assert!(eng.reveal().is_none());
        assert_eq!(eng.state().total_attempts, 1);
    }

    #[test]
    fn wrong_choice_keeps_score_resets_streak() {
        let mut eng = engine(5);
        let view = eng.start_round(false);
        let wrong = catalog::ids().find(|&id| id != view.hero_id).unwrap();

        let feedback = eng.submit(&Guess::Choice(wrong.to_string())).unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.score, 0);
        assert_eq!(feedback.streak, 0);
        assert_eq!(feedback.correct_id, view.hero_id);
    }

    #[test]
    fn reveal_skips_counters() {
        let mut eng = engine(6);
        eng.start_round(false);
        let feedback = eng.reveal().unwrap();
        assert_eq!(feedback.streak, 0);
        assert_eq!(eng.state().total_attempts, 0);
        assert_eq!(eng.store().stats().total_rounds, 0);
        assert_eq!(eng.state().phase, RoundPhase::Answered);
    }

    #[test]
    fn advance_requires_closed_round() {
        let mut eng = engine(7);
        assert!(eng.advance().is_none());
        eng.start_round(false);
        assert!(eng.advance().is_none());
        eng.reveal();

        let view = eng.advance().unwrap();
        assert_eq!(view.round, 2);
        assert_eq!(eng.state().phase, RoundPhase::Presented);
        assert!(!eng.state().answered);
    }

    #[test]
    fn change_difficulty_preserves_current_hero() {
        // Regression pin: switching difficulty mid-round must never change
        // the drawn hero, even though that lets a player downgrade to see
        // choices for a hero first met in hard mode.
        let mut eng = engine(8);
        let view = eng.start_round(false);
        let hero = view.hero_id;

        for d in [Difficulty::Hard, Difficulty::Medium, Difficulty::Easy] {
            let view = eng.change_difficulty(d);
            assert_eq!(view.hero_id, hero);
            assert_eq!(eng.state().current_hero, Some(hero));
        }
    }

    #[test]
    fn change_difficulty_keeps_closed_rounds_closed() {
        use crate::quiz_engine::config::POINTS_PER_CORRECT;

        let mut eng = engine(12);
        let view = eng.start_round(false);
        let hero = view.hero_id.to_string();
        let feedback = eng.submit(&Guess::Choice(hero.clone())).unwrap();
        assert_eq!(feedback.score, POINTS_PER_CORRECT);

        // Switching difficulty re-presents the same closed round; it must
        // not be answerable a second time.
        let view = eng.change_difficulty(Difficulty::Medium);
        assert_eq!(view.hero_id.to_string(), hero);
        assert_eq!(eng.state().phase, RoundPhase::Answered);
        assert!(eng.state().answered);
        assert!(eng.submit(&Guess::Choice(hero)).is_none());
        assert!(eng.reveal().is_none());

        assert_eq!(eng.state().score, POINTS_PER_CORRECT);
        assert_eq!(eng.state().streak, 1);
        assert_eq!(eng.state().total_attempts, 1);
        assert_eq!(eng.store().stats().total_rounds, 1);

        // advance is still the only way forward.
        let view = eng.advance().unwrap();
        assert_eq!(view.round, 2);
        assert!(!eng.state().answered);
    }

    #[test]
    fn invalid_difficulty_rejected_without_state_change() {
        let mut eng = engine(9);
        eng.start_round(false);
        let before = eng.state().clone();

        let err = eng.change_difficulty_str("brutal").unwrap_err();
        assert_eq!(err, QuizError::InvalidDifficulty("brutal".to_string()));
        assert_eq!(eng.state().difficulty, before.difficulty);
        assert_eq!(eng.state().current_hero, before.current_hero);
        assert_eq!(eng.state().phase, before.phase);
    }

    #[test]
    fn new_game_keeps_difficulty_and_counts_a_game() {
        let mut eng = engine(10);
        eng.start_round(false);
        eng.change_difficulty(Difficulty::Hard);
        eng.reveal();

        eng.new_game();
        assert_eq!(eng.state().difficulty, Difficulty::Hard);
        assert_eq!(eng.state().round, 1);
        assert_eq!(eng.state().score, 0);
        assert!(eng.state().used_heroes.is_empty());
        assert_eq!(eng.state().phase, RoundPhase::Idle);
        assert_eq!(eng.store().stats().games_played, 1);
    }

    #[test]
    fn stale_image_outcomes_are_discarded() {
        let mut eng = engine(11);
        let view = eng.start_round(false);
        let first_hero = view.hero_id.to_string();

        eng.reveal();
        eng.advance().unwrap();

        // Outcome from the previous round arrives late.
        let stale = FetchOutcome::Loaded { hero_id: first_hero };
        assert!(eng.image_outcome(&stale).is_none());

        // A fresh failure maps to the fallback asset.
        let current = eng.state().current_hero.unwrap().to_string();
        let failed = FetchOutcome::Failed { hero_id: current };
        assert_eq!(
            eng.image_outcome(&failed).unwrap(),
            crate::quiz_engine::config::FALLBACK_IMAGE
        );
    }

    #[test]
    fn seeded_sessions_are_deterministic() {
        let run = |seed: u64| -> Vec<&'static str> {
            let mut eng = engine(seed);
            let mut heroes = vec![eng.start_round(false).hero_id];
            for _ in 0..10 {
                eng.reveal();
                heroes.push(eng.advance().unwrap().hero_id);
            }
            heroes
        };
        assert_eq!(run(99), run(99));
        assert_ne!(run(99), run(100));
    }
}
