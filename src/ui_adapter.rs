//! JSON payload builders for a web client.
//!
//! Pure projections of engine descriptors into the shapes the browser UI
//! consumes — no game logic lives here.  Field names match what the client
//! already binds to.

use serde_json::{json, Value};

use crate::quiz_engine::{
    catalog,
    models::{AnswerFeedback, InputMode, ObfuscationMode, RevealFeedback, RoundState, RoundView},
    storage::StatsStore,
};

fn obfuscation_class(mode: ObfuscationMode) -> &'static str {
    match mode {
        ObfuscationMode::Hidden => "hero-frame__image--hidden",
        ObfuscationMode::Silhouette => "hero-frame__image--silhouette",
    }
}

/// Payload for presenting one round.
pub fn round_payload(view: &RoundView) -> Value {
    let choices: Vec<Value> = view
        .choices
        .iter()
        .map(|&id| json!({ "id": id, "label": catalog::display_name(id) }))
        .collect();

    json!({
        "heroId": view.hero_id,
        "imageUrl": view.image_url,
        "imageClass": obfuscation_class(view.obfuscation),
        "isTextInput": view.input_mode == InputMode::FreeText,
        "choices": choices,
        "round": view.round,
        "score": view.score,
        "streak": view.streak,
    })
}

/// Payload for answer feedback.
pub fn answer_payload(feedback: &AnswerFeedback) -> Value {
    let message = if feedback.correct {
        "Correct!".to_string()
    } else {
        format!("Wrong! It was {}", feedback.correct_name)
    };
    json!({
        "correct": feedback.correct,
        "message": message,
        "heroName": feedback.correct_name,
        "score": feedback.score,
        "streak": feedback.streak,
        "isNewHighScore": feedback.new_high_score,
    })
}

/// Payload for a revealed round.
pub fn reveal_payload(feedback: &RevealFeedback) -> Value {
    json!({
        "heroName": feedback.hero_name,
        "score": feedback.score,
        "streak": feedback.streak,
    })
}

/// Session summary combining live state and persisted lifetime stats.
pub fn session_payload<S: StatsStore>(state: &RoundState, store: &S) -> Value {
    let stats = store.stats();
    json!({
        "round": state.round,
        "score": state.score,
        "streak": state.streak,
        "difficulty": state.difficulty.to_string(),
        "accuracy": state.accuracy(),
        "highScore": store.high_score(),
        "lifetime": {
            "totalCorrect": stats.total_correct,
            "totalRounds": stats.total_rounds,
            "gamesPlayed": stats.games_played,
            "bestStreak": stats.best_streak,
            "accuracy": stats.accuracy(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::{Difficulty, Guess, MemoryStore, RoundEngine};

    #[test]
    fn round_payload_carries_labelled_choices() {
        let mut eng = RoundEngine::with_seed(MemoryStore::new(), 1).unwrap();
        let view = eng.start_round(false);
        let payload = round_payload(&view);

        assert_eq!(payload["heroId"], view.hero_id);
        assert_eq!(payload["isTextInput"], false);
        assert_eq!(payload["imageClass"], "hero-frame__image--hidden");
        assert_eq!(payload["choices"].as_array().unwrap().len(), view.choices.len());
        assert!(payload["choices"][0]["label"].is_string());
    }

    #[test]
    fn answer_payload_messages() {
        let mut eng = RoundEngine::with_seed(MemoryStore::new(), 2).unwrap();
        let view = eng.start_round(false);
        let feedback = eng.submit(&Guess::Choice(view.hero_id.to_string())).unwrap();
        let payload = answer_payload(&feedback);
        assert_eq!(payload["message"], "Correct!");
        assert_eq!(payload["isNewHighScore"], true);
    }

    #[test]
    fn session_payload_includes_lifetime_block() {
        let mut eng = RoundEngine::with_seed(MemoryStore::new(), 3).unwrap();
        eng.change_difficulty(Difficulty::Hard);
        let payload = session_payload(eng.state(), eng.store());
        assert_eq!(payload["difficulty"], "hard");
        assert_eq!(payload["lifetime"]["gamesPlayed"], 0);
    }
}
