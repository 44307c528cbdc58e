//! End-to-end demo of a quiz session.
//!
//! Run with: `cargo run --example demo`
//!
//! Plays a short scripted session against a seeded engine so the output is
//! reproducible:
//!
//! 1. **Easy mode** — three multiple-choice rounds where the script answers
//!    correctly, wrongly, and then gives up, showing score and streak moves.
//! 2. **Hard mode** — the difficulty switch keeps the drawn hero (note how
//!    the hero id does not change) and the round flips to free text.
//! 3. **Session summary** — live state plus the lifetime stats the store
//!    accumulated, printed as the JSON a web client would receive.

use hero_quiz_gen::{ui_adapter, Difficulty, Guess, MemoryStore, RoundEngine, StatsStore};

fn divider(title: &str) {
    println!();
    println!("────────────────────────────────────────────────────────────");
    println!("  {title}");
    println!("────────────────────────────────────────────────────────────");
}

fn main() {
    let mut engine =
        RoundEngine::with_seed(MemoryStore::new(), 42).expect("catalog is compiled in");

    divider("Easy mode: three multiple-choice rounds");
    let mut view = engine.start_round(false);
    for action in ["correct", "wrong", "reveal"] {
        println!();
        println!("Round {} — options: {:?}", view.round, view.choices);
        println!("Hint: {}", engine.hint().unwrap());
        match action {
            "correct" => {
                let fb = engine.submit(&Guess::Choice(view.hero_id.to_string())).unwrap();
                println!("Guessed {} -> correct! score {} streak {}", fb.correct_name, fb.score, fb.streak);
            }
            "wrong" => {
                let wrong = view.choices.iter().find(|&&c| c != view.hero_id).unwrap();
                let fb = engine.submit(&Guess::Choice(wrong.to_string())).unwrap();
                println!("Guessed {wrong} -> wrong, it was {}. streak {}", fb.correct_name, fb.streak);
            }
            _ => {
                let fb = engine.reveal().unwrap();
                println!("Gave up -> it was {}. streak {}", fb.hero_name, fb.streak);
            }
        }
        view = engine.advance().unwrap();
    }

    divider("Hard mode: same hero, free text");
    let before = view.hero_id;
    let view = engine.change_difficulty(Difficulty::Hard);
    println!("Hero before: {before}  after: {} (unchanged)", view.hero_id);
    println!("Choices now: {:?} (free text)", view.choices);
    let typed = view.hero_id.replace(['_', '-'], " ");
    let fb = engine.submit(&Guess::Text(typed.clone())).unwrap();
    println!("Typed {typed:?} -> correct: {}", fb.correct);
    engine.advance().unwrap();

    divider("Session summary");
    let payload = ui_adapter::session_payload(engine.state(), engine.store());
    println!("{}", serde_json::to_string_pretty(&payload).unwrap());
    println!();
    println!(
        "Lifetime: {} correct over {} rounds, best streak {}, high score {}",
        engine.store().stats().total_correct,
        engine.store().stats().total_rounds,
        engine.store().stats().best_streak,
        engine.store().high_score(),
    );
}
