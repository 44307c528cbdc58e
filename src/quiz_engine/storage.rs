//! Persistent statistics store — the engine's only persistence collaborator.
//!
//! The raw interface is deliberately tiny (`get` / `set` of JSON values, key
//! by key) so any medium can back it.  All the typed accessors — high score,
//! lifetime stats, cumulative deltas — are provided on top of it and shared
//! by every implementation.
//!
//! Every implementation must degrade gracefully: when the medium is
//! unavailable, `get` returns `None` and `set` returns `false`, and nothing
//! ever panics or propagates an error.  Writes are last-write-wins; the
//! cumulative counters tolerate that because each delta is applied to the
//! value read back from the store.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::quiz_engine::config::keys;

// ---------------------------------------------------------------------------
// Stored shapes
// ---------------------------------------------------------------------------

/// Lifetime counters kept under the stats key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifetimeStats {
    pub total_correct: u32,
    pub total_rounds: u32,
    pub games_played: u32,
    pub best_streak: u32,
}

impl LifetimeStats {
    /// Lifetime accuracy as a rounded percentage; 0 with no recorded rounds.
    pub fn accuracy(&self) -> u32 {
        if self.total_rounds == 0 {
            return 0;
        }
        (100.0 * self.total_correct as f64 / self.total_rounds as f64).round() as u32
    }
}

/// One scoring event pushed to the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsDelta {
    pub correct_delta: u32,
    pub round_delta: u32,
    /// Current session streak, used to raise `best_streak` when higher.
    pub streak: Option<u32>,
}

// ---------------------------------------------------------------------------
// The store trait
// ---------------------------------------------------------------------------

/// Key-value persistence with graceful degradation.
///
/// Only `get` and `set` are required; the typed layer is provided.
pub trait StatsStore {
    /// Read a raw value; `None` when missing or the medium is unavailable.
    fn get(&self, key: &str) -> Option<Value>;

    /// Write a raw value; `false` when the medium is unavailable.
    fn set(&mut self, key: &str, value: Value) -> bool;

    /// Remove a key; `false` when the medium is unavailable.
    fn remove(&mut self, key: &str) -> bool;

    /// Stored high score, 0 by default.
    fn high_score(&self) -> u32 {
        self.get(keys::HIGH_SCORE)
            .and_then(|v| v.as_u64())
            .map(|v| v as u32)
            .unwrap_or(0)
    }

    /// Store `score` as the new high if it beats the current one.
    /// Returns whether a new high score was recorded.
    fn record_high_score(&mut self, score: u32) -> bool {
        if score > self.high_score() {
            self.set(keys::HIGH_SCORE, Value::from(score))
        } else {
            false
        }
    }

    /// Stored lifetime stats, all-zero by default.
    fn stats(&self) -> LifetimeStats {
        self.get(keys::STATS)
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }

    /// Fold one scoring delta into the stored lifetime stats.
    fn update_stats(&mut self, delta: StatsDelta) -> LifetimeStats {
        let mut stats = self.stats();
        stats.total_correct += delta.correct_delta;
        stats.total_rounds += delta.round_delta;
        if let Some(streak) = delta.streak {
            if streak > stats.best_streak {
                stats.best_streak = streak;
            }
        }
        match serde_json::to_value(&stats) {
            Ok(v) => {
                self.set(keys::STATS, v);
            }
            Err(e) => warn!(error = %e, "failed to serialize lifetime stats"),
        }
        stats
    }

    /// Count one finished-or-abandoned game.
    fn record_game_played(&mut self) -> LifetimeStats {
        let mut stats = self.stats();
        stats.games_played += 1;
        if let Ok(v) = serde_json::to_value(&stats) {
            self.set(keys::STATS, v);
        }
        stats
    }

    /// Drop everything this store holds for the game.
    fn clear(&mut self) {
        self.remove(keys::HIGH_SCORE);
        self.remove(keys::STATS);
    }
}

// ---------------------------------------------------------------------------
// Implementations
// ---------------------------------------------------------------------------

/// In-memory store; the default for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> bool {
        self.map.insert(key.to_string(), value);
        true
    }

    fn remove(&mut self, key: &str) -> bool {
        self.map.remove(key);
        true
    }
}

/// A store whose medium is permanently unavailable.  Every read yields the
/// default and every write reports failure; the engine keeps working.
#[derive(Debug, Default)]
pub struct UnavailableStore;

impl StatsStore for UnavailableStore {
    fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    fn set(&mut self, _key: &str, _value: Value) -> bool {
        false
    }

    fn remove(&mut self, _key: &str) -> bool {
        false
    }
}

/// Single-file JSON store: one object mapping keys to values, rewritten on
/// every set.  Any IO or parse failure degrades to default/false.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    fn load(&self) -> HashMap<String, Value> {
        match fs::read_to_string(&self.path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "stats file unreadable, using defaults");
                    HashMap::new()
                }
            },
            // A missing file is the normal first-run case.
            Err(_) => HashMap::new(),
        }
    }

    fn save(&self, map: &HashMap<String, Value>) -> bool {
        let text = match serde_json::to_string_pretty(map) {
            Ok(t) => t,
            Err(e) => {
                warn!(error = %e, "failed to serialize stats file");
                return false;
            }
        };
        match fs::write(&self.path, text) {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to write stats file");
                false
            }
        }
    }
}

impl StatsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.load().remove(key)
    }

    fn set(&mut self, key: &str, value: Value) -> bool {
        let mut map = self.load();
        map.insert(key.to_string(), value);
        self.save(&map)
    }

    fn remove(&mut self, key: &str) -> bool {
        let mut map = self.load();
        map.remove(key);
        self.save(&map)
    }
}
