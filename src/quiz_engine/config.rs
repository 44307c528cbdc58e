//! Game configuration — scoring values, choice counts, asset locations, and
//! persistence keys live here so the rest of the engine never hard-codes them.

/// Points awarded for every correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Number of options shown in multiple-choice mode (correct + distractors).
pub const MAX_CHOICES: usize = 4;

/// Base URL for hero portrait images; the hero id + ".png" is appended.
pub const IMAGE_BASE_URL: &str =
    "https://raw.githubusercontent.com/back1ply/Who-is-That-Hero/main/Game%20Assets/";

/// Inline SVG shown when a portrait fails to load.
pub const FALLBACK_IMAGE: &str = "data:image/svg+xml,\
%3Csvg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"400\"%3E\
%3Crect fill=\"%231A1A2E\" width=\"400\" height=\"400\"/%3E\
%3Ctext fill=\"%2394A3B8\" x=\"50%25\" y=\"50%25\" text-anchor=\"middle\" \
dy=\".3em\" font-size=\"16\" font-family=\"sans-serif\"%3EImage not found\
%3C/text%3E%3C/svg%3E";

/// Persistence keys used by the [`StatsStore`](crate::quiz_engine::storage::StatsStore) layer.
pub mod keys {
    /// Best session score ever recorded.
    pub const HIGH_SCORE: &str = "wth_highScore";
    /// Cumulative lifetime statistics blob.
    pub const STATS: &str = "wth_stats";
}
