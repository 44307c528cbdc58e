//! Portrait fetch modeling.
//!
//! The actual download is an external collaborator; this module only builds
//! the request, names the two terminal outcomes, and guards against stale
//! completions.  A fetch outcome carries the hero id it was issued for so a
//! result arriving after the round has advanced can be recognized and
//! dropped.  Round progression never waits on any of this — scoring is
//! independent of image availability.

use serde::Serialize;

use crate::quiz_engine::config::{FALLBACK_IMAGE, IMAGE_BASE_URL};

/// Portrait URL for a hero id.
pub fn image_url(hero_id: &str) -> String {
    format!("{IMAGE_BASE_URL}{hero_id}.png")
}

/// A fetch issued for one presented round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    pub hero_id: &'static str,
    pub url: String,
}

impl ImageRequest {
    pub fn for_hero(hero_id: &'static str) -> Self {
        ImageRequest { hero_id, url: image_url(hero_id) }
    }
}

/// Terminal result of a portrait fetch, tagged with the hero it was for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The portrait at the request URL loaded.
    Loaded { hero_id: String },
    /// The fetch failed; the fallback asset should be shown instead.
    Failed { hero_id: String },
}

impl FetchOutcome {
    /// Hero id this outcome was issued for.
    pub fn hero_id(&self) -> &str {
        match self {
            FetchOutcome::Loaded { hero_id } | FetchOutcome::Failed { hero_id } => hero_id,
        }
    }

    /// Asset reference to display: the real portrait on success, the
    /// built-in fallback on failure.
    pub fn asset(&self) -> String {
        match self {
            FetchOutcome::Loaded { hero_id } => image_url(hero_id),
            FetchOutcome::Failed { .. } => FALLBACK_IMAGE.to_string(),
        }
    }
}
