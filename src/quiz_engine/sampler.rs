//! No-repeat hero sampling.
//!
//! A draw picks uniformly among catalog ids not yet used this cycle.  Once
//! every id has been used the set is cleared and a fresh cycle begins, so a
//! hero can only repeat after a full pass through the catalog.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::quiz_engine::error::{QuizError, QuizResult};

/// Draw one unused id and mark it used.
///
/// Clears `used` first when it already covers every catalog id (cycle
/// reset).  The pick is an unbiased uniform index over the remaining pool.
pub fn draw<R: Rng>(
    rng: &mut R,
    used: &mut HashSet<&'static str>,
    catalog_ids: &[&'static str],
) -> QuizResult<&'static str> {
    if catalog_ids.is_empty() {
        return Err(QuizError::EmptyCatalog);
    }

    if used.len() >= catalog_ids.len() {
        debug!(cycle_len = catalog_ids.len(), "catalog exhausted, resetting used set");
        used.clear();
    }

    let available: Vec<&'static str> = catalog_ids
        .iter()
        .copied()
        .filter(|id| !used.contains(id))
        .collect();

    let pick = available[rng.gen_range(0..available.len())];
    used.insert(pick);
    Ok(pick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_catalog_is_fatal() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut used = HashSet::new();
        assert_eq!(draw(&mut rng, &mut used, &[]), Err(QuizError::EmptyCatalog));
    }

    #[test]
    fn full_cycle_covers_every_id_once() {
        let ids = ["a", "b", "c", "d", "e"];
        for seed in [1u64, 42, 999, 0xDEAD_BEEF, 7] {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut used = HashSet::new();
            let mut seen = HashSet::new();
            for _ in 0..ids.len() {
                let id = draw(&mut rng, &mut used, &ids).unwrap();
                assert!(seen.insert(id), "seed {seed}: {id} repeated before exhaustion");
            }
            assert_eq!(seen.len(), ids.len());
        }
    }

    #[test]
    fn last_unused_id_is_forced() {
        let ids = ["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(7);
        let mut used: HashSet<&'static str> = ["a", "b"].into_iter().collect();
        assert_eq!(draw(&mut rng, &mut used, &ids).unwrap(), "c");
    }

    #[test]
    fn exhaustion_resets_before_next_pick() {
        let ids = ["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(3);
        let mut used: HashSet<&'static str> = ids.into_iter().collect();
        let pick = draw(&mut rng, &mut used, &ids).unwrap();
        assert!(ids.contains(&pick));
        // After the reset only the fresh pick is marked used.
        assert_eq!(used.len(), 1);
        assert!(used.contains(pick));
    }
}
