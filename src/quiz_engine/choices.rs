//! Multiple-choice option building.
//!
//! The generated set contains the correct id exactly once plus unique
//! distractors drawn from the rest of the catalog, then gets an unbiased
//! Fisher-Yates shuffle so the correct answer's slot is uniform.

use rand::Rng;

/// Build the shuffled option list for one round.
///
/// Returns `min(k, catalog size)` unique ids containing `correct` exactly
/// once.  Distractors are picked uniformly from the remaining catalog.
pub fn generate_choices<R: Rng>(
    rng: &mut R,
    correct: &'static str,
    catalog_ids: &[&'static str],
    k: usize,
) -> Vec<&'static str> {
    let target = k.min(catalog_ids.len());
    let mut choices: Vec<&'static str> = Vec::with_capacity(target);
    if target == 0 {
        return choices;
    }
    choices.push(correct);

    while choices.len() < target {
        let candidate = catalog_ids[rng.gen_range(0..catalog_ids.len())];
        if !choices.contains(&candidate) {
            choices.push(candidate);
        }
    }

    // Fisher-Yates shuffle
    for i in (1..choices.len()).rev() {
        let j = rng.gen_range(0..=i);
        choices.swap(i, j);
    }

    choices
}
