//! Random draws that assemble day plans from a constrained pool.

use nutricart_core::{FallbackCatalog, Meal, Recipe, MEALS_PER_DAY};
use rand::Rng;
use rand::seq::SliceRandom;

/// Draw one day's meals.
///
/// With at least [`MEALS_PER_DAY`] recipes in the pool the day gets three
/// distinct recipes drawn without replacement; a shallower pool is ignored
/// entirely in favour of three independent fallback draws. Either way every
/// emitted meal is complete.
pub(crate) fn sample_day<R: Rng + ?Sized>(
    pool: &[&Recipe],
    fallback: &FallbackCatalog,
    rng: &mut R,
) -> Vec<Meal> {
    if pool.len() >= MEALS_PER_DAY {
        pool.choose_multiple(rng, MEALS_PER_DAY)
            .map(|recipe| Meal::from_recipe(recipe))
            .collect()
    } else {
        (0..MEALS_PER_DAY).map(|_| fallback.choose(rng)).collect()
    }
}

/// Draw a single substitute meal, falling back when the pool is empty.
pub(crate) fn sample_one<R: Rng + ?Sized>(
    pool: &[&Recipe],
    fallback: &FallbackCatalog,
    rng: &mut R,
) -> Meal {
    pool.choose(rng).map_or_else(
        || fallback.choose(rng),
        |recipe| Meal::from_recipe(recipe),
    )
}
