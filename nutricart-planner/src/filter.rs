//! Dietary and budget constraint filtering over recipe pools.
//!
//! Dietary rules resolve restriction tags to curated keyword lists and
//! match against recipe names; unrecognised tags filter nothing. The
//! budget step runs afterwards and drops anything priced above the
//! ceiling, including rows that carry no price at all.

use nutricart_core::{DietTag, Recipe};

/// Narrow a pool by every recognised restriction tag.
///
/// Tags compose conjunctively: a recipe survives only when every supplied
/// tag permits it. An empty restriction list returns the pool unchanged.
pub(crate) fn apply_dietary<'a>(
    pool: Vec<&'a Recipe>,
    restrictions: &[String],
) -> Vec<&'a Recipe> {
    let tags: Vec<DietTag> = restrictions
        .iter()
        .filter_map(|raw| raw.parse().ok())
        .collect();
    if tags.is_empty() {
        return pool;
    }
    pool.into_iter()
        .filter(|recipe| tags.iter().all(|tag| tag.permits(&recipe.name)))
        .collect()
}

/// Keep recipes priced at or below the ceiling.
///
/// Rows without a price cannot be shown to satisfy the budget and are
/// dropped.
pub(crate) fn apply_budget(pool: Vec<&Recipe>, ceiling: f64) -> Vec<&Recipe> {
    pool.into_iter()
        .filter(|recipe| recipe.price.is_some_and(|price| price <= ceiling))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pool_of(recipes: &[Recipe]) -> Vec<&Recipe> {
        recipes.iter().collect()
    }

    fn names<'a>(pool: &[&'a Recipe]) -> Vec<&'a str> {
        pool.iter().map(|recipe| recipe.name.as_str()).collect()
    }

    #[rstest]
    fn vegetarian_drops_meat_by_name() {
        let recipes = vec![Recipe::new("Chicken Salad", 0), Recipe::new("Veggie Bowl", 0)];
        let filtered = apply_dietary(pool_of(&recipes), &[String::from("vegetarian")]);
        assert_eq!(names(&filtered), ["Veggie Bowl"]);
    }

    #[rstest]
    fn restrictions_compose_conjunctively() {
        let recipes = vec![
            Recipe::new("Chicken Salad", 0),
            Recipe::new("Walnut Pasta", 0),
            Recipe::new("Veggie Bowl", 0),
        ];
        let restrictions = [String::from("vegetarian"), String::from("nut-free")];
        let filtered = apply_dietary(pool_of(&recipes), &restrictions);
        assert_eq!(names(&filtered), ["Veggie Bowl"]);
    }

    #[rstest]
    fn unknown_tags_filter_nothing() {
        let recipes = vec![Recipe::new("Chicken Salad", 0), Recipe::new("Veggie Bowl", 0)];
        let filtered = apply_dietary(pool_of(&recipes), &[String::from("pescatarian")]);
        assert_eq!(filtered.len(), 2);
    }

    #[rstest]
    fn empty_restrictions_return_pool_unchanged() {
        let recipes = vec![Recipe::new("Chicken Salad", 0)];
        let filtered = apply_dietary(pool_of(&recipes), &[]);
        assert_eq!(filtered.len(), 1);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "boundary expectations derive from the same ceiling arithmetic"
    )]
    fn budget_boundary_is_inclusive() {
        let ceiling = 5.0 * 1.20;
        let recipes = vec![
            Recipe::new("At Ceiling", 0).with_price(ceiling),
            Recipe::new("A Cent Above", 0).with_price(ceiling + 0.01),
            Recipe::new("Well Below", 0).with_price(4.0),
        ];
        let filtered = apply_budget(pool_of(&recipes), ceiling);
        assert_eq!(names(&filtered), ["At Ceiling", "Well Below"]);
    }

    #[rstest]
    fn unpriced_rows_fail_the_budget_step() {
        let recipes = vec![
            Recipe::new("Mystery Bowl", 0),
            Recipe::new("Veggie Bowl", 0).with_price(5.0),
        ];
        let filtered = apply_budget(pool_of(&recipes), 6.0);
        assert_eq!(names(&filtered), ["Veggie Bowl"]);
    }
}
