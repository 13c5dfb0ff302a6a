//! Deterministic fixtures shared by unit, integration, and downstream
//! crate tests.
//!
//! The sample model uses an identity scaler so centroid coordinates live in
//! raw feature space and test expectations stay readable. The sample
//! profile targets cluster 0 of the sample model: per-meal calories around
//! 670 and a price target of 5.0 from the 105.0 weekly budget.

use crate::{Catalog, ClusterModel, FeatureScaler, Goal, Profile, Recipe};

/// A maintain-goal profile whose targets land in cluster 0 of
/// [`sample_model`].
#[must_use]
pub fn sample_profile() -> Profile {
    Profile::new(1, 25, 70.0, 175.0, Goal::Maintain).with_budget(105.0)
}

/// Two centroids in raw feature space behind an identity scaler: cluster 0
/// is a moderate meal, cluster 1 a heavy expensive one.
#[must_use]
pub fn sample_model() -> ClusterModel {
    let centroids = vec![
        [670.0, 50.0, 67.0, 22.0, 5.0],
        [1200.0, 90.0, 120.0, 40.0, 15.0],
    ];
    match ClusterModel::new(FeatureScaler::identity(), centroids) {
        Ok(model) => model,
        Err(err) => panic!("sample model should be valid: {err}"),
    }
}

/// A small catalogue split across the two sample clusters.
///
/// Cluster 0 holds five recipes priced at or below 6.0 (the budget ceiling
/// for the sample profile), including one meat recipe and one partial row;
/// cluster 1 holds expensive heavy meals.
#[must_use]
pub fn sample_catalog() -> Catalog {
    let recipes = vec![
        Recipe::new("Veggie Bowl", 0)
            .with_calories(520.0)
            .with_macros(18.0, 70.0, 14.0)
            .with_price(5.0),
        Recipe::new("Quinoa Salad", 0)
            .with_calories(480.0)
            .with_macros(16.0, 64.0, 12.0)
            .with_price(5.5),
        Recipe::new("Lentil Soup", 0)
            .with_calories(400.0)
            .with_macros(22.0, 52.0, 8.0)
            .with_price(4.5),
        Recipe::new("Chicken Wrap", 0)
            .with_calories(560.0)
            .with_macros(38.0, 48.0, 20.0)
            .with_price(5.0),
        Recipe::new("Tofu Stir-fry", 0).with_price(6.0),
        Recipe::new("Ribeye Steak Dinner", 1)
            .with_calories(1100.0)
            .with_macros(75.0, 40.0, 60.0)
            .with_price(18.0),
        Recipe::new("Lobster Pasta", 1)
            .with_calories(950.0)
            .with_macros(45.0, 90.0, 35.0)
            .with_price(22.0),
    ];
    match Catalog::new(recipes) {
        Ok(catalog) => catalog,
        Err(err) => panic!("sample catalog should be valid: {err}"),
    }
}
