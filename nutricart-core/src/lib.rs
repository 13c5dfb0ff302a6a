//! Core domain types for the NutriCart meal-selection engine.
//!
//! The crate defines the read-only inputs (profiles, recipe catalogues,
//! trained cluster artefacts), the output records (meals, day plans, weekly
//! plans), and the [`MealPlanner`] boundary implemented by planner crates.
//! Everything here is loaded once at process start and shared immutably
//! between requests; nothing in this crate mutates state after
//! construction.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
mod cluster;
mod diet;
mod meal;
mod plan;
mod planner;
mod profile;
#[cfg(feature = "store-sqlite")]
#[cfg_attr(docsrs, doc(cfg(feature = "store-sqlite")))]
pub mod store;
mod targets;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{Catalog, CatalogError, FallbackCatalog, FallbackCatalogError};
pub use cluster::{ClusterModel, ClusterModelError, FeatureScaler, FEATURE_COUNT};
pub use diet::DietTag;
pub use meal::{
    Meal, Recipe, DEFAULT_CALORIES, DEFAULT_CARBS_G, DEFAULT_FAT_G, DEFAULT_PRICE,
    DEFAULT_PROTEIN_G,
};
pub use plan::{DayPlan, Weekday, WeeklyPlan, MEALS_PER_DAY};
pub use planner::{MealPlanner, PlanRequest};
pub use profile::{Goal, Profile};
pub use targets::{
    adjust_tdee, calculate_bmr, MealTargets, TargetConfig, CARB_ENERGY_RATIO, FAT_ENERGY_RATIO,
    GAIN_KCAL_OFFSET, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
    LOSE_KCAL_OFFSET, MEALS_PER_WEEK, PROTEIN_ENERGY_RATIO, SEDENTARY_ACTIVITY_FACTOR,
};

#[cfg(feature = "store-sqlite")]
pub use store::{SqliteCatalog, SqliteCatalogError};
