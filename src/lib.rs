//! Facade crate for the NutriCart meal-selection engine.
//!
//! This crate re-exports the core domain types and exposes the optional
//! planner and catalog store implementations behind feature flags.

#![forbid(unsafe_code)]

pub use nutricart_core::{
    Catalog, CatalogError, ClusterModel, ClusterModelError, DayPlan, DietTag, FallbackCatalog,
    FallbackCatalogError, FeatureScaler, Goal, Meal, MealPlanner, MealTargets, PlanRequest,
    Profile, Recipe, TargetConfig, Weekday, WeeklyPlan,
};

#[cfg(feature = "store-sqlite")]
pub use nutricart_core::{SqliteCatalog, SqliteCatalogError};

#[cfg(feature = "planner")]
pub use nutricart_planner::{ClusterPlanner, PlannerConfig};
