//! `ClusterPlanner` implementation of the planning boundary.

use nutricart_core::{
    Catalog, ClusterModel, DayPlan, FallbackCatalog, Meal, MealPlanner, MealTargets, PlanRequest,
    Profile, Recipe, TargetConfig, Weekday, WeeklyPlan,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{filter, sampler};

/// Default multiplier applied to the per-meal price target when enforcing
/// the budget ceiling.
pub const BUDGET_ALLOWANCE: f64 = 1.20;

/// Configuration for [`ClusterPlanner`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Multiplier applied to the price target for the budget ceiling.
    pub budget_allowance: f64,
    /// Business-rule constants for target calculation.
    pub targets: TargetConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            budget_allowance: BUDGET_ALLOWANCE,
            targets: TargetConfig::default(),
        }
    }
}

/// Planner that matches profile targets to an offline recipe cluster and
/// samples meals from the constrained pool.
///
/// All held state is immutable and shared; the planner is safe for
/// unsynchronised concurrent use across requests.
#[derive(Debug, Clone)]
pub struct ClusterPlanner {
    catalog: Catalog,
    model: ClusterModel,
    fallback: FallbackCatalog,
    config: PlannerConfig,
}

impl ClusterPlanner {
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new(catalog: Catalog, model: ClusterModel, fallback: FallbackCatalog) -> Self {
        Self::with_config(catalog, model, fallback, PlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(
        catalog: Catalog,
        model: ClusterModel,
        fallback: FallbackCatalog,
        config: PlannerConfig,
    ) -> Self {
        Self {
            catalog,
            model,
            fallback,
            config,
        }
    }

    fn targets(&self, profile: &Profile) -> MealTargets {
        MealTargets::with_config(profile, self.catalog.mean_price(), &self.config.targets)
    }

    /// Recipes from the matched cluster that survive the dietary rules and
    /// the budget ceiling. May be empty.
    #[expect(
        clippy::float_arithmetic,
        reason = "the budget ceiling scales the price target by the allowance"
    )]
    fn constrained_pool(&self, profile: &Profile, targets: &MealTargets) -> Vec<&Recipe> {
        let cluster = self.model.nearest(targets);
        let cluster_pool: Vec<&Recipe> = self.catalog.in_cluster(cluster).collect();
        let diet_pool = filter::apply_dietary(cluster_pool, &profile.dietary_restrictions);
        let ceiling = targets.price * self.config.budget_allowance;
        let pool = filter::apply_budget(diet_pool, ceiling);
        log::debug!(
            "cluster {cluster}: {len} recipes within constraints",
            len = pool.len()
        );
        pool
    }
}

impl MealPlanner for ClusterPlanner {
    fn weekly_plan(&self, request: &PlanRequest) -> WeeklyPlan {
        let profile = &request.profile;
        let targets = self.targets(profile);
        let pool = self.constrained_pool(profile, &targets);
        let mut rng = StdRng::seed_from_u64(request.seed);

        let days = Weekday::ALL
            .iter()
            .map(|&day| DayPlan {
                day,
                meals: sampler::sample_day(&pool, &self.fallback, &mut rng),
            })
            .collect();

        WeeklyPlan {
            user_id: profile.user_id,
            weekly_budget: profile.weekly_budget,
            avg_price_per_meal: round_to_cents(targets.price),
            dietary_restrictions: profile.dietary_restrictions.clone(),
            days,
        }
    }

    fn swap_meal(&self, request: &PlanRequest) -> Meal {
        let profile = &request.profile;
        let targets = self.targets(profile);
        let pool = self.constrained_pool(profile, &targets);
        let mut rng = StdRng::seed_from_u64(request.seed);
        sampler::sample_one(&pool, &self.fallback, &mut rng)
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "rounding to cents requires scaling by one hundred"
)]
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
