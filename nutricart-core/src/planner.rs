//! The planning boundary implemented by engine crates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Meal, Profile, WeeklyPlan};

/// Parameters for one planning request.
///
/// The request pairs a validated profile snapshot with a random seed so
/// sampling is reproducible in tests while production callers pass entropy.
///
/// # Examples
/// ```
/// use nutricart_core::{Goal, PlanRequest, Profile};
///
/// let request = PlanRequest {
///     profile: Profile::new(1, 25, 70.0, 175.0, Goal::Maintain),
///     seed: 42,
/// };
/// assert_eq!(request.seed, 42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanRequest {
    /// The profile to plan for.
    pub profile: Profile,
    /// Seed for reproducible sampling.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u64,
}

/// Produce meal plans for a profile.
///
/// Both operations are total: when the filtered recipe pool cannot supply
/// enough distinct meals, implementations fall back to a static catalogue,
/// so a result is always produced. Implementations must be thread-safe
/// (`Send + Sync`) so one planner instance can serve concurrent requests;
/// the only side effect permitted is consuming randomness derived from the
/// request seed.
pub trait MealPlanner: Send + Sync {
    /// Build a full weekly plan: seven fixed-order days of three complete
    /// meals each.
    fn weekly_plan(&self, request: &PlanRequest) -> WeeklyPlan;

    /// Draw a single substitute meal for the same profile.
    fn swap_meal(&self, request: &PlanRequest) -> Meal;
}
