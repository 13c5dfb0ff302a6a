//! Per-meal nutrition and price targets derived from a profile.
//!
//! The calculation is the Mifflin–St Jeor estimate for a single reference
//! sex, scaled by a sedentary activity factor, offset by the weight goal,
//! and split into per-meal figures. The business-rule constants are named
//! here and overridable through [`TargetConfig`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Goal, Profile};

/// Sedentary activity multiplier applied to BMR.
pub const SEDENTARY_ACTIVITY_FACTOR: f64 = 1.2;
/// Daily calorie offset for the `lose` goal.
pub const LOSE_KCAL_OFFSET: f64 = -500.0;
/// Daily calorie offset for the `gain` goal.
pub const GAIN_KCAL_OFFSET: f64 = 300.0;
/// Share of daily energy taken as protein.
pub const PROTEIN_ENERGY_RATIO: f64 = 0.30;
/// Share of daily energy taken as carbohydrate.
pub const CARB_ENERGY_RATIO: f64 = 0.40;
/// Share of daily energy taken as fat.
pub const FAT_ENERGY_RATIO: f64 = 0.30;
/// Energy density of protein, kcal per gram.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
/// Energy density of carbohydrate, kcal per gram.
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
/// Energy density of fat, kcal per gram.
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
/// Meals in a week: seven days of three meals.
pub const MEALS_PER_WEEK: usize = 21;

/// Overridable business-rule constants for target calculation.
///
/// `Default` mirrors the named module constants; callers tuning a rule
/// override a single field and leave the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetConfig {
    /// Activity multiplier applied to BMR.
    pub activity_factor: f64,
    /// Daily calorie offset for [`Goal::Lose`].
    pub lose_offset: f64,
    /// Daily calorie offset for [`Goal::Gain`].
    pub gain_offset: f64,
    /// Share of daily energy taken as protein.
    pub protein_ratio: f64,
    /// Share of daily energy taken as carbohydrate.
    pub carb_ratio: f64,
    /// Share of daily energy taken as fat.
    pub fat_ratio: f64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            activity_factor: SEDENTARY_ACTIVITY_FACTOR,
            lose_offset: LOSE_KCAL_OFFSET,
            gain_offset: GAIN_KCAL_OFFSET,
            protein_ratio: PROTEIN_ENERGY_RATIO,
            carb_ratio: CARB_ENERGY_RATIO,
            fat_ratio: FAT_ENERGY_RATIO,
        }
    }
}

/// Basal Metabolic Rate via Mifflin–St Jeor for the reference sex.
///
/// # Examples
/// ```
/// use nutricart_core::calculate_bmr;
///
/// assert_eq!(calculate_bmr(25, 70.0, 175.0), 1673.75);
/// ```
#[must_use]
pub fn calculate_bmr(age: u32, weight_kg: f64, height_cm: f64) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + 5.0
}

/// Total Daily Energy Expenditure: BMR scaled for a sedentary lifestyle and
/// offset by the weight goal.
///
/// # Examples
/// ```
/// use nutricart_core::{adjust_tdee, Goal};
///
/// let tdee = adjust_tdee(1500.0, Goal::Lose);
/// assert!((tdee - 1300.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn adjust_tdee(bmr: f64, goal: Goal) -> f64 {
    TargetConfig::default().adjust_tdee(bmr, goal)
}

impl TargetConfig {
    /// Apply this configuration's activity factor and goal offset to a BMR.
    #[must_use]
    pub fn adjust_tdee(&self, bmr: f64, goal: Goal) -> f64 {
        let tdee = bmr * self.activity_factor;
        match goal {
            Goal::Lose => tdee + self.lose_offset,
            Goal::Gain => tdee + self.gain_offset,
            Goal::Maintain => tdee,
        }
    }
}

/// Per-meal calorie, macro, and price targets for one profile.
///
/// The five values form the feature vector handed to the cluster matcher,
/// in the fixed order calories, protein, carbs, fat, price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MealTargets {
    /// Calories per meal.
    pub calories: f64,
    /// Protein grams per meal.
    pub protein_g: f64,
    /// Carbohydrate grams per meal.
    pub carbs_g: f64,
    /// Fat grams per meal.
    pub fat_g: f64,
    /// Price per meal.
    pub price: f64,
}

impl MealTargets {
    /// Compute targets for a profile using the default configuration.
    ///
    /// `catalog_mean_price` is the per-meal price target used when the
    /// profile carries no weekly budget; with a budget, the target is the
    /// budget split evenly over [`MEALS_PER_WEEK`] meals. The computation is
    /// pure: the same profile always yields the same targets.
    #[must_use]
    pub fn for_profile(profile: &Profile, catalog_mean_price: f64) -> Self {
        Self::with_config(profile, catalog_mean_price, &TargetConfig::default())
    }

    /// Compute targets for a profile with explicit configuration.
    #[must_use]
    pub fn with_config(profile: &Profile, catalog_mean_price: f64, config: &TargetConfig) -> Self {
        let meals_per_day = crate::MEALS_PER_DAY as f64;
        let bmr = calculate_bmr(profile.age, profile.weight_kg, profile.height_cm);
        let tdee = config.adjust_tdee(bmr, profile.goal);
        let price = profile
            .weekly_budget
            .map_or(catalog_mean_price, |budget| budget / MEALS_PER_WEEK as f64);

        Self {
            calories: tdee / meals_per_day,
            protein_g: (config.protein_ratio * tdee / KCAL_PER_GRAM_PROTEIN) / meals_per_day,
            carbs_g: (config.carb_ratio * tdee / KCAL_PER_GRAM_CARBS) / meals_per_day,
            fat_g: (config.fat_ratio * tdee / KCAL_PER_GRAM_FAT) / meals_per_day,
            price,
        }
    }

    /// Return the targets as the fixed-order feature vector.
    #[must_use]
    pub fn to_array(&self) -> [f64; 5] {
        [
            self.calories,
            self.protein_g,
            self.carbs_g,
            self.fat_g,
            self.price,
        ]
    }
}
