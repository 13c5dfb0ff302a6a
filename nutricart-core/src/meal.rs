//! Recipes and the complete meal records emitted to callers.
//!
//! Catalogue rows may arrive with gaps in their nutrition columns; a
//! [`Meal`] is the completed record with every field populated, built via
//! [`Meal::from_recipe`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Calories assumed when a catalogue row carries none.
pub const DEFAULT_CALORIES: f64 = 500.0;
/// Protein grams assumed when a catalogue row carries none.
pub const DEFAULT_PROTEIN_G: f64 = 20.0;
/// Carbohydrate grams assumed when a catalogue row carries none.
pub const DEFAULT_CARBS_G: f64 = 50.0;
/// Fat grams assumed when a catalogue row carries none.
pub const DEFAULT_FAT_G: f64 = 15.0;
/// Price assumed when a catalogue row carries none.
pub const DEFAULT_PRICE: f64 = 8.0;

/// A scored catalogue recipe with its offline cluster assignment.
///
/// Nutrition and price columns are optional because catalogue sources are
/// allowed to be partial; the gaps are backfilled when a recipe is turned
/// into a [`Meal`]. The full recipe set is immutable once loaded.
///
/// # Examples
/// ```
/// use nutricart_core::Recipe;
///
/// let recipe = Recipe::new("Quinoa Bowl", 3)
///     .with_calories(500.0)
///     .with_price(8.0);
/// assert_eq!(recipe.cluster, 3);
/// assert!(recipe.protein.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recipe {
    /// Display name; also the input to dietary keyword filtering.
    pub name: String,
    /// Calories per serving, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub calories: Option<f64>,
    /// Protein grams per serving, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub protein: Option<f64>,
    /// Carbohydrate grams per serving, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub carbs: Option<f64>,
    /// Fat grams per serving, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fat: Option<f64>,
    /// Price per serving, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: Option<f64>,
    /// Cluster id assigned by the offline training pipeline.
    pub cluster: u32,
}

impl Recipe {
    /// Construct a recipe with a name and cluster id and no nutrition data.
    pub fn new(name: impl Into<String>, cluster: u32) -> Self {
        Self {
            name: name.into(),
            calories: None,
            protein: None,
            carbs: None,
            fat: None,
            price: None,
            cluster,
        }
    }

    /// Set the calorie count, returning `self` for chaining.
    #[must_use]
    pub fn with_calories(mut self, calories: f64) -> Self {
        self.calories = Some(calories);
        self
    }

    /// Set the macro columns, returning `self` for chaining.
    #[must_use]
    pub fn with_macros(mut self, protein: f64, carbs: f64, fat: f64) -> Self {
        self.protein = Some(protein);
        self.carbs = Some(carbs);
        self.fat = Some(fat);
        self
    }

    /// Set the price, returning `self` for chaining.
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

/// A complete meal record as returned to callers.
///
/// Every field is populated; partial catalogue rows are completed with the
/// `DEFAULT_*` constants before they reach a caller.
///
/// # Examples
/// ```
/// use nutricart_core::{Meal, Recipe};
///
/// let recipe = Recipe::new("Veggie Bowl", 0).with_calories(420.0);
/// let meal = Meal::from_recipe(&recipe);
/// assert_eq!(meal.calories, 420.0);
/// // Missing macros fall back to the documented defaults.
/// assert_eq!(meal.protein, 20.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Meal {
    /// Display name of the meal.
    pub name: String,
    /// Calories per serving.
    pub calories: f64,
    /// Protein grams per serving.
    pub protein: f64,
    /// Carbohydrate grams per serving.
    pub carbs: f64,
    /// Fat grams per serving.
    pub fat: f64,
    /// Price per serving.
    pub price: f64,
}

impl Meal {
    /// Construct a meal with explicit values for every field.
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein,
            carbs,
            fat,
            price,
        }
    }

    /// Complete a catalogue recipe into a meal record.
    ///
    /// Missing nutrition or price fields are backfilled with the `DEFAULT_*`
    /// constants rather than left absent.
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            calories: recipe.calories.unwrap_or(DEFAULT_CALORIES),
            protein: recipe.protein.unwrap_or(DEFAULT_PROTEIN_G),
            carbs: recipe.carbs.unwrap_or(DEFAULT_CARBS_G),
            fat: recipe.fat.unwrap_or(DEFAULT_FAT_G),
            price: recipe.price.unwrap_or(DEFAULT_PRICE),
        }
    }
}
