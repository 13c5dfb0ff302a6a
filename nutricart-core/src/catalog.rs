//! The immutable recipe catalogue and the built-in fallback meals.
//!
//! Both are loaded or constructed once at process start and shared
//! read-only across requests.

use rand::Rng;
use thiserror::Error;

use crate::{Meal, Recipe, MEALS_PER_DAY};

use crate::meal::DEFAULT_PRICE;

/// Errors raised while constructing a [`Catalog`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No recipes were supplied.
    #[error("catalog must contain at least one recipe")]
    Empty,
}

/// The pre-scored recipe set, immutable once loaded.
///
/// The mean price over priced rows is computed at construction so target
/// calculation never rescans the catalogue.
///
/// # Examples
/// ```
/// use nutricart_core::{Catalog, Recipe};
///
/// let catalog = Catalog::new(vec![
///     Recipe::new("Veggie Bowl", 0).with_price(6.0),
///     Recipe::new("Chicken Salad", 1).with_price(10.0),
/// ])
/// .unwrap();
/// assert_eq!(catalog.mean_price(), 8.0);
/// assert_eq!(catalog.in_cluster(1).count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    mean_price: f64,
}

impl Catalog {
    /// Validate and construct a catalogue from loaded recipes.
    ///
    /// # Errors
    /// Returns [`CatalogError::Empty`] when no recipes are supplied.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        if recipes.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mean_price = mean_recipe_price(&recipes);
        Ok(Self {
            recipes,
            mean_price,
        })
    }

    /// All recipes in load order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes in the catalogue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Report whether the catalogue is empty; always false once constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Mean price over rows that carry one, or the default meal price when
    /// none do.
    #[must_use]
    pub fn mean_price(&self) -> f64 {
        self.mean_price
    }

    /// Iterate over the recipes assigned to a cluster.
    pub fn in_cluster(&self, cluster: u32) -> impl Iterator<Item = &Recipe> {
        self.recipes
            .iter()
            .filter(move |recipe| recipe.cluster == cluster)
    }
}

fn mean_recipe_price(recipes: &[Recipe]) -> f64 {
    let priced: Vec<f64> = recipes.iter().filter_map(|recipe| recipe.price).collect();
    if priced.is_empty() {
        return DEFAULT_PRICE;
    }
    priced.iter().sum::<f64>() / priced.len() as f64
}

/// Errors raised while constructing a [`FallbackCatalog`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FallbackCatalogError {
    /// Fewer meals than a full day requires.
    #[error("fallback catalog must contain at least {MEALS_PER_DAY} meals, got {got}")]
    TooFew {
        /// Number of meals supplied.
        got: usize,
    },
}

/// The static fallback meal list used when the filtered pool runs dry.
///
/// Construction requires at least [`MEALS_PER_DAY`] entries so a full day
/// can always be drawn from this source alone; every entry is a complete
/// [`Meal`].
///
/// # Examples
/// ```
/// use nutricart_core::FallbackCatalog;
///
/// let fallback = FallbackCatalog::builtin();
/// assert!(fallback.meals().len() >= 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackCatalog {
    meals: Vec<Meal>,
}

impl FallbackCatalog {
    /// Validate and construct a fallback catalogue.
    ///
    /// # Errors
    /// Returns [`FallbackCatalogError::TooFew`] when fewer than
    /// [`MEALS_PER_DAY`] meals are supplied.
    pub fn new(meals: Vec<Meal>) -> Result<Self, FallbackCatalogError> {
        if meals.len() < MEALS_PER_DAY {
            return Err(FallbackCatalogError::TooFew { got: meals.len() });
        }
        Ok(Self { meals })
    }

    /// The hand-curated built-in meal list.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            meals: vec![
                Meal::new("Oatmeal with Fruits", 350.0, 10.0, 60.0, 7.0, 5.0),
                Meal::new("Chicken Salad", 450.0, 35.0, 20.0, 25.0, 7.5),
                Meal::new("Grilled Salmon with Veggies", 600.0, 40.0, 25.0, 35.0, 12.0),
                Meal::new("Turkey Sandwich", 400.0, 28.0, 40.0, 12.0, 6.0),
                Meal::new("Quinoa Bowl", 500.0, 18.0, 70.0, 15.0, 8.0),
                Meal::new("Veggie Stir-fry", 550.0, 15.0, 65.0, 22.0, 7.0),
                Meal::new("Greek Yogurt with Nuts", 300.0, 20.0, 20.0, 15.0, 4.5),
                Meal::new("Protein Smoothie", 250.0, 30.0, 25.0, 5.0, 5.5),
            ],
        }
    }

    /// The fallback meals in catalogue order.
    #[must_use]
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Draw one meal uniformly at random.
    ///
    /// Total by construction: the catalogue always holds at least
    /// [`MEALS_PER_DAY`] meals.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Meal {
        let index = rng.gen_range(0..self.meals.len());
        self.meals[index].clone()
    }
}
