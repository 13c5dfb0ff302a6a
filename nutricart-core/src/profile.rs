//! Physiological profiles and goals driving target calculation.
//!
//! A [`Profile`] is a read-only snapshot supplied by the persistence layer,
//! which validates field ranges before the engine ever sees them; the core
//! does not re-validate.

use std::convert::Infallible;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The user's weight goal.
///
/// Parsing is deliberately lenient: any unrecognised value resolves to
/// [`Goal::Maintain`] rather than an error.
///
/// # Examples
/// ```
/// use nutricart_core::Goal;
///
/// assert_eq!("lose".parse::<Goal>(), Ok(Goal::Lose));
/// assert_eq!("bulk???".parse::<Goal>(), Ok(Goal::Maintain));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Goal {
    /// Reduce weight: a daily calorie deficit.
    Lose,
    /// Gain weight: a daily calorie surplus.
    Gain,
    /// Hold weight steady; also the fallback for unrecognised values.
    #[default]
    Maintain,
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Goal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse::<Self>().unwrap_or_default())
    }
}

impl Goal {
    /// Return the goal as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use nutricart_core::Goal;
    ///
    /// assert_eq!(Goal::Gain.as_str(), "gain");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Gain => "gain",
            Self::Maintain => "maintain",
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Goal {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "lose" => Self::Lose,
            "gain" => Self::Gain,
            // "maintain" and anything unrecognised both hold steady.
            _ => Self::Maintain,
        })
    }
}

/// A user's physiological profile and plan constraints.
///
/// Owned by the persistence layer; the engine receives a snapshot and never
/// mutates it. Field names on the wire follow the collaborating service:
/// `weight` is kilograms, `height` centimetres, `budget` a weekly amount.
///
/// # Examples
/// ```
/// use nutricart_core::{Goal, Profile};
///
/// let profile = Profile::new(7, 25, 70.0, 175.0, Goal::Maintain);
/// assert!(profile.weekly_budget.is_none());
/// assert!(profile.dietary_restrictions.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Profile {
    /// Identifier of the owning user.
    pub user_id: u64,
    /// Age in years.
    pub age: u32,
    /// Body weight in kilograms.
    #[cfg_attr(feature = "serde", serde(rename = "weight"))]
    pub weight_kg: f64,
    /// Height in centimetres.
    #[cfg_attr(feature = "serde", serde(rename = "height"))]
    pub height_cm: f64,
    /// Weight goal; defaults to maintain.
    #[cfg_attr(feature = "serde", serde(default))]
    pub goal: Goal,
    /// Weekly budget, when the user supplied one.
    #[cfg_attr(feature = "serde", serde(rename = "budget", default))]
    pub weekly_budget: Option<f64>,
    /// Ordered dietary restriction tags; unknown tags are ignored downstream.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dietary_restrictions: Vec<String>,
}

impl Profile {
    /// Construct a profile with no budget or dietary restrictions.
    pub fn new(user_id: u64, age: u32, weight_kg: f64, height_cm: f64, goal: Goal) -> Self {
        Self {
            user_id,
            age,
            weight_kg,
            height_cm,
            goal,
            weekly_budget: None,
            dietary_restrictions: Vec::new(),
        }
    }

    /// Set the weekly budget while returning `self` for chaining.
    #[must_use]
    pub fn with_budget(mut self, weekly_budget: f64) -> Self {
        self.weekly_budget = Some(weekly_budget);
        self
    }

    /// Add a dietary restriction tag while returning `self` for chaining.
    #[must_use]
    pub fn with_restriction(mut self, tag: impl Into<String>) -> Self {
        self.dietary_restrictions.push(tag.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("lose", Goal::Lose)]
    #[case("GAIN", Goal::Gain)]
    #[case("maintain", Goal::Maintain)]
    #[case("shred", Goal::Maintain)]
    #[case("", Goal::Maintain)]
    fn goal_parsing_is_lenient(#[case] input: &str, #[case] expected: Goal) {
        assert_eq!(input.parse::<Goal>(), Ok(expected));
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(Goal::Lose.to_string(), Goal::Lose.as_str());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn profile_deserialises_external_field_names() {
        let json = r#"{
            "user_id": 42,
            "age": 30,
            "weight": 82.5,
            "height": 180.0,
            "goal": "lose",
            "budget": 120.0,
            "dietary_restrictions": ["vegetarian", "nut-free"]
        }"#;
        let profile: Profile = serde_json::from_str(json).expect("deserialise profile");
        assert_eq!(profile.user_id, 42);
        assert_eq!(profile.weight_kg, 82.5);
        assert_eq!(profile.goal, Goal::Lose);
        assert_eq!(profile.weekly_budget, Some(120.0));
        assert_eq!(profile.dietary_restrictions.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn unknown_goal_deserialises_to_maintain() {
        let json = r#"{"user_id": 1, "age": 25, "weight": 70.0, "height": 175.0, "goal": "tone"}"#;
        let profile: Profile = serde_json::from_str(json).expect("deserialise profile");
        assert_eq!(profile.goal, Goal::Maintain);
    }
}
