//! Weekly plans: seven fixed-order days of three complete meals each.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Meal;

/// Number of meals sampled for each day of a plan.
pub const MEALS_PER_DAY: usize = 3;

/// Days of the week in the fixed order plans are emitted.
///
/// # Examples
/// ```
/// use nutricart_core::Weekday;
///
/// assert_eq!(Weekday::ALL.len(), 7);
/// assert_eq!(Weekday::Mon.as_str(), "Mon");
/// assert_eq!("Sun".parse::<Weekday>(), Ok(Weekday::Sun));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weekday {
    /// Monday.
    Mon,
    /// Tuesday.
    Tue,
    /// Wednesday.
    Wed,
    /// Thursday.
    Thu,
    /// Friday.
    Fri,
    /// Saturday.
    Sat,
    /// Sunday.
    Sun,
}

impl Weekday {
    /// All days in plan order, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// Return the three-letter day label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown weekday '{s}'"))
    }
}

/// One day's worth of sampled meals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayPlan {
    /// Day label in fixed Mon..Sun order.
    pub day: Weekday,
    /// Exactly [`MEALS_PER_DAY`] complete meals.
    pub meals: Vec<Meal>,
}

/// A full weekly plan together with the inputs that shaped it.
///
/// Constructed fresh per request and handed to the caller; the engine does
/// not persist plans.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeeklyPlan {
    /// Identifier of the user the plan was generated for.
    pub user_id: u64,
    /// The weekly budget echoed from the profile, when present.
    pub weekly_budget: Option<f64>,
    /// Per-meal price target, rounded to two decimals.
    pub avg_price_per_meal: f64,
    /// Dietary restriction tags echoed from the profile.
    pub dietary_restrictions: Vec<String>,
    /// Seven day entries in Mon..Sun order.
    #[cfg_attr(feature = "serde", serde(rename = "weekly_plan"))]
    pub days: Vec<DayPlan>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn all_days_are_ordered_mon_to_sun() {
        let labels: Vec<&str> = Weekday::ALL.iter().map(Weekday::as_str).collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[rstest]
    #[case("Mon", Weekday::Mon)]
    #[case("sun", Weekday::Sun)]
    #[case("WED", Weekday::Wed)]
    fn parsing_accepts_any_case(#[case] input: &str, #[case] expected: Weekday) {
        assert_eq!(input.parse::<Weekday>(), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = "Funday".parse::<Weekday>().unwrap_err();
        assert!(err.contains("unknown weekday"));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn weekly_plan_serialises_external_field_names() {
        let plan = WeeklyPlan {
            user_id: 9,
            weekly_budget: Some(105.0),
            avg_price_per_meal: 5.0,
            dietary_restrictions: vec![String::from("vegan")],
            days: vec![DayPlan {
                day: Weekday::Mon,
                meals: vec![Meal::new("Quinoa Bowl", 500.0, 18.0, 70.0, 15.0, 8.0)],
            }],
        };
        let json = serde_json::to_value(&plan).expect("serialise plan");
        assert!(json.get("weekly_plan").is_some());
        assert!(json.get("days").is_none());
        let day = &json["weekly_plan"][0];
        assert_eq!(day["day"], "Mon");
    }
}
