//! Dietary restriction tags and their curated exclusion keywords.
//!
//! Filtering is a substring heuristic over recipe names, not structured
//! ingredient data. That keeps the known limitations of the upstream
//! catalogue: "Nutty Granola" is correctly excluded by `nut-free`, while
//! "Cream of Wheat" is wrongly excluded by `dairy-free`. Callers relying on
//! stricter guarantees need ingredient-level data the catalogue does not
//! carry.

const MEAT_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "turkey", "duck", "bacon", "sausage", "meatball", "steak",
    "ham", "salami", "shrimp", "salmon", "cod", "tuna", "fish",
];

const DAIRY_KEYWORDS: &[&str] = &[
    "milk",
    "cheese",
    "yogurt",
    "butter",
    "cream",
    "cheddar",
    "mozzarella",
    "parmesan",
    "feta",
];

const EGG_KEYWORDS: &[&str] = &["egg"];

const GLUTEN_KEYWORDS: &[&str] = &[
    "bread", "pasta", "wrap", "toast", "waffle", "pancake", "bagel", "noodle", "bun",
];

const NUT_KEYWORDS: &[&str] = &["peanut", "almond", "walnut", "cashew", "pecan", "nut"];

const HALAL_EXCLUDED: &[&str] = &["pork", "bacon", "ham", "wine", "beer"];

const KOSHER_EXCLUDED: &[&str] = &[
    "pork",
    "bacon",
    "ham",
    "shrimp",
    "prawn",
    "lobster",
    "crab",
    "clam",
    "oyster",
    "shellfish",
];

/// A recognised dietary restriction.
///
/// Tags parse from their lowercase hyphenated form; unrecognised strings
/// fail to parse and are treated as no-ops by the constraint filter.
///
/// # Examples
/// ```
/// use nutricart_core::DietTag;
///
/// let tag: DietTag = "vegetarian".parse().unwrap();
/// assert!(!tag.permits("Chicken Salad"));
/// assert!(tag.permits("Veggie Bowl"));
/// assert!("pescatarian".parse::<DietTag>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietTag {
    /// No meat or fish.
    Vegetarian,
    /// No meat, fish, dairy, or egg.
    Vegan,
    /// No dairy.
    DairyFree,
    /// No bread, pasta, or related wheat carriers.
    GlutenFree,
    /// No peanuts or tree nuts.
    NutFree,
    /// No pork products or alcohol.
    Halal,
    /// No pork products or shellfish.
    Kosher,
}

impl DietTag {
    /// Return the tag as its lowercase hyphenated `&str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::DairyFree => "dairy-free",
            Self::GlutenFree => "gluten-free",
            Self::NutFree => "nut-free",
            Self::Halal => "halal",
            Self::Kosher => "kosher",
        }
    }

    /// The keyword lists a recipe name must avoid under this tag.
    fn excluded_keywords(&self) -> &[&'static [&'static str]] {
        match self {
            Self::Vegetarian => &[MEAT_KEYWORDS],
            Self::Vegan => &[MEAT_KEYWORDS, DAIRY_KEYWORDS, EGG_KEYWORDS],
            Self::DairyFree => &[DAIRY_KEYWORDS],
            Self::GlutenFree => &[GLUTEN_KEYWORDS],
            Self::NutFree => &[NUT_KEYWORDS],
            Self::Halal => &[HALAL_EXCLUDED],
            Self::Kosher => &[KOSHER_EXCLUDED],
        }
    }

    /// Report whether a recipe name satisfies this restriction.
    ///
    /// Matching is case-insensitive substring containment against the tag's
    /// curated keyword lists.
    #[must_use]
    pub fn permits(&self, recipe_name: &str) -> bool {
        let lowered = recipe_name.to_lowercase();
        !self
            .excluded_keywords()
            .iter()
            .flat_map(|keywords| keywords.iter())
            .any(|keyword| lowered.contains(keyword))
    }
}

impl std::fmt::Display for DietTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DietTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            "dairy-free" => Ok(Self::DairyFree),
            "gluten-free" => Ok(Self::GlutenFree),
            "nut-free" => Ok(Self::NutFree),
            "halal" => Ok(Self::Halal),
            "kosher" => Ok(Self::Kosher),
            _ => Err(format!("unknown dietary restriction '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DietTag::Vegetarian, "Chicken Salad", false)]
    #[case(DietTag::Vegetarian, "Grilled Salmon with Veggies", false)]
    #[case(DietTag::Vegetarian, "Veggie Bowl", true)]
    #[case(DietTag::Vegan, "Greek Yogurt with Nuts", false)]
    #[case(DietTag::Vegan, "Scrambled Eggs", false)]
    #[case(DietTag::Vegan, "Quinoa Bowl", true)]
    #[case(DietTag::DairyFree, "Cream of Wheat", false)]
    #[case(DietTag::DairyFree, "Fried Egg", true)]
    #[case(DietTag::GlutenFree, "Turkey Sandwich", true)]
    #[case(DietTag::GlutenFree, "Avocado Toast", false)]
    #[case(DietTag::NutFree, "Nutty Granola", false)]
    #[case(DietTag::NutFree, "Oatmeal with Fruits", true)]
    #[case(DietTag::Halal, "Bacon Omelette", false)]
    #[case(DietTag::Halal, "Beef Stew", true)]
    #[case(DietTag::Kosher, "Shrimp Pad Thai", false)]
    #[case(DietTag::Kosher, "Roast Chicken", true)]
    fn keyword_rules_match_by_name(
        #[case] tag: DietTag,
        #[case] name: &str,
        #[case] permitted: bool,
    ) {
        assert_eq!(tag.permits(name), permitted, "{tag} vs {name}");
    }

    #[rstest]
    fn matching_ignores_case() {
        assert!(!DietTag::Vegetarian.permits("CHICKEN salad"));
    }

    #[rstest]
    fn parsing_round_trips_known_tags() {
        for tag in [
            DietTag::Vegetarian,
            DietTag::Vegan,
            DietTag::DairyFree,
            DietTag::GlutenFree,
            DietTag::NutFree,
            DietTag::Halal,
            DietTag::Kosher,
        ] {
            assert_eq!(tag.as_str().parse::<DietTag>(), Ok(tag));
        }
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = "keto".parse::<DietTag>().unwrap_err();
        assert!(err.contains("unknown dietary restriction"));
    }
}
