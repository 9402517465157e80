use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    NutFree,
    LowCarb,
}

impl DietaryRestriction {
    pub const ALL: [DietaryRestriction; 6] = [
        DietaryRestriction::Vegetarian,
        DietaryRestriction::Vegan,
        DietaryRestriction::GlutenFree,
        DietaryRestriction::DairyFree,
        DietaryRestriction::NutFree,
        DietaryRestriction::LowCarb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryRestriction::Vegetarian => "vegetarian",
            DietaryRestriction::Vegan => "vegan",
            DietaryRestriction::GlutenFree => "gluten-free",
            DietaryRestriction::DairyFree => "dairy-free",
            DietaryRestriction::NutFree => "nut-free",
            DietaryRestriction::LowCarb => "low-carb",
        }
    }
}

impl FromStr for DietaryRestriction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietaryRestriction::ALL
            .into_iter()
            .find(|r| r.as_str() == s.trim())
            .ok_or_else(|| CoreError::Validation(format!("unknown dietary restriction: {s}")))
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CuisineType {
    Italian,
    Mexican,
    Indian,
    Chinese,
    Japanese,
    French,
    Thai,
    Mediterranean,
}

impl CuisineType {
    pub const ALL: [CuisineType; 8] = [
        CuisineType::Italian,
        CuisineType::Mexican,
        CuisineType::Indian,
        CuisineType::Chinese,
        CuisineType::Japanese,
        CuisineType::French,
        CuisineType::Thai,
        CuisineType::Mediterranean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CuisineType::Italian => "italian",
            CuisineType::Mexican => "mexican",
            CuisineType::Indian => "indian",
            CuisineType::Chinese => "chinese",
            CuisineType::Japanese => "japanese",
            CuisineType::French => "french",
            CuisineType::Thai => "thai",
            CuisineType::Mediterranean => "mediterranean",
        }
    }

    /// Parses a form selection; the empty selection ("Any Cuisine") is `None`.
    pub fn from_selection(selection: &str) -> Result<Option<Self>, CoreError> {
        let selection = selection.trim();
        if selection.is_empty() {
            return Ok(None);
        }
        selection.parse().map(Some)
    }
}

impl FromStr for CuisineType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CuisineType::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| CoreError::Validation(format!("unknown cuisine: {s}")))
    }
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Easy => "easy",
            Complexity::Medium => "medium",
            Complexity::Hard => "hard",
        }
    }
}

impl FromStr for Complexity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "easy" => Ok(Complexity::Easy),
            "medium" => Ok(Complexity::Medium),
            "hard" => Ok(Complexity::Hard),
            other => Err(CoreError::Validation(format!("unknown complexity: {other}"))),
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of people a recipe is generated for. Only 1, 2, 4, 6 and 8 exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Servings(u8);

impl Servings {
    pub const ALLOWED: [u8; 5] = [1, 2, 4, 6, 8];

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Servings {
    fn default() -> Self {
        Servings(2)
    }
}

impl TryFrom<u8> for Servings {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if Servings::ALLOWED.contains(&value) {
            Ok(Servings(value))
        } else {
            Err(CoreError::Validation(format!(
                "servings must be one of 1, 2, 4, 6 or 8 (got {value})"
            )))
        }
    }
}

impl From<Servings> for u8 {
    fn from(value: Servings) -> Self {
        value.0
    }
}

impl FromStr for Servings {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::Validation(format!("servings must be a number: {s}")))?;
        Servings::try_from(value)
    }
}

impl fmt::Display for Servings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Form fields other than the ingredient list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub dietary_restrictions: Vec<DietaryRestriction>,
    pub cuisine_type: Option<CuisineType>,
    pub servings: Servings,
    pub complexity: Complexity,
}

impl RecipeForm {
    /// Selects the restriction if absent, deselects it otherwise. Selection
    /// order is kept.
    pub fn toggle_restriction(&mut self, restriction: DietaryRestriction) {
        match self
            .dietary_restrictions
            .iter()
            .position(|r| *r == restriction)
        {
            Some(index) => {
                self.dietary_restrictions.remove(index);
            }
            None => self.dietary_restrictions.push(restriction),
        }
    }

    pub fn set_restrictions(&mut self, restrictions: impl IntoIterator<Item = DietaryRestriction>) {
        self.dietary_restrictions.clear();
        for restriction in restrictions {
            if !self.dietary_restrictions.contains(&restriction) {
                self.dietary_restrictions.push(restriction);
            }
        }
    }
}

/// Figure reported by the generation service, shown as sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Number(n) => write!(f, "{n}"),
            Measure::Text(s) => f.write_str(s.trim()),
        }
    }
}
