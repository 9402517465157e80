use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{
    ingredient::IngredientSet,
    recipe::value_objects::{
        Complexity, CuisineType, DietaryRestriction, Measure, RecipeForm, Servings,
    },
};

/// Snapshot of the form sent to the generation service. Built fresh for every
/// submit and never touched after dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RecipeRequest {
    #[validate(length(min = 1, message = "Please add at least one ingredient"))]
    pub ingredients: Vec<String>,
    pub dietary_restrictions: Vec<DietaryRestriction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<CuisineType>,
    pub servings: Servings,
    pub complexity: Complexity,
}

impl RecipeRequest {
    pub fn new(ingredients: &IngredientSet, form: &RecipeForm) -> Self {
        Self {
            ingredients: ingredients.to_vec(),
            dietary_restrictions: form.dietary_restrictions.clone(),
            cuisine_type: form.cuisine_type,
            servings: form.servings,
            complexity: form.complexity,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    #[serde(default, deserialize_with = "lenient_measure")]
    pub calories: Option<Measure>,
    #[serde(default, deserialize_with = "lenient_measure")]
    pub protein_g: Option<Measure>,
    #[serde(default, deserialize_with = "lenient_measure")]
    pub carbs_g: Option<Measure>,
    #[serde(default, deserialize_with = "lenient_measure")]
    pub fat_g: Option<Measure>,
    #[serde(default, deserialize_with = "lenient_measure")]
    pub fiber_g: Option<Measure>,
    #[serde(default, deserialize_with = "lenient_measure")]
    pub sugar_g: Option<Measure>,
}

/// Generated recipe. The service may leave any field out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_measure")]
    pub prep_time_minutes: Option<Measure>,
    #[serde(default, deserialize_with = "lenient_measure")]
    pub cook_time_minutes: Option<Measure>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub nutritional_info: Option<NutritionalInfo>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Display-only figures: numbers and text are kept, anything else reads as absent.
fn lenient_measure<'de, D>(deserializer: D) -> Result<Option<Measure>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_f64().map(Measure::Number),
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(Measure::Text(s)),
        _ => None,
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Error(String),
    Loading,
    Loaded(Recipe),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        match self {
            RequestState::Loaded(recipe) => Some(recipe),
            _ => None,
        }
    }
}
