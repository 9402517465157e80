use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeRequest},
        value_objects::DietaryRestriction,
    },
};

/// Remote recipe generation engine.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        request: RecipeRequest,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn suggest_substitutes(
        &self,
        ingredient: String,
        dietary_restrictions: Vec<DietaryRestriction>,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn suggest_pairings(
        &self,
        ingredient: String,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn list_cuisines(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
