use std::sync::Arc;

use crate::{
    domain::{common::RecipeConfig, recipe::services::RecipeRequestController},
    infrastructure::recipe::HttpRecipeService,
};

pub mod session;

pub type LarderController = RecipeRequestController<HttpRecipeService>;

pub fn create_controller(config: RecipeConfig) -> LarderController {
    let service = HttpRecipeService::new(config);
    RecipeRequestController::new(Arc::new(service))
}
