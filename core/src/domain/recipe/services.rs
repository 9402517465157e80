use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{
    common::entities::app_errors::{CoreError, EMPTY_INGREDIENTS_MESSAGE},
    ingredient::IngredientSet,
    recipe::{
        entities::{Recipe, RecipeRequest, RequestState},
        ports::RecipeService,
        value_objects::{Complexity, CuisineType, DietaryRestriction, RecipeForm, Servings},
    },
};

/// Everything a surface needs to draw the generator. Published after every
/// change so the rendered view never drifts from the controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerView {
    pub ingredients: Vec<String>,
    pub pending_ingredient: String,
    pub form: RecipeForm,
    pub state: RequestState,
    /// False while a request is in flight or no ingredient has been added.
    pub submit_enabled: bool,
    /// Busy indicator shown in place of the submit control.
    pub busy: bool,
}

pub struct RecipeRequestController<S> {
    service: Arc<S>,
    ingredients: IngredientSet,
    form: RecipeForm,
    state: RequestState,
    in_flight: Option<Uuid>,
    view_tx: watch::Sender<ControllerView>,
}

impl<S> RecipeRequestController<S>
where
    S: RecipeService,
{
    pub fn new(service: Arc<S>) -> Self {
        let (view_tx, _) = watch::channel(ControllerView::default());
        let controller = Self {
            service,
            ingredients: IngredientSet::new(),
            form: RecipeForm::default(),
            state: RequestState::Idle,
            in_flight: None,
            view_tx,
        };
        controller.publish();
        controller
    }

    pub fn service(&self) -> Arc<S> {
        Arc::clone(&self.service)
    }

    pub fn subscribe(&self) -> watch::Receiver<ControllerView> {
        self.view_tx.subscribe()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn view(&self) -> ControllerView {
        let busy = self.state.is_loading();
        ControllerView {
            ingredients: self.ingredients.to_vec(),
            pending_ingredient: self.ingredients.pending().to_string(),
            form: self.form.clone(),
            state: self.state.clone(),
            submit_enabled: !busy && !self.ingredients.is_empty(),
            busy,
        }
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.view());
    }

    pub fn add_ingredient(&mut self, text: &str) -> bool {
        let added = self.ingredients.add(text);
        if added {
            self.publish();
        }
        added
    }

    pub fn add_pending_ingredient(&mut self) -> bool {
        let added = self.ingredients.add_pending();
        if added {
            self.publish();
        }
        added
    }

    pub fn set_pending_ingredient(&mut self, text: impl Into<String>) {
        self.ingredients.set_pending(text);
        self.publish();
    }

    pub fn remove_ingredient(&mut self, ingredient: &str) -> bool {
        let removed = self.ingredients.remove(ingredient);
        if removed {
            self.publish();
        }
        removed
    }

    pub fn set_servings(&mut self, servings: Servings) {
        self.form.servings = servings;
        self.publish();
    }

    pub fn set_complexity(&mut self, complexity: Complexity) {
        self.form.complexity = complexity;
        self.publish();
    }

    /// Accepts the raw form selection; "" clears the cuisine.
    pub fn set_cuisine(&mut self, selection: &str) -> Result<(), CoreError> {
        self.form.cuisine_type = CuisineType::from_selection(selection)?;
        self.publish();
        Ok(())
    }

    pub fn toggle_restriction(&mut self, restriction: DietaryRestriction) {
        self.form.toggle_restriction(restriction);
        self.publish();
    }

    pub fn set_restrictions(&mut self, restrictions: impl IntoIterator<Item = DietaryRestriction>) {
        self.form.set_restrictions(restrictions);
        self.publish();
    }

    /// Moves to `Loading` and returns the request to dispatch. Returns `None`
    /// while another request is in flight, or after recording the validation
    /// error when there is nothing to cook with.
    pub fn begin_submit(&mut self) -> Option<RecipeRequest> {
        if self.state.is_loading() {
            debug!("submit ignored, a recipe request is already in flight");
            return None;
        }

        let request = RecipeRequest::new(&self.ingredients, &self.form);
        if let Err(errors) = request.validate() {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|errors| errors.iter())
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| EMPTY_INGREDIENTS_MESSAGE.to_string());
            self.state = RequestState::Error(message);
            self.publish();
            return None;
        }

        let attempt = Uuid::now_v7();
        info!(
            %attempt,
            ingredients = request.ingredients.len(),
            servings = request.servings.get(),
            complexity = %request.complexity,
            "dispatching recipe request"
        );

        self.in_flight = Some(attempt);
        self.state = RequestState::Loading;
        self.publish();

        Some(request)
    }

    /// Settles the in-flight attempt with the service outcome.
    pub fn complete(&mut self, result: Result<Recipe, CoreError>) {
        let Some(attempt) = self.in_flight.take() else {
            warn!("recipe response arrived with no request in flight");
            return;
        };

        self.state = match result {
            Ok(recipe) => {
                info!(
                    %attempt,
                    title = recipe.title.as_deref().unwrap_or_default(),
                    "recipe generated"
                );
                RequestState::Loaded(recipe)
            }
            Err(e) => {
                if e.is_remote() {
                    error!(%attempt, "Error generating recipe: {}", e);
                }
                RequestState::Error(e.user_message())
            }
        };
        self.publish();
    }

    pub async fn submit(&mut self) {
        let Some(request) = self.begin_submit() else {
            return;
        };

        let result = self.service.generate_recipe(request).await;
        self.complete(result);
    }

    /// Saving generated recipes is not supported yet.
    pub fn save_recipe(&self) {
        debug!("save recipe requested, nothing to do");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::entities::app_errors::GENERIC_FAILURE_MESSAGE,
        recipe::{ports::MockRecipeService, value_objects::Measure},
    };

    fn pasta() -> Recipe {
        Recipe {
            title: Some("Pasta".to_string()),
            description: Some("...".to_string()),
            prep_time_minutes: Some(Measure::Number(10.0)),
            cook_time_minutes: Some(Measure::Number(20.0)),
            difficulty: Some("easy".to_string()),
            ingredients: vec!["pasta".to_string(), "salt".to_string()],
            instructions: vec!["boil".to_string(), "drain".to_string()],
            tags: None,
            nutritional_info: None,
        }
    }

    fn controller(service: MockRecipeService) -> RecipeRequestController<MockRecipeService> {
        RecipeRequestController::new(Arc::new(service))
    }

    #[tokio::test]
    async fn test_empty_submit_errors_without_network_call() {
        let mut service = MockRecipeService::new();
        service.expect_generate_recipe().times(0);
        let mut controller = controller(service);

        controller.submit().await;

        assert_eq!(
            controller.state(),
            &RequestState::Error(EMPTY_INGREDIENTS_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_begin_submit_enters_loading_and_disables_submit() {
        let mut service = MockRecipeService::new();
        service.expect_generate_recipe().times(0);
        let mut controller = controller(service);
        controller.add_ingredient("egg");

        let request = controller.begin_submit().unwrap();

        assert_eq!(request.ingredients, vec!["egg".to_string()]);
        assert!(controller.is_loading());
        let view = controller.view();
        assert!(!view.submit_enabled);
        assert!(view.busy);
        assert!(controller.begin_submit().is_none());
    }

    #[tokio::test]
    async fn test_successful_response_is_loaded() {
        let mut service = MockRecipeService::new();
        service
            .expect_generate_recipe()
            .times(1)
            .returning(|_| Box::pin(async { Ok(pasta()) }));
        let mut controller = controller(service);
        controller.add_ingredient("pasta");
        controller.add_ingredient("salt");

        controller.submit().await;

        assert_eq!(controller.state(), &RequestState::Loaded(pasta()));
        assert_eq!(controller.state().error(), None);
        assert!(controller.view().submit_enabled);
    }

    #[tokio::test]
    async fn test_service_error_message_is_surfaced() {
        let mut service = MockRecipeService::new();
        service.expect_generate_recipe().times(1).returning(|_| {
            Box::pin(async {
                Err(CoreError::Service {
                    status: 500,
                    message: Some("model unavailable".to_string()),
                })
            })
        });
        let mut controller = controller(service);
        controller.add_ingredient("rice");

        controller.submit().await;

        assert_eq!(
            controller.state(),
            &RequestState::Error("model unavailable".to_string())
        );
    }

    #[tokio::test]
    async fn test_failure_without_body_uses_fallback_and_clears_recipe() {
        let mut service = MockRecipeService::new();
        let mut calls = 0;
        service.expect_generate_recipe().times(2).returning(move |_| {
            calls += 1;
            let result = if calls == 1 {
                Ok(pasta())
            } else {
                Err(CoreError::Service {
                    status: 500,
                    message: None,
                })
            };
            Box::pin(async move { result })
        });
        let mut controller = controller(service);
        controller.add_ingredient("pasta");

        controller.submit().await;
        assert!(controller.state().recipe().is_some());

        controller.submit().await;
        assert_eq!(
            controller.state(),
            &RequestState::Error(GENERIC_FAILURE_MESSAGE.to_string())
        );
        assert!(controller.state().recipe().is_none());
    }

    #[tokio::test]
    async fn test_resubmit_after_error_clears_error() {
        let mut service = MockRecipeService::new();
        service.expect_generate_recipe().times(0);
        let mut controller = controller(service);

        controller.submit().await;
        assert!(controller.state().error().is_some());

        controller.add_ingredient("pasta");
        controller.begin_submit().unwrap();
        assert_eq!(controller.state(), &RequestState::Loading);

        controller.complete(Ok(pasta()));
        assert_eq!(controller.state().error(), None);
    }

    #[tokio::test]
    async fn test_empty_cuisine_selection_is_omitted() {
        let mut service = MockRecipeService::new();
        service
            .expect_generate_recipe()
            .withf(|request| request.cuisine_type.is_none())
            .times(1)
            .returning(|_| Box::pin(async { Ok(Recipe::default()) }));
        let mut controller = controller(service);
        controller.add_ingredient("beans");
        controller.set_cuisine("mexican").unwrap();
        controller.set_cuisine("").unwrap();

        controller.submit().await;

        assert!(matches!(controller.state(), RequestState::Loaded(_)));
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let service = MockRecipeService::new();
        let mut controller = controller(service);

        controller.complete(Ok(pasta()));

        assert_eq!(controller.state(), &RequestState::Idle);
    }

    #[test]
    fn test_observers_track_every_change() {
        let service = MockRecipeService::new();
        let mut controller = controller(service);
        let rx = controller.subscribe();

        controller.set_pending_ingredient("leek");
        assert_eq!(rx.borrow().pending_ingredient, "leek");

        controller.add_pending_ingredient();
        controller.toggle_restriction(DietaryRestriction::Vegan);
        controller.set_servings(Servings::try_from(8).unwrap());
        controller.set_complexity(Complexity::Easy);

        assert_eq!(*rx.borrow(), controller.view());
        assert_eq!(rx.borrow().ingredients, vec!["leek".to_string()]);
        assert_eq!(rx.borrow().pending_ingredient, "");
        assert!(rx.borrow().submit_enabled);

        controller.remove_ingredient("leek");
        assert!(!rx.borrow().submit_enabled);
        assert_eq!(*rx.borrow(), controller.view());
    }
}
