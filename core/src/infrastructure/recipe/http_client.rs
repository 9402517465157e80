use reqwest::{Client, Response};
use serde::{Deserialize, de::DeserializeOwned};

use crate::domain::{
    common::{RecipeConfig, entities::app_errors::CoreError},
    recipe::{
        entities::{Recipe, RecipeRequest},
        ports::RecipeService,
        value_objects::DietaryRestriction,
    },
};

#[derive(Debug, Clone)]
pub struct HttpRecipeService {
    config: RecipeConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubstitutesResponse {
    #[serde(default)]
    substitutes: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PairingsResponse {
    #[serde(default)]
    pairings: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CuisinesResponse {
    #[serde(default)]
    cuisines: Vec<String>,
}

impl HttpRecipeService {
    pub fn new(config: RecipeConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, CoreError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            tracing::error!("Recipe service error: {} - {}", status, body);
            return Err(CoreError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read recipe service response: {}", e);
            CoreError::Transport(e.to_string())
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Failed to parse recipe service response: {}", e);
            CoreError::InvalidResponse(e.to_string())
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CoreError> {
        let url = self.config.endpoint(path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Recipe service request to {} failed: {}", url, e);
                CoreError::Transport(e.to_string())
            })?;

        Self::read_json(response).await
    }

    fn require_ingredient(ingredient: &str) -> Result<&str, CoreError> {
        let ingredient = ingredient.trim();
        if ingredient.is_empty() {
            return Err(CoreError::Validation("No ingredient provided".to_string()));
        }
        Ok(ingredient)
    }
}

impl RecipeService for HttpRecipeService {
    async fn generate_recipe(&self, request: RecipeRequest) -> Result<Recipe, CoreError> {
        let url = self.config.endpoint("generate-recipe");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Recipe generation request failed: {}", e);
                CoreError::Transport(e.to_string())
            })?;

        Self::read_json(response).await
    }

    async fn suggest_substitutes(
        &self,
        ingredient: String,
        dietary_restrictions: Vec<DietaryRestriction>,
    ) -> Result<Vec<String>, CoreError> {
        let ingredient = Self::require_ingredient(&ingredient)?;

        let mut query = vec![("ingredient", ingredient)];
        query.extend(
            dietary_restrictions
                .iter()
                .map(|r| ("dietary_restrictions", r.as_str())),
        );

        let response: SubstitutesResponse = self.get("ingredient-substitutes", &query).await?;
        Ok(response.substitutes)
    }

    async fn suggest_pairings(&self, ingredient: String) -> Result<Vec<String>, CoreError> {
        let ingredient = Self::require_ingredient(&ingredient)?;

        let response: PairingsResponse = self
            .get("ingredient-pairings", &[("ingredient", ingredient)])
            .await?;
        Ok(response.pairings)
    }

    async fn list_cuisines(&self) -> Result<Vec<String>, CoreError> {
        let response: CuisinesResponse = self.get("cuisines", &[]).await?;
        Ok(response.cuisines)
    }
}
