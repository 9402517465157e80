use url::Url;

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Clone, Debug)]
pub struct RecipeConfig {
    pub api_url: Url,
}

impl RecipeConfig {
    pub fn new(api_url: &str) -> Result<Self, CoreError> {
        let trimmed = api_url.trim();
        let raw = if trimmed.is_empty() {
            DEFAULT_API_URL
        } else {
            trimmed
        };

        let api_url = Url::parse(raw)
            .map_err(|e| CoreError::InvalidConfig(format!("invalid api url {raw:?}: {e}")))?;

        if api_url.cannot_be_a_base() {
            return Err(CoreError::InvalidConfig(format!(
                "api url {raw:?} cannot be used as a base"
            )));
        }

        Ok(Self { api_url })
    }

    /// Absolute URL of an endpoint below the configured base.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_path() {
        let config = RecipeConfig::new("http://localhost:5000/api").unwrap();
        assert_eq!(
            config.endpoint("/generate-recipe"),
            "http://localhost:5000/api/generate-recipe"
        );

        let trailing = RecipeConfig::new("https://recipes.example.com/api/").unwrap();
        assert_eq!(
            trailing.endpoint("cuisines"),
            "https://recipes.example.com/api/cuisines"
        );
    }

    #[test]
    fn test_blank_url_uses_default() {
        let config = RecipeConfig::new("   ").unwrap();
        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
    }

    #[test]
    fn test_rejects_garbage_url() {
        assert!(matches!(
            RecipeConfig::new("not a url"),
            Err(CoreError::InvalidConfig(_))
        ));
        assert!(matches!(
            RecipeConfig::new("mailto:chef@example.com"),
            Err(CoreError::InvalidConfig(_))
        ));
    }
}
