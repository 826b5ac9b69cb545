use crate::config::ServiceConfig;
use crate::error::SearchError;
use crate::model::{IngredientList, Recipe};
use crate::service::SearchService;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;

pub struct HttpSearchService {
    client: Client,
    api_key: String,
    base_url: String,
    max_results: u32,
    ranking: u8,
    ignore_pantry: bool,
}

impl HttpSearchService {
    /// Create a new HTTP search service from configuration
    pub fn new(config: &ServiceConfig) -> Result<Self, SearchError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
            .ok_or_else(|| {
                SearchError::Builder(
                    "SPOONACULAR_API_KEY not found in config or environment".to_string(),
                )
            })?;

        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; FlavourHunt/0.1)")
            .build()?;

        Ok(HttpSearchService {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_results: config.max_results,
            ranking: config.ranking,
            ignore_pantry: config.ignore_pantry,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        HttpSearchService {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_results: 12,
            ranking: 1,
            ignore_pantry: true,
        }
    }
}

#[async_trait]
impl SearchService for HttpSearchService {
    fn service_name(&self) -> &str {
        "http"
    }

    async fn search(&self, ingredients: &IngredientList) -> Result<Vec<Recipe>, SearchError> {
        if ingredients.is_empty() {
            return Err(SearchError::EmptyInput);
        }

        debug!("Searching recipes for [{}]", ingredients.joined());
        let response = self
            .client
            .get(format!("{}/recipes/findByIngredients", self.base_url))
            .query(&[
                ("ingredients", ingredients.joined()),
                ("number", self.max_results.to_string()),
                ("ranking", self.ranking.to_string()),
                ("ignorePantry", self.ignore_pantry.to_string()),
                ("apiKey", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        if !body.is_array() {
            return Err(SearchError::Decode(format!(
                "expected a list of recipes, got: {}",
                body
            )));
        }

        let recipes: Vec<Recipe> =
            serde_json::from_value(body).map_err(|e| SearchError::Decode(e.to_string()))?;
        debug!("Search returned {} recipes", recipes.len());
        Ok(recipes)
    }
}
