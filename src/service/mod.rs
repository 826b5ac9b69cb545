mod http;
mod timeout;

pub use http::HttpSearchService;
pub use timeout::TimeoutSearchService;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::model::{IngredientList, Recipe};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Maps an ingredient list to matching recipes
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Get the service name (e.g., "http", "timeout")
    fn service_name(&self) -> &str;

    /// Search recipes that can be cooked from the given ingredients
    async fn search(&self, ingredients: &IngredientList) -> Result<Vec<Recipe>, SearchError>;
}

/// Build the configured HTTP search service with its deadline applied
pub fn build_service(config: &SearchConfig) -> Result<Arc<dyn SearchService>, SearchError> {
    let http = HttpSearchService::new(&config.service)?;
    Ok(Arc::new(TimeoutSearchService::new(
        http,
        Duration::from_secs(config.timeout),
    )))
}
