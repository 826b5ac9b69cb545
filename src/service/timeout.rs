use crate::error::SearchError;
use crate::model::{IngredientList, Recipe};
use crate::service::SearchService;
use async_trait::async_trait;
use log::warn;
use std::time::Duration;

/// Fails a search with [`SearchError::Timeout`] when the inner service is too slow
pub struct TimeoutSearchService<S> {
    inner: S,
    deadline: Duration,
}

impl<S: SearchService> TimeoutSearchService<S> {
    pub fn new(inner: S, deadline: Duration) -> Self {
        TimeoutSearchService { inner, deadline }
    }
}

#[async_trait]
impl<S: SearchService> SearchService for TimeoutSearchService<S> {
    fn service_name(&self) -> &str {
        "timeout"
    }

    async fn search(&self, ingredients: &IngredientList) -> Result<Vec<Recipe>, SearchError> {
        match tokio::time::timeout(self.deadline, self.inner.search(ingredients)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    "{} search exceeded {:?}",
                    self.inner.service_name(),
                    self.deadline
                );
                Err(SearchError::Timeout(self.deadline))
            }
        }
    }
}
