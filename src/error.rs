use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while searching recipes by ingredients
#[derive(Error, Debug)]
pub enum SearchError {
    /// The search service could not be reached or answered with an error status
    #[error("Search request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The service refused to search without any ingredient
    #[error("No ingredients given")]
    EmptyInput,

    /// The search did not complete before the deadline
    #[error("Search timed out after {0:?}")]
    Timeout(Duration),

    /// The response body was not a list of recipes
    #[error("Failed to decode search response: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Service construction error
    #[error("Builder error: {0}")]
    Builder(String),
}

impl SearchError {
    /// Short message shown in place of the result grid
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Network(_) => {
                "Could not reach the recipe service. Please try again.".to_string()
            }
            SearchError::EmptyInput => "Add at least one ingredient to search.".to_string(),
            SearchError::Timeout(_) => "The recipe search took too long. Please try again.".to_string(),
            SearchError::Decode(_) => "The recipe service sent an unexpected answer.".to_string(),
            SearchError::Config(e) => format!("Search is misconfigured: {}", e),
            SearchError::Builder(msg) => format!("Search is misconfigured: {}", msg),
        }
    }
}
