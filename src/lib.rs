//! Find recipes from the ingredients you already have.
//!
//! The crate is organized around [`SearchView`], the state holder of the
//! search screen, and the [`SearchService`] trait that answers ingredient
//! queries. [`SearchSession`] runs both on a tokio event loop.
//!
//! # Example
//! ```no_run
//! # use flavour_hunt::{search_with_config, SearchConfig};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SearchConfig::load()?;
//! let recipes = search_with_config(&config, &["egg", "flour"]).await?;
//! println!("{} recipes", recipes.len());
//! # Ok(())
//! # }
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod interactive;
pub mod model;
pub mod render;
pub mod service;
pub mod session;
pub mod view;

pub use config::SearchConfig;
pub use error::SearchError;
pub use model::{IngredientList, Recipe};
pub use render::{RecipeCard, ResultSlot, Screen};
pub use service::{build_service, HttpSearchService, SearchService, TimeoutSearchService};
pub use session::{Event, SearchSession, Update};
pub use view::{Completion, Phase, SearchState, SearchTicket, SearchView};

/// Search recipes once, outside of any session
pub async fn search_with_config<S: AsRef<str>>(
    config: &SearchConfig,
    ingredients: &[S],
) -> Result<Vec<Recipe>, SearchError> {
    let service = build_service(config)?;
    let ingredients: IngredientList = ingredients.iter().collect();
    service.search(&ingredients).await
}
