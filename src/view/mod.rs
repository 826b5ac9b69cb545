mod state;

pub use state::{Phase, SearchState, SearchTicket};

use crate::error::SearchError;
use crate::model::{IngredientList, Recipe};
use crate::render::{Hero, RecipeCard, ResultSlot, Screen};
use log::{debug, info, warn};

/// Outcome of feeding a finished search back into the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The search was the latest one and its outcome is now displayed
    Applied,
    /// A newer submission exists; the outcome was dropped
    Stale,
}

/// State holder of the search screen.
///
/// The view never talks to the search service itself. Callers obtain a
/// ticket from [`SearchView::submit`], run the search, and hand the outcome
/// back through [`SearchView::complete`].
#[derive(Debug, Default)]
pub struct SearchView {
    state: SearchState,
    last_issued: u64,
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn has_searched(&self) -> bool {
        self.state.has_searched()
    }

    pub fn results(&self) -> &[Recipe] {
        self.state.results()
    }

    /// Start a new search, superseding any search still in flight
    pub fn submit(&mut self, ingredients: &IngredientList) -> SearchTicket {
        if let SearchState::Searching { ticket } = &self.state {
            debug!("Search {} superseded before it resolved", ticket);
        }

        self.last_issued += 1;
        let ticket = SearchTicket(self.last_issued);
        info!(
            "Search {} submitted with {} ingredient(s)",
            ticket,
            ingredients.len()
        );
        self.state = SearchState::Searching { ticket };
        ticket
    }

    /// Apply the outcome of the search identified by `ticket`
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<Recipe>, SearchError>,
    ) -> Completion {
        match &self.state {
            SearchState::Searching { ticket: current } if *current == ticket => {}
            _ => {
                debug!(
                    "Dropping outcome of search {} (latest is #{})",
                    ticket, self.last_issued
                );
                return Completion::Stale;
            }
        }

        self.state = match outcome {
            Ok(recipes) => {
                info!("Search {} found {} recipe(s)", ticket, recipes.len());
                SearchState::Succeeded(recipes)
            }
            Err(e) => {
                warn!("Search {} failed: {}", ticket, e);
                SearchState::Failed(e)
            }
        };
        Completion::Applied
    }

    /// Build the screen for the current state
    pub fn render(&self) -> Screen<'_> {
        let hero = (!self.has_searched()).then(Hero::default);

        let results = match &self.state {
            SearchState::Idle => ResultSlot::Empty,
            SearchState::Searching { .. } => ResultSlot::Spinner,
            SearchState::Succeeded(recipes) if recipes.is_empty() => ResultSlot::NoResults,
            SearchState::Succeeded(recipes) => {
                ResultSlot::Grid(recipes.iter().map(RecipeCard::new).collect())
            }
            SearchState::Failed(e) => ResultSlot::Error(e.user_message()),
        };

        Screen { hero, results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> IngredientList {
        items.iter().collect()
    }

    #[test]
    fn test_idle_screen_shows_hero_only() {
        let view = SearchView::new();
        let screen = view.render();
        assert!(screen.hero.is_some());
        assert_eq!(screen.results, ResultSlot::Empty);
        assert_eq!(view.state().phase(), Phase::Idle);
    }

    #[test]
    fn test_submit_enters_loading_and_drops_hero() {
        let mut view = SearchView::new();
        view.submit(&list(&["egg"]));

        assert!(view.is_loading());
        assert!(view.has_searched());
        let screen = view.render();
        assert!(screen.hero.is_none());
        assert_eq!(screen.results, ResultSlot::Spinner);
    }

    #[test]
    fn test_tickets_increase() {
        let mut view = SearchView::new();
        let first = view.submit(&list(&["a"]));
        let second = view.submit(&list(&["b"]));
        assert!(second > first);
        assert_eq!(second.sequence(), first.sequence() + 1);
    }

    #[test]
    fn test_complete_with_results() {
        let mut view = SearchView::new();
        let ticket = view.submit(&list(&["egg", "flour"]));
        let completion = view.complete(
            ticket,
            Ok(vec![Recipe::new(1, "Pancakes"), Recipe::new(2, "Crepes")]),
        );

        assert_eq!(completion, Completion::Applied);
        assert!(!view.is_loading());
        assert_eq!(view.state().phase(), Phase::LoadedWithResults);
        match view.render().results {
            ResultSlot::Grid(cards) => {
                let keys: Vec<u64> = cards.iter().map(|c| c.key()).collect();
                assert_eq!(keys, vec![1, 2]);
            }
            other => panic!("expected grid, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_with_failure_clears_loading() {
        let mut view = SearchView::new();
        let ticket = view.submit(&list(&["egg"]));
        view.complete(ticket, Err(SearchError::EmptyInput));

        assert!(!view.is_loading());
        assert!(view.has_searched());
        assert_eq!(
            view.render().results,
            ResultSlot::Error(SearchError::EmptyInput.user_message())
        );
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut view = SearchView::new();
        let first = view.submit(&list(&["a"]));
        let second = view.submit(&list(&["b"]));

        assert_eq!(
            view.complete(second, Ok(vec![Recipe::new(2, "B")])),
            Completion::Applied
        );
        assert_eq!(
            view.complete(first, Ok(vec![Recipe::new(1, "A")])),
            Completion::Stale
        );
        assert_eq!(view.results(), &[Recipe::new(2, "B")]);
    }

    #[test]
    fn test_completion_without_submission_is_stale() {
        let mut view = SearchView::new();
        assert_eq!(
            view.complete(SearchTicket(1), Ok(vec![])),
            Completion::Stale
        );
        assert_eq!(view.state().phase(), Phase::Idle);
    }

    #[test]
    fn test_duplicate_completion_is_stale() {
        let mut view = SearchView::new();
        let ticket = view.submit(&list(&["a"]));
        assert_eq!(view.complete(ticket, Ok(vec![])), Completion::Applied);
        assert_eq!(
            view.complete(ticket, Ok(vec![Recipe::new(9, "Late")])),
            Completion::Stale
        );
        assert_eq!(view.state().phase(), Phase::LoadedEmpty);
    }
}
