use crate::error::SearchError;
use crate::model::Recipe;
use std::fmt;

/// Sequence number handed out for every submission.
///
/// Tickets grow monotonically, so a completion carrying an older ticket than
/// the last issued one belongs to a superseded search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(pub(crate) u64);

impl SearchTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SearchTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the search screen currently is
#[derive(Debug, Default)]
pub enum SearchState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Waiting for the search identified by `ticket`
    Searching { ticket: SearchTicket },
    /// Latest search finished, possibly with no recipes
    Succeeded(Vec<Recipe>),
    /// Latest search failed
    Failed(SearchError),
}

/// Coarse condition of the screen, derived from [`SearchState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    LoadedEmpty,
    LoadedWithResults,
    Failed,
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Searching { .. })
    }

    /// Any submission happened, whatever its outcome
    pub fn has_searched(&self) -> bool {
        !matches!(self, SearchState::Idle)
    }

    /// Final results, only available once the latest search succeeded
    pub fn results(&self) -> &[Recipe] {
        match self {
            SearchState::Succeeded(recipes) => recipes,
            _ => &[],
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            SearchState::Idle => Phase::Idle,
            SearchState::Searching { .. } => Phase::Loading,
            SearchState::Succeeded(recipes) if recipes.is_empty() => Phase::LoadedEmpty,
            SearchState::Succeeded(_) => Phase::LoadedWithResults,
            SearchState::Failed(_) => Phase::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_is_derived_from_state() {
        assert_eq!(SearchState::Idle.phase(), Phase::Idle);
        assert_eq!(
            SearchState::Searching {
                ticket: SearchTicket(1)
            }
            .phase(),
            Phase::Loading
        );
        assert_eq!(SearchState::Succeeded(vec![]).phase(), Phase::LoadedEmpty);
        assert_eq!(
            SearchState::Succeeded(vec![Recipe::new(1, "Soup")]).phase(),
            Phase::LoadedWithResults
        );
        assert_eq!(
            SearchState::Failed(SearchError::EmptyInput).phase(),
            Phase::Failed
        );
    }

    #[test]
    fn test_loading_never_exposes_results() {
        let state = SearchState::Searching {
            ticket: SearchTicket(3),
        };
        assert!(state.is_loading());
        assert!(state.has_searched());
        assert!(state.results().is_empty());
    }

    #[test]
    fn test_ticket_display() {
        assert_eq!(SearchTicket(42).to_string(), "#42");
    }
}
