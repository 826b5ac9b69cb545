//! Event loop tying the ingredient collector, the search view and the
//! search service together.
//!
//! Searches run as spawned tasks and report back through a channel, so the
//! loop keeps accepting submissions while a search is in flight. Outcomes of
//! superseded searches are dropped by the view.

use crate::model::{IngredientList, Recipe};
use crate::service::SearchService;
use crate::view::{Completion, SearchTicket, SearchView};
use crate::SearchError;
use log::debug;
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Input to the session loop
#[derive(Debug)]
pub enum Event {
    /// The collector finalized an ingredient list
    Submitted(IngredientList),
    /// A search task finished
    Resolved {
        ticket: SearchTicket,
        outcome: Result<Vec<Recipe>, SearchError>,
    },
}

/// What processing one event changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    Submitted(SearchTicket),
    Resolved(SearchTicket, Completion),
}

pub struct SearchSession {
    view: SearchView,
    service: Arc<dyn SearchService>,
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
}

impl SearchSession {
    pub fn new(service: Arc<dyn SearchService>) -> Self {
        let (tx, rx) = unbounded_channel();
        SearchSession {
            view: SearchView::new(),
            service,
            tx,
            rx,
        }
    }

    pub fn view(&self) -> &SearchView {
        &self.view
    }

    /// Handle for posting events from outside the loop, e.g. an input reader
    pub fn sender(&self) -> UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Start a search; its outcome arrives later as [`Event::Resolved`]
    pub fn submit(&mut self, ingredients: IngredientList) -> SearchTicket {
        let ticket = self.view.submit(&ingredients);
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            debug!("Search {} dispatched to {}", ticket, service.service_name());
            let outcome = service.search(&ingredients).await;
            // Receiver only goes away with the session itself
            let _ = tx.send(Event::Resolved { ticket, outcome });
        });

        ticket
    }

    /// Apply one event to the view
    pub fn handle(&mut self, event: Event) -> Update {
        match event {
            Event::Submitted(ingredients) => Update::Submitted(self.submit(ingredients)),
            Event::Resolved { ticket, outcome } => {
                Update::Resolved(ticket, self.view.complete(ticket, outcome))
            }
        }
    }

    /// Wait for the next event and apply it
    pub async fn next_event(&mut self) -> Option<Update> {
        let event = self.rx.recv().await?;
        Some(self.handle(event))
    }

    /// Process events until no search is in flight
    pub async fn settle(&mut self) {
        while self.view.is_loading() {
            if self.next_event().await.is_none() {
                break;
            }
        }
    }

    /// Submit and wait for the outcome of this search
    pub async fn search(&mut self, ingredients: IngredientList) -> &SearchView {
        self.submit(ingredients);
        self.settle().await;
        &self.view
    }
}
