// src/application/repository.rs
use tokio::sync::watch;
use tracing::{debug, instrument, trace, warn};

use crate::application::NoteStore;
use crate::domain::{DomainError, Note};

/// Which result set a live query tracks
#[derive(Debug, Clone, PartialEq, Eq)]
enum LiveQuery {
    All,
    Search(String),
}

/// Handle to a result set that is re-published after every mutation
#[derive(Debug, Clone)]
pub struct LiveNotes {
    receiver: watch::Receiver<Vec<Note>>,
}

impl LiveNotes {
    /// Latest published result
    pub fn current(&self) -> Vec<Note> {
        self.receiver.borrow().clone()
    }

    /// Latest result, marking it as seen
    pub fn take(&mut self) -> Vec<Note> {
        self.receiver.borrow_and_update().clone()
    }

    /// True when a result was published since the last `take`
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }
}

struct Subscription {
    query: LiveQuery,
    sender: watch::Sender<Vec<Note>>,
}

/// Pass-through adapter over a [`NoteStore`] adding live queries
pub struct NoteRepository<S: NoteStore> {
    store: S,
    subscriptions: Vec<Subscription>,
}

impl<S: NoteStore> NoteRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            subscriptions: Vec::new(),
        }
    }

    /// Mutations report only the store's result. A live query that fails to
    /// refresh afterwards keeps its previous value.
    pub fn insert_note(&mut self, note: &Note) -> Result<i64, DomainError> {
        let id = self.store.insert_note(note)?;
        self.publish();
        Ok(id)
    }

    pub fn update_note(&mut self, note: &Note) -> Result<(), DomainError> {
        self.store.update_note(note)?;
        self.publish();
        Ok(())
    }

    pub fn delete_note(&mut self, id: i64) -> Result<(), DomainError> {
        self.store.delete_note(id)?;
        self.publish();
        Ok(())
    }

    pub fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.store.get_note(id)
    }

    pub fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        self.store.list_notes()
    }

    pub fn search_notes(&mut self, pattern: &str) -> Result<Vec<Note>, DomainError> {
        self.store.search_notes(pattern)
    }

    pub fn find_by_title(&mut self, title: &str) -> Result<Vec<Note>, DomainError> {
        self.store.find_by_title(title)
    }

    /// Live list of all notes, most recent first
    pub fn all_notes(&mut self) -> Result<LiveNotes, DomainError> {
        self.subscribe(LiveQuery::All)
    }

    /// Live list of notes matching `pattern`
    pub fn search(&mut self, pattern: &str) -> Result<LiveNotes, DomainError> {
        self.subscribe(LiveQuery::Search(pattern.to_string()))
    }

    #[instrument(level = "debug", skip(self))]
    fn subscribe(&mut self, query: LiveQuery) -> Result<LiveNotes, DomainError> {
        let initial = self.run(&query)?;
        let (sender, receiver) = watch::channel(initial);
        self.subscriptions.push(Subscription { query, sender });
        Ok(LiveNotes { receiver })
    }

    fn run(&mut self, query: &LiveQuery) -> Result<Vec<Note>, DomainError> {
        match query {
            LiveQuery::All => self.store.list_notes(),
            LiveQuery::Search(pattern) => self.store.search_notes(pattern),
        }
    }

    fn publish(&mut self) {
        self.subscriptions.retain(|sub| !sub.sender.is_closed());
        debug!(live_queries = self.subscriptions.len(), "Publishing note changes");

        for index in 0..self.subscriptions.len() {
            let query = self.subscriptions[index].query.clone();
            match self.run(&query) {
                Ok(notes) => {
                    trace!(?query, count = notes.len(), "Refreshed live query");
                    self.subscriptions[index].sender.send_replace(notes);
                }
                Err(e) => warn!(?query, error = %e, "Failed to refresh live query"),
            }
        }
    }
}
