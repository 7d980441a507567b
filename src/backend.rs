// ABOUTME: Backend interfaces for the slidegen application
// ABOUTME: Deck creation/persistence and folder placement traits plus an in-memory backend

use crate::deck::Deck;
use crate::errors::{Result, SlideError};
use log::info;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Creates decks and persists them once generation is done
pub trait DeckService {
    /// Create an empty deck; the returned deck carries the backend's blank leading surface
    fn create_deck(&mut self, title: &str) -> Result<Deck>;

    /// Persist a finished deck and return the URL it can be reached at
    fn save_deck(&mut self, deck: &Deck) -> Result<String>;
}

/// Destination folder resolved by a placement service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: String,
    pub location: String,
}

/// Moves saved decks into destination folders
pub trait PlacementService {
    fn get_folder_by_id(&self, id: &str) -> Result<Folder>;

    /// Move a saved deck into `folder`; returns the deck's URL afterwards
    fn move_file(&mut self, file_id: &str, folder: &Folder) -> Result<String>;
}

/// Everything a generation run needs from the outside world
pub trait Backend: DeckService + PlacementService {}

impl<T: DeckService + PlacementService> Backend for T {}

/// Generate a backend-wide unique deck ID
pub fn new_deck_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[derive(Debug, Default)]
struct MemoryStore {
    decks: HashMap<String, Deck>,
    placements: HashMap<String, String>,
    folders: HashSet<String>,
    fail_create: bool,
    fail_save: bool,
    fail_move: bool,
}

/// Keeps decks in process memory; clones share the same store
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    store: Arc<Mutex<MemoryStore>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a folder that decks can be moved into
    pub fn with_folder(self, id: &str) -> Self {
        self.store.lock().folders.insert(id.to_string());
        self
    }

    /// Make every later `create_deck` call fail
    pub fn fail_create(&self) {
        self.store.lock().fail_create = true;
    }

    /// Make every later `save_deck` call fail
    pub fn fail_save(&self) {
        self.store.lock().fail_save = true;
    }

    /// Make every later `move_file` call fail
    pub fn fail_move(&self) {
        self.store.lock().fail_move = true;
    }

    pub fn deck(&self, id: &str) -> Option<Deck> {
        self.store.lock().decks.get(id).cloned()
    }

    pub fn deck_count(&self) -> usize {
        self.store.lock().decks.len()
    }

    /// Folder a deck was moved into, if any
    pub fn folder_of(&self, id: &str) -> Option<String> {
        self.store.lock().placements.get(id).cloned()
    }

    fn url(id: &str) -> String {
        format!("memory://decks/{}", id)
    }
}

impl DeckService for MemoryBackend {
    fn create_deck(&mut self, title: &str) -> Result<Deck> {
        if self.store.lock().fail_create {
            return Err(SlideError::backend("deck creation refused"));
        }
        let deck = Deck::new(new_deck_id(), title);
        info!("Created in-memory deck {} ({:?})", deck.id, title);
        Ok(deck)
    }

    fn save_deck(&mut self, deck: &Deck) -> Result<String> {
        let mut store = self.store.lock();
        if store.fail_save {
            return Err(SlideError::backend("deck save refused"));
        }
        store.decks.insert(deck.id.clone(), deck.clone());
        Ok(Self::url(&deck.id))
    }
}

impl PlacementService for MemoryBackend {
    fn get_folder_by_id(&self, id: &str) -> Result<Folder> {
        if self.store.lock().folders.contains(id) {
            Ok(Folder {
                id: id.to_string(),
                location: format!("memory://folders/{}", id),
            })
        } else {
            Err(SlideError::FolderNotFound(id.to_string()))
        }
    }

    fn move_file(&mut self, file_id: &str, folder: &Folder) -> Result<String> {
        let mut store = self.store.lock();
        if store.fail_move {
            return Err(SlideError::backend("move refused"));
        }
        if !store.decks.contains_key(file_id) {
            return Err(SlideError::DeckNotFound(file_id.to_string()));
        }
        store
            .placements
            .insert(file_id.to_string(), folder.id.clone());
        Ok(Self::url(file_id))
    }
}
