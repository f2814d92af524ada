//! Recently searched recipes
//!
//! A bounded, most-recent-first list of recipes the user has seen in search
//! results. Entries are unique by recipe ID; re-adding a recipe moves it to
//! the front with a fresh timestamp. Storage problems never reach the
//! caller: reads fall back to an empty list and writes are skipped.

use std::sync::Mutex;

use chrono::Utc;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::client::Recipe;
use crate::error::StorageError;
use crate::storage::LocalStore;

/// Storage key owned by the ledger
pub const RECENT_RECIPES_KEY: &str = "eco-chef-recent-recipes";

/// Maximum number of remembered recipes
pub const MAX_RECENT_RECIPES: usize = 12;

/// A recipe plus the moment it was last seen in search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,

    /// Epoch milliseconds
    #[serde(rename = "searchedAt")]
    pub searched_at: i64,
}

/// Ledger of recently searched recipes over a [`LocalStore`]
pub struct RecentRecipes {
    store: Mutex<Box<dyn LocalStore>>,
}

impl RecentRecipes {
    pub fn new(store: Box<dyn LocalStore>) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// All entries, most recent first. Empty when storage is unusable.
    pub fn get_all(&self) -> Vec<RecentRecipe> {
        let store = match self.store.lock() {
            Ok(store) => store,
            Err(_) => {
                warn!("Recent recipes store lock poisoned");
                return Vec::new();
            }
        };

        Self::load(&**store).unwrap_or_else(|e| {
            warn!("Could not read recent recipes: {}", e);
            Vec::new()
        })
    }

    /// Remember `recipe` as searched now.
    pub fn add(&self, recipe: &Recipe) {
        self.add_at(recipe, Utc::now().timestamp_millis());
    }

    /// Remember `recipe` as searched at `searched_at` (epoch millis).
    pub fn add_at(&self, recipe: &Recipe, searched_at: i64) {
        let store = match self.store.lock() {
            Ok(store) => store,
            Err(_) => {
                warn!("Recent recipes store lock poisoned");
                return;
            }
        };

        let result = Self::load(&**store).and_then(|mut entries| {
            entries.retain(|entry| entry.recipe.id != recipe.id);
            entries.insert(
                0,
                RecentRecipe {
                    recipe: recipe.clone(),
                    searched_at,
                },
            );
            entries.truncate(MAX_RECENT_RECIPES);
            Self::persist(&**store, &entries)
        });

        if let Err(e) = result {
            warn!("Could not record recent recipe {}: {}", recipe.id, e);
        }
    }

    /// Remember every recipe in order; the last one ends up first.
    pub fn add_many(&self, recipes: &[Recipe]) {
        for recipe in recipes {
            self.add(recipe);
        }
        debug!("Recorded {} recent recipes", recipes.len());
    }

    /// Forget every entry.
    pub fn clear(&self) {
        let result = self
            .store
            .lock()
            .map_err(|_| StorageError::Poisoned)
            .and_then(|store| store.remove(RECENT_RECIPES_KEY));

        if let Err(e) = result {
            warn!("Could not clear recent recipes: {}", e);
        }
    }

    fn load(store: &dyn LocalStore) -> Result<Vec<RecentRecipe>, StorageError> {
        match store.get(RECENT_RECIPES_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => Ok(entries),
                Err(e) => {
                    // Corrupt data is replaced on the next write
                    warn!("Ignoring corrupt recent recipes: {}", e);
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    fn persist(store: &dyn LocalStore, entries: &[RecentRecipe]) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(entries).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        store.set(RECENT_RECIPES_KEY, &raw)
    }
}
