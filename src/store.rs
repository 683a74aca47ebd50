//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The sync
//! controller writes through [`StoreHandle`]; components read from it.

use leptos::prelude::*;
use reactive_stores::Store;
use restaurant_sync::{Draft, DraftField, DraftStore, ListStateStore, Restaurant, RestaurantId};

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Restaurants in server order
    pub restaurants: Vec<Restaurant>,
    /// New-restaurant form fields
    pub draft: Draft,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Copyable handle the controller and components share
#[derive(Clone, Copy)]
pub struct StoreHandle(AppStore);

impl StoreHandle {
    pub fn new() -> Self {
        Self(Store::new(AppState::default()))
    }

    /// Tracked read for views
    pub fn restaurants(&self) -> Vec<Restaurant> {
        self.0.restaurants().get()
    }

    pub fn restaurant_count(&self) -> usize {
        self.0.restaurants().read().len()
    }

    /// Tracked read of one form field
    pub fn field(&self, field: DraftField) -> String {
        self.0.draft().read().field(field).to_string()
    }

    pub fn draft_is_complete(&self) -> bool {
        self.0.draft().read_untracked().is_complete()
    }
}

// ========================
// Sync Store Implementations
// ========================

impl ListStateStore for StoreHandle {
    fn snapshot(&self) -> Vec<Restaurant> {
        self.0.restaurants().get_untracked()
    }

    fn replace(&self, restaurants: Vec<Restaurant>) {
        self.0.restaurants().set(restaurants);
    }

    fn remove(&self, id: &RestaurantId) -> usize {
        let binding = self.0.restaurants();
        let mut restaurants = binding.write();
        let before = restaurants.len();
        restaurants.retain(|r| &r.id != id);
        before - restaurants.len()
    }
}

impl DraftStore for StoreHandle {
    fn draft(&self) -> Draft {
        self.0.draft().get_untracked()
    }

    fn set_field(&self, field: DraftField, value: String) {
        self.0.draft().write().set(field, value);
    }

    fn reset(&self) {
        self.0.draft().set(Draft::default());
    }
}
