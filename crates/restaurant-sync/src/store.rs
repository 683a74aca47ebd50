//! List and Draft Stores
//!
//! Containers the controller writes and the view reads. Handles are
//! shared (`&self` mutation) the same way reactive store handles are,
//! so the UI can implement these traits on its own store.

use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{Draft, DraftField, Restaurant, RestaurantId};

/// Ordered restaurants currently believed to exist
pub trait ListStateStore {
    /// Current contents, in server order
    fn snapshot(&self) -> Vec<Restaurant>;

    /// Replace the whole list
    fn replace(&self, restaurants: Vec<Restaurant>);

    /// Drop every entry with this id, returning how many were removed
    fn remove(&self, id: &RestaurantId) -> usize;
}

/// Field values of the new-restaurant form
pub trait DraftStore {
    fn draft(&self) -> Draft;

    fn set_field(&self, field: DraftField, value: String);

    /// Back to all-empty fields
    fn reset(&self);
}

/// In-memory [`ListStateStore`]
#[derive(Debug, Clone, Default)]
pub struct ListState {
    restaurants: Rc<RefCell<Vec<Restaurant>>>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.restaurants.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.borrow().is_empty()
    }

    pub fn contains(&self, id: &RestaurantId) -> bool {
        self.restaurants.borrow().iter().any(|r| &r.id == id)
    }
}

impl ListStateStore for ListState {
    fn snapshot(&self) -> Vec<Restaurant> {
        self.restaurants.borrow().clone()
    }

    fn replace(&self, restaurants: Vec<Restaurant>) {
        *self.restaurants.borrow_mut() = restaurants;
    }

    fn remove(&self, id: &RestaurantId) -> usize {
        let mut restaurants = self.restaurants.borrow_mut();
        let before = restaurants.len();
        restaurants.retain(|r| &r.id != id);
        before - restaurants.len()
    }
}

/// In-memory [`DraftStore`]
#[derive(Debug, Clone, Default)]
pub struct DraftState {
    draft: Rc<RefCell<Draft>>,
}

impl DraftState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for DraftState {
    fn draft(&self) -> Draft {
        self.draft.borrow().clone()
    }

    fn set_field(&self, field: DraftField, value: String) {
        self.draft.borrow_mut().set(field, value);
    }

    fn reset(&self) {
        *self.draft.borrow_mut() = Draft::default();
    }
}
