//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;
use restaurant_sync::{GraphQlGateway, Intent, SyncController};

use crate::store::StoreHandle;

/// Controller wired to the reactive store and the GraphQL backend
pub type BoardController = SyncController<GraphQlGateway, StoreHandle, StoreHandle>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Board state - read by components
    pub store: StoreHandle,
    /// Sync controller (not Send, lives on the UI thread)
    controller: StoredValue<BoardController, LocalStorage>,
}

impl AppContext {
    pub fn new(store: StoreHandle, controller: BoardController) -> Self {
        Self {
            store,
            controller: StoredValue::new_local(controller),
        }
    }

    /// Hand an intent to the controller; async work is spawned locally
    pub fn dispatch(&self, intent: Intent) {
        let task = self.controller.with_value(|controller| controller.handle(intent));
        if let Some(task) = task {
            spawn_local(task);
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
