//! Restaurant Sync Core
//!
//! Everything the restaurant board does besides drawing:
//! - model: restaurant records and the form draft
//! - config: backend settings and credentials
//! - gateway: list/create/delete against the GraphQL backend
//! - store: list and draft containers
//! - pending: ledger of optimistic deletes
//! - controller: the three actions and the intents that trigger them

mod config;
mod controller;
mod error;
mod gateway;
mod intent;
mod model;
mod pending;
mod store;


pub use config::{id_token_from_fragment, AuthenticationType, BackendConfig, Credentials, HostedUi};
pub use controller::{PendingDelete, SyncController};
pub use error::{ConfigError, RemoteError};
pub use gateway::{GraphQlGateway, RestaurantGateway};
pub use intent::Intent;
pub use model::{Draft, DraftField, EmptyIdError, Restaurant, RestaurantId};
pub use pending::{OperationId, OperationStatus, PendingOperation, PendingOperations};
pub use store::{DraftState, DraftStore, ListState, ListStateStore};
