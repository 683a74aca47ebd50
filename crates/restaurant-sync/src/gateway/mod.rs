//! Remote Data Gateway
//!
//! The three backend operations the board needs. Implementations own
//! transport and auth; callers only see records and [`RemoteError`].

mod graphql;

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::model::{Draft, Restaurant, RestaurantId};

pub use graphql::GraphQlGateway;

/// Backend operations on restaurant records
///
/// Futures are `?Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait RestaurantGateway {
    /// Fetch every restaurant in server order
    async fn list_all(&self) -> Result<Vec<Restaurant>, RemoteError>;

    /// Persist a new restaurant; the server assigns the id
    async fn create_one(&self, draft: &Draft) -> Result<Restaurant, RemoteError>;

    /// Delete the restaurant with the given id
    async fn delete_one(&self, id: &RestaurantId) -> Result<(), RemoteError>;
}
