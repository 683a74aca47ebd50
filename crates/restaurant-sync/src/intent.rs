//! User intents emitted by the view.

use crate::model::{DraftField, RestaurantId};

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Re-fetch the list (also sent on mount)
    Refresh,
    /// A form input changed
    EditField(DraftField, String),
    /// Form submitted
    Submit,
    /// Delete button clicked on a row
    Delete(RestaurantId),
}
