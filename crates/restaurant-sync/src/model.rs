//! Restaurant Models
//!
//! Record shape shared with the remote backend, plus the draft being typed
//! into the form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned restaurant identifier.
///
/// Opaque to the client and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RestaurantId(String);

/// Returned when an identifier would be empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("restaurant id must not be empty")]
pub struct EmptyIdError;

impl RestaurantId {
    pub fn new(id: impl Into<String>) -> Result<Self, EmptyIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(EmptyIdError);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RestaurantId {
    type Error = EmptyIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RestaurantId> for String {
    fn from(id: RestaurantId) -> Self {
        id.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Restaurant record as held by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub description: String,
    pub city: String,
}

/// Unsaved restaurant being edited in the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub description: String,
    pub city: String,
}

/// One editable field of a [`Draft`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Description,
    City,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Name, DraftField::Description, DraftField::City];

    /// Placeholder shown in the empty input
    pub fn placeholder(self) -> &'static str {
        match self {
            DraftField::Name => "Restaurant Name",
            DraftField::Description => "Description",
            DraftField::City => "Restaurant City",
        }
    }
}

impl Draft {
    pub fn new(name: impl Into<String>, description: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            city: city.into(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::City => &self.city,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Description => self.description = value,
            DraftField::City => self.city = value,
        }
    }

    /// All three fields filled in (the form's required gate)
    pub fn is_complete(&self) -> bool {
        DraftField::ALL.iter().all(|f| !self.field(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_id_rejected() {
        assert_eq!(RestaurantId::new(""), Err(EmptyIdError));
        assert_eq!(RestaurantId::new("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_empty_id_rejected_on_deserialize() {
        let json = r#"{"id":"","name":"A","description":"d","city":"c"}"#;
        assert!(serde_json::from_str::<Restaurant>(json).is_err());
    }

    #[test]
    fn test_draft_completeness() {
        let mut draft = Draft::default();
        assert!(!draft.is_complete());

        draft.set(DraftField::Name, "Pho 99".to_string());
        draft.set(DraftField::Description, "Noodles".to_string());
        assert!(!draft.is_complete());

        draft.set(DraftField::City, "Austin".to_string());
        assert!(draft.is_complete());
        assert_eq!(draft.field(DraftField::City), "Austin");
    }
}
