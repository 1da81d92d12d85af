use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a decorative charm attached to a product category.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Charm {
    /// Unique identifier of the charm.
    pub id: i32,
    /// Category the charm is offered with.
    pub category_id: i32,
    /// Human-readable name of the charm.
    pub name: String,
    /// Localized (English) name of the charm.
    pub name_eng: String,
    /// Price represented in the smallest currency unit (cents).
    pub price_cents: i64,
    /// Optional URL of the charm image.
    pub image_url: Option<String>,
    /// Timestamp for when the charm record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the charm record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new charm under a category.
#[derive(Debug, Clone)]
pub struct NewCharm {
    /// Category the charm is offered with.
    pub category_id: i32,
    /// Human-readable name of the charm.
    pub name: String,
    /// Localized (English) name of the charm.
    pub name_eng: String,
    /// Price represented in the smallest currency unit (cents).
    pub price_cents: i64,
    /// Optional URL of the charm image.
    pub image_url: Option<String>,
}

impl NewCharm {
    /// Build a new charm payload with the supplied details.
    pub fn new(
        category_id: i32,
        name: impl Into<String>,
        name_eng: impl Into<String>,
        price_cents: i64,
    ) -> Self {
        Self {
            category_id,
            name: name.into(),
            name_eng: name_eng.into(),
            price_cents,
            image_url: None,
        }
    }

    /// Attach an image reference to the charm payload.
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}
