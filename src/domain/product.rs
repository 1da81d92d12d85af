use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Localized (English) name of the product.
    pub name_eng: String,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// Localized (English) description.
    pub description_eng: Option<String>,
    /// Base price represented in the smallest currency unit (cents).
    pub price_cents: i64,
    /// Whether the product can currently be ordered.
    pub is_available: bool,
    /// Optional URL of the full-size product image.
    pub image_url: Option<String>,
    /// Optional URL of the thumbnail image.
    pub thumb_url: Option<String>,
    /// Category the product belongs to; assigned after creation, may be unset.
    pub category_id: Option<i32>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Localized (English) name of the product.
    pub name_eng: String,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// Localized (English) description.
    pub description_eng: Option<String>,
    /// Base price represented in the smallest currency unit (cents).
    pub price_cents: i64,
    /// Whether the product can currently be ordered.
    pub is_available: bool,
    /// Optional URL of the full-size product image.
    pub image_url: Option<String>,
    /// Optional URL of the thumbnail image.
    pub thumb_url: Option<String>,
}

impl NewProduct {
    /// Build a new product payload with the supplied name and base price.
    pub fn new(name: impl Into<String>, name_eng: impl Into<String>, price_cents: i64) -> Self {
        Self {
            name: name.into(),
            name_eng: name_eng.into(),
            description: None,
            description_eng: None,
            price_cents,
            is_available: true,
            image_url: None,
            thumb_url: None,
        }
    }

    /// Attach descriptive texts to the product payload.
    pub fn with_description(
        mut self,
        description: impl Into<String>,
        description_eng: Option<String>,
    ) -> Self {
        self.description = Some(description.into());
        self.description_eng = description_eng;
        self
    }

    /// Attach image references to the product payload.
    pub fn with_images(mut self, image_url: Option<String>, thumb_url: Option<String>) -> Self {
        self.image_url = image_url;
        self.thumb_url = thumb_url;
        self
    }

    /// Mark the product as unavailable for ordering.
    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    /// Updated name for the product.
    pub name: String,
    /// Updated localized name.
    pub name_eng: String,
    /// New description value; `None` clears the description.
    pub description: Option<String>,
    /// New localized description; `None` clears it.
    pub description_eng: Option<String>,
    /// Updated base price in the smallest currency unit.
    pub price_cents: i64,
    /// Updated availability flag.
    pub is_available: bool,
    /// New full-size image reference; `None` clears it.
    pub image_url: Option<String>,
    /// New thumbnail reference; `None` clears it.
    pub thumb_url: Option<String>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

/// Query definition used to list products.
#[derive(Debug, Clone)]
pub struct ProductListQuery {
    /// Optional name or description search term.
    pub search: Option<String>,
    /// Restrict the results to a single category.
    pub category_id: Option<i32>,
    /// Whether unavailable products should be included in the results.
    pub include_unavailable: bool,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductListQuery {
    /// Construct a query that targets all available products.
    pub fn new() -> Self {
        Self {
            search: None,
            category_id: None,
            include_unavailable: false,
            pagination: None,
        }
    }

    /// Filter the results by a search term applied to the name or description.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restrict the results to products assigned to `category_id`.
    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Include unavailable products in the results.
    pub fn include_unavailable(mut self) -> Self {
        self.include_unavailable = true;
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
