use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a flat product category.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name of the category.
    pub name: String,
    /// Localized (English) name of the category.
    pub name_eng: String,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub name: String,
    /// Localized (English) name of the category.
    pub name_eng: String,
}

impl NewCategory {
    /// Build a new category payload with trimmed names.
    pub fn new(name: impl Into<String>, name_eng: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            name_eng: name_eng.into().trim().to_string(),
        }
    }
}

/// Patch data applied when updating an existing category.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategory {
    /// Updated name for the category.
    pub name: String,
    /// Updated localized name.
    pub name_eng: String,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateCategory {
    /// Build a category update payload with the supplied values.
    pub fn new(name: String, name_eng: String) -> Self {
        Self {
            name,
            name_eng,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}

/// Query definition used to list categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    /// Optional case-insensitive substring search applied to category names.
    pub search: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl CategoryListQuery {
    /// Construct a query that targets all categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the names.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
