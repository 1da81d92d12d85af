use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a percentage discount scoped to product categories.
///
/// A discount applies to every product whose category appears in
/// `category_ids`, but only while `is_active` is set and the evaluation
/// instant falls inside the inclusive `available_from..=available_to` window.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CategoryDiscount {
    /// Unique identifier of the discount.
    pub id: i32,
    /// Human-readable name of the discount.
    pub name: String,
    /// Localized (English) name of the discount.
    pub name_eng: String,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// Localized (English) description.
    pub description_eng: Option<String>,
    /// Percentage taken off the base price; valid range is 0 to 100.
    pub percent_value: i32,
    /// Whether the discount is currently enabled by administrators.
    pub is_active: bool,
    /// Start of the validity window (inclusive).
    pub available_from: NaiveDateTime,
    /// End of the validity window (inclusive).
    pub available_to: NaiveDateTime,
    /// Categories the discount applies to, materialized by the repository.
    pub category_ids: Vec<i32>,
    /// Timestamp for when the discount record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the discount record.
    pub updated_at: NaiveDateTime,
}

impl CategoryDiscount {
    /// Whether the discount is enabled and its validity window contains `now`.
    pub fn is_valid_at(&self, now: NaiveDateTime) -> bool {
        self.is_active && self.available_from <= now && now <= self.available_to
    }

    /// Whether the discount applies to the given category.
    pub fn applies_to(&self, category_id: i32) -> bool {
        self.category_ids.contains(&category_id)
    }
}

/// Payload required to insert a new discount.
///
/// Discounts are written through the persistence seam only (seeding and
/// administrative tooling); there is no HTTP surface for mutating them.
#[derive(Debug, Clone)]
pub struct NewCategoryDiscount {
    /// Human-readable name of the discount.
    pub name: String,
    /// Localized (English) name of the discount.
    pub name_eng: String,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// Localized (English) description.
    pub description_eng: Option<String>,
    /// Percentage taken off the base price; valid range is 0 to 100.
    pub percent_value: i32,
    /// Whether the discount starts out enabled.
    pub is_active: bool,
    /// Start of the validity window (inclusive).
    pub available_from: NaiveDateTime,
    /// End of the validity window (inclusive).
    pub available_to: NaiveDateTime,
}

impl NewCategoryDiscount {
    /// Build a new discount payload valid over the supplied window.
    pub fn new(
        name: impl Into<String>,
        name_eng: impl Into<String>,
        percent_value: i32,
        available_from: NaiveDateTime,
        available_to: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            name_eng: name_eng.into(),
            description: None,
            description_eng: None,
            percent_value,
            is_active: true,
            available_from,
            available_to,
        }
    }

    /// Attach descriptive texts to the discount payload.
    pub fn with_description(
        mut self,
        description: impl Into<String>,
        description_eng: Option<String>,
    ) -> Self {
        self.description = Some(description.into());
        self.description_eng = description_eng;
        self
    }

    /// Create the discount in a disabled state.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Query definition used to list discounts.
#[derive(Debug, Clone, Default)]
pub struct DiscountListQuery {
    /// When set, only discounts enabled and valid at this instant are returned.
    pub valid_at: Option<NaiveDateTime>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl DiscountListQuery {
    /// Construct a query that targets all discounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the results to discounts enabled and valid at `now`.
    pub fn valid_at(mut self, now: NaiveDateTime) -> Self {
        self.valid_at = Some(now);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
