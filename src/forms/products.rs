use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

/// Maximum length allowed for a product name.
const NAME_MAX_LEN: u64 = 128;

/// Maximum length allowed for a product description.
const DESCRIPTION_MAX_LEN: u64 = 2048;

/// Maximum length allowed for an image reference.
const URL_MAX_LEN: u64 = 512;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
}

/// JSON payload submitted when creating a product.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    /// Name of the product.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Localized (English) name of the product.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name_eng: String,
    /// Optional description of the product.
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description: Option<String>,
    /// Optional localized description.
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description_eng: Option<String>,
    /// Base price in the smallest currency unit; must not be negative.
    #[validate(range(min = 0))]
    pub price_cents: i64,
    /// Whether the product is orderable right away.
    #[serde(default = "default_available")]
    pub is_available: bool,
    /// Optional URL of the full-size product image.
    #[validate(length(max = URL_MAX_LEN))]
    #[serde(default)]
    pub image_url: Option<String>,
    /// Optional URL of the thumbnail image.
    #[validate(length(max = URL_MAX_LEN))]
    #[serde(default)]
    pub thumb_url: Option<String>,
}

fn default_available() -> bool {
    true
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        let name_eng = sanitize_inline_text(&self.name_eng);
        if name.is_empty() || name_eng.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let description = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());
        let description_eng = self
            .description_eng
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        let mut new_product = NewProduct::new(name, name_eng, self.price_cents)
            .with_images(normalize_url(self.image_url), normalize_url(self.thumb_url));
        new_product.description = description;
        new_product.description_eng = description_eng;
        if !self.is_available {
            new_product = new_product.unavailable();
        }

        Ok(new_product)
    }
}

/// JSON payload submitted when updating an existing product.
#[derive(Debug, Deserialize, Validate)]
pub struct EditProductForm {
    /// Updated name of the product.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Updated localized name.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name_eng: String,
    /// New description; omitting the field clears it.
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description: Option<String>,
    /// New localized description; omitting the field clears it.
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description_eng: Option<String>,
    /// Updated base price in the smallest currency unit.
    #[validate(range(min = 0))]
    pub price_cents: i64,
    /// Updated availability flag.
    pub is_available: bool,
    /// New full-size image reference; omitting the field clears it.
    #[validate(length(max = URL_MAX_LEN))]
    #[serde(default)]
    pub image_url: Option<String>,
    /// New thumbnail reference; omitting the field clears it.
    #[validate(length(max = URL_MAX_LEN))]
    #[serde(default)]
    pub thumb_url: Option<String>,
}

impl EditProductForm {
    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        let name_eng = sanitize_inline_text(&self.name_eng);
        if name.is_empty() || name_eng.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let description = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());
        let description_eng = self
            .description_eng
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        Ok(UpdateProduct {
            name,
            name_eng,
            description,
            description_eng,
            price_cents: self.price_cents,
            is_available: self.is_available,
            image_url: normalize_url(self.image_url),
            thumb_url: normalize_url(self.thumb_url),
            updated_at: chrono::Local::now().naive_utc(),
        })
    }
}

/// JSON payload submitted when assigning a product to a category.
///
/// `category_id: null` (or an absent field) clears the assignment.
#[derive(Debug, Deserialize, Validate)]
pub struct AssignCategoryForm {
    /// Target category identifier, or `None` to unassign.
    #[serde(default)]
    pub category_id: Option<i32>,
}

fn normalize_url(value: Option<String>) -> Option<String> {
    value
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}
