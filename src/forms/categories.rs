use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::forms::sanitize_inline_text;

/// Maximum length allowed for a category name.
const NAME_MAX_LEN: u64 = 128;

/// Result type returned by the category form helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category payloads.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("category name cannot be empty")]
    EmptyName,
}

/// JSON payload submitted when creating a category.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    /// Name of the category.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Localized (English) name of the category.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name_eng: String,
}

impl AddCategoryForm {
    /// Validates and sanitizes the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> CategoryFormResult<NewCategory> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        let name_eng = sanitize_inline_text(&self.name_eng);
        if name.is_empty() || name_eng.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        Ok(NewCategory::new(name, name_eng))
    }
}

/// JSON payload submitted when renaming a category.
#[derive(Debug, Deserialize, Validate)]
pub struct EditCategoryForm {
    /// Updated name of the category.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Updated localized name.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name_eng: String,
}

impl EditCategoryForm {
    /// Validates and sanitizes the payload into a domain `UpdateCategory`.
    pub fn into_update_category(self) -> CategoryFormResult<UpdateCategory> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        let name_eng = sanitize_inline_text(&self.name_eng);
        if name.is_empty() || name_eng.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        Ok(UpdateCategory::new(name, name_eng))
    }
}
