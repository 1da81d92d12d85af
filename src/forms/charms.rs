use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::charm::NewCharm;
use crate::forms::sanitize_inline_text;

/// Maximum length allowed for a charm name.
const NAME_MAX_LEN: u64 = 128;

/// Maximum length allowed for an image reference.
const URL_MAX_LEN: u64 = 512;

/// Result type returned by the charm form helpers.
pub type CharmFormResult<T> = Result<T, CharmFormError>;

/// Errors that can occur while processing charm payloads.
#[derive(Debug, Error)]
pub enum CharmFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("charm name cannot be empty")]
    EmptyName,
}

/// JSON payload submitted when adding a charm to a category.
///
/// The target category comes from the request path, not the body.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCharmForm {
    /// Name of the charm.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Localized (English) name of the charm.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name_eng: String,
    /// Price in the smallest currency unit; must not be negative.
    #[validate(range(min = 0))]
    pub price_cents: i64,
    /// Optional URL of the charm image.
    #[validate(length(max = URL_MAX_LEN))]
    #[serde(default)]
    pub image_url: Option<String>,
}

impl AddCharmForm {
    /// Validates and sanitizes the payload into a domain `NewCharm`.
    pub fn into_new_charm(self, category_id: i32) -> CharmFormResult<NewCharm> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        let name_eng = sanitize_inline_text(&self.name_eng);
        if name.is_empty() || name_eng.is_empty() {
            return Err(CharmFormError::EmptyName);
        }

        let mut new_charm = NewCharm::new(category_id, name, name_eng, self.price_cents);
        if let Some(image_url) = self
            .image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
        {
            new_charm = new_charm.with_image(image_url);
        }

        Ok(new_charm)
    }
}
