//! Meal categories and slug derivation.

use serde::{Deserialize, Serialize};

use crate::id::CategoryId;

/// Admin-owned meal category.
///
/// `counts.meals` is populated by the backend on list endpoints; a category
/// with associated meals must not be deletable from any view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "_count", default, skip_serializing_if = "Option::is_none")]
    pub counts: Option<CategoryCounts>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub meals: u64,
}

impl Category {
    /// Number of meals listed under this category (0 when the backend did
    /// not include counts).
    pub fn meal_count(&self) -> u64 {
        self.counts.map(|c| c.meals).unwrap_or(0)
    }

    /// Whether the delete action may be offered for this category.
    pub fn can_delete(&self) -> bool {
        self.meal_count() == 0
    }
}

/// Payload for creating or replacing a category. When `slug` is `None` it is
/// derived from `name`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CategoryInput {
    pub fn new(name: impl Into<String>, slug: Option<String>, image_url: Option<String>) -> Self {
        let name = name.into();
        let slug = slug.unwrap_or_else(|| derive_slug(&name));
        Self {
            name,
            slug,
            image_url,
        }
    }
}

/// Derive a URL slug from a display name: lowercased, runs of
/// non-alphanumeric characters collapsed to a single hyphen, no leading or
/// trailing hyphen.
pub fn derive_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
