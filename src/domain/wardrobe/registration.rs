//! Write model for the item lifecycle: registration, edits, soft delete.

use super::{Category, ClothingItem, Style};
use crate::domain::foundation::{UserId, ValidationError};

/// Longest accepted item name, matching `prenda.nombre_prenda`.
pub const MAX_NAME_LEN: usize = 120;

/// A garment about to be registered.
///
/// Colors and the subcategory are given by catalogue name; the store
/// resolves them to catalogue rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClothingItem {
    pub owner: UserId,
    pub name: String,
    pub category: Category,
    pub subcategory: Option<String>,
    pub style: Style,
    pub primary_color: String,
    pub secondary_color: Option<String>,
    pub image_url: String,
}

impl NewClothingItem {
    /// Trims text fields and checks the required ones.
    pub fn validate(mut self) -> Result<Self, ValidationError> {
        self.name = required("name", &self.name)?;
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::out_of_range(
                "name",
                1,
                MAX_NAME_LEN as i64,
                self.name.chars().count() as i64,
            ));
        }
        self.primary_color = required("primaryColor", &self.primary_color)?;
        self.image_url = required("imageUrl", &self.image_url)?;
        self.subcategory = optional(self.subcategory);
        self.secondary_color = optional(self.secondary_color);
        Ok(self)
    }
}

/// Partial edit of an item; `None` fields stay as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub style: Option<Style>,
    pub secondary_color: Option<String>,
    pub active: Option<bool>,
}

impl ItemUpdate {
    /// The soft delete: the row stays, generation stops seeing it.
    pub fn deactivate() -> Self {
        Self {
            active: Some(false),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.style.is_none()
            && self.secondary_color.is_none()
            && self.active.is_none()
    }

    pub fn validate(mut self) -> Result<Self, ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::empty_field("update"));
        }
        if let Some(name) = self.name.take() {
            let name = required("name", &name)?;
            if name.chars().count() > MAX_NAME_LEN {
                return Err(ValidationError::out_of_range(
                    "name",
                    1,
                    MAX_NAME_LEN as i64,
                    name.chars().count() as i64,
                ));
            }
            self.name = Some(name);
        }
        if let Some(color) = self.secondary_color.take() {
            self.secondary_color = Some(required("secondaryColor", &color)?);
        }
        Ok(self)
    }
}

/// Inventory listing criteria; text criteria are case-insensitive
/// substring matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub style: Option<Style>,
    pub category: Option<Category>,
    pub color: Option<String>,
    pub name: Option<String>,
    pub subcategory: Option<String>,
    pub include_inactive: bool,
}

impl ItemFilter {
    pub fn matches(&self, item: &ClothingItem) -> bool {
        (self.include_inactive || item.active)
            && self.style.map_or(true, |s| item.style == s)
            && self.category.map_or(true, |c| item.category == c)
            && self.color.as_deref().map_or(true, |c| item.has_color(c))
            && self.name.as_deref().map_or(true, |n| contains(&item.name, n))
            && self.subcategory.as_deref().map_or(true, |wanted| {
                item.subcategory
                    .as_deref()
                    .is_some_and(|sub| contains(sub, wanted))
            })
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(&needle.trim().to_lowercase())
}

fn required(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
