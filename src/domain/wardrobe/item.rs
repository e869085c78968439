//! Clothing item as seen by the outfit engine.

use serde::{Deserialize, Serialize};

use super::{Category, ColorRef, Style};
use crate::domain::foundation::{ItemId, UserId};

/// A single garment (`prenda`) owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: ItemId,
    pub owner: UserId,
    pub name: String,
    pub category: Category,
    /// Subcategory display name, a free catalogue reference.
    pub subcategory: Option<String>,
    pub style: Style,
    pub primary_color: ColorRef,
    pub secondary_color: Option<ColorRef>,
    /// Opaque URL handed out by the image store.
    pub image_url: String,
    /// Soft-delete flag; inactive items never take part in generation.
    pub active: bool,
    pub favorite: bool,
}

impl ClothingItem {
    /// True when the primary color name contains `wanted`.
    pub fn has_color(&self, wanted: &str) -> bool {
        self.primary_color.matches(wanted)
    }

    /// True when the primary color is one of `palette`.
    pub fn has_color_in(&self, palette: &[&str]) -> bool {
        palette
            .iter()
            .any(|name| self.primary_color.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Builds an active item with neutral defaults.
    pub fn item(id: i64, category: Category, style: Style) -> ClothingItem {
        ClothingItem {
            id: ItemId::new(id),
            owner: UserId::new(1).unwrap(),
            name: format!("{} #{}", category.display_name(), id),
            category,
            subcategory: None,
            style,
            primary_color: ColorRef::new(1, "Negro"),
            secondary_color: None,
            image_url: format!("https://img.example.com/{}.jpg", id),
            active: true,
            favorite: false,
        }
    }
}
