//! HTTP DTOs for item endpoints.
//!
//! The registration body also accepts the column names the upload form
//! posts (`nombre_prenda`, `color_principal`, `ruta`, ...).

use serde::{Deserialize, Serialize};

use crate::adapters::http::outfit::{parse_style_filter, OutfitItemResponse};
use crate::domain::foundation::{UserId, ValidationError};
use crate::domain::wardrobe::{Category, ClothingItem, ItemFilter, ItemUpdate, NewClothingItem};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterItemRequest {
    #[serde(alias = "nombre_prenda")]
    pub name: String,
    #[serde(alias = "nombre_categoria")]
    pub category: String,
    #[serde(default, alias = "nombre_subcategoria")]
    pub subcategory: Option<String>,
    #[serde(alias = "estilo")]
    pub style: String,
    #[serde(alias = "color_principal")]
    pub primary_color: String,
    #[serde(default, alias = "color_secundario")]
    pub secondary_color: Option<String>,
    #[serde(alias = "ruta")]
    pub image_url: String,
}

impl RegisterItemRequest {
    pub fn into_new_item(self, owner: UserId) -> Result<NewClothingItem, ValidationError> {
        Ok(NewClothingItem {
            owner,
            name: self.name,
            category: self.category.parse()?,
            subcategory: self.subcategory,
            style: self.style.parse()?,
            primary_color: self.primary_color,
            secondary_color: self.secondary_color,
            image_url: self.image_url,
        })
    }
}

/// Query parameters of `GET /api/items`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemListQuery {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub include_inactive: bool,
}

impl ItemListQuery {
    pub fn into_filter(self) -> Result<ItemFilter, ValidationError> {
        let category = match non_blank(self.category) {
            Some(name) => Some(name.parse::<Category>()?),
            None => None,
        };
        Ok(ItemFilter {
            style: parse_style_filter(self.style.as_deref())?,
            category,
            color: non_blank(self.color),
            name: non_blank(self.name),
            subcategory: non_blank(self.subcategory),
            include_inactive: self.include_inactive,
        })
    }
}

/// Partial edit; absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[serde(default, alias = "nombre_prenda")]
    pub name: Option<String>,
    #[serde(default, alias = "estilo")]
    pub style: Option<String>,
    #[serde(default, alias = "color_secundario")]
    pub secondary_color: Option<String>,
    #[serde(default, alias = "status")]
    pub active: Option<bool>,
}

impl UpdateItemRequest {
    pub fn into_update(self) -> Result<ItemUpdate, ValidationError> {
        Ok(ItemUpdate {
            name: self.name,
            style: parse_style_filter(self.style.as_deref())?,
            secondary_color: self.secondary_color,
            active: self.active,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A garment of the inventory, with its lifecycle flags.
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    #[serde(flatten)]
    pub item: OutfitItemResponse,
    pub active: bool,
    pub favorite: bool,
}

impl From<ClothingItem> for ItemResponse {
    fn from(item: ClothingItem) -> Self {
        let active = item.active;
        let favorite = item.favorite;
        Self {
            item: item.into(),
            active,
            favorite,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemListResponse {
    pub items: Vec<ItemResponse>,
    pub total: usize,
}

impl From<Vec<ClothingItem>> for ItemListResponse {
    fn from(items: Vec<ClothingItem>) -> Self {
        Self {
            total: items.len(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}
