//! HTTP DTOs for outfit endpoints.
//!
//! Field names are camelCase on the wire; the request aliases accept the
//! Spanish names older clients send (`colorPrincipal`, `id_prenda`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::GenerateUniqueOutfitResult;
use crate::domain::foundation::ValidationError;
use crate::domain::outfit::{parse_weekday, Outfit, OutfitFilter, OutfitKind};
use crate::domain::wardrobe::{Category, ClothingItem, ColorRef, Style};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to generate a stack-less outfit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueOutfitRequest {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default, alias = "color")]
    pub color_principal: Option<String>,
}

/// Request to mark or unmark an outfit as favorite.
#[derive(Debug, Clone, Deserialize)]
pub struct SetFavoriteRequest {
    pub favorite: bool,
}

/// Query parameters for listing favorites.
#[derive(Debug, Clone, Deserialize)]
pub struct FavoritesQuery {
    #[serde(default = "default_favorite")]
    pub favorite: bool,
}

fn default_favorite() -> bool {
    true
}

/// Query parameters of `GET /api/outfits`; all optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutfitListQuery {
    /// Weekday name, Spanish or English.
    #[serde(default, alias = "dia")]
    pub day: Option<String>,
    #[serde(default)]
    pub favorite: Option<bool>,
    /// `unique` or `stack`.
    #[serde(default, rename = "type", alias = "tipo")]
    pub kind: Option<String>,
}

impl OutfitListQuery {
    pub fn into_filter(self) -> Result<OutfitFilter, ValidationError> {
        let weekday = match non_blank(self.day) {
            Some(day) => Some(parse_weekday(&day)?),
            None => None,
        };
        let kind = match non_blank(self.kind) {
            Some(kind) => Some(kind.parse::<OutfitKind>()?),
            None => None,
        };
        Ok(OutfitFilter {
            weekday,
            favorite: self.favorite,
            kind,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Request to swap the garment of one category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceItemRequest {
    pub category: String,
    #[serde(alias = "id_prenda")]
    pub item_id: i64,
}

/// Optional style filter; blank means no filter.
pub fn parse_style_filter(raw: Option<&str>) -> Result<Option<Style>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name.parse().map(Some),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ColorResponse {
    pub id: i32,
    pub name: String,
}

impl From<ColorRef> for ColorResponse {
    fn from(color: ColorRef) -> Self {
        Self {
            id: color.id,
            name: color.name,
        }
    }
}

/// A garment inside an outfit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitItemResponse {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub category_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub style: Style,
    pub color: ColorResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<ColorResponse>,
    pub image_url: String,
}

impl From<ClothingItem> for OutfitItemResponse {
    fn from(item: ClothingItem) -> Self {
        Self {
            id: item.id.as_i64(),
            name: item.name,
            category: item.category,
            category_name: item.category.display_name(),
            subcategory: item.subcategory,
            style: item.style,
            color: item.primary_color.into(),
            secondary_color: item.secondary_color.map(Into::into),
            image_url: item.image_url,
        }
    }
}

/// Outfit view shared by the stack and outfit endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: OutfitKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<i64>,
    /// Spanish weekday label of the assigned date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_date: Option<NaiveDate>,
    pub style: Option<Style>,
    pub favorite: bool,
    pub items: Vec<OutfitItemResponse>,
}

impl From<Outfit> for OutfitResponse {
    fn from(outfit: Outfit) -> Self {
        Self {
            id: outfit.id.as_i64(),
            kind: OutfitKind::of(&outfit),
            stack_id: outfit.stack_id.map(|id| id.as_i64()),
            day: outfit.weekday(),
            assigned_date: outfit.assigned_date,
            style: outfit.style,
            favorite: outfit.favorite,
            items: outfit.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueOutfitResponse {
    pub outfit: OutfitResponse,
    pub includes_requested_color: bool,
}

impl From<GenerateUniqueOutfitResult> for UniqueOutfitResponse {
    fn from(result: GenerateUniqueOutfitResult) -> Self {
        Self {
            outfit: result.outfit.into(),
            includes_requested_color: result.includes_requested_color,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OutfitListResponse {
    pub items: Vec<OutfitResponse>,
    pub total: usize,
}

impl From<Vec<Outfit>> for OutfitListResponse {
    fn from(outfits: Vec<Outfit>) -> Self {
        Self {
            total: outfits.len(),
            items: outfits.into_iter().map(Into::into).collect(),
        }
    }
}
