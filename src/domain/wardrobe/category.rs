//! Garment categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The five garment categories, keyed by their catalogue ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Outerwear,
    OnePiece,
}

impl Category {
    /// Returns all categories in catalogue order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Top,
            Category::Bottom,
            Category::Shoes,
            Category::Outerwear,
            Category::OnePiece,
        ]
    }

    /// Categories every ad-hoc outfit must contain.
    pub fn basic() -> &'static [Category] {
        &[Category::Top, Category::Bottom, Category::Shoes]
    }

    /// Catalogue id as stored in `categoria_prenda`.
    pub fn id(&self) -> i32 {
        match self {
            Category::Top => 1,
            Category::Bottom => 2,
            Category::Shoes => 3,
            Category::Outerwear => 4,
            Category::OnePiece => 5,
        }
    }

    /// Resolves a catalogue id.
    pub fn from_id(id: i32) -> Option<Category> {
        Self::all().iter().copied().find(|c| c.id() == id)
    }

    /// Catalogue display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Top => "Superior",
            Category::Bottom => "Inferior",
            Category::Shoes => "Zapatos",
            Category::Outerwear => "Exterior",
            Category::OnePiece => "Monopieza",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Accepts the API names (`onePiece`) and the catalogue names (`Monopieza`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" | "superior" => Ok(Category::Top),
            "bottom" | "inferior" => Ok(Category::Bottom),
            "shoes" | "zapatos" => Ok(Category::Shoes),
            "outerwear" | "exterior" => Ok(Category::Outerwear),
            "onepiece" | "one_piece" | "monopieza" => Ok(Category::OnePiece),
            other => Err(ValidationError::invalid_format(
                "category",
                format!("unknown category '{}'", other),
            )),
        }
    }
}
