//! Category selection policy value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::wardrobe::Category;

/// Which categories take part in a generation run.
///
/// A valid policy always requires shoes, and must be able to dress the body
/// either with a top and a bottom, with a one-piece, or with both options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySelectionPolicy {
    #[serde(default, alias = "superior")]
    pub top: bool,
    #[serde(default, alias = "inferior")]
    pub bottom: bool,
    #[serde(default = "default_true", alias = "zapatos")]
    pub shoes: bool,
    #[serde(default, alias = "exterior")]
    pub outerwear: bool,
    #[serde(default, alias = "monopieza")]
    pub one_piece: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CategorySelectionPolicy {
    /// Shoes only, the value used when a request omits the selection.
    fn default() -> Self {
        Self {
            top: false,
            bottom: false,
            shoes: true,
            outerwear: false,
            one_piece: false,
        }
    }
}

impl CategorySelectionPolicy {
    /// Top, bottom and shoes.
    pub fn standard() -> Self {
        Self {
            top: true,
            bottom: true,
            ..Self::default()
        }
    }

    /// Every category enabled.
    pub fn all() -> Self {
        Self {
            top: true,
            bottom: true,
            shoes: true,
            outerwear: true,
            one_piece: true,
        }
    }

    /// Whether `category` is enabled.
    pub fn allows(&self, category: Category) -> bool {
        match category {
            Category::Top => self.top,
            Category::Bottom => self.bottom,
            Category::Shoes => self.shoes,
            Category::Outerwear => self.outerwear,
            Category::OnePiece => self.one_piece,
        }
    }

    /// Enabled categories in catalogue order.
    pub fn enabled(&self) -> Vec<Category> {
        Category::all()
            .iter()
            .copied()
            .filter(|c| self.allows(*c))
            .collect()
    }

    /// True when only a one-piece can cover the body.
    pub fn is_one_piece_only(&self) -> bool {
        self.one_piece && !self.top && !self.bottom
    }

    /// Checks the selection rules before any generation starts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.shoes {
            return Err(ValidationError::invalid_selection("shoes are mandatory"));
        }
        if !(self.top && self.bottom) && !self.one_piece {
            return Err(ValidationError::invalid_selection(
                "select top and bottom, one-piece, or both",
            ));
        }
        Ok(())
    }
}
