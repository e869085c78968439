//! Outfit entity and the write model used to persist new outfits.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

use super::weekday_label;
use crate::domain::foundation::{ItemId, OutfitId, StackId, UserId, ValidationError};
use crate::domain::wardrobe::{Category, ClothingItem, Style};

/// A persisted outfit with its garments joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outfit {
    pub id: OutfitId,
    pub owner: UserId,
    pub style: Option<Style>,
    /// `None` marks the user's ad-hoc (unique) outfit.
    pub stack_id: Option<StackId>,
    pub assigned_date: Option<NaiveDate>,
    pub favorite: bool,
    pub items: Vec<ClothingItem>,
}

impl Outfit {
    /// Weekday label of the assigned date.
    pub fn weekday(&self) -> Option<&'static str> {
        self.assigned_date.map(weekday_label)
    }

    /// The garment filling `category`, if any.
    pub fn item_in(&self, category: Category) -> Option<&ClothingItem> {
        self.items.iter().find(|i| i.category == category)
    }

    pub fn is_unique(&self) -> bool {
        self.stack_id.is_none()
    }
}

/// An outfit about to be written, together with its item links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOutfit {
    pub owner: UserId,
    pub style: Option<Style>,
    pub stack_id: Option<StackId>,
    pub assigned_date: Option<NaiveDate>,
    pub item_ids: Vec<ItemId>,
}

impl NewOutfit {
    /// Builds the write model from composed garments.
    ///
    /// The outfit style is the style of the first garment.
    ///
    /// # Errors
    /// Rejects empty selections and selections with two garments of the same
    /// category.
    pub fn from_items(
        owner: UserId,
        stack_id: Option<StackId>,
        assigned_date: Option<NaiveDate>,
        items: &[ClothingItem],
    ) -> Result<Self, ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::empty_field("items"));
        }
        let mut categories = HashSet::new();
        for item in items {
            if !categories.insert(item.category) {
                return Err(ValidationError::invalid_selection(format!(
                    "more than one item in category {}",
                    item.category
                )));
            }
        }

        Ok(Self {
            owner,
            style: items.first().map(|i| i.style),
            stack_id,
            assigned_date,
            item_ids: items.iter().map(|i| i.id).collect(),
        })
    }
}

/// Identity of an outfit by content: its sorted item ids.
pub fn dedup_key(items: &[ClothingItem]) -> Vec<ItemId> {
    let mut key: Vec<ItemId> = items.iter().map(|i| i.id).collect();
    key.sort_unstable();
    key
}
