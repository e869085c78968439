//! Availability Analyzer - grouping by style, compatibility and combination bounds.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::wardrobe::{Category, ClothingItem, Style};

/// Items of a single style, split by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBuckets {
    pub top: Vec<ClothingItem>,
    pub bottom: Vec<ClothingItem>,
    pub shoes: Vec<ClothingItem>,
    pub outerwear: Vec<ClothingItem>,
    pub one_piece: Vec<ClothingItem>,
}

impl CategoryBuckets {
    /// The bucket holding `category`.
    pub fn get(&self, category: Category) -> &[ClothingItem] {
        match category {
            Category::Top => &self.top,
            Category::Bottom => &self.bottom,
            Category::Shoes => &self.shoes,
            Category::Outerwear => &self.outerwear,
            Category::OnePiece => &self.one_piece,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<ClothingItem> {
        match category {
            Category::Top => &mut self.top,
            Category::Bottom => &mut self.bottom,
            Category::Shoes => &mut self.shoes,
            Category::Outerwear => &mut self.outerwear,
            Category::OnePiece => &mut self.one_piece,
        }
    }

    /// Appends an item to the bucket of its category.
    pub fn push(&mut self, item: ClothingItem) {
        self.bucket_mut(item.category).push(item);
    }

    pub fn has(&self, category: Category) -> bool {
        !self.get(category).is_empty()
    }

    /// Shoes plus either top and bottom, or a one-piece.
    pub fn is_complete(&self) -> bool {
        self.has(Category::Shoes)
            && ((self.has(Category::Top) && self.has(Category::Bottom))
                || self.has(Category::OnePiece))
    }

    /// Item counts per category, for diagnostics.
    pub fn counts(&self) -> BTreeMap<Category, usize> {
        Category::all()
            .iter()
            .map(|c| (*c, self.get(*c).len()))
            .collect()
    }
}

/// Inventory partitioned by style.
///
/// Ordered map so that a seeded random source walks styles in a stable order.
pub type GroupedInventory = BTreeMap<Style, CategoryBuckets>;

/// Groups a flat item list by style, then by category.
pub fn group_by_style_and_category(items: &[ClothingItem]) -> GroupedInventory {
    let mut grouped = GroupedInventory::new();
    for item in items {
        grouped.entry(item.style).or_default().push(item.clone());
    }
    grouped
}

/// Result of the availability check.
///
/// The `has_*` flags only consider compatible styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub compatible_styles: BTreeSet<Style>,
    pub can_generate: bool,
    pub has_one_piece: bool,
    pub has_top: bool,
    pub has_bottom: bool,
    pub has_shoes: bool,
    pub has_outerwear: bool,
}

/// Determines which styles can dress a complete outfit.
///
/// # Algorithm
/// A style is compatible iff it has at least one shoe item and either at
/// least one top and one bottom, or at least one one-piece.
///
/// # Edge Cases
/// - Empty inventory: no compatible styles, `can_generate = false`
/// - Categories spread across styles do not combine
pub fn check_availability(items: &[ClothingItem]) -> Availability {
    let grouped = group_by_style_and_category(items);
    let mut availability = Availability::default();

    for (style, buckets) in &grouped {
        if !buckets.is_complete() {
            continue;
        }
        availability.compatible_styles.insert(*style);
        availability.has_shoes = true;
        availability.has_top |= buckets.has(Category::Top);
        availability.has_bottom |= buckets.has(Category::Bottom);
        availability.has_one_piece |= buckets.has(Category::OnePiece);
        availability.has_outerwear |= buckets.has(Category::Outerwear);
    }

    availability.can_generate = !availability.compatible_styles.is_empty();
    availability
}

/// Upper bound on distinct outfits, ignoring the style partition.
///
/// `shoes × (one_piece + top × bottom) × max(outerwear, 1)`
pub fn calculate_max_outfits(items: &[ClothingItem]) -> u64 {
    let count = |category: Category| items.iter().filter(|i| i.category == category).count() as u64;

    let shoes = count(Category::Shoes);
    let bodies = count(Category::OnePiece) + count(Category::Top) * count(Category::Bottom);
    let outerwear = count(Category::Outerwear).max(1);

    shoes * bodies * outerwear
}
