//! GenerateUniqueOutfitHandler - one ad-hoc outfit from the basic categories.

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::outfit::{GenerationError, NewOutfit, Outfit};
use crate::domain::wardrobe::{compatible_colors, Category, ClothingItem, Style};
use crate::ports::{InventoryReader, OutfitRepository, SeedSource};

/// Command to generate the user's unique outfit.
#[derive(Debug, Clone)]
pub struct GenerateUniqueOutfitCommand {
    pub owner: UserId,
    pub style: Option<Style>,
    /// Color name, matched case-insensitively as a substring.
    pub preferred_color: Option<String>,
}

/// Result of unique outfit generation.
#[derive(Debug, Clone)]
pub struct GenerateUniqueOutfitResult {
    pub outfit: Outfit,
    /// True when no color was asked for, or at least one garment has it.
    pub includes_requested_color: bool,
}

/// Handler for generating a stack-less outfit.
///
/// The new outfit replaces the user's previous unique outfit.
pub struct GenerateUniqueOutfitHandler {
    inventory: Arc<dyn InventoryReader>,
    outfits: Arc<dyn OutfitRepository>,
    seeds: Arc<dyn SeedSource>,
}

impl GenerateUniqueOutfitHandler {
    pub fn new(
        inventory: Arc<dyn InventoryReader>,
        outfits: Arc<dyn OutfitRepository>,
        seeds: Arc<dyn SeedSource>,
    ) -> Self {
        Self {
            inventory,
            outfits,
            seeds,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateUniqueOutfitCommand,
    ) -> Result<GenerateUniqueOutfitResult, GenerationError> {
        // 1. All active items, regardless of style
        let items = self.inventory.fetch_items(cmd.owner, None).await?;

        // 2. Top, bottom and shoes are all required
        let missing: Vec<Category> = Category::basic()
            .iter()
            .copied()
            .filter(|category| !items.iter().any(|i| i.category == *category))
            .collect();
        if !missing.is_empty() {
            return Err(GenerationError::MissingCategories { missing });
        }

        // 3. One garment per basic category
        let wanted = cmd.preferred_color.as_deref().map(str::trim).filter(|c| !c.is_empty());
        let mut rng = ChaCha8Rng::seed_from_u64(self.seeds.next_seed());
        let mut selected = Vec::with_capacity(Category::basic().len());
        for category in Category::basic() {
            let candidates = candidates_for(&items, *category, cmd.style, wanted);
            if let Some(choice) = candidates.choose(&mut rng) {
                selected.push((*choice).clone());
            }
        }

        // 4. Persist, replacing the previous unique outfit
        let mut new_outfit = NewOutfit::from_items(cmd.owner, None, None, &selected)?;
        if cmd.style.is_some() {
            new_outfit.style = cmd.style;
        }
        let outfit = self.outfits.create(&new_outfit).await?;

        let includes_requested_color =
            wanted.map_or(true, |color| selected.iter().any(|i| i.has_color(color)));

        tracing::info!(
            user_id = %cmd.owner,
            outfit_id = %outfit.id,
            includes_requested_color,
            "Unique outfit generated"
        );

        Ok(GenerateUniqueOutfitResult {
            outfit,
            includes_requested_color,
        })
    }
}

/// Narrows a category's garments by style, then by color.
///
/// Each narrowing step only applies when it leaves something to pick from.
/// Color preference goes: garments containing the color, then garments in a
/// harmonizing color, then anything.
fn candidates_for<'a>(
    items: &'a [ClothingItem],
    category: Category,
    style: Option<Style>,
    color: Option<&str>,
) -> Vec<&'a ClothingItem> {
    let mut pool: Vec<&ClothingItem> = items.iter().filter(|i| i.category == category).collect();

    if let Some(style) = style {
        narrow(&mut pool, |i| i.style == style);
    }
    if let Some(color) = color {
        if pool.iter().any(|i| i.has_color(color)) {
            narrow(&mut pool, |i| i.has_color(color));
        } else {
            let palette = compatible_colors(color);
            narrow(&mut pool, |i| i.has_color_in(palette));
        }
    }
    pool
}

fn narrow(pool: &mut Vec<&ClothingItem>, keep: impl Fn(&ClothingItem) -> bool) {
    if pool.iter().any(|i| keep(i)) {
        pool.retain(|i| keep(i));
    }
}
