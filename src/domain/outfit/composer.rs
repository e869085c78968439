//! Outfit Composer - randomized assembly of a single candidate outfit.

use rand::Rng;
use thiserror::Error;

use super::{CategoryBuckets, CategorySelectionPolicy, GroupedInventory};
use crate::domain::wardrobe::{Category, ClothingItem};

/// Default chance of layering an outerwear item when one is available.
pub const DEFAULT_OUTERWEAR_PROBABILITY: f64 = 0.3;

/// Errors raised while composing a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("No style has compatible garments for the selected categories")]
    NoCompatibleStyles,
}

/// Assembles one outfit at a time from a grouped inventory.
///
/// All items of a composed outfit share a style, there is at most one item
/// per category, and only categories enabled by the policy are used.
#[derive(Debug, Clone, Copy)]
pub struct OutfitComposer {
    outerwear_probability: f64,
}

impl Default for OutfitComposer {
    fn default() -> Self {
        Self::new(DEFAULT_OUTERWEAR_PROBABILITY)
    }
}

impl OutfitComposer {
    /// Creates a composer; the probability is clamped to `[0, 1]`.
    pub fn new(outerwear_probability: f64) -> Self {
        Self {
            outerwear_probability: outerwear_probability.clamp(0.0, 1.0),
        }
    }

    /// Composes a candidate outfit.
    ///
    /// # Algorithm
    /// 1. One-piece-only policies pick among styles holding a one-piece (and
    ///    shoes when required), then take a random shoe and one-piece.
    /// 2. Otherwise a style is eligible when its shoes requirement is met and
    ///    it can dress the body through an enabled one-piece or an enabled
    ///    top and bottom pair.
    /// 3. From a uniformly chosen eligible style: a random shoe, then either a
    ///    one-piece or a top and bottom (a coin flip when both are feasible),
    ///    then an outerwear item with the configured probability.
    ///
    /// # Errors
    /// `NoCompatibleStyles` when no style is eligible under step 2.
    /// Returns `Ok(None)` when the one-piece-only path finds no style.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        grouped: &GroupedInventory,
        policy: &CategorySelectionPolicy,
        rng: &mut R,
    ) -> Result<Option<Vec<ClothingItem>>, ComposeError> {
        if policy.is_one_piece_only() {
            return Ok(Self::compose_one_piece(grouped, policy, rng));
        }

        let eligible: Vec<&CategoryBuckets> = grouped
            .values()
            .filter(|buckets| {
                let shoes_ok = !policy.shoes || buckets.has(Category::Shoes);
                shoes_ok
                    && (can_one_piece(buckets, policy)
                        || can_top_bottom(buckets, policy)
                        || (!policy.top && !policy.bottom))
            })
            .collect();

        let buckets = *pick(&eligible, rng).ok_or(ComposeError::NoCompatibleStyles)?;
        let mut outfit = Vec::with_capacity(4);

        if policy.shoes {
            push_random(&mut outfit, &buckets.shoes, rng);
        }

        let one_piece = can_one_piece(buckets, policy);
        let top_bottom = can_top_bottom(buckets, policy);
        if one_piece && (!top_bottom || rng.random::<f64>() > 0.5) {
            push_random(&mut outfit, &buckets.one_piece, rng);
        } else if top_bottom {
            push_random(&mut outfit, &buckets.top, rng);
            push_random(&mut outfit, &buckets.bottom, rng);
        }

        if policy.outerwear
            && buckets.has(Category::Outerwear)
            && rng.random::<f64>() > 1.0 - self.outerwear_probability
        {
            push_random(&mut outfit, &buckets.outerwear, rng);
        }

        Ok((!outfit.is_empty()).then_some(outfit))
    }

    fn compose_one_piece<R: Rng + ?Sized>(
        grouped: &GroupedInventory,
        policy: &CategorySelectionPolicy,
        rng: &mut R,
    ) -> Option<Vec<ClothingItem>> {
        let eligible: Vec<&CategoryBuckets> = grouped
            .values()
            .filter(|b| (!policy.shoes || b.has(Category::Shoes)) && b.has(Category::OnePiece))
            .collect();

        let buckets = *pick(&eligible, rng)?;
        let mut outfit = Vec::with_capacity(2);
        if policy.shoes {
            push_random(&mut outfit, &buckets.shoes, rng);
        }
        push_random(&mut outfit, &buckets.one_piece, rng);

        (!outfit.is_empty()).then_some(outfit)
    }
}

fn can_one_piece(buckets: &CategoryBuckets, policy: &CategorySelectionPolicy) -> bool {
    policy.one_piece && buckets.has(Category::OnePiece)
}

fn can_top_bottom(buckets: &CategoryBuckets, policy: &CategorySelectionPolicy) -> bool {
    policy.top && policy.bottom && buckets.has(Category::Top) && buckets.has(Category::Bottom)
}

fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}

fn push_random<R: Rng + ?Sized>(outfit: &mut Vec<ClothingItem>, from: &[ClothingItem], rng: &mut R) {
    if let Some(item) = pick(from, rng) {
        outfit.push(item.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outfit::group_by_style_and_category;
    use crate::domain::wardrobe::fixtures::item;
    use crate::domain::wardrobe::Style;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn casual_basics() -> Vec<ClothingItem> {
        vec![
            item(1, Category::Shoes, Style::Casual),
            item(2, Category::Shoes, Style::Casual),
            item(3, Category::Top, Style::Casual),
            item(4, Category::Top, Style::Casual),
            item(5, Category::Top, Style::Casual),
            item(6, Category::Bottom, Style::Casual),
            item(7, Category::Bottom, Style::Casual),
        ]
    }

    fn categories(outfit: &[ClothingItem]) -> Vec<Category> {
        let mut cats: Vec<Category> = outfit.iter().map(|i| i.category).collect();
        cats.sort();
        cats
    }

    #[test]
    fn standard_policy_yields_shoe_top_and_bottom() {
        let grouped = group_by_style_and_category(&casual_basics());
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let outfit = OutfitComposer::default()
            .compose(&grouped, &CategorySelectionPolicy::standard(), &mut rng)
            .unwrap()
            .unwrap();

        assert_eq!(
            categories(&outfit),
            vec![Category::Top, Category::Bottom, Category::Shoes]
        );
    }

    #[test]
    fn one_piece_only_policy_yields_shoe_and_one_piece() {
        let items = vec![
            item(1, Category::OnePiece, Style::Formal),
            item(2, Category::OnePiece, Style::Formal),
            item(3, Category::Shoes, Style::Formal),
        ];
        let grouped = group_by_style_and_category(&items);
        let policy = CategorySelectionPolicy {
            one_piece: true,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let outfit = OutfitComposer::default()
            .compose(&grouped, &policy, &mut rng)
            .unwrap()
            .unwrap();

        assert_eq!(categories(&outfit), vec![Category::Shoes, Category::OnePiece]);
        assert!(outfit.iter().all(|i| i.style == Style::Formal));
    }

    #[test]
    fn one_piece_only_without_eligible_style_returns_none() {
        let items = vec![item(1, Category::Shoes, Style::Formal)];
        let grouped = group_by_style_and_category(&items);
        let policy = CategorySelectionPolicy {
            one_piece: true,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = OutfitComposer::default().compose(&grouped, &policy, &mut rng);
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn no_eligible_style_is_an_error() {
        let items = vec![
            item(1, Category::Top, Style::Casual),
            item(2, Category::Bottom, Style::Casual),
        ];
        let grouped = group_by_style_and_category(&items);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = OutfitComposer::default().compose(
            &grouped,
            &CategorySelectionPolicy::standard(),
            &mut rng,
        );
        assert_eq!(result, Err(ComposeError::NoCompatibleStyles));
    }

    #[test]
    fn outerwear_is_never_added_with_zero_probability() {
        let mut items = casual_basics();
        items.push(item(20, Category::Outerwear, Style::Casual));
        let grouped = group_by_style_and_category(&items);
        let policy = CategorySelectionPolicy {
            outerwear: true,
            ..CategorySelectionPolicy::standard()
        };
        let composer = OutfitComposer::new(0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for _ in 0..50 {
            let outfit = composer.compose(&grouped, &policy, &mut rng).unwrap().unwrap();
            assert!(!outfit.iter().any(|i| i.category == Category::Outerwear));
        }
    }

    #[test]
    fn outerwear_is_always_added_with_full_probability() {
        let mut items = casual_basics();
        items.push(item(20, Category::Outerwear, Style::Casual));
        let grouped = group_by_style_and_category(&items);
        let policy = CategorySelectionPolicy {
            outerwear: true,
            ..CategorySelectionPolicy::standard()
        };
        let composer = OutfitComposer::new(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let outfit = composer.compose(&grouped, &policy, &mut rng).unwrap().unwrap();
        assert!(outfit.iter().any(|i| i.category == Category::Outerwear));
    }

    #[test]
    fn never_mixes_styles() {
        let mut items = casual_basics();
        items.extend([
            item(30, Category::Shoes, Style::Formal),
            item(31, Category::Top, Style::Formal),
            item(32, Category::Bottom, Style::Formal),
        ]);
        let grouped = group_by_style_and_category(&items);
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        for _ in 0..50 {
            let outfit = OutfitComposer::default()
                .compose(&grouped, &CategorySelectionPolicy::standard(), &mut rng)
                .unwrap()
                .unwrap();
            assert!(outfit.iter().all(|i| i.style == outfit[0].style));
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_outfit() {
        let grouped = group_by_style_and_category(&casual_basics());
        let policy = CategorySelectionPolicy::all();
        let composer = OutfitComposer::default();

        let first = composer
            .compose(&grouped, &policy, &mut ChaCha8Rng::seed_from_u64(99))
            .unwrap();
        let second = composer
            .compose(&grouped, &policy, &mut ChaCha8Rng::seed_from_u64(99))
            .unwrap();
        assert_eq!(first, second);
    }

    fn arb_policy() -> impl Strategy<Value = CategorySelectionPolicy> {
        prop_oneof![
            Just(CategorySelectionPolicy::standard()),
            Just(CategorySelectionPolicy::all()),
            Just(CategorySelectionPolicy {
                one_piece: true,
                ..Default::default()
            }),
            Just(CategorySelectionPolicy {
                one_piece: true,
                outerwear: true,
                ..CategorySelectionPolicy::standard()
            }),
        ]
    }

    proptest! {
        #[test]
        fn composed_outfits_respect_category_rules(
            layout in prop::collection::vec((0usize..5, 0usize..5), 1..40),
            policy in arb_policy(),
            seed in any::<u64>(),
        ) {
            let items: Vec<ClothingItem> = layout
                .iter()
                .enumerate()
                .map(|(i, (c, s))| item(i as i64 + 1, Category::all()[*c], Style::all()[*s]))
                .collect();
            let grouped = group_by_style_and_category(&items);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            if let Ok(Some(outfit)) = OutfitComposer::default().compose(&grouped, &policy, &mut rng) {
                let mut seen = HashSet::new();
                for piece in &outfit {
                    prop_assert!(seen.insert(piece.category), "duplicate category");
                    prop_assert!(policy.allows(piece.category));
                    prop_assert_eq!(piece.style, outfit[0].style);
                }
                prop_assert!(seen.contains(&Category::Shoes));
                prop_assert!(
                    seen.contains(&Category::OnePiece)
                        || (seen.contains(&Category::Top) && seen.contains(&Category::Bottom))
                );
            }
        }
    }
}
