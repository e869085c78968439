//! GenerateOutfitSetHandler - drives the composer until a stack is dressed.

use chrono::{Days, NaiveDate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::foundation::{DomainError, ItemId, StackId, UserId};
use crate::domain::outfit::{
    calculate_max_outfits, check_availability, dedup_key, group_by_style_and_category,
    CategorySelectionPolicy, GenerationError, GroupedInventory, NewOutfit, Outfit,
    OutfitComposer,
};
use crate::domain::wardrobe::{Category, ClothingItem, Style};
use crate::ports::{InventoryReader, OutfitRepository, SeedSource};

/// Default number of composer attempts budgeted per requested outfit.
pub const DEFAULT_ATTEMPTS_PER_OUTFIT: u32 = 50;

/// Default wall-clock bound on one generation call.
pub const DEFAULT_GENERATION_DEADLINE: Duration = Duration::from_millis(5000);

/// Command to generate and persist the outfits of a stack.
#[derive(Debug, Clone)]
pub struct GenerateOutfitSetCommand {
    pub owner: UserId,
    pub stack_id: StackId,
    pub requested_count: u32,
    pub style: Option<Style>,
    pub policy: CategorySelectionPolicy,
    /// Date assigned to the first accepted outfit.
    pub start_date: NaiveDate,
}

/// Outcome of a generation run, including partial runs.
#[derive(Debug, Clone)]
pub struct GenerateOutfitSetResult {
    /// Persisted outfits in acceptance order.
    pub outfits: Vec<Outfit>,
    pub total: usize,
    pub unique_count: usize,
    pub max_unique_possible: u64,
    /// `total > unique_count`; the dedup loop keeps this false.
    pub contains_repeats: bool,
    pub requested_count: u32,
    pub used_categories: CategorySelectionPolicy,
    /// Composer attempts consumed.
    pub attempts: u32,
    /// The deadline cut the run short.
    pub timed_out: bool,
    /// Accepted candidates whose write was rolled back.
    pub failed_writes: u32,
}

impl GenerateOutfitSetResult {
    /// Fewer outfits than requested.
    pub fn is_partial(&self) -> bool {
        (self.total as u64) < u64::from(self.requested_count)
    }
}

/// Tuning knobs of the generation loop.
#[derive(Debug, Clone, Copy)]
pub struct GenerationSettings {
    pub attempts_per_outfit: u32,
    pub deadline: Duration,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            attempts_per_outfit: DEFAULT_ATTEMPTS_PER_OUTFIT,
            deadline: DEFAULT_GENERATION_DEADLINE,
        }
    }
}

/// Mutable state of one run.
#[derive(Default)]
struct Progress {
    outfits: Vec<Outfit>,
    seen: HashSet<Vec<ItemId>>,
    attempts: u32,
    failed_writes: u32,
    last_write_error: Option<DomainError>,
    timed_out: bool,
}

/// Handler for generating the outfit set of a stack.
pub struct GenerateOutfitSetHandler {
    inventory: Arc<dyn InventoryReader>,
    outfits: Arc<dyn OutfitRepository>,
    seeds: Arc<dyn SeedSource>,
    composer: OutfitComposer,
    settings: GenerationSettings,
}

impl GenerateOutfitSetHandler {
    pub fn new(
        inventory: Arc<dyn InventoryReader>,
        outfits: Arc<dyn OutfitRepository>,
        seeds: Arc<dyn SeedSource>,
    ) -> Self {
        Self {
            inventory,
            outfits,
            seeds,
            composer: OutfitComposer::default(),
            settings: GenerationSettings::default(),
        }
    }

    pub fn with_composer(mut self, composer: OutfitComposer) -> Self {
        self.composer = composer;
        self
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    pub async fn handle(
        &self,
        cmd: GenerateOutfitSetCommand,
    ) -> Result<GenerateOutfitSetResult, GenerationError> {
        cmd.policy.validate()?;

        // 1. Fetch the active inventory
        let items = self.inventory.fetch_items(cmd.owner, cmd.style).await?;
        if items.is_empty() {
            return Err(GenerationError::NoInventory {
                style: cmd.style,
                categories: cmd.policy.enabled(),
            });
        }

        // 2. Keep only the categories the policy enables
        let filtered: Vec<ClothingItem> = items
            .into_iter()
            .filter(|item| cmd.policy.allows(item.category))
            .collect();
        if filtered.is_empty() {
            return Err(GenerationError::NoMatchingCategory {
                categories: cmd.policy.enabled(),
            });
        }

        // 3. At least one style must dress a complete outfit
        let availability = check_availability(&filtered);
        if !availability.can_generate {
            let styles_present: BTreeSet<Style> = filtered.iter().map(|i| i.style).collect();
            return Err(GenerationError::IncompatibleStyles {
                styles_present: styles_present.into_iter().collect(),
            });
        }

        // 4. Upper bound on distinct outfits
        let max_unique = calculate_max_outfits(&filtered);
        let target = u64::from(cmd.requested_count).min(max_unique) as usize;
        let grouped = group_by_style_and_category(&filtered);

        // 5. Capped, deadline-bound composer loop
        let mut rng = ChaCha8Rng::seed_from_u64(self.seeds.next_seed());
        let mut progress = Progress::default();
        let started = Instant::now();

        self.fill(&cmd, &grouped, target, started, &mut rng, &mut progress)
            .await;
        let timed_out = progress.timed_out;

        // 6. Nothing persisted is a hard failure
        if progress.outfits.is_empty() {
            log_inventory_snapshot(cmd.owner, &grouped, progress.attempts);
            return Err(match progress.last_write_error {
                Some(err) => GenerationError::Persistence(err),
                None if timed_out => GenerationError::Timeout {
                    elapsed_ms: started.elapsed().as_millis() as u64,
                },
                None => GenerationError::GenerationFailed {
                    attempts: progress.attempts,
                    requested: cmd.requested_count,
                },
            });
        }

        let total = progress.outfits.len();
        let unique_count = progress.seen.len().min(total);
        if total < target {
            tracing::warn!(
                user_id = %cmd.owner,
                stack_id = %cmd.stack_id,
                generated = total,
                target,
                attempts = progress.attempts,
                timed_out,
                "Partial outfit set"
            );
        }

        // 7. Report
        Ok(GenerateOutfitSetResult {
            outfits: progress.outfits,
            total,
            unique_count,
            max_unique_possible: max_unique,
            contains_repeats: total > unique_count,
            requested_count: cmd.requested_count,
            used_categories: cmd.policy,
            attempts: progress.attempts,
            timed_out,
            failed_writes: progress.failed_writes,
        })
    }

    async fn fill(
        &self,
        cmd: &GenerateOutfitSetCommand,
        grouped: &GroupedInventory,
        target: usize,
        started: Instant,
        rng: &mut ChaCha8Rng,
        progress: &mut Progress,
    ) {
        let budget = cmd
            .requested_count
            .saturating_mul(self.settings.attempts_per_outfit);

        // The deadline is checked between attempts only; a write in flight
        // always completes so the result matches what was stored.
        while progress.outfits.len() < target && progress.attempts < budget {
            if started.elapsed() >= self.settings.deadline {
                progress.timed_out = true;
                break;
            }
            progress.attempts += 1;

            let candidate = match self.composer.compose(grouped, &cmd.policy, rng) {
                Ok(Some(candidate)) => candidate,
                Ok(None) => continue,
                Err(err) => {
                    tracing::debug!(attempt = progress.attempts, "Composer gave up: {}", err);
                    continue;
                }
            };

            let key = dedup_key(&candidate);
            if progress.seen.contains(&key) {
                continue;
            }

            let offset = progress.outfits.len() as u64;
            let Some(date) = cmd.start_date.checked_add_days(Days::new(offset)) else {
                break;
            };

            match self.persist(cmd, date, &candidate).await {
                Ok(outfit) => {
                    progress.seen.insert(key);
                    progress.outfits.push(outfit);
                }
                Err(err) => {
                    tracing::error!(
                        user_id = %cmd.owner,
                        stack_id = %cmd.stack_id,
                        %date,
                        "Outfit write rolled back: {}",
                        err
                    );
                    progress.failed_writes += 1;
                    progress.last_write_error = Some(err);
                }
            }
        }
    }

    async fn persist(
        &self,
        cmd: &GenerateOutfitSetCommand,
        date: NaiveDate,
        items: &[ClothingItem],
    ) -> Result<Outfit, DomainError> {
        let new_outfit = NewOutfit::from_items(cmd.owner, Some(cmd.stack_id), Some(date), items)?;
        self.outfits.create(&new_outfit).await
    }
}

fn log_inventory_snapshot(owner: UserId, grouped: &GroupedInventory, attempts: u32) {
    let snapshot: BTreeMap<Style, BTreeMap<Category, usize>> = grouped
        .iter()
        .map(|(style, buckets)| (*style, buckets.counts()))
        .collect();
    tracing::warn!(
        user_id = %owner,
        attempts,
        inventory = ?snapshot,
        "Outfit generation produced nothing"
    );
}
