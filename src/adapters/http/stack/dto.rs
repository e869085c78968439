//! HTTP DTOs for stack endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::adapters::http::outfit::{parse_style_filter, OutfitResponse};
use crate::application::{
    CreateStackResult, GenerateOutfitSetResult, StackWithOutfits, TodaysOutfit,
};
use crate::domain::foundation::ValidationError;
use crate::domain::outfit::{weekday_label, CategorySelectionPolicy};
use crate::domain::stack::{Stack, StackRequest};
use crate::domain::wardrobe::Style;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a stack, replacing the user's current ones.
///
/// An omitted `categories` selects shoes only, which fails validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStackRequest {
    pub days: u32,
    #[serde(default)]
    pub allow_repeats: bool,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default, alias = "selectedCategories")]
    pub categories: CategorySelectionPolicy,
}

impl CreateStackRequest {
    pub fn into_stack_request(self) -> Result<StackRequest, ValidationError> {
        Ok(StackRequest {
            days: self.days,
            allow_repeats: self.allow_repeats,
            style: parse_style_filter(self.style.as_deref())?,
            policy: self.categories,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackResponse {
    pub id: i64,
    pub user_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub style: Option<Style>,
    /// Category policy the stack was generated with; known at creation only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategorySelectionPolicy>,
}

impl StackResponse {
    pub fn with_categories(mut self, categories: CategorySelectionPolicy) -> Self {
        self.categories = Some(categories);
        self
    }
}

impl From<&Stack> for StackResponse {
    fn from(stack: &Stack) -> Self {
        Self {
            id: stack.id.as_i64(),
            user_id: stack.owner.as_i64(),
            start_date: stack.start_date,
            end_date: stack.end_date,
            days: stack.days(),
            style: stack.style,
            categories: None,
        }
    }
}

/// Outcome of one generation run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSetResponse {
    pub outfits: Vec<OutfitResponse>,
    pub total: usize,
    pub unique_count: usize,
    pub max_unique_possible: u64,
    pub contains_repeats: bool,
    pub requested_count: u32,
    pub used_categories: CategorySelectionPolicy,
    /// Fewer outfits than requested.
    pub partial: bool,
    pub timed_out: bool,
    pub failed_writes: u32,
}

impl From<GenerateOutfitSetResult> for OutfitSetResponse {
    fn from(result: GenerateOutfitSetResult) -> Self {
        Self {
            partial: result.is_partial(),
            total: result.total,
            unique_count: result.unique_count,
            max_unique_possible: result.max_unique_possible,
            contains_repeats: result.contains_repeats,
            requested_count: result.requested_count,
            used_categories: result.used_categories,
            timed_out: result.timed_out,
            failed_writes: result.failed_writes,
            outfits: result.outfits.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStackResponse {
    pub stack: StackResponse,
    pub allow_repeats: bool,
    pub replaced_stacks: u64,
    pub outfits: OutfitSetResponse,
}

impl From<CreateStackResult> for CreateStackResponse {
    fn from(result: CreateStackResult) -> Self {
        Self {
            stack: StackResponse::from(&result.stack)
                .with_categories(result.generation.used_categories),
            allow_repeats: result.allow_repeats,
            replaced_stacks: result.replaced_stacks,
            outfits: result.generation.into(),
        }
    }
}

/// A stack with its scheduled outfits, ordered by date.
#[derive(Debug, Clone, Serialize)]
pub struct StackViewResponse {
    #[serde(flatten)]
    pub stack: StackResponse,
    pub outfits: Vec<OutfitResponse>,
}

impl From<StackWithOutfits> for StackViewResponse {
    fn from(view: StackWithOutfits) -> Self {
        Self {
            stack: StackResponse::from(&view.stack),
            outfits: view.outfits.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StackListResponse {
    pub items: Vec<StackViewResponse>,
    pub total: usize,
}

impl From<Vec<StackWithOutfits>> for StackListResponse {
    fn from(stacks: Vec<StackWithOutfits>) -> Self {
        Self {
            total: stacks.len(),
            items: stacks.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteStacksResponse {
    pub deleted: u64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodaysOutfitResponse {
    pub day: &'static str,
    pub date: NaiveDate,
    pub stack_id: i64,
    pub outfit: OutfitResponse,
}

impl From<TodaysOutfit> for TodaysOutfitResponse {
    fn from(today: TodaysOutfit) -> Self {
        Self {
            day: weekday_label(today.date),
            date: today.date,
            stack_id: today.stack.id.as_i64(),
            outfit: today.outfit.into(),
        }
    }
}
