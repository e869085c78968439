//! Stack entity and creation request.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::domain::foundation::{StackId, UserId, ValidationError};
use crate::domain::outfit::CategorySelectionPolicy;
use crate::domain::wardrobe::Style;

pub const MIN_STACK_DAYS: u32 = 1;
pub const MAX_STACK_DAYS: u32 = 30;

/// A persisted date-ranged schedule of outfits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stack {
    pub id: StackId,
    pub owner: UserId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub style: Option<Style>,
}

impl Stack {
    /// True when `date` falls inside the stack's range (inclusive).
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of calendar days spanned.
    pub fn days(&self) -> u32 {
        (self.end_date - self.start_date).num_days().max(0) as u32 + 1
    }
}

/// A stack about to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStack {
    pub owner: UserId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub style: Option<Style>,
}

impl NewStack {
    /// Stack spanning `[start, start + days - 1]`.
    pub fn spanning(
        owner: UserId,
        start: NaiveDate,
        days: u32,
        style: Option<Style>,
    ) -> Result<Self, ValidationError> {
        validate_days(days)?;
        let end_date = start
            .checked_add_days(Days::new(u64::from(days - 1)))
            .ok_or_else(|| ValidationError::invalid_format("days", "date range overflows"))?;
        Ok(Self {
            owner,
            start_date: start,
            end_date,
            style,
        })
    }
}

/// Parameters of a create-stack call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackRequest {
    pub days: u32,
    /// Accepted and echoed back; generation always deduplicates.
    pub allow_repeats: bool,
    pub style: Option<Style>,
    pub policy: CategorySelectionPolicy,
}

impl StackRequest {
    /// Fail-fast checks run before anything is persisted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_days(self.days)?;
        self.policy.validate()
    }
}

fn validate_days(days: u32) -> Result<(), ValidationError> {
    if !(MIN_STACK_DAYS..=MAX_STACK_DAYS).contains(&days) {
        return Err(ValidationError::out_of_range(
            "days",
            i64::from(MIN_STACK_DAYS),
            i64::from(MAX_STACK_DAYS),
            i64::from(days),
        ));
    }
    Ok(())
}
