//! Filters for listing a user's outfits.

use chrono::{Datelike, Weekday};
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;

use super::Outfit;
use crate::domain::foundation::ValidationError;

/// Whether an outfit belongs to a stack or is the user's ad-hoc outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutfitKind {
    Unique,
    Stack,
}

impl OutfitKind {
    pub fn of(outfit: &Outfit) -> Self {
        if outfit.is_unique() {
            OutfitKind::Unique
        } else {
            OutfitKind::Stack
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutfitKind::Unique => "unique",
            OutfitKind::Stack => "stack",
        }
    }
}

impl fmt::Display for OutfitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutfitKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unique" | "unico" | "único" => Ok(OutfitKind::Unique),
            "stack" => Ok(OutfitKind::Stack),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("expected 'unique' or 'stack', got '{}'", other),
            )),
        }
    }
}

/// Conjunction of optional criteria; the default matches every outfit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutfitFilter {
    /// Weekday of the assigned date. Outfits without a date never match.
    pub weekday: Option<Weekday>,
    pub favorite: Option<bool>,
    pub kind: Option<OutfitKind>,
}

impl OutfitFilter {
    pub fn favorites(favorite: bool) -> Self {
        Self {
            favorite: Some(favorite),
            ..Self::default()
        }
    }

    pub fn matches(&self, outfit: &Outfit) -> bool {
        let day_ok = self.weekday.map_or(true, |day| {
            outfit.assigned_date.is_some_and(|date| date.weekday() == day)
        });
        let favorite_ok = self.favorite.map_or(true, |f| outfit.favorite == f);
        let kind_ok = self.kind.map_or(true, |k| OutfitKind::of(outfit) == k);
        day_ok && favorite_ok && kind_ok
    }
}

/// Listing order: unique outfits first, then latest assigned date (undated
/// last), then newest id.
pub fn listing_order(a: &Outfit, b: &Outfit) -> Ordering {
    let key = |o: &Outfit| (OutfitKind::of(o), Reverse(o.assigned_date), Reverse(o.id));
    key(a).cmp(&key(b))
}
