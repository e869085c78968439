//! Garment styles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Style tag partitioning the inventory for compatibility matching.
///
/// Serialized with English names; the Spanish labels stored in the
/// `prenda.estilo` column are accepted on input too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Style {
    Casual,
    Formal,
    #[serde(alias = "Deportivo")]
    Sporty,
    Semiformal,
    #[serde(alias = "Moderno")]
    Modern,
}

impl Style {
    /// Returns all styles.
    pub fn all() -> &'static [Style] {
        &[
            Style::Casual,
            Style::Formal,
            Style::Sporty,
            Style::Semiformal,
            Style::Modern,
        ]
    }

    /// Label persisted in the database.
    pub fn db_label(&self) -> &'static str {
        match self {
            Style::Casual => "Casual",
            Style::Formal => "Formal",
            Style::Sporty => "Deportivo",
            Style::Semiformal => "Semiformal",
            Style::Modern => "Moderno",
        }
    }

    /// Resolves a persisted label.
    pub fn from_db_label(label: &str) -> Option<Style> {
        Self::all().iter().copied().find(|s| s.db_label() == label)
    }

    /// English name used in the API.
    pub fn name(&self) -> &'static str {
        match self {
            Style::Casual => "Casual",
            Style::Formal => "Formal",
            Style::Sporty => "Sporty",
            Style::Semiformal => "Semiformal",
            Style::Modern => "Modern",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Style {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|style| {
                style.name().eq_ignore_ascii_case(needle)
                    || style.db_label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "style",
                    format!(
                        "'{}' is not one of Casual, Formal, Sporty, Semiformal, Modern",
                        needle
                    ),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_and_spanish_names() {
        assert_eq!("sporty".parse::<Style>().unwrap(), Style::Sporty);
        assert_eq!("Deportivo".parse::<Style>().unwrap(), Style::Sporty);
        assert_eq!("Moderno".parse::<Style>().unwrap(), Style::Modern);
    }

    #[test]
    fn rejects_unknown_style() {
        assert!("Grunge".parse::<Style>().is_err());
    }

    #[test]
    fn db_labels_resolve_back() {
        for style in Style::all() {
            assert_eq!(Style::from_db_label(style.db_label()), Some(*style));
        }
    }

    #[test]
    fn deserializes_spanish_alias() {
        let style: Style = serde_json::from_str("\"Deportivo\"").unwrap();
        assert_eq!(style, Style::Sporty);
        assert_eq!(serde_json::to_string(&style).unwrap(), "\"Sporty\"");
    }
}
