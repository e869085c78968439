//! Localized weekday labels.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::domain::foundation::ValidationError;

/// Spanish weekday name for `date`, as shown in schedules.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Parses a weekday given in Spanish (with or without accents) or English.
pub fn parse_weekday(raw: &str) -> Result<Weekday, ValidationError> {
    match raw.trim().to_lowercase().as_str() {
        "lunes" | "monday" => Ok(Weekday::Mon),
        "martes" | "tuesday" => Ok(Weekday::Tue),
        "miércoles" | "miercoles" | "wednesday" => Ok(Weekday::Wed),
        "jueves" | "thursday" => Ok(Weekday::Thu),
        "viernes" | "friday" => Ok(Weekday::Fri),
        "sábado" | "sabado" | "saturday" => Ok(Weekday::Sat),
        "domingo" | "sunday" => Ok(Weekday::Sun),
        other => Err(ValidationError::invalid_format(
            "day",
            format!("unknown weekday '{}'", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_a_known_week() {
        // 2024-01-01 was a Monday.
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(weekday_label(monday), "Lunes");
        assert_eq!(weekday_label(monday + chrono::Days::new(2)), "Miércoles");
        assert_eq!(weekday_label(monday + chrono::Days::new(6)), "Domingo");
    }

    #[test]
    fn parses_spanish_and_english_names() {
        assert_eq!(parse_weekday("Miércoles"), Ok(Weekday::Wed));
        assert_eq!(parse_weekday("miercoles"), Ok(Weekday::Wed));
        assert_eq!(parse_weekday(" SABADO "), Ok(Weekday::Sat));
        assert_eq!(parse_weekday("friday"), Ok(Weekday::Fri));
        assert!(parse_weekday("someday").is_err());
    }
}
