//! Valet i18n
//!
//! Static English/Russian string table and the short date format the
//! cards use. An unknown key translates to itself, so a missing entry
//! degrades to the raw key instead of failing.

mod catalog;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

/// Translate a UI key, falling back to the key itself.
pub fn t(lang: Language, key: &str) -> &str {
    let hit = match lang {
        Language::En => catalog::en(key),
        Language::Ru => catalog::ru(key),
    };
    hit.unwrap_or(key)
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_RU: [&str; 12] = [
    "янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
];

/// Short card date: "Nov 3" in English, "3 ноя" in Russian. The year
/// is dropped, matching the compact guest-card rows.
pub fn format_date(lang: Language, date: NaiveDate) -> String {
    let month_index = date.month0() as usize;
    match lang {
        Language::En => format!("{} {}", MONTHS_EN[month_index], date.day()),
        Language::Ru => format!("{} {}", date.day(), MONTHS_RU[month_index]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_both_languages() {
        assert_eq!(t(Language::En, "guests"), "Guests");
        assert_eq!(t(Language::Ru, "guests"), "Гости");
        assert_eq!(t(Language::Ru, "addMove"), "Добавить переезд");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Language::En, "definitelyMissing"), "definitelyMissing");
        assert_eq!(t(Language::Ru, "definitelyMissing"), "definitelyMissing");
    }

    #[test]
    fn test_language_round_trip() {
        let lang: Language = "ru".parse().unwrap();
        assert_eq!(lang, Language::Ru);
        assert_eq!(lang.to_string(), "ru");
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        assert_eq!(format_date(Language::En, date), "Nov 3");
        assert_eq!(format_date(Language::Ru, date), "3 ноя");
    }
}
