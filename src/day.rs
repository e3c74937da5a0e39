//! Canonical weekdays and locale label translation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale-independent day of week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Code used as a key in the content files
    pub fn code(self) -> &'static str {
        match self {
            Weekday::Monday => "MONDAY",
            Weekday::Tuesday => "TUESDAY",
            Weekday::Wednesday => "WEDNESDAY",
            Weekday::Thursday => "THURSDAY",
            Weekday::Friday => "FRIDAY",
            Weekday::Saturday => "SATURDAY",
            Weekday::Sunday => "SUNDAY",
        }
    }

    /// Parse a content-file code, ignoring case and surrounding whitespace
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// Lowercase, drop punctuation and collapse whitespace.
///
/// Applied to both user input and label tables so that "Вторник!",
/// "  вторник" and "ВТОРНИК" compare equal.
pub fn normalize_label(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ё' { 'е' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Maps a locale's day names to [`Weekday`] and back.
///
/// Each weekday has one primary label (shown on menu buttons) and any number
/// of accepted aliases.
#[derive(Debug, Clone)]
pub struct DayTranslator {
    primary: [String; 7],
    /// (normalized label, weekday)
    lookup: Vec<(String, Weekday)>,
}

impl DayTranslator {
    /// Build from primary labels in Monday..Sunday order
    pub fn new(primary: [&str; 7]) -> Self {
        let lookup = Weekday::ALL
            .into_iter()
            .zip(primary)
            .map(|(day, label)| (normalize_label(label), day))
            .collect();
        Self {
            primary: primary.map(str::to_string),
            lookup,
        }
    }

    /// Accept additional labels (Monday..Sunday order) as aliases
    pub fn with_aliases(mut self, aliases: [&str; 7]) -> Self {
        self.lookup.extend(
            Weekday::ALL
                .into_iter()
                .zip(aliases)
                .map(|(day, label)| (normalize_label(label), day)),
        );
        self
    }

    pub fn to_canonical(&self, label: &str) -> Option<Weekday> {
        let wanted = normalize_label(label);
        if wanted.is_empty() {
            return None;
        }
        self.lookup
            .iter()
            .find(|(known, _)| *known == wanted)
            .map(|(_, day)| *day)
    }

    /// Primary label for a weekday
    pub fn label(&self, day: Weekday) -> &str {
        &self.primary[day as usize]
    }

    /// Primary labels in Monday..Sunday order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.primary.iter().map(String::as_str)
    }
}
