//! Events that can occur in a conversation

use crate::content::Discipline;
use crate::day::Weekday;
use crate::locale::Locale;

/// Classified inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `/start` or `/restart`: open the discipline menu from any state
    Start,
    /// `/help`
    Help,
    /// `/train` or `/run`: today's plan without walking the menus
    Today { discipline: Discipline },
    /// Free text matching a discipline label
    ChooseDiscipline(Discipline),
    /// Free text matching a day label
    ChooseDay(Weekday),
    /// Anything else, including unknown commands and empty text
    Unrecognized { text: String },
}

impl Event {
    /// Classify raw message text.
    ///
    /// Commands start with `/`; only the first token counts and a
    /// `@botname` suffix is ignored. Free text is matched against discipline
    /// labels before day labels.
    pub fn classify(text: &str, locale: &Locale) -> Self {
        let trimmed = text.trim();

        if let Some(command) = trimmed.strip_prefix('/') {
            let name = command
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .split('@')
                .next()
                .unwrap_or_default()
                .to_lowercase();
            return match name.as_str() {
                "start" | "restart" => Event::Start,
                "help" => Event::Help,
                "train" => Event::Today {
                    discipline: Discipline::Hockey,
                },
                "run" => Event::Today {
                    discipline: Discipline::Running,
                },
                _ => Event::unrecognized(trimmed),
            };
        }

        if let Some(discipline) = locale.discipline(trimmed) {
            return Event::ChooseDiscipline(discipline);
        }
        if let Some(day) = locale.day(trimmed) {
            return Event::ChooseDay(day);
        }
        Event::unrecognized(trimmed)
    }

    fn unrecognized(text: &str) -> Self {
        Event::Unrecognized {
            text: text.to_string(),
        }
    }

    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Start => "start",
            Event::Help => "help",
            Event::Today { .. } => "today",
            Event::ChooseDiscipline(_) => "choose_discipline",
            Event::ChooseDay(_) => "choose_day",
            Event::Unrecognized { .. } => "unrecognized",
        }
    }
}
