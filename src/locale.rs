//! User-facing strings and menu label tables

use crate::content::Discipline;
use crate::day::{normalize_label, DayTranslator, Weekday};

/// Strings and labels for one chat language
#[derive(Debug, Clone)]
pub struct Locale {
    /// (button label, aliases) per discipline
    disciplines: Vec<(Discipline, String, Vec<String>)>,
    pub days: DayTranslator,
    pub texts: Texts,
}

/// Fixed message texts
#[derive(Debug, Clone)]
pub struct Texts {
    pub choose_discipline: String,
    pub choose_day: String,
    pub reprompt_discipline: String,
    pub reprompt_day: String,
    pub start_hint: String,
    pub help: String,
    pub no_data: String,
    pub hockey_header: String,
    pub running_header: String,
}

impl Locale {
    pub fn russian() -> Self {
        Self {
            disciplines: vec![
                (
                    Discipline::Hockey,
                    "Хоккейную".to_string(),
                    vec!["Хоккей".to_string(), "Хоккейная".to_string()],
                ),
                (
                    Discipline::Running,
                    "Беговую".to_string(),
                    vec!["Бег".to_string(), "Беговая".to_string()],
                ),
            ],
            days: DayTranslator::new([
                "Понедельник",
                "Вторник",
                "Среда",
                "Четверг",
                "Пятница",
                "Суббота",
                "Воскресенье",
            ])
            .with_aliases([
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ]),
            texts: Texts {
                choose_discipline: "Выберите тип тренировки:".to_string(),
                choose_day: "Теперь выберите день недели:".to_string(),
                reprompt_discipline: "Пожалуйста, выберите тренировку с кнопки!".to_string(),
                reprompt_day: "Пожалуйста, выберите день с кнопки!".to_string(),
                start_hint: "Чтобы получить тренировку, отправьте команду /start".to_string(),
                help: [
                    "/start — выбрать тренировку и день",
                    "/train — хоккейная тренировка на сегодня",
                    "/run — беговая тренировка на сегодня",
                    "/help — эта справка",
                ]
                .join("\n"),
                no_data: "Нет данных".to_string(),
                hockey_header: "💪 Тренировка на".to_string(),
                running_header: "🏃 Беговая тренировка на".to_string(),
            },
        }
    }

    /// Match free text against discipline labels and aliases
    pub fn discipline(&self, text: &str) -> Option<Discipline> {
        let wanted = normalize_label(text);
        if wanted.is_empty() {
            return None;
        }
        self.disciplines
            .iter()
            .find(|(_, label, aliases)| {
                normalize_label(label) == wanted
                    || aliases.iter().any(|alias| normalize_label(alias) == wanted)
            })
            .map(|(discipline, _, _)| *discipline)
    }

    pub fn discipline_labels(&self) -> Vec<String> {
        self.disciplines
            .iter()
            .map(|(_, label, _)| label.clone())
            .collect()
    }

    pub fn day(&self, text: &str) -> Option<Weekday> {
        self.days.to_canonical(text)
    }

    pub fn day_label(&self, day: Weekday) -> &str {
        self.days.label(day)
    }

    /// Header line prefix for a rendered plan
    pub fn plan_header(&self, discipline: Discipline) -> &str {
        match discipline {
            Discipline::Hockey => &self.texts.hockey_header,
            Discipline::Running => &self.texts.running_header,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::russian()
    }
}
