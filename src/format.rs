//! Message formatting: plans, menus and prompts

use crate::content::{ContentStore, Discipline, ExerciseGroup, Plan};
use crate::day::Weekday;
use crate::locale::Locale;
use crate::state_machine::{Effect, Menu};
use html_escape::encode_text;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Write;

/// Day buttons per keyboard row
const DAY_ROW_WIDTH: usize = 3;

/// Outbound message: text plus suggested replies laid out as keyboard rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    pub options: Vec<Vec<String>>,
}

impl Reply {
    #[cfg(test)]
    pub fn has_option(&self, label: &str) -> bool {
        self.options.iter().flatten().any(|option| option == label)
    }
}

/// Renders effects into replies using the content store and locale
pub struct Formatter<'a> {
    content: &'a ContentStore,
    locale: &'a Locale,
}

impl<'a> Formatter<'a> {
    pub fn new(content: &'a ContentStore, locale: &'a Locale) -> Self {
        Self { content, locale }
    }

    pub fn render(&self, effect: &Effect) -> Reply {
        let texts = &self.locale.texts;
        let text = match effect {
            Effect::ShowDisciplineMenu => texts.choose_discipline.clone(),
            Effect::ShowDayMenu { .. } => texts.choose_day.clone(),
            Effect::Reprompt {
                menu: Menu::Discipline,
            } => texts.reprompt_discipline.clone(),
            Effect::Reprompt { menu: Menu::Day } => texts.reprompt_day.clone(),
            Effect::SendPlan {
                discipline,
                weekday,
            } => self.render_plan(*discipline, *weekday),
            Effect::ShowHelp { .. } => texts.help.clone(),
            Effect::StartHint => texts.start_hint.clone(),
        };

        Reply {
            text,
            options: effect
                .menu()
                .map(|menu| self.menu_options(menu))
                .unwrap_or_default(),
        }
    }

    /// Render the plan for a slot as Telegram HTML. Never empty: misses fall
    /// back to the "no data" text.
    ///
    /// Content text is escaped; only link-map labels pass through as markup.
    pub fn render_plan(&self, discipline: Discipline, weekday: Weekday) -> String {
        let header = self.locale.plan_header(discipline);
        let day = encode_text(self.locale.day_label(weekday));
        match self.content.plan(discipline, weekday) {
            Plan::Override(text) => encode_text(text).into_owned(),
            Plan::Nothing => self.locale.texts.no_data.clone(),
            Plan::Note(note) => format!("{header} {day}:\n{}", encode_text(note)),
            Plan::Exercises(groups) => {
                format!("{header} {day}:\n\n{}", self.render_groups(groups))
            }
        }
    }

    fn render_groups(&self, groups: &[ExerciseGroup]) -> String {
        let mut out = String::new();
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(out, "{}:", encode_text(&group.category));
            for exercise in &group.exercises {
                let label = match self.content.link_label(&exercise.name) {
                    Some(link) => Cow::Borrowed(link),
                    None => encode_text(&exercise.name),
                };
                let _ = write!(out, "\n  ▪️ {label} — {}", encode_text(&exercise.reps));
            }
        }
        out
    }

    fn menu_options(&self, menu: Menu) -> Vec<Vec<String>> {
        match menu {
            Menu::Discipline => vec![self.locale.discipline_labels()],
            Menu::Day => {
                let labels: Vec<String> = self.locale.days.labels().map(str::to_string).collect();
                labels
                    .chunks(DAY_ROW_WIDTH)
                    .map(<[String]>::to_vec)
                    .collect()
            }
        }
    }
}
