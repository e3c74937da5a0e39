//! Read-only content store backed by JSON files

use super::error::ContentError;
use super::plan::{Discipline, Exercise, ExerciseGroup, Plan, PlanContent};
use crate::day::Weekday;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

/// Week of the running programme served when none is configured
pub const DEFAULT_RUN_WEEK: &str = "1-я неделя";

const LINK_MAP_FILE: &str = "link_map.json";
const WORKOUT_SETS_FILE: &str = "workout_sets.json";
const RUN_FILE: &str = "run.json";
const OVERRIDES_FILE: &str = "overrides.json";

/// Exercise labels, per-slot plans and special-day overrides.
///
/// An empty store is valid and answers "nothing scheduled" for every slot.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    links: HashMap<String, String>,
    plans: HashMap<(Discipline, Weekday), PlanContent>,
    overrides: HashMap<(Discipline, Weekday), String>,
}

impl ContentStore {
    /// Load every content file from `dir`.
    ///
    /// Hockey plans come from `workout_sets.json`, running notes from the
    /// `run_week` section of `run.json`.
    pub fn load(dir: &Path, run_week: &str) -> Result<Self, ContentError> {
        let links: HashMap<String, String> = read_json(&dir.join(LINK_MAP_FILE))?;

        let mut store = Self {
            links,
            ..Self::default()
        };

        let sets_path = dir.join(WORKOUT_SETS_FILE);
        let sets: Map<String, Value> = read_json(&sets_path)?;
        for (code, categories) in sets {
            let day = parse_day(&sets_path, &code)?;
            let groups = parse_groups(&sets_path, &code, categories)?;
            store = store.with_plan(Discipline::Hockey, day, PlanContent::Exercises(groups));
        }

        let run_path = dir.join(RUN_FILE);
        let mut weeks: HashMap<String, HashMap<String, String>> = read_json(&run_path)?;
        let week = weeks
            .remove(run_week)
            .ok_or_else(|| ContentError::MissingWeek(run_week.to_string()))?;
        for (code, note) in week {
            let day = parse_day(&run_path, &code)?;
            store = store.with_plan(Discipline::Running, day, PlanContent::Note(note));
        }

        let overrides_path = dir.join(OVERRIDES_FILE);
        let overrides: HashMap<String, HashMap<String, String>> = read_json(&overrides_path)?;
        for (discipline_code, days) in overrides {
            let discipline = Discipline::from_code(&discipline_code).ok_or_else(|| {
                ContentError::schema(
                    &overrides_path,
                    format!("unknown discipline {discipline_code:?}"),
                )
            })?;
            for (code, text) in days {
                let day = parse_day(&overrides_path, &code)?;
                store = store.with_override(discipline, day, text);
            }
        }

        Ok(store)
    }

    #[allow(dead_code)] // Builder for programmatic content
    pub fn with_link(mut self, exercise: impl Into<String>, label: impl Into<String>) -> Self {
        self.links.insert(exercise.into(), label.into());
        self
    }

    pub fn with_plan(mut self, discipline: Discipline, day: Weekday, content: PlanContent) -> Self {
        self.plans.insert((discipline, day), content);
        self
    }

    pub fn with_override(
        mut self,
        discipline: Discipline,
        day: Weekday,
        text: impl Into<String>,
    ) -> Self {
        self.overrides.insert((discipline, day), text.into());
        self
    }

    /// Resolve the plan for a slot. Overrides win unconditionally.
    pub fn plan(&self, discipline: Discipline, day: Weekday) -> Plan<'_> {
        if let Some(text) = self.overrides.get(&(discipline, day)) {
            return Plan::Override(text);
        }
        match self.plans.get(&(discipline, day)) {
            Some(content) if content.is_empty() => Plan::Nothing,
            Some(PlanContent::Exercises(groups)) => Plan::Exercises(groups),
            Some(PlanContent::Note(note)) => Plan::Note(note),
            None => Plan::Nothing,
        }
    }

    /// Link-map label for an exercise. Labels are trusted HTML.
    pub fn link_label(&self, name: &str) -> Option<&str> {
        self.links.get(name).map(String::as_str)
    }

    /// Number of (plan slots, override slots), for startup logging
    pub fn slot_counts(&self) -> (usize, usize) {
        (self.plans.len(), self.overrides.len())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ContentError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_day(path: &Path, code: &str) -> Result<Weekday, ContentError> {
    Weekday::from_code(code)
        .ok_or_else(|| ContentError::schema(path, format!("unknown weekday {code:?}")))
}

fn parse_groups(
    path: &Path,
    code: &str,
    categories: Value,
) -> Result<Vec<ExerciseGroup>, ContentError> {
    let Value::Object(categories) = categories else {
        return Err(ContentError::schema(
            path,
            format!("{code}: expected an object of categories"),
        ));
    };

    categories
        .into_iter()
        .map(|(category, exercises)| {
            let Value::Object(exercises) = exercises else {
                return Err(ContentError::schema(
                    path,
                    format!("{code}/{category}: expected an object of exercises"),
                ));
            };
            let exercises = exercises
                .into_iter()
                .map(|(name, reps)| {
                    let reps = match reps {
                        Value::String(s) => s,
                        Value::Number(n) => n.to_string(),
                        other => {
                            return Err(ContentError::schema(
                                path,
                                format!("{code}/{category}/{name}: unsupported reps {other}"),
                            ))
                        }
                    };
                    Ok(Exercise { name, reps })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ExerciseGroup {
                category,
                exercises,
            })
        })
        .collect()
}
