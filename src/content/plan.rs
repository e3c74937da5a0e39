//! Plan content types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workout category a user can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    Hockey,
    Running,
}

impl Discipline {
    pub const ALL: [Discipline; 2] = [Discipline::Hockey, Discipline::Running];

    /// Key used in the content files
    pub fn code(self) -> &'static str {
        match self {
            Discipline::Hockey => "hockey",
            Discipline::Running => "running",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One exercise line: raw name (resolved through the link map when
/// rendered) and its repetitions, e.g. "10x3"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub reps: String,
}

impl Exercise {
    #[allow(dead_code)] // Constructor for programmatic content
    pub fn new(name: impl Into<String>, reps: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reps: reps.into(),
        }
    }
}

/// Exercises under one category heading, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseGroup {
    pub category: String,
    pub exercises: Vec<Exercise>,
}

/// Stored content for a (discipline, weekday) slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanContent {
    Exercises(Vec<ExerciseGroup>),
    Note(String),
}

impl PlanContent {
    /// True when rendering would produce no body
    pub fn is_empty(&self) -> bool {
        match self {
            PlanContent::Exercises(groups) => groups.iter().all(|g| g.exercises.is_empty()),
            PlanContent::Note(note) => note.trim().is_empty(),
        }
    }
}

/// Resolved plan for a slot, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan<'a> {
    /// Special-day announcement; preempts any stored content
    Override(&'a str),
    Exercises(&'a [ExerciseGroup]),
    Note(&'a str),
    /// Nothing scheduled for this slot
    Nothing,
}
