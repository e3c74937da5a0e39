//! Conversation state types

use crate::content::Discipline;
use crate::day::Weekday;
use serde::{Deserialize, Serialize};

/// Conversation state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConvState {
    /// No menu open; waiting for a start command
    #[default]
    Idle,

    /// Discipline menu sent
    AwaitingDiscipline,

    /// Day menu sent for the chosen discipline
    AwaitingDay { discipline: Discipline },
}

impl ConvState {
    /// Discipline picked in this session, only set while choosing a day
    pub fn selected_discipline(&self) -> Option<Discipline> {
        match self {
            ConvState::AwaitingDay { discipline } => Some(*discipline),
            ConvState::Idle | ConvState::AwaitingDiscipline => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConvState::Idle => "idle",
            ConvState::AwaitingDiscipline => "awaiting_discipline",
            ConvState::AwaitingDay { .. } => "awaiting_day",
        }
    }
}

/// A chat session as held by the state store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub conversation_id: String,
    pub state: ConvState,
}

/// Per-message context for a transition (immutable inputs the pure
/// transition needs but does not own)
#[derive(Debug, Clone)]
pub struct ConvContext {
    /// Day used for "today" shortcuts
    pub today: Weekday,
}

impl ConvContext {
    pub fn new(today: Weekday) -> Self {
        Self { today }
    }
}
