//! Effects produced by state transitions

use crate::content::Discipline;
use crate::day::Weekday;

/// Keyboard shown alongside a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Discipline,
    Day,
}

/// The single outbound message a transition asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Prompt for a discipline with the discipline keyboard
    ShowDisciplineMenu,

    /// Prompt for a day with the day keyboard
    ShowDayMenu { discipline: Discipline },

    /// Tell the user to pick from the keyboard and show it again
    Reprompt { menu: Menu },

    /// Render the plan for a slot
    SendPlan {
        discipline: Discipline,
        weekday: Weekday,
    },

    /// Command summary, keeping whatever keyboard is current
    ShowHelp { menu: Option<Menu> },

    /// Idle chat that is not a command
    StartHint,
}

impl Effect {
    /// Menu the reply should carry, if any
    pub fn menu(&self) -> Option<Menu> {
        match self {
            Effect::ShowDisciplineMenu => Some(Menu::Discipline),
            Effect::ShowDayMenu { .. } => Some(Menu::Day),
            Effect::Reprompt { menu } => Some(*menu),
            Effect::ShowHelp { menu } => *menu,
            Effect::SendPlan { .. } | Effect::StartHint => None,
        }
    }
}
