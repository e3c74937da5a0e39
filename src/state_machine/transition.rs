//! Pure state transition function

use super::{ConvContext, ConvState, Effect, Event, Menu};

/// Result of a state transition: the next state and exactly one effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub new_state: ConvState,
    pub effect: Effect,
}

impl TransitionResult {
    pub fn new(state: ConvState, effect: Effect) -> Self {
        Self {
            new_state: state,
            effect,
        }
    }
}

/// Pure transition function
///
/// Total over every (state, event) pair: unrecognised input never fails, it
/// re-prompts and leaves the state where it was.
pub fn transition(state: &ConvState, context: &ConvContext, event: Event) -> TransitionResult {
    match (state, event) {
        // ============================================================
        // Commands valid everywhere
        // ============================================================

        // Any + Start -> AwaitingDiscipline (hard reset)
        (_, Event::Start) => {
            TransitionResult::new(ConvState::AwaitingDiscipline, Effect::ShowDisciplineMenu)
        }

        // Any + Help -> unchanged, keep the open menu
        (state, Event::Help) => TransitionResult::new(
            *state,
            Effect::ShowHelp {
                menu: menu_for(state),
            },
        ),

        // Any + Today -> Idle with today's plan
        (_, Event::Today { discipline }) => TransitionResult::new(
            ConvState::Idle,
            Effect::SendPlan {
                discipline,
                weekday: context.today,
            },
        ),

        // ============================================================
        // Menu navigation
        // ============================================================

        // Idle + anything else -> Idle, point at /start
        (ConvState::Idle, _) => TransitionResult::new(ConvState::Idle, Effect::StartHint),

        // AwaitingDiscipline + discipline -> AwaitingDay
        (ConvState::AwaitingDiscipline, Event::ChooseDiscipline(discipline)) => {
            TransitionResult::new(
                ConvState::AwaitingDay { discipline },
                Effect::ShowDayMenu { discipline },
            )
        }

        // AwaitingDiscipline + other -> re-prompt
        (ConvState::AwaitingDiscipline, Event::ChooseDay(_) | Event::Unrecognized { .. }) => {
            TransitionResult::new(
                ConvState::AwaitingDiscipline,
                Effect::Reprompt {
                    menu: Menu::Discipline,
                },
            )
        }

        // AwaitingDay + day -> Idle with the plan
        (ConvState::AwaitingDay { discipline }, Event::ChooseDay(weekday)) => {
            TransitionResult::new(
                ConvState::Idle,
                Effect::SendPlan {
                    discipline: *discipline,
                    weekday,
                },
            )
        }

        // AwaitingDay + other -> re-prompt, discipline kept
        (
            ConvState::AwaitingDay { discipline },
            Event::ChooseDiscipline(_) | Event::Unrecognized { .. },
        ) => TransitionResult::new(
            ConvState::AwaitingDay {
                discipline: *discipline,
            },
            Effect::Reprompt { menu: Menu::Day },
        ),
    }
}

fn menu_for(state: &ConvState) -> Option<Menu> {
    match state {
        ConvState::Idle => None,
        ConvState::AwaitingDiscipline => Some(Menu::Discipline),
        ConvState::AwaitingDay { .. } => Some(Menu::Day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Discipline;
    use crate::day::Weekday;

    fn test_context() -> ConvContext {
        ConvContext::new(Weekday::Wednesday)
    }

    fn unrecognized(text: &str) -> Event {
        Event::Unrecognized {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_idle_start_opens_discipline_menu() {
        let result = transition(&ConvState::Idle, &test_context(), Event::Start);

        assert_eq!(result.new_state, ConvState::AwaitingDiscipline);
        assert_eq!(result.effect, Effect::ShowDisciplineMenu);
    }

    #[test]
    fn test_start_resets_mid_flow() {
        let result = transition(
            &ConvState::AwaitingDay {
                discipline: Discipline::Running,
            },
            &test_context(),
            Event::Start,
        );

        assert_eq!(result.new_state, ConvState::AwaitingDiscipline);
        assert_eq!(result.new_state.selected_discipline(), None);
    }

    #[test]
    fn test_discipline_choice_opens_day_menu() {
        let result = transition(
            &ConvState::AwaitingDiscipline,
            &test_context(),
            Event::ChooseDiscipline(Discipline::Hockey),
        );

        assert_eq!(
            result.new_state,
            ConvState::AwaitingDay {
                discipline: Discipline::Hockey
            }
        );
        assert_eq!(
            result.effect,
            Effect::ShowDayMenu {
                discipline: Discipline::Hockey
            }
        );
    }

    #[test]
    fn test_wrong_menu_choice_reprompts() {
        let result = transition(
            &ConvState::AwaitingDiscipline,
            &test_context(),
            Event::ChooseDay(Weekday::Monday),
        );
        assert_eq!(result.new_state, ConvState::AwaitingDiscipline);
        assert_eq!(
            result.effect,
            Effect::Reprompt {
                menu: Menu::Discipline
            }
        );

        let state = ConvState::AwaitingDay {
            discipline: Discipline::Hockey,
        };
        let result = transition(&state, &test_context(), unrecognized("завтра"));
        assert_eq!(result.new_state, state);
        assert_eq!(result.effect, Effect::Reprompt { menu: Menu::Day });
    }

    #[test]
    fn test_day_choice_sends_plan_and_goes_idle() {
        let result = transition(
            &ConvState::AwaitingDay {
                discipline: Discipline::Hockey,
            },
            &test_context(),
            Event::ChooseDay(Weekday::Tuesday),
        );

        assert_eq!(result.new_state, ConvState::Idle);
        assert_eq!(
            result.effect,
            Effect::SendPlan {
                discipline: Discipline::Hockey,
                weekday: Weekday::Tuesday
            }
        );
    }

    #[test]
    fn test_idle_never_cascades_into_a_plan() {
        // A day label from Idle must not be treated as a day choice
        let result = transition(
            &ConvState::Idle,
            &test_context(),
            Event::ChooseDay(Weekday::Tuesday),
        );
        assert_eq!(result.new_state, ConvState::Idle);
        assert_eq!(result.effect, Effect::StartHint);
    }

    #[test]
    fn test_today_uses_context_day() {
        let result = transition(
            &ConvState::AwaitingDiscipline,
            &test_context(),
            Event::Today {
                discipline: Discipline::Running,
            },
        );
        assert_eq!(result.new_state, ConvState::Idle);
        assert_eq!(
            result.effect,
            Effect::SendPlan {
                discipline: Discipline::Running,
                weekday: Weekday::Wednesday
            }
        );
    }

    #[test]
    fn test_help_keeps_state_and_menu() {
        let state = ConvState::AwaitingDay {
            discipline: Discipline::Running,
        };
        let result = transition(&state, &test_context(), Event::Help);
        assert_eq!(result.new_state, state);
        assert_eq!(
            result.effect,
            Effect::ShowHelp {
                menu: Some(Menu::Day)
            }
        );

        let result = transition(&ConvState::Idle, &test_context(), Event::Help);
        assert_eq!(result.effect, Effect::ShowHelp { menu: None });
    }
}
