//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::content::Discipline;
use crate::day::Weekday;
use crate::locale::Locale;
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_context(today: Weekday) -> ConvContext {
    ConvContext::new(today)
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_discipline() -> impl Strategy<Value = Discipline> {
    prop_oneof![Just(Discipline::Hockey), Just(Discipline::Running)]
}

fn arb_weekday() -> impl Strategy<Value = Weekday> {
    prop::sample::select(Weekday::ALL.to_vec())
}

fn arb_state() -> impl Strategy<Value = ConvState> {
    prop_oneof![
        Just(ConvState::Idle),
        Just(ConvState::AwaitingDiscipline),
        arb_discipline().prop_map(|discipline| ConvState::AwaitingDay { discipline }),
    ]
}

fn arb_unrecognized() -> impl Strategy<Value = Event> {
    "[a-zA-Z0-9 !?.]{0,20}".prop_map(|text| Event::Unrecognized { text })
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::Start),
        Just(Event::Help),
        arb_discipline().prop_map(|discipline| Event::Today { discipline }),
        arb_discipline().prop_map(Event::ChooseDiscipline),
        arb_weekday().prop_map(Event::ChooseDay),
        arb_unrecognized(),
    ]
}

/// Raw message text: labels, commands and noise
fn arb_text() -> impl Strategy<Value = String> {
    let locale = Locale::russian();
    let mut labels: Vec<String> = locale.discipline_labels();
    labels.extend(locale.days.labels().map(str::to_string));
    prop_oneof![
        prop::sample::select(labels),
        prop::sample::select(vec![
            "/start".to_string(),
            "/help".to_string(),
            "/train".to_string(),
            "/run".to_string(),
            "/unknown".to_string(),
        ]),
        any::<String>(),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_start_always_opens_discipline_menu(state in arb_state(), today in arb_weekday()) {
        let result = transition(&state, &test_context(today), Event::Start);
        prop_assert_eq!(result.new_state, ConvState::AwaitingDiscipline);
        prop_assert_eq!(result.effect, Effect::ShowDisciplineMenu);
    }

    #[test]
    fn prop_start_is_idempotent(state in arb_state(), today in arb_weekday()) {
        let ctx = test_context(today);
        let once = transition(&state, &ctx, Event::Start);
        let twice = transition(&once.new_state, &ctx, Event::Start);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_invalid_input_is_a_fixed_point(
        discipline in arb_discipline(),
        event in arb_unrecognized(),
        today in arb_weekday(),
    ) {
        let ctx = test_context(today);
        for state in [ConvState::AwaitingDiscipline, ConvState::AwaitingDay { discipline }] {
            let result = transition(&state, &ctx, event.clone());
            prop_assert_eq!(result.new_state, state);
            let is_reprompt = matches!(result.effect, Effect::Reprompt { .. });
            prop_assert!(is_reprompt);
        }
    }

    #[test]
    fn prop_day_choice_returns_to_idle_with_plan(
        discipline in arb_discipline(),
        weekday in arb_weekday(),
        today in arb_weekday(),
    ) {
        let result = transition(
            &ConvState::AwaitingDay { discipline },
            &test_context(today),
            Event::ChooseDay(weekday),
        );
        prop_assert_eq!(result.new_state, ConvState::Idle);
        prop_assert_eq!(result.effect, Effect::SendPlan { discipline, weekday });
    }

    #[test]
    fn prop_transition_is_deterministic(
        state in arb_state(),
        event in arb_event(),
        today in arb_weekday(),
    ) {
        let ctx = test_context(today);
        let a = transition(&state, &ctx, event.clone());
        let b = transition(&state, &ctx, event);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_plans_only_follow_a_selection(
        state in arb_state(),
        event in arb_event(),
        today in arb_weekday(),
    ) {
        let result = transition(&state, &test_context(today), event.clone());
        if let Effect::SendPlan { discipline, .. } = result.effect {
            // Either an explicit shortcut or the discipline picked earlier
            match event {
                Event::Today { discipline: wanted } => prop_assert_eq!(discipline, wanted),
                _ => prop_assert_eq!(state.selected_discipline(), Some(discipline)),
            }
            prop_assert_eq!(result.new_state, ConvState::Idle);
        }
    }

    #[test]
    fn prop_menus_match_next_state(
        state in arb_state(),
        event in arb_event(),
        today in arb_weekday(),
    ) {
        let result = transition(&state, &test_context(today), event);
        match result.effect.menu() {
            Some(Menu::Discipline) => {
                prop_assert_eq!(result.new_state, ConvState::AwaitingDiscipline);
            }
            Some(Menu::Day) => {
                prop_assert!(result.new_state.selected_discipline().is_some());
            }
            None => {}
        }
    }

    #[test]
    fn prop_event_sequences_keep_invariant(
        events in proptest::collection::vec(arb_event(), 0..30),
        today in arb_weekday(),
    ) {
        let ctx = test_context(today);
        let mut state = ConvState::Idle;
        for event in events {
            let result = transition(&state, &ctx, event);
            state = result.new_state;
            let awaiting_day = matches!(state, ConvState::AwaitingDay { .. });
            prop_assert_eq!(awaiting_day, state.selected_discipline().is_some());
        }
    }

    #[test]
    fn prop_classify_accepts_any_text(text in arb_text()) {
        let locale = Locale::russian();
        let event = Event::classify(&text, &locale);
        if !text.trim().starts_with('/') {
            let is_command = matches!(event, Event::Start | Event::Help | Event::Today { .. });
            prop_assert!(!is_command);
        }
    }

    #[test]
    fn prop_classify_recognises_every_day_label(weekday in arb_weekday()) {
        let locale = Locale::russian();
        let label = locale.day_label(weekday).to_uppercase();
        prop_assert_eq!(Event::classify(&label, &locale), Event::ChooseDay(weekday));
    }
}
