//! Trait abstractions for runtime I/O
//!
//! These traits enable testing the runtime with mock implementations.

use crate::day::Weekday;
use crate::state_machine::ConvState;
use async_trait::async_trait;
use chrono::Datelike;
use std::sync::Arc;

/// Storage for conversation state
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Current state, `None` for conversations never seen (or reset)
    async fn get_state(&self, conv_id: &str) -> Result<Option<ConvState>, String>;

    /// Replace the stored state
    async fn update_state(&self, conv_id: &str, state: &ConvState) -> Result<(), String>;
}

/// Source of "today" for shortcut commands
pub trait Clock: Send + Sync {
    fn today(&self) -> Weekday;
}

/// Server-local calendar day
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Weekday {
        chrono::Local::now().weekday().into()
    }
}

// ============================================================================
// Arc implementations for trait objects
// ============================================================================

#[async_trait]
impl<T: StateStore + ?Sized> StateStore for Arc<T> {
    async fn get_state(&self, conv_id: &str) -> Result<Option<ConvState>, String> {
        (**self).get_state(conv_id).await
    }

    async fn update_state(&self, conv_id: &str, state: &ConvState) -> Result<(), String> {
        (**self).update_state(conv_id, state).await
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn today(&self) -> Weekday {
        (**self).today()
    }
}
