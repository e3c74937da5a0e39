//! Mock implementations for testing
//!
//! These mocks enable runtime tests without real clocks or storage.

use super::traits::{Clock, StateStore};
use crate::day::Weekday;
use crate::state_machine::ConvState;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Clock pinned to one weekday
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Weekday);

impl Clock for FixedClock {
    fn today(&self) -> Weekday {
        self.0
    }
}

/// Store whose every call fails, counting attempts
#[derive(Debug, Default)]
pub struct FailingStateStore {
    pub calls: AtomicUsize,
}

#[async_trait]
impl StateStore for FailingStateStore {
    async fn get_state(&self, _conv_id: &str) -> Result<Option<ConvState>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err("store unavailable".to_string())
    }

    async fn update_state(&self, _conv_id: &str, _state: &ConvState) -> Result<(), String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err("store unavailable".to_string())
    }
}

/// Store whose reads never complete, for cancellation tests
#[derive(Debug, Default, Clone, Copy)]
pub struct StallingStateStore;

#[async_trait]
impl StateStore for StallingStateStore {
    async fn get_state(&self, _conv_id: &str) -> Result<Option<ConvState>, String> {
        std::future::pending().await
    }

    async fn update_state(&self, _conv_id: &str, _state: &ConvState) -> Result<(), String> {
        Ok(())
    }
}
