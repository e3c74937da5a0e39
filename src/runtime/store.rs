//! In-process conversation state store

use super::traits::StateStore;
use crate::state_machine::ConvState;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Conversation states held in memory.
///
/// Returning to `Idle` drops the entry, so only conversations with an open
/// menu occupy space. Everything is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    states: RwLock<HashMap<String, ConvState>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of conversations with an open menu
    #[allow(dead_code)] // State query utility
    pub async fn open_conversations(&self) -> usize {
        self.states.read().await.len()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn get_state(&self, conv_id: &str) -> Result<Option<ConvState>, String> {
        Ok(self.states.read().await.get(conv_id).copied())
    }

    async fn update_state(&self, conv_id: &str, state: &ConvState) -> Result<(), String> {
        let mut states = self.states.write().await;
        if *state == ConvState::Idle {
            states.remove(conv_id);
        } else {
            states.insert(conv_id.to_string(), *state);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Discipline;

    #[tokio::test]
    async fn unknown_conversation_has_no_state() {
        let store = InMemoryStateStore::new();
        assert_eq!(store.get_state("1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_then_get() {
        let store = InMemoryStateStore::new();
        let state = ConvState::AwaitingDay {
            discipline: Discipline::Hockey,
        };
        store.update_state("1", &state).await.unwrap();
        assert_eq!(store.get_state("1").await.unwrap(), Some(state));
        assert_eq!(store.get_state("2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn idle_drops_entry() {
        let store = InMemoryStateStore::new();
        store
            .update_state("1", &ConvState::AwaitingDiscipline)
            .await
            .unwrap();
        assert_eq!(store.open_conversations().await, 1);

        store.update_state("1", &ConvState::Idle).await.unwrap();
        assert_eq!(store.open_conversations().await, 0);
        assert_eq!(store.get_state("1").await.unwrap(), None);
    }
}
