//! Runtime for executing conversations
//!
//! Owns the per-conversation state, serialises messages within one
//! conversation and turns transition effects into replies.

mod store;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use store::InMemoryStateStore;
pub use traits::*;

use crate::content::ContentStore;
use crate::format::{Formatter, Reply};
use crate::locale::Locale;
use crate::state_machine::{transition, ConvContext, ConvState, Conversation, Event};
use std::collections::HashMap;
use std::sync::{Arc, Mutex as SyncMutex, PoisonError};
use thiserror::Error;
use tokio::sync::Mutex;

type LockMap = SyncMutex<HashMap<String, Arc<Mutex<()>>>>;

/// Type alias for production runtime with concrete implementations
pub type ProductionRuntime = RuntimeManager<InMemoryStateStore, SystemClock>;

/// Errors from [`RuntimeManager::handle_message`]. Message text never causes
/// one.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("conversation id must not be empty")]
    EmptyConversationId,
    #[error("state store error: {0}")]
    Store(String),
}

/// Outcome of one inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandledMessage {
    pub reply: Reply,
    pub state: ConvState,
}

/// Manager for all conversations
pub struct RuntimeManager<S: StateStore, C: Clock> {
    store: S,
    clock: C,
    content: Arc<ContentStore>,
    locale: Arc<Locale>,
    /// One guard per conversation with a message in flight
    locks: LockMap,
}

impl<S: StateStore, C: Clock> RuntimeManager<S, C> {
    pub fn new(store: S, clock: C, content: Arc<ContentStore>, locale: Arc<Locale>) -> Self {
        Self {
            store,
            clock,
            content,
            locale,
            locks: SyncMutex::new(HashMap::new()),
        }
    }

    /// Apply one inbound message to its conversation and produce the reply.
    ///
    /// Read, transition and write happen under the conversation's guard, so
    /// two messages for the same id never interleave.
    pub async fn handle_message(
        &self,
        conversation_id: &str,
        text: &str,
    ) -> Result<HandledMessage, RuntimeError> {
        if conversation_id.trim().is_empty() {
            return Err(RuntimeError::EmptyConversationId);
        }

        let lease = self.conversation_lock(conversation_id);
        let _guard = lease.lock.lock().await;
        self.apply(conversation_id, text).await
    }

    /// Current state without creating the conversation
    pub async fn get_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<Conversation, RuntimeError> {
        Ok(Conversation {
            conversation_id: conversation_id.to_string(),
            state: self.get_state(conversation_id).await?,
        })
    }

    pub async fn get_state(&self, conversation_id: &str) -> Result<ConvState, RuntimeError> {
        Ok(self
            .store
            .get_state(conversation_id)
            .await
            .map_err(RuntimeError::Store)?
            .unwrap_or_default())
    }

    #[allow(dead_code)] // API completeness
    pub fn store(&self) -> &S {
        &self.store
    }

    async fn apply(&self, conversation_id: &str, text: &str) -> Result<HandledMessage, RuntimeError> {
        let state = self.get_state(conversation_id).await?;
        let event = Event::classify(text, &self.locale);
        let event_kind = event.kind();

        if let Event::Unrecognized { text } = &event {
            tracing::debug!(conv_id = %conversation_id, state = state.name(), text = %text, "Unrecognized input");
        }

        let context = ConvContext::new(self.clock.today());
        let result = transition(&state, &context, event);

        self.store
            .update_state(conversation_id, &result.new_state)
            .await
            .map_err(RuntimeError::Store)?;

        tracing::info!(
            conv_id = %conversation_id,
            event = event_kind,
            from = state.name(),
            to = result.new_state.name(),
            discipline = ?result.new_state.selected_discipline(),
            "Conversation transition"
        );

        let reply = Formatter::new(&self.content, &self.locale).render(&result.effect);
        Ok(HandledMessage {
            reply,
            state: result.new_state,
        })
    }

    fn conversation_lock<'a>(&'a self, conversation_id: &'a str) -> LockLease<'a> {
        let lock = self
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(conversation_id.to_string())
            .or_default()
            .clone();
        LockLease {
            locks: &self.locks,
            conversation_id,
            lock,
        }
    }
}

/// A handle on one conversation's guard. Dropping it, on completion or when
/// the request future is cancelled, forgets the guard once nobody else holds
/// or waits on it.
struct LockLease<'a> {
    locks: &'a LockMap,
    conversation_id: &'a str,
    lock: Arc<Mutex<()>>,
}

impl Drop for LockLease<'_> {
    fn drop(&mut self) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        // The map and this lease hold the only references
        if Arc::strong_count(&self.lock) == 2 {
            locks.remove(self.conversation_id);
        }
    }
}
