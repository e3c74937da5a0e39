//! Core conversation state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions:
//! inbound text is classified into an [`Event`], [`transition`] decides the
//! next [`ConvState`] and exactly one [`Effect`], and the runtime turns that
//! effect into a reply.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::{Effect, Menu};
pub use event::Event;
pub use state::{ConvContext, ConvState, Conversation};
pub use transition::transition;
