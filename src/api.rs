//! HTTP API for the fitness bot
//!
//! Telegram webhook adapter plus a small JSON API over the same runtime.

mod handlers;
mod telegram;
mod types;

pub use handlers::create_router;

use crate::runtime::ProductionRuntime;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<ProductionRuntime>,
    /// Expected webhook secret token, if configured
    pub webhook_secret: Option<Arc<str>>,
}

impl AppState {
    pub fn new(runtime: ProductionRuntime, webhook_secret: Option<String>) -> Self {
        Self {
            runtime: Arc::new(runtime),
            webhook_secret: webhook_secret.map(Arc::from),
        }
    }
}
