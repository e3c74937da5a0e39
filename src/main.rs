//! Fitness reminder bot
//!
//! A Telegram webhook service that walks users through a two-level menu
//! (discipline, then day) and answers with the workout plan for that day.

mod api;
mod config;
mod content;
mod day;
mod format;
mod locale;
mod runtime;
mod state_machine;

use api::{create_router, AppState};
use config::Config;
use content::ContentStore;
use locale::Locale;
use runtime::{InMemoryStateStore, RuntimeManager, SystemClock};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitness_bot=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let config = Config::from_env();

    // Content is loaded once; a broken content directory stops startup
    let content = match ContentStore::load(&config.content_dir, &config.run_week) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!(
                dir = %config.content_dir.display(),
                error = %e,
                "Failed to load content"
            );
            return Err(e.into());
        }
    };
    let (plans, overrides) = content.slot_counts();
    tracing::info!(
        dir = %config.content_dir.display(),
        run_week = %config.run_week,
        plans,
        overrides,
        "Content loaded"
    );

    if config.webhook_secret.is_none() {
        tracing::warn!("TELEGRAM_WEBHOOK_SECRET not set; webhook accepts unauthenticated updates");
    }

    // Conversation state is in-process only; a restart resets everyone to idle
    let runtime = RuntimeManager::new(
        InMemoryStateStore::new(),
        SystemClock,
        Arc::new(content),
        Arc::new(Locale::russian()),
    );
    let state = AppState::new(runtime, config.webhook_secret.clone());

    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Fitness bot listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
