//! HTTP server setup and routing
//!
//! Sets up the Axum router over the wizard core. All participant state is
//! per-session and lives in the session registry; the feedback database is
//! the only resource shared across sessions.

use crate::handlers;
use axum::{
    routing::{delete, get, post},
    Router,
};
use irl_common::{SessionIdentity, WizardState};
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// One logged-in participant: identity plus wizard position.
///
/// Created at login, dropped at logout or process exit. Never shared between
/// participants, so the registry lock is the only synchronization needed.
#[derive(Debug, Clone)]
pub struct UserSession {
    pub identity: SessionIdentity,
    pub wizard: WizardState,
}

/// Shared application context passed to all handlers
///
/// **Note:** AppContext implements Clone, which gives us `FromRef<AppContext>`
/// for free via Axum's blanket implementation.
#[derive(Clone)]
pub struct AppContext {
    pub db_pool: SqlitePool,
    /// Live sessions keyed by session token (the identity's opaque user id).
    pub sessions: Arc<Mutex<HashMap<String, UserSession>>>,
    /// Shared login passcode, resolved once at startup.
    pub passcode: Arc<String>,
}

impl AppContext {
    pub fn new(db_pool: SqlitePool, passcode: String) -> Self {
        AppContext {
            db_pool,
            sessions: Arc::new(Mutex::new(HashMap::new())),
            passcode: Arc::new(passcode),
        }
    }

    /// Snapshot of a live session, if the token is known.
    pub fn session(&self, token: &str) -> Option<UserSession> {
        self.sessions
            .lock()
            .expect("session registry lock poisoned")
            .get(token)
            .cloned()
    }

    /// Apply a wizard transition to a live session, returning the fresh
    /// state. `None` when the token is unknown.
    pub fn update_wizard(
        &self,
        token: &str,
        transition: impl FnOnce(&mut WizardState),
    ) -> Option<WizardState> {
        let mut sessions = self
            .sessions
            .lock()
            .expect("session registry lock poisoned");
        let session = sessions.get_mut(token)?;
        transition(&mut session.wizard);
        Some(session.wizard)
    }
}

/// Build the application router.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health))
        // Login gate
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        // Wizard navigation
        .route("/wizard/state", get(handlers::wizard_state))
        .route("/wizard/next", post(handlers::wizard_next))
        .route("/wizard/previous", post(handlers::wizard_previous))
        // Taxonomy reference (read-only)
        .route("/taxonomy", get(handlers::taxonomy_overview))
        .route("/taxonomy/children", get(handlers::taxonomy_children))
        // Feedback
        .route("/feedback", post(handlers::submit_feedback))
        .route("/feedback", get(handlers::list_feedback))
        .route("/feedback/:id", delete(handlers::delete_feedback))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}

/// Run the HTTP service until the process is stopped.
pub async fn run(port: u16, ctx: AppContext) -> anyhow::Result<()> {
    let app = router(ctx);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
