//! HTTP request handlers
//!
//! Thin JSON layer over the wizard core. Every mutating endpoint returns the
//! fresh state it produced, so the client never needs a refresh signal; it
//! simply re-renders from the response (and re-queries `/feedback` to observe
//! other participants' submissions).

use crate::server::{AppContext, UserSession};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use irl_common::db::{self, FeedbackRecord};
use irl_common::section::{derive_section_key, TaxonomySelection};
use irl_common::session::{verify_passcode, SessionIdentity};
use irl_common::taxonomy::{self, ChildAttribute};
use irl_common::wizard::{WizardState, WizardStep};
use irl_common::Error;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    module: String,
    version: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    status: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    passcode: String,
    #[serde(default)]
    display_name: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    session_token: String,
    display_name: String,
    wizard: WizardStateInfo,
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    session_token: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    session_token: String,
}

/// Rendered wizard position. `at_first`/`at_last` tell the client which
/// navigation button to present as disabled.
#[derive(Debug, Serialize)]
pub struct WizardStateInfo {
    step_index: usize,
    step_name: &'static str,
    total_steps: usize,
    at_first: bool,
    at_last: bool,
}

impl WizardStateInfo {
    fn from_state(state: &WizardState) -> Self {
        WizardStateInfo {
            step_index: state.current_index(),
            step_name: state.current_step().as_str(),
            total_steps: state.total_steps(),
            at_first: state.is_first(),
            at_last: state.is_last(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaxonomyResponse {
    steps: Vec<&'static str>,
    method_categories: Vec<&'static str>,
    parent_attributes: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct ChildrenQuery {
    category: String,
    parent: String,
}

#[derive(Debug, Serialize)]
pub struct ChildrenResponse {
    children: Vec<ChildAttribute>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    session_token: String,
    selection: TaxonomySelection,
    body: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitFeedbackResponse {
    record: FeedbackRecord,
    section: String,
}

#[derive(Debug, Deserialize)]
pub struct ListFeedbackQuery {
    step: String,
    section: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListFeedbackResponse {
    feedback: Vec<FeedbackRecord>,
}

#[derive(Debug, Serialize)]
pub struct DeleteFeedbackResponse {
    deleted: bool,
}

type HandlerError = (StatusCode, Json<StatusResponse>);

fn status_error(code: StatusCode, message: impl Into<String>) -> HandlerError {
    (
        code,
        Json(StatusResponse {
            status: message.into(),
        }),
    )
}

fn unknown_session() -> HandlerError {
    status_error(StatusCode::UNAUTHORIZED, "unknown or expired session")
}

// ============================================================================
// Health Endpoint
// ============================================================================

/// GET /health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        module: "irl_ui".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Login Gate
// ============================================================================

/// POST /login - Passcode check and session creation
pub async fn login(
    State(ctx): State<AppContext>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HandlerError> {
    if !verify_passcode(&req.passcode, &ctx.passcode) {
        warn!("Login attempt with incorrect passcode");
        return Err(status_error(StatusCode::UNAUTHORIZED, "incorrect passcode"));
    }

    let identity = SessionIdentity::new(&req.display_name);
    let wizard = WizardState::new();
    let token = identity.user_id.clone();
    let display_name = identity.display_name.clone();

    ctx.sessions
        .lock()
        .expect("session registry lock poisoned")
        .insert(token.clone(), UserSession { identity, wizard });

    info!("New participant session for {}", display_name);

    Ok(Json(LoginResponse {
        session_token: token,
        display_name,
        wizard: WizardStateInfo::from_state(&wizard),
    }))
}

/// POST /logout - Discard a session
///
/// Idempotent: logging out an unknown token is a no-op.
pub async fn logout(
    State(ctx): State<AppContext>,
    Json(req): Json<SessionRequest>,
) -> Json<StatusResponse> {
    ctx.sessions
        .lock()
        .expect("session registry lock poisoned")
        .remove(&req.session_token);
    Json(StatusResponse {
        status: "logged out".to_string(),
    })
}

// ============================================================================
// Wizard Navigation
// ============================================================================

/// GET /wizard/state - Current wizard position for a session
pub async fn wizard_state(
    State(ctx): State<AppContext>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<WizardStateInfo>, HandlerError> {
    let session = ctx.session(&query.session_token).ok_or_else(unknown_session)?;
    Ok(Json(WizardStateInfo::from_state(&session.wizard)))
}

/// POST /wizard/next - Advance one step (clamped at the last step)
pub async fn wizard_next(
    State(ctx): State<AppContext>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<WizardStateInfo>, HandlerError> {
    let state = ctx
        .update_wizard(&req.session_token, WizardState::next)
        .ok_or_else(unknown_session)?;
    Ok(Json(WizardStateInfo::from_state(&state)))
}

/// POST /wizard/previous - Step back (clamped at the first step)
pub async fn wizard_previous(
    State(ctx): State<AppContext>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<WizardStateInfo>, HandlerError> {
    let state = ctx
        .update_wizard(&req.session_token, WizardState::previous)
        .ok_or_else(unknown_session)?;
    Ok(Json(WizardStateInfo::from_state(&state)))
}

// ============================================================================
// Taxonomy Reference
// ============================================================================

/// GET /taxonomy - Step names and flat category/attribute lists
pub async fn taxonomy_overview() -> Json<TaxonomyResponse> {
    Json(TaxonomyResponse {
        steps: WizardStep::ALL.iter().map(WizardStep::as_str).collect(),
        method_categories: taxonomy::METHOD_CATEGORIES.to_vec(),
        parent_attributes: taxonomy::PARENT_ATTRIBUTES.to_vec(),
    })
}

/// GET /taxonomy/children - Child attributes for a (category, parent) pair
///
/// An undefined pair yields an empty list, not an error; the client falls
/// back to the "General" choice.
pub async fn taxonomy_children(Query(query): Query<ChildrenQuery>) -> Json<ChildrenResponse> {
    Json(ChildrenResponse {
        children: taxonomy::child_attributes(&query.category, &query.parent).to_vec(),
    })
}

// ============================================================================
// Feedback
// ============================================================================

/// POST /feedback - Submit feedback against the session's current step
///
/// The section key is derived server-side from the submitted selection.
pub async fn submit_feedback(
    State(ctx): State<AppContext>,
    Json(req): Json<SubmitFeedbackRequest>,
) -> Result<Json<SubmitFeedbackResponse>, HandlerError> {
    let session = ctx.session(&req.session_token).ok_or_else(unknown_session)?;
    let step = session.wizard.current_step();
    let section = derive_section_key(step, &req.selection);

    match db::add_feedback(
        &ctx.db_pool,
        &session.identity.user_id,
        &session.identity.display_name,
        step,
        &section,
        &req.body,
    )
    .await
    {
        Ok(record) => Ok(Json(SubmitFeedbackResponse { record, section })),
        Err(Error::InvalidInput(message)) => {
            Err(status_error(StatusCode::BAD_REQUEST, message))
        }
        Err(e) => {
            error!("Failed to store feedback: {}", e);
            Err(status_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("error: {}", e),
            ))
        }
    }
}

/// GET /feedback - List feedback for a step, optionally one section
pub async fn list_feedback(
    State(ctx): State<AppContext>,
    Query(query): Query<ListFeedbackQuery>,
) -> Result<Json<ListFeedbackResponse>, HandlerError> {
    let step = WizardStep::from_name(&query.step).ok_or_else(|| {
        status_error(
            StatusCode::BAD_REQUEST,
            format!("unknown wizard step: {}", query.step),
        )
    })?;

    match db::list_feedback(&ctx.db_pool, step, query.section.as_deref()).await {
        Ok(feedback) => Ok(Json(ListFeedbackResponse { feedback })),
        Err(e) => {
            error!("Failed to list feedback: {}", e);
            Err(status_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("error: {}", e),
            ))
        }
    }
}

/// DELETE /feedback/:id - Delete the caller's own record
///
/// `deleted: false` covers every non-matching case: wrong id, someone
/// else's record, or already deleted. The client presents it as "nothing to
/// delete / not yours", never as a failure.
pub async fn delete_feedback(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<DeleteFeedbackResponse>, HandlerError> {
    let session = ctx.session(&query.session_token).ok_or_else(unknown_session)?;

    match db::delete_feedback(&ctx.db_pool, id, &session.identity.user_id).await {
        Ok(deleted) => Ok(Json(DeleteFeedbackResponse { deleted })),
        Err(e) => {
            error!("Failed to delete feedback {}: {}", id, e);
            Err(status_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("error: {}", e),
            ))
        }
    }
}
