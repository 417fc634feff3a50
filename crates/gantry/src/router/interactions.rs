//! Slack interactivity route
//!
//! Slack sends every interaction for the app to one URL as a form post with
//! a single `payload` field of urlencoded JSON. The route acknowledges
//! anything it does not recognize; only interactions addressed to the
//! wizard are acted on.

use axum::Router;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::routing::post;
use serde::Deserialize;
use slack::types::InteractionEnvelope;
use tower_http::trace::TraceLayer;
use tracing::{trace, warn};

use crate::error::AppError;
use crate::logic::dispatch::{self, Route};
use crate::state::AppState;

pub const INTERACTIONS_PATH: &str = "/api/slack/interactions";

/// Outer form Slack wraps interaction payloads in.
#[derive(Debug, Deserialize)]
struct InteractionForm {
    payload: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(INTERACTIONS_PATH, post(route_interaction))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /api/slack/interactions - Slack interactivity endpoint
///
/// The endpoint is shared by every interactive surface of the app, so
/// unknown interaction types, unknown action ids and undecodable payloads
/// are acknowledged with 200 and dropped. A recognized interaction that
/// fails mid-step aborts with an error status; the server keeps serving.
async fn route_interaction(
    State(state): State<AppState>,
    Form(form): Form<InteractionForm>,
) -> Result<StatusCode, AppError> {
    let envelope: InteractionEnvelope = match serde_json::from_str(&form.payload) {
        Ok(envelope) => envelope,
        Err(error) => {
            warn!(%error, "undecodable interaction payload dropped");
            return Ok(StatusCode::OK);
        }
    };

    match envelope {
        InteractionEnvelope::BlockActions(payload) => {
            let Some(action) = payload.actions.first() else {
                trace!("block_actions interaction carried no actions");
                return Ok(StatusCode::OK);
            };
            match dispatch::route_action(&action.action_id) {
                Some(Route::Open) => state.wizard.open(&payload).await?,
                Some(Route::SelectAccount) => {
                    state.wizard.select_account(&payload, action).await?;
                }
                Some(Route::SelectPipeline) => {
                    state.wizard.select_pipeline(&payload, action).await?;
                }
                // Submissions never arrive as block actions.
                Some(Route::StartExecution) | None => {
                    trace!(action_id = %action.action_id, "unrouted action ignored");
                }
            }
        }
        InteractionEnvelope::ViewSubmission(payload) => {
            let callback_id = payload
                .view
                .as_ref()
                .and_then(|view| view.callback_id.as_deref())
                .unwrap_or_default();
            match dispatch::route_submission(callback_id) {
                Some(Route::StartExecution) => state.wizard.submit(&payload).await?,
                _ => trace!(callback_id, "unrouted submission ignored"),
            }
        }
        InteractionEnvelope::Unknown => {
            trace!("unhandled interaction type ignored");
        }
    }

    Ok(StatusCode::OK)
}
