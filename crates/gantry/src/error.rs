use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use delegation::DelegationError;
use slack::SlackClientError;
use tracing::error;

/// Errors surfaced by the interaction handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The wizard state carried in a view's private metadata is missing a
    /// required field or cannot be parsed. The step aborts; the dispatcher
    /// keeps running.
    #[error("malformed wizard state: {msg}")]
    MalformedState {
        msg: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Delegation(#[from] DelegationError),

    #[error(transparent)]
    Slack(#[from] SlackClientError),

    #[error("serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

impl AppError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::MalformedState {
            msg: msg.into(),
            source: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = ?self, "interaction handling failed");

        let status = match &self {
            AppError::MalformedState { .. } => StatusCode::BAD_REQUEST,
            AppError::Delegation(_) | AppError::Slack(_) => StatusCode::BAD_GATEWAY,
            AppError::Serde(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal details stay in the log record.
        let body = status.canonical_reason().unwrap_or("error").to_string();
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;

        #[test]
        fn test_malformed_state_maps_to_bad_request() {
            let response = AppError::malformed("metadata is empty").into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        #[test]
        fn test_delegation_errors_map_to_bad_gateway() {
            let err = AppError::Delegation(DelegationError::Throttled {
                context: "list pipelines".to_string(),
                message: "rate exceeded".to_string(),
                source: None,
            });
            assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
        }
    }
}
