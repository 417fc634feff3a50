use std::sync::Arc;

use delegation::{PipelineOpsLike, PipelineOpsService};
use slack::{SlackClient, SlackSurfaceLike};

use crate::config::ServerConfig;
use crate::logic::guard::SubmitGuard;
use crate::logic::notify::Notifier;
use crate::logic::wizard::Wizard;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub wizard: Arc<Wizard>,
}

impl AppState {
    /// Production wiring: real Slack client, real AWS clients.
    pub async fn from_config(config: &ServerConfig) -> Self {
        let slack: Arc<dyn SlackSurfaceLike> =
            Arc::new(SlackClient::new(config.slack_access_token.clone()));
        let ops: Arc<dyn PipelineOpsLike> = Arc::new(
            PipelineOpsService::from_env(
                config.management_role_arn.clone(),
                config.account_role_name.clone(),
            )
            .await,
        );
        Self::new(slack, ops)
    }

    /// Wire explicit collaborators. Tests inject recording doubles here.
    pub fn new(slack: Arc<dyn SlackSurfaceLike>, ops: Arc<dyn PipelineOpsLike>) -> Self {
        let notifier = Notifier::new(slack.clone());
        let wizard = Wizard::new(slack, ops, notifier, SubmitGuard::new());
        Self {
            wizard: Arc::new(wizard),
        }
    }
}
