use std::sync::Arc;

use slack::{PostMessageRequest, SlackSurfaceLike};
use tracing::info;

use crate::error::AppError;

const NOTIFY_CHANNEL: &str = "#deployments";
const NOTIFY_USERNAME: &str = "Gantry";
const NOTIFY_ICON: &str = ":rocket:";

fn confirmation_text(pipeline_name: &str) -> String {
    format!("Pipeline execution started for: `{pipeline_name}`")
}

/// Posts the channel announcement after an execution starts.
pub struct Notifier {
    slack: Arc<dyn SlackSurfaceLike>,
}

impl Notifier {
    pub fn new(slack: Arc<dyn SlackSurfaceLike>) -> Self {
        Self { slack }
    }

    pub async fn execution_started(&self, pipeline_name: &str) -> Result<(), AppError> {
        let request = PostMessageRequest {
            channel: NOTIFY_CHANNEL.to_string(),
            text: confirmation_text(pipeline_name),
            username: Some(NOTIFY_USERNAME.to_string()),
            icon_emoji: Some(NOTIFY_ICON.to_string()),
        };
        self.slack.post_message(&request).await?;
        info!(pipeline_name, channel = NOTIFY_CHANNEL, "announced execution start");
        Ok(())
    }
}
