//! The wizard itself: one handler per step.
//!
//! Every handler is stateless between calls. Whatever a step needs from the
//! past it reads out of the view's `private_metadata`, and whatever the next
//! step will need it writes back onto the view it renders.

use std::sync::Arc;

use delegation::PipelineOpsLike;
use slack::SlackSurfaceLike;
use slack::types::{BlockAction, BlockActionsPayload, ViewSubmissionPayload};
use tracing::{info, warn};

use crate::error::AppError;
use crate::logic::guard::SubmitGuard;
use crate::logic::notify::Notifier;
use crate::logic::state::WizardState;
use crate::logic::views;

pub struct Wizard {
    slack: Arc<dyn SlackSurfaceLike>,
    ops: Arc<dyn PipelineOpsLike>,
    notifier: Notifier,
    guard: SubmitGuard,
}

impl Wizard {
    pub fn new(
        slack: Arc<dyn SlackSurfaceLike>,
        ops: Arc<dyn PipelineOpsLike>,
        notifier: Notifier,
        guard: SubmitGuard,
    ) -> Self {
        Self {
            slack,
            ops,
            notifier,
            guard,
        }
    }

    /// Opens the modal on the account picker.
    pub async fn open(&self, payload: &BlockActionsPayload) -> Result<(), AppError> {
        let trigger_id = payload
            .trigger_id
            .as_deref()
            .ok_or_else(|| AppError::malformed("open interaction carries no trigger_id"))?;

        let accounts = self.ops.list_accounts().await?;
        let view = views::account_picker(&accounts);
        self.slack.open_view(trigger_id, &view).await?;
        info!(account_count = accounts.len(), "opened account picker");
        Ok(())
    }

    /// Records the chosen account and swaps the modal to the pipeline picker.
    pub async fn select_account(
        &self,
        payload: &BlockActionsPayload,
        action: &BlockAction,
    ) -> Result<(), AppError> {
        let view = payload
            .view
            .as_ref()
            .ok_or_else(|| AppError::malformed("account select arrived outside a view"))?;
        let option = action
            .selected_option
            .as_ref()
            .ok_or_else(|| AppError::malformed("account select carries no selected option"))?;

        let pipelines = self.ops.list_pipelines(&option.value).await?;
        let state = WizardState::from_metadata(view.metadata())?
            .with_account(&option.value, &option.text.text);
        let next = views::pipeline_picker(&pipelines, &state)?;
        self.slack
            .update_view(&view.id, view.hash.as_deref(), &next)
            .await?;
        info!(
            account_id = %option.value,
            pipeline_count = pipelines.len(),
            "advanced to pipeline picker"
        );
        Ok(())
    }

    /// Records the chosen pipeline and swaps the modal to the confirmation
    /// summary. No cloud call happens here.
    pub async fn select_pipeline(
        &self,
        payload: &BlockActionsPayload,
        action: &BlockAction,
    ) -> Result<(), AppError> {
        let view = payload
            .view
            .as_ref()
            .ok_or_else(|| AppError::malformed("pipeline select arrived outside a view"))?;
        let option = action
            .selected_option
            .as_ref()
            .ok_or_else(|| AppError::malformed("pipeline select carries no selected option"))?;

        let state = WizardState::from_metadata(view.metadata())?.with_pipeline(&option.value);
        let next = views::confirm_summary(&state)?;
        self.slack
            .update_view(&view.id, view.hash.as_deref(), &next)
            .await?;
        info!(pipeline_name = %option.value, "advanced to confirmation summary");
        Ok(())
    }

    /// Starts the execution described by the submitted view and announces it.
    ///
    /// The state is validated before the view id is claimed, so a malformed
    /// submission never burns its claim. A duplicate delivery of an already
    /// claimed view is dropped without error.
    pub async fn submit(&self, payload: &ViewSubmissionPayload) -> Result<(), AppError> {
        let view = payload
            .view
            .as_ref()
            .ok_or_else(|| AppError::malformed("submission carries no view"))?;

        let state = WizardState::from_metadata(view.metadata())?;
        let (account_id, pipeline_name) = state.require_submittable()?;

        if !self.guard.try_claim(&view.id) {
            warn!(view_id = %view.id, "duplicate submission ignored");
            return Ok(());
        }

        self.ops.start_execution(account_id, pipeline_name).await?;
        self.notifier.execution_started(pipeline_name).await?;
        info!(account_id, pipeline_name, "pipeline execution started");
        Ok(())
    }
}
