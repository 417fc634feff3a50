/// Message-shortcut action that opens the wizard.
pub const ACTION_OPEN: &str = "pipeline-run_open";
/// Account picker inside the modal.
pub const ACTION_SELECT_ACCOUNT: &str = "pipeline-run_select-account";
/// Pipeline picker inside the modal.
pub const ACTION_SELECT_PIPELINE: &str = "pipeline-run_select-pipeline";
/// Callback id carried only by the final summary view.
pub const CALLBACK_START_EXECUTION: &str = "pipeline-run_start";

/// Wizard step selected by an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Open,
    SelectAccount,
    SelectPipeline,
    StartExecution,
}

/// Maps a block action id to a wizard step. Unknown ids return `None`;
/// Slack apps routinely share one interactivity URL across features, so
/// anything unrecognized is ignored rather than rejected.
pub fn route_action(action_id: &str) -> Option<Route> {
    match action_id {
        ACTION_OPEN => Some(Route::Open),
        ACTION_SELECT_ACCOUNT => Some(Route::SelectAccount),
        ACTION_SELECT_PIPELINE => Some(Route::SelectPipeline),
        _ => None,
    }
}

/// Maps a view submission callback id to a wizard step.
pub fn route_submission(callback_id: &str) -> Option<Route> {
    match callback_id {
        CALLBACK_START_EXECUTION => Some(Route::StartExecution),
        _ => None,
    }
}
