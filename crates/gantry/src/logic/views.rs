//! Modal views for each wizard step.
//!
//! All three views share one title so the modal reads as a single surface
//! while its contents advance. Wizard progress rides along in
//! `private_metadata`; only the final summary view carries a `callback_id`,
//! so a submission can only ever originate from a fully built summary.

use delegation::{Account, Pipeline};
use slack::blocks::{Block, ModalView, SelectOption, StaticSelect};

use crate::error::AppError;
use crate::logic::dispatch::{
    ACTION_SELECT_ACCOUNT, ACTION_SELECT_PIPELINE, CALLBACK_START_EXECUTION,
};
use crate::logic::state::WizardState;

const MODAL_TITLE: &str = "CodePipeline Executions";
const INTRO_TEXT: &str = "Start a pipeline execution in CodePipeline";

/// Slack rejects static_select option labels longer than 75 characters.
const OPTION_LABEL_MAX_CHARS: usize = 75;

fn option_label(name: &str) -> String {
    name.chars().take(OPTION_LABEL_MAX_CHARS).collect()
}

/// Step one: pick an AWS account. Options arrive already sorted by display
/// name; option values carry the account id.
pub fn account_picker(accounts: &[Account]) -> ModalView {
    let options = accounts
        .iter()
        .map(|account| SelectOption::new(&account.display_name, &account.id))
        .collect();

    ModalView::new(
        MODAL_TITLE,
        vec![
            Block::section(INTRO_TEXT),
            Block::actions(vec![StaticSelect::new(
                ACTION_SELECT_ACCOUNT,
                "Select AWS account",
                options,
            )]),
        ],
    )
}

/// Step two: pick a pipeline in the chosen account. Labels are truncated to
/// the Slack limit but values keep the full pipeline name, so what gets
/// started is always the real pipeline.
pub fn pipeline_picker(
    pipelines: &[Pipeline],
    state: &WizardState,
) -> Result<ModalView, AppError> {
    let options = pipelines
        .iter()
        .map(|pipeline| SelectOption::new(option_label(&pipeline.name), &pipeline.name))
        .collect();

    let view = ModalView::new(
        MODAL_TITLE,
        vec![
            Block::section(INTRO_TEXT),
            Block::actions(vec![StaticSelect::new(
                ACTION_SELECT_PIPELINE,
                "Select a pipeline",
                options,
            )]),
        ],
    )
    .with_private_metadata(state.to_metadata()?);

    Ok(view)
}

/// Step three: the confirmation summary. This is the only view with a
/// callback id and a submit button.
pub fn confirm_summary(state: &WizardState) -> Result<ModalView, AppError> {
    let account_name = state
        .account_name
        .as_deref()
        .ok_or_else(|| AppError::malformed("summary requested before an account was chosen"))?;
    let pipeline_name = state
        .pipeline_name
        .as_deref()
        .ok_or_else(|| AppError::malformed("summary requested before a pipeline was chosen"))?;

    let view = ModalView::new(
        MODAL_TITLE,
        vec![
            Block::section(format!("*Account:* {account_name}")),
            Block::section(format!("*Pipeline:* {pipeline_name}")),
        ],
    )
    .with_callback_id(CALLBACK_START_EXECUTION)
    .with_private_metadata(state.to_metadata()?)
    .with_submit("Start Execution");

    Ok(view)
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;

        fn accounts() -> Vec<Account> {
            vec![
                Account {
                    id: "1".to_string(),
                    display_name: "alpha".to_string(),
                },
                Account {
                    id: "2".to_string(),
                    display_name: "Beta".to_string(),
                },
            ]
        }

        #[test]
        fn test_account_picker_preserves_order_and_carries_ids_as_values() {
            let view = serde_json::to_value(account_picker(&accounts())).unwrap();
            let options = &view["blocks"][1]["elements"][0]["options"];
            assert_eq!(options[0]["text"]["text"], "alpha");
            assert_eq!(options[0]["value"], "1");
            assert_eq!(options[1]["text"]["text"], "Beta");
            assert_eq!(options[1]["value"], "2");
            assert_eq!(
                view["blocks"][1]["elements"][0]["action_id"],
                ACTION_SELECT_ACCOUNT
            );
            assert!(view.get("callback_id").is_none());
        }

        #[test]
        fn test_long_pipeline_labels_are_truncated_but_values_are_not() {
            let name = "p".repeat(80);
            let pipelines = vec![Pipeline { name: name.clone() }];
            let state = WizardState::default().with_account("1", "alpha");

            let view = serde_json::to_value(pipeline_picker(&pipelines, &state).unwrap()).unwrap();
            let option = &view["blocks"][1]["elements"][0]["options"][0];
            assert_eq!(
                option["text"]["text"].as_str().unwrap().chars().count(),
                75
            );
            assert_eq!(option["value"], name.as_str());
        }

        #[test]
        fn test_truncation_counts_characters_not_bytes() {
            let name = "é".repeat(80);
            let label = option_label(&name);
            assert_eq!(label.chars().count(), 75);
            assert_eq!(label, "é".repeat(75));
        }

        #[test]
        fn test_pipeline_picker_threads_the_account_through_metadata() {
            let pipelines = vec![Pipeline {
                name: "deploy-prod".to_string(),
            }];
            let state = WizardState::default().with_account("2", "Beta");

            let view = pipeline_picker(&pipelines, &state).unwrap();
            let metadata = view.private_metadata.as_deref().unwrap();
            let parsed = WizardState::from_metadata(metadata).unwrap();
            assert_eq!(parsed.account_id.as_deref(), Some("2"));
            assert_eq!(parsed.account_name.as_deref(), Some("Beta"));
        }

        #[test]
        fn test_summary_names_both_choices_and_is_submittable() {
            let state = WizardState::default()
                .with_account("2", "Beta")
                .with_pipeline("deploy-prod");

            let view = serde_json::to_value(confirm_summary(&state).unwrap()).unwrap();
            assert_eq!(view["blocks"][0]["text"]["text"], "*Account:* Beta");
            assert_eq!(view["blocks"][1]["text"]["text"], "*Pipeline:* deploy-prod");
            assert_eq!(view["callback_id"], CALLBACK_START_EXECUTION);
            assert_eq!(view["submit"]["text"], "Start Execution");
        }

        #[test]
        fn test_summary_without_an_account_is_malformed_state() {
            let state = WizardState::default().with_pipeline("deploy-prod");
            let err = confirm_summary(&state).unwrap_err();
            assert!(matches!(err, AppError::MalformedState { .. }));
        }
    }
}
