use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Wizard progress carried between modal renders.
///
/// Slack stores this for us in the view's `private_metadata` field and
/// echoes it back verbatim on every interaction, so the server holds no
/// per-conversation state. Fields only ever accumulate: each step parses
/// the incoming metadata, appends what the user just chose, and writes the
/// result onto the next view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_name: Option<String>,
}

impl WizardState {
    /// Parses the metadata string echoed back by Slack. An empty string is
    /// the blank state; anything else must be valid JSON.
    pub fn from_metadata(metadata: &str) -> Result<Self, AppError> {
        if metadata.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(metadata).map_err(|err| AppError::MalformedState {
            msg: "view metadata is not valid wizard state".to_string(),
            source: Some(anyhow::Error::new(err)),
        })
    }

    pub fn to_metadata(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_account(mut self, id: &str, name: &str) -> Self {
        self.account_id = Some(id.to_string());
        self.account_name = Some(name.to_string());
        self
    }

    pub fn with_pipeline(mut self, name: &str) -> Self {
        self.pipeline_name = Some(name.to_string());
        self
    }

    /// Returns the account id and pipeline name, which both must be present
    /// for a submission to be actionable.
    pub fn require_submittable(&self) -> Result<(&str, &str), AppError> {
        let account_id = self
            .account_id
            .as_deref()
            .ok_or_else(|| AppError::malformed("submission has no account id"))?;
        let pipeline_name = self
            .pipeline_name
            .as_deref()
            .ok_or_else(|| AppError::malformed("submission has no pipeline name"))?;
        Ok((account_id, pipeline_name))
    }
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;

        #[test]
        fn test_empty_metadata_is_the_blank_state() {
            let state = WizardState::from_metadata("").unwrap();
            assert_eq!(state, WizardState::default());
        }

        #[test]
        fn test_state_survives_a_metadata_round_trip() {
            let state = WizardState::default()
                .with_account("123456789012", "Data Platform")
                .with_pipeline("deploy-prod");
            let metadata = state.to_metadata().unwrap();
            let parsed = WizardState::from_metadata(&metadata).unwrap();
            assert_eq!(parsed, state);
        }

        #[test]
        fn test_metadata_keys_are_camel_case() {
            let metadata = WizardState::default()
                .with_account("1", "alpha")
                .to_metadata()
                .unwrap();
            assert!(metadata.contains("\"accountId\""));
            assert!(metadata.contains("\"accountName\""));
            assert!(!metadata.contains("pipelineName"));
        }

        #[test]
        fn test_garbage_metadata_is_malformed_state() {
            let err = WizardState::from_metadata("{not json").unwrap_err();
            assert!(matches!(err, AppError::MalformedState { .. }));
        }

        #[test]
        fn test_steps_append_without_clearing_earlier_fields() {
            let state = WizardState::default()
                .with_account("1", "alpha")
                .with_pipeline("deploy-prod");
            assert_eq!(state.account_id.as_deref(), Some("1"));
            assert_eq!(state.account_name.as_deref(), Some("alpha"));
            assert_eq!(state.pipeline_name.as_deref(), Some("deploy-prod"));
        }

        #[test]
        fn test_submission_requires_both_account_and_pipeline() {
            let missing_pipeline = WizardState::default().with_account("1", "alpha");
            assert!(missing_pipeline.require_submittable().is_err());

            let missing_account = WizardState::default().with_pipeline("deploy-prod");
            assert!(missing_account.require_submittable().is_err());

            let complete = WizardState::default()
                .with_account("1", "alpha")
                .with_pipeline("deploy-prod");
            assert_eq!(complete.require_submittable().unwrap(), ("1", "deploy-prod"));
        }
    }
}
