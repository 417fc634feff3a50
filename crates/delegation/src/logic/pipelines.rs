//! Per-account pipeline operations
//!
//! Listing and starting CodePipeline executions inside one member account,
//! acting with that account's delegated credentials.

use aws_config::{Region, SdkConfig};
use aws_credential_types::provider::SharedCredentialsProvider;
use tracing::{info, trace};

use crate::error::{DelegationError, map_sdk_err};
use crate::logic::broker::DelegatedCredentials;

/// Pipelines live in the same fixed region as the rest of the deployment
/// tooling.
const PIPELINE_REGION: &str = "us-east-1";

/// One deployment pipeline in a member account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    pub name: String,
}

fn codepipeline_client(
    base: &SdkConfig,
    credentials: &DelegatedCredentials,
) -> aws_sdk_codepipeline::Client {
    let config = base
        .to_builder()
        .region(Region::new(PIPELINE_REGION))
        .credentials_provider(SharedCredentialsProvider::new(
            aws_credential_types::Credentials::from(credentials),
        ))
        .build();
    aws_sdk_codepipeline::Client::new(&config)
}

/// Client for the per-account pipeline listing.
pub struct PipelineDirectoryClient {
    base: SdkConfig,
}

impl PipelineDirectoryClient {
    pub fn new(base: SdkConfig) -> Self {
        Self { base }
    }

    /// List the account's pipelines in platform order. Consumers render
    /// options in exactly this order; nothing here re-sorts.
    pub async fn list_pipelines(
        &self,
        credentials: &DelegatedCredentials,
    ) -> Result<Vec<Pipeline>, DelegationError> {
        let client = codepipeline_client(&self.base, credentials);

        let mut pipelines = Vec::new();
        let mut next_token: Option<String> = None;
        loop {
            let output = client
                .list_pipelines()
                .set_next_token(next_token.clone())
                .send()
                .await
                .map_err(|e| map_sdk_err("list pipelines", e))?;

            for summary in output.pipelines() {
                if let Some(name) = summary.name() {
                    pipelines.push(Pipeline {
                        name: name.to_string(),
                    });
                }
            }

            if output.next_token().is_none() {
                break;
            }
            next_token = output.next_token().map(str::to_string);
        }

        trace!(count = pipelines.len(), "listed pipelines");
        Ok(pipelines)
    }
}

/// Starts pipeline executions.
pub struct ExecutionTrigger {
    base: SdkConfig,
}

impl ExecutionTrigger {
    pub fn new(base: SdkConfig) -> Self {
        Self { base }
    }

    /// Start an execution of `pipeline_name`. Not idempotent: two calls
    /// start two executions.
    pub async fn start_execution(
        &self,
        credentials: &DelegatedCredentials,
        pipeline_name: &str,
    ) -> Result<(), DelegationError> {
        let client = codepipeline_client(&self.base, credentials);

        let output = client
            .start_pipeline_execution()
            .name(pipeline_name)
            .send()
            .await
            .map_err(|e| map_sdk_err("start pipeline execution", e))?;

        info!(
            pipeline_name,
            execution_id = ?output.pipeline_execution_id(),
            "started pipeline execution"
        );
        Ok(())
    }
}
