//! Composed cross-account operations
//!
//! `PipelineOpsService` is what the wizard consumes: each operation assumes
//! the right role, then acts with the minted credentials. The role chaining
//! lives here so callers only ever hand over an account id.

use async_trait::async_trait;
use aws_config::SdkConfig;

use crate::error::DelegationError;
use crate::logic::broker::{CredentialBroker, DelegatedCredentials};
use crate::logic::directory::{Account, AccountDirectoryClient};
use crate::logic::pipelines::{ExecutionTrigger, Pipeline, PipelineDirectoryClient};

/// Session label stamped on every assume-role call this service makes.
pub const ROLE_SESSION_NAME: &str = "gantry_slack_bridge";

/// Cross-account pipeline operations as the wizard sees them.
#[async_trait]
pub trait PipelineOpsLike: Send + Sync {
    /// All member accounts, sorted by display name.
    async fn list_accounts(&self) -> Result<Vec<Account>, DelegationError>;

    /// Pipelines of one member account, in platform order.
    async fn list_pipelines(&self, account_id: &str) -> Result<Vec<Pipeline>, DelegationError>;

    /// Start an execution in one member account. Not idempotent.
    async fn start_execution(
        &self,
        account_id: &str,
        pipeline_name: &str,
    ) -> Result<(), DelegationError>;
}

/// Production implementation chaining the broker into the per-account
/// clients.
pub struct PipelineOpsService {
    broker: CredentialBroker,
    directory: AccountDirectoryClient,
    pipelines: PipelineDirectoryClient,
    trigger: ExecutionTrigger,
    management_role_arn: String,
    account_role_name: String,
}

impl PipelineOpsService {
    pub fn new(base: SdkConfig, management_role_arn: String, account_role_name: String) -> Self {
        Self {
            broker: CredentialBroker::new(&base),
            directory: AccountDirectoryClient::new(base.clone()),
            pipelines: PipelineDirectoryClient::new(base.clone()),
            trigger: ExecutionTrigger::new(base),
            management_role_arn,
            account_role_name,
        }
    }

    /// Build from the ambient AWS environment (region, base credentials).
    pub async fn from_env(management_role_arn: String, account_role_name: String) -> Self {
        let base = aws_config::load_from_env().await;
        Self::new(base, management_role_arn, account_role_name)
    }

    /// Delegated role ARN inside one member account.
    fn account_role_arn(&self, account_id: &str) -> String {
        format!(
            "arn:aws:iam::{account_id}:role/{}",
            self.account_role_name
        )
    }

    async fn management_credentials(&self) -> Result<DelegatedCredentials, DelegationError> {
        self.broker
            .assume_role(&self.management_role_arn, ROLE_SESSION_NAME)
            .await
    }

    async fn account_credentials(
        &self,
        account_id: &str,
    ) -> Result<DelegatedCredentials, DelegationError> {
        self.broker
            .assume_role(&self.account_role_arn(account_id), ROLE_SESSION_NAME)
            .await
    }
}

#[async_trait]
impl PipelineOpsLike for PipelineOpsService {
    async fn list_accounts(&self) -> Result<Vec<Account>, DelegationError> {
        let credentials = self.management_credentials().await?;
        self.directory.list_accounts(&credentials).await
    }

    async fn list_pipelines(&self, account_id: &str) -> Result<Vec<Pipeline>, DelegationError> {
        let credentials = self.account_credentials(account_id).await?;
        self.pipelines.list_pipelines(&credentials).await
    }

    async fn start_execution(
        &self,
        account_id: &str,
        pipeline_name: &str,
    ) -> Result<(), DelegationError> {
        let credentials = self.account_credentials(account_id).await?;
        self.trigger
            .start_execution(&credentials, pipeline_name)
            .await
    }
}
