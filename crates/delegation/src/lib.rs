//! Cross-account AWS access for the pipeline-launch flow.
//!
//! This crate provides:
//! - `CredentialBroker`: mints short-lived delegated credentials by assuming
//!   a role (`logic::broker`)
//! - `AccountDirectoryClient`: lists the organization's accounts with
//!   management-account credentials (`logic::directory`)
//! - `PipelineDirectoryClient` / `ExecutionTrigger`: per-account pipeline
//!   listing and execution start (`logic::pipelines`)
//! - `PipelineOpsService`: composes the above behind [`PipelineOpsLike`],
//!   owning the role-chaining from account id to delegated role ARN
//!
//! Every operation assumes a role first and acts with the returned
//! credentials; nothing here caches or shares credentials between calls.

pub mod error;
pub mod logic;

pub use error::DelegationError;
pub use logic::{
    Account, AccountDirectoryClient, CredentialBroker, DelegatedCredentials, ExecutionTrigger,
    Pipeline, PipelineDirectoryClient, PipelineOpsLike, PipelineOpsService, ROLE_SESSION_NAME,
};
