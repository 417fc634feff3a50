//! Logic module for cross-account access
//!
//! Contains:
//! - CredentialBroker for assuming roles via STS
//! - AccountDirectoryClient for the organization account listing
//! - PipelineDirectoryClient and ExecutionTrigger for per-account pipelines
//! - PipelineOpsService composing the above behind PipelineOpsLike

mod broker;
mod directory;
mod pipelines;
mod service;

pub use broker::{CredentialBroker, DelegatedCredentials};
pub use directory::{Account, AccountDirectoryClient};
pub use pipelines::{ExecutionTrigger, Pipeline, PipelineDirectoryClient};
pub use service::{PipelineOpsLike, PipelineOpsService, ROLE_SESSION_NAME};
