//! Credential broker
//!
//! Mints short-lived credentials for a target role via STS AssumeRole.

use aws_config::SdkConfig;
use tracing::trace;

use crate::error::{DelegationError, map_sdk_err};

/// Short-lived credentials scoped to one target account and role.
///
/// Created per request and used immediately; never persisted and never
/// shared between operations.
#[derive(Clone, PartialEq, Eq)]
pub struct DelegatedCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}

impl std::fmt::Debug for DelegatedCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegatedCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field("session_token", &"[REDACTED]")
            .finish()
    }
}

impl From<&DelegatedCredentials> for aws_credential_types::Credentials {
    fn from(credentials: &DelegatedCredentials) -> Self {
        aws_credential_types::Credentials::new(
            credentials.access_key_id.clone(),
            credentials.secret_access_key.clone(),
            Some(credentials.session_token.clone()),
            None,
            "delegated-role",
        )
    }
}

/// Assumes roles with the service's own base identity.
pub struct CredentialBroker {
    client: aws_sdk_sts::Client,
}

impl CredentialBroker {
    pub fn new(base: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_sts::Client::new(base),
        }
    }

    /// Assume `role_arn` and return the minted credentials as a value.
    /// Every invocation mints a fresh set; nothing is cached or mutated.
    pub async fn assume_role(
        &self,
        role_arn: &str,
        session_label: &str,
    ) -> Result<DelegatedCredentials, DelegationError> {
        trace!(role_arn, session_label, "assuming role");

        let output = self
            .client
            .assume_role()
            .role_arn(role_arn)
            .role_session_name(session_label)
            .send()
            .await
            .map_err(|e| map_sdk_err("assume role", e))?;

        let credentials = output
            .credentials()
            .ok_or_else(|| DelegationError::Service {
                context: "assume role".to_string(),
                message: "response did not contain credentials".to_string(),
                source: None,
            })?;

        Ok(DelegatedCredentials {
            access_key_id: credentials.access_key_id().to_string(),
            secret_access_key: credentials.secret_access_key().to_string(),
            session_token: credentials.session_token().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;

        fn sample_credentials() -> DelegatedCredentials {
            DelegatedCredentials {
                access_key_id: "AKIAEXAMPLE".to_string(),
                secret_access_key: "very-secret".to_string(),
                session_token: "session-token".to_string(),
            }
        }

        #[test]
        fn test_debug_output_redacts_secrets() {
            let rendered = format!("{:?}", sample_credentials());
            assert!(rendered.contains("AKIAEXAMPLE"));
            assert!(!rendered.contains("very-secret"));
            assert!(!rendered.contains("session-token"));
        }

        #[test]
        fn test_conversion_to_sdk_credentials() {
            let credentials = aws_credential_types::Credentials::from(&sample_credentials());
            assert_eq!(credentials.access_key_id(), "AKIAEXAMPLE");
            assert_eq!(credentials.secret_access_key(), "very-secret");
            assert_eq!(credentials.session_token(), Some("session-token"));
        }
    }
}
