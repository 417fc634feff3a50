//! Error taxonomy for the cross-account access layer.
//!
//! AWS service failures are classified into the variants callers can act on
//! by inspecting the service error code; everything else lands in `Service`
//! with the source chain preserved.

use aws_sdk_sts::error::{ProvideErrorMetadata, SdkError};

#[derive(Debug, thiserror::Error)]
pub enum DelegationError {
    /// Role trust or permission denied
    #[error("authorization failed during {context}: {message}")]
    Authorization {
        context: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Unknown role, account or pipeline
    #[error("not found during {context}: {message}")]
    NotFound {
        context: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Rate limited by the provider
    #[error("throttled during {context}: {message}")]
    Throttled {
        context: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The platform rejected a concurrent execution
    #[error("conflict during {context}: {message}")]
    Conflict {
        context: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Anything the taxonomy does not model
    #[error("{context} failed: {message}")]
    Service {
        context: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorClass {
    Authorization,
    NotFound,
    Throttled,
    Conflict,
    Other,
}

fn classify_error_code(code: &str) -> ErrorClass {
    match code {
        "AccessDenied"
        | "AccessDeniedException"
        | "UnauthorizedAccess"
        | "UnrecognizedClientException"
        | "InvalidClientTokenId"
        | "ExpiredToken"
        | "ExpiredTokenException" => ErrorClass::Authorization,

        "NoSuchEntity"
        | "ResourceNotFoundException"
        | "PipelineNotFoundException"
        | "AccountNotFoundException" => ErrorClass::NotFound,

        "Throttling" | "ThrottlingException" | "TooManyRequestsException"
        | "RequestLimitExceeded" => ErrorClass::Throttled,

        "ConflictException" | "ConcurrentPipelineExecutionsLimitExceededException" => {
            ErrorClass::Conflict
        }

        _ => ErrorClass::Other,
    }
}

/// Convert an SDK failure into the taxonomy. `context` names the operation
/// for log and error messages, e.g. "assume role".
pub(crate) fn map_sdk_err<E>(context: &str, err: SdkError<E>) -> DelegationError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let class = err
        .code()
        .map(classify_error_code)
        .unwrap_or(ErrorClass::Other);
    let message = err
        .message()
        .unwrap_or("request failed without an error message")
        .to_string();
    let context = context.to_string();
    let source = Some(anyhow::Error::new(err));

    match class {
        ErrorClass::Authorization => DelegationError::Authorization {
            context,
            message,
            source,
        },
        ErrorClass::NotFound => DelegationError::NotFound {
            context,
            message,
            source,
        },
        ErrorClass::Throttled => DelegationError::Throttled {
            context,
            message,
            source,
        },
        ErrorClass::Conflict => DelegationError::Conflict {
            context,
            message,
            source,
        },
        ErrorClass::Other => DelegationError::Service {
            context,
            message,
            source,
        },
    }
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;

        #[test]
        fn test_access_denied_codes_classify_as_authorization() {
            assert_eq!(
                classify_error_code("AccessDenied"),
                ErrorClass::Authorization
            );
            assert_eq!(
                classify_error_code("AccessDeniedException"),
                ErrorClass::Authorization
            );
        }

        #[test]
        fn test_missing_pipeline_classifies_as_not_found() {
            assert_eq!(
                classify_error_code("PipelineNotFoundException"),
                ErrorClass::NotFound
            );
        }

        #[test]
        fn test_rate_limit_codes_classify_as_throttled() {
            assert_eq!(classify_error_code("ThrottlingException"), ErrorClass::Throttled);
            assert_eq!(
                classify_error_code("TooManyRequestsException"),
                ErrorClass::Throttled
            );
        }

        #[test]
        fn test_concurrent_execution_limit_classifies_as_conflict() {
            assert_eq!(
                classify_error_code("ConcurrentPipelineExecutionsLimitExceededException"),
                ErrorClass::Conflict
            );
        }

        #[test]
        fn test_unknown_codes_fall_through() {
            assert_eq!(classify_error_code("SomethingElse"), ErrorClass::Other);
        }
    }
}
