use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for environment variable {name}: {value}")]
    InvalidEnvVar { name: String, value: String },
}

/// Runtime configuration, read once from the environment at startup.
#[derive(Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub slack_access_token: String,
    pub management_role_arn: String,
    pub account_role_name: String,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("slack_access_token", &"[REDACTED]")
            .field("management_role_arn", &self.management_role_arn)
            .field("account_role_name", &self.account_role_name)
            .finish()
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: parse_env_or("GANTRY_HOST", "0.0.0.0")?,
            port: parse_env_or("GANTRY_PORT", "8466")?,
            slack_access_token: require_env("SLACK_ACCESS_TOKEN")?,
            management_role_arn: require_env("ORGANIZATION_MANAGEMENT_ROLE_ARN")?,
            account_role_name: require_env("ACCOUNT_ACCESS_ROLE_NAME")?,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_env_or<T: FromStr>(name: &str, default: &str) -> Result<T, ConfigError> {
    let raw = std::env::var(name).unwrap_or_else(|_| default.to_string());
    raw.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: raw,
    })
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;

        #[test]
        fn test_defaults_apply_when_variable_is_absent() {
            let host: IpAddr = parse_env_or("GANTRY_TEST_ABSENT_HOST", "0.0.0.0").unwrap();
            assert_eq!(host, IpAddr::from_str("0.0.0.0").unwrap());

            let port: u16 = parse_env_or("GANTRY_TEST_ABSENT_PORT", "8466").unwrap();
            assert_eq!(port, 8466);
        }

        #[test]
        fn test_invalid_values_are_rejected_with_the_offending_value() {
            unsafe { std::env::set_var("GANTRY_TEST_BAD_PORT", "not-a-port") };
            let result: Result<u16, _> = parse_env_or("GANTRY_TEST_BAD_PORT", "8466");
            match result {
                Err(ConfigError::InvalidEnvVar { name, value }) => {
                    assert_eq!(name, "GANTRY_TEST_BAD_PORT");
                    assert_eq!(value, "not-a-port");
                }
                other => panic!("expected InvalidEnvVar, got {other:?}"),
            }
        }

        #[test]
        fn test_missing_required_variables_are_reported_by_name() {
            let result = require_env("GANTRY_TEST_ABSENT_TOKEN");
            match result {
                Err(ConfigError::MissingEnvVar(name)) => {
                    assert_eq!(name, "GANTRY_TEST_ABSENT_TOKEN");
                }
                other => panic!("expected MissingEnvVar, got {other:?}"),
            }
        }

        #[test]
        fn test_debug_output_redacts_the_token() {
            let config = ServerConfig {
                host: IpAddr::from_str("0.0.0.0").unwrap(),
                port: 8466,
                slack_access_token: "xoxb-secret".to_string(),
                management_role_arn: "arn:aws:iam::111111111111:role/OrgReader".to_string(),
                account_role_name: "PipelineRunner".to_string(),
            };
            let rendered = format!("{config:?}");
            assert!(rendered.contains("[REDACTED]"));
            assert!(!rendered.contains("xoxb-secret"));
        }
    }
}
