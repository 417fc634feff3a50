//! Account directory
//!
//! Lists the organization's member accounts. The listing API is only served
//! by the management account, so callers must hand in credentials minted for
//! the organization management role.

use std::cmp::Ordering;

use aws_config::{Region, SdkConfig};
use aws_credential_types::provider::SharedCredentialsProvider;
use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use once_cell::sync::Lazy;
use tracing::{trace, warn};

use crate::error::{DelegationError, map_sdk_err};
use crate::logic::broker::DelegatedCredentials;

/// The organizations directory endpoint only exists in us-east-1.
const DIRECTORY_REGION: &str = "us-east-1";

/// Root-locale collator at secondary strength: case-insensitive, but aware
/// of accents and non-ASCII letters.
static DISPLAY_NAME_COLLATOR: Lazy<CollatorBorrowed<'static>> = Lazy::new(|| {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Secondary);
    Collator::try_new(CollatorPreferences::default(), options)
        .expect("root collation data is compiled into the binary")
});

pub(crate) fn compare_display_names(a: &str, b: &str) -> Ordering {
    DISPLAY_NAME_COLLATOR.compare(a, b)
}

/// One member account of the organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub display_name: String,
}

/// Client for the organization account listing.
pub struct AccountDirectoryClient {
    base: SdkConfig,
}

impl AccountDirectoryClient {
    pub fn new(base: SdkConfig) -> Self {
        Self { base }
    }

    /// List every account in the organization, sorted ascending by display
    /// name under locale-aware collation. Pages are followed to exhaustion.
    pub async fn list_accounts(
        &self,
        credentials: &DelegatedCredentials,
    ) -> Result<Vec<Account>, DelegationError> {
        let config = self
            .base
            .to_builder()
            .region(Region::new(DIRECTORY_REGION))
            .credentials_provider(SharedCredentialsProvider::new(
                aws_credential_types::Credentials::from(credentials),
            ))
            .build();
        let client = aws_sdk_organizations::Client::new(&config);

        let mut accounts = Vec::new();
        let mut next_token: Option<String> = None;
        loop {
            let output = client
                .list_accounts()
                .set_next_token(next_token.clone())
                .send()
                .await
                .map_err(|e| map_sdk_err("list accounts", e))?;

            for account in output.accounts() {
                let (Some(id), Some(name)) = (account.id(), account.name()) else {
                    warn!("skipping directory entry without id or name");
                    continue;
                };
                accounts.push(Account {
                    id: id.to_string(),
                    display_name: name.to_string(),
                });
            }

            if output.next_token().is_none() {
                break;
            }
            next_token = output.next_token().map(str::to_string);
        }

        accounts.sort_by(|a, b| compare_display_names(&a.display_name, &b.display_name));
        trace!(count = accounts.len(), "listed organization accounts");
        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;

        #[test]
        fn test_comparison_ignores_case() {
            assert_eq!(compare_display_names("alpha", "Beta"), Ordering::Less);
            assert_eq!(compare_display_names("alpha", "Alpha"), Ordering::Equal);
        }

        #[test]
        fn test_comparison_is_locale_aware_not_bytewise() {
            // Bytewise, 'Í' sorts after 'Z'; collation keeps it with 'I'.
            assert_eq!(compare_display_names("Ísland", "Zeta"), Ordering::Less);
            assert!("Ísland" > "Zeta");
        }

        #[test]
        fn test_sorting_accounts_by_display_name() {
            let mut accounts = vec![
                Account {
                    id: "2".to_string(),
                    display_name: "Beta".to_string(),
                },
                Account {
                    id: "1".to_string(),
                    display_name: "alpha".to_string(),
                },
            ];
            accounts.sort_by(|a, b| compare_display_names(&a.display_name, &b.display_name));
            assert_eq!(accounts[0].display_name, "alpha");
            assert_eq!(accounts[0].id, "1");
            assert_eq!(accounts[1].display_name, "Beta");
            assert_eq!(accounts[1].id, "2");
        }
    }
}
