//! Provider configuration
//!
//! Credentials come only from the configuration object: either an API token,
//! or an email plus a legacy global API key.

use std::sync::Arc;

use serde::Deserialize;
use st_cloudflare_provider::{create_client, CloudflareCredentials, ProviderError, ZoneApi};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::resource::ZoneTypeResource;
use crate::services::ZoneTypeService;

/// Type name the provider registers under.
pub const PROVIDER_TYPE_NAME: &str = "st-cloudflare";

const KEY_HINT: &str = "Provide either an API token or both email and API key.";
const TOKEN_HINT: &str = "Provide an API token or both email and API key.";

/// Provider-level configuration block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Registered Cloudflare email address. Required with `api_key`.
    pub email: Option<String>,
    /// Legacy global API key. Conflicts with `api_token`.
    pub api_key: Option<String>,
    pub api_token: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl ProviderConfig {
    pub fn from_value(value: serde_json::Value) -> Result<Self, Diagnostics> {
        serde_json::from_value(value).map_err(|e| {
            Diagnostic::error("Invalid provider configuration", e.to_string()).into()
        })
    }

    /// Pick the credential pair to use.
    ///
    /// A token wins whenever present. Otherwise email and API key must both
    /// be set, and every missing attribute is reported.
    pub fn resolve(&self) -> Result<CloudflareCredentials, Diagnostics> {
        let email = non_empty(self.email.as_deref());
        let api_key = non_empty(self.api_key.as_deref());
        let api_token = non_empty(self.api_token.as_deref());

        let credentials = match (api_token, email, api_key) {
            (Some(_), _, Some(_)) => {
                return Err(Diagnostic::attribute_error(
                    "api_key",
                    "Conflicting Cloudflare credentials",
                    "Must provide only one of `api_key`, `api_token`.",
                )
                .into());
            }
            (Some(token), _, None) => CloudflareCredentials::ApiToken {
                api_token: token.to_string(),
            },
            (None, Some(email), Some(key)) => CloudflareCredentials::ApiKey {
                email: email.to_string(),
                api_key: key.to_string(),
            },
            (None, email, api_key) => {
                let mut diags = Diagnostics::new();
                if email.is_none() {
                    diags.push(Diagnostic::attribute_error(
                        "email",
                        "Missing Cloudflare Email",
                        KEY_HINT,
                    ));
                }
                if api_key.is_none() {
                    diags.push(Diagnostic::attribute_error(
                        "api_key",
                        "Missing Cloudflare API Key",
                        KEY_HINT,
                    ));
                }
                diags.push(Diagnostic::attribute_error(
                    "api_token",
                    "Missing Cloudflare API Token",
                    TOKEN_HINT,
                ));
                return Err(diags);
            }
        };

        credentials.validate().map_err(|e| {
            Diagnostics::from(Diagnostic::attribute_error(
                e.field(),
                "Invalid Cloudflare credentials",
                e.to_string(),
            ))
        })?;

        if matches!(credentials, CloudflareCredentials::ApiKey { .. }) {
            log::warn!("Using a legacy global API key; API tokens are recommended");
        }
        Ok(credentials)
    }

    /// Resolve credentials, build the client and check it against the API.
    pub async fn configure(&self) -> Result<ZoneTypeResource, Diagnostics> {
        let credentials = self.resolve()?;
        let client = create_client(credentials).map_err(|e| provider_diagnostics(&e))?;
        connect(client).await
    }
}

/// Build the `zone_type` resource over `api` once the API accepts its credentials.
pub async fn connect(api: Arc<dyn ZoneApi>) -> Result<ZoneTypeResource, Diagnostics> {
    let id = api.id();
    let resource = ZoneTypeResource::new(ZoneTypeService::new(api));
    let diags = resource.verify().await;
    if diags.has_error() {
        return Err(diags);
    }
    log::info!("{PROVIDER_TYPE_NAME} configured with {id} client");
    Ok(resource)
}

fn provider_diagnostics(err: &ProviderError) -> Diagnostics {
    match err {
        ProviderError::InvalidParameter { param, .. } => {
            Diagnostic::attribute_error(param.clone(), "Invalid Cloudflare credentials", err.to_string())
        }
        _ => Diagnostic::error("Unable to create Cloudflare client", err.to_string()),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockZoneApi;
    use serde_json::json;

    const TOKEN: &str = "abcdefghijABCDEFGHIJ0123456789-_abcdefgh";
    const KEY: &str = "0123456789abcdef0123456789abcdef01234";

    fn attributes(diags: &Diagnostics) -> Vec<&str> {
        diags.iter().filter_map(|d| d.attribute.as_deref()).collect()
    }

    #[test]
    fn token_only_resolves() {
        let config = ProviderConfig::from_value(json!({ "api_token": TOKEN })).unwrap();
        let creds = config.resolve().unwrap();
        assert!(matches!(creds, CloudflareCredentials::ApiToken { ref api_token } if api_token == TOKEN));
    }

    #[test]
    fn email_and_key_resolve() {
        let config = ProviderConfig {
            email: Some("ops@example.com".into()),
            api_key: Some(KEY.into()),
            api_token: None,
        };
        assert!(matches!(
            config.resolve().unwrap(),
            CloudflareCredentials::ApiKey { .. }
        ));
    }

    #[test]
    fn token_ignores_stray_email() {
        let config = ProviderConfig {
            email: Some("ops@example.com".into()),
            api_key: None,
            api_token: Some(TOKEN.into()),
        };
        assert!(matches!(
            config.resolve().unwrap(),
            CloudflareCredentials::ApiToken { .. }
        ));
    }

    #[test]
    fn nothing_set_reports_all_three() {
        let diags = ProviderConfig::default().resolve().unwrap_err();
        assert_eq!(attributes(&diags), vec!["email", "api_key", "api_token"]);
        assert!(diags.has_error());
    }

    #[test]
    fn key_without_email_reports_email_and_token() {
        let config = ProviderConfig {
            api_key: Some(KEY.into()),
            ..ProviderConfig::default()
        };
        let diags = config.resolve().unwrap_err();
        assert_eq!(attributes(&diags), vec!["email", "api_token"]);
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let config = ProviderConfig::from_value(json!({
            "email": "",
            "api_key": "",
            "api_token": "",
        }))
        .unwrap();
        assert_eq!(config.resolve().unwrap_err().len(), 3);
    }

    #[test]
    fn key_and_token_conflict() {
        let config = ProviderConfig {
            email: Some("ops@example.com".into()),
            api_key: Some(KEY.into()),
            api_token: Some(TOKEN.into()),
        };
        let diags = config.resolve().unwrap_err();
        assert_eq!(attributes(&diags), vec!["api_key"]);
    }

    #[test]
    fn malformed_token_is_attribute_error() {
        let config = ProviderConfig {
            api_token: Some("short".into()),
            ..ProviderConfig::default()
        };
        let diags = config.resolve().unwrap_err();
        let d = diags.iter().next().unwrap();
        assert_eq!(d.attribute.as_deref(), Some("api_token"));
        assert!(d.detail.contains("40 characters"), "{d}");
    }

    #[test]
    fn uppercase_key_is_rejected() {
        let config = ProviderConfig {
            email: Some("ops@example.com".into()),
            api_key: Some(KEY.to_uppercase()),
            api_token: None,
        };
        let diags = config.resolve().unwrap_err();
        assert_eq!(attributes(&diags), vec!["api_key"]);
    }

    #[tokio::test]
    async fn connect_builds_resource() {
        let api = Arc::new(MockZoneApi::new());
        assert!(connect(api).await.is_ok());
        assert_eq!(
            ZoneTypeResource::type_name(PROVIDER_TYPE_NAME),
            "st-cloudflare_zone_type"
        );
    }

    #[tokio::test]
    async fn connect_fails_on_rejected_credentials() {
        let api = Arc::new(MockZoneApi::new());
        api.set_credentials_valid(false).await;

        let Err(diags) = connect(api).await else {
            panic!("rejected credentials must not yield a resource");
        };

        assert!(diags.has_error());
        assert_eq!(
            diags.iter().next().unwrap().summary,
            "Configuration error: mock rejected the configured credentials"
        );
    }

    #[tokio::test]
    async fn configure_stops_at_malformed_token() {
        let config = ProviderConfig {
            api_token: Some(format!("{TOKEN}x")),
            ..ProviderConfig::default()
        };
        let Err(diags) = config.configure().await else {
            panic!("malformed token must not yield a resource");
        };
        assert_eq!(attributes(&diags), vec!["api_token"]);
    }
}
