use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// ============ Zone Types ============

/// DNS serving mode of a zone.
///
/// Serialized as the lowercase wire string used by the Cloudflare API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    /// Cloudflare is the authoritative nameserver (the default).
    Full,
    /// CNAME setup; authoritative DNS stays elsewhere.
    Partial,
    /// Cloudflare acts as a secondary nameserver.
    Secondary,
    /// Internal zone for private resolution.
    Internal,
}

impl ZoneKind {
    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Partial => "partial",
            Self::Secondary => "secondary",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Billing tier of a zone, identified by its rate plan id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RatePlan {
    /// The default plan every zone falls back to.
    Free,
    /// Business plan; allows non-full zone types.
    Business,
    /// Enterprise plan; allows non-full zone types.
    Enterprise,
}

impl RatePlan {
    /// Rate plan id sent to the subscription endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Business => "business",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for RatePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Billing frequency of a subscription. Plan changes are always billed monthly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionFrequency {
    #[default]
    Monthly,
}

/// A zone as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Zone identifier.
    pub id: String,
    /// Domain name of the zone.
    pub name: String,
    /// Current DNS serving mode.
    pub zone_type: ZoneKind,
    /// Zone status (`active`, `pending`, `initializing`, `moved`).
    pub status: String,
    /// Verification key issued for partial/secondary setups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_key: Option<String>,
}

// ============ Credentials ============

// Anchored: the whole value must match, so over-long tokens and keys fail here.
static API_TOKEN_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{40}$").ok());
static API_KEY_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{37}$").ok());

/// Credentials accepted by the Cloudflare API.
///
/// Serialized as a tagged enum with `"method"` as the tag:
///
/// ```json
/// { "method": "api_token", "api_token": "..." }
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum CloudflareCredentials {
    /// Scoped API token, sent as a bearer token.
    ApiToken {
        /// Cloudflare API token.
        api_token: String,
    },
    /// Legacy global API key, sent with the account email.
    ApiKey {
        /// Registered Cloudflare email address.
        email: String,
        /// Global API key.
        api_key: String,
    },
}

// Tokens must never reach the logs through a stray `{:?}`.
impl fmt::Debug for CloudflareCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiToken { .. } => f
                .debug_struct("ApiToken")
                .field("api_token", &"***")
                .finish(),
            Self::ApiKey { email, .. } => f
                .debug_struct("ApiKey")
                .field("email", email)
                .field("api_key", &"***")
                .finish(),
        }
    }
}

impl CloudflareCredentials {
    /// Check that all fields are present and well-formed.
    pub fn validate(&self) -> Result<(), CredentialValidationError> {
        match self {
            Self::ApiToken { api_token } => {
                Self::require_non_empty("api_token", "API Token", api_token)?;
                Self::require_format(
                    "api_token",
                    "API Token",
                    api_token,
                    &API_TOKEN_PATTERN,
                    "API tokens must be 40 characters long and only contain characters a-z, A-Z, 0-9, hyphens and underscores",
                )
            }
            Self::ApiKey { email, api_key } => {
                Self::require_non_empty("email", "Email", email)?;
                Self::require_non_empty("api_key", "API Key", api_key)?;
                Self::require_format(
                    "api_key",
                    "API Key",
                    api_key,
                    &API_KEY_PATTERN,
                    "API key must be 37 characters long and only contain characters 0-9 and a-f (all lowercased)",
                )
            }
        }
    }

    fn require_non_empty(
        field: &str,
        label: &str,
        value: &str,
    ) -> Result<(), CredentialValidationError> {
        if value.trim().is_empty() {
            return Err(CredentialValidationError::EmptyField {
                field: field.to_string(),
                label: label.to_string(),
            });
        }
        Ok(())
    }

    fn require_format(
        field: &str,
        label: &str,
        value: &str,
        pattern: &LazyLock<Option<Regex>>,
        reason: &str,
    ) -> Result<(), CredentialValidationError> {
        let matches = pattern.as_ref().is_some_and(|re| re.is_match(value));
        if matches {
            Ok(())
        } else {
            Err(CredentialValidationError::InvalidFormat {
                field: field.to_string(),
                label: label.to_string(),
                reason: reason.to_string(),
            })
        }
    }
}

/// Credential validation error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field has an invalid format.
    InvalidFormat {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

impl CredentialValidationError {
    /// Field key the error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyField { field, .. } | Self::InvalidFormat { field, .. } => field,
        }
    }
}

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "abcdefghijABCDEFGHIJ0123456789-_abcdefgh";
    const KEY: &str = "0123456789abcdef0123456789abcdef01234";

    #[test]
    fn zone_kind_rejects_unknown_wire_string() {
        let kind: ZoneKind = serde_json::from_str("\"internal\"").unwrap();
        assert_eq!(kind, ZoneKind::Internal);
        assert!(serde_json::from_str::<ZoneKind>("\"Partial\"").is_err());
    }

    #[test]
    fn rate_plan_and_frequency_wire_ids() {
        assert_eq!(serde_json::to_string(&RatePlan::Free).unwrap(), "\"free\"");
        assert_eq!(
            serde_json::to_string(&SubscriptionFrequency::default()).unwrap(),
            "\"monthly\""
        );
    }

    #[test]
    fn zone_kind_serde_lowercase() {
        let json = serde_json::to_string(&ZoneKind::Secondary).unwrap();
        assert_eq!(json, "\"secondary\"");
    }

    #[test]
    fn valid_token_accepted() {
        assert_eq!(TOKEN.len(), 40);
        let creds = CloudflareCredentials::ApiToken {
            api_token: TOKEN.to_string(),
        };
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn short_token_rejected() {
        let creds = CloudflareCredentials::ApiToken {
            api_token: "short".to_string(),
        };
        let err = creds.validate().unwrap_err();
        assert!(matches!(err, CredentialValidationError::InvalidFormat { .. }));
        assert_eq!(err.field(), "api_token");
    }

    #[test]
    fn token_length_is_exact() {
        for api_token in [format!("{TOKEN}x"), format!("--{TOKEN}--")] {
            let creds = CloudflareCredentials::ApiToken { api_token };
            let err = creds.validate().unwrap_err();
            assert!(matches!(err, CredentialValidationError::InvalidFormat { .. }));
        }
        let creds = CloudflareCredentials::ApiKey {
            email: "ops@example.com".to_string(),
            api_key: format!("{KEY}0"),
        };
        assert_eq!(creds.validate().unwrap_err().field(), "api_key");
    }

    #[test]
    fn api_key_requires_email() {
        let creds = CloudflareCredentials::ApiKey {
            email: "  ".to_string(),
            api_key: KEY.to_string(),
        };
        let err = creds.validate().unwrap_err();
        assert_eq!(
            err,
            CredentialValidationError::EmptyField {
                field: "email".to_string(),
                label: "Email".to_string(),
            }
        );
    }

    #[test]
    fn uppercase_api_key_rejected() {
        let creds = CloudflareCredentials::ApiKey {
            email: "ops@example.com".to_string(),
            api_key: KEY.to_uppercase(),
        };
        assert!(creds.validate().is_err());
    }

    #[test]
    fn debug_masks_secrets() {
        let creds = CloudflareCredentials::ApiKey {
            email: "ops@example.com".to_string(),
            api_key: KEY.to_string(),
        };
        let printed = format!("{creds:?}");
        assert!(!printed.contains(KEY));
        assert!(printed.contains("ops@example.com"));
    }
}
