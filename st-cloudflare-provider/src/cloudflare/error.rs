//! Cloudflare error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{CloudflareClient, PROVIDER_NAME};

/// Cloudflare error code mapping
/// Reference: <https://developers.cloudflare.com/fundamentals/api/reference/>
impl ProviderErrorMapper for CloudflareClient {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let zone_id = || context.zone_id.clone().unwrap_or_else(|| "<unknown>".to_string());

        match raw.code.as_deref() {
            // Authentication error
            // 6003: Invalid request headers
            // 6103: Invalid format for X-Auth-Key header
            // 6111: Invalid format for Authorization header
            // 9109: Unauthorized to access requested resource
            // 10000: Authentication error
            Some("6003" | "6103" | "6111" | "9109" | "10000") => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // Permission
            // 9103: Unknown X-Auth-Key or X-Auth-Email
            // 10001: Token lacks the required permission
            Some("9103" | "10001") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // Zone does not exist
            // 1001: Invalid zone identifier
            // 7000: No route for that URI
            // 7003: Could not route to /path, perhaps your object identifier is invalid?
            Some("1001" | "7000" | "7003") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone_id: zone_id(),
                raw_message: Some(raw.message),
            },

            // Invalid parameter
            // 1004: Validation error
            // 1006: Invalid zone type
            // 1007: Invalid rate plan / frequency
            Some(code @ ("1004" | "1006" | "1007")) => {
                let param = match code {
                    "1006" => "type",
                    "1007" => "rate_plan",
                    _ => "general",
                };
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: param.to_string(),
                    detail: raw.message,
                }
            }

            // Plan does not permit the change
            // 1105: Zone type change not available on this plan
            // 1210: Subscription change still pending
            Some("1105" | "1210") => ProviderError::PlanRejected {
                provider: self.provider_name().to_string(),
                zone_id: zone_id(),
                raw_message: Some(raw.message),
            },

            // Other error fallback
            _ => self.unknown_error(raw),
        }
    }
}
