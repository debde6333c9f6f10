use serde::{Deserialize, Serialize};

/// Unified error type for all Cloudflare zone API operations.
///
/// Each variant includes a `provider` field identifying the API that produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Transient Errors
///
/// The following variants represent failures that may succeed when the call is repeated:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`RateLimited`](Self::RateLimited): API rate limit exceeded
///
/// The client itself never retries; callers decide which operations are repeated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// API that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// API that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// API that produced the error.
        provider: String,
        /// Suggested wait time in seconds, if the API sent `Retry-After`.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The provided credentials are invalid or expired.
    InvalidCredentials {
        /// API that produced the error.
        provider: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The credentials are valid but lack permission for the operation
    /// (e.g. a token without `Zone:Edit` or billing access).
    PermissionDenied {
        /// API that produced the error.
        provider: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The zone does not exist or is not visible to these credentials.
    ZoneNotFound {
        /// API that produced the error.
        provider: String,
        /// Zone identifier that was requested.
        zone_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected by the API.
    InvalidParameter {
        /// API that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The zone's current rate plan does not allow the requested change.
    ///
    /// Returned when a zone type change is attempted before the
    /// business/enterprise subscription has taken effect.
    PlanRejected {
        /// API that produced the error.
        provider: String,
        /// Zone identifier the change targeted.
        zone_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the API response.
    ParseError {
        /// API that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to build the HTTP client or serialize a request.
    SerializationError {
        /// API that produced the error.
        provider: String,
        /// Details about the failure.
        detail: String,
    },

    /// An unrecognized error from the API.
    ///
    /// This is a catch-all for error codes not yet mapped to a specific variant.
    Unknown {
        /// API that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether the failure stems from user input or a missing resource rather than a fault.
    ///
    /// `true` errors are logged at `warn`, the rest at `error`.
    /// **Keep this in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::ZoneNotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::PlanRejected { .. }
        )
    }

    /// Whether the failure is a transport-level condition that may clear on its own.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timed out: {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited, retry after {secs}s")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::ZoneNotFound {
                provider, zone_id, ..
            } => {
                write!(f, "[{provider}] Zone '{zone_id}' not found")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::PlanRejected {
                provider,
                zone_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(
                        f,
                        "[{provider}] Zone '{zone_id}' rate plan does not allow this change: {msg}"
                    )
                } else {
                    write!(
                        f,
                        "[{provider}] Zone '{zone_id}' rate plan does not allow this change"
                    )
                }
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Failed to parse response: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Failed to build request: {detail}")
            }
            Self::Unknown {
                provider,
                raw_code,
                raw_message,
            } => {
                if let Some(code) = raw_code {
                    write!(f, "[{provider}] Error {code}: {raw_message}")
                } else {
                    write!(f, "[{provider}] {raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Result alias used throughout the client.
pub type Result<T> = std::result::Result<T, ProviderError>;
