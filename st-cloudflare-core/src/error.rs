//! Unified error type definition

use std::fmt;
use std::time::Duration;

use thiserror::Error;

// Re-export library error type
pub use st_cloudflare_provider::ProviderError;
use st_cloudflare_provider::{RatePlan, ZoneKind};

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed or missing input, detected before any API call
    #[error("Validation error: {field}: {detail}")]
    Validation { field: String, detail: String },

    /// Subscription change failed
    #[error("failed to set zone id [{zone_id}] to [{rate_plan}] subscription")]
    Subscription {
        zone_id: String,
        rate_plan: RatePlan,
        #[source]
        source: ProviderError,
    },

    /// Zone type change failed
    #[error("failed to set zone id [{zone_id}] type to [{zone_type}]")]
    ZoneType {
        zone_id: String,
        zone_type: ZoneKind,
        #[source]
        source: ProviderError,
    },

    /// Conversion did not succeed before the retry ceiling
    #[error(
        "failed to update zone type for [{zone_id}] after {attempts} attempt(s) in {:.1}s",
        .elapsed.as_secs_f32()
    )]
    ConversionExhausted {
        zone_id: String,
        attempts: u32,
        elapsed: Duration,
        #[source]
        source: Box<CoreError>,
    },

    /// Reading the zone failed
    #[error("failed to read zone [{zone_id}]")]
    Read {
        zone_id: String,
        #[source]
        source: ProviderError,
    },

    /// One or both revert steps failed
    #[error(transparent)]
    Revert(#[from] RevertError),

    /// Provider configuration is unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, missing zone, plan limits), used for log levels.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation { .. } | Self::Configuration(_) => true,
            Self::Subscription { source, .. }
            | Self::ZoneType { source, .. }
            | Self::Read { source, .. }
            | Self::Provider(source) => source.is_expected(),
            Self::ConversionExhausted { source, .. } => source.is_expected(),
            Self::Revert(e) => e.failures.iter().all(|f| f.source.is_expected()),
        }
    }

    /// Zone the error refers to, if any.
    pub fn zone_id(&self) -> Option<&str> {
        match self {
            Self::Subscription { zone_id, .. }
            | Self::ZoneType { zone_id, .. }
            | Self::ConversionExhausted { zone_id, .. }
            | Self::Read { zone_id, .. } => Some(zone_id),
            Self::Revert(e) => Some(&e.zone_id),
            Self::Validation { .. } | Self::Configuration(_) | Self::Provider(_) => None,
        }
    }
}

/// A teardown step of the revert workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevertStep {
    /// Zone type back to `full`.
    ResetZoneType,
    /// Subscription back to the Free plan.
    ResetSubscription,
}

impl fmt::Display for RevertStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResetZoneType => write!(f, "type to [{}]", ZoneKind::Full),
            Self::ResetSubscription => write!(f, "to [{}] subscription", RatePlan::Free),
        }
    }
}

/// One failed revert step.
#[derive(Debug, Error)]
#[error("failed to set zone id [{zone_id}] {step}")]
pub struct RevertFailure {
    pub zone_id: String,
    pub step: RevertStep,
    #[source]
    pub source: ProviderError,
}

/// Every revert step that failed, in the order they ran.
#[derive(Debug)]
pub struct RevertError {
    pub zone_id: String,
    pub failures: Vec<RevertFailure>,
}

impl RevertError {
    /// Whether `step` is among the failures.
    pub fn failed(&self, step: RevertStep) -> bool {
        self.failures.iter().any(|f| f.step == step)
    }
}

impl fmt::Display for RevertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to revert zone [{}]", self.zone_id)?;
        for failure in &self.failures {
            write!(f, "; {failure}: {}", failure.source)?;
        }
        Ok(())
    }
}

impl std::error::Error for RevertError {}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
