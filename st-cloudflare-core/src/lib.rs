//! st-cloudflare Core Library
//!
//! Business logic behind the `zone_type` resource:
//! - Zone type conversion with a bounded retry (`ZoneTypeService`)
//! - Resource lifecycle hooks and diagnostics (`ZoneTypeResource`)
//! - Provider configuration and credential resolution (`ProviderConfig`)
//!
//! All Cloudflare access goes through the `ZoneApi` trait of
//! `st-cloudflare-provider`, so the workflow can run against any implementation.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod resource;
pub(crate) mod retry;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{connect, ProviderConfig, PROVIDER_TYPE_NAME};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{CoreError, CoreResult, RevertError, RevertStep};
pub use resource::{ZoneTypeConfig, ZoneTypeResource};
pub use retry::CONVERSION_TIMEOUT;
pub use services::ZoneTypeService;
