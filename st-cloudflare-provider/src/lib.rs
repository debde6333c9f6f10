//! # st-cloudflare-provider
//!
//! A small typed client for the parts of the Cloudflare v4 API that manage a
//! zone's billing subscription and DNS serving mode.
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | [`ZoneApi::set_subscription`] | `POST /zones/{zone_id}/subscription` |
//! | [`ZoneApi::set_zone_type`] | `PATCH /zones/{zone_id}` |
//! | [`ZoneApi::get_zone`] | `GET /zones/{zone_id}` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use st_cloudflare_provider::{
//!     create_client, CloudflareCredentials, RatePlan, SubscriptionFrequency, ZoneApi, ZoneKind,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = create_client(CloudflareCredentials::ApiToken {
//!         api_token: std::env::var("CLOUDFLARE_API_TOKEN")?,
//!     })?;
//!
//!     client
//!         .set_subscription("zone-id", RatePlan::Business, SubscriptionFrequency::Monthly)
//!         .await?;
//!     let zone = client.set_zone_type("zone-id", ZoneKind::Partial).await?;
//!     println!("verification key: {:?}", zone.verification_key);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). The
//! client never retries on its own: `NetworkError`, `Timeout` and
//! `RateLimited` are reported as [`ProviderError::is_transient`] and the
//! caller decides whether to repeat the call.

mod cloudflare;
mod error;
mod factory;
mod http_client;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use factory::create_client;

// Internal error-mapping traits are not exported
pub use traits::ZoneApi;

pub use types::{
    CloudflareCredentials, CredentialValidationError, RatePlan, SubscriptionFrequency, Zone,
    ZoneKind,
};

pub use cloudflare::CloudflareClient;
