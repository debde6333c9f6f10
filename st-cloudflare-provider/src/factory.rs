//! Client factory.

use std::sync::Arc;

use crate::cloudflare::CloudflareClient;
use crate::error::{ProviderError, Result};
use crate::traits::ZoneApi;
use crate::types::CloudflareCredentials;

/// Creates a [`ZoneApi`] client from the given credentials.
///
/// Credentials are validated before the client is built; a malformed token
/// or key is reported as [`ProviderError::InvalidParameter`] naming the field.
///
/// # Examples
///
/// ```rust,no_run
/// use st_cloudflare_provider::{create_client, CloudflareCredentials};
///
/// let client = create_client(CloudflareCredentials::ApiToken {
///     api_token: "your-40-character-api-token-goes-here-xx".to_string(),
/// }).unwrap();
/// ```
pub fn create_client(credentials: CloudflareCredentials) -> Result<Arc<dyn ZoneApi>> {
    credentials
        .validate()
        .map_err(|e| ProviderError::InvalidParameter {
            provider: crate::cloudflare::PROVIDER_NAME.to_string(),
            param: e.field().to_string(),
            detail: e.to_string(),
        })?;
    Ok(Arc::new(CloudflareClient::new(credentials)?))
}
