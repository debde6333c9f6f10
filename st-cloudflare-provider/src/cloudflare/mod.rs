//! Cloudflare zone API client

mod api;
mod error;
mod http;
mod types;

use reqwest::{Client, RequestBuilder};

use crate::error::Result;
use crate::http_client::create_http_client;
use crate::types::CloudflareCredentials;

pub(crate) use types::{CloudflareResponse, CloudflareZone};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
pub(crate) const PROVIDER_NAME: &str = "cloudflare";

/// Cloudflare zone API client
pub struct CloudflareClient {
    pub(crate) client: Client,
    pub(crate) credentials: CloudflareCredentials,
    pub(crate) base_url: String,
}

impl CloudflareClient {
    /// Create a client against the public Cloudflare API.
    pub fn new(credentials: CloudflareCredentials) -> Result<Self> {
        Ok(Self {
            client: create_http_client(PROVIDER_NAME)?,
            credentials,
            base_url: CF_API_BASE.to_string(),
        })
    }

    /// Point the client at a different API root (no trailing slash).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Attach authentication headers for the configured credential type.
    pub(crate) fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            CloudflareCredentials::ApiToken { api_token } => {
                builder.header("Authorization", format!("Bearer {api_token}"))
            }
            CloudflareCredentials::ApiKey { email, api_key } => builder
                .header("X-Auth-Email", email)
                .header("X-Auth-Key", api_key),
        }
    }

    /// `/zones/{id}` with the id percent-encoded.
    pub(crate) fn zone_path(zone_id: &str) -> String {
        format!("/zones/{}", urlencoding::encode(zone_id))
    }
}
