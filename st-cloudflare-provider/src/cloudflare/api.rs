//! Cloudflare `ZoneApi` trait 实现

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{ProviderError, Result};
use crate::traits::{ErrorContext, ZoneApi};
use crate::types::{CloudflareCredentials, RatePlan, SubscriptionFrequency, Zone, ZoneKind};

use super::types::{EditZoneBody, RatePlanRef, SubscriptionBody};
use super::{CloudflareClient, CloudflareZone, PROVIDER_NAME};

impl From<CloudflareZone> for Zone {
    fn from(zone: CloudflareZone) -> Self {
        Self {
            id: zone.id,
            name: zone.name,
            zone_type: zone.zone_type,
            status: zone.status,
            verification_key: zone.verification_key.filter(|k| !k.is_empty()),
        }
    }
}

#[async_trait]
impl ZoneApi for CloudflareClient {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn validate_credentials(&self) -> Result<bool> {
        #[derive(Deserialize)]
        struct VerifyResponse {
            status: String,
        }

        let verified = match &self.credentials {
            CloudflareCredentials::ApiToken { .. } => self
                .get::<VerifyResponse>("/user/tokens/verify", ErrorContext::default())
                .await
                .map(|resp| resp.status == "active"),
            // Global API Key 没有 verify 端点，改为读取 /user
            CloudflareCredentials::ApiKey { .. } => self
                .get::<serde_json::Value>("/user", ErrorContext::default())
                .await
                .map(|_| true),
        };

        // 仅认证类错误表示凭证无效，其余错误原样返回
        match verified {
            Err(ProviderError::InvalidCredentials { .. } | ProviderError::PermissionDenied { .. }) => {
                Ok(false)
            }
            other => other,
        }
    }

    async fn set_subscription(
        &self,
        zone_id: &str,
        rate_plan: RatePlan,
        frequency: SubscriptionFrequency,
    ) -> Result<()> {
        let body = SubscriptionBody {
            frequency,
            rate_plan: RatePlanRef { id: rate_plan },
        };
        let path = format!("{}/subscription", Self::zone_path(zone_id));
        let _: serde_json::Value = self
            .post(&path, &body, ErrorContext::for_zone(zone_id))
            .await?;
        log::info!("[{PROVIDER_NAME}] zone {zone_id} subscription set to {rate_plan}");
        Ok(())
    }

    async fn set_zone_type(&self, zone_id: &str, zone_type: ZoneKind) -> Result<Zone> {
        let body = EditZoneBody { zone_type };
        let zone: CloudflareZone = self
            .patch(
                &Self::zone_path(zone_id),
                &body,
                ErrorContext::for_zone(zone_id),
            )
            .await?;
        log::info!("[{PROVIDER_NAME}] zone {zone_id} type set to {}", zone.zone_type);
        Ok(zone.into())
    }

    async fn get_zone(&self, zone_id: &str) -> Result<Zone> {
        let zone: CloudflareZone = self
            .get(&Self::zone_path(zone_id), ErrorContext::for_zone(zone_id))
            .await?;
        Ok(zone.into())
    }
}
