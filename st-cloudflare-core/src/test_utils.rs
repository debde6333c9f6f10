//! 测试辅助模块
//!
//! 提供可编排失败次数的 `ZoneApi` mock，并记录每一次调用。

use std::sync::Arc;

use async_trait::async_trait;
use st_cloudflare_provider::{
    ProviderError, RatePlan, Result, SubscriptionFrequency, Zone, ZoneApi, ZoneKind,
};
use tokio::sync::Mutex;

use crate::services::ZoneTypeService;

/// One recorded API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    SetSubscription(String, RatePlan, SubscriptionFrequency),
    SetZoneType(String, ZoneKind),
    GetZone(String),
}

/// How an operation answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Succeed,
    /// Fail this many calls, then succeed.
    FailTimes(u32),
    AlwaysFail,
}

impl Script {
    /// Consume one call; `true` means the call fails.
    fn next_fails(&mut self) -> bool {
        match self {
            Self::Succeed => false,
            Self::AlwaysFail => true,
            Self::FailTimes(0) => {
                *self = Self::Succeed;
                false
            }
            Self::FailTimes(n) => {
                *n -= 1;
                true
            }
        }
    }
}

// ===== MockZoneApi =====

pub struct MockZoneApi {
    calls: Mutex<Vec<ApiCall>>,
    subscription: Mutex<Script>,
    zone_type: Mutex<Script>,
    get_zone: Mutex<Script>,
    current_type: Mutex<ZoneKind>,
    /// Key returned by every `set_zone_type`; `key-<n>` when unset.
    verification_key: Mutex<Option<String>>,
    zone_type_calls: Mutex<u32>,
    credentials_valid: Mutex<bool>,
}

impl MockZoneApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            subscription: Mutex::new(Script::Succeed),
            zone_type: Mutex::new(Script::Succeed),
            get_zone: Mutex::new(Script::Succeed),
            current_type: Mutex::new(ZoneKind::Full),
            verification_key: Mutex::new(None),
            zone_type_calls: Mutex::new(0),
            credentials_valid: Mutex::new(true),
        }
    }

    pub async fn set_subscription_script(&self, script: Script) {
        *self.subscription.lock().await = script;
    }

    pub async fn set_zone_type_script(&self, script: Script) {
        *self.zone_type.lock().await = script;
    }

    pub async fn set_get_zone_script(&self, script: Script) {
        *self.get_zone.lock().await = script;
    }

    pub async fn set_verification_key(&self, key: &str) {
        *self.verification_key.lock().await = Some(key.to_string());
    }

    pub async fn set_credentials_valid(&self, valid: bool) {
        *self.credentials_valid.lock().await = valid;
    }

    /// Change the zone type behind the resource's back.
    pub async fn set_current_type(&self, kind: ZoneKind) {
        *self.current_type.lock().await = kind;
    }

    pub async fn current_type(&self) -> ZoneKind {
        *self.current_type.lock().await
    }

    pub async fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().await.clone()
    }

    pub async fn count(&self, matches: impl Fn(&ApiCall) -> bool) -> usize {
        self.calls.lock().await.iter().filter(|c| matches(c)).count()
    }

    fn failure(operation: &str) -> ProviderError {
        ProviderError::NetworkError {
            provider: "mock".to_string(),
            detail: format!("{operation} unavailable"),
        }
    }
}

#[async_trait]
impl ZoneApi for MockZoneApi {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn validate_credentials(&self) -> Result<bool> {
        Ok(*self.credentials_valid.lock().await)
    }

    async fn set_subscription(
        &self,
        zone_id: &str,
        rate_plan: RatePlan,
        frequency: SubscriptionFrequency,
    ) -> Result<()> {
        self.calls.lock().await.push(ApiCall::SetSubscription(
            zone_id.to_string(),
            rate_plan,
            frequency,
        ));
        if self.subscription.lock().await.next_fails() {
            return Err(Self::failure("subscription"));
        }
        Ok(())
    }

    async fn set_zone_type(&self, zone_id: &str, zone_type: ZoneKind) -> Result<Zone> {
        self.calls
            .lock()
            .await
            .push(ApiCall::SetZoneType(zone_id.to_string(), zone_type));
        let n = {
            let mut calls = self.zone_type_calls.lock().await;
            *calls += 1;
            *calls
        };
        if self.zone_type.lock().await.next_fails() {
            return Err(Self::failure("zone edit"));
        }
        *self.current_type.lock().await = zone_type;
        let key = self
            .verification_key
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| format!("key-{n}"));
        Ok(Zone {
            id: zone_id.to_string(),
            name: "example.com".to_string(),
            zone_type,
            status: "pending".to_string(),
            verification_key: (zone_type != ZoneKind::Full).then_some(key),
        })
    }

    async fn get_zone(&self, zone_id: &str) -> Result<Zone> {
        self.calls
            .lock()
            .await
            .push(ApiCall::GetZone(zone_id.to_string()));
        if self.get_zone.lock().await.next_fails() {
            return Err(Self::failure("zone read"));
        }
        Ok(Zone {
            id: zone_id.to_string(),
            name: "example.com".to_string(),
            zone_type: *self.current_type.lock().await,
            status: "active".to_string(),
            verification_key: None,
        })
    }
}

/// Service over a fresh mock, returning both.
pub fn create_test_service() -> (ZoneTypeService, Arc<MockZoneApi>) {
    let api = Arc::new(MockZoneApi::new());
    (ZoneTypeService::new(api.clone()), api)
}
