//! Cloudflare API 类型定义

use serde::{Deserialize, Serialize};

use crate::types::{RatePlan, SubscriptionFrequency, ZoneKind};

/// Cloudflare API 通用响应
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub errors: Vec<CloudflareError>,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareError {
    pub code: i32,
    pub message: String,
}

/// Cloudflare Zone 结构
#[derive(Debug, Deserialize)]
pub struct CloudflareZone {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: ZoneKind,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub verification_key: Option<String>,
}

/// `PATCH /zones/{id}` 请求体
#[derive(Debug, Serialize)]
pub struct EditZoneBody {
    #[serde(rename = "type")]
    pub zone_type: ZoneKind,
}

/// `POST /zones/{id}/subscription` 请求体
#[derive(Debug, Serialize)]
pub struct SubscriptionBody {
    pub frequency: SubscriptionFrequency,
    pub rate_plan: RatePlanRef,
}

#[derive(Debug, Serialize)]
pub struct RatePlanRef {
    pub id: RatePlan,
}
