use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{RatePlan, SubscriptionFrequency, Zone, ZoneKind};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 请求涉及的 zone ID（用于 `ZoneNotFound` / `PlanRejected`）
    pub zone_id: Option<String>,
}

impl ErrorContext {
    pub fn for_zone(zone_id: &str) -> Self {
        Self {
            zone_id: Some(zone_id.to_string()),
        }
    }
}

/// 错误映射 Trait（内部使用）
/// 将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 API 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Zone 管理操作（类型转换流程依赖的全部 API）
#[async_trait]
pub trait ZoneApi: Send + Sync {
    /// API 标识符
    fn id(&self) -> &'static str;

    /// 验证凭证是否有效
    ///
    /// 凭证被拒绝时返回 `Ok(false)`；网络、限流等其他错误原样返回
    async fn validate_credentials(&self) -> Result<bool>;

    /// 将 zone 的订阅切换到 `rate_plan`，按 `frequency` 计费
    async fn set_subscription(
        &self,
        zone_id: &str,
        rate_plan: RatePlan,
        frequency: SubscriptionFrequency,
    ) -> Result<()>;

    /// 修改 zone 类型，返回的 zone 携带新类型签发的验证 key（如有）
    async fn set_zone_type(&self, zone_id: &str, zone_type: ZoneKind) -> Result<Zone>;

    /// 获取 zone 当前状态
    async fn get_zone(&self, zone_id: &str) -> Result<Zone>;
}
