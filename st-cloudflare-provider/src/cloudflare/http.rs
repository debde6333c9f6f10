//! Cloudflare HTTP 请求方法

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::CloudflareCredentials;
use crate::utils::log_sanitizer::{mask_secret, truncate_for_log};

use super::{CloudflareClient, CloudflareResponse};

impl CloudflareClient {
    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, None, context).await
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        self.request(Method::POST, path, Some(body), context).await
    }

    /// 执行 PATCH 请求
    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        self.request(Method::PATCH, path, Some(body), context).await
    }

    /// 发送请求并解包 `{success, result, errors}` 响应信封
    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("[{}] auth: {}", self.provider_name(), self.auth_summary());

        let mut builder = self.authorize(self.client.request(method.clone(), &url));
        if let Some(body) = body {
            let body_json =
                serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                    provider: self.provider_name().to_string(),
                    detail: e.to_string(),
                })?;
            log::debug!("Request Body: {}", truncate_for_log(&body_json));
            builder = builder
                .header("Content-Type", "application/json")
                .body(body_json);
        }

        let (_status, response_text) =
            HttpUtils::execute_request(builder, self.provider_name(), method.as_str(), &url)
                .await?;

        let cf_response: CloudflareResponse<T> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;

        if !cf_response.success {
            let raw = cf_response.errors.first().map_or_else(
                || RawApiError::new("Unknown error"),
                |e| RawApiError::with_code(e.code.to_string(), e.message.clone()),
            );
            log::error!("[{}] API 错误: {}", self.provider_name(), raw.message);
            return Err(self.map_error(raw, context));
        }

        cf_response
            .result
            .ok_or_else(|| self.parse_error("响应中缺少 result 字段"))
    }

    fn auth_summary(&self) -> String {
        match &self.credentials {
            CloudflareCredentials::ApiToken { api_token } => {
                format!("bearer {}", mask_secret(api_token))
            }
            CloudflareCredentials::ApiKey { email, api_key } => {
                format!("key {} for {email}", mask_secret(api_key))
            }
        }
    }
}
