//! 共享测试工具和辅助函数

#![allow(dead_code)]

use serde_json::{Value, json};
use st_cloudflare_provider::{CloudflareClient, CloudflareCredentials};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

pub const TEST_TOKEN: &str = "abcdefghijABCDEFGHIJ0123456789-_abcdefgh";

/// 使用固定 token 认证、指向 `base_url` 的客户端
pub fn token_client(base_url: &str) -> CloudflareClient {
    CloudflareClient::new(CloudflareCredentials::ApiToken {
        api_token: TEST_TOKEN.to_string(),
    })
    .unwrap()
    .with_base_url(base_url)
}

/// 包裹 `result` 的成功响应信封
pub fn ok_envelope(result: Value) -> Value {
    json!({ "success": true, "errors": [], "messages": [], "result": result })
}

/// 仅含一个错误的失败响应信封
pub fn error_envelope(code: i32, message: &str) -> Value {
    json!({
        "success": false,
        "errors": [{ "code": code, "message": message }],
        "messages": [],
        "result": null
    })
}

/// `GET /zones/{id}` 返回的 zone 对象
pub fn zone_json(id: &str, zone_type: &str, verification_key: Option<&str>) -> Value {
    json!({
        "id": id,
        "name": "example.com",
        "type": zone_type,
        "status": "active",
        "verification_key": verification_key,
        "name_servers": ["ada.ns.cloudflare.com", "bob.ns.cloudflare.com"]
    })
}
