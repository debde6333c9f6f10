//! Cloudflare 集成测试（真实 API，只读）
//!
//! 运行方式:
//! ```bash
//! CLOUDFLARE_API_TOKEN=xxx TEST_ZONE_ID=xxx \
//!     cargo test -p st-cloudflare-provider --test cloudflare_live_test -- --ignored --nocapture
//! ```

mod common;

use st_cloudflare_provider::{CloudflareCredentials, ZoneApi, create_client};

fn live_client() -> std::sync::Arc<dyn ZoneApi> {
    let api_token = std::env::var("CLOUDFLARE_API_TOKEN").unwrap();
    create_client(CloudflareCredentials::ApiToken { api_token }).expect("创建客户端失败")
}

#[tokio::test]
#[ignore]
async fn test_cloudflare_validate_credentials() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN");

    let result = live_client().validate_credentials().await;
    assert!(result.is_ok(), "validate_credentials 调用失败: {result:?}");
    assert!(result.unwrap(), "凭证应该有效");
}

#[tokio::test]
#[ignore]
async fn test_cloudflare_get_zone() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_ZONE_ID");

    let zone_id = std::env::var("TEST_ZONE_ID").unwrap();
    let result = live_client().get_zone(&zone_id).await;
    assert!(result.is_ok(), "get_zone 调用失败: {result:?}");

    let zone = result.unwrap();
    assert_eq!(zone.id, zone_id);
    println!("✓ get_zone 测试通过: {} ({})", zone.name, zone.zone_type);
}
