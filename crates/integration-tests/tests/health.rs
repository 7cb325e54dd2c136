mod harness;

use harness::config::ConfigBuilder;
use harness::mock_upstream::MockUpstream;
use harness::server::TestServer;
use lumi_config::{AnyOrList, CorsConfig};

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let mock = MockUpstream::start().await.unwrap();
    let server = TestServer::start(ConfigBuilder::new(&mock).build()).await.unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn health_endpoint_disabled() {
    let mock = MockUpstream::start().await.unwrap();
    let server = TestServer::start(ConfigBuilder::new(&mock).without_health().build())
        .await
        .unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let mock = MockUpstream::start().await.unwrap();
    let server = TestServer::start(ConfigBuilder::new(&mock).build()).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/health"))
        .header("Origin", "https://reader.example")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn cors_origin_list_is_enforced() {
    let mock = MockUpstream::start().await.unwrap();
    let cors = CorsConfig {
        origins: AnyOrList::List(vec!["https://reader.example".to_owned()]),
        ..CorsConfig::default()
    };
    let server = TestServer::start(ConfigBuilder::new(&mock).with_cors(cors).build())
        .await
        .unwrap();

    let allowed = server
        .client()
        .get(server.url("/health"))
        .header("Origin", "https://reader.example")
        .send()
        .await
        .unwrap();
    assert_eq!(allowed.headers()["access-control-allow-origin"], "https://reader.example");

    let denied = server
        .client()
        .get(server.url("/health"))
        .header("Origin", "https://other.example")
        .send()
        .await
        .unwrap();
    assert!(denied.headers().get("access-control-allow-origin").is_none());
}
