//! Full seller flows: login, bearer use, refresh on 401 and forced logout

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};
use yadwy_api::{ListingKind, PageParams, SellerApi};
use yadwy_auth::{CredentialStore, Credentials, FileCredentialStore, MemoryCredentialStore};
use yadwy_http::{HttpConfig, StatusCode};

fn seller_api(server: &MockServer, store: Arc<dyn CredentialStore>) -> SellerApi {
    SellerApi::new(HttpConfig::new().with_base_url(server.uri()), store).unwrap()
}

async fn requests_to(server: &MockServer, route: &str) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == route)
        .collect()
}

#[tokio::test]
async fn scenario_login_then_list_orders() {
    let server = MockServer::start().await;
    let orders = json!([
        {"id": 101, "status": "unfulfilled", "items": [{"productId": 3, "quantity": 1, "price": 40.0}]},
        {"id": 102, "status": "fulfilled", "items": []}
    ]);

    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"accessToken": "acc-1", "refreshToken": "ref-1"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/sellers/orders"))
        .and(header("authorization", "Bearer acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(orders.clone()))
        .expect(2)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileCredentialStore::new(dir.path().join("credentials.json")));
    let api = seller_api(&server, store.clone());

    api.auth().login("+201001234567", "pw").await.unwrap();
    assert_eq!(store.get().unwrap(), Some(Credentials::new("acc-1", "ref-1")));

    // raw consumer sees the array exactly as sent
    let raw: Value = api.client().get("/v1/sellers/orders", None).await.unwrap();
    assert_eq!(raw, orders);

    let listing = api.orders().list(&PageParams::default()).await.unwrap();
    assert_eq!(listing.kind(), ListingKind::List);
    let ids: Vec<&str> = listing.items().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["101", "102"]);
}

#[tokio::test]
async fn scenario_expired_token_refreshes_and_manual_retry_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/sellers/orders"))
        .and(header("authorization", "Bearer expired"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/refresh"))
        .and(body_json(json!({"refreshToken": "ref-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "fresh"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/sellers/orders"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "7"}])))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::with_credentials(Credentials::new(
        "expired", "ref-1",
    )));
    let api = seller_api(&server, store.clone());

    let err = api.orders().list(&PageParams::default()).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    assert_eq!(err.to_string(), "Token expired");
    assert_eq!(store.get().unwrap(), Some(Credentials::new("fresh", "ref-1")));

    let retried = api.orders().list(&PageParams::default()).await.unwrap();
    assert_eq!(retried.items()[0].id, "7");
}

#[tokio::test]
async fn scenario_rejected_refresh_logs_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/sellers/orders"))
        .and(header("authorization", "Bearer expired"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Refresh token revoked"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/provinces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::with_credentials(Credentials::new(
        "expired", "ref-1",
    )));
    let api = seller_api(&server, store.clone());

    let err = api.orders().list(&PageParams::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP Error: 401");
    assert!(store.get().unwrap().is_none());
    assert!(!api.session().is_authenticated());

    api.provinces().list().await.unwrap();
    let later = requests_to(&server, "/v1/provinces").await;
    assert_eq!(later.len(), 1);
    assert!(!later[0].headers.contains_key("authorization"));
}
