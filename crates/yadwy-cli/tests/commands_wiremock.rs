//! Commands run end to end against a mock backend

use std::sync::Arc;

use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};
use yadwy_auth::{CredentialStore, Credentials, FileCredentialStore, MemoryCredentialStore};
use yadwy_cli::commands::{
    Command, LoginCommand, LogoutCommand, OrdersAction, OrdersCommand, WhoamiCommand,
};
use yadwy_cli::output::OutputStyle;
use yadwy_cli::{AppContext, CliError, Settings};

fn settings(server: &MockServer) -> Settings {
    Settings {
        api_url: Some(server.uri()),
        ..Default::default()
    }
}

fn context(server: &MockServer, store: Arc<dyn CredentialStore>) -> AppContext {
    AppContext::with_store(settings(server), store)
        .unwrap()
        .with_style(OutputStyle::plain())
}

#[tokio::test]
async fn test_missing_api_url_is_a_config_error() {
    let result = AppContext::with_store(Settings::default(), Arc::new(MemoryCredentialStore::new()));
    assert!(matches!(result, Err(CliError::Config(_))));
}

#[tokio::test]
async fn test_login_writes_credentials_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .and(body_json(json!({"phoneNumber": "+201001234567", "password": "pw"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"accessToken": "acc-1", "refreshToken": "ref-1"})),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("credentials.json");
    let ctx = context(&server, Arc::new(FileCredentialStore::new(&file)));

    LoginCommand::new("+201001234567".to_string(), Some("pw".to_string()))
        .execute(&ctx)
        .await
        .unwrap();

    let reopened = FileCredentialStore::new(&file);
    assert_eq!(
        reopened.get().unwrap(),
        Some(Credentials::new("acc-1", "ref-1"))
    );

    LogoutCommand.execute(&ctx).await.unwrap();
    assert!(reopened.get().unwrap().is_none());
}

#[tokio::test]
async fn test_orders_require_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = context(&server, Arc::new(MemoryCredentialStore::new()));
    let command = OrdersCommand::new(OrdersAction::List {
        page: 0,
        size: None,
        sort: None,
        all: false,
    });

    let err = command.execute(&ctx).await.unwrap_err();
    assert!(matches!(err, CliError::NotLoggedIn));
}

#[tokio::test]
async fn test_orders_list_all_follows_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/sellers/orders"))
        .and(query_param("page", "0"))
        .and(query_param("size", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}, {"id": 2}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/sellers/orders"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 3}])))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::with_credentials(Credentials::new(
        "acc-1", "ref-1",
    )));
    let ctx = context(&server, store);
    OrdersCommand::new(OrdersAction::List {
        page: 0,
        size: Some(2),
        sort: None,
        all: true,
    })
    .execute(&ctx)
    .await
    .unwrap();
}

#[tokio::test]
async fn test_whoami_without_token() {
    let server = MockServer::start().await;
    let ctx = context(&server, Arc::new(MemoryCredentialStore::new()));
    let err = WhoamiCommand.execute(&ctx).await.unwrap_err();
    assert!(matches!(err, CliError::NotLoggedIn));
}

#[tokio::test]
async fn test_backend_message_reaches_user() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/sellers/orders/5"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "Order already delivered"})),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::with_credentials(Credentials::new(
        "acc-1", "ref-1",
    )));
    let ctx = context(&server, store);
    let err = OrdersCommand::new(OrdersAction::SetStatus {
        id: "5".to_string(),
        status: "CANCELLED".to_string(),
    })
    .execute(&ctx)
    .await
    .unwrap_err();

    assert_eq!(
        err.user_message(),
        "Request failed (409): Order already delivered"
    );
}
