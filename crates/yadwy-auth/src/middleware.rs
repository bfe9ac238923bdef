//! Bearer token attachment and refresh-on-401
//!
//! The refresh stage never retries the original request: the caller still
//! sees the 401 and must re-issue the call to use the new token.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use yadwy_http::{
    header::AUTHORIZATION, HttpClient, HttpError, RequestContext, RequestMiddleware,
    ResponseContext, ResponseMiddleware, StatusCode,
};

use crate::{
    credentials::{CredentialStore, Credentials},
    refresh::TokenRefresher,
};

const BEARER_PREFIX: &str = "Bearer ";

/// What the refresh stage did with a 401
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// New access token stored
    Refreshed,
    /// Refresh call failed; credentials cleared
    Cleared,
    /// No refresh token stored; nothing touched
    NoRefreshToken,
    /// Another request already replaced the token this request was sent with
    AlreadyRefreshed,
    /// The store could not be read or written
    StoreUnavailable,
}

/// Attaches `Authorization: Bearer <access token>` while a token is stored
pub struct BearerAuth {
    store: Arc<dyn CredentialStore>,
}

impl BearerAuth {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RequestMiddleware for BearerAuth {
    fn name(&self) -> &str {
        "bearer-auth"
    }

    async fn on_request(&self, mut request: RequestContext) -> yadwy_http::Result<RequestContext> {
        let token = self
            .store
            .access_token()
            .map_err(|e| HttpError::middleware(self.name(), e))?;

        if let Some(token) = token {
            request.set_header(AUTHORIZATION.as_str(), &format!("{BEARER_PREFIX}{token}"))?;
        }
        Ok(request)
    }
}

/// On 401, exchanges the stored refresh token for a new access token once.
///
/// Refresh attempts are serialized. A request that was sent with an access
/// token which has since been replaced does not trigger another refresh, so
/// a burst of concurrent 401s costs one refresh call.
pub struct RefreshOnUnauthorized {
    store: Arc<dyn CredentialStore>,
    refresher: TokenRefresher,
    in_flight: Mutex<()>,
}

impl RefreshOnUnauthorized {
    pub fn new(store: Arc<dyn CredentialStore>, refresher: TokenRefresher) -> Self {
        Self {
            store,
            refresher,
            in_flight: Mutex::new(()),
        }
    }

    /// Handle a 401 for a request that carried `sent_token` (if any)
    pub async fn handle_unauthorized(&self, sent_token: Option<&str>) -> RefreshOutcome {
        let _guard = self.in_flight.lock().await;

        let stored = match self.store.get() {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Cannot read credentials after 401: {e}");
                return RefreshOutcome::StoreUnavailable;
            }
        };

        let Some(Credentials {
            access_token,
            refresh_token: Some(refresh_token),
        }) = stored
        else {
            debug!("401 received with no refresh token stored");
            return RefreshOutcome::NoRefreshToken;
        };

        if sent_token.is_some_and(|sent| sent != access_token) {
            debug!("access token replaced while request was in flight; skipping refresh");
            return RefreshOutcome::AlreadyRefreshed;
        }

        match self.refresher.refresh(&refresh_token).await {
            Ok(refreshed) => {
                let credentials = Credentials {
                    access_token: refreshed.access_token,
                    refresh_token: refreshed.refresh_token.or(Some(refresh_token)),
                };
                match self.store.set(credentials) {
                    Ok(()) => {
                        info!("Access token refreshed");
                        RefreshOutcome::Refreshed
                    }
                    Err(e) => {
                        warn!("Refreshed token could not be stored: {e}");
                        RefreshOutcome::StoreUnavailable
                    }
                }
            }
            Err(e) => {
                warn!("Token refresh failed: {e}");
                if let Err(e) = self.store.clear() {
                    warn!("Failed to clear credentials: {e}");
                    return RefreshOutcome::StoreUnavailable;
                }
                RefreshOutcome::Cleared
            }
        }
    }
}

#[async_trait]
impl ResponseMiddleware for RefreshOnUnauthorized {
    fn name(&self) -> &str {
        "refresh-on-401"
    }

    async fn on_response(&self, response: ResponseContext) -> yadwy_http::Result<ResponseContext> {
        if response.status != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        let sent = response
            .request
            .header(AUTHORIZATION.as_str())
            .and_then(|value| value.strip_prefix(BEARER_PREFIX));
        let outcome = self.handle_unauthorized(sent).await;
        debug!(?outcome, url = %response.request.url, "handled 401");

        Ok(response)
    }
}

/// Register bearer attachment and refresh-on-401 on `client`.
/// The refresh call goes through a middleware-free copy of `client`.
pub fn install(client: &mut HttpClient, store: Arc<dyn CredentialStore>) {
    let refresher = TokenRefresher::new(client);
    client.add_request_middleware(BearerAuth::new(Arc::clone(&store)));
    client.add_response_middleware(RefreshOnUnauthorized::new(store, refresher));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::MemoryCredentialStore;
    use yadwy_http::Method;

    #[tokio::test]
    async fn test_bearer_header_attached_when_token_stored() {
        let store = Arc::new(MemoryCredentialStore::with_credentials(Credentials::new(
            "acc-1", "ref-1",
        )));
        let stage = BearerAuth::new(store);

        let request = stage
            .on_request(RequestContext::new(Method::GET, "/v1/sellers/orders"))
            .await
            .unwrap();
        assert_eq!(request.header("authorization"), Some("Bearer acc-1"));
    }

    #[tokio::test]
    async fn test_no_header_without_token() {
        let stage = BearerAuth::new(Arc::new(MemoryCredentialStore::new()));
        let request = stage
            .on_request(RequestContext::new(Method::GET, "/v1/provinces"))
            .await
            .unwrap();
        assert!(request.header("authorization").is_none());
    }

    #[tokio::test]
    async fn test_refresh_token_never_sent_as_bearer() {
        let store = Arc::new(MemoryCredentialStore::with_credentials(Credentials::new(
            "acc", "ref",
        )));
        let request = BearerAuth::new(store)
            .on_request(RequestContext::new(Method::GET, "/"))
            .await
            .unwrap();
        assert!(!request.header("authorization").unwrap().contains("ref"));
    }

    #[tokio::test]
    async fn test_no_refresh_token_leaves_store_alone() {
        let store = Arc::new(MemoryCredentialStore::with_credentials(
            Credentials::access_only("acc"),
        ));
        let client = HttpClient::with_defaults().unwrap();
        let stage = RefreshOnUnauthorized::new(store.clone(), TokenRefresher::new(&client));

        let outcome = stage.handle_unauthorized(Some("acc")).await;
        assert_eq!(outcome, RefreshOutcome::NoRefreshToken);
        assert_eq!(store.get().unwrap(), Some(Credentials::access_only("acc")));
    }

    #[tokio::test]
    async fn test_stale_token_skips_refresh() {
        let store = Arc::new(MemoryCredentialStore::with_credentials(Credentials::new(
            "newer", "ref",
        )));
        let client = HttpClient::with_defaults().unwrap();
        let stage = RefreshOnUnauthorized::new(store.clone(), TokenRefresher::new(&client));

        let outcome = stage.handle_unauthorized(Some("older")).await;
        assert_eq!(outcome, RefreshOutcome::AlreadyRefreshed);
        assert_eq!(store.access_token().unwrap().as_deref(), Some("newer"));
    }

    #[test]
    fn test_install_registers_both_stages() {
        let mut client = HttpClient::with_defaults().unwrap();
        install(&mut client, Arc::new(MemoryCredentialStore::new()));
        assert_eq!(client.pipeline().request_stages(), vec!["bearer-auth"]);
        assert_eq!(client.pipeline().response_stages(), vec!["refresh-on-401"]);
    }
}
