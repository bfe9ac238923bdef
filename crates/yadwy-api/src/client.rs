//! Entry point that wires the authenticated client to the services

use std::sync::Arc;

use tracing::debug;
use yadwy_auth::{CredentialStore, Session};
use yadwy_http::{HttpClient, HttpConfig};

use crate::error::ApiResult;
use crate::services::{
    AuthService, CategoriesService, OrdersService, ProductsService, ProvincesService,
};

/// Environment variable holding the backend base URL
pub const API_URL_ENV: &str = "YADWY_API_URL";

/// Seller API client.
///
/// Owns one [`HttpClient`] carrying bearer attachment and refresh-on-401,
/// plus the credential store both of them read. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct SellerApi {
    client: Arc<HttpClient>,
    session: Session,
}

impl SellerApi {
    pub fn new(config: HttpConfig, store: Arc<dyn CredentialStore>) -> ApiResult<Self> {
        Ok(Self::with_client(HttpClient::new(config)?, store))
    }

    /// Build on top of an existing client, e.g. one with a custom transport
    pub fn with_client(mut client: HttpClient, store: Arc<dyn CredentialStore>) -> Self {
        yadwy_auth::install(&mut client, Arc::clone(&store));
        debug!(
            base_url = client.config().base_url.as_deref().unwrap_or(""),
            "seller API client ready"
        );
        Self {
            client: Arc::new(client),
            session: Session::new(store),
        }
    }

    /// Base URL from `YADWY_API_URL`, everything else default
    pub fn from_env(store: Arc<dyn CredentialStore>) -> ApiResult<Self> {
        let mut config = HttpConfig::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config = config.with_base_url(url);
        }
        Self::new(config, store)
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(Arc::clone(&self.client), self.session.clone())
    }

    pub fn orders(&self) -> OrdersService {
        OrdersService::new(Arc::clone(&self.client))
    }

    pub fn products(&self) -> ProductsService {
        ProductsService::new(Arc::clone(&self.client))
    }

    pub fn categories(&self) -> CategoriesService {
        CategoriesService::new(Arc::clone(&self.client))
    }

    pub fn provinces(&self) -> ProvincesService {
        ProvincesService::new(Arc::clone(&self.client))
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        self.session.store()
    }
}
