use std::sync::Arc;

use tracing::{debug, info, warn};
use yadwy_auth::{Credentials, CurrentUser, Session, TokenRefresher};
use yadwy_http::HttpClient;

use crate::error::{ApiError, ApiResult};
use crate::models::{LoginRequest, LoginResponse, RegisterSellerRequest, RegisterSellerResponse};

pub const LOGIN_ENDPOINT: &str = "/v1/auth/login";
pub const REGISTER_SELLER_ENDPOINT: &str = "/v1/auth/register/seller";

/// Login, registration and local session state
#[derive(Debug, Clone)]
pub struct AuthService {
    client: Arc<HttpClient>,
    refresher: TokenRefresher,
    session: Session,
}

impl AuthService {
    pub fn new(client: Arc<HttpClient>, session: Session) -> Self {
        let refresher = TokenRefresher::new(&client);
        Self {
            client,
            refresher,
            session,
        }
    }

    /// Sign in and persist both tokens
    pub async fn login(&self, phone_number: &str, password: &str) -> ApiResult<LoginResponse> {
        let request = LoginRequest {
            phone_number: phone_number.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self
            .client
            .post(LOGIN_ENDPOINT, &request, None)
            .await
            .map_err(|e| {
                warn!("Login failed: {}", e);
                ApiError::from(e)
            })?;

        self.session.store().set(Credentials::from(&response))?;
        info!("Logged in as {}", phone_number);
        Ok(response)
    }

    /// Create a seller account and persist the returned tokens
    pub async fn register_seller(
        &self,
        name: &str,
        phone_number: &str,
        password: &str,
    ) -> ApiResult<RegisterSellerResponse> {
        let request = RegisterSellerRequest {
            name: name.to_string(),
            phone_number: phone_number.to_string(),
            password: password.to_string(),
        };

        let response: RegisterSellerResponse = self
            .client
            .post(REGISTER_SELLER_ENDPOINT, &request, None)
            .await
            .map_err(|e| {
                warn!("Seller registration failed: {}", e);
                ApiError::from(e)
            })?;

        self.session.store().set(Credentials::from(&response))?;
        info!("Registered seller account {}", response.account_id);
        Ok(response)
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// A rotated refresh token replaces the stored one. Stored credentials
    /// are left as they were when the exchange fails.
    pub async fn refresh(&self) -> ApiResult<String> {
        let store = self.session.store();
        let refresh_token = store
            .refresh_token()?
            .ok_or(yadwy_auth::AuthError::MissingRefreshToken)?;

        let response = self.refresher.refresh(&refresh_token).await?;
        match response.refresh_token {
            Some(rotated) => store.set(Credentials::new(&response.access_token, rotated))?,
            None => store.update_access_token(response.access_token.clone())?,
        }
        debug!("Access token refreshed");
        Ok(response.access_token)
    }

    /// Forget both tokens. The backend keeps no session to end.
    pub fn logout(&self) -> ApiResult<()> {
        self.session.store().clear()?;
        info!("Logged out");
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.session.current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.session.has_role(role)
    }

    pub fn is_seller(&self) -> bool {
        self.session.is_seller()
    }
}
