//! Refresh token exchange

use serde::{Deserialize, Serialize};
use yadwy_http::HttpClient;

/// Backend route that exchanges a refresh token for a new access token
pub const REFRESH_ENDPOINT: &str = "/v1/auth/refresh";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Some backend versions rotate the refresh token as well
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Calls the refresh endpoint through a client with no middleware, so a
/// 401 from the refresh call itself never re-enters refresh handling.
#[derive(Debug, Clone)]
pub struct TokenRefresher {
    client: HttpClient,
    endpoint: String,
}

impl TokenRefresher {
    /// Strips any middleware from `client`
    pub fn new(client: &HttpClient) -> Self {
        Self {
            client: client.without_middleware(),
            endpoint: REFRESH_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn refresh(&self, refresh_token: &str) -> yadwy_http::Result<RefreshTokenResponse> {
        let request = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.client.post(&self.endpoint, &request, None).await
    }
}
