use std::fmt;

use serde::{Deserialize, Serialize};
use yadwy_auth::Credentials;

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone_number: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("phone_number", &self.phone_number)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<&LoginResponse> for Credentials {
    fn from(response: &LoginResponse) -> Self {
        Credentials::new(&response.access_token, &response.refresh_token)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSellerRequest {
    pub name: String,
    pub phone_number: String,
    pub password: String,
}

impl fmt::Debug for RegisterSellerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterSellerRequest")
            .field("name", &self.name)
            .field("phone_number", &self.phone_number)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSellerResponse {
    pub account_id: i64,
    pub access_token: String,
    pub refresh_token: String,
}

impl From<&RegisterSellerResponse> for Credentials {
    fn from(response: &RegisterSellerResponse) -> Self {
        Credentials::new(&response.access_token, &response.refresh_token)
    }
}
