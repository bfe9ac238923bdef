//! Unverified JWT payload decoding
//!
//! The signature is never checked here; the backend does that. Claims are
//! only read to answer "who is logged in" and "is the token still usable".

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Role carried by seller accounts
pub const SELLER_ROLE: &str = "SELLER";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
    #[serde(other)]
    Unknown,
}

/// Payload issued by the backend token provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub iss: Option<String>,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub exp: Option<i64>,
    /// Phone number of the account
    #[serde(default)]
    pub sub: String,
    /// Account id
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(rename = "type", default)]
    pub token_type: Option<TokenType>,
}

impl TokenClaims {
    /// Read the claims of a `header.payload.signature` token without
    /// verifying it. Accepts both the URL-safe and the standard base64
    /// alphabet, with or without padding. Expiry is left to the caller.
    pub fn decode(token: &str) -> Result<Self> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<Self>(
            &to_url_safe(token),
            &DecodingKey::from_secret(b""),
            &validation,
        )?;
        Ok(data.claims)
    }

    pub fn is_access(&self) -> bool {
        self.token_type == Some(TokenType::Access)
    }

    /// Expired, or carrying no expiry at all
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp.map_or(true, |exp| exp <= now)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

fn to_url_safe(token: &str) -> String {
    token
        .split('.')
        .map(|segment| segment.trim_end_matches('=').replace('+', "-").replace('/', "_"))
        .collect::<Vec<_>>()
        .join(".")
}

/// The logged-in account as far as the access token tells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: i64,
    /// Not carried by the token; filled from the seller profile when fetched
    pub name: String,
    pub phone_number: String,
    pub roles: Vec<String>,
}

impl From<TokenClaims> for CurrentUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            id: claims.id.unwrap_or_default(),
            name: String::new(),
            phone_number: claims.sub,
            roles: claims.roles,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use base64::{
        engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
        Engine as _,
    };
    use serde_json::json;

    fn header() -> String {
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#)
    }

    /// Unsigned token with the given payload, for tests
    pub(crate) fn token_with(payload: serde_json::Value) -> String {
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{}.{body}.signature", header())
    }

    #[test]
    fn test_decode_access_token() {
        let token = token_with(json!({
            "iss": "yadwy-service",
            "iat": 1_700_000_000,
            "exp": 1_700_003_600,
            "sub": "+201001234567",
            "id": 42,
            "roles": ["SELLER"],
            "type": "access"
        }));

        let claims = TokenClaims::decode(&token).unwrap();
        assert_eq!(claims.iss.as_deref(), Some("yadwy-service"));
        assert_eq!(claims.id, Some(42));
        assert!(claims.is_access());
        assert!(claims.has_role(SELLER_ROLE));
        assert!(!claims.is_expired_at(1_700_000_100));
        assert!(claims.is_expired_at(1_700_003_600));
    }

    #[test]
    fn test_decode_standard_alphabet_with_padding() {
        let payload = json!({"sub": "??>>", "type": "refresh", "exp": 1}).to_string();
        let token = format!("{}.{}.s", header(), STANDARD.encode(payload));
        let claims = TokenClaims::decode(&token).unwrap();
        assert_eq!(claims.sub, "??>>");
        assert_eq!(claims.token_type, Some(TokenType::Refresh));
    }

    #[test]
    fn test_unknown_type_is_not_access() {
        let claims = TokenClaims::decode(&token_with(json!({"type": "id"}))).unwrap();
        assert_eq!(claims.token_type, Some(TokenType::Unknown));
        assert!(!claims.is_access());
        assert!(claims.is_expired_at(0));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(TokenClaims::decode("").is_err());
        assert!(TokenClaims::decode("only-one-segment").is_err());
        assert!(TokenClaims::decode(&format!("{}.!!!.c", header())).is_err());
        let not_json = format!("{}.{}.c", header(), URL_SAFE_NO_PAD.encode("plain text"));
        assert!(TokenClaims::decode(&not_json).is_err());
        let bad_header = format!("h.{}.c", URL_SAFE_NO_PAD.encode(r#"{"sub":"0100"}"#));
        assert!(TokenClaims::decode(&bad_header).is_err());
    }

    #[test]
    fn test_unsigned_token_with_past_expiry_still_decodes() {
        let token = format!("{}.{}.", header(), URL_SAFE_NO_PAD.encode(r#"{"exp":1,"aud":"web"}"#));
        let claims = TokenClaims::decode(&token).unwrap();
        assert_eq!(claims.exp, Some(1));
        assert!(claims.is_expired_at(2));
    }

    #[test]
    fn test_current_user_from_claims() {
        let claims =
            TokenClaims::decode(&token_with(json!({"sub": "0100", "id": 7, "roles": ["SELLER"]})))
                .unwrap();
        let user = CurrentUser::from(claims);
        assert_eq!(user.id, 7);
        assert_eq!(user.phone_number, "0100");
        assert!(user.name.is_empty());
        assert_eq!(user.roles, vec!["SELLER".to_string()]);
    }
}
