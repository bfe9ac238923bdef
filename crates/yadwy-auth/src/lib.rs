//! Authentication plumbing for the Yadwy client
//!
//! Two states: unauthenticated (no usable access token) and authenticated.
//! Login stores both tokens; [`BearerAuth`] attaches the access token to
//! every request; [`RefreshOnUnauthorized`] trades the refresh token for a
//! new access token on a 401, or clears both tokens when that fails.

pub mod claims;
pub mod credentials;
pub mod error;
pub mod middleware;
pub mod refresh;
pub mod session;

pub use claims::{CurrentUser, TokenClaims, TokenType, SELLER_ROLE};
pub use credentials::{CredentialStore, Credentials, FileCredentialStore, MemoryCredentialStore};
pub use error::{AuthError, Result};
pub use middleware::{install, BearerAuth, RefreshOnUnauthorized, RefreshOutcome};
pub use refresh::{RefreshTokenRequest, RefreshTokenResponse, TokenRefresher, REFRESH_ENDPOINT};
pub use session::Session;
