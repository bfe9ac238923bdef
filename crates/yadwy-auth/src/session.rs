//! Read-side view of the stored credentials

use std::sync::Arc;

use tracing::debug;

use crate::{
    claims::{CurrentUser, TokenClaims, SELLER_ROLE},
    credentials::CredentialStore,
};

/// Answers identity questions from the stored access token.
/// Missing, unreadable or malformed tokens all mean "nobody".
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    fn claims(&self) -> Option<TokenClaims> {
        let token = match self.store.access_token() {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(e) => {
                debug!("credential store unreadable: {e}");
                return None;
            }
        };
        match TokenClaims::decode(&token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!("failed to decode access token: {e}");
                None
            }
        }
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.claims().map(CurrentUser::from)
    }

    /// Access token present, of type `access`, and not yet expired
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(chrono::Utc::now().timestamp())
    }

    pub fn is_authenticated_at(&self, now: i64) -> bool {
        self.claims()
            .is_some_and(|claims| claims.is_access() && !claims.is_expired_at(now))
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.claims().is_some_and(|claims| claims.has_role(role))
    }

    pub fn is_seller(&self) -> bool {
        self.has_role(SELLER_ROLE)
    }
}
