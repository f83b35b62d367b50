//! Authentication state shared by a client and its clones.

use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Tokens and user id of the authenticated account.
///
/// Empty strings mean "not set". A fresh client starts with all three empty.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    /// Sent as `Authorization: Bearer <access_token>` on items and orders calls.
    pub access_token: String,
    /// Used by [`AuthService::refresh`](crate::api::AuthService::refresh) when
    /// no token is passed explicitly.
    pub refresh_token: String,
    /// Filled into items and orders requests that do not name a user.
    pub user_id: String,
}

impl AuthContext {
    /// Creates a context from its three parts.
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            user_id: user_id.into(),
        }
    }
}

// Tokens stay out of logs.
impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(token: &str) -> &'static str {
            if token.is_empty() {
                "<empty>"
            } else {
                "<redacted>"
            }
        }

        f.debug_struct("AuthContext")
            .field("access_token", &redact(&self.access_token))
            .field("refresh_token", &redact(&self.refresh_token))
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Lock-guarded [`AuthContext`].
///
/// Every write replaces the fields wholesale under a single write lock, so
/// readers never observe a mix of old and new values. Concurrent logins or
/// refreshes on the same client are still last-write-wins; callers that need
/// ordering between them must serialize those calls themselves.
#[derive(Clone, Default)]
pub(crate) struct Session {
    inner: Arc<RwLock<AuthContext>>,
}

impl Session {
    /// Returns a copy of the current context.
    pub(crate) async fn snapshot(&self) -> AuthContext {
        self.inner.read().await.clone()
    }

    /// Overwrites all three fields.
    pub(crate) async fn set(&self, context: AuthContext) {
        *self.inner.write().await = context;
    }

    /// Overwrites both tokens and keeps the current user id.
    pub(crate) async fn set_tokens(
        &self,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) {
        let mut guard = self.inner.write().await;
        guard.access_token = access_token.into();
        guard.refresh_token = refresh_token.into();
    }

    pub(crate) async fn access_token(&self) -> String {
        self.inner.read().await.access_token.clone()
    }

    pub(crate) async fn refresh_token(&self) -> String {
        self.inner.read().await.refresh_token.clone()
    }

    pub(crate) async fn user_id(&self) -> String {
        self.inner.read().await.user_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_session_is_empty() {
        let session = Session::default();
        assert_eq!(session.snapshot().await, AuthContext::default());
    }

    #[tokio::test]
    async fn test_set_overwrites_all_fields() {
        let session = Session::default();
        session.set(AuthContext::new("a1", "r1", "u1")).await;
        session.set(AuthContext::new("a2", "r2", "")).await;

        assert_eq!(session.snapshot().await, AuthContext::new("a2", "r2", ""));
    }

    #[tokio::test]
    async fn test_set_tokens_keeps_user_id() {
        let session = Session::default();
        session.set(AuthContext::new("a1", "r1", "u1")).await;
        session.set_tokens("a2", "r2").await;

        assert_eq!(session.access_token().await, "a2");
        assert_eq!(session.refresh_token().await, "r2");
        assert_eq!(session.user_id().await, "u1");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let session = Session::default();
        let clone = session.clone();
        clone.set(AuthContext::new("a", "r", "u")).await;

        assert_eq!(session.user_id().await, "u");
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let context = AuthContext::new("secret-access", "secret-refresh", "42");
        let debug = format!("{:?}", context);

        assert!(!debug.contains("secret"));
        assert!(debug.contains("42"));
        assert!(debug.contains("<redacted>"));
    }
}
