//! Login flow: login, poll, refresh and signup.

use http::Method;

use super::missing;
use crate::models::{
    LoginRequest, LoginResponse, PollRequest, PollResponse, RefreshTokensRequest,
    RefreshTokensResponse, SignupRequest, SignupResponse,
};
use crate::session::AuthContext;
use crate::{Client, Error, Response, Result};

const AUTH_BASE_PATH: &str = "auth/v3";

/// Service for the authentication endpoints.
///
/// Logging in takes three steps: [`login`](Self::login) sends an email with a
/// confirmation link, [`poll`](Self::poll) is repeated until the link has
/// been clicked, and the tokens it returns are stored on the client.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use tgtg::{Client, LoginRequest, PollRequest};
///
/// # async fn example(client: Client) -> tgtg::Result<()> {
/// let login = client
///     .auth()
///     .login(Some(&LoginRequest {
///         device_type: "IOS".to_string(),
///         email: "someone@example.com".to_string(),
///     }))
///     .await?;
///
/// let poll = PollRequest {
///     device_type: "IOS".to_string(),
///     email: "someone@example.com".to_string(),
///     polling_id: login.data.polling_id.clone(),
/// };
/// loop {
///     match client.auth().poll(Some(&poll)).await {
///         Ok(_) => break,
///         Err(e) if e.is_login_pending() => {
///             tokio::time::sleep(Duration::from_secs(5)).await;
///         }
///         Err(e) => return Err(e),
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct AuthService {
    client: Client,
}

impl AuthService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Starts the login flow by emailing a confirmation link.
    ///
    /// Returns a polling id for [`poll`](Self::poll); the session is not
    /// changed. The API answers `429 Too Many Requests` when this is called
    /// repeatedly, for roughly fifteen minutes.
    pub async fn login(&self, login_request: Option<&LoginRequest>) -> Result<Response<LoginResponse>> {
        let login_request = login_request.ok_or_else(|| missing("login_request"))?;

        let path = format!("{}/authByEmail", AUTH_BASE_PATH);
        let request = self
            .client
            .new_request(Method::POST, &path, Some(login_request))?;
        self.client.execute(request).await
    }

    /// Checks whether the login email has been confirmed.
    ///
    /// On success the returned tokens and user id replace the session. While
    /// the login is unconfirmed the API answers with an empty body, which
    /// fails to decode; [`Error::is_login_pending`] recognises that case.
    pub async fn poll(&self, poll_request: Option<&PollRequest>) -> Result<Response<PollResponse>> {
        let poll_request = poll_request.ok_or_else(|| missing("poll_request"))?;

        let path = format!("{}/authByRequestPollingId", AUTH_BASE_PATH);
        let request = self
            .client
            .new_request(Method::POST, &path, Some(poll_request))?;
        let response = self.client.execute::<PollResponse>(request).await?;

        let data = &response.data;
        self.client
            .session()
            .set(AuthContext::new(
                data.access_token.clone(),
                data.refresh_token.clone(),
                data.startup_data.user.user_id.clone(),
            ))
            .await;
        tracing::info!(user_id = %data.startup_data.user.user_id, "Login confirmed");

        Ok(response)
    }

    /// Exchanges a refresh token for new tokens.
    ///
    /// Without a request, or with an empty token, the session's refresh token
    /// is used. The new tokens replace the session's; its user id is kept.
    pub async fn refresh(
        &self,
        refresh_request: Option<&RefreshTokensRequest>,
    ) -> Result<Response<RefreshTokensResponse>> {
        let refresh_request = match refresh_request {
            Some(request) if !request.refresh_token.is_empty() => request.clone(),
            _ => {
                let refresh_token = self.client.session().refresh_token().await;
                if refresh_token.is_empty() {
                    return Err(Error::argument(
                        "refresh_request",
                        "must not be None - client has no refresh token",
                    ));
                }
                RefreshTokensRequest { refresh_token }
            }
        };

        let path = format!("{}/token/refresh", AUTH_BASE_PATH);
        let request = self
            .client
            .new_request(Method::POST, &path, Some(&refresh_request))?;
        let response = self.client.execute::<RefreshTokensResponse>(request).await?;

        self.client
            .session()
            .set_tokens(
                response.data.access_token.clone(),
                response.data.refresh_token.clone(),
            )
            .await;
        tracing::debug!("Tokens refreshed");

        Ok(response)
    }

    /// Creates a new account. Its tokens and user id replace the session.
    pub async fn signup(
        &self,
        signup_request: Option<&SignupRequest>,
    ) -> Result<Response<SignupResponse>> {
        let signup_request = signup_request.ok_or_else(|| missing("signup_request"))?;

        let path = format!("{}/signUpByEmail", AUTH_BASE_PATH);
        let request = self
            .client
            .new_request(Method::POST, &path, Some(signup_request))?;
        let response = self.client.execute::<SignupResponse>(request).await?;

        let login = &response.data.login;
        self.client
            .session()
            .set(AuthContext::new(
                login.access_token.clone(),
                login.refresh_token.clone(),
                login.startup_data.user.user_id.clone(),
            ))
            .await;
        tracing::info!(user_id = %login.startup_data.user.user_id, "Account created");

        Ok(response)
    }
}
