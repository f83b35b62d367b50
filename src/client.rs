//! HTTP client for the Too Good To Go API.
//!
//! The [`Client`] type is the main entry point. Use [`ClientBuilder`] to
//! configure it, then reach the endpoints through [`Client::auth`],
//! [`Client::items`] and [`Client::orders`].
//!
//! Every call goes through the same two steps: [`Client::new_request`] builds a
//! `reqwest::Request` against the base URL with the standard headers, and
//! [`Client::execute`] sends it and classifies the response.

use crate::{
    api::{AuthService, ItemsService, OrdersService},
    session::{AuthContext, Session},
    Error, ErrorResponse, Response, Result,
};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://apptoogoodtogo.com/api/";

/// User agent of the mobile app build the API expects.
pub const DEFAULT_USER_AGENT: &str =
    "TooGoodToGo/21.11.0 (iPhone/iPhone 11 Pro; iOS 14.4.1; Scale/3.00)";

const MEDIA_TYPE: &str = "application/json";

/// A client for the Too Good To Go API.
///
/// Cloning is cheap; clones share the transport, configuration and the
/// authentication state.
///
/// # Examples
///
/// ```no_run
/// use tgtg::{Client, LoginRequest, PollRequest};
///
/// # async fn example() -> Result<(), tgtg::Error> {
/// let client = Client::new()?;
///
/// let login = client
///     .auth()
///     .login(Some(&LoginRequest {
///         device_type: "IOS".to_string(),
///         email: "someone@example.com".to_string(),
///     }))
///     .await?;
///
/// // After the link in the login email has been clicked:
/// client
///     .auth()
///     .poll(Some(&PollRequest {
///         device_type: "IOS".to_string(),
///         email: "someone@example.com".to_string(),
///         polling_id: login.data.polling_id.clone(),
///     }))
///     .await?;
///
/// let orders = client.orders().active(None).await?;
/// println!("{} active orders", orders.data.orders.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    user_agent: String,
    user_agent_header: HeaderValue,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
    session: Session,
}

/// Status, headers and body of a 2xx exchange, before decoding.
struct Exchange {
    status: StatusCode,
    headers: HeaderMap,
    raw_body: String,
    latency: Duration,
}

impl Client {
    /// Creates a client with the default base URL, user agent and transport.
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Creates a new `ClientBuilder` for configuring a client.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tgtg::Client;
    ///
    /// # fn example() -> Result<(), tgtg::Error> {
    /// let client = Client::builder()
    ///     .user_agent("TooGoodToGo/22.5.0 (iPhone/iPhone 13; iOS 15.4; Scale/3.00)")
    ///     .default_header("Accept-Language", "en-GB")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Endpoints of the login flow.
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.clone())
    }

    /// Item discovery endpoints.
    pub fn items(&self) -> ItemsService {
        ItemsService::new(self.clone())
    }

    /// Order endpoints.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.clone())
    }

    /// The base URL relative paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The user agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    /// Replaces the access token, refresh token and user id.
    ///
    /// Useful to resume a session whose tokens were stored elsewhere.
    pub async fn set_auth_context(
        &self,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        user_id: impl Into<String>,
    ) {
        self.inner
            .session
            .set(AuthContext::new(access_token, refresh_token, user_id))
            .await;
    }

    /// Returns a copy of the current access token, refresh token and user id.
    pub async fn auth_context(&self) -> AuthContext {
        self.inner.session.snapshot().await
    }

    pub(crate) fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Builds a request for `path`, relative to the base URL.
    ///
    /// `path` must not start with `/`; it is joined with standard URL merge
    /// rules, so `auth/v3/authByEmail` against `https://host/api/` becomes
    /// `https://host/api/auth/v3/authByEmail`.
    ///
    /// When `body` is given and the method can carry one (anything but GET,
    /// HEAD and OPTIONS), it is JSON encoded and `Content-Type` is set.
    /// Configured extra headers are copied next, then `Accept` and
    /// `User-Agent` are set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the path cannot be joined with the
    /// base URL, or [`Error::SerializationFailed`] if the body cannot be
    /// encoded.
    pub fn new_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self.inner.base_url.join(path)?;
        let carries_body =
            !(method == Method::GET || method == Method::HEAD || method == Method::OPTIONS);

        let mut request = reqwest::Request::new(method, url);

        if let (true, Some(body)) = (carries_body, body) {
            let json =
                serde_json::to_vec(body).map_err(|e| Error::SerializationFailed(e.to_string()))?;
            *request.body_mut() = Some(json.into());
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE));
        }

        let headers = request.headers_mut();
        for (name, value) in &self.inner.default_headers {
            headers.insert(name.clone(), value.clone());
        }
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));
        headers.insert(USER_AGENT, self.inner.user_agent_header.clone());

        Ok(request)
    }

    /// Sets `Authorization: Bearer <access token>` from the current session.
    ///
    /// An empty token is sent as-is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] if the token contains characters
    /// that are not allowed in a header value.
    pub async fn authorize(&self, request: &mut reqwest::Request) -> Result<()> {
        let token = self.inner.session.access_token().await;
        let value = HeaderValue::try_from(format!("Bearer {}", token))
            .map_err(|e| Error::ConfigurationError(format!("Invalid access token: {}", e)))?;
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Sends `request` and decodes a 2xx body into `T`.
    ///
    /// # Errors
    ///
    /// * [`Error::Network`] - the transport failed or timed out
    /// * [`Error::Api`] - the status was outside `200..=299`
    /// * [`Error::DeserializationFailed`] - the body did not decode into `T`
    pub async fn execute<T>(&self, request: reqwest::Request) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let exchange = self.send(request).await?;

        match serde_json::from_str::<T>(&exchange.raw_body) {
            Ok(data) => Ok(Response::new(
                data,
                exchange.raw_body,
                exchange.status,
                exchange.headers,
                exchange.latency,
            )),
            Err(e) => {
                let err = Error::DeserializationFailed {
                    raw_response: exchange.raw_body,
                    serde_error: e.to_string(),
                    status: exchange.status,
                };

                // Unconfirmed logins answer polls this way on every attempt.
                if err.is_login_pending() {
                    tracing::debug!(
                        status = exchange.status.as_u16(),
                        "Empty response body, login not confirmed yet"
                    );
                } else {
                    tracing::error!(
                        error = %e,
                        raw_response = err.raw_response().unwrap_or_default(),
                        "Failed to deserialize response"
                    );
                }

                Err(err)
            }
        }
    }

    /// Sends `request` without decoding the response body.
    ///
    /// Fails with [`Error::Network`] or [`Error::Api`] like
    /// [`execute`](Self::execute).
    pub async fn execute_unit(&self, request: reqwest::Request) -> Result<Response<()>> {
        let exchange = self.send(request).await?;
        Ok(Response::new(
            (),
            exchange.raw_body,
            exchange.status,
            exchange.headers,
            exchange.latency,
        ))
    }

    /// Dispatches a request and turns non-2xx responses into errors.
    async fn send(&self, mut request: reqwest::Request) -> Result<Exchange> {
        if request.timeout().is_none() {
            *request.timeout_mut() = self.inner.timeout;
        }

        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!(method = %method, url = %url, "Executing HTTP request");

        let start_time = Instant::now();
        let response = self.inner.http_client.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();

        if !status.is_success() {
            let raw_response = response.text().await.unwrap_or_default();

            if status.is_client_error() {
                tracing::error!(
                    status = status.as_u16(),
                    method = %method,
                    url = %url,
                    response = %raw_response,
                    "Client error (4xx)"
                );
            } else {
                tracing::warn!(
                    status = status.as_u16(),
                    method = %method,
                    url = %url,
                    response = %raw_response,
                    "Server error"
                );
            }

            return Err(ErrorResponse::from_body(method, url, status, &raw_response).into());
        }

        let raw_body = response.text().await?;
        let latency = start_time.elapsed();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            "Received HTTP response"
        );

        Ok(Exchange {
            status,
            headers,
            raw_body,
            latency,
        })
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// Every setting has a default: the production base URL, the mobile app user
/// agent, no extra headers, no timeout and a fresh `reqwest::Client`.
///
/// # Examples
///
/// ```no_run
/// use tgtg::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), tgtg::Error> {
/// let client = ClientBuilder::new()
///     .base_url("https://apptoogoodtogo.com/api/")?
///     .timeout(Duration::from_secs(30))
///     .default_header("X-Correlation-Id", "batch-7")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: Option<Url>,
    http_client: Option<reqwest::Client>,
    user_agent: String,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            http_client: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_headers: HeaderMap::new(),
            timeout: None,
        }
    }

    /// Sets the base URL for all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or its path does not end with
    /// `/`. A bare origin such as `http://127.0.0.1:8080` is accepted since
    /// its path is `/`.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(url.as_ref())?;
        if url.cannot_be_a_base() || !url.path().ends_with('/') {
            return Err(Error::ConfigurationError(format!(
                "Base URL must end with '/': {}",
                url
            )));
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// Uses `client` as the transport instead of a default `reqwest::Client`.
    ///
    /// TLS, proxies and redirects are whatever that client is configured with.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Adds a header that will be included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Adds several headers that will be included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if any header name or value is invalid.
    pub fn default_headers<I, K, V>(self, headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        headers
            .into_iter()
            .try_fold(self, |builder, (name, value)| builder.default_header(name, value))
    }

    /// Sets a timeout applied to every request that has none of its own.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the user agent is not a valid header value or the
    /// default transport cannot be built.
    pub fn build(self) -> Result<Client> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let user_agent_header = HeaderValue::try_from(self.user_agent.clone())
            .map_err(|e| Error::ConfigurationError(format!("Invalid user agent: {}", e)))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder().build().map_err(|e| {
                Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?,
        };

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                user_agent: self.user_agent,
                user_agent_header,
                default_headers: self.default_headers,
                timeout: self.timeout,
                session: Session::default(),
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoginRequest;

    fn body_of(request: &reqwest::Request) -> Option<&[u8]> {
        request.body().and_then(|body| body.as_bytes())
    }

    #[test]
    fn test_default_values() {
        let client = Client::new().unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
        assert_eq!(client.user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_custom_user_agent() {
        let client = Client::builder()
            .user_agent("added user agent")
            .build()
            .unwrap();
        assert_eq!(client.user_agent(), "added user agent");

        let request = client
            .new_request::<()>(Method::GET, "items", None)
            .unwrap();
        assert_eq!(request.headers()[USER_AGENT], "added user agent");
    }

    #[test]
    fn test_non_ascii_user_agent_is_kept() {
        let user_agent = "TooGoodToGo/21 (Pixel; Android; é)";
        let client = Client::builder().user_agent(user_agent).build().unwrap();
        assert_eq!(client.user_agent(), user_agent);

        let request = client.new_request::<()>(Method::GET, "x", None).unwrap();
        assert_eq!(request.headers()[USER_AGENT].as_bytes(), user_agent.as_bytes());
    }

    #[test]
    fn test_custom_request_headers() {
        let client = Client::builder()
            .default_headers([("Accept-Encoding", "chunked"), ("X-Trace", "1")])
            .unwrap()
            .build()
            .unwrap();

        let request = client.new_request::<()>(Method::GET, "", None).unwrap();
        assert_eq!(request.headers()["accept-encoding"], "chunked");
        assert_eq!(request.headers()["x-trace"], "1");
    }

    #[test]
    fn test_extra_headers_do_not_override_accept_or_user_agent() {
        let client = Client::builder()
            .default_header("Accept", "text/plain")
            .unwrap()
            .default_header("User-Agent", "other")
            .unwrap()
            .build()
            .unwrap();

        let request = client.new_request::<()>(Method::GET, "", None).unwrap();
        assert_eq!(request.headers()[ACCEPT], MEDIA_TYPE);
        assert_eq!(request.headers()[USER_AGENT], DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_new_request_resolves_relative_path_and_encodes_body() {
        let client = Client::new().unwrap();
        let login = LoginRequest {
            device_type: "IOS".to_string(),
            email: "some@email.com".to_string(),
        };

        let request = client
            .new_request(Method::POST, "no/prefix", Some(&login))
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            format!("{}no/prefix", DEFAULT_BASE_URL)
        );
        assert_eq!(request.headers()[CONTENT_TYPE], MEDIA_TYPE);
        assert_eq!(request.headers()[ACCEPT], MEDIA_TYPE);

        let sent: LoginRequest = serde_json::from_slice(body_of(&request).unwrap()).unwrap();
        assert_eq!(sent, login);
        assert_eq!(
            body_of(&request).unwrap(),
            br#"{"device_type":"IOS","email":"some@email.com"}"#
        );
    }

    #[test]
    fn test_get_never_carries_body() {
        let client = Client::new().unwrap();
        let login = LoginRequest::default();

        for method in [Method::GET, Method::HEAD, Method::OPTIONS] {
            let request = client.new_request(method, "x", Some(&login)).unwrap();
            assert!(request.body().is_none());
            assert!(request.headers().get(CONTENT_TYPE).is_none());
        }
    }

    #[test]
    fn test_post_without_body_has_no_content_type() {
        let client = Client::new().unwrap();
        let request = client.new_request::<()>(Method::POST, "x", None).unwrap();

        assert!(request.body().is_none());
        assert!(request.headers().get(CONTENT_TYPE).is_none());
        assert_eq!(request.headers()[ACCEPT], MEDIA_TYPE);
    }

    #[test]
    fn test_invalid_relative_path_is_configuration_error() {
        let client = Client::new().unwrap();
        let err = client
            .new_request::<()>(Method::POST, "https://[::1", None)
            .unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_base_url_must_end_with_separator() {
        let err = Client::builder()
            .base_url("https://example.com/api")
            .err()
            .unwrap();
        assert!(err.is_configuration_error());

        let client = Client::builder()
            .base_url("http://127.0.0.1:8080")
            .unwrap()
            .build()
            .unwrap();
        let request = client
            .new_request::<()>(Method::POST, "auth/v3/authByEmail", None)
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://127.0.0.1:8080/auth/v3/authByEmail"
        );
    }

    #[test]
    fn test_invalid_header_is_rejected() {
        let err = Client::builder()
            .default_header("bad header", "value")
            .err()
            .unwrap();
        assert!(matches!(err, Error::ConfigurationError(_)));
    }

    #[tokio::test]
    async fn test_authorize_uses_session_token() {
        let client = Client::new().unwrap();
        let mut request = client.new_request::<()>(Method::POST, "x", None).unwrap();

        client.authorize(&mut request).await.unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer ");

        client.set_auth_context("token", "refresh", "1").await;
        client.authorize(&mut request).await.unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer token");
    }
}
