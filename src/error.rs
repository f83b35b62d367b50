//! Error types for Too Good To Go API calls.
//!
//! Every failure the client can produce is a variant of [`Error`]. Nothing is
//! retried or recovered internally: argument problems are reported before any
//! request is sent, transport failures are passed through untouched, and
//! non-2xx responses are turned into an [`ErrorResponse`] that keeps the
//! request method, URL, status and the `{code, message}` entries returned by
//! the API.

use http::{Method, StatusCode};
use serde::Deserialize;
use std::fmt;
use url::Url;

/// The main error type for Too Good To Go API calls.
///
/// # Examples
///
/// ```no_run
/// use tgtg::{Client, Error, LoginRequest};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new()?;
/// let request = LoginRequest {
///     device_type: "IOS".to_string(),
///     email: "someone@example.com".to_string(),
/// };
///
/// match client.auth().login(Some(&request)).await {
///     Ok(response) => println!("Polling id: {}", response.data.polling_id),
///     Err(Error::Api(api)) if api.status.as_u16() == 429 => {
///         eprintln!("Too many login attempts, try again later");
///     }
///     Err(e) => eprintln!("Login failed: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A caller-supplied argument is missing or cannot be resolved.
    ///
    /// Raised by the service wrappers before anything is sent, e.g. when a
    /// required request is `None` or no user id is available from either the
    /// request or the session.
    #[error("{argument} argument is invalid (reason: {reason})")]
    Argument {
        /// Name of the offending argument, e.g. `list_items_request.user_id`.
        argument: String,
        /// Why the argument was rejected.
        reason: String,
    },

    /// Invalid configuration was provided.
    ///
    /// Covers invalid header names or values, a base URL that does not end
    /// with `/`, and a transport that could not be built.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A base URL or relative path could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A transport-level error (connection failure, DNS, timeout).
    ///
    /// This is the `reqwest::Error` exactly as the transport returned it.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a status outside `200..=299`.
    #[error(transparent)]
    Api(#[from] ErrorResponse),

    /// A successful response body could not be decoded into the expected type.
    ///
    /// # Fields
    ///
    /// * `raw_response` - The raw response body as a string
    /// * `serde_error` - The error message from serde
    /// * `status` - The HTTP status code
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The raw response body that failed to deserialize
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// The request body could not be encoded as JSON.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),
}

impl Error {
    /// Creates an [`Error::Argument`].
    ///
    /// ```
    /// let err = tgtg::Error::argument("foo", "bar");
    /// assert_eq!(err.to_string(), "foo argument is invalid (reason: bar)");
    /// ```
    pub fn argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Argument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`Error::Argument`].
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Error::Argument { .. })
    }

    /// Returns `true` when the client or request was misconfigured.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Error::ConfigurationError(_) | Error::InvalidUrl(_))
    }

    /// Returns `true` if this error looks like a login that has not been
    /// confirmed yet.
    ///
    /// While the user has not clicked the link in the login email, polling
    /// answers with a success status and no body, which surfaces as a decode
    /// failure on an empty response. Callers polling in a loop should keep
    /// polling while this returns `true`.
    pub fn is_login_pending(&self) -> bool {
        match self {
            Error::DeserializationFailed {
                raw_response,
                status,
                ..
            } => status.is_success() && raw_response.trim().is_empty(),
            _ => false,
        }
    }

    /// Returns the HTTP status code if this error has one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api(response) => Some(response.status),
            Error::DeserializationFailed { status, .. } => Some(*status),
            Error::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the raw body of a successful response that failed to decode.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::DeserializationFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns the `{code, message}` entries of an API error response.
    pub fn api_errors(&self) -> Option<&[ApiError]> {
        match self {
            Error::Api(response) => Some(&response.errors),
            _ => None,
        }
    }
}

/// A non-2xx response returned by the Too Good To Go API.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Method of the request that failed.
    pub method: Method,
    /// Resolved URL of the request that failed.
    pub url: Url,
    /// Status code of the response.
    pub status: StatusCode,
    /// Entries from the error body, in the order the API sent them.
    pub errors: Vec<ApiError>,
}

impl ErrorResponse {
    /// Builds an error response from a raw response body.
    ///
    /// An empty body yields no entries. A body shaped like
    /// `{"errors": [{"code": "...", "message": "..."}]}` yields those entries.
    /// Anything else yields one entry whose code is the raw body.
    pub fn from_body(method: Method, url: Url, status: StatusCode, body: &str) -> Self {
        let errors = if body.is_empty() {
            Vec::new()
        } else {
            match serde_json::from_str::<ErrorBody>(body) {
                Ok(parsed) => parsed.errors,
                Err(_) => vec![ApiError {
                    code: body.to_string(),
                    message: String::new(),
                }],
            }
        };

        Self {
            method,
            url,
            status,
            errors,
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "method: {}, url: {}, code: {}, errors: [",
            self.method,
            self.url,
            self.status.as_u16()
        )?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", error)?;
        }
        f.write_str("]")
    }
}

impl std::error::Error for ErrorResponse {}

/// One error entry returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Machine readable code, always set by the API.
    #[serde(default)]
    pub code: String,
    /// Optional human readable message.
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.code)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ApiError>,
}

/// A specialized `Result` type for Too Good To Go API calls.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn error_response(status: u16, body: &str) -> ErrorResponse {
        ErrorResponse::from_body(
            Method::POST,
            Url::parse("https://example.com/api/auth/v3/authByEmail").unwrap(),
            StatusCode::from_u16(status).unwrap(),
            body,
        )
    }

    #[test]
    fn test_argument_error_display() {
        let err = Error::argument("foo", "bar");
        assert_eq!(err.to_string(), "foo argument is invalid (reason: bar)");
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_json_code_without_message() {
        let response = error_response(500, r#"{"errors": [{"code": "INTERNAL_SERVER_ERROR"}]}"#);
        assert_eq!(
            response.errors,
            vec![ApiError {
                code: "INTERNAL_SERVER_ERROR".to_string(),
                message: String::new(),
            }]
        );
    }

    #[test]
    fn test_json_codes_with_messages_keep_order() {
        let response = error_response(
            400,
            r#"{
                "errors": [
                    {"code": "CODE_1", "message": "error message"},
                    {"code": "CODE_2", "message": "error message"}
                ]
            }"#,
        );
        let codes: Vec<_> = response.errors.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["CODE_1", "CODE_2"]);
        assert!(response.errors.iter().all(|e| e.message == "error message"));
    }

    #[test]
    fn test_plain_text_body() {
        let response = error_response(400, "string response");
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].code, "string response");
        assert_eq!(response.errors[0].message, "");
    }

    #[test]
    fn test_empty_body_has_no_entries() {
        let response = error_response(400, "");
        assert!(response.errors.is_empty());
    }

    #[test]
    fn test_display_contains_request_details() {
        let err = Error::from(error_response(
            500,
            r#"{"errors": [{"code": "INTERNAL_SERVER_ERROR"}]}"#,
        ));
        let text = err.to_string();
        assert!(text.contains("POST"));
        assert!(text.contains("authByEmail"));
        assert!(text.contains("500"));
        assert!(text.contains("INTERNAL_SERVER_ERROR"));
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_login_pending_only_for_empty_success_body() {
        let pending = Error::DeserializationFailed {
            raw_response: String::new(),
            serde_error: "EOF while parsing a value".to_string(),
            status: StatusCode::ACCEPTED,
        };
        assert!(pending.is_login_pending());

        let garbage = Error::DeserializationFailed {
            raw_response: "not json".to_string(),
            serde_error: "expected value".to_string(),
            status: StatusCode::OK,
        };
        assert!(!garbage.is_login_pending());
        assert!(!Error::argument("poll_request", "must not be None").is_login_pending());
    }
}
