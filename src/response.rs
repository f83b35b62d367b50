//! Response wrapper that keeps the decoded body next to the HTTP details.
//!
//! Every service call returns a [`Response`], so the status code, headers and
//! raw body of the exchange stay available after decoding.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A successful (2xx) response from the Too Good To Go API.
///
/// # Type Parameters
///
/// * `T` - The decoded body, or `()` for calls that expect no body
///
/// # Examples
///
/// ```no_run
/// use tgtg::{Client, ListItemsRequest, Origin};
///
/// # async fn example(client: Client) -> Result<(), tgtg::Error> {
/// let request = ListItemsRequest {
///     origin: Some(Origin { latitude: 52.52, longitude: 13.40 }),
///     radius: 10,
///     page: 1,
///     page_size: 20,
///     ..Default::default()
/// };
/// let response = client.items().list(Some(&request)).await?;
///
/// println!("{} items in {:?}", response.data.items.len(), response.latency);
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The decoded response body.
    pub data: T,

    /// The raw response body as a string.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from dispatch until the body was read.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Maps the response data to a different type, keeping the metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tgtg::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     42,
    ///     "42".to_string(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(100),
    /// );
    ///
    /// let string_response = response.map(|n| n.to_string());
    /// assert_eq!(string_response.data, "42");
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        }
    }

    /// Consumes the response and returns the decoded body.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Returns a header value by name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tgtg::Response;
    /// # use http::{HeaderMap, StatusCode, HeaderValue};
    /// # use std::time::Duration;
    /// let mut headers = HeaderMap::new();
    /// headers.insert("content-type", HeaderValue::from_static("application/json"));
    ///
    /// let response = Response::new(
    ///     (),
    ///     String::new(),
    ///     StatusCode::OK,
    ///     headers,
    ///     Duration::from_millis(100),
    /// );
    ///
    /// assert_eq!(response.header("content-type"), Some("application/json"));
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
