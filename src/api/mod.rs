//! Endpoint groups of the Too Good To Go API.
//!
//! Each service validates its arguments, fills missing identifiers from the
//! client's session, builds the relative path and hands the request to the
//! client. Obtain them through [`Client::auth`], [`Client::items`] and
//! [`Client::orders`].

mod auth;
mod items;
mod orders;

pub use auth::AuthService;
pub use items::ItemsService;
pub use orders::OrdersService;

use crate::{Client, Error, Response, Result};
use http::Method;
use serde::{de::DeserializeOwned, Serialize};

/// Returns the session's user id, or an argument error naming `argument`.
async fn session_user_id(client: &Client, argument: &str, request_name: &str) -> Result<String> {
    let user_id = client.session().user_id().await;
    if user_id.is_empty() {
        return Err(Error::argument(
            argument,
            format!(
                "must not be empty - client has no user id set - log in using the auth service first or provide user_id in {}",
                request_name
            ),
        ));
    }
    Ok(user_id)
}

fn missing(argument: &str) -> Error {
    Error::argument(argument, "must not be None")
}

/// POSTs `body` to `path` with the session's bearer token.
async fn authorized_post<B, T>(client: &Client, path: &str, body: &B) -> Result<Response<T>>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let mut request = client.new_request(Method::POST, path, Some(body))?;
    client.authorize(&mut request).await?;
    client.execute(request).await
}
