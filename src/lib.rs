//! # tgtg - a typed client for the Too Good To Go API
//!
//! Built on top of `reqwest`. Covers the email login flow, item discovery and
//! orders. Every call returns the decoded body together with the HTTP
//! details, and every non-2xx answer surfaces as a structured error.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tgtg::{Client, ListItemsRequest, LoginRequest, Origin, PollRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tgtg::Error> {
//!     let client = Client::new()?;
//!
//!     // Step 1: request the login email
//!     let login = client
//!         .auth()
//!         .login(Some(&LoginRequest {
//!             device_type: "IOS".to_string(),
//!             email: "someone@example.com".to_string(),
//!         }))
//!         .await?;
//!
//!     // Step 2: once the link in the email was clicked, collect the tokens
//!     client
//!         .auth()
//!         .poll(Some(&PollRequest {
//!             device_type: "IOS".to_string(),
//!             email: "someone@example.com".to_string(),
//!             polling_id: login.data.polling_id.clone(),
//!         }))
//!         .await?;
//!
//!     // Step 3: authenticated calls pick up the tokens and user id
//!     let items = client
//!         .items()
//!         .list(Some(&ListItemsRequest {
//!             origin: Some(Origin { latitude: 52.52, longitude: 13.40 }),
//!             radius: 5,
//!             page: 1,
//!             page_size: 20,
//!             ..Default::default()
//!         }))
//!         .await?;
//!
//!     for entry in &items.data.items {
//!         println!("{}: {} left", entry.display_name, entry.items_available);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```no_run
//! use tgtg::{Client, Error};
//!
//! # async fn example(client: Client) -> Result<(), Error> {
//! match client.orders().active(None).await {
//!     Ok(response) => println!("{} orders", response.data.orders.len()),
//!     Err(Error::Argument { argument, .. }) => {
//!         eprintln!("Log in first, missing {}", argument);
//!     }
//!     Err(Error::Api(response)) if response.status.as_u16() == 401 => {
//!         client.auth().refresh(None).await?;
//!     }
//!     Err(e) => eprintln!("Request failed: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## What the client does not do
//!
//! No retries, no rate-limit backoff, no automatic token refresh and no
//! pagination helpers. Calls on clones of one client share a session; if
//! several tasks log in or refresh concurrently the last write wins.

pub mod api;
mod client;
mod error;
pub mod models;
mod response;
mod session;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{ApiError, Error, ErrorResponse, Result};
pub use models::*;
pub use response::Response;
pub use session::AuthContext;
