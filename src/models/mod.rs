//! Request and response bodies of the Too Good To Go API.
//!
//! Field names follow the snake_case wire format. Response types default
//! every missing field, and treat an explicit `null` the same way, so
//! partial payloads still decode.

use serde::{Deserialize, Deserializer};

mod auth;
mod items;
mod orders;

pub use auth::*;
pub use items::*;
pub use orders::*;

/// Decodes `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
