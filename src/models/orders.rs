//! Bodies of the order endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_default, PickupInterval, PickupLocation, Price, SalesTaxes};

/// Lists the orders that can still be picked up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveOrdersRequest {
    pub user_id: String,
}

/// Lists past orders, one page at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InactiveOrdersRequest {
    pub user_id: String,
    pub paging: Paging,
}

/// Page selection for [`InactiveOrdersRequest`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub page: u32,
    pub size: u32,
}

/// Orders returned by both order endpoints.
///
/// `has_more` tells whether another page of inactive orders exists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrdersResponse {
    pub current_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub has_more: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(deserialize_with = "null_as_default")]
    pub order_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    pub cancel_until: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub redeem_interval: PickupInterval,
    #[serde(deserialize_with = "null_as_default")]
    pub pickup_interval: PickupInterval,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub price_including_taxes: Price,
    #[serde(deserialize_with = "null_as_default")]
    pub price_excluding_taxes: Price,
    #[serde(deserialize_with = "null_as_default")]
    pub total_applied_taxes: Price,
    #[serde(deserialize_with = "null_as_default")]
    pub sales_taxes: Vec<SalesTaxes>,
    #[serde(deserialize_with = "null_as_default")]
    pub pickup_location: PickupLocation,
    #[serde(deserialize_with = "null_as_default")]
    pub is_rated: bool,
    pub time_of_purchase: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub store_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub store_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub store_branch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub store_logo: StoreLogo,
    #[serde(deserialize_with = "null_as_default")]
    pub item_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub item_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub item_cover_image: ItemCoverImage,
    #[serde(deserialize_with = "null_as_default")]
    pub is_buffet: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_user_supply_packaging: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub packaging_option: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_store_we_care: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_show_best_before_explainer: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub show_sales_taxes: bool,
}

impl Order {
    /// Returns `true` while the order can still be cancelled.
    pub fn is_cancellable_at(&self, at: DateTime<Utc>) -> bool {
        self.cancel_until.is_some_and(|until| at <= until)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreLogo {
    #[serde(deserialize_with = "null_as_default")]
    pub picture_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_automatically_created: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ItemCoverImage {
    #[serde(deserialize_with = "null_as_default")]
    pub picture_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_automatically_created: bool,
}
