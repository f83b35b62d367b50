//! Bodies of the item endpoints and the item, store and price shapes shared
//! with orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Searches items around an origin.
///
/// `user_id` may be left empty; the client fills it from its session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItemsRequest {
    pub page_size: i32,
    pub page: i32,

    pub user_id: String,

    /// Search radius in kilometres.
    pub radius: i32,
    pub origin: Option<Origin>,

    pub item_categories: Vec<String>,
    pub diet_categories: Vec<String>,
    pub pickup_earliest: String,
    pub pickup_latest: String,
    pub search_phrase: String,

    pub discover: bool,
    pub favorites_only: bool,
    pub with_stock_only: bool,
    pub hidden_only: bool,
    pub we_care_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListItemsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Items>,
}

/// Fetches one item. `user_id` may be left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetItemRequest {
    pub user_id: String,
    pub origin: Option<Origin>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GetItemResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub item: Item,
    #[serde(deserialize_with = "null_as_default")]
    pub store: Store,

    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub favorite: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub in_sales_window: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub items_available: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub new_item: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub pickup_interval: PickupInterval,
    #[serde(deserialize_with = "null_as_default")]
    pub pickup_location: PickupLocation,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_end: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sharing_url: String,
}

/// Marks or unmarks an item as favorite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteItemRequest {
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub average_overall_rating: AverageOverallRating,
    #[serde(deserialize_with = "null_as_default")]
    pub badges: Vec<Badges>,
    #[serde(deserialize_with = "null_as_default")]
    pub buffet: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_user_supply_packaging: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub collection_info: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cover_picture: Picture,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub diet_categories: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub favorite_count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub item_category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub item_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub logo_picture: Picture,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub packaging_option: String,
    #[serde(deserialize_with = "null_as_default")]
    pub positive_rating_reasons: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub price: Price,
    #[serde(deserialize_with = "null_as_default")]
    pub price_excluding_taxes: Price,
    #[serde(deserialize_with = "null_as_default")]
    pub price_including_taxes: Price,
    #[serde(deserialize_with = "null_as_default")]
    pub sales_taxes: Vec<SalesTaxes>,
    #[serde(deserialize_with = "null_as_default")]
    pub show_sales_taxes: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_amount: Price,
    #[serde(deserialize_with = "null_as_default")]
    pub taxation_policy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value_excluding_taxes: Price,
    #[serde(deserialize_with = "null_as_default")]
    pub value_including_taxes: Price,
}

/// One entry of a [`ListItemsResponse`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Items {
    #[serde(deserialize_with = "null_as_default")]
    pub item: Item,
    #[serde(deserialize_with = "null_as_default")]
    pub store: Store,

    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pickup_interval: PickupInterval,
    #[serde(deserialize_with = "null_as_default")]
    pub pickup_location: Location,
    pub purchase_end: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub items_available: i32,
    pub sold_out_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub favorite: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub in_sales_window: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub new_item: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AverageOverallRating {
    #[serde(deserialize_with = "null_as_default")]
    pub average_overall_rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub month_count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub rating_count: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Badges {
    #[serde(deserialize_with = "null_as_default")]
    pub badge_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub month_count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub percentage: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub rating_group: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_count: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Picture {
    #[serde(deserialize_with = "null_as_default")]
    pub current_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub picture_id: String,
}

/// An amount in minor units, e.g. `{code: "EUR", minor_units: 399, decimals: 2}`
/// is 3.99 EUR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Price {
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub decimals: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub minor_units: i64,
}

impl Price {
    /// The amount as a decimal number.
    pub fn amount(&self) -> f64 {
        self.minor_units as f64 / 10f64.powi(self.decimals as i32)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SalesTaxes {
    #[serde(deserialize_with = "null_as_default")]
    pub tax_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_percentage: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_amount: Price,
}

/// A pickup or redeem window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PickupInterval {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl PickupInterval {
    /// Returns `true` if `at` falls inside the window.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= at && at <= end,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PickupLocation {
    #[serde(deserialize_with = "null_as_default")]
    pub address: Address,
    #[serde(deserialize_with = "null_as_default")]
    pub location: Location,
}

/// Store location, same shape as [`PickupLocation`].
pub type StoreLocation = PickupLocation;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "null_as_default")]
    pub address_line: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: Country,
    #[serde(deserialize_with = "null_as_default")]
    pub postal_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Country {
    #[serde(deserialize_with = "null_as_default")]
    pub iso_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Store {
    #[serde(deserialize_with = "null_as_default")]
    pub branch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cover_picture: Picture,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub favorite_count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub hidden: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<StoreItems>,
    #[serde(deserialize_with = "null_as_default")]
    pub logo_picture: Picture,
    #[serde(deserialize_with = "null_as_default")]
    pub milestones: Vec<Milestones>,
    #[serde(deserialize_with = "null_as_default")]
    pub store_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub store_location: StoreLocation,
    #[serde(deserialize_with = "null_as_default")]
    pub store_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub store_time_zone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_identifier: String,
    #[serde(deserialize_with = "null_as_default")]
    pub we_care: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreItems {
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub favorite: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub in_sales_window: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub item: Item,
    #[serde(deserialize_with = "null_as_default")]
    pub items_available: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub new_item: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub pickup_interval: PickupInterval,
    #[serde(deserialize_with = "null_as_default")]
    pub pickup_location: PickupLocation,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_end: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Milestones {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

/// A coordinate pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Origin {
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,
}

/// Pickup coordinates, same shape as [`Origin`].
pub type Location = Origin;
