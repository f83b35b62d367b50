//! Item discovery: list, get and favorite.

use http::Method;

use super::{authorized_post, missing, session_user_id};
use crate::models::{
    FavoriteItemRequest, GetItemRequest, GetItemResponse, ListItemsRequest, ListItemsResponse,
};
use crate::{Client, Error, Response, Result};

const ITEMS_BASE_PATH: &str = "item/v7";

/// Service for the item endpoints.
///
/// All calls are authorized with the session's access token. Requests that
/// leave `user_id` empty get the session's user id.
pub struct ItemsService {
    client: Client,
}

impl ItemsService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists items matching the request's filters.
    ///
    /// Paging is up to the caller: pass `page` and `page_size` and request
    /// the next page while results keep coming.
    pub async fn list(
        &self,
        list_items_request: Option<&ListItemsRequest>,
    ) -> Result<Response<ListItemsResponse>> {
        let mut list_items_request = list_items_request
            .ok_or_else(|| missing("list_items_request"))?
            .clone();

        if list_items_request.user_id.is_empty() {
            list_items_request.user_id = session_user_id(
                &self.client,
                "list_items_request.user_id",
                "list_items_request",
            )
            .await?;
        }

        let path = format!("{}/", ITEMS_BASE_PATH);
        authorized_post(&self.client, &path, &list_items_request).await
    }

    /// Fetches one item with its store details.
    pub async fn get(
        &self,
        get_item_request: Option<&GetItemRequest>,
        item_id: &str,
    ) -> Result<Response<GetItemResponse>> {
        if item_id.is_empty() {
            return Err(Error::argument("item_id", "must not be empty"));
        }

        let mut get_item_request = get_item_request
            .ok_or_else(|| missing("get_item_request"))?
            .clone();

        if get_item_request.user_id.is_empty() {
            get_item_request.user_id = session_user_id(
                &self.client,
                "get_item_request.user_id",
                "get_item_request",
            )
            .await?;
        }

        let path = format!("{}/{}", ITEMS_BASE_PATH, item_id);
        authorized_post(&self.client, &path, &get_item_request).await
    }

    /// Marks or unmarks an item as favorite. The response has no body.
    pub async fn favorite(
        &self,
        favorite_item_request: Option<&FavoriteItemRequest>,
        item_id: &str,
    ) -> Result<Response<()>> {
        if item_id.is_empty() {
            return Err(Error::argument("item_id", "must not be empty"));
        }

        let favorite_item_request =
            favorite_item_request.ok_or_else(|| missing("favorite_item_request"))?;

        let path = format!("{}/{}/setFavorite", ITEMS_BASE_PATH, item_id);
        let mut request = self
            .client
            .new_request(Method::POST, &path, Some(favorite_item_request))?;
        self.client.authorize(&mut request).await?;
        self.client.execute_unit(request).await
    }
}
