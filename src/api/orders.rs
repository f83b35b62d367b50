//! Active and past orders.

use super::{authorized_post, missing, session_user_id};
use crate::models::{ActiveOrdersRequest, InactiveOrdersRequest, OrdersResponse};
use crate::{Client, Response, Result};

const ORDERS_BASE_PATH: &str = "order/v6";

/// Service for the order endpoints.
///
/// All calls are authorized with the session's access token.
///
/// # Example
///
/// ```no_run
/// use tgtg::{InactiveOrdersRequest, Paging};
///
/// # async fn example(client: tgtg::Client) -> tgtg::Result<()> {
/// let mut page = 0;
/// loop {
///     let request = InactiveOrdersRequest {
///         paging: Paging { page, size: 20 },
///         ..Default::default()
///     };
///     let response = client.orders().inactive(Some(&request)).await?;
///     for order in &response.data.orders {
///         println!("{} - {}", order.store_name, order.state);
///     }
///     if !response.data.has_more {
///         break;
///     }
///     page += 1;
/// }
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    client: Client,
}

impl OrdersService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists orders that have not been picked up yet.
    ///
    /// `None` asks for the session user's orders.
    pub async fn active(
        &self,
        active_orders_request: Option<&ActiveOrdersRequest>,
    ) -> Result<Response<OrdersResponse>> {
        let mut active_orders_request = active_orders_request.cloned().unwrap_or_default();

        if active_orders_request.user_id.is_empty() {
            active_orders_request.user_id = session_user_id(
                &self.client,
                "active_orders_request.user_id",
                "active_orders_request",
            )
            .await?;
        }

        let path = format!("{}/active", ORDERS_BASE_PATH);
        authorized_post(&self.client, &path, &active_orders_request).await
    }

    /// Lists past orders, one page at a time. Check `has_more` on the
    /// response to know whether to ask for the next page.
    pub async fn inactive(
        &self,
        inactive_orders_request: Option<&InactiveOrdersRequest>,
    ) -> Result<Response<OrdersResponse>> {
        let mut inactive_orders_request = inactive_orders_request
            .ok_or_else(|| missing("inactive_orders_request"))?
            .clone();

        if inactive_orders_request.user_id.is_empty() {
            inactive_orders_request.user_id = session_user_id(
                &self.client,
                "inactive_orders_request.user_id",
                "inactive_orders_request",
            )
            .await?;
        }

        let path = format!("{}/inactive", ORDERS_BASE_PATH);
        authorized_post(&self.client, &path, &inactive_orders_request).await
    }
}
