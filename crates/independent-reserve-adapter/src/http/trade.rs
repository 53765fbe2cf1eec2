/*
[INPUT]:  Order requests and listing queries
[OUTPUT]: Order placement, cancellation and order listing responses
[POS]:    HTTP layer - trading endpoints (require signed POST)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use serde_json::Value;

use crate::http::{IrClient, Result};
use crate::types::{
    CancelOrderRequest, LimitOrderRequest, MarketOrderRequest, OrderDetailsRequest, OrderListQuery,
    OrderListing, OrdersRequest,
};

impl IrClient {
    /// Place a limit order
    ///
    /// POST /Private/PlaceLimitOrder
    /// Price and volume are sent as given; the exchange rejects values beyond
    /// its precision (2 dp fiat, 8 dp digital).
    pub async fn place_limit_order(&self, req: &LimitOrderRequest) -> Result<Value> {
        self.post_private(req).await
    }

    /// Place a market order
    ///
    /// POST /Private/PlaceMarketOrder
    pub async fn place_market_order(&self, req: &MarketOrderRequest) -> Result<Value> {
        self.post_private(req).await
    }

    /// Cancel an order by guid
    ///
    /// POST /Private/CancelOrder
    pub async fn cancel_order(&self, order_guid: &str) -> Result<Value> {
        let req = CancelOrderRequest {
            order_guid: order_guid.to_string(),
        };
        self.post_private(&req).await
    }

    /// Open orders for a pair (default page size 10)
    ///
    /// POST /Private/GetOpenOrders
    pub async fn get_open_orders(&self, query: &OrderListQuery) -> Result<Value> {
        self.list_orders(OrderListing::Open, query).await
    }

    /// Closed orders for a pair (default page size 50)
    ///
    /// POST /Private/GetClosedOrders
    pub async fn get_closed_orders(&self, query: &OrderListQuery) -> Result<Value> {
        self.list_orders(OrderListing::Closed, query).await
    }

    /// Closed orders with at least one fill (default page size 50)
    ///
    /// POST /Private/GetClosedFilledOrders
    pub async fn get_closed_filled_orders(&self, query: &OrderListQuery) -> Result<Value> {
        self.list_orders(OrderListing::ClosedFilled, query).await
    }

    /// Details of a single order
    ///
    /// POST /Private/GetOrderDetails
    pub async fn get_order_details(&self, order_guid: &str) -> Result<Value> {
        let req = OrderDetailsRequest {
            order_guid: order_guid.to_string(),
        };
        self.post_private(&req).await
    }

    async fn list_orders(&self, listing: OrderListing, query: &OrderListQuery) -> Result<Value> {
        let req = OrdersRequest::new(listing, query.clone());
        self.post_private(&req).await
    }
}
