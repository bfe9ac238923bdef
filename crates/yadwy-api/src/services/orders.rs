use std::sync::Arc;

use tracing::error;
use yadwy_http::{HttpClient, RequestOptions};

use crate::error::{ApiError, ApiResult};
use crate::models::{
    Listing, OrderResponse, PageParams, PlaceOrderRequest, SellerOrder, UpdateOrderStatusRequest,
};

pub const SELLER_ORDERS_ENDPOINT: &str = "/v1/sellers/orders";
pub const ORDERS_ENDPOINT: &str = "/v1/orders";

#[derive(Debug, Clone)]
pub struct OrdersService {
    client: Arc<HttpClient>,
}

impl OrdersService {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Orders of the signed-in seller, one page at a time
    pub async fn list(&self, params: &PageParams) -> ApiResult<Listing<SellerOrder>> {
        let options = RequestOptions::from(params.to_query());
        self.client
            .get(SELLER_ORDERS_ENDPOINT, Some(options))
            .await
            .map_err(|e| {
                error!("Failed to fetch orders: {}", e);
                ApiError::from(e)
            })
    }

    pub async fn get(&self, order_id: &str) -> ApiResult<SellerOrder> {
        let order_id = non_empty(order_id)?;
        Ok(self
            .client
            .get(&format!("{}/{}", SELLER_ORDERS_ENDPOINT, order_id), None)
            .await?)
    }

    /// Set the seller-side status. The value is passed through unchanged.
    pub async fn update_status(&self, order_id: &str, status: &str) -> ApiResult<SellerOrder> {
        let order_id = non_empty(order_id)?;
        let body = UpdateOrderStatusRequest {
            status: status.to_string(),
        };
        Ok(self
            .client
            .patch(&format!("{}/{}", SELLER_ORDERS_ENDPOINT, order_id), &body, None)
            .await?)
    }

    pub async fn create(&self, request: &PlaceOrderRequest) -> ApiResult<OrderResponse> {
        if request.items.is_empty() {
            return Err(ApiError::InvalidRequest("order has no items".to_string()));
        }
        Ok(self.client.post(ORDERS_ENDPOINT, request, None).await?)
    }
}

pub(crate) fn non_empty(id: &str) -> ApiResult<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::InvalidRequest("id must not be empty".to_string()));
    }
    Ok(id)
}
