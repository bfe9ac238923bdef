use std::sync::Arc;

use tracing::error;
use yadwy_http::{HttpClient, RequestOptions};

use crate::error::{ApiError, ApiResult};
use crate::models::{CreateProductRequest, Listing, Product, ProductListParams};

pub const PRODUCTS_ENDPOINT: &str = "/v1/products";

#[derive(Debug, Clone)]
pub struct ProductsService {
    client: Arc<HttpClient>,
}

impl ProductsService {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &ProductListParams) -> ApiResult<Listing<Product>> {
        let options = RequestOptions::from(params.to_query());
        self.client
            .get(PRODUCTS_ENDPOINT, Some(options))
            .await
            .map_err(|e| {
                error!("Failed to fetch products: {}", e);
                ApiError::from(e)
            })
    }

    pub async fn get(&self, id: i64) -> ApiResult<Product> {
        Ok(self
            .client
            .get(&format!("{}/{}", PRODUCTS_ENDPOINT, id), None)
            .await?)
    }

    pub async fn create(&self, request: &CreateProductRequest) -> ApiResult<Product> {
        if request.name.trim().is_empty() {
            return Err(ApiError::InvalidRequest("product name is required".to_string()));
        }
        if request.price < 0.0 {
            return Err(ApiError::InvalidRequest("price must not be negative".to_string()));
        }
        Ok(self.client.post(PRODUCTS_ENDPOINT, request, None).await?)
    }
}
