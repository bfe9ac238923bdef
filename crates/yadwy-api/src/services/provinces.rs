use std::sync::Arc;

use tracing::error;
use yadwy_http::HttpClient;

use crate::error::{ApiError, ApiResult};
use crate::models::provinces::ProvincesBody;
use crate::models::Province;

pub const PROVINCES_ENDPOINT: &str = "/v1/provinces";

#[derive(Debug, Clone)]
pub struct ProvincesService {
    client: Arc<HttpClient>,
}

impl ProvincesService {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Province>> {
        let body: ProvincesBody = self
            .client
            .get(PROVINCES_ENDPOINT, None)
            .await
            .map_err(|e| {
                error!("Failed to fetch provinces: {}", e);
                ApiError::from(e)
            })?;
        Ok(body.into())
    }

    /// Provinces currently accepting deliveries
    pub async fn list_active(&self) -> ApiResult<Vec<Province>> {
        let mut provinces = self.list().await?;
        provinces.retain(|p| p.is_active);
        Ok(provinces)
    }
}
