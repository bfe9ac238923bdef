use serde::{Deserialize, Serialize};
use yadwy_http::QueryParams;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub seller_id: Option<i64>,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: i64,
    pub visible: bool,
}

/// Filters for `GET /v1/products`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListParams {
    pub seller_id: Option<i64>,
    pub category_id: Option<i64>,
    pub visible: Option<bool>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl ProductListParams {
    pub fn seller(mut self, seller_id: i64) -> Self {
        self.seller_id = Some(seller_id);
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn page(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }

    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("sellerId", self.seller_id)
            .with("categoryId", self.category_id)
            .with("visible", self.visible)
            .with("page", self.page)
            .with("size", self.size)
    }
}
