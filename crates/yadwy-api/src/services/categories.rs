use std::sync::Arc;

use serde_json::Value;
use yadwy_http::{HttpClient, RequestOptions};

use crate::error::ApiResult;
use crate::models::{Category, CategoryListParams, CreateCategoryRequest, UpdateCategoryRequest};

pub const CATEGORIES_ENDPOINT: &str = "/v1/categories";

#[derive(Debug, Clone)]
pub struct CategoriesService {
    client: Arc<HttpClient>,
}

impl CategoriesService {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &CategoryListParams) -> ApiResult<Vec<Category>> {
        let options = RequestOptions::from(params.to_query());
        Ok(self.client.get(CATEGORIES_ENDPOINT, Some(options)).await?)
    }

    pub async fn get(&self, id: i64) -> ApiResult<Category> {
        Ok(self.client.get(&path(id), None).await?)
    }

    pub async fn create(&self, request: &CreateCategoryRequest) -> ApiResult<Category> {
        Ok(self.client.post(CATEGORIES_ENDPOINT, request, None).await?)
    }

    pub async fn update(&self, id: i64, request: &UpdateCategoryRequest) -> ApiResult<Category> {
        Ok(self.client.put(&path(id), request, None).await?)
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        // body is ignored; a 204 decodes to an empty object
        let _: Value = self.client.delete(&path(id), None).await?;
        Ok(())
    }
}

fn path(id: i64) -> String {
    format!("{}/{}", CATEGORIES_ENDPOINT, id)
}
