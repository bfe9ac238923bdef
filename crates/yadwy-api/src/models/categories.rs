use serde::{Deserialize, Serialize};
use yadwy_http::QueryParams;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub children: Vec<Category>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Depth-first walk over this category and its loaded children
    pub fn flatten(&self) -> Vec<&Category> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.flatten());
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryListParams {
    pub parent_id: Option<i64>,
    /// Ask the backend to embed child categories
    pub include_children: bool,
}

impl CategoryListParams {
    pub fn under(parent_id: i64) -> Self {
        Self {
            parent_id: Some(parent_id),
            include_children: false,
        }
    }

    pub fn with_children(mut self) -> Self {
        self.include_children = true;
        self
    }

    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("parentId", self.parent_id)
            .with("include", self.include_children.then_some("children"))
    }
}
