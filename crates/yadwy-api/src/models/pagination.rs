//! List responses: flat arrays or paged envelopes
//!
//! Backend versions disagree on the shape of list endpoints. The shape is
//! resolved once, when the body is decoded, into [`Listing`].

use serde::{Deserialize, Serialize};
use yadwy_http::QueryParams;

/// Paged envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    List,
    Page,
}

/// A list endpoint result in whichever shape the backend sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    List(Vec<T>),
    Page(Page<T>),
}

impl<T> Listing<T> {
    pub fn kind(&self) -> ListingKind {
        match self {
            Listing::List(_) => ListingKind::List,
            Listing::Page(_) => ListingKind::Page,
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Listing::List(items) => items,
            Listing::Page(page) => &page.content,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::List(items) => items,
            Listing::Page(page) => page.content,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Whether another page is worth requesting. A flat list only ends
    /// when it comes back shorter than the requested page size.
    pub fn has_more(&self, requested_size: u32) -> bool {
        match self {
            Listing::List(items) => requested_size > 0 && items.len() >= requested_size as usize,
            Listing::Page(page) if page.total_pages > 0 => page.page + 1 < page.total_pages,
            Listing::Page(page) => {
                !page.last && page.size > 0 && page.content.len() >= page.size as usize
            }
        }
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Listing::List(Vec::new())
    }
}

/// `page`/`size`/`sort` query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub size: u32,
    pub sort: Option<String>,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort: None,
        }
    }
}

impl PageParams {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page + 1,
            ..self.clone()
        }
    }

    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("page", self.page)
            .with("size", self.size)
            .with("sort", self.sort.clone())
    }
}
