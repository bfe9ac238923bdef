//! Typed client for the Yadwy seller backend
//!
//! [`SellerApi`] builds one authenticated [`HttpClient`](yadwy_http::HttpClient)
//! and hands out a service per resource:
//!
//! ```no_run
//! use std::sync::Arc;
//! use yadwy_api::{PageParams, SellerApi};
//! use yadwy_auth::MemoryCredentialStore;
//! use yadwy_http::HttpConfig;
//!
//! # async fn run() -> yadwy_api::ApiResult<()> {
//! let config = HttpConfig::default().with_base_url("https://api.yadwy.com");
//! let api = SellerApi::new(config, Arc::new(MemoryCredentialStore::new()))?;
//!
//! api.auth().login("+201001234567", "secret").await?;
//! let orders = api.orders().list(&PageParams::default()).await?;
//! println!("{} orders", orders.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod services;

pub use client::{SellerApi, API_URL_ENV};
pub use error::{ApiError, ApiResult};
pub use models::*;
pub use services::{AuthService, CategoriesService, OrdersService, ProductsService, ProvincesService};
