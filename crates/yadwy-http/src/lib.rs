//! JSON HTTP client for the Yadwy seller backend
//!
//! A thin wrapper over `reqwest` that every service call goes through.
//!
//! ## Features
//!
//! - **Base URL and header merging**: JSON content type default, instance headers, per-call headers
//! - **Middleware pipeline**: ordered, named request and response stages
//! - **Uniform errors**: non-2xx responses become `HttpError::Status` with the server message
//! - **Mockable transport**: swap `ReqwestTransport` for any `Transport`
//!
//! The client never retries on its own.

pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod params;
pub mod transport;

pub use client::{decode_body, status_error, HttpClient};
pub use config::HttpConfig;
pub use error::{HttpError, Result};
pub use middleware::{
    request_fn, response_fn, Pipeline, RequestContext, RequestMiddleware, RequestSnapshot,
    ResponseContext, ResponseMiddleware,
};
pub use params::{ParamValue, QueryParams, RequestOptions};
pub use transport::{ReqwestTransport, Transport};

/// Re-export commonly used types
pub use reqwest::{header, Method, StatusCode};
