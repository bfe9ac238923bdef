//! Ordered request/response middleware pipeline
//!
//! Request stages run in registration order before dispatch, response stages
//! run in registration order after the transport returns and before the
//! client inspects the status code.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Method, StatusCode,
};
use tracing::trace;

use crate::{error::HttpError, Result};

/// Outgoing request as seen by request middleware
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RequestContext {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Set a header, replacing any existing value
    pub fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
        let (name, value) = parse_header(name, value)?;
        self.headers.insert(name, value);
        Ok(())
    }

    /// Header value as a string, if present and visible ASCII
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Lightweight copy kept on the response for middleware that needs it
    pub fn snapshot(&self) -> RequestSnapshot {
        RequestSnapshot {
            method: self.method.clone(),
            url: self.url.clone(),
            headers: self.headers.clone(),
        }
    }
}

/// The request that produced a response, without its body
#[derive(Debug, Clone)]
pub struct RequestSnapshot {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
}

impl RequestSnapshot {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Received response as seen by response middleware. The body is fully read.
#[derive(Debug, Clone)]
pub struct ResponseContext {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    pub request: RequestSnapshot,
}

impl ResponseContext {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

pub(crate) fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|e| HttpError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
    let header_value = HeaderValue::from_str(value).map_err(|e| HttpError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    Ok((header_name, header_value))
}

/// A named stage that may rewrite the outgoing request
#[async_trait]
pub trait RequestMiddleware: Send + Sync {
    /// Stage name used in logs and errors
    fn name(&self) -> &str;

    async fn on_request(&self, request: RequestContext) -> Result<RequestContext>;
}

/// A named stage that may observe or replace the received response
#[async_trait]
pub trait ResponseMiddleware: Send + Sync {
    /// Stage name used in logs and errors
    fn name(&self) -> &str;

    async fn on_response(&self, response: ResponseContext) -> Result<ResponseContext>;
}

/// Closure-backed request stage, see [`request_fn`]
pub struct FnRequestMiddleware<F> {
    name: String,
    f: F,
}

#[async_trait]
impl<F> RequestMiddleware for FnRequestMiddleware<F>
where
    F: Fn(RequestContext) -> Result<RequestContext> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn on_request(&self, request: RequestContext) -> Result<RequestContext> {
        (self.f)(request)
    }
}

/// Closure-backed response stage, see [`response_fn`]
pub struct FnResponseMiddleware<F> {
    name: String,
    f: F,
}

#[async_trait]
impl<F> ResponseMiddleware for FnResponseMiddleware<F>
where
    F: Fn(ResponseContext) -> Result<ResponseContext> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn on_response(&self, response: ResponseContext) -> Result<ResponseContext> {
        (self.f)(response)
    }
}

/// Wrap a synchronous closure as a request stage
pub fn request_fn<F>(name: impl Into<String>, f: F) -> FnRequestMiddleware<F>
where
    F: Fn(RequestContext) -> Result<RequestContext> + Send + Sync,
{
    FnRequestMiddleware {
        name: name.into(),
        f,
    }
}

/// Wrap a synchronous closure as a response stage
pub fn response_fn<F>(name: impl Into<String>, f: F) -> FnResponseMiddleware<F>
where
    F: Fn(ResponseContext) -> Result<ResponseContext> + Send + Sync,
{
    FnResponseMiddleware {
        name: name.into(),
        f,
    }
}

/// Ordered request and response stages
#[derive(Clone, Default)]
pub struct Pipeline {
    request: Vec<Arc<dyn RequestMiddleware>>,
    response: Vec<Arc<dyn ResponseMiddleware>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_request(&mut self, stage: impl RequestMiddleware + 'static) {
        self.request.push(Arc::new(stage));
    }

    pub fn push_response(&mut self, stage: impl ResponseMiddleware + 'static) {
        self.response.push(Arc::new(stage));
    }

    pub fn push_request_arc(&mut self, stage: Arc<dyn RequestMiddleware>) {
        self.request.push(stage);
    }

    pub fn push_response_arc(&mut self, stage: Arc<dyn ResponseMiddleware>) {
        self.response.push(stage);
    }

    /// Names of the request stages, in execution order
    pub fn request_stages(&self) -> Vec<&str> {
        self.request.iter().map(|s| s.name()).collect()
    }

    /// Names of the response stages, in execution order
    pub fn response_stages(&self) -> Vec<&str> {
        self.response.iter().map(|s| s.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.request.is_empty() && self.response.is_empty()
    }

    pub async fn run_request(&self, mut request: RequestContext) -> Result<RequestContext> {
        for stage in &self.request {
            trace!(stage = stage.name(), "request middleware");
            request = stage.on_request(request).await?;
        }
        Ok(request)
    }

    pub async fn run_response(&self, mut response: ResponseContext) -> Result<ResponseContext> {
        for stage in &self.response {
            trace!(stage = stage.name(), status = %response.status, "response middleware");
            response = stage.on_response(response).await?;
        }
        Ok(response)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("request", &self.request_stages())
            .field("response", &self.response_stages())
            .finish()
    }
}
