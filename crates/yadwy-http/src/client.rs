//! HTTP client implementation

use std::sync::Arc;

use reqwest::{header::HeaderMap, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    config::{HttpConfig, DEFAULT_CONTENT_TYPE},
    error::{HttpError, Result},
    middleware::{
        parse_header, Pipeline, RequestContext, RequestMiddleware, ResponseContext,
        ResponseMiddleware,
    },
    params::RequestOptions,
    transport::{ReqwestTransport, Transport},
};

/// JSON HTTP client with a middleware pipeline
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    config: HttpConfig,
    default_headers: HeaderMap,
    pipeline: Pipeline,
}

impl HttpClient {
    /// Create a new HTTP client with configuration
    pub fn new(config: HttpConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create HTTP client with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(HttpConfig::default())
    }

    /// Create a client over a custom transport
    pub fn with_transport(config: HttpConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        let (name, value) = parse_header(DEFAULT_CONTENT_TYPE.0, DEFAULT_CONTENT_TYPE.1)?;
        default_headers.insert(name, value);
        for (name, value) in &config.headers {
            let (name, value) = parse_header(name, value)?;
            default_headers.insert(name, value);
        }

        Ok(Self {
            transport,
            config,
            default_headers,
            pipeline: Pipeline::new(),
        })
    }

    /// Same configuration and transport, no middleware. Used for calls that
    /// must not re-enter the pipeline, such as token refresh.
    pub fn without_middleware(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: self.config.clone(),
            default_headers: self.default_headers.clone(),
            pipeline: Pipeline::new(),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Append a request stage; stages run in the order they were added
    pub fn add_request_middleware(&mut self, stage: impl RequestMiddleware + 'static) {
        self.pipeline.push_request(stage);
    }

    /// Append a response stage; stages run in the order they were added
    pub fn add_response_middleware(&mut self, stage: impl ResponseMiddleware + 'static) {
        self.pipeline.push_response(stage);
    }

    pub fn set_pipeline(&mut self, pipeline: Pipeline) {
        self.pipeline = pipeline;
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: Option<RequestOptions>,
    ) -> Result<T> {
        self.request(Method::GET, endpoint, None, options).await
    }

    pub async fn post<B, T>(
        &self,
        endpoint: &str,
        body: &B,
        options: Option<RequestOptions>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.request(Method::POST, endpoint, Some(body), options).await
    }

    pub async fn put<B, T>(
        &self,
        endpoint: &str,
        body: &B,
        options: Option<RequestOptions>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.request(Method::PUT, endpoint, Some(body), options).await
    }

    pub async fn patch<B, T>(
        &self,
        endpoint: &str,
        body: &B,
        options: Option<RequestOptions>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.request(Method::PATCH, endpoint, Some(body), options).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: Option<RequestOptions>,
    ) -> Result<T> {
        self.request(Method::DELETE, endpoint, None, options).await
    }

    /// Core routine: run the pipeline, dispatch, apply the status policy and
    /// decode the body.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
        options: Option<RequestOptions>,
    ) -> Result<T> {
        let response = self.execute(method, endpoint, body, options).await?;
        if !response.is_success() {
            return Err(status_error(&response));
        }
        decode_body(&response.body)
    }

    /// Run the pipeline and dispatch, returning the response after response
    /// middleware and before any status inspection.
    pub async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
        options: Option<RequestOptions>,
    ) -> Result<ResponseContext> {
        let request = self.build_request(method, endpoint, body, options.unwrap_or_default())?;
        let request = self.pipeline.run_request(request).await?;
        debug!("HTTP {}: {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        self.pipeline.run_response(response).await
    }

    /// Merge headers (content type default, instance, per call) and resolve the URL
    pub fn build_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
        options: RequestOptions,
    ) -> Result<RequestContext> {
        let url = self.config.resolve(&options.params.apply(endpoint));
        let mut request = RequestContext::new(method, url);
        request.headers = self.default_headers.clone();
        for (name, value) in &options.headers {
            request.set_header(name, value)?;
        }
        request.body = body;
        Ok(request)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("pipeline", &self.pipeline)
            .finish()
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(HttpError::Encode)
}

/// Error for a non-2xx response: the body's `message` when it has one
pub fn status_error(response: &ResponseContext) -> HttpError {
    let message = serde_json::from_slice::<Value>(&response.body)
        .ok()
        .and_then(|body| match body.get("message") {
            Some(Value::String(message)) if !message.is_empty() => Some(message.clone()),
            _ => None,
        });

    match message {
        Some(message) => HttpError::Status {
            status: response.status,
            message,
        },
        None => HttpError::generic_status(response.status),
    }
}

/// Decode a 2xx body. Empty or non-JSON bodies decode as `{}` (or `null`
/// for types such as `()` that cannot come from an object).
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => serde_json::from_value(value).map_err(HttpError::Decode),
        Err(_) => serde_json::from_value(Value::Object(Default::default()))
            .or_else(|_| serde_json::from_value(Value::Null))
            .map_err(HttpError::Decode),
    }
}
