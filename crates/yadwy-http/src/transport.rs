//! Network dispatch behind a mockable trait

use async_trait::async_trait;
use tracing::debug;

use crate::{
    config::HttpConfig,
    error::{HttpError, Result},
    middleware::{RequestContext, ResponseContext},
};

/// Sends a finished request and reads the whole response
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RequestContext) -> Result<ResponseContext>;
}

/// Production transport backed by `reqwest`
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Build the underlying client from the transport knobs of `config`
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .redirect(if config.max_redirects > 0 {
                reqwest::redirect::Policy::limited(config.max_redirects)
            } else {
                reqwest::redirect::Policy::none()
            });

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| HttpError::InvalidProxy(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        if config.pool_enabled {
            builder = builder.pool_idle_timeout(config.pool_idle_timeout);
        } else {
            builder = builder.pool_max_idle_per_host(0);
        }

        let inner = builder
            .build()
            .map_err(|e| HttpError::BuildError(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Get underlying reqwest client (for advanced usage)
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: RequestContext) -> Result<ResponseContext> {
        let url = request
            .url
            .parse::<url::Url>()
            .map_err(|e| HttpError::InvalidUrl(format!("{}: {}", request.url, e)))?;

        let snapshot = request.snapshot();
        let mut builder = self
            .inner
            .request(request.method, url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        debug!(
            method = %snapshot.method,
            url = %snapshot.url,
            status = status.as_u16(),
            bytes = body.len(),
            "HTTP response received"
        );

        Ok(ResponseContext {
            status,
            headers,
            body,
            request: snapshot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn test_transport_with_proxy() {
        let config = HttpConfig::default().with_proxy("http://proxy.example.com:8080");
        assert!(ReqwestTransport::new(&config).is_ok());
    }

    #[test]
    fn test_invalid_proxy() {
        let config = HttpConfig::default().with_proxy("http://[::1");
        let result = ReqwestTransport::new(&config);
        assert!(matches!(result, Err(HttpError::InvalidProxy(_))));
    }

    #[tokio::test]
    async fn test_relative_url_rejected() {
        let transport = ReqwestTransport::new(&HttpConfig::default()).unwrap();
        let result = transport
            .send(RequestContext::new(Method::GET, "/v1/products"))
            .await;
        assert!(matches!(result, Err(HttpError::InvalidUrl(_))));
    }
}
