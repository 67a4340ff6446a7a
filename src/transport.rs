//! Request dispatch against an injected HTTP transport.
//!
//! The two primitives here mirror the two response shapes the bgm.tv
//! protocol uses: read endpoints return content ([`fetch_body`]), mutation
//! endpoints return an empty-body acknowledgement ([`fetch_success`]).
//! Keeping them separate makes each endpoint's contract obvious from which
//! primitive it calls.

use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

use crate::error::{BgmError, BgmResult};

/// A fully shaped request: absolute percent-encoded URL, fixed headers and
/// an optional pre-encoded payload forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

/// A response whose status is known but whose body has not been read yet.
///
/// Dropping the stream without reading it must still release the underlying
/// connection; the reqwest implementation gets this from `Response`'s drop.
#[async_trait]
pub trait ResponseStream: Send + std::fmt::Debug {
    fn status(&self) -> u16;

    /// Reads the entire response body.
    async fn read_body(self: Box<Self>) -> BgmResult<Vec<u8>>;
}

/// The injected HTTP client. Connection pooling, TLS and timeouts all live
/// behind this seam; timeouts surface as [`BgmError::Transport`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> BgmResult<Box<dyn ResponseStream>>;
}

/// Executes a request and returns the raw response payload.
///
/// Only a 200 yields the body; any other status is
/// [`BgmError::UnexpectedStatus`] and the body is discarded unread.
pub(crate) async fn fetch_body(
    transport: &dyn HttpTransport,
    request: ApiRequest,
) -> BgmResult<Vec<u8>> {
    debug!(method = %request.method, url = %request.url, "dispatching request");
    let response = transport.execute(request).await?;
    match response.status() {
        200 => response.read_body().await,
        code => Err(BgmError::UnexpectedStatus(code)),
    }
}

/// Executes a request and collapses the response to a success flag.
///
/// 200 and 204 both count as success; everything else is a typed failure.
/// There is no `false` outcome.
pub(crate) async fn fetch_success(
    transport: &dyn HttpTransport,
    request: ApiRequest,
) -> BgmResult<()> {
    debug!(method = %request.method, url = %request.url, "dispatching request");
    let response = transport.execute(request).await?;
    match response.status() {
        200 | 204 => Ok(()),
        code => Err(BgmError::UnexpectedStatus(code)),
    }
}

/// Production transport backed by a pooled [`reqwest::Client`].
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[derive(Debug)]
struct ReqwestResponse {
    inner: reqwest::Response,
}

#[async_trait]
impl ResponseStream for ReqwestResponse {
    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    async fn read_body(self: Box<Self>) -> BgmResult<Vec<u8>> {
        let bytes = self
            .inner
            .bytes()
            .await
            .map_err(|e| BgmError::BodyRead(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> BgmResult<Box<dyn ResponseStream>> {
        let url = reqwest::Url::parse(&request.url)
            .map_err(|e| BgmError::RequestBuild(format!("invalid URL {}: {}", request.url, e)))?;

        let mut builder = self.client.request(request.method, url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let built = builder
            .build()
            .map_err(|e| BgmError::RequestBuild(e.to_string()))?;

        let response = self
            .client
            .execute(built)
            .await
            .map_err(|e| BgmError::Transport(e.to_string()))?;

        Ok(Box::new(ReqwestResponse { inner: response }))
    }
}

/// Builds the fixed header set attached to every request.
pub(crate) fn standard_headers(token: &str, user_agent: &str) -> Vec<(&'static str, String)> {
    vec![
        ("Content-Type", "application/json".to_string()),
        ("Authorization", format!("Bearer {token}")),
        ("User-Agent", user_agent.to_string()),
    ]
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Scripted response for exercising the dispatch primitives.
    #[derive(Debug)]
    pub(crate) struct FakeResponse {
        pub status: u16,
        pub body: BgmResult<Vec<u8>>,
    }

    impl FakeResponse {
        pub(crate) fn ok(body: &[u8]) -> Box<Self> {
            Box::new(Self {
                status: 200,
                body: Ok(body.to_vec()),
            })
        }

        pub(crate) fn with_status(status: u16) -> Box<Self> {
            Box::new(Self {
                status,
                body: Ok(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ResponseStream for FakeResponse {
        fn status(&self) -> u16 {
            self.status
        }

        async fn read_body(self: Box<Self>) -> BgmResult<Vec<u8>> {
            self.body
        }
    }
}
