use std::sync::Arc;

use crate::endpoint::Endpoint;
use crate::error::BgmResult;
use crate::transport::{self, ApiRequest, HttpTransport, ReqwestTransport};

const BASE_URL: &str = "https://api.bgm.tv";

/// Immutable credential snapshot attached to every request a client makes.
///
/// The token and user agent are fixed at construction; there is no global
/// credential state and no mutation racing against in-flight requests. Use a
/// separate client for a different identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    user_agent: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_agent: user_agent.into(),
        }
    }
}

/// Typed client for the bgm.tv REST API.
///
/// Each endpoint method shapes a request (enum-code translation, URL
/// assembly, method selection) and hands it to one of the two dispatch
/// primitives. The client itself holds no per-call state and is cheap to
/// clone; calls are independent and safe to issue concurrently.
#[derive(Clone)]
pub struct BangumiClient {
    transport: Arc<dyn HttpTransport>,
    credentials: Credentials,
    base_url: String,
}

impl BangumiClient {
    /// Creates a client backed by a pooled reqwest transport.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(credentials, Arc::new(ReqwestTransport::default()))
    }

    /// Creates a client over a custom transport (for testing).
    pub fn with_transport(credentials: Credentials, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            credentials,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Builds the request descriptor for one endpoint invocation. Pure with
    /// respect to its inputs plus the client's credential snapshot.
    pub(crate) fn request(
        &self,
        endpoint: &Endpoint,
        path_args: &[&str],
        query: &[(&str, String)],
        body: Option<String>,
    ) -> ApiRequest {
        ApiRequest {
            method: endpoint.method.clone(),
            url: endpoint.url(&self.base_url, path_args, query),
            headers: transport::standard_headers(&self.credentials.token, &self.credentials.user_agent),
            body,
        }
    }

    pub(crate) async fn fetch_body(
        &self,
        endpoint: &Endpoint,
        path_args: &[&str],
        query: &[(&str, String)],
        body: Option<String>,
    ) -> BgmResult<Vec<u8>> {
        let request = self.request(endpoint, path_args, query, body);
        transport::fetch_body(self.transport.as_ref(), request).await
    }

    pub(crate) async fn fetch_success(
        &self,
        endpoint: &Endpoint,
        path_args: &[&str],
        query: &[(&str, String)],
        body: Option<String>,
    ) -> BgmResult<()> {
        let request = self.request(endpoint, path_args, query, body);
        transport::fetch_success(self.transport.as_ref(), request).await
    }
}
