//! Shared test transport: records every dispatched request and replies with
//! a scripted status/body, so endpoint mappings can be asserted without a
//! network.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bangumi_lite::{ApiRequest, BangumiClient, BgmResult, Credentials, HttpTransport, ResponseStream};

pub struct ScriptedTransport {
    status: u16,
    body: Vec<u8>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn ok(body: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            status: 200,
            body: body.to_vec(),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn status(status: u16) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: Vec::new(),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests()
            .last()
            .cloned()
            .expect("no request was dispatched")
    }
}

#[derive(Debug)]
struct Reply {
    status: u16,
    body: Vec<u8>,
}

#[async_trait]
impl ResponseStream for Reply {
    fn status(&self) -> u16 {
        self.status
    }

    async fn read_body(self: Box<Self>) -> BgmResult<Vec<u8>> {
        Ok(self.body)
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> BgmResult<Box<dyn ResponseStream>> {
        self.requests.lock().unwrap().push(request);
        Ok(Box::new(Reply {
            status: self.status,
            body: self.body.clone(),
        }))
    }
}

pub fn client_over(transport: Arc<ScriptedTransport>) -> BangumiClient {
    BangumiClient::with_transport(
        Credentials::new("test-token", "bangumi-lite-tests/0.1"),
        transport,
    )
}
