//! Lightweight typed client for the bangumi (bgm.tv) cataloguing API.
//!
//! The crate is a pure request-shaping and dispatch layer: endpoint methods
//! translate typed parameters into fully-qualified URLs, attach the fixed
//! authentication and identification headers, and hand the request to an
//! injected transport. Request and response payloads are opaque: callers
//! pass pre-encoded JSON bodies and receive raw response bytes (or a success
//! acknowledgement for mutation endpoints). No retries, no caching, no
//! pagination, no schema validation.
//!
//! ```no_run
//! use bangumi_lite::{BangumiClient, Credentials};
//!
//! # async fn run() -> bangumi_lite::BgmResult<()> {
//! let client = BangumiClient::new(Credentials::new("token", "my-app/1.0"));
//! let subject = client.subject_by_id("300").await?;
//! client.collect_character("123").await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod endpoint;
mod error;
mod transport;
mod types;

pub use client::{BangumiClient, Credentials};
pub use error::{BgmError, BgmResult};
pub use transport::{ApiRequest, HttpTransport, ReqwestTransport, ResponseStream};
pub use types::{CollectionType, EpisodeType, SubjectType};
