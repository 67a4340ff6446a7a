use reqwest::Method;

use crate::client::BangumiClient;
use crate::endpoint::Endpoint;
use crate::error::BgmResult;
use crate::types::episode_type_filter;

const EPISODES: Endpoint = Endpoint::new(Method::GET, "/v0/episodes");
const EPISODE_BY_ID: Endpoint = Endpoint::new(Method::GET, "/v0/episodes/{}");

impl BangumiClient {
    /// Lists a subject's episodes. `GET /v0/episodes`.
    ///
    /// `episode_type` takes the Chinese episode category names (本篇, 特别篇,
    /// OP, ED, 预告/宣传/广告, MAD, 其他); any other value selects 本篇.
    pub async fn episodes_by_subject(
        &self,
        subject_id: &str,
        episode_type: &str,
        limit: &str,
        offset: &str,
    ) -> BgmResult<Vec<u8>> {
        self.fetch_body(
            &EPISODES,
            &[],
            &[
                ("subject_id", subject_id.to_string()),
                ("type", episode_type_filter(episode_type).to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
            None,
        )
        .await
    }

    /// Fetches one episode. `GET /v0/episodes/{episode_id}`.
    pub async fn episode_by_id(&self, episode_id: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(&EPISODE_BY_ID, &[episode_id], &[], None).await
    }
}
