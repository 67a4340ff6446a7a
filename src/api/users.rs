use reqwest::Method;

use crate::client::BangumiClient;
use crate::endpoint::Endpoint;
use crate::error::BgmResult;

const USER_BY_NAME: Endpoint = Endpoint::new(Method::GET, "/v0/users/{}");
const ME: Endpoint = Endpoint::new(Method::GET, "/v0/me");

impl BangumiClient {
    /// Fetches a user's public profile. `GET /v0/users/{username}`.
    pub async fn user_by_name(&self, username: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(&USER_BY_NAME, &[username], &[], None).await
    }

    /// Fetches the profile of the token's owner. `GET /v0/me`.
    pub async fn me(&self) -> BgmResult<Vec<u8>> {
        self.fetch_body(&ME, &[], &[], None).await
    }
}
