use reqwest::Method;

use crate::client::BangumiClient;
use crate::endpoint::Endpoint;
use crate::error::BgmResult;

const SEARCH_CHARACTERS: Endpoint = Endpoint::new(Method::POST, "/v0/search/characters");
const CHARACTER_BY_ID: Endpoint = Endpoint::new(Method::GET, "/v0/characters/{}");
const COLLECT_CHARACTER: Endpoint = Endpoint::new(Method::POST, "/v0/characters/{}/collect");
const UNCOLLECT_CHARACTER: Endpoint = Endpoint::new(Method::DELETE, "/v0/characters/{}/collect");

impl BangumiClient {
    /// Searches characters by name. `POST /v0/search/characters`.
    pub async fn search_characters(
        &self,
        limit: &str,
        offset: &str,
        body: &str,
    ) -> BgmResult<Vec<u8>> {
        self.fetch_body(
            &SEARCH_CHARACTERS,
            &[],
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
            Some(body.to_string()),
        )
        .await
    }

    /// Fetches one character. `GET /v0/characters/{character_id}`.
    pub async fn character_by_id(&self, character_id: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(&CHARACTER_BY_ID, &[character_id], &[], None).await
    }

    /// Collects a character for the current user.
    /// `POST /v0/characters/{character_id}/collect`.
    pub async fn collect_character(&self, character_id: &str) -> BgmResult<()> {
        self.fetch_success(&COLLECT_CHARACTER, &[character_id], &[], None).await
    }

    /// Removes a character from the current user's collection.
    /// `DELETE /v0/characters/{character_id}/collect`.
    pub async fn uncollect_character(&self, character_id: &str) -> BgmResult<()> {
        self.fetch_success(&UNCOLLECT_CHARACTER, &[character_id], &[], None).await
    }
}
