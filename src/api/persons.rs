use reqwest::Method;

use crate::client::BangumiClient;
use crate::endpoint::Endpoint;
use crate::error::BgmResult;

const SEARCH_PERSONS: Endpoint = Endpoint::new(Method::POST, "/v0/search/persons");
const PERSON_BY_ID: Endpoint = Endpoint::new(Method::GET, "/v0/persons/{}");
const COLLECT_PERSON: Endpoint = Endpoint::new(Method::POST, "/v0/persons/{}/collect");
const UNCOLLECT_PERSON: Endpoint = Endpoint::new(Method::DELETE, "/v0/persons/{}/collect");

impl BangumiClient {
    /// Searches persons by name. `POST /v0/search/persons`.
    pub async fn search_persons(&self, limit: &str, offset: &str, body: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(
            &SEARCH_PERSONS,
            &[],
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
            Some(body.to_string()),
        )
        .await
    }

    /// Fetches one person. `GET /v0/persons/{person_id}`.
    pub async fn person_by_id(&self, person_id: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(&PERSON_BY_ID, &[person_id], &[], None).await
    }

    /// Collects a person for the current user.
    /// `POST /v0/persons/{person_id}/collect`.
    pub async fn collect_person(&self, person_id: &str) -> BgmResult<()> {
        self.fetch_success(&COLLECT_PERSON, &[person_id], &[], None).await
    }

    /// Removes a person from the current user's collection.
    /// `DELETE /v0/persons/{person_id}/collect`.
    pub async fn uncollect_person(&self, person_id: &str) -> BgmResult<()> {
        self.fetch_success(&UNCOLLECT_PERSON, &[person_id], &[], None).await
    }
}
