//! Edit-history (revision) lookups. All eight operations are plain GETs
//! over the same two shapes: a paged listing filtered by entity id, and a
//! single-revision fetch.

use reqwest::Method;

use crate::client::BangumiClient;
use crate::endpoint::Endpoint;
use crate::error::BgmResult;

const PERSON_REVISIONS: Endpoint = Endpoint::new(Method::GET, "/v0/revisions/persons");
const PERSON_REVISION_BY_ID: Endpoint = Endpoint::new(Method::GET, "/v0/revisions/persons/{}");
const CHARACTER_REVISIONS: Endpoint = Endpoint::new(Method::GET, "/v0/revisions/characters");
const CHARACTER_REVISION_BY_ID: Endpoint =
    Endpoint::new(Method::GET, "/v0/revisions/characters/{}");
const SUBJECT_REVISIONS: Endpoint = Endpoint::new(Method::GET, "/v0/revisions/subjects");
const SUBJECT_REVISION_BY_ID: Endpoint = Endpoint::new(Method::GET, "/v0/revisions/subjects/{}");
const EPISODE_REVISIONS: Endpoint = Endpoint::new(Method::GET, "/v0/revisions/episodes");
const EPISODE_REVISION_BY_ID: Endpoint = Endpoint::new(Method::GET, "/v0/revisions/episodes/{}");

impl BangumiClient {
    async fn revision_listing(
        &self,
        endpoint: &Endpoint,
        id_key: &'static str,
        id: &str,
        limit: &str,
        offset: &str,
    ) -> BgmResult<Vec<u8>> {
        self.fetch_body(
            endpoint,
            &[],
            &[
                (id_key, id.to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
            None,
        )
        .await
    }

    /// Lists a person's edit history. `GET /v0/revisions/persons`.
    pub async fn person_revisions(
        &self,
        person_id: &str,
        limit: &str,
        offset: &str,
    ) -> BgmResult<Vec<u8>> {
        self.revision_listing(&PERSON_REVISIONS, "person_id", person_id, limit, offset)
            .await
    }

    /// Fetches one person revision. `GET /v0/revisions/persons/{revision_id}`.
    pub async fn person_revision_by_id(&self, revision_id: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(&PERSON_REVISION_BY_ID, &[revision_id], &[], None).await
    }

    /// Lists a character's edit history. `GET /v0/revisions/characters`.
    pub async fn character_revisions(
        &self,
        character_id: &str,
        limit: &str,
        offset: &str,
    ) -> BgmResult<Vec<u8>> {
        self.revision_listing(
            &CHARACTER_REVISIONS,
            "character_id",
            character_id,
            limit,
            offset,
        )
        .await
    }

    /// Fetches one character revision.
    /// `GET /v0/revisions/characters/{revision_id}`.
    pub async fn character_revision_by_id(&self, revision_id: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(&CHARACTER_REVISION_BY_ID, &[revision_id], &[], None).await
    }

    /// Lists a subject's edit history. `GET /v0/revisions/subjects`.
    pub async fn subject_revisions(
        &self,
        subject_id: &str,
        limit: &str,
        offset: &str,
    ) -> BgmResult<Vec<u8>> {
        self.revision_listing(&SUBJECT_REVISIONS, "subject_id", subject_id, limit, offset)
            .await
    }

    /// Fetches one subject revision. `GET /v0/revisions/subjects/{revision_id}`.
    pub async fn subject_revision_by_id(&self, revision_id: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(&SUBJECT_REVISION_BY_ID, &[revision_id], &[], None).await
    }

    /// Lists an episode's edit history. `GET /v0/revisions/episodes`.
    pub async fn episode_revisions(
        &self,
        episode_id: &str,
        limit: &str,
        offset: &str,
    ) -> BgmResult<Vec<u8>> {
        self.revision_listing(&EPISODE_REVISIONS, "episode_id", episode_id, limit, offset)
            .await
    }

    /// Fetches one episode revision. `GET /v0/revisions/episodes/{revision_id}`.
    pub async fn episode_revision_by_id(&self, revision_id: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(&EPISODE_REVISION_BY_ID, &[revision_id], &[], None).await
    }
}
