use reqwest::Method;

use crate::client::BangumiClient;
use crate::endpoint::Endpoint;
use crate::error::BgmResult;
use crate::types::{collection_type_filter, episode_type_filter, subject_type_code};

const USER_COLLECTIONS: Endpoint = Endpoint::new(Method::GET, "/v0/users/{}/collections");
const USER_COLLECTION_BY_SUBJECT: Endpoint =
    Endpoint::new(Method::GET, "/v0/users/{}/collections/{}");
const UPSERT_SUBJECT_COLLECTION: Endpoint =
    Endpoint::new(Method::POST, "/v0/users/-/collections/{}");
const PATCH_SUBJECT_COLLECTION: Endpoint =
    Endpoint::new(Method::PATCH, "/v0/users/-/collections/{}");
const SUBJECT_EPISODE_COLLECTIONS: Endpoint =
    Endpoint::new(Method::GET, "/v0/users/-/collections/{}/episodes");
const PATCH_SUBJECT_EPISODE_COLLECTIONS: Endpoint =
    Endpoint::new(Method::PATCH, "/v0/users/-/collections/{}/episodes");
const EPISODE_COLLECTION_BY_ID: Endpoint =
    Endpoint::new(Method::GET, "/v0/users/-/collections/-/episodes/{}");
const UPDATE_EPISODE_COLLECTION: Endpoint =
    Endpoint::new(Method::PUT, "/v0/users/-/collections/-/episodes/{}");
const USER_CHARACTER_COLLECTIONS: Endpoint =
    Endpoint::new(Method::GET, "/v0/users/{}/collections/-/characters");
const USER_CHARACTER_COLLECTION_BY_ID: Endpoint =
    Endpoint::new(Method::GET, "/v0/users/{}/collections/-/characters/{}");
const USER_PERSON_COLLECTIONS: Endpoint =
    Endpoint::new(Method::GET, "/v0/users/{}/collections/-/persons");
const USER_PERSON_COLLECTION_BY_ID: Endpoint =
    Endpoint::new(Method::GET, "/v0/users/{}/collections/-/persons/{}");

impl BangumiClient {
    /// Lists a user's subject collections.
    /// `GET /v0/users/{username}/collections`.
    ///
    /// `subject_type` must be one of the recognized category names
    /// (书籍/动漫/音乐/游戏/三次元); this is the one place an unknown name is
    /// an [`InvalidParameter`](crate::BgmError::InvalidParameter) error
    /// instead of a widened search. `collection_type` (想看/看过/在看/搁置/
    /// 抛弃) falls back to "all statuses" for unknown names.
    pub async fn user_collections(
        &self,
        username: &str,
        subject_type: &str,
        collection_type: &str,
        limit: &str,
        offset: &str,
    ) -> BgmResult<Vec<u8>> {
        let subject_code = subject_type_code(subject_type)?;
        self.fetch_body(
            &USER_COLLECTIONS,
            &[username],
            &[
                ("subject_type", subject_code.to_string()),
                ("type", collection_type_filter(collection_type).to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
            None,
        )
        .await
    }

    /// Fetches one collection entry; private entries need a matching token.
    /// `GET /v0/users/{username}/collections/{subject_id}`.
    pub async fn user_collection_by_subject(
        &self,
        username: &str,
        subject_id: &str,
    ) -> BgmResult<Vec<u8>> {
        self.fetch_body(&USER_COLLECTION_BY_SUBJECT, &[username, subject_id], &[], None)
            .await
    }

    /// Creates or updates the current user's collection entry for a subject.
    /// `POST /v0/users/-/collections/{subject_id}`.
    pub async fn upsert_subject_collection(&self, subject_id: &str, body: &str) -> BgmResult<()> {
        self.fetch_success(
            &UPSERT_SUBJECT_COLLECTION,
            &[subject_id],
            &[],
            Some(body.to_string()),
        )
        .await
    }

    /// Partially updates the current user's collection entry for a subject.
    /// `PATCH /v0/users/-/collections/{subject_id}`.
    pub async fn patch_subject_collection(&self, subject_id: &str, body: &str) -> BgmResult<()> {
        self.fetch_success(
            &PATCH_SUBJECT_COLLECTION,
            &[subject_id],
            &[],
            Some(body.to_string()),
        )
        .await
    }

    /// Lists the current user's episode collections for a subject.
    /// `GET /v0/users/-/collections/{subject_id}/episodes`.
    pub async fn subject_episode_collections(
        &self,
        subject_id: &str,
        episode_type: &str,
        limit: &str,
        offset: &str,
    ) -> BgmResult<Vec<u8>> {
        self.fetch_body(
            &SUBJECT_EPISODE_COLLECTIONS,
            &[subject_id],
            &[
                ("episode_type", episode_type_filter(episode_type).to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
            None,
        )
        .await
    }

    /// Batch-updates episode collection states for a subject; the remote
    /// recomputes the subject's completion from them.
    /// `PATCH /v0/users/-/collections/{subject_id}/episodes`.
    pub async fn patch_subject_episode_collections(
        &self,
        subject_id: &str,
        body: &str,
    ) -> BgmResult<()> {
        self.fetch_success(
            &PATCH_SUBJECT_EPISODE_COLLECTIONS,
            &[subject_id],
            &[],
            Some(body.to_string()),
        )
        .await
    }

    /// Fetches the current user's collection state for one episode.
    /// `GET /v0/users/-/collections/-/episodes/{episode_id}`.
    pub async fn episode_collection_by_id(&self, episode_id: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(&EPISODE_COLLECTION_BY_ID, &[episode_id], &[], None).await
    }

    /// Updates the current user's collection state for one episode.
    /// `PUT /v0/users/-/collections/-/episodes/{episode_id}`.
    pub async fn update_episode_collection(&self, episode_id: &str, body: &str) -> BgmResult<()> {
        self.fetch_success(
            &UPDATE_EPISODE_COLLECTION,
            &[episode_id],
            &[],
            Some(body.to_string()),
        )
        .await
    }

    /// Lists a user's character collections.
    /// `GET /v0/users/{username}/collections/-/characters`.
    pub async fn user_character_collections(&self, username: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(&USER_CHARACTER_COLLECTIONS, &[username], &[], None).await
    }

    /// Fetches one of a user's character collections.
    /// `GET /v0/users/{username}/collections/-/characters/{character_id}`.
    pub async fn user_character_collection_by_id(
        &self,
        username: &str,
        character_id: &str,
    ) -> BgmResult<Vec<u8>> {
        self.fetch_body(
            &USER_CHARACTER_COLLECTION_BY_ID,
            &[username, character_id],
            &[],
            None,
        )
        .await
    }

    /// Lists a user's person collections.
    /// `GET /v0/users/{username}/collections/-/persons`.
    pub async fn user_person_collections(&self, username: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(&USER_PERSON_COLLECTIONS, &[username], &[], None).await
    }

    /// Fetches one of a user's person collections.
    /// `GET /v0/users/{username}/collections/-/persons/{person_id}`.
    pub async fn user_person_collection_by_id(
        &self,
        username: &str,
        person_id: &str,
    ) -> BgmResult<Vec<u8>> {
        self.fetch_body(&USER_PERSON_COLLECTION_BY_ID, &[username, person_id], &[], None)
            .await
    }
}
