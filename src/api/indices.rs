use reqwest::Method;

use crate::client::BangumiClient;
use crate::endpoint::Endpoint;
use crate::error::BgmResult;
use crate::types::subject_type_filter;

const CREATE_INDEX: Endpoint = Endpoint::new(Method::POST, "/v0/indices");
const INDEX_BY_ID: Endpoint = Endpoint::new(Method::GET, "/v0/indices/{}");
const EDIT_INDEX: Endpoint = Endpoint::new(Method::PUT, "/v0/indices/{}");
const INDEX_SUBJECTS: Endpoint = Endpoint::new(Method::GET, "/v0/indices/{}/subjects");
const ADD_INDEX_SUBJECT: Endpoint = Endpoint::new(Method::POST, "/v0/indices/{}/subjects");
const EDIT_INDEX_SUBJECT: Endpoint = Endpoint::new(Method::PUT, "/v0/indices/{}/subjects/{}");
const DELETE_INDEX_SUBJECT: Endpoint =
    Endpoint::new(Method::DELETE, "/v0/indices/{}/subjects/{}");
const COLLECT_INDEX: Endpoint = Endpoint::new(Method::POST, "/v0/indices/{}/collect");
const UNCOLLECT_INDEX: Endpoint = Endpoint::new(Method::DELETE, "/v0/indices/{}/collect");

impl BangumiClient {
    /// Creates an empty index for the current user and returns it.
    /// `POST /v0/indices`.
    pub async fn create_index(&self) -> BgmResult<Vec<u8>> {
        self.fetch_body(&CREATE_INDEX, &[], &[], None).await
    }

    /// Fetches one index. `GET /v0/indices/{index_id}`.
    pub async fn index_by_id(&self, index_id: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(&INDEX_BY_ID, &[index_id], &[], None).await
    }

    /// Edits an index's title and description and returns the result.
    /// `PUT /v0/indices/{index_id}`.
    pub async fn edit_index(&self, index_id: &str, body: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(&EDIT_INDEX, &[index_id], &[], Some(body.to_string())).await
    }

    /// Lists the subjects inside an index. `GET /v0/indices/{index_id}/subjects`.
    ///
    /// `subject_type` takes the Chinese category names; any other value lists
    /// every type.
    pub async fn index_subjects(
        &self,
        index_id: &str,
        subject_type: &str,
        limit: &str,
        offset: &str,
    ) -> BgmResult<Vec<u8>> {
        self.fetch_body(
            &INDEX_SUBJECTS,
            &[index_id],
            &[
                ("type", subject_type_filter(subject_type).to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
            None,
        )
        .await
    }

    /// Adds a subject to an index. `POST /v0/indices/{index_id}/subjects`.
    pub async fn add_index_subject(&self, index_id: &str, body: &str) -> BgmResult<()> {
        self.fetch_success(&ADD_INDEX_SUBJECT, &[index_id], &[], Some(body.to_string()))
            .await
    }

    /// Edits a subject inside an index, creating it when absent.
    /// `PUT /v0/indices/{index_id}/subjects/{subject_id}`.
    pub async fn edit_index_subject(
        &self,
        index_id: &str,
        subject_id: &str,
        body: &str,
    ) -> BgmResult<()> {
        self.fetch_success(
            &EDIT_INDEX_SUBJECT,
            &[index_id, subject_id],
            &[],
            Some(body.to_string()),
        )
        .await
    }

    /// Removes a subject from an index.
    /// `DELETE /v0/indices/{index_id}/subjects/{subject_id}`.
    pub async fn delete_index_subject(&self, index_id: &str, subject_id: &str) -> BgmResult<()> {
        self.fetch_success(&DELETE_INDEX_SUBJECT, &[index_id, subject_id], &[], None)
            .await
    }

    /// Collects an index for the current user.
    /// `POST /v0/indices/{index_id}/collect`.
    pub async fn collect_index(&self, index_id: &str) -> BgmResult<()> {
        self.fetch_success(&COLLECT_INDEX, &[index_id], &[], None).await
    }

    /// Removes an index from the current user's collection.
    /// `DELETE /v0/indices/{index_id}/collect`.
    pub async fn uncollect_index(&self, index_id: &str) -> BgmResult<()> {
        self.fetch_success(&UNCOLLECT_INDEX, &[index_id], &[], None).await
    }
}
