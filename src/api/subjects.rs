use reqwest::Method;

use crate::client::BangumiClient;
use crate::endpoint::Endpoint;
use crate::error::BgmResult;
use crate::types::subject_type_filter;

const SEARCH_SUBJECTS: Endpoint = Endpoint::new(Method::POST, "/v0/search/subjects");
const SUBJECT_BY_ID: Endpoint = Endpoint::new(Method::GET, "/v0/subjects/{}");
const SEARCH_SUBJECTS_LEGACY: Endpoint = Endpoint::new(Method::GET, "/search/subject/{}");
const CALENDAR: Endpoint = Endpoint::new(Method::GET, "/calendar");

impl BangumiClient {
    /// Searches subjects by keyword. `POST /v0/search/subjects`.
    ///
    /// `body` is the pre-encoded search payload (keyword, sort, filter) and
    /// is forwarded as-is.
    pub async fn search_subjects(&self, limit: &str, offset: &str, body: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(
            &SEARCH_SUBJECTS,
            &[],
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
            Some(body.to_string()),
        )
        .await
    }

    /// Fetches one subject. `GET /v0/subjects/{subject_id}`.
    pub async fn subject_by_id(&self, subject_id: &str) -> BgmResult<Vec<u8>> {
        self.fetch_body(&SUBJECT_BY_ID, &[subject_id], &[], None).await
    }

    /// Keyword search against the legacy, non-versioned API.
    /// `GET /search/subject/{keyword}`.
    ///
    /// `subject_type` takes the Chinese category names (书籍/动漫/音乐/游戏/
    /// 三次元); any other value searches across all types.
    /// `response_group` is one of small/medium/large.
    pub async fn search_subjects_legacy(
        &self,
        keyword: &str,
        subject_type: &str,
        response_group: &str,
        start: &str,
        max_results: &str,
    ) -> BgmResult<Vec<u8>> {
        self.fetch_body(
            &SEARCH_SUBJECTS_LEGACY,
            &[keyword],
            &[
                ("type", subject_type_filter(subject_type).to_string()),
                ("responseGroup", response_group.to_string()),
                ("start", start.to_string()),
                ("max_results", max_results.to_string()),
            ],
            None,
        )
        .await
    }

    /// Fetches the weekly broadcast calendar. `GET /calendar`.
    pub async fn calendar(&self) -> BgmResult<Vec<u8>> {
        self.fetch_body(&CALENDAR, &[], &[], None).await
    }
}
