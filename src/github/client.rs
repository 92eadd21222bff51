use crate::error::{ApiError, OctoscoutError, Result};
use crate::github::rate_limit;
use crate::github::types::{SearchResultPage, SearchUsersResponse, User};
use http::header::{HeaderName, ACCEPT};
use octocrab::Octocrab;
use serde::de::DeserializeOwned;

const ACCEPT_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";

pub const SEARCH_FAILED: &str = "Failed to fetch users";
pub const USER_FAILED: &str = "Failed to fetch user";

/// Source of the current unix time in seconds.
pub type Clock = fn() -> i64;

pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Read-only access to the user search and user lookup endpoints.
///
/// Every failure comes back as an [`ApiError`]; this type never notifies the
/// user on its own.
#[derive(Clone)]
pub struct UsersClient {
    octo: Octocrab,
    clock: Clock,
}

impl UsersClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let octo = Octocrab::builder()
            .base_uri(base_url)
            .map_err(|e| OctoscoutError::GitHub(e.to_string()))?
            .add_header(ACCEPT, ACCEPT_JSON.to_string())
            .add_header(
                HeaderName::from_static(API_VERSION_HEADER),
                API_VERSION.to_string(),
            )
            .build()
            .map_err(|e| OctoscoutError::GitHub(e.to_string()))?;

        Ok(Self {
            octo,
            clock: unix_now,
        })
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub async fn search_users(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> std::result::Result<SearchResultPage, ApiError> {
        let params = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("q", query)
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &page_size.to_string())
            .finish();
        let route = format!("/search/users?{params}");

        let response: SearchUsersResponse = self.get_json(&route, SEARCH_FAILED).await?;
        Ok(SearchResultPage::from_response(response, page))
    }

    pub async fn get_user(&self, handle: &str) -> std::result::Result<User, ApiError> {
        let handle: String = url::form_urlencoded::byte_serialize(handle.as_bytes()).collect();
        let route = format!("/users/{handle}");
        self.get_json(&route, USER_FAILED).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        route: &str,
        failed_message: &str,
    ) -> std::result::Result<T, ApiError> {
        log::debug!("GET {route}");

        let response = self.octo._get(route).await.map_err(|e| {
            log::warn!("GET {route} failed: {e}");
            ApiError::request_failed(failed_message)
        })?;

        let status = response.status();
        if !status.is_success() {
            let err =
                rate_limit::classify_failure(response.headers(), (self.clock)(), failed_message);
            log::warn!("GET {route} returned {status}: {err}");
            return Err(err);
        }

        let body = self.octo.body_to_string(response).await.map_err(|e| {
            log::warn!("GET {route}: reading body failed: {e}");
            ApiError::request_failed(failed_message)
        })?;

        serde_json::from_str(&body).map_err(|e| {
            log::warn!("GET {route}: unexpected body: {e}");
            ApiError::request_failed(failed_message)
        })
    }
}
