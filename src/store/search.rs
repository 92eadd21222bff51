use crate::error::ApiError;
use crate::github::types::{SearchResultPage, User};
use crate::store::{Completion, RequestStatus};

/// Ticket for one outbound search. Completions carrying an outdated
/// generation are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: String,
    pub page: u32,
    pub page_size: u32,
}

/// The single live search: query, cursor, accumulated results and status.
#[derive(Debug, Clone)]
pub struct SearchSession {
    query: String,
    page: u32,
    page_size: u32,
    users: Vec<User>,
    total_count: Option<u64>,
    incomplete: Option<bool>,
    has_more: bool,
    status: RequestStatus,
    error: Option<ApiError>,
    rate_limit_reset_at: Option<i64>,
    generation: u64,
}

impl SearchSession {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size,
            users: Vec::new(),
            total_count: None,
            incomplete: None,
            has_more: false,
            status: RequestStatus::Idle,
            error: None,
            rate_limit_reset_at: None,
            generation: 0,
        }
    }

    /// Starts a fresh search (page 1). Prior results are dropped right away.
    pub fn begin_search(&mut self, query: &str) -> SearchRequest {
        self.begin(query, 1)
    }

    /// Requests the next page of the current query, keeping what is loaded.
    pub fn begin_pagination(&mut self) -> SearchRequest {
        let query = self.query.clone();
        let page = self.page.max(1);
        self.begin(&query, page)
    }

    pub fn begin(&mut self, query: &str, page: u32) -> SearchRequest {
        self.generation += 1;
        self.status = RequestStatus::Loading;
        self.error = None;
        self.rate_limit_reset_at = None;
        self.query = query.to_string();

        if page <= 1 {
            self.users.clear();
            self.total_count = None;
            self.incomplete = None;
            self.has_more = false;
            self.page = 1;
        }

        log::debug!(
            "search #{} query={:?} page={}",
            self.generation,
            self.query,
            page.max(1)
        );

        SearchRequest {
            generation: self.generation,
            query: self.query.clone(),
            page: page.max(1),
            page_size: self.page_size,
        }
    }

    pub fn complete(
        &mut self,
        request: &SearchRequest,
        result: Result<SearchResultPage, ApiError>,
    ) -> Completion {
        if request.generation != self.generation {
            log::debug!(
                "discarding stale search #{} (current #{})",
                request.generation,
                self.generation
            );
            return Completion::Stale;
        }

        match result {
            Ok(page) => {
                if request.page > 1 {
                    self.users.extend(page.items);
                } else {
                    self.users = page.items;
                }
                self.total_count = Some(page.total_count);
                self.incomplete = Some(page.incomplete);
                self.page = page.next_page;
                self.has_more = page.total_count > self.users.len() as u64;
                self.status = RequestStatus::Succeeded;
                self.query = request.query.clone();
            }
            Err(err) => {
                self.status = RequestStatus::Failed;
                self.rate_limit_reset_at = err.reset_at();
                self.error = Some(err);
            }
        }
        Completion::Applied
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn incomplete(&self) -> Option<bool> {
        self.incomplete
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn rate_limit_reset_at(&self) -> Option<i64> {
        self.rate_limit_reset_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn loaded_session() -> SearchSession {
        let mut session = SearchSession::new(30);
        let req = session.begin_search("octo");
        session.complete(&req, Ok(make_page(make_users(0..30), 100, 1)));
        session
    }

    #[test]
    fn new_session_is_idle_and_empty() {
        let session = SearchSession::new(30);
        assert_eq!(session.status(), RequestStatus::Idle);
        assert!(session.users().is_empty());
        assert_eq!(session.total_count(), None);
        assert!(!session.has_more());
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn begin_search_discards_prior_results() {
        let mut session = loaded_session();
        assert_eq!(session.users().len(), 30);
        assert_eq!(session.page(), 2);

        let req = session.begin_search("hubot");
        assert_eq!(req.page, 1);
        assert_eq!(session.status(), RequestStatus::Loading);
        assert!(session.users().is_empty());
        assert_eq!(session.total_count(), None);
        assert_eq!(session.incomplete(), None);
        assert!(!session.has_more());
        assert_eq!(session.page(), 1);
        assert_eq!(session.query(), "hubot");
    }

    #[test]
    fn begin_pagination_keeps_prior_results() {
        let mut session = loaded_session();

        let req = session.begin_pagination();
        assert_eq!(req.page, 2);
        assert_eq!(req.query, "octo");
        assert!(session.is_loading());
        assert_eq!(session.users().len(), 30);
        assert_eq!(session.total_count(), Some(100));
        assert!(session.has_more());
        assert_eq!(session.page(), 2);
    }

    #[test]
    fn begin_clears_error_and_cooldown() {
        let mut session = SearchSession::new(30);
        let req = session.begin_search("octo");
        session.complete(
            &req,
            Err(ApiError::RateLimited {
                message: "wait".to_string(),
                reset_at: Some(123),
            }),
        );
        assert_eq!(session.rate_limit_reset_at(), Some(123));

        session.begin_pagination();
        assert_eq!(session.error(), None);
        assert_eq!(session.rate_limit_reset_at(), None);
    }

    #[test]
    fn pagination_success_appends_and_advances_cursor() {
        let mut session = loaded_session();
        let req = session.begin_pagination();
        session.complete(&req, Ok(make_page(make_users(30..60), 100, 2)));

        assert_eq!(session.users().len(), 60);
        assert_eq!(session.users()[30].login, "user30");
        assert_eq!(session.page(), 3);
        assert!(session.has_more());
        assert_eq!(session.status(), RequestStatus::Succeeded);
    }

    #[test]
    fn has_more_tracks_total_count() {
        let mut session = SearchSession::new(30);
        let req = session.begin_search("octo");
        session.complete(&req, Ok(make_page(make_users(0..3), 3, 1)));
        assert!(!session.has_more());

        let req = session.begin_search("octo");
        session.complete(&req, Ok(make_page(make_users(0..3), 4, 1)));
        assert!(session.has_more());
    }

    #[test]
    fn rate_limited_failure_sets_cooldown() {
        let mut session = loaded_session();
        let req = session.begin_pagination();
        session.complete(
            &req,
            Err(ApiError::RateLimited {
                message: "Rate limit reached. Try again in 5s.".to_string(),
                reset_at: Some(1_000),
            }),
        );

        assert_eq!(session.status(), RequestStatus::Failed);
        assert_eq!(session.rate_limit_reset_at(), Some(1_000));
        assert_eq!(session.users().len(), 30);
        assert!(session.error().unwrap().is_rate_limited());
    }

    #[test]
    fn request_failure_leaves_cooldown_absent() {
        let mut session = SearchSession::new(30);
        let req = session.begin_search("octo");
        session.complete(&req, Err(ApiError::request_failed("Failed to fetch users")));

        assert_eq!(session.status(), RequestStatus::Failed);
        assert_eq!(session.rate_limit_reset_at(), None);
        assert_eq!(session.error().unwrap().message(), "Failed to fetch users");
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut session = SearchSession::new(30);
        let first = session.begin_search("oct");
        let second = session.begin_search("octo");

        let outcome = session.complete(&first, Ok(make_page(make_users(0..5), 5, 1)));
        assert_eq!(outcome, Completion::Stale);
        assert!(session.is_loading());
        assert!(session.users().is_empty());

        let outcome = session.complete(&second, Ok(make_page(make_users(10..12), 2, 1)));
        assert_eq!(outcome, Completion::Applied);
        assert_eq!(session.users().len(), 2);
        assert_eq!(session.query(), "octo");
    }

    #[test]
    fn pagination_superseded_by_new_search_is_dropped() {
        let mut session = loaded_session();
        let paging = session.begin_pagination();
        let fresh = session.begin_search("hubot");

        assert_eq!(
            session.complete(&paging, Ok(make_page(make_users(30..60), 100, 2))),
            Completion::Stale
        );
        assert!(session.users().is_empty());

        session.complete(&fresh, Err(ApiError::request_failed("Failed to fetch users")));
        assert_eq!(session.status(), RequestStatus::Failed);
    }
}
