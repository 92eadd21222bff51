pub mod favourites;
pub mod profile;
pub mod search;

use crate::error::ApiError;
use crate::github::types::{SearchResultPage, User};
use favourites::FavouritesStore;
use profile::{ProfileRequest, SelectedProfile};
use search::{SearchRequest, SearchSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Whether a completion was applied or dropped as outdated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo<'a> {
    pub total_count: Option<u64>,
    pub page: u32,
    pub has_more: bool,
    pub query: &'a str,
}

/// Owns all shared state. One instance lives for the whole process and is
/// handed to the view layer by reference; mutation happens only through the
/// transitions below.
pub struct Store {
    search: SearchSession,
    profile: SelectedProfile,
    favourites: FavouritesStore,
}

impl Store {
    pub fn new(page_size: u32, favourites: FavouritesStore) -> Self {
        Self {
            search: SearchSession::new(page_size),
            profile: SelectedProfile::default(),
            favourites,
        }
    }

    pub fn begin_search(&mut self, query: &str) -> SearchRequest {
        self.search.begin_search(query)
    }

    pub fn begin_pagination(&mut self) -> SearchRequest {
        self.search.begin_pagination()
    }

    pub fn finish_search(
        &mut self,
        request: &SearchRequest,
        result: Result<SearchResultPage, ApiError>,
    ) -> Completion {
        self.search.complete(request, result)
    }

    pub fn fetch_profile(&mut self, handle: &str) -> ProfileRequest {
        self.profile.begin_fetch(handle)
    }

    pub fn finish_profile(
        &mut self,
        request: &ProfileRequest,
        result: Result<User, ApiError>,
    ) -> Completion {
        self.profile.complete(request, result)
    }

    pub fn toggle_favourite(&mut self, user: &User) {
        self.favourites.toggle(user);
    }

    pub fn search(&self) -> &SearchSession {
        &self.search
    }

    pub fn profile(&self) -> &SelectedProfile {
        &self.profile
    }

    pub fn users(&self) -> &[User] {
        self.search.users()
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.profile.user()
    }

    pub fn favourites(&self) -> &[User] {
        self.favourites.users()
    }

    pub fn favourites_count(&self) -> usize {
        self.favourites.len()
    }

    pub fn is_favourite(&self, login: Option<&str>) -> bool {
        self.favourites.is_favourite(login)
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_loading()
    }

    pub fn is_profile_loading(&self) -> bool {
        self.profile.is_loading()
    }

    pub fn pagination(&self) -> PaginationInfo<'_> {
        PaginationInfo {
            total_count: self.search.total_count(),
            page: self.search.page(),
            has_more: self.search.has_more(),
            query: self.search.query(),
        }
    }

    /// Reset time of the search session's last rate-limited failure.
    pub fn rate_limit_reset_at(&self) -> Option<i64> {
        self.search.rate_limit_reset_at()
    }

    /// Latest reset across the search and profile lifecycles.
    pub fn cooldown_until(&self) -> Option<i64> {
        match (
            self.search.rate_limit_reset_at(),
            self.profile.rate_limit_reset_at(),
        ) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }
}
