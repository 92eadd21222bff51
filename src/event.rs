use crate::error::ApiError;
use crate::github::types::{SearchResultPage, User};
use crate::store::profile::ProfileRequest;
use crate::store::search::SearchRequest;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// One second of rate-limit countdown has passed.
    Tick,
    /// The query has been quiet for the debounce window.
    SearchDue(String),
    SearchFinished {
        request: SearchRequest,
        result: Result<SearchResultPage, ApiError>,
    },
    ProfileFinished {
        request: ProfileRequest,
        result: Result<User, ApiError>,
    },
}
