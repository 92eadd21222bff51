//! When the view layer is allowed to start a search or fetch another page.

use crate::github::rate_limit::cooldown_active;
use crate::store::search::SearchSession;

pub const MIN_QUERY_CHARS: usize = 3;
pub const LOAD_MORE_LOOKAHEAD: usize = 15;

/// The trimmed query, if it is long enough to be worth searching for.
pub fn significant_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (trimmed.chars().count() >= MIN_QUERY_CHARS).then_some(trimmed)
}

pub fn can_search(raw_query: &str, cooldown_until: Option<i64>, now: i64) -> bool {
    significant_query(raw_query).is_some() && !cooldown_active(cooldown_until, now)
}

pub fn can_paginate(session: &SearchSession, cooldown_until: Option<i64>, now: i64) -> bool {
    session.has_more() && !session.is_loading() && !cooldown_active(cooldown_until, now)
}

/// Pull-to-refresh: re-run page 1 of the current query.
pub fn can_refresh(session: &SearchSession, cooldown_until: Option<i64>, now: i64) -> bool {
    !session.is_loading() && can_search(session.query(), cooldown_until, now)
}

/// The explicit "load more" action shown once a cooldown has passed.
pub fn can_load_more_explicitly(
    session: &SearchSession,
    cooldown_until: Option<i64>,
    now: i64,
) -> bool {
    significant_query(session.query()).is_some() && can_paginate(session, cooldown_until, now)
}

/// True once few enough loaded rows remain below the last visible one.
pub fn near_end(last_visible: usize, loaded: usize) -> bool {
    if loaded == 0 {
        return false;
    }
    let remaining = loaded.saturating_sub(last_visible.saturating_add(1));
    remaining <= LOAD_MORE_LOOKAHEAD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn session_with(total: u64, loaded: u64) -> SearchSession {
        let mut session = SearchSession::new(30);
        let req = session.begin_search("octo");
        session.complete(&req, Ok(make_page(make_users(0..loaded), total, 1)));
        session
    }

    #[test]
    fn short_queries_are_not_significant() {
        assert_eq!(significant_query("  oc  "), None);
        assert_eq!(significant_query(""), None);
        assert_eq!(significant_query(" oct "), Some("oct"));
        assert_eq!(significant_query("äöü"), Some("äöü"));
    }

    #[test]
    fn search_blocked_during_cooldown() {
        assert!(can_search("octo", None, 100));
        assert!(!can_search("octo", Some(101), 100));
        assert!(can_search("octo", Some(100), 100));
        assert!(!can_search("oc", None, 100));
    }

    #[test]
    fn pagination_needs_more_results_and_idle_session() {
        assert!(can_paginate(&session_with(100, 30), None, 0));
        assert!(!can_paginate(&session_with(30, 30), None, 0));
        assert!(!can_paginate(&session_with(100, 30), Some(10), 0));

        let mut loading = session_with(100, 30);
        loading.begin_pagination();
        assert!(!can_paginate(&loading, None, 0));
    }

    #[test]
    fn refresh_blocked_while_loading() {
        let session = session_with(100, 30);
        assert!(can_refresh(&session, None, 0));

        let mut loading = session.clone();
        loading.begin_search("octo");
        assert!(!can_refresh(&loading, None, 0));
    }

    #[test]
    fn explicit_load_more_requires_query() {
        let mut session = SearchSession::new(30);
        let req = session.begin_search("oc");
        session.complete(&req, Ok(make_page(make_users(0..5), 50, 1)));
        assert!(!can_load_more_explicitly(&session, None, 0));
        assert!(can_load_more_explicitly(&session_with(50, 5), None, 0));
    }

    #[test]
    fn lookahead_threshold() {
        assert!(!near_end(0, 0));
        assert!(!near_end(13, 30));
        assert!(near_end(14, 30));
        assert!(near_end(29, 30));
        assert!(near_end(5, 10));
    }
}
