use crate::error::ApiError;
use http::HeaderMap;

pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";
pub const RESET_HEADER: &str = "x-ratelimit-reset";

/// Human wait time: `1h 2m 3s`, `4m 5s`, `6s`, or `a moment` when nothing is left.
pub fn format_wait_time(wait_seconds: i64) -> String {
    if wait_seconds <= 0 {
        return "a moment".to_string();
    }

    let hours = wait_seconds / 3600;
    let minutes = (wait_seconds % 3600) / 60;
    let seconds = wait_seconds % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 || hours > 0 {
        parts.push(format!("{minutes}m"));
    }
    parts.push(format!("{seconds}s"));
    parts.join(" ")
}

pub fn rate_limited_message(wait_seconds: i64) -> String {
    format!(
        "Rate limit reached. Try again in {}.",
        format_wait_time(wait_seconds)
    )
}

/// Returns a `RateLimited` error when the response says no requests remain.
pub fn rate_limit_error(headers: &HeaderMap, now: i64) -> Option<ApiError> {
    let remaining = header_str(headers, REMAINING_HEADER)?;
    if remaining.trim() != "0" {
        return None;
    }

    let reset = header_str(headers, RESET_HEADER)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|secs| secs.is_finite());

    let error = match reset {
        Some(reset) => {
            let reset_at = reset.floor() as i64;
            ApiError::RateLimited {
                message: rate_limited_message(reset_at.saturating_sub(now).max(0)),
                reset_at: Some(reset_at),
            }
        }
        None => ApiError::RateLimited {
            message: "Rate limit reached. Please try again later.".to_string(),
            reset_at: None,
        },
    };
    Some(error)
}

/// Classifies a non-2xx response.
pub fn classify_failure(headers: &HeaderMap, now: i64, failed_message: &str) -> ApiError {
    rate_limit_error(headers, now).unwrap_or_else(|| ApiError::request_failed(failed_message))
}

pub fn cooldown_active(reset_at: Option<i64>, now: i64) -> bool {
    reset_at.is_some_and(|reset| now < reset)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn non_positive_wait_is_a_moment() {
        for secs in [0, -1, -3600] {
            assert_eq!(format_wait_time(secs), "a moment");
        }
    }

    #[test]
    fn wait_time_omits_leading_zero_units() {
        assert_eq!(format_wait_time(90), "1m 30s");
        assert_eq!(format_wait_time(65), "1m 5s");
        assert_eq!(format_wait_time(5), "5s");
        assert_eq!(format_wait_time(60), "1m 0s");
    }

    #[test]
    fn wait_time_keeps_zero_minutes_under_hours() {
        assert_eq!(format_wait_time(3600), "1h 0m 0s");
        assert_eq!(format_wait_time(3605), "1h 0m 5s");
        assert_eq!(format_wait_time(7322), "2h 2m 2s");
    }

    #[test]
    fn exhausted_quota_with_reset_is_rate_limited() {
        let now = 1_577_836_800;
        let h = headers(&[(REMAINING_HEADER, "0"), (RESET_HEADER, "1577836890")]);

        let err = classify_failure(&h, now, "Failed to fetch users");
        assert_eq!(
            err,
            ApiError::RateLimited {
                message: "Rate limit reached. Try again in 1m 30s.".to_string(),
                reset_at: Some(1_577_836_890),
            }
        );
    }

    #[test]
    fn reset_in_the_past_waits_a_moment() {
        let h = headers(&[(REMAINING_HEADER, "0"), (RESET_HEADER, "100")]);
        let err = classify_failure(&h, 200, "Failed to fetch users");
        assert_eq!(err.message(), "Rate limit reached. Try again in a moment.");
        assert_eq!(err.reset_at(), Some(100));
    }

    #[test]
    fn extreme_reset_values_do_not_overflow() {
        let past = headers(&[(REMAINING_HEADER, "0"), (RESET_HEADER, "-1e300")]);
        let err = classify_failure(&past, 1_577_836_800, "Failed to fetch users");
        assert_eq!(err.reset_at(), Some(i64::MIN));
        assert_eq!(err.message(), "Rate limit reached. Try again in a moment.");

        let future = headers(&[(REMAINING_HEADER, "0"), (RESET_HEADER, "1e300")]);
        let err = classify_failure(&future, -1_577_836_800, "Failed to fetch users");
        assert_eq!(err.reset_at(), Some(i64::MAX));
        assert!(err.message().starts_with("Rate limit reached. Try again in "));
        assert!(cooldown_active(err.reset_at(), 0));
    }

    #[test]
    fn unparsable_reset_gives_generic_message() {
        let h = headers(&[(REMAINING_HEADER, "0"), (RESET_HEADER, "soon")]);
        let err = classify_failure(&h, 0, "Failed to fetch user");
        assert!(err.is_rate_limited());
        assert_eq!(err.reset_at(), None);
        assert_eq!(err.message(), "Rate limit reached. Please try again later.");

        let missing = headers(&[(REMAINING_HEADER, "0")]);
        assert_eq!(classify_failure(&missing, 0, "x").reset_at(), None);
    }

    #[test]
    fn remaining_quota_is_plain_failure() {
        let h = headers(&[(REMAINING_HEADER, "12"), (RESET_HEADER, "999")]);
        assert_eq!(
            classify_failure(&h, 0, "Failed to fetch user"),
            ApiError::request_failed("Failed to fetch user")
        );
        assert_eq!(
            classify_failure(&HeaderMap::new(), 0, "Failed to fetch users"),
            ApiError::request_failed("Failed to fetch users")
        );
    }

    #[test]
    fn cooldown_only_before_reset() {
        assert!(!cooldown_active(None, 10));
        assert!(cooldown_active(Some(11), 10));
        assert!(!cooldown_active(Some(10), 10));
    }
}
