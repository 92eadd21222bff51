use crate::error::ApiError;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_QUEUED: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Error,
    Warn,
    #[allow(dead_code)]
    Info,
}

impl NotifyLevel {
    pub fn ttl(&self) -> Duration {
        match self {
            NotifyLevel::Error => Duration::from_secs(8),
            NotifyLevel::Warn => Duration::from_secs(6),
            NotifyLevel::Info => Duration::from_secs(4),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotifyLevel,
    pub created: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created) >= self.level.ttl()
    }
}

/// Transient toasts. Fed from API failure events, never from the client.
#[derive(Debug, Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    pub fn on_api_error(&mut self, err: &ApiError) {
        let level = if err.is_rate_limited() {
            NotifyLevel::Warn
        } else {
            NotifyLevel::Error
        };
        self.push(err.message(), level);
    }

    pub fn push(&mut self, message: &str, level: NotifyLevel) {
        self.push_at(message, level, Instant::now());
    }

    fn push_at(&mut self, message: &str, level: NotifyLevel, created: Instant) {
        if self.queue.len() == MAX_QUEUED {
            self.queue.pop_front();
        }
        self.queue.push_back(Notification {
            message: message.to_string(),
            level,
            created,
        });
    }

    pub fn prune(&mut self, now: Instant) {
        self.queue.retain(|n| !n.is_expired(now));
    }

    /// Most recent live notification.
    pub fn current(&self) -> Option<&Notification> {
        self.queue.back()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
