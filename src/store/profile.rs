use crate::error::ApiError;
use crate::github::types::User;
use crate::store::{Completion, RequestStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRequest {
    pub generation: u64,
    pub handle: String,
}

/// The profile currently on display. Each lookup replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct SelectedProfile {
    handle: Option<String>,
    user: Option<User>,
    status: RequestStatus,
    error: Option<ApiError>,
    rate_limit_reset_at: Option<i64>,
    generation: u64,
}

impl SelectedProfile {
    pub fn begin_fetch(&mut self, handle: &str) -> ProfileRequest {
        let generation = self.generation + 1;
        *self = SelectedProfile {
            handle: Some(handle.to_string()),
            status: RequestStatus::Loading,
            generation,
            ..SelectedProfile::default()
        };
        log::debug!("profile #{generation} handle={handle:?}");

        ProfileRequest {
            generation,
            handle: handle.to_string(),
        }
    }

    pub fn complete(
        &mut self,
        request: &ProfileRequest,
        result: Result<User, ApiError>,
    ) -> Completion {
        if request.generation != self.generation {
            log::debug!(
                "discarding stale profile #{} for {:?}",
                request.generation,
                request.handle
            );
            return Completion::Stale;
        }

        match result {
            Ok(user) => {
                self.user = Some(user);
                self.status = RequestStatus::Succeeded;
            }
            Err(err) => {
                self.status = RequestStatus::Failed;
                self.rate_limit_reset_at = err.reset_at();
                self.error = Some(err);
            }
        }
        Completion::Applied
    }

    pub fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
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
