use serde::{Deserialize, Serialize};

/// A GitHub account. Search hits only carry the first four fields; the
/// per-user endpoint fills in the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

/// Body of `GET /search/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchUsersResponse {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultPage {
    pub total_count: u64,
    pub incomplete: bool,
    pub items: Vec<User>,
    pub next_page: u32,
}

impl SearchResultPage {
    pub fn from_response(response: SearchUsersResponse, requested_page: u32) -> Self {
        Self {
            total_count: response.total_count,
            incomplete: response.incomplete_results,
            items: response.items,
            next_page: requested_page.saturating_add(1),
        }
    }
}
