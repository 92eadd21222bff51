#![cfg(test)]

use crate::error::Result;
use crate::github::types::{SearchResultPage, User};
use crate::persist::FavouritesSlot;
use std::cell::RefCell;
use std::rc::Rc;

pub fn make_user(id: u64, login: &str) -> User {
    User {
        id,
        login: login.to_string(),
        avatar_url: format!("https://avatars.example.com/u/{id}"),
        html_url: format!("https://github.com/{login}"),
        name: None,
        bio: None,
        followers: None,
        following: None,
        public_repos: None,
        starred: None,
    }
}

pub fn make_users(range: std::ops::Range<u64>) -> Vec<User> {
    range.map(|i| make_user(i, &format!("user{i}"))).collect()
}

pub fn make_page(items: Vec<User>, total_count: u64, requested_page: u32) -> SearchResultPage {
    SearchResultPage {
        total_count,
        incomplete: false,
        items,
        next_page: requested_page + 1,
    }
}

/// In-memory slot; clones share the same content so tests can inspect writes.
#[derive(Clone, Default)]
pub struct MemorySlot {
    content: Rc<RefCell<Option<String>>>,
    pub writes: Rc<RefCell<usize>>,
}

impl MemorySlot {
    pub fn with_content(raw: &str) -> Self {
        let slot = Self::default();
        *slot.content.borrow_mut() = Some(raw.to_string());
        slot
    }

    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl FavouritesSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.content()
    }

    fn write(&mut self, content: &str) -> Result<()> {
        *self.content.borrow_mut() = Some(content.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
