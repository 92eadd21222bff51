use crate::github::types::User;
use crate::persist::{self, FavouritesSlot};

/// Starred users in insertion order, keyed by login and written through to
/// the durable slot on every change.
pub struct FavouritesStore {
    users: Vec<User>,
    slot: Box<dyn FavouritesSlot>,
}

impl FavouritesStore {
    pub fn load(slot: Box<dyn FavouritesSlot>) -> Self {
        let users = persist::load_favourites(slot.as_ref());
        Self { users, slot }
    }

    /// Removes the user if present by login, otherwise appends a starred copy.
    pub fn toggle(&mut self, user: &User) {
        if let Some(idx) = self.users.iter().position(|u| u.login == user.login) {
            self.users.remove(idx);
            log::info!("unstarred {}", user.login);
        } else {
            let mut starred = user.clone();
            starred.starred = Some(true);
            self.users.push(starred);
            log::info!("starred {}", user.login);
        }
        persist::save_favourites(self.slot.as_mut(), &self.users);
    }

    pub fn is_favourite(&self, login: Option<&str>) -> bool {
        match login {
            Some(login) => self.users.iter().any(|u| u.login == login),
            None => false,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn store_with(slot: &MemorySlot) -> FavouritesStore {
        FavouritesStore::load(Box::new(slot.clone()))
    }

    #[test]
    fn toggle_adds_starred_copy_and_persists() {
        let slot = MemorySlot::default();
        let mut store = store_with(&slot);

        store.toggle(&make_user(1, "octo"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.users()[0].starred, Some(true));
        assert!(store.is_favourite(Some("octo")));

        let stored = persist::parse_favourites(&slot.content().unwrap()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].login, "octo");
    }

    #[test]
    fn toggling_twice_restores_membership_and_storage() {
        let slot = MemorySlot::default();
        let mut store = store_with(&slot);
        store.toggle(&make_user(1, "hubot"));
        let before = slot.content();

        let user = make_user(2, "octo");
        store.toggle(&user);
        store.toggle(&user);

        assert!(!store.is_favourite(Some("octo")));
        assert_eq!(store.len(), 1);
        assert_eq!(slot.content(), before);
        assert_eq!(*slot.writes.borrow(), 3);
    }

    #[test]
    fn same_login_never_duplicates() {
        let slot = MemorySlot::default();
        let mut store = store_with(&slot);
        store.toggle(&make_user(1, "octo"));

        let mut other_snapshot = make_user(1, "octo");
        other_snapshot.name = Some("Octo".to_string());
        store.toggle(&other_snapshot);
        assert!(store.users().is_empty());
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut store = store_with(&MemorySlot::default());
        for login in ["c", "a", "b"] {
            store.toggle(&make_user(0, login));
        }
        store.toggle(&make_user(0, "a"));
        let logins: Vec<_> = store.users().iter().map(|u| u.login.as_str()).collect();
        assert_eq!(logins, vec!["c", "b"]);
    }

    #[test]
    fn absent_login_is_never_favourite() {
        let mut store = store_with(&MemorySlot::default());
        store.toggle(&make_user(1, "octo"));
        assert!(!store.is_favourite(None));
        assert!(!store.is_favourite(Some("hubot")));
    }

    #[test]
    fn corrupt_storage_loads_empty() {
        let store = store_with(&MemorySlot::with_content("[{\"id\":"));
        assert!(store.users().is_empty());

        let store = store_with(&MemorySlot::default());
        assert!(store.users().is_empty());
    }

    #[test]
    fn loads_previously_saved_favourites() {
        let slot = MemorySlot::default();
        {
            let mut store = store_with(&slot);
            store.toggle(&make_user(1, "octo"));
            store.toggle(&make_user(2, "hubot"));
        }
        let reloaded = store_with(&slot);
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.is_favourite(Some("hubot")));
    }
}
