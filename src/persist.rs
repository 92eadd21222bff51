use crate::error::{OctoscoutError, Result};
use crate::github::types::User;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A durable slot holding the serialized favourites list.
pub trait FavouritesSlot {
    /// Raw slot content, `None` when nothing was stored yet or it cannot be read.
    fn read(&self) -> Option<String>;

    /// Overwrites the slot wholesale.
    fn write(&mut self, content: &str) -> Result<()>;
}

pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavouritesSlot for JsonFileSlot {
    fn read(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("reading favourites from {}: {e}", self.path.display());
                None
            }
        }
    }

    fn write(&mut self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Validates the stored document: it must be a JSON array of users.
pub fn parse_favourites(raw: &str) -> Result<Vec<User>> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| OctoscoutError::PersistenceCorrupt(e.to_string()))?;
    if !value.is_array() {
        return Err(OctoscoutError::PersistenceCorrupt(
            "expected an array of users".to_string(),
        ));
    }
    let users: Vec<User> = serde_json::from_value(value)
        .map_err(|e| OctoscoutError::PersistenceCorrupt(e.to_string()))?;

    let mut seen = HashSet::new();
    Ok(users
        .into_iter()
        .filter(|u| seen.insert(u.login.clone()))
        .collect())
}

/// Never fails: a missing or corrupt slot yields an empty list.
pub fn load_favourites(slot: &dyn FavouritesSlot) -> Vec<User> {
    let Some(raw) = slot.read() else {
        return Vec::new();
    };
    match parse_favourites(&raw) {
        Ok(users) => {
            log::info!("loaded {} favourites", users.len());
            users
        }
        Err(e) => {
            log::warn!("ignoring stored favourites: {e}");
            Vec::new()
        }
    }
}

pub fn save_favourites(slot: &mut dyn FavouritesSlot, users: &[User]) {
    let content = match serde_json::to_string_pretty(users) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("serializing favourites: {e}");
            return;
        }
    };
    if let Err(e) = slot.write(&content) {
        log::warn!("writing favourites: {e}");
    }
}
