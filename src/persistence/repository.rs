//! The users list as stored on the device.

use std::sync::Arc;

use crate::users::User;

use super::error::StorageError;
use super::storage::KeyValueStorage;

/// Storage key of the users list.
pub const USERS_KEY: &str = "@users_list";

/// Load/save of the full users list under one fixed key, as JSON.
#[derive(Clone)]
pub struct UsersRepository {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl UsersRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted list.
    ///
    /// Missing, unreadable and corrupt values all mean "no local data" and
    /// yield `None`; they are logged, never returned as errors.
    pub fn load(&self) -> Option<Vec<User>> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read users from storage");
                return None;
            }
        };

        match serde_json::from_str::<Vec<User>>(&raw) {
            Ok(users) => {
                tracing::debug!(key = %self.key, count = users.len(), "Loaded users from storage");
                Some(users)
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored users are corrupt, ignoring");
                None
            }
        }
    }

    /// Encode the list into its stored form.
    pub fn encode(&self, users: &[User]) -> Result<String, StorageError> {
        serde_json::to_string(users).map_err(|source| StorageError::Encode {
            key: self.key.clone(),
            source,
        })
    }

    /// Write the list synchronously.
    pub fn save(&self, users: &[User]) -> Result<(), StorageError> {
        let encoded = self.encode(users)?;
        self.storage.set_item(&self.key, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    fn repo() -> (Arc<MemoryStorage>, UsersRepository) {
        let storage = Arc::new(MemoryStorage::new());
        let repo = UsersRepository::new(storage.clone(), USERS_KEY);
        (storage, repo)
    }

    #[test]
    fn missing_key_loads_none() {
        let (_, repo) = repo();
        assert_eq!(repo.load(), None);
    }

    #[test]
    fn corrupt_value_loads_none() {
        let (storage, repo) = repo();
        storage.set_item(USERS_KEY, "{not json").unwrap();
        assert_eq!(repo.load(), None);
    }

    #[test]
    fn saved_list_loads_back() {
        let (storage, repo) = repo();
        let users = vec![User {
            id: 7,
            name: "Ann".into(),
            email: "ann@example.com".into(),
            phone: "1".into(),
            website: "ann.dev".into(),
        }];
        repo.save(&users).unwrap();
        assert!(storage.get_item(USERS_KEY).unwrap().unwrap().contains("\"id\":7"));
        assert_eq!(repo.load(), Some(users));
    }
}
