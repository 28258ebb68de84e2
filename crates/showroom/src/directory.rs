//! User directory - username-keyed records with authentication.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use autohaus_core::{Money, User, Username};

use crate::error::{Error, Result};
use crate::slot::SlotStore;

/// Slot the directory persists to.
pub const SLOT: &str = "directory";

/// Errors that can occur during account creation.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// A record already exists under this username.
    #[error("username already taken: {0}")]
    UsernameTaken(Username),

    /// The directory slot could not be persisted.
    #[error(transparent)]
    Store(#[from] Error),
}

/// On-disk shape of a directory entry.
///
/// Legacy directories stored a bare password string per username; current
/// directories store full records. Strict decode is attempted first, then
/// the named legacy fallback, and every entry is normalized to [`User`]
/// before any other code sees it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredUser {
    Record(User),
    LegacyPassword(String),
}

/// The user directory.
///
/// A pure key-value map from username to record - the username is the only
/// identity a user has. Fully loaded into memory; every mutation overwrites
/// the directory slot before returning.
pub struct UserDirectory {
    store: SlotStore,
    users: BTreeMap<Username, User>,
}

impl UserDirectory {
    /// Load the directory from its slot, or start empty when the slot has
    /// never been written.
    ///
    /// Legacy bare-password entries are upgraded in memory to full records
    /// with a zero balance. The upgraded shape reaches disk on the next
    /// mutation, not eagerly.
    ///
    /// # Errors
    ///
    /// Returns a fault if the slot exists but cannot be read or decoded.
    pub fn open(store: SlotStore) -> Result<Self> {
        let stored: BTreeMap<Username, StoredUser> = store.load(SLOT)?.unwrap_or_default();

        let mut upgraded = 0usize;
        let users = stored
            .into_iter()
            .map(|(username, entry)| {
                let user = match entry {
                    StoredUser::Record(user) => user,
                    StoredUser::LegacyPassword(password) => {
                        upgraded += 1;
                        User {
                            username: username.clone(),
                            password,
                            balance: Money::ZERO,
                        }
                    }
                };
                (username, user)
            })
            .collect::<BTreeMap<_, _>>();

        if upgraded > 0 {
            tracing::info!(upgraded, "upgraded legacy password-only directory entries");
        }
        tracing::debug!(count = users.len(), "directory loaded");

        Ok(Self { store, users })
    }

    /// The record for `username`, if present.
    #[must_use]
    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    /// Number of records in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All records, ordered by username.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Insert or overwrite the record under its own username, and persist.
    ///
    /// # Errors
    ///
    /// Returns a fault if the slot cannot be written.
    pub fn add(&mut self, user: User) -> Result<()> {
        self.users.insert(user.username.clone(), user);
        self.persist()
    }

    /// Insert or overwrite the record under the given key, and persist.
    ///
    /// Upsert semantics: the entry is created if absent. The record is
    /// stored at `username` even when it carries a different username
    /// field; a rename is a delete plus an add at the call site.
    ///
    /// # Errors
    ///
    /// Returns a fault if the slot cannot be written.
    pub fn update(&mut self, username: Username, user: User) -> Result<()> {
        self.users.insert(username, user);
        self.persist()
    }

    /// Remove the record for `username` if present, then persist.
    ///
    /// Persists unconditionally, even when the key was absent.
    ///
    /// # Errors
    ///
    /// Returns a fault if the slot cannot be written.
    pub fn delete(&mut self, username: &str) -> Result<()> {
        self.users.remove(username);
        self.persist()
    }

    /// Create a new account, refusing duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::UsernameTaken`] if a record already exists
    /// under the user's name, or a storage fault from persisting.
    pub fn register(&mut self, user: User) -> std::result::Result<(), RegisterError> {
        if self.users.contains_key(user.username.as_str()) {
            return Err(RegisterError::UsernameTaken(user.username));
        }
        self.add(user)?;
        Ok(())
    }

    /// Return the matching record iff `username` exists and its stored
    /// password equals `password` exactly (case-sensitive, no hashing).
    ///
    /// Invalid credentials are an expected outcome, not a fault.
    #[must_use]
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        let user = self.users.get(username)?;
        (user.password == password).then_some(user)
    }

    fn persist(&self) -> Result<()> {
        self.store.save(SLOT, &self.users)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    fn open_directory(dir: &tempfile::TempDir) -> UserDirectory {
        UserDirectory::open(SlotStore::new(dir.path())).unwrap()
    }

    fn alice() -> User {
        User::with_balance(
            Username::parse("alice").unwrap(),
            "wonderland",
            Money::from(100_000),
        )
    }

    #[test]
    fn test_first_run_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let directory = open_directory(&dir);
        assert!(directory.is_empty());
    }

    #[test]
    fn test_add_then_authenticate() {
        let dir = tempfile::tempdir().unwrap();
        let mut directory = open_directory(&dir);
        directory.add(alice()).unwrap();

        let user = directory.authenticate("alice", "wonderland").unwrap();
        assert_eq!(user.balance, Money::from(100_000));
    }

    #[test]
    fn test_authenticate_is_exact_and_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let mut directory = open_directory(&dir);
        directory.add(alice()).unwrap();

        assert!(directory.authenticate("alice", "Wonderland").is_none());
        assert!(directory.authenticate("alice", "wonderland ").is_none());
        assert!(directory.authenticate("Alice", "wonderland").is_none());
        assert!(directory.authenticate("bob", "wonderland").is_none());
    }

    #[test]
    fn test_register_rejects_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let mut directory = open_directory(&dir);
        directory.register(alice()).unwrap();

        let again = User::new(Username::parse("alice").unwrap(), "other");
        assert!(matches!(
            directory.register(again),
            Err(RegisterError::UsernameTaken(_))
        ));
        // The original record is untouched.
        assert_eq!(directory.get("alice").unwrap().password, "wonderland");
    }

    #[test]
    fn test_update_is_upsert_at_given_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut directory = open_directory(&dir);

        // Absent key: update creates the entry.
        directory
            .update(Username::parse("alice").unwrap(), alice())
            .unwrap();
        assert_eq!(directory.len(), 1);

        // The record stays under the given key even with a different
        // username field.
        let renamed = User::new(Username::parse("alicia").unwrap(), "wonderland");
        directory
            .update(Username::parse("alice").unwrap(), renamed)
            .unwrap();
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get("alice").unwrap().username.as_str(), "alicia");
    }

    #[test]
    fn test_delete_absent_key_still_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut directory = open_directory(&dir);
        directory.delete("ghost").unwrap();

        assert!(dir.path().join("directory.json").exists());
    }

    #[test]
    fn test_legacy_entries_upgrade_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let raw = r#"{
            "alice": {"username": "alice", "password": "wonderland", "balance": "100000"},
            "bob": "builder"
        }"#;
        fs::write(dir.path().join("directory.json"), raw).unwrap();

        let directory = open_directory(&dir);
        assert_eq!(directory.len(), 2);

        let alice = directory.get("alice").unwrap();
        assert_eq!(alice.balance, Money::from(100_000));

        let bob = directory.get("bob").unwrap();
        assert_eq!(bob.username.as_str(), "bob");
        assert_eq!(bob.password, "builder");
        assert_eq!(bob.balance, Money::ZERO);
    }

    #[test]
    fn test_legacy_upgrade_is_not_eagerly_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("directory.json");
        fs::write(&path, r#"{"bob": "builder"}"#).unwrap();

        let mut directory = open_directory(&dir);
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"bob": "builder"}"#);

        // The next mutation persists the upgraded shape.
        directory.add(alice()).unwrap();
        let rewritten = fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains("\"balance\""));

        let reloaded = open_directory(&dir);
        assert_eq!(reloaded.get("bob").unwrap().password, "builder");
    }
}
