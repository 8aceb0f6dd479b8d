//! The session store: the single owner of "who is logged in".
//!
//! Responsibilities:
//! - Holding the current [`Session`] and handing out snapshots
//! - Notifying subscribers after every completed mutation
//! - Persisting the player identifier so a restart can find it again
//!
//! # Observers
//!
//! State lives in a `tokio::sync::watch` channel. The store keeps the
//! sender; [`SessionStore::subscribe`] hands out receivers. A mutation
//! replaces the value before the mutating call returns, so a read after
//! `login()`/`logout()` never sees the old state.
//!
//! # Storage failures
//!
//! Persistence is not best-effort:
//! - `login` writes storage *first*. If that fails the in-memory session is
//!   untouched and the error is returned.
//! - `logout` clears memory *first*, then removes the key. A removal
//!   failure is returned, but the client is logged out either way.
//! - `restore` surfaces read failures.

use coffer_protocol::{PlayerProfile, PlayerUuid};
use tokio::sync::watch;

use crate::{IdentityStorage, Session, SessionConfig, SessionError, SessionState};

/// Owns the client's session and its persisted identifier.
///
/// Explicitly constructed; each instance is independent, so tests can run
/// many side by side. Concurrent `login`/`logout` calls from uncoordinated
/// callers are last-write-wins.
///
/// ## Lifecycle
///
/// ```text
/// restore() ──→ Some(uuid) ──→ (caller re-fetches) ──→ login()
///                                                        │
///                                    update_balance() ←──┤
///                                                        ▼
///                                                    logout()
/// ```
pub struct SessionStore<S: IdentityStorage> {
    storage: S,
    config: SessionConfig,
    state: watch::Sender<Session>,
}

impl<S: IdentityStorage> SessionStore<S> {
    /// Creates a logged-out store over `storage` with the default key.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, SessionConfig::default())
    }

    /// Creates a logged-out store with an explicit config.
    pub fn with_config(storage: S, config: SessionConfig) -> Self {
        Self {
            storage,
            config,
            state: watch::Sender::new(Session::logged_out()),
        }
    }

    /// A copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// The current state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().state()
    }

    /// The logged-in player, if any.
    pub fn player_uuid(&self) -> Option<PlayerUuid> {
        self.state.borrow().player_uuid.clone()
    }

    /// Returns a receiver that sees the current session and every later
    /// change.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// The storage this store persists to.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Transitions to `LoggedIn` with the identity and balance from
    /// `profile`, and persists the identifier.
    ///
    /// # Errors
    /// Returns [`SessionError::StorageWrite`] if persisting fails. The
    /// in-memory session is unchanged in that case.
    pub fn login(&self, profile: &PlayerProfile) -> Result<(), SessionError> {
        self.storage
            .set(&self.config.storage_key, profile.player_uuid.as_str())
            .map_err(|e| {
                tracing::warn!(
                    player_uuid = %profile.player_uuid,
                    error = %e,
                    "failed to persist player identity, login aborted"
                );
                SessionError::StorageWrite(e)
            })?;

        self.state.send_replace(Session::from_profile(profile));

        tracing::info!(player_uuid = %profile.player_uuid, "session logged in");
        Ok(())
    }

    /// Resets to `LoggedOut` and removes the persisted identifier.
    ///
    /// # Errors
    /// Returns [`SessionError::StorageWrite`] if removing the key fails.
    /// The in-memory session is already logged out by then.
    pub fn logout(&self) -> Result<(), SessionError> {
        let previous = self.state.send_replace(Session::logged_out());

        if let Some(player_uuid) = &previous.player_uuid {
            tracing::info!(%player_uuid, "session logged out");
        }

        self.storage.remove(&self.config.storage_key).map_err(|e| {
            tracing::warn!(error = %e, "failed to remove persisted player identity");
            SessionError::StorageWrite(e)
        })
    }

    /// Replaces the balance and nothing else.
    ///
    /// Not guarded: calling this while logged out puts a balance on an
    /// otherwise empty session.
    pub fn update_balance(&self, balance: f64) {
        self.state.send_modify(|session| session.balance = balance);
        tracing::debug!(balance, "session balance updated");
    }

    /// Reads the persisted identifier without changing any state.
    ///
    /// The caller decides what to do with it: typically re-fetch the
    /// profile and then call [`login`](Self::login).
    ///
    /// # Errors
    /// Returns [`SessionError::StorageRead`] if storage can't be read.
    pub fn restore(&self) -> Result<Option<PlayerUuid>, SessionError> {
        let stored = self
            .storage
            .get(&self.config.storage_key)
            .map_err(SessionError::StorageRead)?;

        Ok(stored.filter(|raw| !raw.is_empty()).map(PlayerUuid::from))
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Unit tests for `SessionStore`.
    //!
    //! Naming convention: `test_{function}_{scenario}_{expected}`.

    use std::io;

    use super::*;
    use crate::MemoryStorage;

    // -- Helpers ----------------------------------------------------------

    fn profile(uuid: &str, name: &str, balance: f64) -> PlayerProfile {
        PlayerProfile {
            player_uuid: PlayerUuid::new(uuid),
            name: name.into(),
            balance,
            profession: String::new(),
            band: String::new(),
        }
    }

    fn alice() -> PlayerProfile {
        profile("uuid-A", "Alice", 250.0)
    }

    /// Storage whose writes always fail, for exercising the failure policy.
    struct BrokenStorage;

    impl IdentityStorage for BrokenStorage {
        fn get(&self, _key: &str) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
        fn set(&self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::other("quota exceeded"))
        }
        fn remove(&self, _key: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    // =====================================================================
    // new()
    // =====================================================================

    #[test]
    fn test_new_starts_logged_out() {
        let store = SessionStore::new(MemoryStorage::new());

        assert_eq!(store.snapshot(), Session::logged_out());
        assert_eq!(store.state(), SessionState::LoggedOut);
        assert!(store.player_uuid().is_none());
    }

    // =====================================================================
    // login()
    // =====================================================================

    #[test]
    fn test_login_sets_session_and_persists_identifier() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());

        store.login(&alice()).expect("login should succeed");

        assert_eq!(
            store.snapshot(),
            Session {
                is_authenticated: true,
                player_uuid: Some(PlayerUuid::new("uuid-A")),
                name: Some("Alice".into()),
                balance: 250.0,
            }
        );
        assert_eq!(
            storage.get("rpg_player_uuid").unwrap().as_deref(),
            Some("uuid-A")
        );
    }

    #[test]
    fn test_login_uses_configured_key() {
        let storage = MemoryStorage::new();
        let store = SessionStore::with_config(
            storage.clone(),
            SessionConfig { storage_key: "other_key".into() },
        );

        store.login(&alice()).unwrap();

        assert_eq!(storage.get("other_key").unwrap().as_deref(), Some("uuid-A"));
        assert_eq!(storage.get("rpg_player_uuid").unwrap(), None);
    }

    #[test]
    fn test_login_twice_last_write_wins() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());

        store.login(&alice()).unwrap();
        store.login(&profile("uuid-B", "Bob", 10.0)).unwrap();

        assert_eq!(store.snapshot().name.as_deref(), Some("Bob"));
        assert_eq!(storage.get("rpg_player_uuid").unwrap().as_deref(), Some("uuid-B"));
    }

    #[test]
    fn test_login_storage_failure_leaves_session_untouched() {
        let store = SessionStore::new(BrokenStorage);

        let result = store.login(&alice());

        assert!(matches!(result, Err(SessionError::StorageWrite(_))));
        assert_eq!(store.snapshot(), Session::logged_out());
    }

    // =====================================================================
    // logout()
    // =====================================================================

    #[test]
    fn test_logout_after_login_resets_and_removes_key() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.login(&alice()).unwrap();

        store.logout().expect("logout should succeed");

        assert_eq!(store.snapshot(), Session::logged_out());
        assert_eq!(storage.get("rpg_player_uuid").unwrap(), None);
        assert_eq!(store.restore().unwrap(), None);
    }

    #[test]
    fn test_logout_while_logged_out_is_harmless() {
        let store = SessionStore::new(MemoryStorage::new());

        assert!(store.logout().is_ok());
        assert_eq!(store.state(), SessionState::LoggedOut);
    }

    #[test]
    fn test_logout_storage_failure_still_clears_memory() {
        let store = SessionStore::new(BrokenStorage);
        // Can't log in through BrokenStorage, so force a balance in.
        store.update_balance(5.0);

        let result = store.logout();

        assert!(matches!(result, Err(SessionError::StorageWrite(_))));
        assert_eq!(store.snapshot(), Session::logged_out());
    }

    // =====================================================================
    // update_balance()
    // =====================================================================

    #[test]
    fn test_update_balance_changes_only_balance() {
        let store = SessionStore::new(MemoryStorage::new());
        store.login(&profile("uuid-A", "Alice", 100.0)).unwrap();

        store.update_balance(500.0);

        let s = store.snapshot();
        assert_eq!(s.balance, 500.0);
        assert!(s.is_authenticated);
        assert_eq!(s.player_uuid, Some(PlayerUuid::new("uuid-A")));
        assert_eq!(s.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_update_balance_while_logged_out_is_not_guarded() {
        let store = SessionStore::new(MemoryStorage::new());

        store.update_balance(42.0);

        let s = store.snapshot();
        assert_eq!(s.balance, 42.0);
        assert!(!s.is_authenticated);
        assert!(s.player_uuid.is_none());
    }

    // =====================================================================
    // restore()
    // =====================================================================

    #[test]
    fn test_restore_empty_storage_returns_none() {
        let store = SessionStore::new(MemoryStorage::new());
        assert_eq!(store.restore().unwrap(), None);
    }

    #[test]
    fn test_restore_after_reload_returns_identifier_without_logging_in() {
        let storage = MemoryStorage::new();
        SessionStore::new(storage.clone()).login(&alice()).unwrap();

        // "Reload": a brand-new store over the same durable storage.
        let reloaded = SessionStore::new(storage);
        let restored = reloaded.restore().unwrap();

        assert_eq!(restored, Some(PlayerUuid::new("uuid-A")));
        assert_eq!(reloaded.state(), SessionState::LoggedOut);
        assert!(!reloaded.snapshot().is_authenticated);
    }

    #[test]
    fn test_restore_empty_string_counts_as_absent() {
        let storage = MemoryStorage::new();
        storage.set("rpg_player_uuid", "").unwrap();

        assert_eq!(SessionStore::new(storage).restore().unwrap(), None);
    }

    #[test]
    fn test_restore_storage_failure_returns_read_error() {
        let store = SessionStore::new(BrokenStorage);
        assert!(matches!(store.restore(), Err(SessionError::StorageRead(_))));
    }

    // =====================================================================
    // subscribe()
    // =====================================================================

    #[test]
    fn test_subscribe_sees_current_value_immediately() {
        let store = SessionStore::new(MemoryStorage::new());
        store.login(&alice()).unwrap();

        let rx = store.subscribe();

        assert_eq!(rx.borrow().name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_subscribe_observes_every_mutation_without_stale_reads() {
        let store = SessionStore::new(MemoryStorage::new());
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.login(&alice()).unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_authenticated);

        store.update_balance(300.0);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().balance, 300.0);

        store.logout().unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Session::logged_out());
    }

    #[test]
    fn test_subscribe_multiple_receivers_see_same_state() {
        let store = SessionStore::new(MemoryStorage::new());
        let a = store.subscribe();
        let b = store.subscribe();

        store.login(&alice()).unwrap();

        assert_eq!(*a.borrow(), *b.borrow());
        assert_eq!(*a.borrow(), store.snapshot());
    }

    #[test]
    fn test_stores_are_independent() {
        let one = SessionStore::new(MemoryStorage::new());
        let two = SessionStore::new(MemoryStorage::new());

        one.login(&alice()).unwrap();

        assert_eq!(two.state(), SessionState::LoggedOut);
        assert_eq!(two.restore().unwrap(), None);
    }
}
