//! Session types: what the client knows about who is logged in.
//!
//! A [`Session`] mirrors the backend's view of the current player:
//! - WHETHER anyone is logged in
//! - WHO it is (`PlayerUuid` and display name)
//! - HOW MUCH they hold (balance, as last reported by the backend)

use coffer_protocol::{PlayerProfile, PlayerUuid};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Durable-storage key the player identifier is kept under.
    ///
    /// Default: `rpg_player_uuid`.
    pub storage_key: String,
}

impl SessionConfig {
    pub const DEFAULT_STORAGE_KEY: &'static str = "rpg_player_uuid";
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// The two states of the session.
///
/// ```text
///   LoggedOut ──(login)──→ LoggedIn ──(update_balance)──→ LoggedIn
///       ↑                      │
///       └───────(logout)───────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A snapshot of the client's session.
///
/// When `is_authenticated` is `false`, `player_uuid` and `name` are
/// `None` and `balance` is `0.0`. The store maintains that for every
/// transition except `update_balance` while logged out, which callers
/// must avoid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub is_authenticated: bool,
    pub player_uuid: Option<PlayerUuid>,
    pub name: Option<String>,
    pub balance: f64,
}

impl Session {
    /// The logged-out session. Same as `Session::default()`.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// The logged-in session described by a login payload.
    pub fn from_profile(profile: &PlayerProfile) -> Self {
        Self {
            is_authenticated: true,
            player_uuid: Some(profile.player_uuid.clone()),
            name: Some(profile.name.clone()),
            balance: profile.balance,
        }
    }

    /// Which state this snapshot is in.
    pub fn state(&self) -> SessionState {
        if self.is_authenticated {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }
}
