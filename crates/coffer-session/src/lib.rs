//! Client session management for Coffer.
//!
//! This crate owns the one piece of mutable client state:
//!
//! 1. **Session**: who is logged in, their name and balance ([`Session`])
//! 2. **Store**: the single place that state is mutated and observed
//!    ([`SessionStore`])
//! 3. **Durable identity**: the player identifier persisted across
//!    restarts ([`IdentityStorage`], [`MemoryStorage`], [`FileStorage`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Facade (above)  ← feeds gateway results into the store
//!     ↕
//! Session Layer (this crate)  ← in-memory session + persisted identifier
//!     ↕
//! Protocol Layer (below)  ← provides PlayerUuid, PlayerProfile
//! ```
//!
//! The session layer never talks to the network.

mod error;
mod session;
mod storage;
mod store;

pub use error::SessionError;
pub use session::{Session, SessionConfig, SessionState};
pub use storage::{FileStorage, IdentityStorage, MemoryStorage};
pub use store::SessionStore;
