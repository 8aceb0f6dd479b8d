//! Error types for the session layer.

/// Errors that can occur while persisting or restoring the identity.
///
/// The in-memory half of the session can't fail; only the durable
/// storage behind it can.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading the persisted identity failed (file unreadable, corrupt).
    #[error("identity storage read failed: {0}")]
    StorageRead(#[source] std::io::Error),

    /// Writing or removing the persisted identity failed.
    #[error("identity storage write failed: {0}")]
    StorageWrite(#[source] std::io::Error),
}
