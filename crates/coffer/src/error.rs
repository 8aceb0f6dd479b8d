//! Unified error type for the Coffer client.

use coffer_gateway::GatewayError;
use coffer_session::SessionError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attributes let `?` lift gateway and session errors
/// straight into this type.
#[derive(Debug, thiserror::Error)]
pub enum CofferError {
    /// A backend call failed (rejection, transport, decode, timeout).
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Persisting or restoring the identity failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The operation needs a logged-in player and there isn't one.
    #[error("not logged in")]
    NotLoggedIn,
}
