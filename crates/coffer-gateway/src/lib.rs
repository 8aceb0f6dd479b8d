//! Request gateway for the Coffer backend.
//!
//! Turns each logical operation (login, transfer, purchase, ...) into
//! exactly one HTTP call and reduces the answer to either a typed value
//! or a [`GatewayError`].
//!
//! ```text
//! Caller (facade / UI)
//!     ↕
//! Gateway (this crate)  ← operations, URL + header assembly, error mapping
//!     ↕
//! Protocol  ← envelopes, bodies, ApiError
//!     ↕
//! Transport  ← bytes over HTTP
//! ```

mod config;
mod error;
mod gateway;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use gateway::Gateway;
