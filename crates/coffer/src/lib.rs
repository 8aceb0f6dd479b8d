//! # Coffer
//!
//! Client SDK for a game-economy backend: login, balance transfers,
//! item and perk purchases, and QR identity exchange.
//!
//! Two layers do the work:
//! - the **gateway** ([`Gateway`]) turns each operation into one HTTP call
//!   and reduces failures to a message;
//! - the **session store** ([`SessionStore`]) holds who is logged in and
//!   persists the player identifier across restarts.
//!
//! [`CofferClient`] wires the two together.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coffer::prelude::*;
//!
//! # async fn run() -> Result<(), CofferError> {
//! coffer::init_tracing();
//!
//! let client = CofferClientBuilder::new()
//!     .api_root("http://localhost:8000/api")
//!     .build(ReqwestTransport::new(), FileStorage::new("session.json"));
//!
//! if !client.resume().await? {
//!     client.sign_in(&Credentials::player("A1B2C3").with_password("secret")).await?;
//! }
//! println!("balance: {}", client.session().snapshot().balance);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{ClientConfig, CofferClient, CofferClientBuilder};
pub use error::CofferError;

pub use coffer_gateway::{Gateway, GatewayConfig, GatewayError};
pub use coffer_protocol as protocol;
pub use coffer_session::{
    FileStorage, IdentityStorage, MemoryStorage, Session, SessionConfig,
    SessionError, SessionState, SessionStore,
};
pub use coffer_transport::{HttpTransport, TransportError};
#[cfg(feature = "reqwest")]
pub use coffer_transport::ReqwestTransport;

/// Installs a `tracing` fmt subscriber filtered by `RUST_LOG`
/// (default `info`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Everything most callers need, in one import.
pub mod prelude {
    pub use crate::{
        ClientConfig, CofferClient, CofferClientBuilder, CofferError, FileStorage, Gateway,
        GatewayConfig, GatewayError, HttpTransport, IdentityStorage,
        MemoryStorage, Session, SessionConfig, SessionState, SessionStore,
    };
    #[cfg(feature = "reqwest")]
    pub use crate::ReqwestTransport;
    pub use coffer_protocol::{
        ApiError, Credentials, Item, Perk, PlayerProfile, PlayerUuid,
        QrCode, QrFormat, ScannedCode,
    };
}
