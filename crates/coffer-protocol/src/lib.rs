//! Wire protocol for the Coffer backend API.
//!
//! This crate defines the "language" the client speaks to the backend:
//!
//! - **Types** ([`PlayerUuid`], [`Credentials`], [`PlayerProfile`], ...):
//!   the JSON bodies that travel on the wire.
//! - **Envelopes** ([`RequestEnvelope`], [`endpoints`]): one logical call
//!   described as method + path + body + header overrides.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): bodies to bytes and back.
//! - **Errors** ([`ProtocolError`], [`ApiError`]): local encode/decode
//!   failures, and the backend's rejections reduced to a message.
//!
//! # Architecture
//!
//! ```text
//! Transport (bytes) → Protocol (envelopes, bodies) → Gateway (operations)
//! ```

mod codec;
pub mod endpoints;
mod envelope;
mod error;
mod types;

pub use codec::{Codec, JsonCodec};
pub use envelope::{RequestEnvelope, CONTENT_TYPE};
pub use error::{ApiError, ProtocolError, UNKNOWN_ERROR_MESSAGE};
pub use types::{
    AppConfig, ApplyPerkRequest, Attribute, Credentials, Item, ItemList,
    ParseQrRequest, Perk, PerkApplication, PerkList, PlayerProfile,
    PlayerRef, PlayerStats, PlayerUuid, PurchaseReceipt, PurchaseRequest,
    QrBase64, QrCode, QrFormat, ScannedCode, TransferReceipt,
    TransferRequest,
};
