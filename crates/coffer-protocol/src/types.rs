//! Wire types for the Coffer backend API.
//!
//! Every type in here is something that travels as a JSON body: either a
//! request we send or a response we parse. Field names follow the
//! backend's snake_case JSON exactly, so most structs need no serde
//! renames at all.

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// Opaque identifier of a player account.
///
/// A newtype over `String` so an item id or perk id can never be passed
/// where a player is expected. `#[serde(transparent)]` keeps it a plain
/// JSON string on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerUuid(String);

impl PlayerUuid {
    /// Wraps a raw identifier. No validation: the backend owns the format.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrows the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the raw identifier.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PlayerUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerUuid {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for PlayerUuid {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Encoding requested from `GET /users/qr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrFormat {
    /// JSON body `{ "qr_base64": "..." }`.
    #[default]
    Base64,
    /// Raw `image/png` bytes.
    Image,
}

impl QrFormat {
    /// The value sent in the `format` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base64 => "base64",
            Self::Image => "image",
        }
    }
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /auth/login`.
///
/// The backend accepts either Telegram WebApp `init_data` or a player
/// uuid, optionally with a password. Absent fields are left out of the
/// JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_uuid: Option<PlayerUuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Credentials {
    /// Credentials for uuid-based login (QR code or manual entry).
    pub fn player(player_uuid: impl Into<PlayerUuid>) -> Self {
        Self {
            player_uuid: Some(player_uuid.into()),
            ..Self::default()
        }
    }

    /// Credentials carrying signed Telegram WebApp init data.
    pub fn web_app(init_data: impl Into<String>) -> Self {
        Self {
            init_data: Some(init_data.into()),
            ..Self::default()
        }
    }

    /// Adds the shared app password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// Body of `POST /transfer/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from_uuid: PlayerUuid,
    pub to_uuid: PlayerUuid,
    pub amount: i64,
}

/// Body of `POST /qr/parse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseQrRequest {
    pub data: String,
}

/// Body of `POST /items/purchase`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub player_uuid: PlayerUuid,
    pub item_id: String,
}

/// Body of `POST /perks/apply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyPerkRequest {
    pub player_uuid: PlayerUuid,
    pub perk_id: String,
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

/// `GET /config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub password_enabled: bool,
}

/// A player as returned by login, `/users/me` and `/users/lookup`.
///
/// This is also the payload handed to the session store after a
/// successful login. `balance` is a float because the login endpoint
/// reports it as one; lookups always report `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_uuid: PlayerUuid,
    pub name: String,
    pub balance: f64,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub band: String,
}

/// One character attribute in `/users/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub display_name: String,
    pub value: i64,
    pub max_value: i64,
    #[serde(default)]
    pub description: String,
}

/// `GET /users/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_uuid: PlayerUuid,
    pub name: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub band: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// JSON shape of `GET /users/qr?format=base64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrBase64 {
    pub qr_base64: String,
}

/// A player's QR code in whichever format was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrCode {
    /// Base64-encoded PNG, ready for a `data:` URL.
    Base64(String),
    /// Raw PNG bytes.
    Png(Vec<u8>),
}

/// `POST /transfer/send`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub success: bool,
    pub new_balance: f64,
    pub transferred: i64,
    pub to_name: String,
}

/// A purchasable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    #[serde(default)]
    pub trader_id: Option<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub effect_type: String,
    #[serde(default)]
    pub effect_value: i64,
    /// Minutes. `0` means the effect is permanent or there is none.
    #[serde(default)]
    pub effect_duration: i64,
}

/// `GET /items/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// `POST /items/purchase`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub success: bool,
    pub item: Item,
    pub paid: i64,
    pub new_balance: f64,
}

/// A perk definition, optionally with the time it was applied to a
/// player (only present in `/perks/user/{uuid}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perk {
    pub perk_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub one_time: bool,
    #[serde(default)]
    pub effect_type: String,
    #[serde(default)]
    pub effect_value: i64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<String>,
}

/// `GET /perks/` and `GET /perks/user/{uuid}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerkList {
    #[serde(default)]
    pub perks: Vec<Perk>,
}

/// `POST /perks/apply`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerkApplication {
    pub success: bool,
    pub perk: Perk,
    pub new_balance: f64,
    /// Free-form attribute map; its shape is owned by the backend.
    #[serde(default)]
    pub new_attributes: serde_json::Value,
}

/// Short player reference embedded in scanned codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub player_uuid: PlayerUuid,
    pub name: String,
}

/// `POST /qr/parse`: what a scanned code means.
///
/// Adjacently tagged, matching the backend's
/// `{ "type": "login", "data": { ... } }` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ScannedCode {
    /// Log in as this player.
    Login(PlayerRef),
    /// Pay for this item.
    Pay(Item),
    /// Send money to this player.
    Send(PlayerRef),
    /// Apply this perk.
    Perk(Perk),
}
