//! One constructor per backend route.
//!
//! Each function maps a logical operation to exactly one
//! [`RequestEnvelope`]. Nothing here touches the network, which keeps the
//! path/method/body contract testable without a server.
//!
//! Identifiers interpolated into a query string or path segment are
//! percent-encoded.

use urlencoding::encode;

use crate::{
    ApplyPerkRequest, Credentials, ParseQrRequest, PlayerUuid, ProtocolError,
    PurchaseRequest, QrFormat, RequestEnvelope, TransferRequest,
};

pub fn config() -> RequestEnvelope {
    RequestEnvelope::get("/config")
}

pub fn login(credentials: &Credentials) -> Result<RequestEnvelope, ProtocolError> {
    RequestEnvelope::post_json("/auth/login", credentials)
}

pub fn current_user(player: &PlayerUuid) -> RequestEnvelope {
    RequestEnvelope::get(format!("/users/me?player_uuid={}", encode(player.as_str())))
}

pub fn stats(player: &PlayerUuid) -> RequestEnvelope {
    RequestEnvelope::get(format!("/users/stats?player_uuid={}", encode(player.as_str())))
}

pub fn qr(player: &PlayerUuid, format: QrFormat) -> RequestEnvelope {
    RequestEnvelope::get(format!(
        "/users/qr?player_uuid={}&format={}",
        encode(player.as_str()),
        format.as_str()
    ))
}

/// Lookup carries the *target* player, not the caller.
pub fn lookup(player: &PlayerUuid) -> RequestEnvelope {
    RequestEnvelope::get(format!("/users/lookup?player_uuid={}", encode(player.as_str())))
}

/// The amount is passed through untouched; the backend rejects
/// non-positive values.
pub fn send_money(
    from: &PlayerUuid,
    to: &PlayerUuid,
    amount: i64,
) -> Result<RequestEnvelope, ProtocolError> {
    RequestEnvelope::post_json(
        "/transfer/send",
        &TransferRequest {
            from_uuid: from.clone(),
            to_uuid: to.clone(),
            amount,
        },
    )
}

pub fn parse_qr(data: &str) -> Result<RequestEnvelope, ProtocolError> {
    RequestEnvelope::post_json("/qr/parse", &ParseQrRequest { data: data.to_string() })
}

pub fn list_items() -> RequestEnvelope {
    RequestEnvelope::get("/items/")
}

pub fn item(item_id: &str) -> RequestEnvelope {
    RequestEnvelope::get(format!("/items/{}", encode(item_id)))
}

pub fn purchase_item(
    player: &PlayerUuid,
    item_id: &str,
) -> Result<RequestEnvelope, ProtocolError> {
    RequestEnvelope::post_json(
        "/items/purchase",
        &PurchaseRequest {
            player_uuid: player.clone(),
            item_id: item_id.to_string(),
        },
    )
}

pub fn list_perks() -> RequestEnvelope {
    RequestEnvelope::get("/perks/")
}

pub fn perk(perk_id: &str) -> RequestEnvelope {
    RequestEnvelope::get(format!("/perks/{}", encode(perk_id)))
}

pub fn apply_perk(
    player: &PlayerUuid,
    perk_id: &str,
) -> Result<RequestEnvelope, ProtocolError> {
    RequestEnvelope::post_json(
        "/perks/apply",
        &ApplyPerkRequest {
            player_uuid: player.clone(),
            perk_id: perk_id.to_string(),
        },
    )
}

pub fn player_perks(player: &PlayerUuid) -> RequestEnvelope {
    RequestEnvelope::get(format!("/perks/user/{}", encode(player.as_str())))
}
