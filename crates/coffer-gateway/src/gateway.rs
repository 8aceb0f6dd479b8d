//! The request gateway: one method per backend operation, all funnelled
//! through a single send path.
//!
//! # The shared send path
//!
//! ```text
//! RequestEnvelope ──→ url = api_root + path
//!                     headers = {content-type: json} ∪ overrides (overrides win)
//!                 ──→ transport.execute()
//!                 ──→ 2xx?  yes → decode body
//!                           no  → ApiError::from_response(status, body)
//! ```
//!
//! No retries and no caching: every call is one fresh round trip. The
//! gateway never touches session state. Authenticated operations take the
//! player explicitly, so there is no "current player" to go stale.

use coffer_protocol::{
    endpoints, ApiError, AppConfig, Codec, Credentials, Item, ItemList,
    JsonCodec, Perk, PerkApplication, PerkList, PlayerProfile, PlayerStats,
    PlayerUuid, PurchaseReceipt, QrBase64, QrCode, QrFormat,
    RequestEnvelope, ScannedCode, TransferReceipt,
};
use coffer_transport::{HttpRequest, HttpResponse, HttpTransport};
use serde::de::DeserializeOwned;

use crate::{GatewayConfig, GatewayError};

/// Translates logical operations into HTTP calls against one API root.
///
/// Generic over the transport so tests can swap in a scripted one. The
/// gateway is immutable after construction; share it behind an `Arc` if
/// several tasks need it.
pub struct Gateway<T: HttpTransport> {
    transport: T,
    config: GatewayConfig,
    codec: JsonCodec,
}

impl<T: HttpTransport> Gateway<T> {
    /// Creates a gateway with the default config.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, GatewayConfig::default())
    }

    /// Creates a gateway with an explicit config.
    pub fn with_config(transport: T, config: GatewayConfig) -> Self {
        Self {
            transport,
            config,
            codec: JsonCodec,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    // =====================================================================
    // Core send path
    // =====================================================================

    /// Sends an envelope and returns the raw successful response.
    ///
    /// # Errors
    /// - [`GatewayError::Api`] for any non-2xx status
    /// - [`GatewayError::Transport`] if the round trip broke
    /// - [`GatewayError::Timeout`] if a timeout is configured and elapsed
    pub async fn send(
        &self,
        envelope: RequestEnvelope,
    ) -> Result<HttpResponse, GatewayError> {
        let request = HttpRequest {
            method: envelope.method,
            url: self.config.url_for(&envelope.path),
            headers: envelope.merged_headers(&self.codec),
            body: envelope.body,
        };
        let method = request.method;
        let path = envelope.path;

        let response = match self.config.request_timeout {
            Some(limit) => tokio::time::timeout(limit, self.transport.execute(request))
                .await
                .map_err(|_| {
                    tracing::warn!(%method, %path, ?limit, "request timed out");
                    GatewayError::Timeout(limit)
                })??,
            None => self.transport.execute(request).await?,
        };

        tracing::debug!(%method, %path, status = response.status, "api response");

        if !response.is_success() {
            let error = ApiError::from_response(response.status, &response.body);
            tracing::warn!(
                %method,
                %path,
                status = error.status,
                message = %error.message,
                "api call rejected"
            );
            return Err(error.into());
        }

        Ok(response)
    }

    /// Sends an envelope and decodes the JSON body into `R`.
    pub async fn request<R: DeserializeOwned>(
        &self,
        envelope: RequestEnvelope,
    ) -> Result<R, GatewayError> {
        let response = self.send(envelope).await?;
        Ok(self.codec.decode(&response.body)?)
    }

    /// Sends an envelope and returns the parsed JSON body as-is.
    pub async fn request_json(
        &self,
        envelope: RequestEnvelope,
    ) -> Result<serde_json::Value, GatewayError> {
        self.request(envelope).await
    }

    // =====================================================================
    // Public config & auth
    // =====================================================================

    /// `GET /config`. No identity needed.
    pub async fn get_config(&self) -> Result<AppConfig, GatewayError> {
        self.request(endpoints::config()).await
    }

    /// `POST /auth/login`. The returned profile is what the session
    /// store's `login` expects.
    pub async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<PlayerProfile, GatewayError> {
        self.request(endpoints::login(credentials)?).await
    }

    // =====================================================================
    // Users
    // =====================================================================

    /// `GET /users/me` for `player`.
    pub async fn get_current_user(
        &self,
        player: &PlayerUuid,
    ) -> Result<PlayerProfile, GatewayError> {
        self.request(endpoints::current_user(player)).await
    }

    /// `GET /users/stats` for `player`.
    pub async fn get_stats(
        &self,
        player: &PlayerUuid,
    ) -> Result<PlayerStats, GatewayError> {
        self.request(endpoints::stats(player)).await
    }

    /// `GET /users/qr` for `player`.
    ///
    /// The image format is returned as raw PNG bytes without any JSON
    /// parsing; the base64 format is decoded from `{ "qr_base64": ... }`.
    pub async fn get_qr(
        &self,
        player: &PlayerUuid,
        format: QrFormat,
    ) -> Result<QrCode, GatewayError> {
        let envelope = endpoints::qr(player, format);
        match format {
            QrFormat::Base64 => {
                let qr: QrBase64 = self.request(envelope).await?;
                Ok(QrCode::Base64(qr.qr_base64))
            }
            QrFormat::Image => {
                let response = self.send(envelope).await?;
                Ok(QrCode::Png(response.body))
            }
        }
    }

    /// `GET /users/lookup` for an arbitrary player. The backend always
    /// reports a zero balance here.
    pub async fn lookup_user(
        &self,
        player: &PlayerUuid,
    ) -> Result<PlayerProfile, GatewayError> {
        self.request(endpoints::lookup(player)).await
    }

    // =====================================================================
    // Transfers & QR
    // =====================================================================

    /// `POST /transfer/send`. `amount` is not validated here.
    pub async fn send_money(
        &self,
        from: &PlayerUuid,
        to: &PlayerUuid,
        amount: i64,
    ) -> Result<TransferReceipt, GatewayError> {
        self.request(endpoints::send_money(from, to, amount)?).await
    }

    /// `POST /qr/parse`.
    pub async fn parse_qr(&self, data: &str) -> Result<ScannedCode, GatewayError> {
        self.request(endpoints::parse_qr(data)?).await
    }

    // =====================================================================
    // Items
    // =====================================================================

    /// `GET /items/`.
    pub async fn list_items(&self) -> Result<Vec<Item>, GatewayError> {
        let list: ItemList = self.request(endpoints::list_items()).await?;
        Ok(list.items)
    }

    /// `GET /items/{id}`.
    pub async fn get_item(&self, item_id: &str) -> Result<Item, GatewayError> {
        self.request(endpoints::item(item_id)).await
    }

    /// `POST /items/purchase` on behalf of `player`.
    pub async fn purchase_item(
        &self,
        player: &PlayerUuid,
        item_id: &str,
    ) -> Result<PurchaseReceipt, GatewayError> {
        self.request(endpoints::purchase_item(player, item_id)?).await
    }

    // =====================================================================
    // Perks
    // =====================================================================

    /// `GET /perks/`.
    pub async fn list_perks(&self) -> Result<Vec<Perk>, GatewayError> {
        let list: PerkList = self.request(endpoints::list_perks()).await?;
        Ok(list.perks)
    }

    /// `GET /perks/{id}`.
    pub async fn get_perk(&self, perk_id: &str) -> Result<Perk, GatewayError> {
        self.request(endpoints::perk(perk_id)).await
    }

    /// `POST /perks/apply` on behalf of `player`.
    pub async fn apply_perk(
        &self,
        player: &PlayerUuid,
        perk_id: &str,
    ) -> Result<PerkApplication, GatewayError> {
        self.request(endpoints::apply_perk(player, perk_id)?).await
    }

    /// `GET /perks/user/{uuid}`: perks already applied to `player`.
    pub async fn get_my_perks(
        &self,
        player: &PlayerUuid,
    ) -> Result<Vec<Perk>, GatewayError> {
        let list: PerkList = self.request(endpoints::player_perks(player)).await?;
        Ok(list.perks)
    }
}

// =========================================================================
// Tests
// =========================================================================
