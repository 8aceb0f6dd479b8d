//! `CofferClient` builder and the flows that wire gateway results into
//! the session.
//!
//! The gateway and the session store know nothing about each other. This
//! is the one place that takes a backend answer and reflects it into
//! local state: a login payload becomes a logged-in session, a transfer
//! receipt becomes a new balance.

use coffer_gateway::{Gateway, GatewayConfig, GatewayError};
use coffer_protocol::{
    Credentials, Perk, PerkApplication, PlayerStats, PlayerUuid,
    PurchaseReceipt, QrCode, QrFormat, TransferReceipt,
};
use coffer_session::{IdentityStorage, Session, SessionConfig, SessionStore};
use coffer_transport::HttpTransport;
use serde::{Deserialize, Serialize};

use crate::CofferError;

/// Combined configuration for both layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Builder for configuring a [`CofferClient`].
///
/// # Example
///
/// ```rust,no_run
/// use coffer::prelude::*;
///
/// let client = CofferClientBuilder::new()
///     .api_root("https://game.example/api")
///     .build(ReqwestTransport::new(), FileStorage::new("session.json"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CofferClientBuilder {
    config: ClientConfig,
}

impl CofferClientBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the API root every path is appended to.
    pub fn api_root(mut self, api_root: impl Into<String>) -> Self {
        self.config.gateway.api_root = api_root.into();
        self
    }

    /// Bounds each request. Without this, requests wait indefinitely.
    pub fn request_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config.gateway.request_timeout = Some(timeout);
        self
    }

    /// Sets the durable-storage key for the player identifier.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.session.storage_key = key.into();
        self
    }

    /// Builds the client over the given transport and storage.
    pub fn build<T: HttpTransport, S: IdentityStorage>(
        self,
        transport: T,
        storage: S,
    ) -> CofferClient<T, S> {
        CofferClient::new(
            Gateway::with_config(transport, self.config.gateway),
            SessionStore::with_config(storage, self.config.session),
        )
    }
}

/// A gateway and a session store, wired together.
///
/// Operations that act "as me" read the player from the session and fail
/// with [`CofferError::NotLoggedIn`] before any network call if nobody is
/// logged in.
pub struct CofferClient<T: HttpTransport, S: IdentityStorage> {
    gateway: Gateway<T>,
    session: SessionStore<S>,
}

impl<T: HttpTransport, S: IdentityStorage> CofferClient<T, S> {
    /// Wires an existing gateway and session store.
    pub fn new(gateway: Gateway<T>, session: SessionStore<S>) -> Self {
        Self { gateway, session }
    }

    /// The underlying gateway, for calls that don't touch the session.
    pub fn gateway(&self) -> &Gateway<T> {
        &self.gateway
    }

    /// The underlying session store, for snapshots and subscriptions.
    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// The logged-in player.
    ///
    /// # Errors
    /// [`CofferError::NotLoggedIn`] if the session is logged out.
    pub fn current_player(&self) -> Result<PlayerUuid, CofferError> {
        self.session.player_uuid().ok_or(CofferError::NotLoggedIn)
    }

    // =====================================================================
    // Identity flows
    // =====================================================================

    /// Logs in against the backend and stores the resulting session.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session, CofferError> {
        let profile = self.gateway.login(credentials).await?;
        self.session.login(&profile)?;
        Ok(self.session.snapshot())
    }

    /// Re-establishes a session from the persisted identifier.
    ///
    /// Returns `Ok(false)` if nothing was persisted. If the backend
    /// rejects the identifier with a 4xx (unknown player), the stale
    /// identity is dropped before the error is returned. Server errors,
    /// timeouts and transport failures keep it so a later retry can still
    /// resume.
    pub async fn resume(&self) -> Result<bool, CofferError> {
        let Some(player) = self.session.restore()? else {
            tracing::debug!("no persisted identity to resume");
            return Ok(false);
        };

        match self.gateway.get_current_user(&player).await {
            Ok(profile) => {
                self.session.login(&profile)?;
                Ok(true)
            }
            Err(GatewayError::Api(rejection)) if (400..500).contains(&rejection.status) => {
                tracing::warn!(
                    %player,
                    status = rejection.status,
                    message = %rejection.message,
                    "persisted identity rejected, discarding"
                );
                self.session.logout()?;
                Err(GatewayError::Api(rejection).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Logs out locally and forgets the persisted identifier.
    pub fn sign_out(&self) -> Result<(), CofferError> {
        Ok(self.session.logout()?)
    }

    // =====================================================================
    // Balance-changing operations
    // =====================================================================

    /// Re-fetches the profile and stores the backend's balance.
    pub async fn refresh_balance(&self) -> Result<f64, CofferError> {
        let player = self.current_player()?;
        let profile = self.gateway.get_current_user(&player).await?;
        self.session.update_balance(profile.balance);
        Ok(profile.balance)
    }

    /// Sends money to `to` and stores the sender's new balance.
    pub async fn send_money(
        &self,
        to: &PlayerUuid,
        amount: i64,
    ) -> Result<TransferReceipt, CofferError> {
        let player = self.current_player()?;
        let receipt = self.gateway.send_money(&player, to, amount).await?;
        self.session.update_balance(receipt.new_balance);
        Ok(receipt)
    }

    /// Buys an item and stores the new balance.
    pub async fn purchase_item(&self, item_id: &str) -> Result<PurchaseReceipt, CofferError> {
        let player = self.current_player()?;
        let receipt = self.gateway.purchase_item(&player, item_id).await?;
        self.session.update_balance(receipt.new_balance);
        Ok(receipt)
    }

    /// Applies a perk and stores the balance the backend reports after it.
    pub async fn apply_perk(&self, perk_id: &str) -> Result<PerkApplication, CofferError> {
        let player = self.current_player()?;
        let applied = self.gateway.apply_perk(&player, perk_id).await?;
        self.session.update_balance(applied.new_balance);
        Ok(applied)
    }

    // =====================================================================
    // Read-only "as me" shortcuts
    // =====================================================================

    pub async fn my_stats(&self) -> Result<PlayerStats, CofferError> {
        let player = self.current_player()?;
        Ok(self.gateway.get_stats(&player).await?)
    }

    pub async fn my_qr(&self, format: QrFormat) -> Result<QrCode, CofferError> {
        let player = self.current_player()?;
        Ok(self.gateway.get_qr(&player, format).await?)
    }

    pub async fn my_perks(&self) -> Result<Vec<Perk>, CofferError> {
        let player = self.current_player()?;
        Ok(self.gateway.get_my_perks(&player).await?)
    }
}
