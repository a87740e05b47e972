//! Bridge facade.
//!
//! Wires the bridge reducer into a store and exposes the two boundary
//! surfaces: the registration points the provider SDK and application core
//! call into, and the broadcast subscription the application core observes.

use crate::actions::BridgeAction;
use crate::environment::BridgeEnvironment;
use crate::providers::{AuthenticatedUser, IdentityProvider};
use crate::reducer::BridgeReducer;
use crate::state::BridgeState;
use auth_bridge_runtime::{Store, StoreConfig, StoreError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use uuid::Uuid;

/// The store type backing an [`AuthBridge`].
pub type BridgeStore<P> = Store<BridgeState, BridgeAction, BridgeEnvironment<P>, BridgeReducer<P>>;

/// Auth bridge facade.
///
/// Owns a store running the [`BridgeReducer`] and surfaces the bridge's
/// external interface:
///
/// - [`provider_signed_in`](Self::provider_signed_in): the registration
///   point for the provider SDK's sign-in callback
/// - [`request_sign_out`](Self::request_sign_out): the inbound slot the
///   application core sends sign-out requests to
/// - [`subscribe`](Self::subscribe): the outbound slots
///   (`SignedIn` / `SignedOut` / failure signals)
///
/// # Example
///
/// ```rust,ignore
/// let bridge = AuthBridge::new(provider);
/// let mut signals = bridge.subscribe();
///
/// let id = bridge.request_sign_out().await?;
/// ```
pub struct AuthBridge<P>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    store: Arc<BridgeStore<P>>,
}

impl<P> Clone for AuthBridge<P>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<P> AuthBridge<P>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    /// Create a bridge over the given identity provider.
    #[must_use]
    pub fn new(identity: P) -> Self {
        Self::with_config(identity, StoreConfig::default())
    }

    /// Create a bridge with custom store configuration.
    #[must_use]
    pub fn with_config(identity: P, config: StoreConfig) -> Self {
        let store = Store::with_config(
            BridgeState,
            BridgeReducer::new(),
            BridgeEnvironment::new(identity),
            config,
        );

        Self {
            store: Arc::new(store),
        }
    }

    /// Subscribe to the bridge's outbound signals.
    ///
    /// Subscribe before issuing requests, otherwise early signals may be
    /// missed.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<BridgeAction> {
        self.store.subscribe_actions()
    }

    /// Request a sign-out on behalf of the application core.
    ///
    /// Returns the correlation ID that this request's terminal signal
    /// (`SignedOut` or `SignOutFailed`) will carry. Requests are not
    /// deduplicated; each is forwarded to the provider independently.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the bridge is shutting
    /// down.
    pub async fn request_sign_out(&self) -> Result<Uuid, StoreError> {
        let correlation_id = Uuid::new_v4();
        self.request_sign_out_with(correlation_id).await?;
        Ok(correlation_id)
    }

    /// Request a sign-out with a caller-supplied correlation ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the bridge is shutting
    /// down.
    pub async fn request_sign_out_with(&self, correlation_id: Uuid) -> Result<(), StoreError> {
        self.store
            .send(BridgeAction::SignOutRequested { correlation_id })
            .await
            .map(|_| ())
    }

    /// Deliver a provider sign-in callback.
    ///
    /// The provider SDK owns the timing of this call; the bridge is ready
    /// for it at any point after construction. The handle is validated and
    /// exactly one of `SignedIn` or `SignInFailed` is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the bridge is shutting
    /// down.
    pub async fn provider_signed_in(&self, user: AuthenticatedUser) -> Result<(), StoreError> {
        self.store
            .send(BridgeAction::ProviderSignedIn { user })
            .await
            .map(|_| ())
    }

    /// Access the underlying store (for advanced wiring such as
    /// `send_and_wait_for`).
    #[must_use]
    pub fn store(&self) -> &BridgeStore<P> {
        &self.store
    }

    /// Gracefully shut the bridge down, waiting for in-flight effects.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if effects are still running
    /// when the timeout expires.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        self.store.shutdown(timeout).await
    }
}
