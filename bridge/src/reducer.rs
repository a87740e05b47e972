//! Bridge reducer.
//!
//! This module implements the pure business logic of the auth bridge.
//!
//! # Flow
//!
//! ```text
//! 1. SignOutRequested → session() → sign_out().await → SignedOut | SignOutFailed
//! 2. ProviderSignedIn → validate handle → SignedIn | SignInFailed
//! ```

use crate::actions::BridgeAction;
use crate::environment::BridgeEnvironment;
use crate::providers::{IdentityProvider, ProviderSession, SignInResult};
use crate::state::BridgeState;
use auth_bridge_core::effect::Effect;
use auth_bridge_core::reducer::Reducer;
use auth_bridge_core::{SmallVec, smallvec};
use std::marker::PhantomData;

/// Bridge reducer.
///
/// Stateless: each action is handled independently, and concurrent
/// sign-out requests are neither serialized nor deduplicated. Every
/// sign-out request terminates in exactly one of `SignedOut` or
/// `SignOutFailed`; failures are reported, never swallowed.
pub struct BridgeReducer<P> {
    _identity: PhantomData<P>,
}

impl<P> BridgeReducer<P> {
    /// Create a new bridge reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _identity: PhantomData,
        }
    }
}

impl<P> Default for BridgeReducer<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for BridgeReducer<P> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<P> Reducer for BridgeReducer<P>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    type State = BridgeState;
    type Action = BridgeAction;
    type Environment = BridgeEnvironment<P>;

    fn reduce(
        &self,
        _state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════════════
            // Outbound: application core requested a sign-out
            // ═══════════════════════════════════════════════════════════════════
            BridgeAction::SignOutRequested { correlation_id } => {
                let identity = env.identity.clone();

                smallvec![Effect::run(async move {
                    let session = match identity.session() {
                        Ok(session) => session,
                        Err(error) => {
                            tracing::warn!(%correlation_id, %error, "sign-out not attempted");
                            return Some(BridgeAction::SignOutFailed {
                                correlation_id,
                                error,
                            });
                        },
                    };

                    match session.sign_out().await {
                        Ok(()) => {
                            tracing::info!(%correlation_id, "signed out");
                            Some(BridgeAction::SignedOut { correlation_id })
                        },
                        Err(error) => {
                            tracing::warn!(%correlation_id, %error, "provider sign-out rejected");
                            Some(BridgeAction::SignOutFailed {
                                correlation_id,
                                error,
                            })
                        },
                    }
                })]
            },

            // ═══════════════════════════════════════════════════════════════════
            // Inbound: provider SDK delivered a sign-in callback
            // ═══════════════════════════════════════════════════════════════════
            BridgeAction::ProviderSignedIn { user } => match SignInResult::from_user(&user) {
                Ok(result) => {
                    tracing::debug!(email = %result.email, "sign-in accepted");
                    smallvec![Effect::run(async move {
                        Some(BridgeAction::SignedIn { result })
                    })]
                },
                Err(error) => {
                    tracing::warn!(%error, "sign-in handle rejected");
                    smallvec![Effect::run(async move {
                        Some(BridgeAction::SignInFailed { error })
                    })]
                },
            },

            // ═══════════════════════════════════════════════════════════════════
            // Events (outbound signals) - nothing further to do
            // ═══════════════════════════════════════════════════════════════════
            BridgeAction::SignedIn { .. }
            | BridgeAction::SignInFailed { .. }
            | BridgeAction::SignedOut { .. }
            | BridgeAction::SignOutFailed { .. } => {
                smallvec![Effect::None]
            },
        }
    }
}
