//! Bridge actions.
//!
//! This module defines all possible actions in the auth bridge.
//! Actions split into **commands** (inputs: requests from the application
//! core and callbacks from the provider SDK) and **events** (outputs: the
//! normalized signals effects feed back, observable over the store's
//! broadcast channel).

use crate::error::BridgeError;
use crate::providers::{AuthenticatedUser, SignInResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bridge action.
///
/// This enum represents all possible inputs to the bridge reducer.
///
/// # Architecture Note
///
/// Actions are the **only** way to communicate with the bridge.
/// The reducer is a pure function: `(State, Action, Env) → Effects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BridgeAction {
    // ═══════════════════════════════════════════════════════════════════════
    // Commands
    // ═══════════════════════════════════════════════════════════════════════
    /// The application core requests a sign-out.
    ///
    /// # Flow
    ///
    /// 1. Reducer returns one effect
    /// 2. Effect obtains the provider session and awaits its sign-out
    /// 3. Exactly one of [`SignedOut`](Self::SignedOut) or
    ///    [`SignOutFailed`](Self::SignOutFailed) is fed back
    ///
    /// Repeated requests are not deduplicated; each is forwarded to the
    /// provider independently.
    SignOutRequested {
        /// Correlation ID echoed by this request's terminal event.
        correlation_id: Uuid,
    },

    /// The provider SDK completed an interactive sign-in.
    ///
    /// The provider owns the timing of this callback; the bridge must be
    /// ready for it at any point after initialization. Validation of the
    /// handle happens synchronously in the reducer.
    ProviderSignedIn {
        /// The authenticated-user handle the SDK delivered.
        user: AuthenticatedUser,
    },

    // ═══════════════════════════════════════════════════════════════════════
    // Events
    // ═══════════════════════════════════════════════════════════════════════
    /// A sign-in completed and validated.
    ///
    /// Emitted exactly once per accepted callback invocation; the payload's
    /// four fields equal the handle's values verbatim.
    SignedIn {
        /// Normalized sign-in payload. Ownership transfers to the
        /// application core.
        result: SignInResult,
    },

    /// A sign-in callback carried a malformed handle.
    ///
    /// No [`SignedIn`](Self::SignedIn) is emitted for the same callback.
    SignInFailed {
        /// Why the handle was rejected.
        error: BridgeError,
    },

    /// The provider's sign-out completed.
    SignedOut {
        /// Correlation ID of the originating request.
        correlation_id: Uuid,
    },

    /// A sign-out request failed.
    ///
    /// Carries both the unobtainable-session case
    /// ([`ProviderUnavailable`](BridgeError::ProviderUnavailable)) and a
    /// rejected provider sign-out
    /// ([`SignOutFailed`](BridgeError::SignOutFailed)). Never dropped
    /// silently.
    SignOutFailed {
        /// Correlation ID of the originating request.
        correlation_id: Uuid,

        /// Why the sign-out failed.
        error: BridgeError,
    },
}

impl BridgeAction {
    /// Returns `true` for event actions (the bridge's outbound signals).
    #[must_use]
    pub const fn is_event(&self) -> bool {
        matches!(
            self,
            Self::SignedIn { .. }
                | Self::SignInFailed { .. }
                | Self::SignedOut { .. }
                | Self::SignOutFailed { .. }
        )
    }
}
