//! Error types for bridge operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Error taxonomy for the auth bridge.
///
/// Every failure mode is local to a single event handling; the bridge is
/// stateless, so no failure can corrupt it. Errors are `Clone` and serde-
/// capable because they ride inside broadcast actions out to observers.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeError {
    // ═══════════════════════════════════════════════════════════
    // Provider Errors
    // ═══════════════════════════════════════════════════════════
    /// The provider session handle could not be obtained (e.g., the SDK is
    /// not yet initialized). The requested operation is not attempted.
    #[error("Identity provider unavailable")]
    ProviderUnavailable,

    /// The provider's asynchronous sign-out operation rejected.
    ///
    /// Not retried; always reported to the application core.
    #[error("Provider sign-out failed: {reason}")]
    SignOutFailed {
        /// Provider-supplied description of the failure
        reason: String,
    },

    // ═══════════════════════════════════════════════════════════
    // Sign-In Errors
    // ═══════════════════════════════════════════════════════════
    /// A required sign-in field is missing, empty, or unreadable.
    ///
    /// Sign-in handling fails as a whole; no partially-populated result is
    /// ever emitted.
    #[error("Malformed authenticated-user handle: missing {field}")]
    MalformedAuthHandle {
        /// The first required field that could not be read
        field: String,
    },
}

impl BridgeError {
    /// Returns `true` if this error originated on the provider side.
    ///
    /// # Examples
    ///
    /// ```
    /// # use auth_bridge::BridgeError;
    /// assert!(BridgeError::ProviderUnavailable.is_provider_fault());
    /// ```
    #[must_use]
    pub const fn is_provider_fault(&self) -> bool {
        matches!(self, Self::ProviderUnavailable | Self::SignOutFailed { .. })
    }

    /// Returns `true` if this error came from a malformed sign-in handle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use auth_bridge::BridgeError;
    /// let error = BridgeError::MalformedAuthHandle { field: "email".to_string() };
    /// assert!(error.is_malformed_handle());
    /// ```
    #[must_use]
    pub const fn is_malformed_handle(&self) -> bool {
        matches!(self, Self::MalformedAuthHandle { .. })
    }
}
