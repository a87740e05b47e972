//! Identity provider trait.

use crate::error::Result;

/// Identity provider SDK handle.
///
/// This trait abstracts over the external identity-provider SDK. The
/// provider's ambient "current auth instance" becomes an explicit injected
/// dependency, so the bridge can be exercised against a fake in tests.
///
/// # Implementation Notes
///
/// - `session()` is a cheap accessor; it must not perform I/O
/// - Session state is owned entirely by the provider; the bridge only reads
///   from it or requests actions on it
pub trait IdentityProvider: Send + Sync {
    /// The provider's session handle type.
    type Session: ProviderSession + Send;

    /// Obtain the current provider session handle.
    ///
    /// A session with no authenticated user is still a valid session;
    /// requesting a sign-out on it completes as a no-op success.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::ProviderUnavailable`](crate::BridgeError::ProviderUnavailable)
    /// if the SDK has no usable auth instance (e.g., not yet initialized).
    fn session(&self) -> Result<Self::Session>;
}

/// Provider session handle.
///
/// Obtained from [`IdentityProvider::session`]; the bridge never mutates
/// provider-internal state through it.
pub trait ProviderSession {
    /// Invoke the provider's asynchronous sign-out operation.
    ///
    /// The bridge imposes no timeout and cannot cancel the operation once
    /// requested; any hang is governed by the provider SDK's own policy.
    ///
    /// # Errors
    ///
    /// Returns error if the provider rejects the sign-out. The bridge
    /// reports the failure and does not retry.
    fn sign_out(&self) -> impl std::future::Future<Output = Result<()>> + Send;
}
