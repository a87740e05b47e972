//! Bridge environment.
//!
//! This module defines the environment type for dependency injection
//! in the bridge reducer.

use crate::providers::IdentityProvider;

/// Bridge environment.
///
/// Contains the external dependencies needed by the bridge reducer.
///
/// # Type Parameters
///
/// - `P`: Identity provider
#[derive(Clone)]
pub struct BridgeEnvironment<P>
where
    P: IdentityProvider + Clone,
{
    /// Identity provider SDK handle.
    pub identity: P,
}

impl<P> BridgeEnvironment<P>
where
    P: IdentityProvider + Clone,
{
    /// Create a new bridge environment.
    #[must_use]
    pub const fn new(identity: P) -> Self {
        Self { identity }
    }
}
