//! Identity provider interface and data model.
//!
//! This module defines the trait for the external identity-provider SDK and
//! the data the provider hands the bridge. The trait is an **interface**,
//! not an implementation: the reducer depends on it, and the embedding
//! application supplies the concrete SDK binding (tests use the mock).
//!
//! The bridge trusts the provider for authenticity. It validates only shape
//! and presence of the fields it forwards; token verification belongs to
//! whoever consumes the emitted credential.

use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};

pub mod identity;

// Re-export provider traits
pub use identity::{IdentityProvider, ProviderSession};

/// Basic profile sub-object of an authenticated-user handle.
///
/// Fields are `Option` because a malformed handle may be missing any of
/// them; an empty string is treated the same as a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BasicProfile {
    /// Display name.
    pub name: Option<String>,

    /// Profile image URL.
    pub image_url: Option<String>,

    /// Email address.
    pub email: Option<String>,
}

/// Authentication response sub-object of an authenticated-user handle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer credential issued by the provider.
    pub id_token: Option<String>,
}

/// The opaque authenticated-user handle delivered by the provider's
/// sign-in callback.
///
/// Constructing the accessors is provider-guaranteed to succeed for a valid
/// handle; whether the *fields* are readable is validated when the bridge
/// builds a [`SignInResult`] from it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Basic profile sub-object.
    pub profile: BasicProfile,

    /// Authentication response sub-object.
    pub auth_response: AuthResponse,
}

impl AuthenticatedUser {
    /// Create a handle from its two sub-objects.
    #[must_use]
    pub const fn new(profile: BasicProfile, auth_response: AuthResponse) -> Self {
        Self {
            profile,
            auth_response,
        }
    }

    /// Basic profile accessor.
    #[must_use]
    pub const fn basic_profile(&self) -> &BasicProfile {
        &self.profile
    }

    /// Authentication response accessor.
    #[must_use]
    pub const fn auth_response(&self) -> &AuthResponse {
        &self.auth_response
    }
}

/// Normalized sign-in payload emitted to the application core.
///
/// All four fields are present and non-empty by construction: a handle
/// failing any read yields a
/// [`MalformedAuthHandle`](BridgeError::MalformedAuthHandle) instead of a
/// partially-populated result. Produced once per successful sign-in;
/// ownership moves to the application core on emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResult {
    /// User's display name.
    pub full_name: String,

    /// Profile image URL.
    pub image_url: String,

    /// Email address.
    pub email: String,

    /// Opaque bearer credential.
    pub id_token: String,
}

impl SignInResult {
    /// Read the four required fields out of an authenticated-user handle.
    ///
    /// Values are forwarded verbatim; the bridge performs no normalization
    /// beyond the presence check.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::MalformedAuthHandle`] naming the first field
    /// that is missing or empty.
    pub fn from_user(user: &AuthenticatedUser) -> Result<Self> {
        let profile = user.basic_profile();
        let auth_response = user.auth_response();

        Ok(Self {
            full_name: required(profile.name.as_deref(), "full_name")?,
            image_url: required(profile.image_url.as_deref(), "image_url")?,
            email: required(profile.email.as_deref(), "email")?,
            id_token: required(auth_response.id_token.as_deref(), "id_token")?,
        })
    }
}

/// Presence check for a required handle field.
fn required(value: Option<&str>, field: &str) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value.to_owned()),
        _ => Err(BridgeError::MalformedAuthHandle {
            field: field.to_owned(),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can unwrap
mod tests {
    use super::*;

    fn complete_user() -> AuthenticatedUser {
        AuthenticatedUser::new(
            BasicProfile {
                name: Some("Ada Lovelace".to_string()),
                image_url: Some("https://x/a.png".to_string()),
                email: Some("ada@example.com".to_string()),
            },
            AuthResponse {
                id_token: Some("tok123".to_string()),
            },
        )
    }

    #[test]
    fn complete_handle_maps_fields_verbatim() {
        let result = SignInResult::from_user(&complete_user()).unwrap();

        assert_eq!(result.full_name, "Ada Lovelace");
        assert_eq!(result.image_url, "https://x/a.png");
        assert_eq!(result.email, "ada@example.com");
        assert_eq!(result.id_token, "tok123");
    }

    #[test]
    fn absent_email_is_rejected() {
        let mut user = complete_user();
        user.profile.email = None;

        let error = SignInResult::from_user(&user).unwrap_err();
        assert_eq!(
            error,
            BridgeError::MalformedAuthHandle {
                field: "email".to_string()
            }
        );
    }

    #[test]
    fn empty_token_is_treated_as_missing() {
        let mut user = complete_user();
        user.auth_response.id_token = Some(String::new());

        let error = SignInResult::from_user(&user).unwrap_err();
        assert_eq!(
            error,
            BridgeError::MalformedAuthHandle {
                field: "id_token".to_string()
            }
        );
    }
}
