//! # Auth Bridge
//!
//! This crate provides the bridge between an external identity-provider SDK
//! and an application's internal message channel.
//!
//! Provider-initiated events (sign-in completion, sign-out completion) are
//! translated into normalized, typed messages sent inward to the application
//! core; application-initiated requests (request sign-out) are translated
//! into calls against the provider SDK. The bridge validates the shape of
//! what it forwards but trusts the provider for authenticity.
//!
//! ## Architecture
//!
//! The bridge is implemented as a reducer and effects:
//!
//! ```text
//! Action → Reducer → Effects → Effect Execution → More Actions
//! ```
//!
//! - Commands (`SignOutRequested`, `ProviderSignedIn`) enter through the
//!   store, the inbound half of the message channel.
//! - Events (`SignedIn`, `SignedOut`, and the failure signals) are produced
//!   by effects and fanned out to observers over the store's broadcast
//!   channel, the outbound half.
//! - The provider SDK is an explicit injected dependency
//!   ([`providers::IdentityProvider`]), substitutable with a mock in tests.
//!
//! The bridge holds no state of its own: every failure is local to a single
//! event handling, and sign-out failures are always reported, never
//! silently dropped.
//!
//! ## Example
//!
//! ```rust,ignore
//! use auth_bridge::{AuthBridge, BridgeAction};
//!
//! let bridge = AuthBridge::new(provider);
//! let mut signals = bridge.subscribe();
//!
//! // Application core requests a sign-out
//! let correlation_id = bridge.request_sign_out().await?;
//!
//! // ...and observes the outcome
//! match signals.recv().await? {
//!     BridgeAction::SignedOut { .. } => println!("signed out"),
//!     BridgeAction::SignOutFailed { error, .. } => eprintln!("{error}"),
//!     _ => {}
//! }
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Public modules
pub mod actions;
pub mod bridge;
pub mod environment;
pub mod error;
pub mod providers;
pub mod reducer;
pub mod state;

#[cfg(feature = "test-utils")]
pub mod mocks;

// Re-export main types for convenience
pub use actions::BridgeAction;
pub use bridge::{AuthBridge, BridgeStore};
pub use environment::BridgeEnvironment;
pub use error::{BridgeError, Result};
pub use providers::{AuthResponse, AuthenticatedUser, BasicProfile, SignInResult};
pub use reducer::BridgeReducer;
pub use state::BridgeState;
