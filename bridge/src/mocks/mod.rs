//! Mock providers for testing.
//!
//! These mocks implement the provider traits with deterministic, in-memory
//! behavior so bridge logic runs at memory speed in tests. They are
//! included under the `test-utils` feature (enabled by default).

pub mod identity;

pub use identity::{MockIdentityProvider, MockProviderSession};
