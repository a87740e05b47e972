//! # Auth Bridge Testing
//!
//! Testing utilities and helpers for the auth bridge architecture.
//!
//! This crate provides:
//! - A fluent [`ReducerTest`] harness with Given-When-Then syntax
//! - Assertion helpers for effects
//! - [`ActionCollector`] for observing a store's broadcast actions
//! - Tracing initialization for test diagnostics
//!
//! ## Example
//!
//! ```ignore
//! use auth_bridge_testing::ActionCollector;
//!
//! #[tokio::test]
//! async fn test_sign_out_flow() {
//!     let store = bridge_store();
//!     let mut collector = ActionCollector::observe(&store);
//!
//!     store.send(BridgeAction::SignOutRequested { correlation_id }).await?;
//!
//!     let signals = collector.take(1, Duration::from_secs(1)).await;
//!     assert_eq!(signals.len(), 1);
//! }
//! ```

pub mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};

use auth_bridge_core::reducer::Reducer;
use auth_bridge_runtime::Store;
use std::time::Duration;
use tokio::sync::broadcast;

/// Initialize tracing for test diagnostics
///
/// Respects `RUST_LOG`; safe to call from multiple tests (subsequent calls
/// are no-ops).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Collects actions from a store's broadcast channel
///
/// Integration tests subscribe an `ActionCollector` before sending commands,
/// then drain the signals the bridge emitted. Lagged receivers skip dropped
/// actions rather than failing the test.
pub struct ActionCollector<A> {
    rx: broadcast::Receiver<A>,
}

impl<A: Clone> ActionCollector<A> {
    /// Subscribe to a store's action broadcast
    ///
    /// Subscribe BEFORE sending the command under test, otherwise the
    /// terminal action may be broadcast before the receiver exists.
    #[must_use]
    pub fn observe<S, R, E>(store: &Store<S, A, E, R>) -> Self
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
        A: Send + 'static,
        S: Send + Sync + 'static,
        E: Clone + Send + Sync + 'static,
    {
        Self {
            rx: store.subscribe_actions(),
        }
    }

    /// Wrap an existing broadcast receiver
    #[must_use]
    pub const fn from_receiver(rx: broadcast::Receiver<A>) -> Self {
        Self { rx }
    }

    /// Receive the next broadcast action, or `None` if the timeout expires
    /// or the channel closes
    pub async fn next(&mut self, timeout: Duration) -> Option<A> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            match tokio::time::timeout(remaining, self.rx.recv()).await {
                Ok(Ok(action)) => return Some(action),
                Ok(Err(broadcast::error::RecvError::Lagged(_))) => {},
                Ok(Err(broadcast::error::RecvError::Closed)) | Err(_) => return None,
            }
        }
    }

    /// Collect up to `n` actions within the overall timeout
    ///
    /// Returns early once `n` actions have been observed; returns whatever
    /// was observed if the timeout expires first.
    pub async fn take(&mut self, n: usize, timeout: Duration) -> Vec<A> {
        let deadline = tokio::time::Instant::now() + timeout;
        let mut collected = Vec::with_capacity(n);

        while collected.len() < n {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                break;
            }
            match self.next(remaining).await {
                Some(action) => collected.push(action),
                None => break,
            }
        }

        collected
    }
}
