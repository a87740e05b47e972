//! Mock identity provider for testing.

use crate::error::{BridgeError, Result};
use crate::providers::{IdentityProvider, ProviderSession};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::Semaphore;

/// Shared state behind a mock provider and the sessions it hands out.
struct MockIdentityInner {
    /// Whether `session()` succeeds.
    available: bool,

    /// Outcome used once the scripted queue is exhausted.
    default_outcome: Result<()>,

    /// Scripted sign-out outcomes, consumed front to back.
    outcomes: Mutex<VecDeque<Result<()>>>,

    /// When present, sign-outs block here until permits are released.
    gate: Option<Semaphore>,

    /// Sign-outs currently parked on the gate.
    in_flight: AtomicUsize,

    /// Total sign-out invocations observed.
    calls: AtomicUsize,
}

/// Mock identity provider.
///
/// Returns predefined responses for testing. Sign-out outcomes can be
/// scripted per call, and the `held` variants park sign-outs on a gate so
/// tests can hold several in flight simultaneously before releasing them.
#[derive(Clone)]
pub struct MockIdentityProvider {
    inner: Arc<MockIdentityInner>,
}

impl MockIdentityProvider {
    fn build(
        available: bool,
        default_outcome: Result<()>,
        outcomes: VecDeque<Result<()>>,
        held: bool,
    ) -> Self {
        Self {
            inner: Arc::new(MockIdentityInner {
                available,
                default_outcome,
                outcomes: Mutex::new(outcomes),
                gate: held.then(|| Semaphore::new(0)),
                in_flight: AtomicUsize::new(0),
                calls: AtomicUsize::new(0),
            }),
        }
    }

    /// Create a mock whose sign-outs always resolve successfully.
    #[must_use]
    pub fn new() -> Self {
        Self::build(true, Ok(()), VecDeque::new(), false)
    }

    /// Create a mock whose sign-outs always reject.
    #[must_use]
    pub fn failing() -> Self {
        Self::build(
            true,
            Err(BridgeError::SignOutFailed {
                reason: "sign-out rejected".to_string(),
            }),
            VecDeque::new(),
            false,
        )
    }

    /// Create a mock whose session handle cannot be obtained.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::build(false, Ok(()), VecDeque::new(), false)
    }

    /// Create a mock with scripted sign-out outcomes.
    ///
    /// Outcomes are consumed in order; once exhausted, sign-outs resolve
    /// successfully.
    #[must_use]
    pub fn with_outcomes(outcomes: impl IntoIterator<Item = Result<()>>) -> Self {
        Self::build(true, Ok(()), outcomes.into_iter().collect(), false)
    }

    /// Create a mock with scripted outcomes whose sign-outs park on a gate
    /// until [`release_sign_outs`](Self::release_sign_outs) is called.
    #[must_use]
    pub fn with_held_outcomes(outcomes: impl IntoIterator<Item = Result<()>>) -> Self {
        Self::build(true, Ok(()), outcomes.into_iter().collect(), true)
    }

    /// Release `n` parked sign-outs.
    ///
    /// No-op for ungated mocks.
    pub fn release_sign_outs(&self, n: usize) {
        if let Some(gate) = self.inner.gate.as_ref() {
            gate.add_permits(n);
        }
    }

    /// Sign-outs currently parked on the gate (for testing).
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.load(Ordering::SeqCst)
    }

    /// Total sign-out invocations observed (for testing).
    #[must_use]
    pub fn sign_out_calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for MockIdentityProvider {
    type Session = MockProviderSession;

    fn session(&self) -> Result<Self::Session> {
        if !self.inner.available {
            return Err(BridgeError::ProviderUnavailable);
        }

        Ok(MockProviderSession {
            inner: Arc::clone(&self.inner),
        })
    }
}

/// Session handle produced by [`MockIdentityProvider`].
pub struct MockProviderSession {
    inner: Arc<MockIdentityInner>,
}

impl ProviderSession for MockProviderSession {
    fn sign_out(&self) -> impl Future<Output = Result<()>> + Send {
        let inner = Arc::clone(&self.inner);

        async move {
            inner.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(gate) = inner.gate.as_ref() {
                inner.in_flight.fetch_add(1, Ordering::SeqCst);
                // Closed only if the mock is torn down mid-test.
                if let Ok(permit) = gate.acquire().await {
                    permit.forget();
                }
                inner.in_flight.fetch_sub(1, Ordering::SeqCst);
            }

            let scripted = inner
                .outcomes
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front();

            scripted.unwrap_or_else(|| inner.default_outcome.clone())
        }
    }
}
