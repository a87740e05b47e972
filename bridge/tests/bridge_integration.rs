//! Integration tests for the auth bridge flows.
//!
//! These drive a real store with the mock identity provider and observe the
//! signals the bridge emits over the broadcast channel.

#![allow(clippy::unwrap_used)] // Test code can unwrap
#![allow(clippy::expect_used)] // Test code can use expect
#![allow(clippy::panic)] // Test assertions can panic

use auth_bridge::{
    AuthBridge, AuthResponse, AuthenticatedUser, BasicProfile, BridgeAction, BridgeEnvironment,
    BridgeError, BridgeReducer, BridgeState, mocks::MockIdentityProvider,
};
use auth_bridge_testing::{ActionCollector, ReducerTest, assertions, init_tracing};
use std::time::Duration;
use uuid::Uuid;

const SIGNAL_TIMEOUT: Duration = Duration::from_secs(1);
const QUIET_WINDOW: Duration = Duration::from_millis(100);

fn ada() -> AuthenticatedUser {
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

/// Wait until `n` sign-outs are parked on the mock's gate.
async fn wait_for_in_flight(provider: &MockIdentityProvider, n: usize) {
    tokio::time::timeout(SIGNAL_TIMEOUT, async {
        while provider.in_flight() < n {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("sign-outs did not reach the gate in time");
}

#[tokio::test]
async fn sign_in_callback_emits_verbatim_result() {
    init_tracing();

    let bridge = AuthBridge::new(MockIdentityProvider::new());
    let mut signals = ActionCollector::observe(bridge.store());

    bridge.provider_signed_in(ada()).await.unwrap();

    let signal = signals.next(SIGNAL_TIMEOUT).await.unwrap();
    match signal {
        BridgeAction::SignedIn { result } => {
            assert_eq!(result.full_name, "Ada Lovelace");
            assert_eq!(result.image_url, "https://x/a.png");
            assert_eq!(result.email, "ada@example.com");
            assert_eq!(result.id_token, "tok123");
        },
        other => panic!("expected SignedIn, got {other:?}"),
    }

    // Exactly one signal per callback invocation
    assert!(signals.next(QUIET_WINDOW).await.is_none());
}

#[tokio::test]
async fn sign_in_callback_with_missing_email_reports_malformed_handle() {
    let bridge = AuthBridge::new(MockIdentityProvider::new());
    let mut signals = ActionCollector::observe(bridge.store());

    let mut user = ada();
    user.profile.email = None;
    bridge.provider_signed_in(user).await.unwrap();

    let signal = signals.next(SIGNAL_TIMEOUT).await.unwrap();
    assert_eq!(
        signal,
        BridgeAction::SignInFailed {
            error: BridgeError::MalformedAuthHandle {
                field: "email".to_string(),
            },
        }
    );

    // Zero SignInResult emissions for the malformed handle
    assert!(signals.next(QUIET_WINDOW).await.is_none());
}

#[tokio::test]
async fn sign_out_resolving_emits_single_signed_out_signal() {
    let bridge = AuthBridge::new(MockIdentityProvider::new());
    let mut signals = ActionCollector::from_receiver(bridge.subscribe());

    let correlation_id = Uuid::new_v4();
    bridge.request_sign_out_with(correlation_id).await.unwrap();

    let signal = signals.next(SIGNAL_TIMEOUT).await.unwrap();
    assert_eq!(signal, BridgeAction::SignedOut { correlation_id });

    // One request, one signal; no sign-in emissions
    assert!(signals.next(QUIET_WINDOW).await.is_none());
}

#[tokio::test]
async fn sign_out_rejection_reports_failure_instead_of_success() {
    let bridge = AuthBridge::new(MockIdentityProvider::failing());
    let mut signals = ActionCollector::from_receiver(bridge.subscribe());

    let correlation_id = Uuid::new_v4();
    bridge.request_sign_out_with(correlation_id).await.unwrap();

    let signal = signals.next(SIGNAL_TIMEOUT).await.unwrap();
    match signal {
        BridgeAction::SignOutFailed {
            correlation_id: id,
            error,
        } => {
            assert_eq!(id, correlation_id);
            assert!(matches!(error, BridgeError::SignOutFailed { .. }));
        },
        other => panic!("expected SignOutFailed, got {other:?}"),
    }

    // Failure is the terminal signal; no SignedOut follows
    assert!(signals.next(QUIET_WINDOW).await.is_none());
}

#[tokio::test]
async fn sign_out_with_unavailable_provider_fails_fast() {
    let bridge = AuthBridge::new(MockIdentityProvider::unavailable());
    let mut signals = ActionCollector::from_receiver(bridge.subscribe());

    let correlation_id = Uuid::new_v4();
    bridge.request_sign_out_with(correlation_id).await.unwrap();

    let signal = signals.next(SIGNAL_TIMEOUT).await.unwrap();
    assert_eq!(
        signal,
        BridgeAction::SignOutFailed {
            correlation_id,
            error: BridgeError::ProviderUnavailable,
        }
    );
}

#[tokio::test]
async fn concurrent_sign_out_requests_are_handled_independently() {
    let provider = MockIdentityProvider::with_held_outcomes([
        Ok(()),
        Err(BridgeError::SignOutFailed {
            reason: "sign-out rejected".to_string(),
        }),
    ]);
    let bridge = AuthBridge::new(provider.clone());
    let mut signals = ActionCollector::from_receiver(bridge.subscribe());

    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    // Issue both requests before either resolves
    bridge.request_sign_out_with(first).await.unwrap();
    bridge.request_sign_out_with(second).await.unwrap();
    wait_for_in_flight(&provider, 2).await;

    provider.release_sign_outs(2);

    let outcomes = signals.take(2, SIGNAL_TIMEOUT).await;
    assert_eq!(outcomes.len(), 2);
    assert_eq!(provider.sign_out_calls(), 2);

    // Each request produced its own terminal signal, not a conflated one
    let mut seen_ids = Vec::new();
    let mut signed_out = 0;
    let mut failed = 0;
    for outcome in outcomes {
        match outcome {
            BridgeAction::SignedOut { correlation_id } => {
                signed_out += 1;
                seen_ids.push(correlation_id);
            },
            BridgeAction::SignOutFailed { correlation_id, .. } => {
                failed += 1;
                seen_ids.push(correlation_id);
            },
            other => panic!("unexpected signal {other:?}"),
        }
    }
    assert_eq!(signed_out, 1);
    assert_eq!(failed, 1);
    seen_ids.sort();
    let mut expected = vec![first, second];
    expected.sort();
    assert_eq!(seen_ids, expected);
}

#[tokio::test]
async fn request_response_wiring_resolves_via_terminal_event() {
    let bridge = AuthBridge::new(MockIdentityProvider::new());

    let correlation_id = Uuid::new_v4();
    let terminal = bridge
        .store()
        .send_and_wait_for(
            BridgeAction::SignOutRequested { correlation_id },
            |a| {
                matches!(
                    a,
                    BridgeAction::SignedOut { correlation_id: id }
                    | BridgeAction::SignOutFailed { correlation_id: id, .. }
                    if *id == correlation_id
                )
            },
            SIGNAL_TIMEOUT,
        )
        .await
        .unwrap();

    assert_eq!(terminal, BridgeAction::SignedOut { correlation_id });
}

#[test]
fn reducer_produces_one_effect_per_sign_out_request() {
    ReducerTest::new(BridgeReducer::new())
        .with_env(BridgeEnvironment::new(MockIdentityProvider::new()))
        .given_state(BridgeState)
        .when_action(BridgeAction::SignOutRequested {
            correlation_id: Uuid::new_v4(),
        })
        .then_state(|state| {
            // Stateless bridge: nothing to observe
            assert_eq!(*state, BridgeState);
        })
        .then_effects(|effects| {
            assertions::assert_effects_count(effects, 1);
            assertions::assert_has_future_effect(effects);
        })
        .run();
}

#[test]
fn reducer_treats_events_as_terminal() {
    ReducerTest::new(BridgeReducer::new())
        .with_env(BridgeEnvironment::new(MockIdentityProvider::new()))
        .given_state(BridgeState)
        .when_action(BridgeAction::SignedOut {
            correlation_id: Uuid::new_v4(),
        })
        .then_effects(|effects| {
            assertions::assert_no_effects(effects);
        })
        .run();
}
