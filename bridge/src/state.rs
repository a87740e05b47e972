//! Bridge state.

use serde::{Deserialize, Serialize};

/// Bridge state.
///
/// The bridge is stateless across events: it holds no state machine of its
/// own and retains no copy of anything it forwards. The provider session's
/// Unauthenticated → Authenticated → Unauthenticated transitions are owned
/// entirely by the provider SDK; the bridge only reacts to transition
/// notifications.
///
/// The marker type exists so the bridge plugs into the store runtime like
/// any other reducer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeState;
