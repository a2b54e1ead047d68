//! Auth / Redirect Gate
//!
//! Ticket-creating actions need a signed-in client. Without a session the
//! gate parks the action as an explicit continuation, records where to come
//! back to, and lets the caller send the user through sign-in. After sign-in
//! the parked action is handed back exactly once.

use serde::{Deserialize, Serialize};

/// Where the quote flow sends unauthenticated users
pub const QUOTE_REDIRECT_PATH: &str = "/auth?type=client&redirect=quote";

/// One vendor picked under one category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VendorSelection {
    pub group_name: String,
    pub vendor_id: String,
}

/// A deferred ticket-creating action and its arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PendingAction {
    SelectVendor { group_name: String, vendor_id: String },
    SubmitSelections { selections: Vec<VendorSelection> },
}

/// Intent carried across the sign-in detour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuthRedirectState {
    pub was_redirected_from_auth: bool,
    pub redirect_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Session present: run the action now
    Proceed(PendingAction),
    /// No session: action parked, send the user to sign in
    Detour(AuthRedirectState),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthGate {
    pending: Option<PendingAction>,
    redirect: Option<AuthRedirectState>,
}

impl AuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let the action through, or park it if there is no session.
    /// A newer detour replaces an older parked action.
    pub fn guard(&mut self, has_session: bool, action: PendingAction, redirect_path: &str) -> GateDecision {
        if has_session {
            return GateDecision::Proceed(action);
        }

        let state = AuthRedirectState {
            was_redirected_from_auth: true,
            redirect_path: redirect_path.to_string(),
        };
        log::debug!("auth gate: parking {:?}, redirect to {}", action, redirect_path);
        self.pending = Some(action);
        self.redirect = Some(state.clone());
        GateDecision::Detour(state)
    }

    /// Take the parked action after a successful sign-in. `None` when
    /// nothing is parked (never started, already resumed, or lost).
    pub fn resume(&mut self) -> Option<PendingAction> {
        self.redirect = None;
        self.pending.take()
    }

    /// User backed out of sign-in: drop the parked action
    pub fn abandon(&mut self) {
        self.pending = None;
        self.redirect = None;
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn redirect_state(&self) -> Option<&AuthRedirectState> {
        self.redirect.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(vendor_id: &str) -> PendingAction {
        PendingAction::SelectVendor {
            group_name: "Real Estate".into(),
            vendor_id: vendor_id.into(),
        }
    }

    #[test]
    fn test_session_present_proceeds() {
        let mut gate = AuthGate::new();
        assert_eq!(gate.guard(true, select("1"), QUOTE_REDIRECT_PATH), GateDecision::Proceed(select("1")));
        assert!(gate.pending().is_none());
        assert!(gate.redirect_state().is_none());
    }

    #[test]
    fn test_detour_parks_action_once() {
        let mut gate = AuthGate::new();
        match gate.guard(false, select("1"), QUOTE_REDIRECT_PATH) {
            GateDecision::Detour(state) => {
                assert!(state.was_redirected_from_auth);
                assert_eq!(state.redirect_path, QUOTE_REDIRECT_PATH);
            }
            other => panic!("expected detour, got {:?}", other),
        }
        assert_eq!(gate.pending(), Some(&select("1")));

        assert_eq!(gate.resume(), Some(select("1")));
        assert_eq!(gate.resume(), None);
        assert!(gate.redirect_state().is_none());
    }

    #[test]
    fn test_newer_detour_replaces_older() {
        let mut gate = AuthGate::new();
        gate.guard(false, select("1"), QUOTE_REDIRECT_PATH);
        gate.guard(false, select("2"), QUOTE_REDIRECT_PATH);
        assert_eq!(gate.resume(), Some(select("2")));
    }

    #[test]
    fn test_abandon_drops_action() {
        let mut gate = AuthGate::new();
        gate.guard(false, select("3"), QUOTE_REDIRECT_PATH);
        gate.abandon();
        assert_eq!(gate, AuthGate::new());
        assert_eq!(gate.resume(), None);
    }
}
