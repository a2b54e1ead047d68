//! Global Application State Store
//!
//! Mirror of the backend session snapshot, using reactive_stores for
//! field-level reactivity. The backend stays the source of truth; every
//! command reply is written back through `store_apply_snapshot`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{AuthRedirectState, Identity, SessionSnapshot, Ticket, TicketSummary, WizardStep};
use buildmatch_core::domain::{ProjectData, VendorSelection};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub step: WizardStep,
    pub project: ProjectData,
    pub selections: Vec<VendorSelection>,
    pub tickets: Vec<Ticket>,
    pub summary: TicketSummary,
    pub auth_redirect: Option<AuthRedirectState>,
    pub identity: Option<Identity>,
    /// Quote submission in flight
    pub submitting: bool,
}

pub type AppStore = Store<AppState>;

pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_apply_snapshot(store: &AppStore, snapshot: SessionSnapshot) {
    store.step().set(snapshot.step);
    store.project().set(snapshot.project);
    store.selections().set(snapshot.selections);
    store.tickets().set(snapshot.tickets);
    store.summary().set(snapshot.summary);
    store.auth_redirect().set(snapshot.auth_redirect);
    store.identity().set(snapshot.identity);
}

/// Replace one ticket in place (after a simulated vendor reply)
pub fn store_update_ticket(store: &AppStore, updated: Ticket) {
    if let Some(ticket) = store.tickets().write().iter_mut().find(|t| t.id == updated.id) {
        *ticket = updated;
    }
    let summary = buildmatch_core::domain::summarize(&store.tickets().read());
    store.summary().set(summary);
}

pub fn store_is_selected(store: &AppStore, group_name: &str, vendor_id: &str) -> bool {
    store
        .selections()
        .read()
        .iter()
        .any(|s| s.group_name == group_name && s.vendor_id == vendor_id)
}

pub fn store_selected_count(store: &AppStore, group_name: &str) -> usize {
    store
        .selections()
        .read()
        .iter()
        .filter(|s| s.group_name == group_name)
        .count()
}
