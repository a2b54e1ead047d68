//! Ticket Commands

use tauri::State;

use buildmatch_core::domain::{Ticket, VendorResponse};
use buildmatch_core::SessionSnapshot;

use crate::AppState;

/// Remove a ticket; unknown IDs leave the list unchanged
#[tauri::command]
pub async fn delete_ticket(
    state: State<'_, AppState>,
    ticket_id: String,
) -> Result<SessionSnapshot, String> {
    let mut session = state.session.lock().await;
    if !session.delete_ticket(&ticket_id) {
        log::debug!("delete_ticket: {} not found", ticket_id);
    }
    Ok(session.snapshot())
}

/// Withdraw a request while it is still pending
#[tauri::command]
pub async fn cancel_ticket(
    state: State<'_, AppState>,
    ticket_id: String,
) -> Result<SessionSnapshot, String> {
    let mut session = state.session.lock().await;
    if !session.cancel_ticket(&ticket_id) {
        return Err("Only pending requests can be cancelled".to_string());
    }
    Ok(session.snapshot())
}

/// Stand-in for a vendor answering a request
#[tauri::command]
pub async fn simulate_vendor_response(
    state: State<'_, AppState>,
    ticket_id: String,
    response: VendorResponse,
) -> Result<Ticket, String> {
    let mut session = state.session.lock().await;
    session
        .apply_vendor_response(&ticket_id, response)
        .map_err(|e| e.to_string())
}
