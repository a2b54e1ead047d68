//! Wizard Commands
//!
//! Project description, questionnaire, vendor listing and quote requests.

use tauri::State;

use buildmatch_core::domain::{IntakeAnswers, Vendor};
use buildmatch_core::{QuoteRequest, SelectionOutcome, SessionSnapshot};

use crate::AppState;

#[tauri::command]
pub async fn get_session(state: State<'_, AppState>) -> Result<SessionSnapshot, String> {
    Ok(state.session.lock().await.snapshot())
}

/// initial -> questionnaire
#[tauri::command]
pub async fn submit_description(
    state: State<'_, AppState>,
    description: String,
) -> Result<SessionSnapshot, String> {
    let mut session = state.session.lock().await;
    session.submit_description(&description).map_err(|e| e.to_string())?;
    Ok(session.snapshot())
}

/// questionnaire -> services
#[tauri::command]
pub async fn complete_intake(
    state: State<'_, AppState>,
    answers: IntakeAnswers,
) -> Result<SessionSnapshot, String> {
    let mut session = state.session.lock().await;
    session
        .complete_intake(answers.into_submission())
        .map_err(|e| e.to_string())?;
    Ok(session.snapshot())
}

#[tauri::command]
pub async fn list_vendors(
    state: State<'_, AppState>,
    group_name: String,
) -> Result<Vec<Vendor>, String> {
    Ok(state.session.lock().await.vendors_for(&group_name))
}

#[tauri::command]
pub async fn toggle_vendor(
    state: State<'_, AppState>,
    group_name: String,
    vendor_id: String,
) -> Result<SessionSnapshot, String> {
    let mut session = state.session.lock().await;
    session
        .toggle_selection(&group_name, &vendor_id)
        .map_err(|e| e.to_string())?;
    Ok(session.snapshot())
}

/// Request a quote from one vendor (may detour through sign-in)
#[tauri::command]
pub async fn select_vendor(
    state: State<'_, AppState>,
    group_name: String,
    vendor_id: String,
) -> Result<SelectionOutcome, String> {
    let mut session = state.session.lock().await;
    session
        .select_vendor(&group_name, &vendor_id)
        .map_err(|e| e.to_string())
}

/// Submit every selected vendor. Tickets appear after the simulated
/// submission delay; a reset during the delay discards them.
#[tauri::command]
pub async fn submit_quote_requests(state: State<'_, AppState>) -> Result<SelectionOutcome, String> {
    let request = state
        .session
        .lock()
        .await
        .request_quotes()
        .map_err(|e| e.to_string())?;

    let plan = match request {
        QuoteRequest::AuthRequired(redirect) => return Ok(SelectionOutcome::AuthRequired { redirect }),
        QuoteRequest::Ready(plan) => plan,
    };

    // Lock released while waiting so "start over" can get in
    tokio::time::sleep(state.config.submit_delay()).await;

    let tickets = state.session.lock().await.commit_submission(plan);
    Ok(SelectionOutcome::TicketsCreated { tickets })
}

/// Back to the empty wizard; pending submissions are dropped
#[tauri::command]
pub async fn start_over(state: State<'_, AppState>) -> Result<SessionSnapshot, String> {
    let mut session = state.session.lock().await;
    session.reset();
    Ok(session.snapshot())
}
