//! Auth Commands
//!
//! Sign-up, sign-in and the hand-back of any action parked behind the
//! sign-in detour.

use tauri::State;

use buildmatch_core::auth::AuthProvider;
use buildmatch_core::domain::{
    check_access as access_for, post_auth_destination, Access, DomainError, Role, Route, SignUpRequest,
};
use buildmatch_core::{AuthOutcome, Identity, SessionSnapshot};

use crate::AppState;

/// Record the identity in the session, resume the parked action and
/// work out where the UI goes next
async fn finish_auth(state: &AppState, identity: Identity, requested_area: Role) -> Result<AuthOutcome, String> {
    let mut session = state.session.lock().await;
    let returning_to_quote = session
        .snapshot()
        .auth_redirect
        .map(|r| r.was_redirected_from_auth)
        .unwrap_or(false);

    let resumed = session
        .on_authenticated(identity.clone())
        .map_err(|e| e.to_string())?;
    let destination = post_auth_destination(requested_area, identity.role, returning_to_quote);

    Ok(AuthOutcome {
        identity,
        destination,
        resumed,
        session: session.snapshot(),
    })
}

#[tauri::command]
pub async fn sign_up(
    state: State<'_, AppState>,
    request: SignUpRequest,
) -> Result<AuthOutcome, String> {
    let identity = state.auth.sign_up(&request).await.map_err(|e| e.to_string())?;
    finish_auth(&state, identity, request.role).await
}

#[tauri::command]
pub async fn sign_in(
    state: State<'_, AppState>,
    email: String,
    password: String,
    expected_role: Role,
) -> Result<AuthOutcome, String> {
    match state.auth.sign_in(&email, &password, Some(expected_role)).await {
        Ok(identity) => finish_auth(&state, identity, expected_role).await,
        Err(e) => {
            // The provider already dropped a mismatched session; a parked
            // quote request survives for the next attempt
            if matches!(e, DomainError::RoleMismatch { .. }) {
                state.session.lock().await.reject_sign_in();
            }
            Err(e.to_string())
        }
    }
}

#[tauri::command]
pub async fn sign_out(state: State<'_, AppState>) -> Result<SessionSnapshot, String> {
    state.auth.sign_out().await;
    let mut session = state.session.lock().await;
    session.sign_out();
    Ok(session.snapshot())
}

/// User left the sign-in page without finishing
#[tauri::command]
pub async fn abandon_auth(state: State<'_, AppState>) -> Result<SessionSnapshot, String> {
    let mut session = state.session.lock().await;
    session.abandon_auth();
    Ok(session.snapshot())
}

#[tauri::command]
pub async fn check_access(state: State<'_, AppState>, route: Route) -> Result<Access, String> {
    let role = state.session.lock().await.current_user_role();
    Ok(access_for(role, route))
}
