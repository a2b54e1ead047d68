//! Profile Commands

use chrono::Utc;
use tauri::State;

use buildmatch_core::domain::{DomainError, ProfileUpdate, ProfileView, VendorProfileUpdate};

use crate::AppState;

async fn current_user(state: &AppState) -> Result<u32, String> {
    state
        .session
        .lock()
        .await
        .identity()
        .map(|identity| identity.user_id)
        .ok_or_else(|| DomainError::Unauthorized("Please sign in first".to_string()).to_string())
}

#[tauri::command]
pub async fn get_profile(state: State<'_, AppState>) -> Result<ProfileView, String> {
    let user_id = current_user(&state).await?;
    state
        .profiles
        .view(user_id, Utc::now(), state.config.email_change_cooldown_days)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_profile(
    state: State<'_, AppState>,
    update: ProfileUpdate,
) -> Result<ProfileView, String> {
    let user_id = current_user(&state).await?;
    let now = Utc::now();
    let cooldown = state.config.email_change_cooldown_days;

    let profile = state
        .profiles
        .apply_update(user_id, &update, now, cooldown)
        .await
        .map_err(|e| e.to_string())?;
    state.session.lock().await.refresh_email(&profile.email);

    state
        .profiles
        .view(user_id, now, cooldown)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_vendor_profile(
    state: State<'_, AppState>,
    update: VendorProfileUpdate,
) -> Result<ProfileView, String> {
    let user_id = current_user(&state).await?;

    state
        .profiles
        .apply_vendor_update(user_id, &update)
        .await
        .map_err(|e| e.to_string())?;
    state
        .profiles
        .view(user_id, Utc::now(), state.config.email_change_cooldown_days)
        .await
        .map_err(|e| e.to_string())
}
