//! BuildMatch Backend
//!
//! Layered architecture:
//! - buildmatch-core: domain rules, session controller, SQLite repositories
//! - commands: Tauri command handlers
//!
//! All quote-flow state lives in one `SessionController` behind a tokio
//! mutex, so commands never interleave their mutations.

use std::path::PathBuf;
use tauri::{Emitter, Manager};
use tokio::sync::Mutex;

use buildmatch_core::auth::LocalAuthProvider;
use buildmatch_core::config::AppConfig;
use buildmatch_core::repository::{init_db, DbState, ProfileRepository};
use buildmatch_core::SessionController;

mod commands;

/// Application state shared across commands
pub struct AppState {
    pub session: Mutex<SessionController>,
    pub auth: LocalAuthProvider,
    pub profiles: ProfileRepository,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(db_state: &DbState, config: AppConfig) -> Self {
        Self {
            session: Mutex::new(SessionController::default()),
            auth: LocalAuthProvider::new(db_state, config.min_password_len),
            profiles: ProfileRepository::new(db_state.shared()),
            config,
        }
    }
}

fn load_config(app_handle: &tauri::AppHandle) -> AppConfig {
    let loaded = app_handle
        .path()
        .app_config_dir()
        .map_err(|e| e.to_string())
        .and_then(|dir| AppConfig::load(&dir).map_err(|e| e.to_string()));
    match loaded {
        Ok(config) => config,
        Err(e) => {
            let _ = rolling_logger::error(&format!("Config load failed, using defaults: {}", e));
            AppConfig::default()
        }
    }
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle, config: &AppConfig) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let app_dir = app_handle.path().app_data_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir.join(&config.database_file))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let result = tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            if let Err(e) = rolling_logger::init_logger(app_handle.path().app_log_dir()?, "BuildMatch") {
                eprintln!("Failed to init rolling logger: {:?}", e);
            }

            let config = load_config(&app_handle);
            let db_path = get_db_path(&app_handle, &config)?;
            log::info!("App setup starting, db at {}", db_path.display());

            // Repositories share this handle; it is filled once the DB is open
            let db_state = DbState::new();
            app.manage(AppState::new(&db_state, config));

            tauri::async_runtime::spawn(async move {
                match init_db(&db_path).await {
                    Ok(initialized) => {
                        let conn = initialized.conn.lock().await.take();
                        *db_state.conn.lock().await = conn;
                        let _ = rolling_logger::info("Async DB init success");

                        if let Err(e) = app_handle.emit("db-initialized", ()) {
                            log::warn!("Failed to emit db-initialized: {}", e);
                        }
                    }
                    Err(e) => {
                        let _ = rolling_logger::error(&format!("Async DB init failed: {}", e));
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Wizard and vendor selection
            commands::get_session,
            commands::submit_description,
            commands::complete_intake,
            commands::list_vendors,
            commands::toggle_vendor,
            commands::select_vendor,
            commands::submit_quote_requests,
            commands::start_over,
            // Tickets
            commands::delete_ticket,
            commands::cancel_ticket,
            commands::simulate_vendor_response,
            // Auth
            commands::sign_up,
            commands::sign_in,
            commands::sign_out,
            commands::abandon_auth,
            commands::check_access,
            // Profile
            commands::get_profile,
            commands::update_profile,
            commands::update_vendor_profile,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        let _ = rolling_logger::error(&format!("Tauri runtime error: {}", e));
        eprintln!("error while running tauri application: {}", e);
    }
}
