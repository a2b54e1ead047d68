//! Application Context
//!
//! Navigation and notifications shared via the Leptos Context API.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{AuthRequest, Role, Route, Toast, ToastKind};

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current top-level page
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    /// Parameters the auth page was opened with
    pub auth_request: ReadSignal<AuthRequest>,
    set_auth_request: WriteSignal<AuthRequest>,
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (route, set_route) = signal(Route::Home);
        let (auth_request, set_auth_request) = signal(AuthRequest::default());
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());
        Self {
            route,
            set_route,
            auth_request,
            set_auth_request,
            toasts,
            set_toasts,
            next_toast_id: StoredValue::new(0),
        }
    }

    pub fn navigate(&self, route: Route) {
        web_sys::console::log_1(&format!("[NAV] -> {}", route.path()).into());
        self.set_route.set(route);
    }

    /// Open the auth page for an account type
    pub fn open_auth(&self, role: Role, from_quote: bool) {
        self.set_auth_request.set(AuthRequest { role, from_quote });
        self.navigate(Route::Auth);
    }

    /// Show a toast that dismisses itself after a few seconds
    pub fn notify(&self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) {
        let id = self.next_toast_id.get_value() + 1;
        self.next_toast_id.set_value(id);
        self.set_toasts.update(|toasts| {
            toasts.push(Toast { id, kind, title: title.into(), message: message.into() })
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            gloo_timers::future::sleep(TOAST_LIFETIME).await;
            set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        let message = message.into();
        web_sys::console::error_1(&format!("[ERROR] {}", message).into());
        self.notify(ToastKind::Error, title, message);
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
