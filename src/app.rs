//! BuildMatch Frontend App
//!
//! Shell with navigation, the current page and toasts. Pages are switched
//! by the `Route` held in `AppContext`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{
    AuthPage, NavBar, ProfilePage, ProtectedRoute, TicketDashboard, ToastHost, VendorDashboard, Wizard,
};
use crate::context::AppContext;
use crate::models::Route;
use crate::store::{store_apply_snapshot, AppState};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let store = Store::new(AppState::default());
    provide_context(store);

    // Pick up whatever session the backend already holds
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_session().await {
                Ok(snapshot) => {
                    web_sys::console::log_1(&format!("[APP] Session loaded at step {}", snapshot.step.as_str()).into());
                    store_apply_snapshot(&store, snapshot);
                }
                Err(e) => ctx.error("Could not load session", e),
            }
        });
    });

    view! {
        <div class="app-shell">
            <NavBar />
            <main class="page">
                {move || match ctx.route.get() {
                    Route::Home => view! { <Wizard /> }.into_any(),
                    Route::Auth => view! { <AuthPage /> }.into_any(),
                    Route::Tickets => view! {
                        <ProtectedRoute route=Route::Tickets><TicketDashboard /></ProtectedRoute>
                    }
                    .into_any(),
                    Route::VendorDashboard => view! {
                        <ProtectedRoute route=Route::VendorDashboard><VendorDashboard /></ProtectedRoute>
                    }
                    .into_any(),
                    Route::Profile => view! {
                        <ProtectedRoute route=Route::Profile><ProfilePage /></ProtectedRoute>
                    }
                    .into_any(),
                }}
            </main>
            <ToastHost />
        </div>
    }
}
