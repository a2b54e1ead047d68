//! Protected Route
//!
//! Renders its children only once the backend grants access. No session
//! sends the user to sign in; a role mismatch sends them to their own
//! dashboard with an "Access Denied" toast.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::{Access, Route};

#[component]
pub fn ProtectedRoute(route: Route, children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    let (granted, set_granted) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::check_access(route).await {
                Ok(Access::Granted) => set_granted.set(true),
                Ok(Access::Redirect { to, reason }) => {
                    if let Some(reason) = reason {
                        ctx.error("Access Denied", reason);
                    }
                    match to {
                        Route::Auth => ctx.open_auth(route.required_role().unwrap_or_default(), false),
                        other => ctx.navigate(other),
                    }
                }
                Err(e) => {
                    ctx.error("Access check failed", e);
                    ctx.navigate(Route::Home);
                }
            }
        });
    });

    view! {
        <Show when=move || granted.get() fallback=|| view! { <p class="muted centered">"Checking access..."</p> }>
            {children()}
        </Show>
    }
}
