//! Top navigation with the account menu

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::{Role, Route, ToastKind};
use crate::store::{store_apply_snapshot, use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let sign_out = move |_| {
        spawn_local(async move {
            match commands::sign_out().await {
                Ok(snapshot) => {
                    store_apply_snapshot(&store, snapshot);
                    ctx.navigate(Route::Home);
                    ctx.notify(ToastKind::Info, "Signed out", "See you next time.");
                }
                Err(e) => ctx.error("Sign out failed", e),
            }
        });
    };

    view! {
        <nav class="nav-bar">
            <button class="brand" on:click=move |_| ctx.navigate(Route::Home)>
                <span class="brand-mark">"BM"</span>
                <span class="brand-name">"BuildMatch"</span>
            </button>

            <div class="nav-links">
                {move || match store.identity().get() {
                    Some(identity) => {
                        let (label, area) = match identity.role {
                            Role::Client => ("My Quotes", Route::Tickets),
                            Role::Vendor => ("Vendor Dashboard", Route::VendorDashboard),
                        };
                        view! {
                            <button class="btn ghost" on:click=move |_| ctx.navigate(area)>{label}</button>
                            <button class="btn ghost" on:click=move |_| ctx.navigate(Route::Profile)>"Profile"</button>
                            <span class="account-email">{identity.email.clone()}</span>
                            <button class="btn outline" on:click=sign_out>"Sign out"</button>
                        }
                        .into_any()
                    }
                    None => view! {
                        <button class="btn ghost" on:click=move |_| ctx.open_auth(Role::Vendor, false)>
                            "For Vendors"
                        </button>
                        <button class="btn primary" on:click=move |_| ctx.open_auth(Role::Client, false)>
                            "Sign In"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </nav>
    }
}
