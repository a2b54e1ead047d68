//! Vendor Dashboard

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Route;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn VendorDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let email = move || store.identity().get().map(|identity| identity.email).unwrap_or_default();

    view! {
        <section class="vendor-dashboard">
            <div class="step-header">
                <h1>"Vendor Dashboard"</h1>
                <p class="lead">"Signed in as " {email}</p>
            </div>
            <div class="card empty-state">
                <h3>"No incoming requests yet"</h3>
                <p class="muted">
                    "Clients pick vendors by category. Keep your business profile complete so they can find you."
                </p>
                <button class="btn primary" on:click=move |_| ctx.navigate(Route::Profile)>
                    "Edit Business Profile"
                </button>
            </div>
        </section>
    }
}
