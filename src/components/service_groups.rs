//! Service Groups
//!
//! Final wizard step: one card per matched category with its vendors.
//! Quote requests go through the backend auth gate; an unauthenticated
//! request sends the user to sign in and resumes afterwards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::VendorCard;
use crate::context::{use_app_context, AppContext};
use crate::models::{Role, Route, SelectionOutcome, ToastKind, Vendor};
use crate::store::{
    store_apply_snapshot, store_is_selected, store_selected_count, use_app_store, AppStateStoreFields, AppStore,
};

/// Apply a ticket-creating reply: refresh, notify, or detour to sign-in
async fn handle_outcome(ctx: AppContext, store: AppStore, outcome: SelectionOutcome, go_to_tickets: bool) {
    match outcome {
        SelectionOutcome::AuthRequired { redirect } => {
            web_sys::console::log_1(&format!("[QUOTE] auth required, redirect {}", redirect.redirect_path).into());
            ctx.notify(ToastKind::Info, "Sign in required", "Please sign in to request quotes.");
            ctx.open_auth(Role::Client, true);
        }
        SelectionOutcome::TicketsCreated { tickets } => {
            if let Ok(snapshot) = commands::get_session().await {
                store_apply_snapshot(&store, snapshot);
            }
            if tickets.is_empty() {
                // Discarded by a reset during submission
                return;
            }
            let message = match tickets.as_slice() {
                [ticket] => format!("Request sent to {}.", ticket.vendor.name),
                many => format!("Requests sent to {} vendors.", many.len()),
            };
            ctx.notify(ToastKind::Success, "Quote requested", message);
            if go_to_tickets {
                ctx.navigate(Route::Tickets);
            }
        }
    }
}

#[component]
fn ServiceGroupCard(group_name: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (vendors, set_vendors) = signal(Vec::<Vendor>::new());

    let group = StoredValue::new(group_name.clone());
    Effect::new(move |_| {
        let name = group.get_value();
        spawn_local(async move {
            match commands::list_vendors(&name).await {
                Ok(loaded) => set_vendors.set(loaded),
                Err(e) => ctx.error("Could not load vendors", e),
            }
        });
    });

    let selected_count = move || store_selected_count(&store, &group.get_value());

    view! {
        <div class="card service-group">
            <div class="group-head">
                <h2>{group_name}</h2>
                <Show when=move || { selected_count() > 0 }>
                    <span class="badge">{move || format!("{} selected", selected_count())}</span>
                </Show>
            </div>
            <div class="vendor-grid">
                <For
                    each=move || vendors.get()
                    key=|vendor| vendor.id.clone()
                    children=move |vendor| {
                        let vendor_id = StoredValue::new(vendor.id.clone());
                        let selected = Signal::derive(move || {
                            store_is_selected(&store, &group.get_value(), &vendor_id.get_value())
                        });
                        let on_toggle = move |_: ()| {
                            let (name, id) = (group.get_value(), vendor_id.get_value());
                            spawn_local(async move {
                                match commands::toggle_vendor(&name, &id).await {
                                    Ok(snapshot) => store_apply_snapshot(&store, snapshot),
                                    Err(e) => ctx.error("Could not update selection", e),
                                }
                            });
                        };
                        let on_request = move |_: ()| {
                            let (name, id) = (group.get_value(), vendor_id.get_value());
                            spawn_local(async move {
                                match commands::select_vendor(&name, &id).await {
                                    Ok(outcome) => handle_outcome(ctx, store, outcome, false).await,
                                    Err(e) => ctx.error("Could not request quote", e),
                                }
                            });
                        };
                        view! {
                            <VendorCard vendor=vendor selected=selected on_toggle=on_toggle on_request=on_request />
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
pub fn ServiceGroups() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let start_over = move |_| {
        spawn_local(async move {
            match commands::start_over().await {
                Ok(snapshot) => store_apply_snapshot(&store, snapshot),
                Err(e) => ctx.error("Could not start over", e),
            }
        });
    };

    let submit = move |_| {
        store.submitting().set(true);
        spawn_local(async move {
            match commands::submit_quote_requests().await {
                Ok(outcome) => handle_outcome(ctx, store, outcome, true).await,
                Err(e) => ctx.error("Could not submit requests", e),
            }
            store.submitting().set(false);
        });
    };

    let total_selected = move || store.selections().read().len();

    view! {
        <section class="service-groups">
            <div class="step-header">
                <button class="btn ghost" on:click=start_over>"← Start New Project"</button>
                <h1>"Your Matched Service Providers"</h1>
                <p class="lead">
                    "Based on your project requirements, here are the top professionals in each category. "
                    "Select the ones you'd like to receive quotes from."
                </p>
            </div>

            <For
                each=move || store.project().read().service_groups.clone()
                key=|name| name.clone()
                children=move |name| view! { <ServiceGroupCard group_name=name /> }
            />

            <div class="submit-bar">
                <span>{move || format!("{} vendors selected", total_selected())}</span>
                <button
                    class="btn primary"
                    disabled=move || total_selected() == 0 || store.submitting().get()
                    on:click=submit
                >
                    {move || if store.submitting().get() { "Submitting..." } else { "Request Quotes" }}
                </button>
            </div>
        </section>
    }
}
