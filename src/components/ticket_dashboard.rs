//! Ticket Dashboard
//!
//! The client's quote requests with search, status filter and summary
//! counts. Filtering runs locally on the mirrored ticket list.

use leptos::prelude::*;

use buildmatch_core::domain::{filter_tickets, STATUS_FILTER_ALL};

use crate::components::TicketCard;
use crate::context::use_app_context;
use crate::models::{Route, Ticket, TicketStatus};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TicketDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (search_term, set_search_term) = signal(String::new());
    let (status_filter, set_status_filter) = signal(STATUS_FILTER_ALL.to_string());

    let filtered = Memo::new(move |_| {
        let tickets = store.tickets().read();
        filter_tickets(&tickets, &search_term.get(), &status_filter.get())
            .into_iter()
            .cloned()
            .collect::<Vec<Ticket>>()
    });
    let is_filtering = move || !search_term.get().is_empty() || status_filter.get() != STATUS_FILTER_ALL;

    view! {
        <section class="ticket-dashboard">
            <div class="step-header">
                <h1>"Your Quote Requests"</h1>
                <button class="btn ghost" on:click=move |_| ctx.navigate(Route::Home)>"← Back to Project"</button>
            </div>

            <div class="filters">
                <input
                    type="search"
                    placeholder="Search vendors or services..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_status_filter.set(event_target_value(&ev))>
                    <option value=STATUS_FILTER_ALL selected=move || status_filter.get() == STATUS_FILTER_ALL>
                        "All statuses"
                    </option>
                    {TicketStatus::ALL.into_iter().map(|status| view! {
                        <option value=status.as_str() selected=move || status_filter.get() == status.as_str()>
                            {status.badge()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <div class="summary-grid">
                <div class="card stat"><strong>{move || store.summary().get().total}</strong><span>"Total Requests"</span></div>
                <div class="card stat"><strong>{move || store.summary().get().pending}</strong><span>"Pending"</span></div>
                <div class="card stat"><strong>{move || store.summary().get().quoted}</strong><span>"Quoted"</span></div>
                <div class="card stat"><strong>{move || store.summary().get().accepted}</strong><span>"Accepted"</span></div>
            </div>

            <Show
                when=move || !filtered.get().is_empty()
                fallback=move || view! {
                    <div class="card empty-state">
                        <h3>"No tickets found"</h3>
                        <p class="muted">
                            {move || if is_filtering() {
                                "Try adjusting your search or filter criteria"
                            } else {
                                "Start by creating a new project to generate quote tickets"
                            }}
                        </p>
                        <button class="btn primary" on:click=move |_| ctx.navigate(Route::Home)>"Create New Project"</button>
                    </div>
                }
            >
                <For
                    each=move || filtered.get()
                    key=|ticket| (ticket.id.clone(), ticket.status.as_str())
                    children=move |ticket| view! { <TicketCard ticket=ticket /> }
                />
            </Show>
        </section>
    }
}
