//! Ticket Card Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::{Ticket, TicketStatus, ToastKind, VendorResponse};
use crate::store::{store_apply_snapshot, store_update_ticket, use_app_store};

fn badge_class(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Pending => "badge status-pending",
        TicketStatus::Quoted => "badge status-quoted",
        TicketStatus::Accepted => "badge status-accepted",
        TicketStatus::Declined => "badge status-declined",
        TicketStatus::Completed => "badge status-completed",
    }
}

#[component]
pub fn TicketCard(ticket: Ticket) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let ticket_id = StoredValue::new(ticket.id.clone());

    let respond = move |response: VendorResponse| {
        let id = ticket_id.get_value();
        spawn_local(async move {
            match commands::simulate_vendor_response(&id, &response).await {
                Ok(updated) => store_update_ticket(&store, updated),
                Err(e) => ctx.error("Could not update request", e),
            }
        });
    };

    let cancel = move |_| {
        let id = ticket_id.get_value();
        spawn_local(async move {
            match commands::cancel_ticket(&id).await {
                Ok(snapshot) => {
                    store_apply_snapshot(&store, snapshot);
                    ctx.notify(ToastKind::Info, "Request cancelled", "The vendor will not be contacted.");
                }
                Err(e) => ctx.error("Could not cancel", e),
            }
        });
    };

    let delete = move |_: ()| {
        let id = ticket_id.get_value();
        spawn_local(async move {
            match commands::delete_ticket(&id).await {
                Ok(snapshot) => store_apply_snapshot(&store, snapshot),
                Err(e) => ctx.error("Could not delete", e),
            }
        });
    };

    let status = ticket.status;
    let quoted_amount = ticket.quoted_amount.clone();
    let estimate = ticket.vendor.avg_price.clone();

    view! {
        <article class="card ticket-card">
            <header class="ticket-head">
                <div>
                    <h3>
                        {ticket.vendor.name.clone()}
                        {ticket.vendor.verified.then(|| view! { <span class="verified-mark">" ✓"</span> })}
                    </h3>
                    <span class="badge outline">{ticket.group_name.clone()}</span>
                    <span class=badge_class(status)>{status.badge()}</span>
                </div>
                <span class="muted">{ticket.created_at.format("%b %d, %Y").to_string()}</span>
            </header>

            <div class="vendor-facts inline">
                <span>"★ " {format!("{:.1}", ticket.vendor.rating)} " (" {ticket.vendor.reviews} ")"</span>
                <span>"📍 " {ticket.vendor.location.clone()}</span>
                <span>"💲 " {ticket.vendor.avg_price.clone()}</span>
                <span>"⏱ " {ticket.vendor.delivery_time.clone()}</span>
            </div>

            <div class="ticket-description">
                <h4>"Project Description"</h4>
                <p>{ticket.project_description.clone()}</p>
            </div>

            {(status == TicketStatus::Quoted).then(|| view! {
                <div class="quote-box">
                    <div>
                        <h4>"Quote Received"</h4>
                        <p class="quote-amount">{quoted_amount.clone().unwrap_or_default()}</p>
                    </div>
                    <button class="btn primary small" on:click=move |_| respond(VendorResponse::Accept)>"Accept"</button>
                    <button class="btn outline small" on:click=move |_| respond(VendorResponse::Decline { notes: None })>
                        "Decline"
                    </button>
                </div>
            })}

            {ticket.notes.clone().map(|notes| view! { <p class="ticket-notes">{notes}</p> })}

            <footer class="ticket-actions">
                {(status == TicketStatus::Pending).then(|| view! {
                    <button
                        class="btn outline small"
                        on:click=move |_| respond(VendorResponse::Quote {
                            amount: estimate.clone(),
                            notes: Some("Estimate based on your project details".to_string()),
                        })
                    >
                        "Simulate vendor quote"
                    </button>
                    <button class="btn outline small" on:click=cancel>"Cancel request"</button>
                })}
                {(status == TicketStatus::Accepted).then(|| view! {
                    <button class="btn outline small" on:click=move |_| respond(VendorResponse::Complete)>
                        "Mark completed"
                    </button>
                })}
                <DeleteConfirmButton label="Delete" on_confirm=delete />
            </footer>
        </article>
    }
}
