//! Ticket Commands

use serde::Serialize;

use super::call;
use crate::models::{SessionSnapshot, Ticket, VendorResponse};

#[derive(Serialize)]
struct TicketIdArgs<'a> {
    #[serde(rename = "ticketId")]
    ticket_id: &'a str,
}

#[derive(Serialize)]
struct VendorResponseArgs<'a> {
    #[serde(rename = "ticketId")]
    ticket_id: &'a str,
    response: &'a VendorResponse,
}

pub async fn delete_ticket(ticket_id: &str) -> Result<SessionSnapshot, String> {
    call("delete_ticket", &TicketIdArgs { ticket_id }).await
}

pub async fn cancel_ticket(ticket_id: &str) -> Result<SessionSnapshot, String> {
    call("cancel_ticket", &TicketIdArgs { ticket_id }).await
}

pub async fn simulate_vendor_response(ticket_id: &str, response: &VendorResponse) -> Result<Ticket, String> {
    call("simulate_vendor_response", &VendorResponseArgs { ticket_id, response }).await
}
