//! Ticket Entity and Lifecycle
//!
//! A ticket is a client's quote request to one vendor under one category.
//! Tickets live in memory for the session only.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::vendor::Vendor;

/// Status filter value that matches every ticket
pub const STATUS_FILTER_ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    Pending,
    Quoted,
    Accepted,
    Declined,
    Completed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 5] = [
        TicketStatus::Pending,
        TicketStatus::Quoted,
        TicketStatus::Accepted,
        TicketStatus::Declined,
        TicketStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "pending",
            TicketStatus::Quoted => "quoted",
            TicketStatus::Accepted => "accepted",
            TicketStatus::Declined => "declined",
            TicketStatus::Completed => "completed",
        }
    }

    /// Dashboard badge text
    pub fn badge(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "Pending Quote",
            TicketStatus::Quoted => "Quote Received",
            TicketStatus::Accepted => "Accepted",
            TicketStatus::Declined => "Declined",
            TicketStatus::Completed => "Completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub group_name: String,
    pub vendor: Vendor,
    pub project_description: String,
    pub form_data: Option<serde_json::Value>,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub quoted_amount: Option<String>,
    pub notes: Option<String>,
}

impl Entity for Ticket {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// Simulated vendor reply; the only way a ticket's status changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VendorResponse {
    Quote { amount: String, notes: Option<String> },
    Decline { notes: Option<String> },
    Accept,
    Complete,
}

/// Counts shown above the ticket list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TicketSummary {
    pub total: usize,
    pub pending: usize,
    pub quoted: usize,
    pub accepted: usize,
}

/// Tickets matching a search term and a status filter, in input order.
///
/// The term matches the vendor name or group name case-insensitively; the
/// status filter is either "all" or a status name.
pub fn filter_tickets<'a>(tickets: &'a [Ticket], search_term: &str, status_filter: &str) -> Vec<&'a Ticket> {
    let term = search_term.to_lowercase();
    tickets
        .iter()
        .filter(|t| {
            t.vendor.name.to_lowercase().contains(&term) || t.group_name.to_lowercase().contains(&term)
        })
        .filter(|t| status_filter == STATUS_FILTER_ALL || t.status.as_str() == status_filter)
        .collect()
}

pub fn summarize(tickets: &[Ticket]) -> TicketSummary {
    let count = |status: TicketStatus| tickets.iter().filter(|t| t.status == status).count();
    TicketSummary {
        total: tickets.len(),
        pending: count(TicketStatus::Pending),
        quoted: count(TicketStatus::Quoted),
        accepted: count(TicketStatus::Accepted),
    }
}

/// The session's ticket set
#[derive(Debug, Default)]
pub struct TicketBook {
    tickets: Vec<Ticket>,
    seq: AtomicU64,
}

impl TicketBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Unique per book: wall clock plus a monotonic sequence number
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        format!("ticket-{}-{}", now.timestamp_millis(), seq)
    }

    /// Build a pending ticket without storing it
    pub fn draft(
        &self,
        group_name: &str,
        vendor: Vendor,
        project_description: &str,
        form_data: Option<serde_json::Value>,
    ) -> Ticket {
        let now = Utc::now();
        Ticket {
            id: self.next_id(now),
            group_name: group_name.to_string(),
            vendor,
            project_description: project_description.to_string(),
            form_data,
            status: TicketStatus::Pending,
            created_at: now,
            quoted_amount: None,
            notes: None,
        }
    }

    /// Create and store a pending ticket
    pub fn create(
        &mut self,
        group_name: &str,
        vendor: Vendor,
        project_description: &str,
        form_data: Option<serde_json::Value>,
    ) -> Ticket {
        let ticket = self.draft(group_name, vendor, project_description, form_data);
        self.tickets.push(ticket.clone());
        ticket
    }

    /// Store previously drafted tickets
    pub fn extend(&mut self, tickets: impl IntoIterator<Item = Ticket>) {
        self.tickets.extend(tickets);
    }

    pub fn filter(&self, search_term: &str, status_filter: &str) -> Vec<&Ticket> {
        filter_tickets(&self.tickets, search_term, status_filter)
    }

    /// Remove the ticket with this ID. Absent IDs are a no-op; returns
    /// whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.tickets.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tickets.remove(index);
                true
            }
            None => false,
        }
    }

    /// Withdraw a request that no vendor has answered yet
    pub fn cancel(&mut self, id: &str) -> bool {
        let pending = self
            .get(id)
            .map(|t| t.status == TicketStatus::Pending)
            .unwrap_or(false);
        pending && self.delete(id)
    }

    /// Record a simulated vendor reply. Returns the updated ticket, or `None`
    /// if the ID is unknown.
    pub fn apply_vendor_response(&mut self, id: &str, response: VendorResponse) -> Option<&Ticket> {
        let ticket = self.tickets.iter_mut().find(|t| t.id == id)?;
        match response {
            VendorResponse::Quote { amount, notes } => {
                ticket.status = TicketStatus::Quoted;
                ticket.quoted_amount = Some(amount);
                ticket.notes = notes;
            }
            VendorResponse::Decline { notes } => {
                ticket.status = TicketStatus::Declined;
                ticket.notes = notes;
            }
            VendorResponse::Accept => ticket.status = TicketStatus::Accepted,
            VendorResponse::Complete => ticket.status = TicketStatus::Completed,
        }
        Some(ticket)
    }

    pub fn summary(&self) -> TicketSummary {
        summarize(&self.tickets)
    }

    pub fn clear(&mut self) {
        self.tickets.clear();
    }
}
