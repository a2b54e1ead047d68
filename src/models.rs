//! Frontend Models
//!
//! Wire types come straight from `buildmatch-core`; only UI-local types
//! live here.

pub use buildmatch_core::domain::{
    Access, AuthRedirectState, BusinessDetails, DeliveryTime, DeliveryTimeControl, IntakeAnswers,
    ProfileUpdate, ProfileView, ProjectFeature, ProjectType, Role, Route, SignUpRequest, Ticket,
    TicketStatus, TicketSummary, Vendor, VendorProfileUpdate, VendorResponse, WizardStep,
};
pub use buildmatch_core::{AuthOutcome, Identity, ResumeOutcome, SelectionOutcome, SessionSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Info => "toast info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// How the auth page was opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthRequest {
    /// Account type the page is for (`?type=`)
    pub role: Role,
    /// Came from the quote flow (`?redirect=quote`)
    pub from_quote: bool,
}
