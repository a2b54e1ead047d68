//! Domain Layer
//!
//! Entities, value types and the small state machines of the quote flow.
//! This layer has no I/O (serde, chrono and regex only) and compiles to WASM.

mod entity;
mod vendor;
mod delivery;
mod intake;
mod wizard;
mod ticket;
mod profile;
mod auth_gate;
mod access;

pub use entity::{Entity, DomainError, DomainResult};
pub use vendor::{
    category_seed, curated_vendors, generate_vendors, MockVendorSource, Vendor, VendorSource,
    CURATED_CATEGORIES, VENDORS_PER_CATEGORY,
};
pub use delivery::{DeliveryTime, DeliveryTimeControl};
pub use intake::{IntakeAnswers, IntakeSubmission, ProjectFeature, ProjectType};
pub use wizard::{ProjectData, Wizard, WizardStep};
pub use ticket::{
    filter_tickets, summarize, Ticket, TicketBook, TicketStatus, TicketSummary, VendorResponse,
    STATUS_FILTER_ALL,
};
pub use profile::{
    validate_email, validate_password, BusinessDetails, Profile, ProfileUpdate, ProfileView, Role,
    SignUpRequest, VendorProfile, VendorProfileUpdate,
};
pub use auth_gate::{
    AuthGate, AuthRedirectState, GateDecision, PendingAction, VendorSelection, QUOTE_REDIRECT_PATH,
};
pub use access::{check_access, home_for, post_auth_destination, Access, Route};
