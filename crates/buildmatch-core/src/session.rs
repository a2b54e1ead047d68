//! Session Controller
//!
//! Single owner of one visitor's quote-flow state: wizard, vendor
//! selections, tickets, the auth gate and the signed-in identity.
//! Presentation code only ever sees `SessionSnapshot` copies.

use serde::{Deserialize, Serialize};

use crate::domain::{
    AuthGate, AuthRedirectState, DomainError, DomainResult, GateDecision, IntakeSubmission,
    PendingAction, ProjectData, Role, Route, Ticket, TicketBook, TicketSummary, Vendor, VendorResponse,
    VendorSelection, VendorSource, WizardStep, Wizard, QUOTE_REDIRECT_PATH,
};

/// Who is signed in, as far as the quote flow cares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: u32,
    pub email: String,
    pub role: Role,
}

/// Read-only view handed to the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub step: WizardStep,
    pub project: ProjectData,
    pub selections: Vec<VendorSelection>,
    pub tickets: Vec<Ticket>,
    pub summary: TicketSummary,
    pub auth_redirect: Option<AuthRedirectState>,
    pub pending_action: Option<PendingAction>,
    pub identity: Option<Identity>,
}

/// Result of a ticket-creating action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionOutcome {
    TicketsCreated { tickets: Vec<Ticket> },
    /// Parked behind sign-in; nothing was created
    AuthRequired { redirect: AuthRedirectState },
}

/// What happened to the parked action after sign-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResumeOutcome {
    Resumed { tickets: Vec<Ticket> },
    /// Nothing parked (or it was lost): no ticket is fabricated
    NothingPending,
}

/// Reply to sign-up / sign-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthOutcome {
    pub identity: Identity,
    /// Where the UI should navigate next
    pub destination: Route,
    pub resumed: ResumeOutcome,
    pub session: SessionSnapshot,
}

/// Drafted tickets waiting out the submission delay
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPlan {
    epoch: u64,
    tickets: Vec<Ticket>,
}

impl SubmissionPlan {
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuoteRequest {
    Ready(SubmissionPlan),
    AuthRequired(AuthRedirectState),
}

pub struct SessionController {
    vendors: Box<dyn VendorSource>,
    wizard: Wizard,
    selections: Vec<VendorSelection>,
    tickets: TicketBook,
    gate: AuthGate,
    identity: Option<Identity>,
    /// Bumped on reset, sign-out and user switch; stale submission plans are dropped
    epoch: u64,
}

impl SessionController {
    pub fn new(vendors: Box<dyn VendorSource>) -> Self {
        Self {
            vendors,
            wizard: Wizard::new(),
            selections: Vec::new(),
            tickets: TicketBook::new(),
            gate: AuthGate::new(),
            identity: None,
            epoch: 0,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn has_session(&self) -> bool {
        self.identity.is_some()
    }

    pub fn current_user_role(&self) -> Option<Role> {
        self.identity.as_ref().map(|i| i.role)
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.step()
    }

    pub fn tickets(&self) -> &[Ticket] {
        self.tickets.tickets()
    }

    pub fn vendors_for(&self, group_name: &str) -> Vec<Vendor> {
        self.vendors.vendors_for(group_name)
    }

    pub fn filter_tickets(&self, search_term: &str, status_filter: &str) -> Vec<Ticket> {
        self.tickets
            .filter(search_term, status_filter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            step: self.wizard.step(),
            project: self.wizard.project().clone(),
            selections: self.selections.clone(),
            tickets: self.tickets.tickets().to_vec(),
            summary: self.tickets.summary(),
            auth_redirect: self.gate.redirect_state().cloned(),
            pending_action: self.gate.pending().cloned(),
            identity: self.identity.clone(),
        }
    }

    // ========================================================================
    // Wizard
    // ========================================================================

    pub fn submit_description(&mut self, description: &str) -> DomainResult<WizardStep> {
        self.wizard.submit_description(description)
    }

    pub fn complete_intake(&mut self, submission: IntakeSubmission) -> DomainResult<WizardStep> {
        let step = self.wizard.complete_intake(submission)?;
        log::info!(
            "intake complete: {} service groups",
            self.wizard.project().service_groups.len()
        );
        Ok(step)
    }

    /// "Start over": back to initial, dropping project, selections, tickets
    /// and any parked sign-in detour
    pub fn reset(&mut self) {
        self.wizard.reset();
        self.selections.clear();
        self.tickets.clear();
        self.gate.abandon();
        self.epoch += 1;
        log::info!("session reset (epoch {})", self.epoch);
    }

    // ========================================================================
    // Vendor selection
    // ========================================================================

    /// Flip a vendor in or out of the pending quote selection; returns
    /// whether it is now selected
    pub fn toggle_selection(&mut self, group_name: &str, vendor_id: &str) -> DomainResult<bool> {
        self.lookup_vendor(group_name, vendor_id)?;

        if let Some(index) = self
            .selections
            .iter()
            .position(|s| s.group_name == group_name && s.vendor_id == vendor_id)
        {
            self.selections.remove(index);
            return Ok(false);
        }
        self.selections.push(VendorSelection {
            group_name: group_name.to_string(),
            vendor_id: vendor_id.to_string(),
        });
        Ok(true)
    }

    /// Request a quote from one vendor. Without a session the request is
    /// parked behind sign-in and nothing is created.
    pub fn select_vendor(&mut self, group_name: &str, vendor_id: &str) -> DomainResult<SelectionOutcome> {
        self.lookup_vendor(group_name, vendor_id)?;
        self.ensure_client()?;

        let action = PendingAction::SelectVendor {
            group_name: group_name.to_string(),
            vendor_id: vendor_id.to_string(),
        };
        match self.gate.guard(self.has_session(), action, QUOTE_REDIRECT_PATH) {
            GateDecision::Proceed(action) => {
                let tickets = self.run_action(action)?;
                Ok(SelectionOutcome::TicketsCreated { tickets })
            }
            GateDecision::Detour(redirect) => Ok(SelectionOutcome::AuthRequired { redirect }),
        }
    }

    /// Turn the current selection into a submission plan (or park it behind
    /// sign-in). The plan is committed separately, after the submission delay.
    pub fn request_quotes(&mut self) -> DomainResult<QuoteRequest> {
        if self.selections.is_empty() {
            return Err(DomainError::InvalidInput("Select at least one vendor".to_string()));
        }
        self.ensure_client()?;

        let action = PendingAction::SubmitSelections {
            selections: self.selections.clone(),
        };
        match self.gate.guard(self.has_session(), action, QUOTE_REDIRECT_PATH) {
            GateDecision::Proceed(_) => {
                let tickets = self.draft_tickets(&self.selections)?;
                Ok(QuoteRequest::Ready(SubmissionPlan { epoch: self.epoch, tickets }))
            }
            GateDecision::Detour(redirect) => Ok(QuoteRequest::AuthRequired(redirect)),
        }
    }

    /// Store a plan's tickets unless the session was reset, signed out or
    /// switched to another user since it was made
    pub fn commit_submission(&mut self, plan: SubmissionPlan) -> Vec<Ticket> {
        if plan.epoch != self.epoch {
            log::warn!(
                "dropping stale submission of {} tickets (epoch {} != {})",
                plan.tickets.len(),
                plan.epoch,
                self.epoch
            );
            return Vec::new();
        }
        self.selections.clear();
        self.tickets.extend(plan.tickets.iter().cloned());
        log::info!("committed {} quote tickets", plan.tickets.len());
        plan.tickets
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Record a fresh session and resume whatever was parked behind sign-in,
    /// using the project data held before the detour.
    pub fn on_authenticated(&mut self, identity: Identity) -> DomainResult<ResumeOutcome> {
        let role = identity.role;
        let switched = self
            .identity
            .as_ref()
            .is_some_and(|previous| previous.user_id != identity.user_id);
        if switched {
            // Tickets belong to the previous user
            self.tickets.clear();
            self.epoch += 1;
            log::info!("user switched to {} (epoch {})", identity.user_id, self.epoch);
        }
        self.identity = Some(identity);

        if role != Role::Client {
            self.gate.abandon();
            return Ok(ResumeOutcome::NothingPending);
        }

        match self.gate.resume() {
            Some(action) => {
                log::info!("resuming parked action after sign-in: {:?}", action);
                let tickets = self.run_action(action)?;
                Ok(ResumeOutcome::Resumed { tickets })
            }
            None => Ok(ResumeOutcome::NothingPending),
        }
    }

    /// User left the sign-in flow; the wizard is kept as-is
    pub fn abandon_auth(&mut self) {
        self.gate.abandon();
    }

    pub fn sign_out(&mut self) {
        self.identity = None;
        self.gate.abandon();
        self.tickets.clear();
        self.epoch += 1;
    }

    /// A sign-in attempt was turned down (wrong role). A visitor in the
    /// middle of a detour keeps the parked action; a session that was
    /// already signed in is signed out.
    pub fn reject_sign_in(&mut self) {
        if self.identity.is_some() {
            self.sign_out();
        }
    }

    /// Keep the session identity in step with a changed account email
    pub fn refresh_email(&mut self, email: &str) {
        if let Some(identity) = self.identity.as_mut() {
            identity.email = email.to_string();
        }
    }

    // ========================================================================
    // Tickets
    // ========================================================================

    pub fn delete_ticket(&mut self, ticket_id: &str) -> bool {
        self.tickets.delete(ticket_id)
    }

    pub fn cancel_ticket(&mut self, ticket_id: &str) -> bool {
        self.tickets.cancel(ticket_id)
    }

    /// Simulated vendor reply
    pub fn apply_vendor_response(&mut self, ticket_id: &str, response: VendorResponse) -> DomainResult<Ticket> {
        self.tickets
            .apply_vendor_response(ticket_id, response)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Ticket {}", ticket_id)))
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn lookup_vendor(&self, group_name: &str, vendor_id: &str) -> DomainResult<Vendor> {
        if self.wizard.step() != WizardStep::Services {
            return Err(DomainError::InvalidInput(
                "Vendors can only be selected once the questionnaire is complete".to_string(),
            ));
        }
        if !self.wizard.has_group(group_name) {
            return Err(DomainError::NotFound(format!("Service group '{}'", group_name)));
        }
        self.vendors
            .find(group_name, vendor_id)
            .ok_or_else(|| DomainError::NotFound(format!("Vendor '{}' in '{}'", vendor_id, group_name)))
    }

    /// Quote requests are a client-only action
    fn ensure_client(&self) -> DomainResult<()> {
        match self.current_user_role() {
            Some(Role::Vendor) => Err(DomainError::RoleMismatch {
                expected: Role::Client,
                actual: Role::Vendor,
            }),
            _ => Ok(()),
        }
    }

    fn draft_tickets(&self, selections: &[VendorSelection]) -> DomainResult<Vec<Ticket>> {
        let project = self.wizard.project();
        selections
            .iter()
            .map(|s| {
                let vendor = self.lookup_vendor(&s.group_name, &s.vendor_id)?;
                Ok(self.tickets.draft(
                    &s.group_name,
                    vendor,
                    &project.description,
                    project.form_data.clone(),
                ))
            })
            .collect()
    }

    fn run_action(&mut self, action: PendingAction) -> DomainResult<Vec<Ticket>> {
        match action {
            PendingAction::SelectVendor { group_name, vendor_id } => {
                let vendor = self.lookup_vendor(&group_name, &vendor_id)?;
                let project = self.wizard.project().clone();
                let ticket = self.tickets.create(
                    &group_name,
                    vendor,
                    &project.description,
                    project.form_data,
                );
                log::info!("created ticket {} for vendor {}", ticket.id, ticket.vendor.id);
                Ok(vec![ticket])
            }
            PendingAction::SubmitSelections { selections } => {
                let tickets = self.draft_tickets(&selections)?;
                self.tickets.extend(tickets.iter().cloned());
                self.selections.clear();
                Ok(tickets)
            }
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(Box::new(crate::domain::MockVendorSource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TicketStatus, STATUS_FILTER_ALL};

    fn client() -> Identity {
        Identity { user_id: 7, email: "ana@example.com".into(), role: Role::Client }
    }

    fn at_services(groups: &[&str]) -> SessionController {
        let mut session = SessionController::default();
        session.submit_description("3 bedroom house with garden").unwrap();
        session
            .complete_intake(IntakeSubmission {
                form_data: serde_json::json!({ "owns_land": false }),
                service_groups: groups.iter().map(|g| g.to_string()).collect(),
            })
            .unwrap();
        session
    }

    #[test]
    fn test_unauthenticated_selection_detours_then_resumes() {
        let mut session = SessionController::default();
        assert_eq!(session.submit_description("3 bedroom house with garden").unwrap(), WizardStep::Questionnaire);
        assert_eq!(
            session
                .complete_intake(IntakeSubmission {
                    form_data: serde_json::json!({}),
                    service_groups: vec!["Real Estate".into(), "Construction".into()],
                })
                .unwrap(),
            WizardStep::Services
        );

        match session.select_vendor("Real Estate", "1").unwrap() {
            SelectionOutcome::AuthRequired { redirect } => assert!(redirect.was_redirected_from_auth),
            other => panic!("expected auth detour, got {:?}", other),
        }
        assert!(session.tickets().is_empty());
        assert!(session.snapshot().pending_action.is_some());

        match session.on_authenticated(client()).unwrap() {
            ResumeOutcome::Resumed { tickets } => assert_eq!(tickets.len(), 1),
            other => panic!("expected resume, got {:?}", other),
        }
        let tickets = session.tickets();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].vendor.id, "1");
        assert_eq!(tickets[0].group_name, "Real Estate");
        assert_eq!(tickets[0].status, TicketStatus::Pending);
        assert_eq!(tickets[0].project_description, "3 bedroom house with garden");
        assert!(session.snapshot().pending_action.is_none());
    }

    #[test]
    fn test_authenticated_selection_creates_ticket_directly() {
        let mut session = at_services(&["Construction"]);
        session.on_authenticated(client()).unwrap();

        match session.select_vendor("Construction", "12").unwrap() {
            SelectionOutcome::TicketsCreated { tickets } => {
                assert_eq!(tickets[0].vendor.name, "Precision Construction");
                assert_eq!(tickets[0].form_data, Some(serde_json::json!({ "owns_land": false })));
            }
            other => panic!("expected ticket, got {:?}", other),
        }
    }

    #[test]
    fn test_sign_in_without_parked_action_creates_nothing() {
        let mut session = at_services(&["Real Estate"]);
        assert_eq!(session.on_authenticated(client()).unwrap(), ResumeOutcome::NothingPending);
        assert!(session.tickets().is_empty());
    }

    #[test]
    fn test_abandoned_sign_in_preserves_wizard() {
        let mut session = at_services(&["Real Estate"]);
        session.select_vendor("Real Estate", "2").unwrap();
        session.abandon_auth();

        assert_eq!(session.step(), WizardStep::Services);
        assert_eq!(session.snapshot().project.description, "3 bedroom house with garden");
        assert_eq!(session.on_authenticated(client()).unwrap(), ResumeOutcome::NothingPending);
        assert!(session.tickets().is_empty());
    }

    #[test]
    fn test_selection_requires_listed_vendor_in_services_step() {
        let mut session = SessionController::default();
        assert!(matches!(session.select_vendor("Real Estate", "1"), Err(DomainError::InvalidInput(_))));

        let mut session = at_services(&["Real Estate"]);
        assert!(matches!(session.select_vendor("Lawyer", "lawyer-1"), Err(DomainError::NotFound(_))));
        assert!(matches!(session.select_vendor("Real Estate", "11"), Err(DomainError::NotFound(_))));
        assert!(session.snapshot().pending_action.is_none());
    }

    #[test]
    fn test_vendor_accounts_cannot_request_quotes() {
        let mut session = at_services(&["Real Estate"]);
        session
            .on_authenticated(Identity { user_id: 2, email: "v@example.com".into(), role: Role::Vendor })
            .unwrap();
        assert!(matches!(
            session.select_vendor("Real Estate", "1"),
            Err(DomainError::RoleMismatch { expected: Role::Client, actual: Role::Vendor })
        ));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = at_services(&["Real Estate", "Lawyer"]);
        session.on_authenticated(client()).unwrap();
        session.select_vendor("Lawyer", "lawyer-4").unwrap();
        session.toggle_selection("Real Estate", "3").unwrap();

        session.reset();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.step, WizardStep::Initial);
        assert!(snapshot.project.description.is_empty());
        assert!(snapshot.tickets.is_empty());
        assert!(snapshot.selections.is_empty());
        // still signed in
        assert!(session.has_session());
    }

    #[test]
    fn test_toggle_selection() {
        let mut session = at_services(&["Real Estate"]);
        assert!(session.toggle_selection("Real Estate", "1").unwrap());
        assert!(session.toggle_selection("Real Estate", "4").unwrap());
        assert!(!session.toggle_selection("Real Estate", "1").unwrap());
        assert_eq!(session.snapshot().selections.len(), 1);
    }

    #[test]
    fn test_submit_selections_through_gate() {
        let mut session = at_services(&["Real Estate", "Construction"]);
        session.toggle_selection("Real Estate", "1").unwrap();
        session.toggle_selection("Construction", "15").unwrap();

        assert!(matches!(session.request_quotes().unwrap(), QuoteRequest::AuthRequired(_)));
        assert!(session.tickets().is_empty());

        match session.on_authenticated(client()).unwrap() {
            ResumeOutcome::Resumed { tickets } => assert_eq!(tickets.len(), 2),
            other => panic!("expected resume, got {:?}", other),
        }
        assert!(session.snapshot().selections.is_empty());
        assert_eq!(session.filter_tickets("green", STATUS_FILTER_ALL).len(), 1);
    }

    #[test]
    fn test_submission_plan_commits_once_per_epoch() {
        let mut session = at_services(&["Real Estate"]);
        session.on_authenticated(client()).unwrap();
        session.toggle_selection("Real Estate", "5").unwrap();

        let plan = match session.request_quotes().unwrap() {
            QuoteRequest::Ready(plan) => plan,
            other => panic!("expected plan, got {:?}", other),
        };
        assert_eq!(plan.tickets().len(), 1);
        assert!(session.tickets().is_empty());

        let committed = session.commit_submission(plan);
        assert_eq!(committed.len(), 1);
        assert_eq!(session.tickets().len(), 1);
    }

    #[test]
    fn test_reset_during_delay_drops_plan() {
        let mut session = at_services(&["Real Estate"]);
        session.on_authenticated(client()).unwrap();
        session.toggle_selection("Real Estate", "5").unwrap();

        let QuoteRequest::Ready(plan) = session.request_quotes().unwrap() else {
            panic!("expected plan");
        };
        session.reset();
        assert!(session.commit_submission(plan).is_empty());
        assert!(session.tickets().is_empty());
    }

    #[test]
    fn test_rejected_sign_in_keeps_parked_selection() {
        let mut session = at_services(&["Real Estate"]);
        session.select_vendor("Real Estate", "1").unwrap();
        assert!(session.snapshot().pending_action.is_some());

        // wrong login tab: the account turned out to be a vendor
        session.reject_sign_in();
        let snapshot = session.snapshot();
        assert!(snapshot.pending_action.is_some());
        assert!(snapshot.auth_redirect.is_some_and(|r| r.was_redirected_from_auth));
        assert_eq!(snapshot.step, WizardStep::Services);

        match session.on_authenticated(client()).unwrap() {
            ResumeOutcome::Resumed { tickets } => assert_eq!(tickets[0].vendor.id, "1"),
            other => panic!("expected resume, got {:?}", other),
        }
        assert_eq!(session.tickets().len(), 1);
    }

    #[test]
    fn test_rejected_sign_in_drops_existing_session() {
        let mut session = at_services(&["Real Estate"]);
        session.on_authenticated(client()).unwrap();
        session.toggle_selection("Real Estate", "2").unwrap();
        let QuoteRequest::Ready(plan) = session.request_quotes().unwrap() else {
            panic!("expected plan");
        };

        session.reject_sign_in();
        assert!(!session.has_session());
        assert!(session.commit_submission(plan).is_empty());
        assert!(session.tickets().is_empty());
    }

    #[test]
    fn test_sign_out_during_delay_drops_plan() {
        let mut session = at_services(&["Real Estate"]);
        session.on_authenticated(client()).unwrap();
        session.toggle_selection("Real Estate", "5").unwrap();
        let QuoteRequest::Ready(plan) = session.request_quotes().unwrap() else {
            panic!("expected plan");
        };

        session.sign_out();
        assert!(session.commit_submission(plan).is_empty());
        assert!(session.tickets().is_empty());
        assert_eq!(session.snapshot().summary.total, 0);
    }

    #[test]
    fn test_switching_user_drops_plan_and_tickets() {
        let mut session = at_services(&["Real Estate"]);
        session.on_authenticated(client()).unwrap();
        session.select_vendor("Real Estate", "3").unwrap();
        session.toggle_selection("Real Estate", "5").unwrap();
        let QuoteRequest::Ready(plan) = session.request_quotes().unwrap() else {
            panic!("expected plan");
        };

        let other = Identity { user_id: 8, email: "bo@example.com".into(), role: Role::Client };
        assert_eq!(session.on_authenticated(other).unwrap(), ResumeOutcome::NothingPending);
        assert!(session.commit_submission(plan).is_empty());
        assert!(session.tickets().is_empty());

        // same user signing in again keeps their tickets
        let mut session = at_services(&["Real Estate"]);
        session.on_authenticated(client()).unwrap();
        session.select_vendor("Real Estate", "3").unwrap();
        session.on_authenticated(client()).unwrap();
        assert_eq!(session.tickets().len(), 1);
    }

    #[test]
    fn test_refresh_email_updates_identity() {
        let mut session = SessionController::default();
        session.refresh_email("nobody@example.com");
        assert!(session.identity().is_none());

        session.on_authenticated(client()).unwrap();
        session.refresh_email("ana.new@example.com");
        assert_eq!(session.identity().map(|i| i.email.as_str()), Some("ana.new@example.com"));
        assert_eq!(session.snapshot().identity.map(|i| i.user_id), Some(7));
    }

    #[test]
    fn test_empty_selection_cannot_submit() {
        let mut session = at_services(&["Real Estate"]);
        assert!(matches!(session.request_quotes(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_delete_unknown_ticket_is_noop() {
        let mut session = at_services(&["Real Estate"]);
        session.on_authenticated(client()).unwrap();
        session.select_vendor("Real Estate", "1").unwrap();
        let before = session.snapshot().tickets;

        assert!(!session.delete_ticket("ticket-0-0"));
        assert_eq!(session.snapshot().tickets, before);
    }

    #[test]
    fn test_vendor_response_updates_status() {
        let mut session = at_services(&["Real Estate"]);
        session.on_authenticated(client()).unwrap();
        session.select_vendor("Real Estate", "1").unwrap();
        let id = session.tickets()[0].id.clone();

        let ticket = session
            .apply_vendor_response(&id, VendorResponse::Quote { amount: "$3,900".into(), notes: None })
            .unwrap();
        assert_eq!(ticket.status, TicketStatus::Quoted);
        assert_eq!(session.snapshot().summary.quoted, 1);
        assert!(session.apply_vendor_response("nope", VendorResponse::Accept).is_err());
    }
}
