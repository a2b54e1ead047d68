//! Wizard / Session Commands

use serde::Serialize;

use super::{call, call_no_args};
use crate::models::{IntakeAnswers, SelectionOutcome, SessionSnapshot, Vendor};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct DescriptionArgs<'a> {
    description: &'a str,
}

#[derive(Serialize)]
struct IntakeArgs<'a> {
    answers: &'a IntakeAnswers,
}

#[derive(Serialize)]
struct GroupArgs<'a> {
    #[serde(rename = "groupName")]
    group_name: &'a str,
}

#[derive(Serialize)]
struct VendorArgs<'a> {
    #[serde(rename = "groupName")]
    group_name: &'a str,
    #[serde(rename = "vendorId")]
    vendor_id: &'a str,
}

// ========================
// Commands
// ========================

pub async fn get_session() -> Result<SessionSnapshot, String> {
    call_no_args("get_session").await
}

pub async fn submit_description(description: &str) -> Result<SessionSnapshot, String> {
    call("submit_description", &DescriptionArgs { description }).await
}

pub async fn complete_intake(answers: &IntakeAnswers) -> Result<SessionSnapshot, String> {
    call("complete_intake", &IntakeArgs { answers }).await
}

pub async fn list_vendors(group_name: &str) -> Result<Vec<Vendor>, String> {
    call("list_vendors", &GroupArgs { group_name }).await
}

pub async fn toggle_vendor(group_name: &str, vendor_id: &str) -> Result<SessionSnapshot, String> {
    call("toggle_vendor", &VendorArgs { group_name, vendor_id }).await
}

pub async fn select_vendor(group_name: &str, vendor_id: &str) -> Result<SelectionOutcome, String> {
    call("select_vendor", &VendorArgs { group_name, vendor_id }).await
}

pub async fn submit_quote_requests() -> Result<SelectionOutcome, String> {
    call_no_args("submit_quote_requests").await
}

pub async fn start_over() -> Result<SessionSnapshot, String> {
    call_no_args("start_over").await
}
