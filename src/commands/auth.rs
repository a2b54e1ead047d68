//! Auth Commands

use serde::Serialize;

use super::{call, call_no_args};
use crate::models::{Access, AuthOutcome, Role, Route, SessionSnapshot, SignUpRequest};

#[derive(Serialize)]
struct SignUpArgs<'a> {
    request: &'a SignUpRequest,
}

#[derive(Serialize)]
struct SignInArgs<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "expectedRole")]
    expected_role: Role,
}

#[derive(Serialize)]
struct RouteArgs {
    route: Route,
}

pub async fn sign_up(request: &SignUpRequest) -> Result<AuthOutcome, String> {
    call("sign_up", &SignUpArgs { request }).await
}

pub async fn sign_in(email: &str, password: &str, expected_role: Role) -> Result<AuthOutcome, String> {
    call("sign_in", &SignInArgs { email, password, expected_role }).await
}

pub async fn sign_out() -> Result<SessionSnapshot, String> {
    call_no_args("sign_out").await
}

pub async fn abandon_auth() -> Result<SessionSnapshot, String> {
    call_no_args("abandon_auth").await
}

pub async fn check_access(route: Route) -> Result<Access, String> {
    call("check_access", &RouteArgs { route }).await
}
