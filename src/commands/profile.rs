//! Profile Commands

use serde::Serialize;

use super::{call, call_no_args};
use crate::models::{ProfileUpdate, ProfileView, VendorProfileUpdate};

#[derive(Serialize)]
struct ProfileUpdateArgs<'a> {
    update: &'a ProfileUpdate,
}

#[derive(Serialize)]
struct VendorProfileUpdateArgs<'a> {
    update: &'a VendorProfileUpdate,
}

pub async fn get_profile() -> Result<ProfileView, String> {
    call_no_args("get_profile").await
}

pub async fn update_profile(update: &ProfileUpdate) -> Result<ProfileView, String> {
    call("update_profile", &ProfileUpdateArgs { update }).await
}

pub async fn update_vendor_profile(update: &VendorProfileUpdate) -> Result<ProfileView, String> {
    call("update_vendor_profile", &VendorProfileUpdateArgs { update }).await
}
