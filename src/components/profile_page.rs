//! Profile Page
//!
//! Personal details for every account, business details for vendors.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::{ProfileUpdate, ProfileView, ToastKind, VendorProfileUpdate};

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();

    let (view_data, set_view_data) = signal(None::<ProfileView>);
    let full_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let business_name = RwSignal::new(String::new());
    let vat_id = RwSignal::new(String::new());
    let business_address = RwSignal::new(String::new());

    let load = move |data: ProfileView| {
        full_name.set(data.profile.full_name.clone());
        phone.set(data.profile.phone_number.clone().unwrap_or_default());
        address.set(data.profile.address.clone().unwrap_or_default());
        email.set(data.profile.email.clone());
        if let Some(vendor) = &data.vendor_profile {
            business_name.set(vendor.business_name.clone());
            vat_id.set(vendor.vat_id.clone());
            business_address.set(vendor.business_address.clone());
        }
        set_view_data.set(Some(data));
    };

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_profile().await {
                Ok(data) => load(data),
                Err(e) => ctx.error("Could not load profile", e),
            }
        });
    });

    let save_profile = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = ProfileUpdate {
            full_name: full_name.get(),
            phone_number: optional(phone.get()),
            address: optional(address.get()),
            email: email.get(),
        };
        spawn_local(async move {
            match commands::update_profile(&update).await {
                Ok(data) => {
                    load(data);
                    ctx.notify(ToastKind::Success, "Profile updated", "Your changes have been saved.");
                }
                Err(e) => ctx.error("Update failed", e),
            }
        });
    };

    let save_business = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = VendorProfileUpdate {
            business_name: business_name.get(),
            vat_id: vat_id.get(),
            business_address: business_address.get(),
        };
        spawn_local(async move {
            match commands::update_vendor_profile(&update).await {
                Ok(data) => {
                    load(data);
                    ctx.notify(ToastKind::Success, "Business profile updated", "Your changes have been saved.");
                }
                Err(e) => ctx.error("Update failed", e),
            }
        });
    };

    let can_change_email = move || view_data.get().map(|d| d.can_change_email).unwrap_or(false);
    let is_vendor = move || view_data.get().map(|d| d.vendor_profile.is_some()).unwrap_or(false);

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <section class="profile-page">
            <div class="step-header">
                <h1>"Your Profile"</h1>
            </div>

            <form class="card" on:submit=save_profile>
                <h2>"Personal details"</h2>
                {field("Full name", "text", full_name)}
                {field("Phone", "tel", phone)}
                {field("Address", "text", address)}
                <label class="field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        prop:disabled=move || !can_change_email()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || !can_change_email()>
                        <small class="muted">"Email can only be changed once every 30 days."</small>
                    </Show>
                </label>
                <button type="submit" class="btn primary">"Save changes"</button>
            </form>

            <Show when=is_vendor>
                <form class="card" on:submit=save_business>
                    <h2>"Business details"</h2>
                    {field("Business name", "text", business_name)}
                    {field("VAT ID", "text", vat_id)}
                    {field("Business address", "text", business_address)}
                    <button type="submit" class="btn primary">"Save business details"</button>
                </form>
            </Show>
        </section>
    }
}
