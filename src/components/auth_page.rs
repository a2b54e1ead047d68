//! Auth Page
//!
//! Sign-in and sign-up for both account types. When opened from the quote
//! flow the page is locked to client accounts, and a successful sign-in
//! resumes the parked quote request.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{use_app_context, AppContext};
use crate::models::{AuthOutcome, BusinessDetails, ResumeOutcome, Role, Route, SignUpRequest, ToastKind};
use crate::store::{store_apply_snapshot, use_app_store, AppStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    SignIn,
    SignUp,
}

fn finish(ctx: AppContext, store: AppStore, outcome: AuthOutcome, title: &str) {
    store_apply_snapshot(&store, outcome.session);
    ctx.notify(ToastKind::Success, title, "You have been signed in successfully.");
    if let ResumeOutcome::Resumed { tickets } = &outcome.resumed {
        ctx.notify(
            ToastKind::Success,
            "Quote requested",
            format!("Your request went out to {} vendor(s).", tickets.len()),
        );
    }
    ctx.navigate(outcome.destination);
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let request = ctx.auth_request.get_untracked();
    let (tab, set_tab) = signal(AuthTab::SignIn);
    let (role, set_role) = signal(request.role);
    let (busy, set_busy) = signal(false);

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (business_name, set_business_name) = signal(String::new());
    let (vat_id, set_vat_id) = signal(String::new());
    let (business_address, set_business_address) = signal(String::new());

    let back = move |_| {
        spawn_local(async move {
            match commands::abandon_auth().await {
                Ok(snapshot) => store_apply_snapshot(&store, snapshot),
                Err(e) => ctx.error("Something went wrong", e),
            }
            ctx.navigate(Route::Home);
        });
    };

    let sign_in = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (email, password, expected) = (email.get(), password.get(), role.get());
        set_busy.set(true);
        spawn_local(async move {
            match commands::sign_in(&email, &password, expected).await {
                Ok(outcome) => finish(ctx, store, outcome, "Welcome back!"),
                Err(e) => ctx.error("Login failed", e),
            }
            set_busy.set(false);
        });
    };

    let sign_up = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let account_role = role.get();
        let request = SignUpRequest {
            email: email.get(),
            password: password.get(),
            full_name: full_name.get(),
            role: account_role,
            phone_number: optional(phone.get()),
            business: match account_role {
                Role::Vendor => BusinessDetails {
                    business_name: optional(business_name.get()),
                    vat_id: optional(vat_id.get()),
                    business_address: optional(business_address.get()),
                },
                Role::Client => BusinessDetails::default(),
            },
        };
        set_busy.set(true);
        spawn_local(async move {
            match commands::sign_up(&request).await {
                Ok(outcome) => finish(ctx, store, outcome, "Account created!"),
                Err(e) => ctx.error("Sign up failed", e),
            }
            set_busy.set(false);
        });
    };

    let text_input = move |kind: &'static str, placeholder: &'static str, value: ReadSignal<String>, set: WriteSignal<String>| {
        view! {
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <section class="auth-page">
            <button class="btn ghost" on:click=back>"← Back"</button>

            <div class="card auth-card">
                <Show when=move || request.from_quote>
                    <p class="notice">"Sign in or create a client account to send your quote requests."</p>
                </Show>

                <Show when=move || !request.from_quote>
                    <div class="segmented">
                        <button
                            class=move || if role.get() == Role::Client { "seg active" } else { "seg" }
                            on:click=move |_| set_role.set(Role::Client)
                        >
                            "I need services"
                        </button>
                        <button
                            class=move || if role.get() == Role::Vendor { "seg active" } else { "seg" }
                            on:click=move |_| set_role.set(Role::Vendor)
                        >
                            "I offer services"
                        </button>
                    </div>
                </Show>

                <div class="tabs">
                    <button
                        class=move || if tab.get() == AuthTab::SignIn { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(AuthTab::SignIn)
                    >
                        "Sign In"
                    </button>
                    <button
                        class=move || if tab.get() == AuthTab::SignUp { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(AuthTab::SignUp)
                    >
                        "Sign Up"
                    </button>
                </div>

                {move || match tab.get() {
                    AuthTab::SignIn => view! {
                        <form class="auth-form" on:submit=sign_in>
                            {text_input("email", "Email", email, set_email)}
                            {text_input("password", "Password", password, set_password)}
                            <button type="submit" class="btn primary wide" disabled=move || busy.get()>
                                {move || format!("Sign in as {}", role.get().as_str())}
                            </button>
                        </form>
                    }
                    .into_any(),
                    AuthTab::SignUp => view! {
                        <form class="auth-form" on:submit=sign_up>
                            {text_input("text", "Full name", full_name, set_full_name)}
                            {text_input("email", "Email", email, set_email)}
                            {text_input("password", "Password (min. 6 characters)", password, set_password)}
                            {text_input("tel", "Phone (optional)", phone, set_phone)}
                            <Show when=move || role.get() == Role::Vendor>
                                <h3>"Business details"</h3>
                                {text_input("text", "Business name", business_name, set_business_name)}
                                {text_input("text", "VAT ID", vat_id, set_vat_id)}
                                {text_input("text", "Business address", business_address, set_business_address)}
                            </Show>
                            <button type="submit" class="btn primary wide" disabled=move || busy.get()>
                                {move || format!("Create {} account", role.get().as_str())}
                            </button>
                        </form>
                    }
                    .into_any(),
                }}
            </div>
        </section>
    }
}
