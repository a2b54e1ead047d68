//! Project Description Form
//!
//! First wizard step: free-text description plus example prompts.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{store_apply_snapshot, use_app_store, AppStateStoreFields};

const EXAMPLES: &[&str] = &[
    "Modern 4-bedroom family home with open kitchen",
    "Small guest house with sustainable materials",
    "Pool renovation with landscaping",
    "Office building with parking garage",
];

#[component]
pub fn DescriptionForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (description, set_description) = signal(store.project().read_untracked().description.clone());
    let is_blank = move || description.get().trim().is_empty();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_blank() {
            return;
        }
        let text = description.get();
        spawn_local(async move {
            match commands::submit_description(&text).await {
                Ok(snapshot) => store_apply_snapshot(&store, snapshot),
                Err(e) => ctx.error("Could not start project", e),
            }
        });
    };

    view! {
        <section class="hero">
            <h1>"I want to build " <span class="accent">"anything"</span></h1>
            <p class="lead">
                "Describe your dream project and we'll connect you with the professionals to make it happen."
            </p>

            <form class="card description-form" on:submit=submit>
                <label class="hint">"Project description"</label>
                <textarea
                    placeholder="3 bedroom house with garden, pool, 2 baths..."
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn primary wide" disabled=is_blank>
                    "Start My Project Journey →"
                </button>
            </form>

            <div class="examples">
                <h2>"Try these examples:"</h2>
                <div class="example-list">
                    {EXAMPLES.iter().map(|example| {
                        let text = example.to_string();
                        view! {
                            <button type="button" class="btn outline small" on:click=move |_| set_description.set(text.clone())>
                                {*example}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
