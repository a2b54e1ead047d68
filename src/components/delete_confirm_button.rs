//! Delete Confirm Button Component
//!
//! Inline two-step delete: a "Delete" button that turns into confirm/cancel.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `label` - text on the initial button
/// * `on_confirm` - runs once the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="btn ghost danger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete this request?"</span>
                <button
                    class="btn small danger"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Delete"
                </button>
                <button
                    class="btn small ghost"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "Keep"
                </button>
            </span>
        </Show>
    }
}
