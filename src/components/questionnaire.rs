//! Questionnaire
//!
//! Second wizard step. The answers decide which service categories the
//! client gets matched with; the list is previewed live.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DeliveryTimeSlider;
use crate::context::use_app_context;
use crate::models::{DeliveryTime, IntakeAnswers, ProjectFeature, ProjectType};
use crate::store::{store_apply_snapshot, use_app_store, AppStateStoreFields};

#[component]
pub fn Questionnaire() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let answers = RwSignal::new(IntakeAnswers::default());
    let (submitting, set_submitting) = signal(false);

    let start_over = move |_| {
        spawn_local(async move {
            match commands::start_over().await {
                Ok(snapshot) => store_apply_snapshot(&store, snapshot),
                Err(e) => ctx.error("Could not start over", e),
            }
        });
    };

    let toggle_feature = move |feature: ProjectFeature| {
        answers.update(|a| {
            if let Some(index) = a.features.iter().position(|f| *f == feature) {
                a.features.remove(index);
            } else {
                a.features.push(feature);
            }
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = answers.get();
        set_submitting.set(true);
        spawn_local(async move {
            match commands::complete_intake(&current).await {
                Ok(snapshot) => store_apply_snapshot(&store, snapshot),
                Err(e) => ctx.error("Please check your answers", e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="questionnaire">
            <div class="step-header">
                <button class="btn ghost" on:click=start_over>"← Back to Start"</button>
                <h1>"Let's Get More Details"</h1>
                <p class="lead">
                    "A few more details help us match you with the right professionals for:"
                    <span class="quote">{move || format!("\"{}\"", store.project().read().description)}</span>
                </p>
            </div>

            <form class="card" on:submit=submit>
                <fieldset>
                    <legend>"What are you building?"</legend>
                    <div class="choice-grid">
                        {ProjectType::ALL.iter().map(|&project_type| view! {
                            <label class="choice">
                                <input
                                    type="radio"
                                    name="project-type"
                                    prop:checked=move || answers.read().project_type == project_type
                                    on:change=move |_| answers.update(|a| a.project_type = project_type)
                                />
                                {project_type.label()}
                            </label>
                        }).collect_view()}
                    </div>
                </fieldset>

                <fieldset>
                    <legend>"Land and legal"</legend>
                    <label class="choice">
                        <input
                            type="checkbox"
                            prop:checked=move || answers.read().owns_land
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                answers.update(|a| a.owns_land = checked);
                            }
                        />
                        "I already own the land"
                    </label>
                    <label class="choice">
                        <input
                            type="checkbox"
                            prop:checked=move || answers.read().needs_legal
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                answers.update(|a| a.needs_legal = checked);
                            }
                        />
                        "I need help with permits or contracts"
                    </label>
                </fieldset>

                <fieldset>
                    <legend>"Extras"</legend>
                    <div class="chip-list">
                        {ProjectFeature::ALL.iter().map(|&feature| view! {
                            <button
                                type="button"
                                class=move || if answers.read().features.contains(&feature) { "chip active" } else { "chip" }
                                on:click=move |_| toggle_feature(feature)
                            >
                                {feature.label()}
                            </button>
                        }).collect_view()}
                    </div>
                </fieldset>

                <fieldset>
                    <legend>"When do you need it delivered?"</legend>
                    <DeliveryTimeSlider
                        initial=answers.get_untracked().delivery_time
                        on_change=move |picked: DeliveryTime| answers.update(|a| a.delivery_time = picked)
                    />
                </fieldset>

                <fieldset>
                    <legend>"Budget (optional)"</legend>
                    <input
                        type="text"
                        placeholder="e.g. $400k"
                        prop:value=move || answers.read().budget.clone().unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            answers.update(|a| {
                                a.budget = if value.trim().is_empty() { None } else { Some(value) };
                            });
                        }
                    />
                </fieldset>

                <div class="match-preview">
                    <span class="hint">"We'll match you with: "</span>
                    {move || answers.read().service_groups().join(", ")}
                </div>

                <button type="submit" class="btn primary wide" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Matching..." } else { "Find My Professionals →" }}
                </button>
            </form>
        </section>
    }
}
