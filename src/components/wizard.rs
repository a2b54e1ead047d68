//! Wizard page: renders the current step

use leptos::prelude::*;

use crate::components::{DescriptionForm, Questionnaire, ServiceGroups};
use crate::models::WizardStep;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Wizard() -> impl IntoView {
    let store = use_app_store();

    move || match store.step().get() {
        WizardStep::Initial => view! { <DescriptionForm /> }.into_any(),
        WizardStep::Questionnaire => view! { <Questionnaire /> }.into_any(),
        WizardStep::Services => view! { <ServiceGroups /> }.into_any(),
    }
}
