//! One vendor listing inside a service group

use leptos::prelude::*;

use crate::models::Vendor;

#[component]
pub fn VendorCard(
    vendor: Vendor,
    #[prop(into)] selected: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_request: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=move || if selected.get() { "vendor-card selected" } else { "vendor-card" }>
            <div class="vendor-head">
                <h3>{vendor.name.clone()}</h3>
                {vendor.verified.then(|| view! { <span class="badge verified">"✓ Verified"</span> })}
            </div>
            <div class="vendor-rating">
                <span class="stars">"★ " {format!("{:.1}", vendor.rating)}</span>
                <span class="muted">{format!("({} reviews)", vendor.reviews)}</span>
            </div>
            <ul class="vendor-facts">
                <li>"📍 " {vendor.location.clone()}</li>
                <li>"🏷 " {vendor.specialty.clone()}</li>
                <li>"💲 " {vendor.avg_price.clone()}</li>
                <li>"⏱ " {vendor.delivery_time.clone()}</li>
            </ul>
            <div class="vendor-actions">
                <button
                    class=move || if selected.get() { "btn primary small" } else { "btn outline small" }
                    on:click=move |_| on_toggle.run(())
                >
                    {move || if selected.get() { "Selected" } else { "Select" }}
                </button>
                <button class="btn ghost small" on:click=move |_| on_request.run(())>
                    "Request quote now"
                </button>
            </div>
        </div>
    }
}
