//! Delivery Time Slider
//!
//! Range input over the seven delivery buckets. The thumb always snaps to
//! a bucket; dragging reports the snapped value.

use leptos::prelude::*;

use crate::models::{DeliveryTime, DeliveryTimeControl};

#[component]
pub fn DeliveryTimeSlider(
    initial: DeliveryTime,
    #[prop(into)] on_change: Callback<DeliveryTime>,
) -> impl IntoView {
    let control = RwSignal::new(DeliveryTimeControl::new(initial));

    let on_input = move |ev: web_sys::Event| {
        // NaN (unparseable) snaps to the first bucket
        let percentage = event_target_value(&ev).parse::<f64>().unwrap_or(f64::NAN);
        let picked = control.write().drag_to(percentage);
        on_change.run(picked);
    };

    view! {
        <div class="delivery-slider">
            <div class="slider-track">
                <input
                    type="range"
                    min="0"
                    max="100"
                    step=DeliveryTime::step().to_string()
                    prop:value=move || control.get().percentage().to_string()
                    on:input=on_input
                />
                <div
                    class="slider-fill"
                    style:width=move || format!("{}%", control.get().percentage())
                ></div>
            </div>
            <div class="slider-label">
                <span class="pill">{move || control.get().value().label()}</span>
            </div>
        </div>
    }
}
